use strum::Display;

use crate::generator::ast::BuilderModule;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub declarations_seen: usize,
  pub builders_generated: usize,
  pub fields_generated: usize,
  pub deferred_fields: usize,
  pub guarded_branches: usize,
  pub factories_generated: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_declaration(&mut self) {
    self.declarations_seen += 1;
  }

  pub fn record_builder(&mut self, module: &BuilderModule) {
    let builder = &module.builder;
    self.builders_generated += 1;
    self.fields_generated += builder.properties.len();
    self.deferred_fields += builder.properties.iter().filter(|prop| prop.is_deferred()).count();
    self.guarded_branches += builder.build_function.body.branch_count();
    if module.factory.is_some() {
      self.factories_generated += 1;
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }

  #[must_use]
  pub fn skipped_count(&self) -> usize {
    self.warnings.iter().filter(|warning| warning.is_skipped_item()).count()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Skipped '{declaration}': {error}")]
  DeclarationSkipped { declaration: String, error: String },
  #[strum(to_string = "'{declaration}.{field}': alias target '{target}' is unknown, using the declared type")]
  UnresolvedAlias {
    declaration: String,
    field: String,
    target: String,
  },
  #[strum(to_string = "'{declaration}': markers reference unknown field '{field}'")]
  UnknownMarkerField { declaration: String, field: String },
  #[strum(to_string = "'{declaration}.{field}': unbalanced generic brackets in '{declared_type}'")]
  MalformedGenerics {
    declaration: String,
    field: String,
    declared_type: String,
  },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::DeclarationSkipped { .. })
  }
}
