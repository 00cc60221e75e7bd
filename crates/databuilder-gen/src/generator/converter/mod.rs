mod builder;
pub mod combinations;
mod fields;
pub mod type_classifier;

#[cfg(test)]
mod tests;

use databuilder_host::{DeclarationSource, TypeResolver};
use strum::Display;

pub use self::{
  builder::BuilderSynthesizer,
  fields::{FieldConversion, FieldConverter},
};
use super::{
  ast::{BuilderModule, FieldDef},
  errors::GenerationError,
  metrics::GenerationWarning,
};

pub const DEFAULT_FACTORY_NAME: &str = "builder";
pub const DEFAULT_BUILDER_SUFFIX: &str = "Builder";
pub const DEFAULT_FILE_SUFFIX: &str = "Extension";

/// Prefix of the generated fluent setters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SetterStyle {
  #[default]
  Set,
  With,
}

impl SetterStyle {
  #[must_use]
  pub const fn prefix(self) -> &'static str {
    match self {
      SetterStyle::Set => "set",
      SetterStyle::With => "with",
    }
  }
}

/// Naming knobs for generated builders.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct BuilderConfig {
  #[builder(default)]
  pub setter_style: SetterStyle,
  #[builder(into, default = DEFAULT_FACTORY_NAME.to_string())]
  pub factory_name: String,
  #[builder(into, default = DEFAULT_BUILDER_SUFFIX.to_string())]
  pub builder_suffix: String,
  #[builder(into, default = DEFAULT_FILE_SUFFIX.to_string())]
  pub file_suffix: String,
}

impl Default for BuilderConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

/// Result of converting one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
  pub module: BuilderModule,
  pub fields: Vec<FieldDef>,
  pub warnings: Vec<GenerationWarning>,
}

/// Runs field conversion and builder synthesis for single declarations.
pub struct DeclarationConverter<'a> {
  config: BuilderConfig,
  resolver: &'a dyn TypeResolver,
}

impl<'a> DeclarationConverter<'a> {
  pub fn new(config: BuilderConfig, resolver: &'a dyn TypeResolver) -> Self {
    Self { config, resolver }
  }

  /// Either the whole builder or an error; never a partial builder.
  pub fn convert(&self, source: &dyn DeclarationSource) -> Result<ConversionOutput, GenerationError> {
    let FieldConversion { fields, warnings } = self.convert_fields(source)?;
    let module = BuilderSynthesizer::new(&self.config).synthesize(source, &fields)?;
    Ok(ConversionOutput {
      module,
      fields,
      warnings,
    })
  }

  pub fn convert_fields(&self, source: &dyn DeclarationSource) -> Result<FieldConversion, GenerationError> {
    FieldConverter::new(self.resolver).convert(source)
  }
}
