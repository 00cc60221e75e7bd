use std::collections::BTreeSet;

use databuilder_host::DeclarationSource;

use super::{
  BuilderConfig,
  combinations::descending_subsets,
  type_classifier::{TypeFlags, classify},
};
use crate::generator::{
  ast::{
    BuildBody, BuildFunction, BuilderDef, BuilderModule, ConstructorCall, FactoryFunction, FieldDef, GuardedBranch,
    PropertyDef, SetterDef, TypeName, TypeParameterDef, clashing_imports,
  },
  errors::GenerationError,
};

const COMPANION: &str = "Companion";

/// Turns classified fields into a builder module description.
pub struct BuilderSynthesizer<'a> {
  config: &'a BuilderConfig,
}

impl<'a> BuilderSynthesizer<'a> {
  pub fn new(config: &'a BuilderConfig) -> Self {
    Self { config }
  }

  pub fn synthesize(&self, source: &dyn DeclarationSource, fields: &[FieldDef]) -> Result<BuilderModule, GenerationError> {
    let name = source.name();
    let package = source.package();
    let type_parameters = Self::type_parameters(source)?;

    let target = TypeName::new(package, name).parameterized_by(type_parameters.iter().map(TypeParameterDef::as_type_name));
    let field_types = fields.iter().map(|field| field.kind.type_name()).collect::<Vec<_>>();

    let clashes = clashing_imports(
      field_types
        .iter()
        .chain(type_parameters.iter().flat_map(|param| &param.bounds))
        .chain([&target]),
      package,
    );
    let type_parameters = type_parameters
      .into_iter()
      .map(|param| TypeParameterDef {
        bounds: param.bounds.iter().map(|bound| bound.qualify(&clashes)).collect(),
        ..param
      })
      .collect::<Vec<_>>();
    let field_types = field_types
      .iter()
      .map(|ty| ty.qualify(&clashes))
      .collect::<Vec<_>>();

    let builder = BuilderDef::builder()
      .name(format!("{name}{}", self.config.builder_suffix))
      .type_parameters(type_parameters.clone())
      .properties(fields.iter().zip(&field_types).map(|(field, ty)| Self::property(field, ty)).collect())
      .setters(fields.iter().zip(&field_types).map(|(field, ty)| self.setter(field, ty)).collect())
      .build_function(BuildFunction {
        body: Self::build_body(name, fields),
        return_type: target,
      })
      .build();

    let factory = (source.has_companion() && source.creator().companionable).then(|| {
      FactoryFunction::builder()
        .name(self.config.factory_name.clone())
        .receiver(TypeName::new(package, name).nested(COMPANION))
        .returns(builder.self_type())
        .type_parameters(type_parameters.clone())
        .build()
    });

    let mut imports = BTreeSet::new();
    for property in &builder.properties {
      property.type_name.collect_imports(package, &mut imports);
    }
    for bound in type_parameters.iter().flat_map(|param| &param.bounds) {
      bound.collect_imports(package, &mut imports);
    }

    Ok(
      BuilderModule::builder()
        .package(package)
        .file_name(format!("{name}{}", self.config.file_suffix))
        .imports(imports)
        .maybe_factory(factory)
        .builder(builder)
        .build(),
    )
  }

  /// Carries the declaration's type parameters over; an unbounded one is bound to `Any` so that
  /// slots of that type can be `lateinit`.
  fn type_parameters(source: &dyn DeclarationSource) -> Result<Vec<TypeParameterDef>, GenerationError> {
    let declaration = source.name();
    source
      .type_parameters()
      .iter()
      .map(|param| {
        let bounds = if param.bounds.is_empty() {
          vec![TypeName::kotlin("Any")]
        } else {
          param
            .bounds
            .iter()
            .map(|bound| classify(bound, TypeFlags::default(), &[]).map(|kind| kind.type_name()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| GenerationError::Classification {
              declaration: declaration.to_string(),
              field: format!("<{}>", param.name),
              source: err,
            })?
        };
        Ok(TypeParameterDef::builder().name(param.name.clone()).bounds(bounds).build())
      })
      .collect()
  }

  fn property(field: &FieldDef, type_name: &TypeName) -> PropertyDef {
    PropertyDef::builder()
      .name(field.name.clone())
      .type_name(type_name.clone())
      .modifiers(field.kind.modifiers())
      .maybe_initializer(field.kind.initializer())
      .build()
  }

  fn setter(&self, field: &FieldDef, type_name: &TypeName) -> SetterDef {
    SetterDef::builder()
      .name(field.name.prefixed(self.config.setter_style.prefix()))
      .field(field.name.clone())
      .parameter_type(type_name.clone())
      .build()
  }

  /// Guards run from the most to the fewest supplied optional fields, so the first match passes
  /// every supplied value.
  fn build_body(target: &str, fields: &[FieldDef]) -> BuildBody {
    let optional = fields.iter().filter(|field| field.is_optional()).collect::<Vec<_>>();
    let call_with = |chosen: &[&FieldDef]| ConstructorCall {
      target: target.to_string(),
      arguments: fields
        .iter()
        .filter(|field| !field.is_optional() || chosen.iter().any(|c| c.name == field.name))
        .map(|field| field.name.clone())
        .collect(),
    };

    if optional.is_empty() {
      return BuildBody::Direct { call: call_with(&[]) };
    }

    let branches = descending_subsets(&optional)
      .into_iter()
      .map(|subset| GuardedBranch {
        checks: subset.iter().map(|field| field.kind.presence_check(&field.name)).collect(),
        call: call_with(&subset),
      })
      .collect();

    BuildBody::Guarded {
      branches,
      fallback: call_with(&[]),
    }
  }
}
