use databuilder_host::{Declaration, HostDump, Parameter};

use crate::generator::{
  ast::{FieldDef, Kind},
  converter::{BuilderConfig, ConversionOutput, DeclarationConverter},
  errors::GenerationError,
};

pub(super) fn host(known_types: &[&str]) -> HostDump {
  HostDump {
    declarations: vec![],
    known_types: known_types.iter().map(ToString::to_string).collect(),
  }
}

pub(super) fn param(name: &str, type_name: &str) -> Parameter {
  Parameter::builder().name(name).type_name(type_name).build()
}

pub(super) fn defaulted(name: &str, type_name: &str) -> Parameter {
  Parameter::builder().name(name).type_name(type_name).has_default(true).build()
}

pub(super) fn declaration(name: &str, parameters: Vec<Parameter>) -> Declaration {
  Declaration::builder()
    .name(name)
    .package("com.example")
    .parameters(parameters)
    .build()
}

pub(super) fn convert_with(
  decl: &Declaration,
  config: BuilderConfig,
  known_types: &[&str],
) -> Result<ConversionOutput, GenerationError> {
  let host = host(known_types);
  DeclarationConverter::new(config, &host).convert(decl)
}

pub(super) fn convert(decl: &Declaration) -> ConversionOutput {
  convert_with(decl, BuilderConfig::default(), &[]).expect("conversion should succeed")
}

pub(super) fn field(name: &str, kind: Kind, has_default: bool) -> FieldDef {
  FieldDef::builder()
    .name(name)
    .declared_type(kind.type_name().to_string())
    .has_default(has_default)
    .kind(kind)
    .build()
}
