use itertools::Itertools;

use super::{FileHeader, writer::CodeWriter};
use crate::generator::ast::{
  BuildBody, BuilderDef, BuilderModule, FactoryFunction, PropertyDef, SetterDef, TypeParameterDef,
};

pub(super) fn render_module(module: &BuilderModule, header: Option<&FileHeader>) -> String {
  let mut writer = CodeWriter::new();

  if let Some(header) = header {
    for line in header.lines() {
      writer.line(line);
    }
    writer.blank();
  }

  if !module.package.is_empty() {
    writer.line(format!("package {}", module.package));
    writer.blank();
  }

  if !module.imports.is_empty() {
    for import in &module.imports {
      writer.line(format!("import {import}"));
    }
    writer.blank();
  }

  if let Some(factory) = &module.factory {
    write_factory(&mut writer, factory);
    writer.blank();
  }

  write_builder(&mut writer, &module.builder);
  writer.finish()
}

/// `<T : Any, A : Animal>`, with multi-bound parameters left to the `where` clause.
fn type_parameter_list(params: &[TypeParameterDef]) -> String {
  if params.is_empty() {
    return String::new();
  }
  let rendered = params
    .iter()
    .map(|param| match param.bounds.as_slice() {
      [bound] => format!("{} : {bound}", param.name),
      _ => param.name.clone(),
    })
    .join(", ");
  format!("<{rendered}>")
}

fn where_clause(params: &[TypeParameterDef]) -> String {
  let constraints = params
    .iter()
    .filter(|param| param.bounds.len() > 1)
    .flat_map(|param| param.bounds.iter().map(move |bound| format!("{} : {bound}", param.name)))
    .join(", ");
  if constraints.is_empty() {
    constraints
  } else {
    format!(" where {constraints}")
  }
}

fn write_factory(writer: &mut CodeWriter, factory: &FactoryFunction) {
  let type_params = type_parameter_list(&factory.type_parameters);
  let type_params = if type_params.is_empty() {
    type_params
  } else {
    format!("{type_params} ")
  };
  writer.line(format!(
    "fun {type_params}{}.{}(): {}{} = {}()",
    factory.receiver,
    factory.name,
    factory.returns,
    where_clause(&factory.type_parameters),
    factory.returns.simple_name,
  ));
}

fn write_builder(writer: &mut CodeWriter, builder: &BuilderDef) {
  writer.begin_block(format!(
    "class {}{}{}",
    builder.name,
    type_parameter_list(&builder.type_parameters),
    where_clause(&builder.type_parameters),
  ));

  for property in &builder.properties {
    write_property(writer, property);
  }
  if !builder.properties.is_empty() {
    writer.blank();
  }

  let self_type = builder.self_type();
  for setter in &builder.setters {
    write_setter(writer, setter, &self_type.to_string());
    writer.blank();
  }

  write_build(writer, builder);
  writer.end_block();
}

fn write_property(writer: &mut CodeWriter, property: &PropertyDef) {
  let modifiers = property.modifiers.iter().join(" ");
  let name = property.name.to_identifier();
  match &property.initializer {
    Some(initializer) => writer.line(format!("{modifiers} var {name}: {} = {initializer}", property.type_name)),
    None => writer.line(format!("{modifiers} var {name}: {}", property.type_name)),
  };
}

fn write_setter(writer: &mut CodeWriter, setter: &SetterDef, self_type: &str) {
  let name = setter.field.to_identifier();
  writer.line(format!(
    "fun {}({name}: {}): {self_type} = apply {{ this.{name} = {name} }}",
    setter.name, setter.parameter_type,
  ));
}

fn write_build(writer: &mut CodeWriter, builder: &BuilderDef) {
  let function = &builder.build_function;
  writer.begin_block(format!("fun build(): {}", function.return_type));
  match &function.body {
    BuildBody::Direct { call } => {
      writer.line(format!("return {call}"));
    }
    BuildBody::Guarded { branches, fallback } => {
      writer.begin_block("return when");
      for branch in branches {
        writer.line(format!("{} -> {}", branch.condition(), branch.call));
      }
      writer.line(format!("else -> {fallback}"));
      writer.end_block();
    }
  }
  writer.end_block();
}
