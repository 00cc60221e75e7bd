use std::collections::HashSet;

use databuilder_host::{DeclarationSource, MarkerSet, TypeResolver};

use super::type_classifier::{TypeFlags, classify};
use crate::generator::{
  ast::{FieldDef, Kind, MemberField, TypeName},
  errors::GenerationError,
  metrics::GenerationWarning,
  parser::{MemberParser, is_balanced},
};

/// Fields of one declaration in constructor order, plus the non-fatal issues found on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConversion {
  pub fields: Vec<FieldDef>,
  pub warnings: Vec<GenerationWarning>,
}

/// A constructor parameter before classification, from either host shape.
struct RawField<'a> {
  name: &'a str,
  declared_type: &'a str,
  has_default: bool,
  nullable: bool,
}

/// Applies field markers and classifies each constructor parameter.
pub struct FieldConverter<'a> {
  resolver: &'a dyn TypeResolver,
}

impl<'a> FieldConverter<'a> {
  pub fn new(resolver: &'a dyn TypeResolver) -> Self {
    Self { resolver }
  }

  pub fn convert(&self, source: &dyn DeclarationSource) -> Result<FieldConversion, GenerationError> {
    let declaration = source.name();
    let parsed: Vec<MemberField>;
    let raw_fields = if let Some(parameters) = source.parameters() {
      parameters
        .iter()
        .map(|param| RawField {
          name: &param.name,
          declared_type: &param.type_name,
          has_default: param.has_default,
          nullable: param.nullable,
        })
        .collect::<Vec<_>>()
    } else if let Some(listing) = source.member_listing() {
      parsed = MemberParser::new(declaration)
        .parse(listing)
        .ok_or_else(|| GenerationError::ParseMismatch {
          declaration: declaration.to_string(),
        })?;
      parsed
        .iter()
        .map(|member| RawField {
          name: &member.name,
          declared_type: &member.declared_type,
          has_default: false,
          nullable: false,
        })
        .collect()
    } else {
      return Err(GenerationError::NoParameters {
        declaration: declaration.to_string(),
      });
    };

    let mut seen = HashSet::new();
    let mut conversion = FieldConversion::default();
    for raw in &raw_fields {
      if !seen.insert(raw.name) {
        return Err(GenerationError::DuplicateField {
          declaration: declaration.to_string(),
          field: raw.name.to_string(),
        });
      }
      let field = self.convert_field(source, raw, &mut conversion.warnings)?;
      conversion.fields.push(field);
    }

    for marked in source.marked_fields() {
      if !seen.contains(marked) {
        conversion.warnings.push(GenerationWarning::UnknownMarkerField {
          declaration: declaration.to_string(),
          field: marked.to_string(),
        });
      }
    }

    Ok(conversion)
  }

  fn convert_field(
    &self,
    source: &dyn DeclarationSource,
    raw: &RawField<'_>,
    warnings: &mut Vec<GenerationWarning>,
  ) -> Result<FieldDef, GenerationError> {
    let declaration = source.name();
    let default_markers = MarkerSet::default();
    let markers = source.markers(raw.name).unwrap_or(&default_markers);
    let nullable = raw.nullable || markers.nullable;

    if !is_balanced(raw.declared_type) {
      warnings.push(GenerationWarning::MalformedGenerics {
        declaration: declaration.to_string(),
        field: raw.name.to_string(),
        declared_type: raw.declared_type.to_string(),
      });
    }

    let alias_kind = markers.alias.as_ref().and_then(|alias| {
      let resolved = self.resolver.resolve(&alias.target);
      if resolved.is_none() {
        warnings.push(GenerationWarning::UnresolvedAlias {
          declaration: declaration.to_string(),
          field: raw.name.to_string(),
          target: alias.target.clone(),
        });
      }
      resolved.map(|target| Kind::alias(TypeName::from(target), nullable, alias.explicit_default()))
    });

    let kind = match alias_kind {
      Some(kind) => kind,
      None => {
        let flags = TypeFlags {
          nullable,
          mutable: markers.mutable,
          unsigned: markers.unsigned,
        };
        classify(raw.declared_type, flags, &markers.generic_nullable).map_err(|source| {
          GenerationError::Classification {
            declaration: declaration.to_string(),
            field: raw.name.to_string(),
            source,
          }
        })?
      }
    };

    Ok(
      FieldDef::builder()
        .name(raw.name)
        .declared_type(raw.declared_type)
        .has_default(raw.has_default)
        .kind(kind)
        .build(),
    )
  }
}
