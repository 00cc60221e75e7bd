use serde::{Deserialize, Serialize};

/// Default literal carried by an alias marker that does not name one.
pub const ALIAS_DEFAULT_VALUE: &str = "null";

/// Class-level marker that requests builder generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorMarker {
  /// Expose a `builder()` factory on the declaration's companion object.
  pub companionable: bool,
}

/// Substitutes a concrete type for an abstract or interface-typed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct AliasMarker {
  #[builder(into)]
  pub target: String,
  #[serde(default = "default_alias_value")]
  #[builder(into, default = ALIAS_DEFAULT_VALUE.to_string())]
  pub default_value: String,
}

impl AliasMarker {
  /// The explicit default literal, or `None` when the marker kept the `"null"` placeholder.
  #[must_use]
  pub fn explicit_default(&self) -> Option<&str> {
    let value = self.default_value.trim();
    (!value.is_empty() && value != ALIAS_DEFAULT_VALUE).then_some(value)
  }
}

fn default_alias_value() -> String {
  ALIAS_DEFAULT_VALUE.to_string()
}

/// Field-level markers applied to one constructor parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSet {
  pub nullable: bool,
  pub mutable: bool,
  pub unsigned: bool,
  pub alias: Option<AliasMarker>,
  /// Nullability of nested generic arguments, consumed depth-first.
  pub generic_nullable: Vec<bool>,
}

impl MarkerSet {
  pub fn with_nullable(mut self) -> Self {
    self.nullable = true;
    self
  }

  pub fn with_mutable(mut self) -> Self {
    self.mutable = true;
    self
  }

  pub fn with_unsigned(mut self) -> Self {
    self.unsigned = true;
    self
  }

  pub fn with_alias(mut self, alias: AliasMarker) -> Self {
    self.alias = Some(alias);
    self
  }

  pub fn with_generic_nullable(mut self, slots: impl IntoIterator<Item = bool>) -> Self {
    self.generic_nullable = slots.into_iter().collect();
    self
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn alias_without_default_has_no_explicit_literal() {
    let alias = AliasMarker::builder().target("com.example.Dog").build();
    assert_eq!(alias.default_value, "null");
    assert_eq!(alias.explicit_default(), None);
  }

  #[test]
  fn alias_keeps_explicit_literal() {
    let alias = AliasMarker::builder()
      .target("com.example.Dog")
      .default_value("DogImpl()")
      .build();
    assert_eq!(alias.explicit_default(), Some("DogImpl()"));
  }

  #[test]
  fn marker_set_chaining() {
    let markers = MarkerSet::default()
      .with_mutable()
      .with_nullable()
      .with_generic_nullable([true, false]);
    assert!(markers.mutable);
    assert!(markers.nullable);
    assert!(!markers.unsigned);
    assert_eq!(markers.generic_nullable, vec![true, false]);
    assert!(!markers.is_empty());
    assert!(MarkerSet::default().is_empty());
  }

  #[test]
  fn marker_set_deserializes_with_defaults() {
    let markers: MarkerSet = serde_json::from_str(r#"{"alias": {"target": "com.example.Cat"}}"#).unwrap();
    assert!(!markers.nullable);
    assert_eq!(markers.alias.unwrap().default_value, "null");
  }
}
