use std::fmt::{Display, Formatter};

use serde::Serialize;
use string_cache::DefaultAtom;

use crate::reserved::{to_kotlin_identifier, upper_first};

/// Name of a builder field, as declared by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FieldNameToken(DefaultAtom);

impl FieldNameToken {
  pub fn new(name: impl AsRef<str>) -> Self {
    Self(DefaultAtom::from(name.as_ref()))
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// The name as it must appear in Kotlin source.
  #[must_use]
  pub fn to_identifier(&self) -> String {
    to_kotlin_identifier(&self.0)
  }

  /// Accessor-style name such as `setName` or `withName`.
  #[must_use]
  pub fn prefixed(&self, prefix: &str) -> String {
    to_kotlin_identifier(&format!("{prefix}{}", upper_first(&self.0)))
  }
}

impl From<&str> for FieldNameToken {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl Display for FieldNameToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl PartialEq<str> for FieldNameToken {
  fn eq(&self, other: &str) -> bool {
    &*self.0 == other
  }
}

impl PartialEq<&str> for FieldNameToken {
  fn eq(&self, other: &&str) -> bool {
    &*self.0 == *other
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_prefixed_names() {
    let token = FieldNameToken::new("testMutableList");
    assert_eq!(token.prefixed("set"), "setTestMutableList");
    assert_eq!(token.prefixed("with"), "withTestMutableList");
  }

  #[test]
  fn test_keyword_field_is_escaped_but_setter_is_not() {
    let token = FieldNameToken::new("in");
    assert_eq!(token.to_identifier(), "`in`");
    assert_eq!(token.prefixed("set"), "setIn");
  }

  #[test]
  fn test_compares_with_str() {
    let token = FieldNameToken::from("test1");
    assert_eq!(token, "test1");
    assert_eq!(token.as_str(), "test1");
    assert_eq!(token.to_string(), "test1");
  }
}
