use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::markers::{CreatorMarker, MarkerSet};

/// A fully qualified type name split into its package and simple name.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
  pub package: String,
  pub simple_name: String,
}

impl QualifiedName {
  pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
    Self {
      package: package.into(),
      simple_name: simple_name.into(),
    }
  }

  /// Splits on the last `.`; a name without dots has an empty package.
  #[must_use]
  pub fn parse(name: &str) -> Self {
    match name.trim().rsplit_once('.') {
      Some((package, simple_name)) => Self::new(package, simple_name),
      None => Self::new("", name.trim()),
    }
  }
}

impl Display for QualifiedName {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if self.package.is_empty() {
      write!(f, "{}", self.simple_name)
    } else {
      write!(f, "{}.{}", self.package, self.simple_name)
    }
  }
}

/// A type parameter of a generic declaration, e.g. `T : com.example.Animal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct TypeParameter {
  #[builder(into)]
  pub name: String,
  #[serde(default)]
  #[builder(default)]
  pub bounds: Vec<String>,
}

/// One primary-constructor parameter as the host sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct Parameter {
  #[builder(into)]
  pub name: String,
  /// Declared type in host notation, e.g. `java.util.List<java.lang.String>`.
  #[serde(rename = "type")]
  #[builder(into)]
  pub type_name: String,
  #[serde(default)]
  #[builder(default)]
  pub has_default: bool,
  #[serde(default)]
  #[builder(default)]
  pub nullable: bool,
}

/// Read-only view of one annotated declaration.
///
/// Hosts with real symbol information answer [`parameters`](Self::parameters); hosts that only have a
/// printed member dump answer [`member_listing`](Self::member_listing) instead.
pub trait DeclarationSource {
  fn name(&self) -> &str;

  fn package(&self) -> &str;

  fn type_parameters(&self) -> &[TypeParameter];

  fn parameters(&self) -> Option<&[Parameter]>;

  fn member_listing(&self) -> Option<&str>;

  fn markers(&self, field: &str) -> Option<&MarkerSet>;

  /// Names of every field carrying at least one marker.
  fn marked_fields(&self) -> Vec<&str>;

  fn creator(&self) -> CreatorMarker;

  fn has_companion(&self) -> bool;
}

/// Type lookups the host can answer.
pub trait TypeResolver {
  /// Resolves a qualified type name to its declaration, if the host knows it.
  fn resolve(&self, qualified_name: &str) -> Option<QualifiedName>;
}

/// Plain-data declaration used by the JSON host and by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct Declaration {
  #[builder(into)]
  pub name: String,
  #[serde(default)]
  #[builder(into, default)]
  pub package: String,
  #[serde(default)]
  #[builder(default)]
  pub type_parameters: Vec<TypeParameter>,
  #[serde(default)]
  pub parameters: Option<Vec<Parameter>>,
  #[serde(default)]
  #[builder(into)]
  pub members: Option<String>,
  #[serde(default)]
  #[builder(default)]
  pub markers: IndexMap<String, MarkerSet>,
  #[serde(default)]
  #[builder(default)]
  pub creator: CreatorMarker,
  #[serde(default)]
  #[builder(default)]
  pub has_companion: bool,
}

impl DeclarationSource for Declaration {
  fn name(&self) -> &str {
    &self.name
  }

  fn package(&self) -> &str {
    &self.package
  }

  fn type_parameters(&self) -> &[TypeParameter] {
    &self.type_parameters
  }

  fn parameters(&self) -> Option<&[Parameter]> {
    self.parameters.as_deref()
  }

  fn member_listing(&self) -> Option<&str> {
    self.members.as_deref()
  }

  fn markers(&self, field: &str) -> Option<&MarkerSet> {
    self.markers.get(field)
  }

  fn marked_fields(&self) -> Vec<&str> {
    self.markers.keys().map(String::as_str).collect()
  }

  fn creator(&self) -> CreatorMarker {
    self.creator
  }

  fn has_companion(&self) -> bool {
    self.has_companion
  }
}
