use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::declaration::{Declaration, QualifiedName, TypeResolver};

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
  #[error("invalid host dump at path {path}: {inner}")]
  JsonDeserialize { path: String, inner: serde_json::Error },
}

/// A host's declarations and resolvable types, serialized as JSON.
///
/// ```json
/// {
///   "declarations": [
///     {
///       "name": "Person",
///       "package": "com.example",
///       "parameters": [{ "name": "name", "type": "java.lang.String" }]
///     }
///   ],
///   "known_types": ["com.example.Dog"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostDump {
  #[serde(default)]
  pub declarations: Vec<Declaration>,
  #[serde(default)]
  pub known_types: BTreeSet<String>,
}

impl HostDump {
  pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DumpError> {
    let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(deserializer).map_err(|err| DumpError::JsonDeserialize {
      path: err.path().to_string(),
      inner: err.into_inner(),
    })
  }

  pub fn from_json_str(json: &str) -> Result<Self, DumpError> {
    Self::from_json_slice(json.as_bytes())
  }

  #[must_use]
  pub fn declaration(&self, name: &str) -> Option<&Declaration> {
    self.declarations.iter().find(|decl| decl.name == name)
  }
}

impl TypeResolver for HostDump {
  fn resolve(&self, qualified_name: &str) -> Option<QualifiedName> {
    self
      .known_types
      .contains(qualified_name.trim())
      .then(|| QualifiedName::parse(qualified_name))
  }
}
