pub mod kind;
pub mod tokens;
pub mod types;

use std::{
  collections::BTreeSet,
  fmt::{Display, Formatter},
};

use itertools::Itertools;
pub use kind::{
  CollectionFamily, Kind, KindVariant, MapFamily, NULL_LITERAL, PrimitiveArrayKind, PrimitiveKind, UnsignedKind,
  WellKnownKind,
};
use serde::Serialize;
pub use tokens::FieldNameToken;
pub use types::{TypeName, clashing_imports};

/// A `(name, declared type)` pair recovered from a printed member listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberField {
  pub name: String,
  pub declared_type: String,
}

impl MemberField {
  pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      declared_type: declared_type.into(),
    }
  }
}

/// A constructor parameter after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, bon::Builder)]
pub struct FieldDef {
  #[builder(into)]
  pub name: FieldNameToken,
  #[builder(into)]
  pub declared_type: String,
  #[builder(default)]
  pub has_default: bool,
  pub kind: Kind,
}

impl FieldDef {
  /// Optional fields may be omitted from the constructor call.
  #[must_use]
  pub fn is_optional(&self) -> bool {
    self.has_default
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
  Private,
  Lateinit,
}

/// Test that a builder slot was assigned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum PresenceCheck {
  Initialized { field: FieldNameToken },
  Differs { field: FieldNameToken, literal: String },
}

impl PresenceCheck {
  #[must_use]
  pub fn field(&self) -> &FieldNameToken {
    match self {
      Self::Initialized { field } | Self::Differs { field, .. } => field,
    }
  }
}

impl Display for PresenceCheck {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Initialized { field } => write!(f, "this::{}.isInitialized", field.to_identifier()),
      Self::Differs { field, literal } => write!(f, "{} != {literal}", field.to_identifier()),
    }
  }
}

/// Type parameter of the declaration, carried over to the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, bon::Builder)]
pub struct TypeParameterDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub bounds: Vec<TypeName>,
}

impl TypeParameterDef {
  pub fn as_type_name(&self) -> TypeName {
    TypeName::new("", self.name.clone())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, bon::Builder)]
pub struct PropertyDef {
  pub name: FieldNameToken,
  pub type_name: TypeName,
  #[builder(default)]
  pub modifiers: Vec<Modifier>,
  pub initializer: Option<String>,
}

impl PropertyDef {
  #[must_use]
  pub fn is_deferred(&self) -> bool {
    self.modifiers.contains(&Modifier::Lateinit)
  }
}

/// Fluent setter assigning one slot and returning the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, bon::Builder)]
pub struct SetterDef {
  #[builder(into)]
  pub name: String,
  pub field: FieldNameToken,
  pub parameter_type: TypeName,
}

/// Call to the declaration's constructor with named arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorCall {
  pub target: String,
  pub arguments: Vec<FieldNameToken>,
}

impl Display for ConstructorCall {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let arguments = self
      .arguments
      .iter()
      .map(|arg| {
        let ident = arg.to_identifier();
        format!("{ident} = this.{ident}")
      })
      .join(", ");
    write!(f, "{}({arguments})", self.target)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardedBranch {
  pub checks: Vec<PresenceCheck>,
  pub call: ConstructorCall,
}

impl GuardedBranch {
  #[must_use]
  pub fn condition(&self) -> String {
    self.checks.iter().join(" && ")
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "body", rename_all = "snake_case")]
pub enum BuildBody {
  Direct {
    call: ConstructorCall,
  },
  Guarded {
    branches: Vec<GuardedBranch>,
    fallback: ConstructorCall,
  },
}

impl BuildBody {
  /// Number of constructor calls `build()` can take, the fallback included.
  #[must_use]
  pub fn branch_count(&self) -> usize {
    match self {
      Self::Direct { .. } => 1,
      Self::Guarded { branches, .. } => branches.len() + 1,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildFunction {
  pub return_type: TypeName,
  pub body: BuildBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, bon::Builder)]
pub struct BuilderDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub type_parameters: Vec<TypeParameterDef>,
  #[builder(default)]
  pub properties: Vec<PropertyDef>,
  #[builder(default)]
  pub setters: Vec<SetterDef>,
  pub build_function: BuildFunction,
}

impl BuilderDef {
  /// The builder's own type, parameterized by its type parameters.
  #[must_use]
  pub fn self_type(&self) -> TypeName {
    TypeName::new("", self.name.clone())
      .parameterized_by(self.type_parameters.iter().map(TypeParameterDef::as_type_name))
  }
}

/// Zero-argument extension on the declaration's companion returning a fresh builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, bon::Builder)]
pub struct FactoryFunction {
  #[builder(into)]
  pub name: String,
  pub receiver: TypeName,
  pub returns: TypeName,
  #[builder(default)]
  pub type_parameters: Vec<TypeParameterDef>,
}

/// Everything needed to emit one `{Name}Extension` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, bon::Builder)]
pub struct BuilderModule {
  #[builder(into)]
  pub package: String,
  #[builder(into)]
  pub file_name: String,
  #[builder(default)]
  pub imports: BTreeSet<String>,
  pub factory: Option<FactoryFunction>,
  pub builder: BuilderDef,
}
