use std::{
  collections::{BTreeMap, BTreeSet},
  fmt::{Display, Formatter},
};

use databuilder_host::QualifiedName;
use itertools::Itertools;
use serde::Serialize;

pub const KOTLIN_PACKAGE: &str = "kotlin";
pub const KOTLIN_COLLECTIONS_PACKAGE: &str = "kotlin.collections";

/// Kotlin type reference with generic arguments and nullability.
///
/// Nullability is a flag rather than a suffix baked into the name, so applying it again never stacks `?`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TypeName {
  pub package: String,
  /// Simple name, dotted for nested classes (`Map.Entry`).
  pub simple_name: String,
  pub arguments: Vec<TypeName>,
  pub nullable: bool,
}

impl TypeName {
  pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
    Self {
      package: package.into(),
      simple_name: simple_name.into(),
      arguments: vec![],
      nullable: false,
    }
  }

  pub fn kotlin(simple_name: impl Into<String>) -> Self {
    Self::new(KOTLIN_PACKAGE, simple_name)
  }

  pub fn collections(simple_name: impl Into<String>) -> Self {
    Self::new(KOTLIN_COLLECTIONS_PACKAGE, simple_name)
  }

  #[must_use]
  pub fn parameterized_by(mut self, arguments: impl IntoIterator<Item = TypeName>) -> Self {
    self.arguments = arguments.into_iter().collect();
    self
  }

  /// Returns a copy with the given nullability; idempotent.
  #[must_use]
  pub fn with_nullable(&self, nullable: bool) -> Self {
    Self {
      nullable,
      ..self.clone()
    }
  }

  /// A class nested in this one, e.g. `Person.Companion`.
  #[must_use]
  pub fn nested(&self, simple_name: &str) -> Self {
    Self::new(self.package.clone(), format!("{}.{simple_name}", self.simple_name))
  }

  #[must_use]
  pub fn qualified_name(&self) -> String {
    if self.package.is_empty() {
      self.simple_name.clone()
    } else {
      format!("{}.{}", self.package, self.simple_name)
    }
  }

  /// Kotlin imports `kotlin.*` and `kotlin.collections.*` into every file.
  #[must_use]
  pub fn is_implicitly_imported(&self) -> bool {
    self.package.is_empty() || self.package == KOTLIN_PACKAGE || self.package == KOTLIN_COLLECTIONS_PACKAGE
  }

  fn outermost_name(&self) -> &str {
    self.simple_name.split('.').next().unwrap_or(&self.simple_name)
  }

  /// Rewrites every type whose `package.Outermost` is in `qualified` to its fully qualified spelling,
  /// which needs no import.
  #[must_use]
  pub fn qualify(&self, qualified: &BTreeSet<String>) -> Self {
    let arguments = self.arguments.iter().map(|argument| argument.qualify(qualified)).collect();
    if !self.package.is_empty() && qualified.contains(&format!("{}.{}", self.package, self.outermost_name())) {
      Self {
        package: String::new(),
        simple_name: self.qualified_name(),
        arguments,
        nullable: self.nullable,
      }
    } else {
      Self {
        arguments,
        ..self.clone()
      }
    }
  }

  fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a TypeName)) {
    visitor(self);
    for argument in &self.arguments {
      argument.visit(visitor);
    }
  }

  /// Adds the import lines this type (and its arguments) needs in a file of `current_package`.
  pub fn collect_imports(&self, current_package: &str, imports: &mut BTreeSet<String>) {
    if !self.is_implicitly_imported() && self.package != current_package {
      imports.insert(format!("{}.{}", self.package, self.outermost_name()));
    }
    for argument in &self.arguments {
      argument.collect_imports(current_package, imports);
    }
  }
}

/// Imported types whose simple name is shared with another type referenced in the same file.
///
/// Types from `current_package` and the implicitly imported `kotlin` packages keep their simple names;
/// every other member of a clashing group is returned as `package.Outermost` for [`TypeName::qualify`].
pub fn clashing_imports<'a>(types: impl IntoIterator<Item = &'a TypeName>, current_package: &str) -> BTreeSet<String> {
  let mut packages_by_name = BTreeMap::<&str, BTreeSet<&str>>::new();
  for ty in types {
    ty.visit(&mut |ty: &'a TypeName| {
      if !ty.package.is_empty() {
        packages_by_name
          .entry(ty.outermost_name())
          .or_default()
          .insert(ty.package.as_str());
      }
    });
  }

  packages_by_name
    .into_iter()
    .filter(|(_, packages)| packages.len() > 1)
    .flat_map(|(name, packages)| {
      packages
        .into_iter()
        .filter(|package| {
          *package != current_package && *package != KOTLIN_PACKAGE && *package != KOTLIN_COLLECTIONS_PACKAGE
        })
        .map(move |package| format!("{package}.{name}"))
    })
    .collect()
}

impl From<&QualifiedName> for TypeName {
  fn from(name: &QualifiedName) -> Self {
    TypeName::new(name.package.clone(), name.simple_name.clone())
  }
}

impl From<QualifiedName> for TypeName {
  fn from(name: QualifiedName) -> Self {
    TypeName::new(name.package, name.simple_name)
  }
}

impl Display for TypeName {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.simple_name)?;
    if !self.arguments.is_empty() {
      write!(f, "<{}>", self.arguments.iter().join(", "))?;
    }
    if self.nullable {
      write!(f, "?")?;
    }
    Ok(())
  }
}
