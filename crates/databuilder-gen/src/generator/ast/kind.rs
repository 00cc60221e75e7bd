use serde::Serialize;
use strum::{AsRefStr, Display};

use super::{Modifier, PresenceCheck, tokens::FieldNameToken, types::TypeName};

pub const NULL_LITERAL: &str = "null";

/// Kotlin primitives plus `String`, each with a zero-equivalent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum PrimitiveKind {
  Boolean,
  Byte,
  Short,
  Int,
  Long,
  Char,
  Float,
  Double,
  String,
}

impl PrimitiveKind {
  pub const fn zero_literal(self) -> &'static str {
    match self {
      PrimitiveKind::Boolean => "false",
      PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int => "0",
      PrimitiveKind::Long => "0L",
      PrimitiveKind::Char => "' '",
      PrimitiveKind::Float => "0f",
      PrimitiveKind::Double => "0.0",
      PrimitiveKind::String => "\"\"",
    }
  }

  pub const fn unsigned(self) -> Option<UnsignedKind> {
    match self {
      PrimitiveKind::Byte => Some(UnsignedKind::UByte),
      PrimitiveKind::Short => Some(UnsignedKind::UShort),
      PrimitiveKind::Int => Some(UnsignedKind::UInt),
      PrimitiveKind::Long => Some(UnsignedKind::ULong),
      _ => None,
    }
  }

  pub const fn array(self) -> Option<PrimitiveArrayKind> {
    match self {
      PrimitiveKind::Boolean => Some(PrimitiveArrayKind::BooleanArray),
      PrimitiveKind::Byte => Some(PrimitiveArrayKind::ByteArray),
      PrimitiveKind::Short => Some(PrimitiveArrayKind::ShortArray),
      PrimitiveKind::Int => Some(PrimitiveArrayKind::IntArray),
      PrimitiveKind::Long => Some(PrimitiveArrayKind::LongArray),
      PrimitiveKind::Char => Some(PrimitiveArrayKind::CharArray),
      PrimitiveKind::Float => Some(PrimitiveArrayKind::FloatArray),
      PrimitiveKind::Double => Some(PrimitiveArrayKind::DoubleArray),
      PrimitiveKind::String => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum UnsignedKind {
  UByte,
  UShort,
  UInt,
  ULong,
}

impl UnsignedKind {
  pub const fn zero_literal(self) -> &'static str {
    match self {
      UnsignedKind::ULong => "0uL",
      _ => "0u",
    }
  }

  pub const fn array(self) -> PrimitiveArrayKind {
    match self {
      UnsignedKind::UByte => PrimitiveArrayKind::UByteArray,
      UnsignedKind::UShort => PrimitiveArrayKind::UShortArray,
      UnsignedKind::UInt => PrimitiveArrayKind::UIntArray,
      UnsignedKind::ULong => PrimitiveArrayKind::ULongArray,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum PrimitiveArrayKind {
  BooleanArray,
  ByteArray,
  CharArray,
  ShortArray,
  IntArray,
  LongArray,
  FloatArray,
  DoubleArray,
  UByteArray,
  UShortArray,
  UIntArray,
  ULongArray,
}

/// Non-generic library types that are neither primitives nor containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum WellKnownKind {
  CharSequence,
  Throwable,
  Annotation,
  Number,
}

impl WellKnownKind {
  pub const fn default_literal(self) -> Option<&'static str> {
    match self {
      WellKnownKind::CharSequence => Some("\"\""),
      WellKnownKind::Throwable | WellKnownKind::Annotation | WellKnownKind::Number => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum CollectionFamily {
  Iterable,
  Collection,
  List,
  Set,
}

impl CollectionFamily {
  pub fn type_name(self, mutable: bool) -> TypeName {
    if mutable {
      TypeName::collections(format!("Mutable{self}"))
    } else {
      TypeName::collections(self.to_string())
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum MapFamily {
  Map,
  MapEntry,
}

impl MapFamily {
  pub fn type_name(self, mutable: bool) -> TypeName {
    let simple_name = match (self, mutable) {
      (MapFamily::Map, false) => "Map",
      (MapFamily::Map, true) => "MutableMap",
      (MapFamily::MapEntry, false) => "Map.Entry",
      (MapFamily::MapEntry, true) => "MutableMap.MutableEntry",
    };
    TypeName::collections(simple_name)
  }
}

/// Runtime shape of a classified type.
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(tag = "variant", content = "payload", rename_all = "snake_case")]
pub enum KindVariant {
  Primitive(PrimitiveKind),
  Unsigned(UnsignedKind),
  PrimitiveArray(PrimitiveArrayKind),
  Array {
    element: Box<Kind>,
  },
  WellKnown(WellKnownKind),
  Collection {
    family: CollectionFamily,
    mutable: bool,
    element: Box<Kind>,
  },
  Map {
    family: MapFamily,
    mutable: bool,
    key: Box<Kind>,
    value: Box<Kind>,
  },
  Comparable {
    element: Box<Kind>,
  },
  Enum {
    element: Box<Kind>,
  },
  Custom {
    name: TypeName,
    arguments: Vec<Kind>,
  },
  Alias {
    target: TypeName,
  },
  Unit,
  Nothing,
  Any,
}

/// A classified field type: its shape, nullability and the literal a builder slot starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kind {
  pub variant: KindVariant,
  pub nullable: bool,
  default_literal: Option<String>,
}

impl Kind {
  fn new(variant: KindVariant, nullable: bool, default_literal: Option<&str>) -> Self {
    Self {
      variant,
      nullable,
      default_literal: default_literal.map(String::from),
    }
  }

  pub fn primitive(primitive: PrimitiveKind, nullable: bool) -> Self {
    Self::new(KindVariant::Primitive(primitive), nullable, Some(primitive.zero_literal()))
  }

  pub fn unsigned(unsigned: UnsignedKind, nullable: bool) -> Self {
    Self::new(KindVariant::Unsigned(unsigned), nullable, Some(unsigned.zero_literal()))
  }

  pub fn primitive_array(array: PrimitiveArrayKind, nullable: bool) -> Self {
    Self::new(KindVariant::PrimitiveArray(array), nullable, None)
  }

  pub fn array(element: Kind, nullable: bool) -> Self {
    Self::new(
      KindVariant::Array {
        element: Box::new(element),
      },
      nullable,
      None,
    )
  }

  pub fn well_known(well_known: WellKnownKind, nullable: bool) -> Self {
    Self::new(KindVariant::WellKnown(well_known), nullable, well_known.default_literal())
  }

  pub fn collection(family: CollectionFamily, mutable: bool, element: Kind, nullable: bool) -> Self {
    Self::new(
      KindVariant::Collection {
        family,
        mutable,
        element: Box::new(element),
      },
      nullable,
      None,
    )
  }

  pub fn map(family: MapFamily, mutable: bool, key: Kind, value: Kind, nullable: bool) -> Self {
    Self::new(
      KindVariant::Map {
        family,
        mutable,
        key: Box::new(key),
        value: Box::new(value),
      },
      nullable,
      None,
    )
  }

  pub fn comparable(element: Kind, nullable: bool) -> Self {
    Self::new(
      KindVariant::Comparable {
        element: Box::new(element),
      },
      nullable,
      None,
    )
  }

  pub fn enumeration(element: Kind, nullable: bool) -> Self {
    Self::new(
      KindVariant::Enum {
        element: Box::new(element),
      },
      nullable,
      None,
    )
  }

  /// `name` must be non-null and carry no arguments; both are derived from the Kind.
  pub fn custom(name: TypeName, arguments: Vec<Kind>, nullable: bool) -> Self {
    let name = TypeName::new(name.package, name.simple_name);
    Self::new(KindVariant::Custom { name, arguments }, nullable, None)
  }

  /// An alias keeps an explicit default literal even when nullable.
  pub fn alias(target: TypeName, nullable: bool, default_literal: Option<&str>) -> Self {
    let target = target.with_nullable(false);
    Self::new(KindVariant::Alias { target }, nullable, default_literal)
  }

  pub fn unit() -> Self {
    Self::new(KindVariant::Unit, false, Some("Unit"))
  }

  pub fn nothing() -> Self {
    Self::new(KindVariant::Nothing, false, Some("Nothing"))
  }

  pub fn any(nullable: bool) -> Self {
    Self::new(KindVariant::Any, nullable, None)
  }

  #[must_use]
  pub fn default_literal(&self) -> Option<&str> {
    self.default_literal.as_deref()
  }

  /// A slot that can neither hold `null` nor start from a literal must be `lateinit`.
  #[must_use]
  pub fn requires_deferred_init(&self) -> bool {
    !self.nullable && self.default_literal.is_none()
  }

  /// The base type with this Kind's nullability applied.
  #[must_use]
  pub fn type_name(&self) -> TypeName {
    self.base_type_name().with_nullable(self.nullable)
  }

  /// The non-null type this Kind describes.
  #[must_use]
  pub fn base_type_name(&self) -> TypeName {
    match &self.variant {
      KindVariant::Primitive(primitive) => TypeName::kotlin(primitive.to_string()),
      KindVariant::Unsigned(unsigned) => TypeName::kotlin(unsigned.to_string()),
      KindVariant::PrimitiveArray(array) => TypeName::kotlin(array.to_string()),
      KindVariant::Array { element } => TypeName::kotlin("Array").parameterized_by([element.type_name()]),
      KindVariant::WellKnown(well_known) => TypeName::kotlin(well_known.to_string()),
      KindVariant::Collection {
        family,
        mutable,
        element,
      } => family.type_name(*mutable).parameterized_by([element.type_name()]),
      KindVariant::Map {
        family,
        mutable,
        key,
        value,
      } => family
        .type_name(*mutable)
        .parameterized_by([key.type_name(), value.type_name()]),
      KindVariant::Comparable { element } => TypeName::kotlin("Comparable").parameterized_by([element.type_name()]),
      KindVariant::Enum { element } => TypeName::kotlin("Enum").parameterized_by([element.type_name()]),
      KindVariant::Custom { name, arguments } => name.clone().parameterized_by(arguments.iter().map(Kind::type_name)),
      KindVariant::Alias { target } => target.clone(),
      KindVariant::Unit => TypeName::kotlin("Unit"),
      KindVariant::Nothing => TypeName::kotlin("Nothing"),
      KindVariant::Any => TypeName::kotlin("Any"),
    }
  }

  /// Initial value of the builder slot, or `None` for a `lateinit` slot.
  #[must_use]
  pub fn initializer(&self) -> Option<String> {
    if self.requires_deferred_init() {
      return None;
    }
    match (&self.variant, self.nullable) {
      (KindVariant::Alias { .. }, _) => Some(self.default_literal.clone().unwrap_or_else(|| NULL_LITERAL.to_string())),
      (_, true) => Some(NULL_LITERAL.to_string()),
      (_, false) => self.default_literal.clone(),
    }
  }

  #[must_use]
  pub fn modifiers(&self) -> Vec<Modifier> {
    if self.requires_deferred_init() {
      vec![Modifier::Private, Modifier::Lateinit]
    } else {
      vec![Modifier::Private]
    }
  }

  /// How `build()` tells whether the caller supplied this field.
  #[must_use]
  pub fn presence_check(&self, field: &FieldNameToken) -> PresenceCheck {
    match self.initializer() {
      None => PresenceCheck::Initialized { field: field.clone() },
      Some(literal) => PresenceCheck::Differs {
        field: field.clone(),
        literal,
      },
    }
  }

  /// Short label of the variant, e.g. `collection` or `primitive_array`.
  #[must_use]
  pub fn label(&self) -> &str {
    self.variant.as_ref()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_primitive_defaults() {
    assert_eq!(Kind::primitive(PrimitiveKind::Int, false).initializer().as_deref(), Some("0"));
    assert_eq!(Kind::primitive(PrimitiveKind::Long, false).initializer().as_deref(), Some("0L"));
    assert_eq!(
      Kind::primitive(PrimitiveKind::Boolean, false).initializer().as_deref(),
      Some("false")
    );
    assert_eq!(Kind::primitive(PrimitiveKind::Float, false).initializer().as_deref(), Some("0f"));
    assert_eq!(Kind::primitive(PrimitiveKind::Double, false).initializer().as_deref(), Some("0.0"));
    assert_eq!(Kind::primitive(PrimitiveKind::Char, false).initializer().as_deref(), Some("' '"));
    assert_eq!(
      Kind::primitive(PrimitiveKind::String, false).initializer().as_deref(),
      Some("\"\"")
    );
    assert_eq!(Kind::primitive(PrimitiveKind::Int, true).initializer().as_deref(), Some("null"));
  }

  #[test]
  fn test_deferred_init_rules() {
    let list = Kind::collection(
      CollectionFamily::List,
      false,
      Kind::primitive(PrimitiveKind::String, false),
      false,
    );
    assert!(list.requires_deferred_init());
    assert_eq!(list.initializer(), None);
    assert_eq!(list.modifiers(), vec![Modifier::Private, Modifier::Lateinit]);

    let nullable_list = Kind::collection(
      CollectionFamily::List,
      false,
      Kind::primitive(PrimitiveKind::String, false),
      true,
    );
    assert!(!nullable_list.requires_deferred_init());
    assert_eq!(nullable_list.initializer().as_deref(), Some("null"));
    assert_eq!(nullable_list.modifiers(), vec![Modifier::Private]);
  }

  #[test]
  fn test_type_name_is_idempotent() {
    let kind = Kind::map(
      MapFamily::Map,
      true,
      Kind::primitive(PrimitiveKind::String, true),
      Kind::primitive(PrimitiveKind::String, true),
      true,
    );
    let first = kind.type_name();
    let second = kind.type_name().with_nullable(kind.nullable);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "MutableMap<String?, String?>?");
  }

  #[test]
  fn test_map_entry_names() {
    let key = Kind::primitive(PrimitiveKind::String, false);
    let value = Kind::primitive(PrimitiveKind::Int, false);
    let entry = Kind::map(MapFamily::MapEntry, false, key.clone(), value.clone(), false);
    let mutable_entry = Kind::map(MapFamily::MapEntry, true, key, value, false);
    assert_eq!(entry.type_name().to_string(), "Map.Entry<String, Int>");
    assert_eq!(mutable_entry.type_name().to_string(), "MutableMap.MutableEntry<String, Int>");
  }

  #[test]
  fn test_alias_default_literal_overrides_null() {
    let target = TypeName::new("com.example", "Dog");
    let aliased = Kind::alias(target.clone(), true, Some("DogImpl()"));
    assert_eq!(aliased.initializer().as_deref(), Some("DogImpl()"));
    assert_eq!(aliased.type_name().to_string(), "Dog?");

    let plain = Kind::alias(target.clone(), true, None);
    assert_eq!(plain.initializer().as_deref(), Some("null"));

    let required = Kind::alias(target, false, None);
    assert!(required.requires_deferred_init());
  }

  #[test]
  fn test_presence_checks() {
    let field = FieldNameToken::new("count");
    assert_eq!(
      Kind::primitive(PrimitiveKind::Int, false).presence_check(&field).to_string(),
      "count != 0"
    );
    assert_eq!(
      Kind::primitive(PrimitiveKind::Int, true).presence_check(&field).to_string(),
      "count != null"
    );
    assert_eq!(
      Kind::custom(TypeName::new("com.example", "Thing"), vec![], false)
        .presence_check(&field)
        .to_string(),
      "this::count.isInitialized"
    );
  }

  #[test]
  fn test_unit_and_nothing_are_never_nullable() {
    assert!(!Kind::unit().nullable);
    assert!(!Kind::nothing().nullable);
    assert_eq!(Kind::nothing().type_name().to_string(), "Nothing");
    assert!(!Kind::nothing().requires_deferred_init());
  }

  #[test]
  fn test_custom_strips_incoming_nullability() {
    let kind = Kind::custom(TypeName::new("com.example", "Thing").with_nullable(true), vec![], false);
    assert_eq!(kind.type_name().to_string(), "Thing");
  }

  #[test]
  fn test_labels() {
    assert_eq!(Kind::primitive(PrimitiveKind::Int, false).label(), "primitive");
    assert_eq!(
      Kind::primitive_array(PrimitiveArrayKind::IntArray, false).label(),
      "primitive_array"
    );
    assert_eq!(Kind::any(true).label(), "any");
  }
}
