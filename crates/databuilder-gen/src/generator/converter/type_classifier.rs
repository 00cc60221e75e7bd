use databuilder_host::QualifiedName;

use crate::generator::{
  ast::{CollectionFamily, Kind, MapFamily, PrimitiveKind, TypeName, WellKnownKind},
  errors::ClassificationError,
  parser::{is_balanced, split_generic},
};

const ARRAY_SUFFIX: &str = "[]";
const WILDCARD_PREFIXES: [&str; 2] = ["? extends ", "? super "];

/// Flags applied to the outermost type only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeFlags {
  pub nullable: bool,
  pub mutable: bool,
  pub unsigned: bool,
}

/// Hands out generic-argument nullability slots in depth-first pre-order.
///
/// Slots past the end of the vector are non-nullable.
#[derive(Debug)]
struct NullabilityCursor<'a> {
  slots: &'a [bool],
  position: usize,
}

impl<'a> NullabilityCursor<'a> {
  fn new(slots: &'a [bool]) -> Self {
    Self { slots, position: 0 }
  }

  fn next_slot(&mut self) -> bool {
    let slot = self.slots.get(self.position).copied().unwrap_or(false);
    self.position += 1;
    slot
  }
}

/// Classifies a declared type string into a [`Kind`].
///
/// Unknown names never fail; they become [`Kind::custom`]. Only a known container with the wrong
/// number of type arguments is an error.
pub fn classify(type_string: &str, flags: TypeFlags, generic_nullable: &[bool]) -> Result<Kind, ClassificationError> {
  let mut cursor = NullabilityCursor::new(generic_nullable);
  classify_with(type_string, flags, &mut cursor)
}

/// JVM primitives, their boxes, and the Kotlin names of both.
pub fn builtin_primitive(name: &str) -> Option<PrimitiveKind> {
  let primitive = match name {
    "java.lang.String" | "kotlin.String" | "String" => PrimitiveKind::String,
    "int" | "java.lang.Integer" | "kotlin.Int" | "Int" => PrimitiveKind::Int,
    "long" | "java.lang.Long" | "kotlin.Long" | "Long" => PrimitiveKind::Long,
    "short" | "java.lang.Short" | "kotlin.Short" | "Short" => PrimitiveKind::Short,
    "byte" | "java.lang.Byte" | "kotlin.Byte" | "Byte" => PrimitiveKind::Byte,
    "float" | "java.lang.Float" | "kotlin.Float" | "Float" => PrimitiveKind::Float,
    "double" | "java.lang.Double" | "kotlin.Double" | "Double" => PrimitiveKind::Double,
    "char" | "java.lang.Character" | "kotlin.Char" | "Char" => PrimitiveKind::Char,
    "boolean" | "java.lang.Boolean" | "kotlin.Boolean" | "Boolean" => PrimitiveKind::Boolean,
    _ => return None,
  };
  Some(primitive)
}

#[must_use]
pub fn is_builtin_primitive(name: &str) -> bool {
  builtin_primitive(name.trim()).is_some()
}

/// Element names that form a dedicated primitive array (`int[]` is `IntArray`, `Integer[]` is not).
fn jvm_array_element(name: &str) -> Option<PrimitiveKind> {
  match name {
    "boolean" => Some(PrimitiveKind::Boolean),
    "byte" => Some(PrimitiveKind::Byte),
    "short" => Some(PrimitiveKind::Short),
    "int" => Some(PrimitiveKind::Int),
    "long" => Some(PrimitiveKind::Long),
    "char" => Some(PrimitiveKind::Char),
    "float" => Some(PrimitiveKind::Float),
    "double" => Some(PrimitiveKind::Double),
    _ => None,
  }
}

fn well_known(name: &str, nullable: bool) -> Option<Kind> {
  let kind = match name {
    "java.lang.CharSequence" | "kotlin.CharSequence" => Kind::well_known(WellKnownKind::CharSequence, nullable),
    "java.lang.Throwable" | "kotlin.Throwable" => Kind::well_known(WellKnownKind::Throwable, nullable),
    "java.lang.annotation.Annotation" | "kotlin.Annotation" => Kind::well_known(WellKnownKind::Annotation, nullable),
    "java.lang.Number" | "kotlin.Number" => Kind::well_known(WellKnownKind::Number, nullable),
    "java.lang.Void" | "kotlin.Nothing" => Kind::nothing(),
    "kotlin.Unit" => Kind::unit(),
    "java.lang.Object" | "kotlin.Any" => Kind::any(nullable),
    _ => return None,
  };
  Some(kind)
}

fn classify_with(
  type_string: &str,
  flags: TypeFlags,
  cursor: &mut NullabilityCursor<'_>,
) -> Result<Kind, ClassificationError> {
  let name = strip_wildcard(type_string.trim());
  let nullable = flags.nullable;

  if name.is_empty() {
    return Ok(Kind::unit());
  }
  if name == "?" || name == "*" {
    return Ok(Kind::any(true));
  }

  if let Some(primitive) = builtin_primitive(name) {
    return Ok(match primitive.unsigned() {
      Some(unsigned) if flags.unsigned => Kind::unsigned(unsigned, nullable),
      _ => Kind::primitive(primitive, nullable),
    });
  }

  if let Some(kind) = well_known(name, nullable) {
    return Ok(kind);
  }

  if !is_balanced(name) {
    return Ok(match split_generic(name) {
      Some((outer, raw_arguments)) => opaque_generic(outer, &raw_arguments, nullable),
      None => Kind::custom(TypeName::new("", name), vec![], nullable),
    });
  }

  if let Some(element) = name.strip_suffix(ARRAY_SUFFIX).map(str::trim)
    && !element.is_empty()
  {
    if let Some(primitive) = jvm_array_element(element)
      && let Some(array) = primitive.array()
    {
      let array = match primitive.unsigned() {
        Some(unsigned) if flags.unsigned => unsigned.array(),
        _ => array,
      };
      return Ok(Kind::primitive_array(array, nullable));
    }
    let element_flags = TypeFlags {
      nullable: cursor.next_slot(),
      ..TypeFlags::default()
    };
    let element = classify_with(element, element_flags, cursor)?;
    return Ok(Kind::array(element, nullable));
  }

  if let Some((outer, raw_arguments)) = split_generic(name) {
    let mut arguments = Vec::with_capacity(raw_arguments.len());
    for raw in raw_arguments {
      let argument_flags = TypeFlags {
        nullable: cursor.next_slot(),
        ..TypeFlags::default()
      };
      arguments.push(classify_with(raw, argument_flags, cursor)?);
    }
    return classify_generic(outer, arguments, flags);
  }

  Ok(Kind::custom(fallback_name(name), vec![], nullable))
}

/// Package and simple name, splitting only on dots before any generic argument list.
fn fallback_name(name: &str) -> TypeName {
  let head_end = name.find('<').unwrap_or(name.len());
  match name[..head_end].rsplit_once('.') {
    Some((package, _)) => TypeName::new(package, &name[package.len() + 1..]),
    None => TypeName::new("", name),
  }
}

fn strip_wildcard(name: &str) -> &str {
  WILDCARD_PREFIXES
    .iter()
    .find_map(|prefix| name.strip_prefix(prefix))
    .map_or(name, str::trim)
}

/// Unbalanced brackets keep the raw argument text as a single opaque type.
fn opaque_generic(outer: &str, raw_arguments: &[&str], nullable: bool) -> Kind {
  let arguments = raw_arguments
    .iter()
    .map(|raw| Kind::custom(TypeName::new("", *raw), vec![], false))
    .collect();
  Kind::custom(TypeName::from(QualifiedName::parse(outer)), arguments, nullable)
}

fn classify_generic(outer: &str, arguments: Vec<Kind>, flags: TypeFlags) -> Result<Kind, ClassificationError> {
  let TypeFlags { nullable, mutable, .. } = flags;

  let collection = |family: CollectionFamily, mutable: bool, arguments: Vec<Kind>| -> Result<Kind, ClassificationError> {
    let [element] = expect_arity::<1>(outer, arguments)?;
    Ok(Kind::collection(family, mutable, element, nullable))
  };
  let map = |family: MapFamily, mutable: bool, arguments: Vec<Kind>| -> Result<Kind, ClassificationError> {
    let [key, value] = expect_arity::<2>(outer, arguments)?;
    Ok(Kind::map(family, mutable, key, value, nullable))
  };

  match outer {
    "java.lang.Enum" | "kotlin.Enum" => {
      let [element] = expect_arity::<1>(outer, arguments)?;
      Ok(Kind::enumeration(element, nullable))
    }
    "java.lang.Comparable" | "kotlin.Comparable" => {
      let [element] = expect_arity::<1>(outer, arguments)?;
      Ok(Kind::comparable(element, nullable))
    }
    "java.lang.Iterable" | "kotlin.collections.Iterable" => collection(CollectionFamily::Iterable, mutable, arguments),
    "kotlin.collections.MutableIterable" => collection(CollectionFamily::Iterable, true, arguments),
    "java.util.Collection" | "kotlin.collections.Collection" => {
      collection(CollectionFamily::Collection, mutable, arguments)
    }
    "kotlin.collections.MutableCollection" => collection(CollectionFamily::Collection, true, arguments),
    "java.util.List" | "kotlin.collections.List" => collection(CollectionFamily::List, mutable, arguments),
    "kotlin.collections.MutableList" => collection(CollectionFamily::List, true, arguments),
    "java.util.Set" | "kotlin.collections.Set" => collection(CollectionFamily::Set, mutable, arguments),
    "kotlin.collections.MutableSet" => collection(CollectionFamily::Set, true, arguments),
    "java.util.Map" | "kotlin.collections.Map" => map(MapFamily::Map, mutable, arguments),
    "kotlin.collections.MutableMap" => map(MapFamily::Map, true, arguments),
    "java.util.Map.Entry" | "java.util.Map$Entry" | "kotlin.collections.Map.Entry" => {
      map(MapFamily::MapEntry, mutable, arguments)
    }
    "kotlin.collections.MutableMap.MutableEntry" => map(MapFamily::MapEntry, true, arguments),
    _ => Ok(Kind::custom(TypeName::from(QualifiedName::parse(outer)), arguments, nullable)),
  }
}

fn expect_arity<const N: usize>(outer: &str, arguments: Vec<Kind>) -> Result<[Kind; N], ClassificationError> {
  let found = arguments.len();
  arguments.try_into().map_err(|_| ClassificationError::Arity {
    outer: outer.to_string(),
    expected: N,
    found,
  })
}
