use std::sync::LazyLock;

use regex::Regex;

use super::splitter::split_top_level;
use crate::generator::ast::MemberField;

static FUNCTION_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?<name>[^\s(]+)\((?<args>.*)\)$").expect("function regex is valid"));

static COMPONENT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^component(?<index>\d+)$").expect("component regex is valid"));

const COMPANION: &str = "companion";
const JVM_CONSTRUCTOR: &str = "<init>";

/// One entry of a printed member listing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MemberEntry<'a> {
  Value(&'a str),
  Constructor(Vec<&'a str>),
  Component(usize),
  Other,
}

/// Recovers constructor-ordered fields from a host's printed member listing.
///
/// A listing looks like
/// `[name, age, Person(java.lang.String,int), getName(), component1(), component2(), copy(...), Companion]`.
/// Value members appear in declaration order, the constructor gives the types in parameter order, and
/// the i-th `component<N>()` entry says that constructor slot i is backed by the N-th value member.
#[derive(Debug, Clone)]
pub struct MemberParser<'a> {
  declaration_name: &'a str,
}

impl<'a> MemberParser<'a> {
  pub fn new(declaration_name: &'a str) -> Self {
    Self { declaration_name }
  }

  /// Returns `None` when the listing is empty or cannot be reconciled.
  pub fn parse(&self, listing: &str) -> Option<Vec<MemberField>> {
    let body = Self::listing_body(listing)?;
    let entries = split_top_level(body, ',')
      .into_iter()
      .map(|entry| self.classify_entry(entry))
      .collect::<Vec<_>>();

    let values = entries
      .iter()
      .filter_map(|entry| match entry {
        MemberEntry::Value(name) => Some(*name),
        _ => None,
      })
      .collect::<Vec<_>>();
    let components = entries
      .iter()
      .filter_map(|entry| match entry {
        MemberEntry::Component(index) => Some(*index),
        _ => None,
      })
      .collect::<Vec<_>>();
    let constructor_types = Self::pick_constructor(&entries, values.len())?;

    if constructor_types.len() != values.len() || components.len() != values.len() {
      return None;
    }

    components
      .iter()
      .zip(constructor_types)
      .map(|(&component, declared_type)| {
        let name = values.get(component.checked_sub(1)?)?;
        Some(MemberField::new(*name, *declared_type))
      })
      .collect()
  }

  fn listing_body(listing: &str) -> Option<&str> {
    let start = listing.find('[')?;
    let end = listing.rfind(']')?;
    let body = listing.get(start + 1..end)?.trim();
    (!body.is_empty()).then_some(body)
  }

  /// Prefers the constructor whose arity matches the value members.
  fn pick_constructor<'e, 'l>(entries: &'e [MemberEntry<'l>], value_count: usize) -> Option<&'e Vec<&'l str>> {
    let mut constructors = entries.iter().filter_map(|entry| match entry {
      MemberEntry::Constructor(types) => Some(types),
      _ => None,
    });
    let first = constructors.next()?;
    if first.len() == value_count {
      return Some(first);
    }
    Some(constructors.find(|types| types.len() == value_count).unwrap_or(first))
  }

  fn classify_entry<'l>(&self, entry: &'l str) -> MemberEntry<'l> {
    if let Some(captures) = FUNCTION_RE.captures(entry) {
      let name = captures.name("name").map_or("", |m| m.as_str());
      let args = captures.name("args").map_or("", |m| m.as_str());
      if name == self.declaration_name || name == JVM_CONSTRUCTOR {
        return MemberEntry::Constructor(split_top_level(args, ','));
      }
      if args.trim().is_empty()
        && let Some(index) = COMPONENT_RE
          .captures(name)
          .and_then(|c| c.name("index"))
          .and_then(|m| m.as_str().parse().ok())
      {
        return MemberEntry::Component(index);
      }
      return MemberEntry::Other;
    }
    if entry.eq_ignore_ascii_case(COMPANION) || entry.is_empty() {
      return MemberEntry::Other;
    }
    MemberEntry::Value(entry)
  }
}
