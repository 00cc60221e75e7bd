use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

static HARD_KEYWORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in", "interface", "is", "null",
    "object", "package", "return", "super", "this", "throw", "true", "try", "typealias", "typeof", "val", "var",
    "when", "while",
  ]
  .into_iter()
  .collect()
});

static PLAIN_IDENTIFIER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[\p{L}_][\p{L}\p{N}_]*$").expect("identifier regex is valid"));

/// Escapes a name for use as a Kotlin identifier.
///
/// Hard keywords and names that are not plain identifiers are wrapped in backticks.
pub(crate) fn to_kotlin_identifier(name: &str) -> String {
  if HARD_KEYWORDS.contains(name) || !PLAIN_IDENTIFIER_RE.is_match(name) {
    format!("`{name}`")
  } else {
    name.to_string()
  }
}

/// Uppercases only the first character, leaving the rest untouched (`myURL` becomes `MyURL`).
pub(crate) fn upper_first(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
