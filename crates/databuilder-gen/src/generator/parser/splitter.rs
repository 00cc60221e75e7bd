/// Splits `input` on `separator` wherever it occurs outside `<>`, `()` and `[]`.
///
/// Pieces are trimmed and empty input yields no pieces. Input whose brackets do not balance is
/// returned whole as a single piece.
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
  let input = input.trim();
  if input.is_empty() {
    return vec![];
  }
  if !is_balanced(input) {
    return vec![input];
  }

  let mut pieces = vec![];
  let mut depth = 0usize;
  let mut start = 0;
  let mut previous = None;
  for (index, ch) in input.char_indices() {
    match ch {
      '<' | '(' | '[' => depth += 1,
      '>' if previous == Some('-') => {}
      '>' | ')' | ']' => depth = depth.saturating_sub(1),
      _ if ch == separator && depth == 0 => {
        pieces.push(input[start..index].trim());
        start = index + ch.len_utf8();
      }
      _ => {}
    }
    previous = Some(ch);
  }
  pieces.push(input[start..].trim());
  pieces
}

/// Whether every opening bracket is closed in order. The arrow of a function type (`->`) is not a bracket.
pub fn is_balanced(input: &str) -> bool {
  let mut stack = vec![];
  let mut previous = None;
  for ch in input.chars() {
    match ch {
      '<' | '(' | '[' => stack.push(ch),
      '>' if previous == Some('-') => {}
      '>' | ')' | ']' => {
        let expected = match ch {
          '>' => '<',
          ')' => '(',
          _ => '[',
        };
        if stack.pop() != Some(expected) {
          return false;
        }
      }
      _ => {}
    }
    previous = Some(ch);
  }
  stack.is_empty()
}

/// Splits `Outer<A, B>` into its outer name and top-level argument strings.
///
/// Returns `None` when the type has no generic argument list.
pub fn split_generic(type_string: &str) -> Option<(&str, Vec<&str>)> {
  let type_string = type_string.trim();
  let open = type_string.find('<')?;
  if !type_string.ends_with('>') {
    return None;
  }
  let outer = type_string[..open].trim();
  let inner = &type_string[open + 1..type_string.len() - 1];
  Some((outer, split_top_level(inner, ',')))
}
