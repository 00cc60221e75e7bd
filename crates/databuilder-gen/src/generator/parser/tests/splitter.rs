use crate::generator::parser::{is_balanced, split_generic, split_top_level};

#[test]
fn splits_plain_list() {
  assert_eq!(split_top_level("a, b,c", ','), vec!["a", "b", "c"]);
}

#[test]
fn empty_input_yields_nothing() {
  assert!(split_top_level("   ", ',').is_empty());
}

#[test]
fn keeps_nested_generics_together() {
  let pieces = split_top_level(
    "java.util.Map<java.lang.String,java.util.List<java.lang.String>>, int",
    ',',
  );
  assert_eq!(
    pieces,
    vec!["java.util.Map<java.lang.String,java.util.List<java.lang.String>>", "int"]
  );
}

#[test]
fn keeps_function_arguments_together() {
  let pieces = split_top_level("a, Person(java.lang.String,int), getA()", ',');
  assert_eq!(pieces, vec!["a", "Person(java.lang.String,int)", "getA()"]);
}

#[test]
fn function_type_arrow_is_not_a_bracket() {
  let pieces = split_top_level("(Int) -> String, Int", ',');
  assert_eq!(pieces, vec!["(Int) -> String", "Int"]);
}

#[test]
fn unbalanced_input_is_one_piece() {
  assert_eq!(split_top_level("Map<String, List<Int>", ','), vec!["Map<String, List<Int>"]);
  assert_eq!(split_top_level("A>, B", ','), vec!["A>, B"]);
}

#[test]
fn balance_check() {
  assert!(is_balanced("Map<String, List<Int>>"));
  assert!(is_balanced("int[]"));
  assert!(!is_balanced("Map<String, List<Int>"));
  assert!(!is_balanced("List<Int)"));
}

#[test]
fn splits_generic_outer_and_arguments() {
  let (outer, args) = split_generic("java.util.Map<java.lang.String, java.util.List<java.lang.String>>").unwrap();
  assert_eq!(outer, "java.util.Map");
  assert_eq!(args, vec!["java.lang.String", "java.util.List<java.lang.String>"]);
}

#[test]
fn non_generic_has_no_split() {
  assert!(split_generic("java.lang.String").is_none());
  assert!(split_generic("int[]").is_none());
}
