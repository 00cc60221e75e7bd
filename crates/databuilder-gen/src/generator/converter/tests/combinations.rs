use std::collections::HashSet;

use crate::generator::converter::combinations::{combinations, descending_subsets};

#[test]
fn choose_zero_is_the_empty_subset() {
  assert_eq!(combinations(&["a", "b"], 0), vec![Vec::<&str>::new()]);
  assert_eq!(combinations::<&str>(&[], 0), vec![Vec::<&str>::new()]);
}

#[test]
fn choosing_from_empty_yields_nothing() {
  assert!(combinations::<&str>(&[], 2).is_empty());
}

#[test]
fn size_larger_than_input_yields_nothing() {
  assert!(combinations(&["a"], 2).is_empty());
}

#[test]
fn subsets_keep_input_order() {
  let subsets = combinations(&["a", "b", "c"], 2);
  assert_eq!(subsets, vec![vec!["a", "b"], vec!["a", "c"], vec!["b", "c"]]);
}

#[test]
fn descending_subsets_start_with_the_largest() {
  let subsets = descending_subsets(&["a", "b", "c"]);
  assert_eq!(
    subsets,
    vec![
      vec!["a", "b", "c"],
      vec!["a", "b"],
      vec!["a", "c"],
      vec!["b", "c"],
      vec!["a"],
      vec!["b"],
      vec!["c"],
    ]
  );
}

#[test]
fn subset_counts_match_powers_of_two() {
  let items = ["a", "b", "c", "d", "e"];
  for k in 0..=items.len() {
    let subsets = descending_subsets(&items[..k]);
    assert_eq!(subsets.len() + 1, 1 << k, "k = {k}");

    let unique = subsets.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), subsets.len(), "duplicate subset for k = {k}");
  }
}

#[test]
fn input_is_left_untouched() {
  let items = vec![1, 2, 3];
  let _ = combinations(&items, 2);
  assert_eq!(items, vec![1, 2, 3]);
}
