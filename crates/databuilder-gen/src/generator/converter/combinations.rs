use std::iter;

/// Every `size`-element subset of `items`, keeping input order within each subset.
///
/// Subsets containing the first item come first, so `[a, b, c]` choose 2 yields `[a, b]`, `[a, c]`, `[b, c]`.
pub fn combinations<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
  if size == 0 {
    return vec![vec![]];
  }
  let Some((first, rest)) = items.split_first() else {
    return vec![];
  };

  let mut subsets = combinations(rest, size - 1)
    .into_iter()
    .map(|tail| iter::once(first.clone()).chain(tail).collect::<Vec<_>>())
    .collect::<Vec<_>>();
  subsets.extend(combinations(rest, size));
  subsets
}

/// Non-empty subsets of `items` from the largest size down to 1.
pub fn descending_subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
  (1..=items.len())
    .rev()
    .flat_map(|size| combinations(items, size))
    .collect()
}
