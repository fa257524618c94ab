// formwork/src/collection/sort.rs

//! Comparator-driven sort state for table headers: clicking the active
//! column flips the direction, clicking a new column selects it descending.

use std::cmp::Ordering;

/// Sort direction. New keys default to `Descending` (the convention of
/// the list views this was built for: newest/highest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
  Ascending,
  Descending,
}

impl SortOrder {
  fn flipped(self) -> Self {
    match self {
      SortOrder::Ascending => SortOrder::Descending,
      SortOrder::Descending => SortOrder::Ascending,
    }
  }

  /// Orients an ascending comparison to this direction, so comparator
  /// factories can be written once in ascending terms.
  pub fn orient(self, ord: Ordering) -> Ordering {
    match self {
      SortOrder::Ascending => ord,
      SortOrder::Descending => ord.reverse(),
    }
  }
}

/// Sort state over a closed set of column keys `K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sorting<K: Copy + PartialEq> {
  key: K,
  order: SortOrder,
}

impl<K: Copy + PartialEq> Sorting<K> {
  /// Starts on `default_key`, descending.
  pub fn new(default_key: K) -> Self {
    Self {
      key: default_key,
      order: SortOrder::Descending,
    }
  }

  pub fn with_order(key: K, order: SortOrder) -> Self {
    Self { key, order }
  }

  pub fn key(&self) -> K {
    self.key
  }

  pub fn order(&self) -> SortOrder {
    self.order
  }

  /// Header-click semantics: toggling the active key flips the direction;
  /// selecting a new key resets to descending.
  pub fn toggle(&mut self, key: K) {
    if self.key == key {
      self.order = self.order.flipped();
    } else {
      self.key = key;
      self.order = SortOrder::Descending;
    }
  }

  /// A new, sorted copy of `items` using the caller's comparator factory.
  ///
  /// The standard library sort is stable, so a comparator returning
  /// `Ordering::Equal` preserves the prior relative order of ties. A full
  /// re-sort per call is fine for the intended collections (hundreds of
  /// rows).
  pub fn sorted<T, F, C>(&self, items: &[T], factory: F) -> Vec<T>
  where
    T: Clone,
    F: Fn(K, SortOrder) -> C,
    C: FnMut(&T, &T) -> Ordering,
  {
    let mut sorted = items.to_vec();
    sorted.sort_by(factory(self.key, self.order));
    sorted
  }
}
