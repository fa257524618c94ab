// formwork/src/collection/paginate.rs

//! A pager over an in-memory collection. Total over any collection length,
//! including zero; callers can never observe an out-of-range page.

/// Page size used by most list views. Some views use 5 or 10.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Clamped pagination state for a collection of known length.
///
/// The page index is 0-based and always satisfies `0 <= page <= max_page`.
/// When the backing collection changes length (a filter changed, rows were
/// deleted), call `sync_len` before slicing: the max page is recomputed
/// and the current page re-clamped, so a shrunken collection shows its
/// last page rather than a blank one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  page: usize,
  size: usize,
  max: usize,
}

impl Pagination {
  /// Creates a pager for `len` items with the given page size.
  ///
  /// Panics if `size` is 0 — a zero page size is a setup error.
  pub fn new(len: usize, size: usize) -> Self {
    if size == 0 {
      panic!("formwork setup error: page size must be at least 1.");
    }
    Self {
      page: 0,
      size,
      max: Self::max_for(len, size),
    }
  }

  pub fn with_default_size(len: usize) -> Self {
    Self::new(len, DEFAULT_PAGE_SIZE)
  }

  fn max_for(len: usize, size: usize) -> usize {
    if len == 0 {
      0
    } else {
      (len - 1) / size
    }
  }

  pub fn page(&self) -> usize {
    self.page
  }

  pub fn max_page(&self) -> usize {
    self.max
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn is_first_page(&self) -> bool {
    self.page == 0
  }

  pub fn is_last_page(&self) -> bool {
    self.page == self.max
  }

  /// Sets the current page, clamped into `[0, max_page]`.
  pub fn set_page(&mut self, page: usize) {
    self.page = page.min(self.max);
  }

  pub fn next_page(&mut self) {
    self.page = (self.page + 1).min(self.max);
  }

  pub fn previous_page(&mut self) {
    self.page = self.page.saturating_sub(1);
  }

  /// Recomputes the max page for a changed collection length and
  /// re-clamps the current page.
  pub fn sync_len(&mut self, len: usize) {
    self.max = Self::max_for(len, self.size);
    self.page = self.page.min(self.max);
  }

  /// The current page's slice of `items`, of length <= the page size.
  ///
  /// Both slice bounds are clamped to the collection, so a pager that has
  /// not yet been re-synced to a shrunken collection still returns a
  /// valid (possibly empty) slice instead of panicking.
  pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
    let start = (self.page * self.size).min(items.len());
    let end = (start + self.size).min(items.len());
    &items[start..end]
  }
}
