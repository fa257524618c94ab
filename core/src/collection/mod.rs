// formwork/src/collection/mod.rs

//! Generic list-view utilities shared across table screens: a clamped
//! pager and a comparator-driven sort controller. Pure in-memory helpers;
//! fetching the backing collection is the caller's concern.

pub mod paginate;
pub mod sort;

pub use paginate::{Pagination, DEFAULT_PAGE_SIZE};
pub use sort::{SortOrder, Sorting};
