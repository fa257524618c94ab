// formwork/src/core/state_cell.rs

use std::sync::Arc;

use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared handle to one form session's live state.
///
/// Every `FieldBinding` and the autosave coordinator hold a clone of the
/// same cell, so a write through any handle is visible to all of them.
///
/// IMPORTANT: the guards are blocking and MUST NOT be held across `.await`
/// suspension points in asynchronous code.
#[derive(Debug)]
pub struct StateCell<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> StateCell<T> {
  pub fn new(data: T) -> Self {
    StateCell(Arc::new(RwLock::new(data)))
  }

  /// Acquires a read lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// Acquires a write lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Projects one part of the state out under a read lock, e.g.
  /// `cell.map_read(FormState::values)` to borrow just the value map.
  pub fn map_read<F, U: ?Sized>(&self, f: F) -> MappedRwLockReadGuard<'_, U>
  where
    F: FnOnce(&T) -> &U,
  {
    RwLockReadGuard::map(self.read(), f)
  }
}

impl<T: Send + Sync + 'static> Clone for StateCell<T> {
  fn clone(&self) -> Self {
    StateCell(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for StateCell<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
