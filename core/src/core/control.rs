// formwork/src/core/control.rs

//! Outcomes of a navigation attempt on a stepped form.

/// Result of calling `SteppedForm::next()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
  /// The current step validated and the form moved to the given index.
  Moved(usize),
  /// Navigation was refused: the current step is invalid, or a submission
  /// is already in flight. The step index is unchanged and per-field
  /// errors have been made visible.
  Rejected,
  /// The form was on its last step, the full form validated, and the
  /// submit handler resolved successfully.
  Submitted,
}
