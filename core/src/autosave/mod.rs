// formwork/src/autosave/mod.rs

//! Debounced background persistence of in-progress form values.
//!
//! The `Autosave` coordinator owns the debounce timer the UI layer would
//! otherwise hide in effect-cleanup conventions: every change restarts the
//! quiet-period timer, dropping the coordinator cancels an armed timer,
//! and saves are serialized so completions can never race.

pub mod coordinator;
pub mod sink;

pub use coordinator::{Autosave, SaveStatus, DEFAULT_DEBOUNCE};
pub use sink::{AutosaveSink, FunctionalSink};
