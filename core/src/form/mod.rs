// formwork/src/form/mod.rs

//! The `SteppedForm<Err>` controller: construction, step navigation, and
//! the validation-gated next/submit logic.

pub mod definition;
pub mod navigation;

// Re-export the main controller struct
pub use definition::{SteppedForm, SubmitHandler};
