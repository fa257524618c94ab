pub mod binding;
pub mod control;
pub mod state;
pub mod state_cell;
pub mod step;
pub mod value;

// Re-export key types for easier access from other formwork modules
pub use binding::FieldBinding;
pub use control::Advance;
pub use state::FormState;
pub use state_cell::StateCell;
pub use step::StepDef;
pub use value::{form_values, FieldValue, FormValues};
