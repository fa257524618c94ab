// formwork/src/core/step.rs

//! Definition of a single step within a stepped form.

use crate::schema::Schema;

/// One screen of a multi-part form: a display title plus the validation
/// schema scoped to this step's subset of fields.
///
/// The ordered sequence of `StepDef`s is fixed for the lifetime of one
/// form session; all mutable state lives in the controller.
#[derive(Debug, Clone)]
pub struct StepDef {
  pub title: String,
  pub schema: Schema,
}

impl StepDef {
  pub fn new(title: impl Into<String>, schema: Schema) -> Self {
    Self {
      title: title.into(),
      schema,
    }
  }
}
