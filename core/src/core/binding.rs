// formwork/src/core/binding.rs

//! `FieldBinding`: the explicit, statically-typed handle an input widget
//! gets for one field, replacing duck-typed "field props" spreading.

use crate::core::state::FormState;
use crate::core::state_cell::StateCell;
use crate::core::value::FieldValue;
use crate::schema::Rule;

/// A named handle over one field of a shared `FormState`.
///
/// Bindings are cheap to clone (an `Arc`'d state handle plus `Arc`'d
/// rules) and carry the field's validation rules so changes can be
/// re-validated live, without going back through the step controller.
#[derive(Clone)]
pub struct FieldBinding {
  name: String,
  state: StateCell<FormState>,
  rules: Vec<Rule>,
}

impl FieldBinding {
  /// Binds `name` on the given state, validating changes with `rules`.
  ///
  /// Panics if the field was never declared; binding an unknown field is
  /// a construction-time bug.
  pub fn new(state: StateCell<FormState>, name: impl Into<String>, rules: Vec<Rule>) -> Self {
    let name: String = name.into();
    if !state.read().has_field(&name) {
      panic!("formwork setup error: cannot bind undeclared field '{}'.", name);
    }
    Self { name, state, rules }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// The field's current value.
  pub fn value(&self) -> FieldValue {
    self
      .state
      .read()
      .value(&self.name)
      .cloned()
      .unwrap_or_else(|| unreachable!("field existence checked at bind time"))
  }

  /// Sets a new value and re-validates the field live, updating its error
  /// entry in place.
  pub fn set(&self, value: FieldValue) {
    let mut state = self.state.write();
    state.set_value(&self.name, value);
    let error = self.first_failure(state.value(&self.name).expect("declared field"));
    match error {
      Some(message) => state.set_error(&self.name, message),
      None => state.clear_error(&self.name),
    }
  }

  /// Marks the field as touched (errors become visible) and validates it,
  /// covering callers that skip live validation on change.
  pub fn blur(&self) {
    let mut state = self.state.write();
    state.touch(&self.name);
    let error = self.first_failure(state.value(&self.name).expect("declared field"));
    match error {
      Some(message) => state.set_error(&self.name, message),
      None => state.clear_error(&self.name),
    }
  }

  /// The error message to display, gated by the touched/validated policy.
  pub fn error(&self) -> Option<String> {
    self.state.read().visible_error(&self.name).map(String::from)
  }

  fn first_failure(&self, value: &FieldValue) -> Option<String> {
    self.rules.iter().find_map(|rule| rule(value).err())
  }
}

impl std::fmt::Debug for FieldBinding {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FieldBinding")
      .field("name", &self.name)
      .field("rules", &self.rules.len())
      .finish()
  }
}
