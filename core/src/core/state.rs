// formwork/src/core/state.rs

//! `FormState` holds the live values, validation errors, and interaction
//! markers for one form session. It is owned by exactly one
//! `SteppedForm` and shared (behind a `StateCell`) with field bindings
//! and the autosave coordinator.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::core::value::{FieldValue, FormValues};

/// Live state of a form session.
///
/// Invariants:
/// - every key in `errors` also exists in `values` (errors are only ever
///   written through validation of declared fields);
/// - `values` holds every declared field at all times, in declaration
///   order.
#[derive(Debug, Clone, Default)]
pub struct FormState {
  values: FormValues,
  errors: IndexMap<String, String>,
  touched: HashSet<String>,
  all_validated: bool,
}

impl FormState {
  /// Creates the state for a new session from the declared initial values.
  pub fn new(initial: FormValues) -> Self {
    Self {
      values: initial,
      errors: IndexMap::new(),
      touched: HashSet::new(),
      all_validated: false,
    }
  }

  pub fn values(&self) -> &FormValues {
    &self.values
  }

  /// Clones the current values, e.g. for handing to a persistence sink.
  pub fn snapshot(&self) -> FormValues {
    self.values.clone()
  }

  pub fn value(&self, name: &str) -> Option<&FieldValue> {
    self.values.get(name)
  }

  pub fn has_field(&self, name: &str) -> bool {
    self.values.contains_key(name)
  }

  /// Sets a declared field to a new value.
  ///
  /// Panics if `name` was never declared: writing to an unknown field is a
  /// construction-time bug, not a runtime condition to recover from.
  pub fn set_value(&mut self, name: &str, value: FieldValue) {
    match self.values.get_mut(name) {
      Some(slot) => *slot = value,
      None => panic!("formwork setup error: field '{}' is not declared on this form.", name),
    }
  }

  /// Marks a field as having received user interaction.
  pub fn touch(&mut self, name: &str) {
    self.touched.insert(name.to_string());
  }

  pub fn is_touched(&self, name: &str) -> bool {
    self.touched.contains(name)
  }

  /// The raw validation error for a field, regardless of visibility.
  pub fn error(&self, name: &str) -> Option<&str> {
    self.errors.get(name).map(String::as_str)
  }

  /// The error to actually show: only once the field has been interacted
  /// with, or the whole form has been explicitly validated. Prevents every
  /// field lighting up red on first render.
  pub fn visible_error(&self, name: &str) -> Option<&str> {
    if self.all_validated || self.is_touched(name) {
      self.error(name)
    } else {
      None
    }
  }

  pub fn errors(&self) -> &IndexMap<String, String> {
    &self.errors
  }

  pub fn is_valid(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn set_error(&mut self, name: &str, message: String) {
    debug_assert!(self.values.contains_key(name), "error recorded for undeclared field '{}'", name);
    self.errors.insert(name.to_string(), message);
  }

  pub fn clear_error(&mut self, name: &str) {
    self.errors.shift_remove(name);
  }

  /// Replaces the errors for the given fields with a fresh validation
  /// report: fields absent from `report` become valid, fields present get
  /// the reported message.
  pub fn apply_report<'a>(
    &mut self,
    fields: impl IntoIterator<Item = &'a str>,
    report: &IndexMap<String, String>,
  ) {
    for field in fields {
      match report.get(field) {
        Some(message) => {
          self.errors.insert(field.to_string(), message.clone());
        }
        None => {
          self.errors.shift_remove(field);
        }
      }
    }
  }

  /// Records that the whole form has been validated (submit attempt);
  /// from now on errors are visible on untouched fields too.
  pub fn mark_all_validated(&mut self) {
    self.all_validated = true;
  }

  pub fn all_validated(&self) -> bool {
    self.all_validated
  }

  /// Resets errors and interaction markers, keeping the current values.
  pub fn reset_interaction(&mut self) {
    self.errors.clear();
    self.touched.clear();
    self.all_validated = false;
  }
}
