// formwork/src/core/value.rs

//! The closed set of value shapes a form field can hold, and the ordered
//! map of all field values for one form session.

use indexmap::IndexMap;

/// The current value of a single form field.
///
/// Multi-step application forms observed in practice only need three
/// shapes: free text (names, URLs, phone numbers, dates kept as entered),
/// integers (graduation year, events attended), and booleans (consent
/// checkboxes).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
  Text(String),
  Int(i64),
  Bool(bool),
}

impl FieldValue {
  pub fn text(s: impl Into<String>) -> Self {
    FieldValue::Text(s.into())
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      FieldValue::Text(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_int(&self) -> Option<i64> {
    match self {
      FieldValue::Int(n) => Some(*n),
      _ => None,
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      FieldValue::Bool(b) => Some(*b),
      _ => None,
    }
  }

  /// True for text fields holding the empty string. Ints and bools always
  /// count as filled in; "unchecked" is a valid state for a checkbox.
  pub fn is_empty(&self) -> bool {
    matches!(self, FieldValue::Text(s) if s.is_empty())
  }
}

impl From<&str> for FieldValue {
  fn from(s: &str) -> Self {
    FieldValue::Text(s.to_string())
  }
}

impl From<String> for FieldValue {
  fn from(s: String) -> Self {
    FieldValue::Text(s)
  }
}

impl From<i64> for FieldValue {
  fn from(n: i64) -> Self {
    FieldValue::Int(n)
  }
}

impl From<bool> for FieldValue {
  fn from(b: bool) -> Self {
    FieldValue::Bool(b)
  }
}

/// All field values for one form session, keyed by field name.
///
/// Iteration order is insertion order, which by construction is the
/// declaration order of the fields.
pub type FormValues = IndexMap<String, FieldValue>;

/// Convenience constructor for a `FormValues` map from `(name, value)`
/// pairs, preserving the given order.
pub fn form_values<N, V, I>(pairs: I) -> FormValues
where
  N: Into<String>,
  V: Into<FieldValue>,
  I: IntoIterator<Item = (N, V)>,
{
  pairs.into_iter().map(|(n, v)| (n.into(), v.into())).collect()
}
