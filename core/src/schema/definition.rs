// formwork/src/schema/definition.rs

//! The `Schema` type: an ordered association of field names to validation
//! rules, scoped to one step (or, merged, to the whole form).

use std::sync::Arc;

use indexmap::IndexMap;

use crate::core::value::{FieldValue, FormValues};

/// A single validation rule. Returns `Ok(())` for a passing value or a
/// human-readable message for a failing one.
///
/// Rules are `Arc`ed so a schema can be cloned cheaply and a field's rules
/// can be shared with its binding for live validation.
pub type Rule = Arc<dyn Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static>;

/// Field name -> first failing message. Absent key means the field is
/// valid. Order follows the schema's field declaration order.
pub type ValidationReport = IndexMap<String, String>;

/// Validation schema for a subset of a form's fields.
#[derive(Clone, Default)]
pub struct Schema {
  checks: Vec<(String, Vec<Rule>)>,
}

impl Schema {
  pub fn new() -> Self {
    Self { checks: Vec::new() }
  }

  /// Adds a field with its rules. Builder-style, consumed and returned.
  ///
  /// Panics if the field was already added to this schema.
  pub fn field<S: Into<String>>(mut self, name: S, rules: impl IntoIterator<Item = Rule>) -> Self {
    let name: String = name.into();
    if self.checks.iter().any(|(n, _)| *n == name) {
      panic!("formwork setup error: field '{}' added twice to the same schema.", name);
    }
    self.checks.push((name, rules.into_iter().collect()));
    self
  }

  /// The field names this schema scopes, in declaration order.
  pub fn fields(&self) -> impl Iterator<Item = &str> {
    self.checks.iter().map(|(name, _)| name.as_str())
  }

  /// The rules registered for one field, if the schema scopes it.
  pub fn rules_for(&self, name: &str) -> Option<&[Rule]> {
    self
      .checks
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, rules)| rules.as_slice())
  }

  pub fn is_empty(&self) -> bool {
    self.checks.is_empty()
  }

  /// Validates the scoped fields against `values`, reporting the first
  /// failing rule's message per field.
  ///
  /// Panics if a scoped field is missing from `values`; the form
  /// controller checks schema/field coverage at construction, so hitting
  /// this indicates the schema was used against the wrong values map.
  pub fn validate(&self, values: &FormValues) -> ValidationReport {
    let mut report = ValidationReport::new();
    for (name, rules) in &self.checks {
      let value = values
        .get(name)
        .unwrap_or_else(|| panic!("formwork setup error: schema field '{}' is not declared on this form.", name));
      for rule in rules {
        if let Err(message) = rule(value) {
          report.insert(name.clone(), message);
          break;
        }
      }
    }
    report
  }

  /// Merges another schema's checks after this one's, for whole-form
  /// validation. A field scoped by both keeps both rule lists.
  pub fn merged(mut self, other: &Schema) -> Self {
    for (name, rules) in &other.checks {
      match self.checks.iter_mut().find(|(n, _)| n == name) {
        Some((_, existing)) => existing.extend(rules.iter().cloned()),
        None => self.checks.push((name.clone(), rules.clone())),
      }
    }
    self
  }
}

impl std::fmt::Debug for Schema {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Schema")
      .field("fields", &self.checks.iter().map(|(n, r)| (n.as_str(), r.len())).collect::<Vec<_>>())
      .finish()
  }
}
