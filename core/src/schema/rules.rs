// formwork/src/schema/rules.rs

//! Constructors for the common validation rules.

use std::sync::Arc;

use crate::core::value::FieldValue;
use crate::schema::Rule;

/// The field must be filled in: non-empty text, or any int/bool.
pub fn required() -> Rule {
  Arc::new(|value: &FieldValue| {
    if value.is_empty() {
      Err("This field is required".to_string())
    } else {
      Ok(())
    }
  })
}

/// Integer fields bounded inclusively, e.g. graduation year 1980..=2030 or
/// hackathons attended 0..=50.
pub fn int_range(min: i64, max: i64) -> Rule {
  Arc::new(move |value: &FieldValue| match value.as_int() {
    Some(n) if n < min => Err(format!("Must be at least {}", min)),
    Some(n) if n > max => Err(format!("Must be at most {}", max)),
    Some(_) => Ok(()),
    None => Err("Must be a number".to_string()),
  })
}

/// Text fields restricted to a closed enumeration (gender, race/ethnicity,
/// level of study, ...). Empty text is left to `required()`.
pub fn one_of(options: &[&str]) -> Rule {
  let options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
  Arc::new(move |value: &FieldValue| match value.as_text() {
    Some("") => Ok(()),
    Some(s) if options.iter().any(|o| o == s) => Ok(()),
    Some(_) => Err("Must be one of the allowed options".to_string()),
    None => Err("Must be text".to_string()),
  })
}

/// Optional URL fields (portfolio, VCS profile). Empty text passes.
pub fn url() -> Rule {
  Arc::new(|value: &FieldValue| match value.as_text() {
    Some("") => Ok(()),
    Some(s) if s.starts_with("http://") || s.starts_with("https://") => Ok(()),
    Some(_) => Err("Must be a valid URL".to_string()),
    None => Err("Must be text".to_string()),
  })
}

/// Consent checkboxes that must be ticked before submission.
pub fn accepted() -> Rule {
  Arc::new(|value: &FieldValue| match value.as_bool() {
    Some(true) => Ok(()),
    Some(false) => Err("You must accept to continue".to_string()),
    None => Err("Must be a checkbox".to_string()),
  })
}

/// An arbitrary predicate with a fixed failure message, for checks the
/// built-ins don't cover (phone number formats, date patterns, ...).
pub fn predicate(
  check: impl Fn(&FieldValue) -> bool + Send + Sync + 'static,
  message: impl Into<String>,
) -> Rule {
  let message: String = message.into();
  Arc::new(move |value: &FieldValue| if check(value) { Ok(()) } else { Err(message.clone()) })
}
