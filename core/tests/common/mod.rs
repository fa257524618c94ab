// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::{
  atomic::{AtomicBool, AtomicUsize, Ordering},
  Arc,
};
use std::time::Duration;

use async_trait::async_trait;
use formwork::{form_values, rules, AutosaveSink, FieldValue, FormError, FormValues, Schema, StepDef};
use parking_lot::Mutex;
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)] // Clone, PartialEq, Eq for assertions
pub enum TestError {
  #[error("Formwork framework error: {0:?}")] // Stored as String for Eq comparison
  Form(String),

  #[error("Test submission failed: {0}")]
  Submit(String),
}

impl From<FormError> for TestError {
  fn from(fe: FormError) -> Self {
    TestError::Form(format!("{:?}", fe))
  }
}

// --- A representative application form: 3 steps over 7 fields ---

pub fn application_values() -> FormValues {
  form_values([
    ("phone_number", FieldValue::text("")),
    ("gender", FieldValue::text("")),
    ("school", FieldValue::text("")),
    ("graduation_year", FieldValue::Int(2026)),
    ("portfolio_url", FieldValue::text("")),
    ("agree_to_privacy", FieldValue::Bool(false)),
    ("agree_to_rules", FieldValue::Bool(false)),
  ])
}

pub fn application_steps() -> Vec<StepDef> {
  vec![
    StepDef::new(
      "About",
      Schema::new()
        .field("phone_number", [rules::required()])
        .field("gender", [rules::one_of(&["male", "female", "non-binary", "other"])]),
    ),
    StepDef::new(
      "Education",
      Schema::new()
        .field("school", [rules::required()])
        .field("graduation_year", [rules::int_range(1980, 2030)])
        .field("portfolio_url", [rules::url()]),
    ),
    StepDef::new(
      "Review",
      Schema::new()
        .field("agree_to_privacy", [rules::accepted()])
        .field("agree_to_rules", [rules::accepted()]),
    ),
  ]
}

/// Values that satisfy every step of `application_steps`.
pub fn complete_application_values() -> FormValues {
  form_values([
    ("phone_number", FieldValue::text("+15555550123")),
    ("gender", FieldValue::text("other")),
    ("school", FieldValue::text("State University")),
    ("graduation_year", FieldValue::Int(2026)),
    ("portfolio_url", FieldValue::text("https://example.com")),
    ("agree_to_privacy", FieldValue::Bool(true)),
    ("agree_to_rules", FieldValue::Bool(true)),
  ])
}

// --- Recording sink for autosave tests ---

/// An `AutosaveSink` that records every call, optionally fails the first
/// N saves, optionally takes `delay` per save, and panics if two saves
/// ever overlap.
pub struct RecordingSink {
  pub calls: Mutex<Vec<FormValues>>,
  pub fail_remaining: AtomicUsize,
  pub in_flight: AtomicBool,
  pub delay: Option<Duration>,
}

impl RecordingSink {
  pub fn new() -> Arc<Self> {
    Arc::new(Self {
      calls: Mutex::new(Vec::new()),
      fail_remaining: AtomicUsize::new(0),
      in_flight: AtomicBool::new(false),
      delay: None,
    })
  }

  pub fn failing(times: usize) -> Arc<Self> {
    let sink = Self::new();
    sink.fail_remaining.store(times, Ordering::SeqCst);
    sink
  }

  pub fn slow(delay: Duration) -> Arc<Self> {
    Arc::new(Self {
      calls: Mutex::new(Vec::new()),
      fail_remaining: AtomicUsize::new(0),
      in_flight: AtomicBool::new(false),
      delay: Some(delay),
    })
  }

  pub fn call_count(&self) -> usize {
    self.calls.lock().len()
  }
}

#[async_trait]
impl AutosaveSink for RecordingSink {
  async fn save(&self, values: FormValues) -> anyhow::Result<()> {
    assert!(
      !self.in_flight.swap(true, Ordering::SeqCst),
      "two autosave calls overlapped"
    );
    if let Some(delay) = self.delay {
      tokio::time::sleep(delay).await;
    }
    let failing = self
      .fail_remaining
      .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
      .is_ok();
    self.in_flight.store(false, Ordering::SeqCst);
    if failing {
      anyhow::bail!("injected save failure");
    }
    self.calls.lock().push(values);
    Ok(())
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
