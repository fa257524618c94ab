// tests/form_navigation_tests.rs
mod common; // Reference the common module

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::*;
use formwork::{form_values, rules, Advance, FieldValue, Schema, StepDef, SteppedForm};
use serial_test::serial;

fn three_step_form() -> SteppedForm<TestError> {
  SteppedForm::new(application_steps(), application_values())
}

#[tokio::test]
#[serial]
async fn test_invalid_step_blocks_next_and_records_errors() {
  setup_tracing();
  let mut form = three_step_form();

  // phone_number is empty, so the About step must not validate.
  let outcome = form.next().await.unwrap();
  assert_eq!(outcome, Advance::Rejected);
  assert_eq!(form.current_index(), 0);

  // The refusal makes the step's errors visible.
  let state = form.state();
  assert_eq!(state.read().visible_error("phone_number"), Some("This field is required"));

  // Fields of later steps are untouched: globally invalid but not blocking.
  assert_eq!(state.read().error("agree_to_privacy"), None);
}

#[tokio::test]
#[serial]
async fn test_valid_step_advances() {
  setup_tracing();
  let mut form = three_step_form();

  form.bind("phone_number").set(FieldValue::text("+15555550123"));
  form.bind("gender").set(FieldValue::text("other"));

  let outcome = form.next().await.unwrap();
  assert_eq!(outcome, Advance::Moved(1));
  assert_eq!(form.current_index(), 1);
  assert!(!form.is_first());
  assert!(!form.is_last());
}

#[tokio::test]
#[serial]
async fn test_previous_never_validates() {
  setup_tracing();
  let mut form = three_step_form();
  form.bind("phone_number").set(FieldValue::text("+15555550123"));
  form.next().await.unwrap();
  assert_eq!(form.current_index(), 1);

  // Make the About step invalid again; going back must still work.
  form.bind("phone_number").set(FieldValue::text(""));
  assert_eq!(form.previous(), 0);
  assert_eq!(form.current_index(), 0);

  // Already on the first step: no-op.
  assert_eq!(form.previous(), 0);
}

#[tokio::test]
#[serial]
async fn test_jump_only_to_visited_steps() {
  setup_tracing();
  let mut form = three_step_form();
  form.bind("phone_number").set(FieldValue::text("+15555550123"));
  form.next().await.unwrap(); // now on step 1, highest visited 1

  assert!(!form.jump(2), "jump past unvalidated steps must be refused");
  assert_eq!(form.current_index(), 1);

  assert!(form.jump(0));
  assert_eq!(form.current_index(), 0);

  // Forward again to a step already visited.
  assert!(form.jump(1));
  assert_eq!(form.current_index(), 1);
}

#[tokio::test]
#[serial]
async fn test_last_step_next_submits_without_moving() {
  setup_tracing();
  let submit_count = Arc::new(AtomicUsize::new(0));

  let schema_a = Schema::new().field("x", [rules::required()]);
  let schema_b = Schema::new().field("done", [rules::accepted()]);
  let mut form: SteppedForm<TestError> = SteppedForm::new(
    vec![StepDef::new("First", schema_a), StepDef::new("Second", schema_b)],
    form_values([("x", FieldValue::text("ok")), ("done", FieldValue::Bool(true))]),
  );

  let counter = submit_count.clone();
  form.on_submit(move |_values| {
    let counter = counter.clone();
    async move {
      counter.fetch_add(1, Ordering::SeqCst);
      Ok::<(), TestError>(())
    }
  });

  assert_eq!(form.next().await.unwrap(), Advance::Moved(1));
  assert!(form.is_last());

  let outcome = form.next().await.unwrap();
  assert_eq!(outcome, Advance::Submitted);
  assert_eq!(form.current_index(), 1, "submit must not change the step index");
  assert_eq!(submit_count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
#[serial]
async fn test_submit_receives_snapshot_in_declaration_order() {
  setup_tracing();
  let seen = Arc::new(parking_lot::Mutex::new(Vec::<String>::new()));

  let mut form: SteppedForm<TestError> = SteppedForm::new(application_steps(), complete_application_values());
  let seen_clone = seen.clone();
  form.on_submit(move |values| {
    let seen_clone = seen_clone.clone();
    async move {
      *seen_clone.lock() = values.keys().cloned().collect();
      Ok::<(), TestError>(())
    }
  });

  form.next().await.unwrap();
  form.next().await.unwrap();
  assert_eq!(form.next().await.unwrap(), Advance::Submitted);

  let keys = seen.lock().clone();
  assert_eq!(
    keys,
    vec![
      "phone_number",
      "gender",
      "school",
      "graduation_year",
      "portfolio_url",
      "agree_to_privacy",
      "agree_to_rules",
    ]
  );
}

#[tokio::test]
#[serial]
async fn test_full_form_validated_only_at_submission() {
  setup_tracing();
  let mut form: SteppedForm<TestError> = SteppedForm::new(application_steps(), complete_application_values());
  form.on_submit(|_values| async { Ok::<(), TestError>(()) });

  form.next().await.unwrap();
  form.next().await.unwrap();
  assert!(form.is_last());

  // Invalidate a field belonging to an earlier step. The Review step's
  // own schema still passes, but the final submission must be refused.
  form.state().write().set_value("phone_number", FieldValue::text(""));

  let outcome = form.next().await.unwrap();
  assert_eq!(outcome, Advance::Rejected);
  assert_eq!(form.current_index(), 2);

  // Full validation makes the error visible even though the field was
  // never touched in this session.
  assert_eq!(
    form.state().read().visible_error("phone_number"),
    Some("This field is required")
  );
}

#[tokio::test]
#[serial]
async fn test_failed_submission_resets_in_flight_flag() {
  setup_tracing();
  let attempts = Arc::new(AtomicUsize::new(0));

  let mut form: SteppedForm<TestError> = SteppedForm::new(application_steps(), complete_application_values());
  let attempts_clone = attempts.clone();
  form.on_submit(move |_values| {
    let attempts_clone = attempts_clone.clone();
    async move {
      if attempts_clone.fetch_add(1, Ordering::SeqCst) == 0 {
        Err(TestError::Submit("backend rejected the application".to_string()))
      } else {
        Ok(())
      }
    }
  });

  form.next().await.unwrap();
  form.next().await.unwrap();

  let first = form.next().await;
  assert_eq!(
    first.err().unwrap(),
    TestError::Submit("backend rejected the application".to_string())
  );
  assert!(!form.is_submitting(), "a rejected submission must re-enable submit");

  // The retry goes through.
  assert_eq!(form.next().await.unwrap(), Advance::Submitted);
  assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
#[serial]
async fn test_missing_submit_handler_is_an_error() {
  setup_tracing();
  let mut form: SteppedForm<TestError> = SteppedForm::new(
    vec![StepDef::new("Only", Schema::new().field("x", [rules::required()]))],
    form_values([("x", FieldValue::text("ok"))]),
  );

  let result = form.next().await;
  match result {
    Err(TestError::Form(s)) => assert!(s.contains("SubmitHandlerMissing")),
    other => panic!("Expected FormError::SubmitHandlerMissing, got {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn test_initial_step_resume() {
  setup_tracing();
  let mut form: SteppedForm<TestError> =
    SteppedForm::new(application_steps(), complete_application_values()).with_initial_step(1);

  assert_eq!(form.current_index(), 1);
  // Steps up to the initial one count as visited.
  assert!(form.jump(0));
  assert!(form.jump(1));
  assert!(!form.jump(2));
}

#[test]
fn test_current_step_valid_is_a_non_mutating_probe() {
  setup_tracing();
  let form = three_step_form();

  // phone_number is empty, so the About step does not validate yet.
  assert!(!form.current_step_valid());
  // Probing records nothing: no error surfaces and nothing is touched.
  assert_eq!(form.bind("phone_number").error(), None);
  assert!(!form.state().read().is_touched("phone_number"));

  form.bind("phone_number").set(FieldValue::text("+15555550123"));
  assert!(form.current_step_valid());
}

#[test]
#[should_panic(expected = "formwork setup error")]
fn test_empty_step_list_panics() {
  let _form: SteppedForm<TestError> = SteppedForm::new(vec![], application_values());
}

#[test]
#[should_panic(expected = "formwork setup error")]
fn test_schema_referencing_undeclared_field_panics() {
  let steps = vec![StepDef::new(
    "Broken",
    Schema::new().field("no_such_field", [rules::required()]),
  )];
  let _form: SteppedForm<TestError> = SteppedForm::new(steps, application_values());
}
