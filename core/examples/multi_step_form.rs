// examples/multi_step_form.rs
//
// Drives a three-step application form end to end: a refused advance,
// fixing the fields through bindings, and the final submit.

use formwork::{form_values, rules, Advance, FieldValue, FormError, Schema, StepDef, SteppedForm};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), FormError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  let steps = vec![
    StepDef::new(
      "About",
      Schema::new()
        .field("name", [rules::required()])
        .field("gender", [rules::one_of(&["male", "female", "non-binary", "other"])]),
    ),
    StepDef::new(
      "Education",
      Schema::new()
        .field("school", [rules::required()])
        .field("graduation_year", [rules::int_range(1980, 2030)]),
    ),
    StepDef::new("Review", Schema::new().field("agree_to_rules", [rules::accepted()])),
  ];

  let initial = form_values([
    ("name", FieldValue::text("")),
    ("gender", FieldValue::text("")),
    ("school", FieldValue::text("")),
    ("graduation_year", FieldValue::Int(2026)),
    ("agree_to_rules", FieldValue::Bool(false)),
  ]);

  let mut form: SteppedForm<FormError> = SteppedForm::new(steps, initial);
  form.on_submit(|values| async move {
    println!("submitting {} fields", values.len());
    Ok::<(), FormError>(())
  });

  println!("steps: {:?}", form.titles());

  // The name is empty, so the first advance is refused.
  assert_eq!(form.next().await?, Advance::Rejected);
  println!(
    "refused; visible error: {:?}",
    form.state().read().visible_error("name")
  );

  form.bind("name").set(FieldValue::text("Ada"));
  form.bind("gender").set(FieldValue::text("other"));
  assert_eq!(form.next().await?, Advance::Moved(1));

  form.bind("school").set(FieldValue::text("State University"));
  assert_eq!(form.next().await?, Advance::Moved(2));

  // Jump back to a visited step and return.
  assert!(form.jump(0));
  assert!(form.jump(2));

  form.bind("agree_to_rules").set(FieldValue::Bool(true));
  assert_eq!(form.next().await?, Advance::Submitted);
  println!("done");
  Ok(())
}
