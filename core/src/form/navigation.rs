// formwork/src/form/navigation.rs

//! Contains `SteppedForm::next()`, the validation-gated forward move that
//! doubles as the submit action on the last step.

use tracing::{event, instrument, Level};

use crate::core::control::Advance;
use crate::core::state::FormState;
use crate::error::FormError;
use crate::form::definition::SteppedForm;

impl<Err> SteppedForm<Err>
where
  Err: std::error::Error + From<FormError> + Send + Sync + 'static,
{
  /// Attempts to advance to the next step.
  ///
  /// Only the current step's schema is validated; fields belonging to
  /// not-yet-visited steps may be invalid without blocking. On the last
  /// step, a passing validation of the *whole* form triggers the submit
  /// handler instead of advancing (submit-vs-next is determined solely by
  /// "are we on the last step").
  ///
  /// Expected refusals (invalid step, submission already in flight) are
  /// reported as `Ok(Advance::Rejected)`; `Err` is reserved for a failing
  /// submit handler or a missing one.
  #[instrument(
        name = "SteppedForm::next",
        skip_all,
        fields(
            form_error_type = %std::any::type_name::<Err>(),
            step_count = self.steps.len(),
            current_step = self.current,
        ),
        err(Display)
    )]
  pub async fn next(&mut self) -> Result<Advance, Err> {
    let schema = self.steps[self.current].schema.clone();
    let step_title = self.steps[self.current].title.clone();

    // Validate only the current step's subset of fields.
    let report = {
      let values = self.state.map_read(FormState::values);
      schema.validate(&values)
    };
    let step_fields: Vec<String> = schema.fields().map(str::to_string).collect();
    {
      let mut state = self.state.write();
      state.apply_report(step_fields.iter().map(String::as_str), &report);
      if !report.is_empty() {
        // A refused advance makes the step's errors visible.
        for field in &step_fields {
          state.touch(field);
        }
      }
    }

    if !report.is_empty() {
      event!(
        Level::INFO,
        step_title = %step_title,
        invalid_fields = report.len(),
        "Step validation failed; staying on current step."
      );
      return Ok(Advance::Rejected);
    }

    if self.current + 1 < self.steps.len() {
      self.current += 1;
      self.highest_visited = self.highest_visited.max(self.current);
      event!(Level::DEBUG, new_step = self.current, "Advanced to next step.");
      return Ok(Advance::Moved(self.current));
    }

    // Last step: submit instead of advancing.
    if self.submitting {
      event!(Level::WARN, "Submission already in flight; refusing duplicate submit.");
      return Ok(Advance::Rejected);
    }

    // The only place the union of all steps' schemas is validated.
    let full_schema = self.full_schema();
    let full_report = {
      let values = self.state.map_read(FormState::values);
      full_schema.validate(&values)
    };
    {
      let mut state = self.state.write();
      state.mark_all_validated();
      let all_fields: Vec<String> = full_schema.fields().map(str::to_string).collect();
      state.apply_report(all_fields.iter().map(String::as_str), &full_report);
    }
    if !full_report.is_empty() {
      event!(
        Level::INFO,
        invalid_fields = full_report.len(),
        "Full-form validation failed; submission refused."
      );
      return Ok(Advance::Rejected);
    }

    let handler = match &self.on_submit {
      Some(handler) => handler,
      None => {
        event!(Level::ERROR, "No submit handler registered for final step.");
        return Err(Err::from(FormError::SubmitHandlerMissing));
      }
    };

    let snapshot = self.state.read().snapshot();
    let submit_fut = handler(snapshot);

    event!(Level::DEBUG, "Submitting form.");
    self.submitting = true;
    let result = submit_fut.await;
    // The in-flight flag resets whether the handler resolved or failed;
    // a rejected submission must never leave the form stuck.
    self.submitting = false;

    match result {
      Ok(()) => {
        event!(Level::INFO, "Form submitted.");
        Ok(Advance::Submitted)
      }
      Err(e) => {
        event!(Level::ERROR, error = %e, "Submit handler failed.");
        Err(e)
      }
    }
  }
}
