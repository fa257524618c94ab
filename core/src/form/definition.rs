// formwork/src/form/definition.rs

//! Contains the `SteppedForm<Err>` struct definition and methods for its
//! construction and free (non-gated) navigation.

use std::future::Future;
use std::pin::Pin;

use crate::core::binding::FieldBinding;
use crate::core::state::FormState;
use crate::core::state_cell::StateCell;
use crate::core::step::StepDef;
use crate::core::value::FormValues;
use crate::schema::{Rule, Schema};

/// Type alias for the form's submission handler.
///
/// The handler receives a snapshot of the form's values and returns a
/// `Future` resolving to `Result<(), Err>`. It is invoked exactly once per
/// successful `next()` on the last step.
pub type SubmitHandler<Err> =
  Box<dyn Fn(FormValues) -> Pin<Box<dyn Future<Output = Result<(), Err>> + Send>> + Send + Sync>;

/// The core stepped-form controller, generic over the error type `Err`
/// its submission handler returns.
///
/// `Err` must be `std::error::Error + Send + Sync + 'static` and
/// additionally `From<crate::error::FormError>` so that framework-level
/// conditions (e.g. a missing submit handler) convert into the caller's
/// error type.
pub struct SteppedForm<Err>
where
  Err: std::error::Error + From<crate::error::FormError> + Send + Sync + 'static,
{
  /// Ordered, immutable list of step definitions for this session.
  pub(crate) steps: Vec<StepDef>,

  /// Shared live state; bindings and the autosave coordinator hold clones.
  pub(crate) state: StateCell<FormState>,

  pub(crate) current: usize,
  pub(crate) highest_visited: usize,
  pub(crate) submitting: bool,

  pub(crate) on_submit: Option<SubmitHandler<Err>>,
}

impl<Err> SteppedForm<Err>
where
  Err: std::error::Error + From<crate::error::FormError> + Send + Sync + 'static,
{
  /// Creates a new `SteppedForm` from its steps and initial values.
  ///
  /// Panics on setup errors: an empty step list, or a step schema that
  /// references a field missing from `initial`.
  pub fn new(steps: Vec<StepDef>, initial: FormValues) -> Self {
    if steps.is_empty() {
      panic!("formwork setup error: a stepped form needs at least one step.");
    }
    for step in &steps {
      for field in step.schema.fields() {
        if !initial.contains_key(field) {
          panic!(
            "formwork setup error: step '{}' validates field '{}' which is not among the initial values.",
            step.title, field
          );
        }
      }
    }

    Self {
      steps,
      state: StateCell::new(FormState::new(initial)),
      current: 0,
      highest_visited: 0,
      submitting: false,
      on_submit: None,
    }
  }

  /// Starts the session at `index` instead of 0, for resuming a partially
  /// completed form. Steps up to `index` count as visited.
  ///
  /// Panics if `index` is out of range.
  pub fn with_initial_step(mut self, index: usize) -> Self {
    if index >= self.steps.len() {
      panic!(
        "formwork setup error: initial step {} out of range for a {}-step form.",
        index,
        self.steps.len()
      );
    }
    self.current = index;
    self.highest_visited = index;
    self
  }

  /// Registers the submission handler invoked by `next()` on the last
  /// step. The handler's error type must be convertible into the form's
  /// `Err`.
  pub fn on_submit<F, UserErr>(&mut self, handler_fn: impl Fn(FormValues) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<(), UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    let final_handler: SubmitHandler<Err> = Box::new(move |values| {
      let user_fut = handler_fn(values);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    self.on_submit = Some(final_handler);
  }

  // --- Bindings and shared state ---

  /// A clone of the shared state handle, e.g. for the autosave
  /// coordinator or for constructing bindings out of band.
  pub fn state(&self) -> StateCell<FormState> {
    self.state.clone()
  }

  /// Builds a `FieldBinding` for `name`, carrying the union of the
  /// field's rules across all steps.
  ///
  /// Panics if the field was never declared.
  pub fn bind(&self, name: &str) -> FieldBinding {
    let rules: Vec<Rule> = self
      .steps
      .iter()
      .filter_map(|step| step.schema.rules_for(name))
      .flat_map(|rules| rules.iter().cloned())
      .collect();
    FieldBinding::new(self.state.clone(), name, rules)
  }

  /// A snapshot of the current values, in declaration order.
  pub fn snapshot(&self) -> FormValues {
    self.state.read().snapshot()
  }

  // --- Derived step state ---

  pub fn current_index(&self) -> usize {
    self.current
  }

  pub fn step_count(&self) -> usize {
    self.steps.len()
  }

  pub fn is_first(&self) -> bool {
    self.current == 0
  }

  pub fn is_last(&self) -> bool {
    self.current + 1 == self.steps.len()
  }

  pub fn current_step(&self) -> &StepDef {
    &self.steps[self.current]
  }

  /// Step titles in order, for progress indicators.
  pub fn titles(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.title.as_str()).collect()
  }

  pub fn is_submitting(&self) -> bool {
    self.submitting
  }

  /// Whether the current step's schema passes against the live values.
  /// Non-mutating: records no errors and touches no fields; used for
  /// disabling a Next/Submit control.
  pub fn current_step_valid(&self) -> bool {
    let values = self.state.map_read(FormState::values);
    self.steps[self.current].schema.validate(&values).is_empty()
  }

  // --- Free navigation (never validates) ---

  /// Moves back one step, so earlier mistakes can be fixed without being
  /// blocked. Returns the new index; already on the first step is a no-op.
  pub fn previous(&mut self) -> usize {
    if self.current > 0 {
      self.current -= 1;
    }
    self.current
  }

  /// Jumps to a previously visited step (progress-indicator click).
  /// Jumping forward past unvalidated steps is refused; returns whether
  /// the move happened.
  pub fn jump(&mut self, target: usize) -> bool {
    if target <= self.highest_visited {
      self.current = target;
      true
    } else {
      false
    }
  }

  /// Union of all steps' schemas, validated only at final submission.
  pub(crate) fn full_schema(&self) -> Schema {
    self
      .steps
      .iter()
      .fold(Schema::new(), |acc, step| acc.merged(&step.schema))
  }
}

impl<Err> std::fmt::Debug for SteppedForm<Err>
where
  Err: std::error::Error + From<crate::error::FormError> + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SteppedForm")
      .field("steps", &self.steps.len())
      .field("current", &self.current)
      .field("highest_visited", &self.highest_visited)
      .field("submitting", &self.submitting)
      .field("has_submit_handler", &self.on_submit.is_some())
      .finish()
  }
}
