// formwork/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

// Setup mistakes (unknown field names, empty step lists, zero page sizes)
// panic at construction instead of surfacing here, and refused navigation
// is an `Advance` outcome, not an error. What remains are the runtime
// failures a caller can actually hit.
#[derive(Debug, Error)]
pub enum FormError {
  #[error("Submit handler missing: next() reached the final step but no handler was registered")]
  SubmitHandlerMissing,

  #[error("Submission failed. Source: {source}")]
  SubmissionFailure {
    #[source]
    source: AnyhowError,
  },

  #[error("Autosave sink failed. Source: {source}")]
  SaveFailure {
    #[source]
    source: AnyhowError,
  },
}

// The conversion formwork provides for external errors: a failing
// caller-supplied callback surfaces as a SubmissionFailure. FormError is
// not Clone (it carries anyhow sources), so an anyhow::Error that already
// wraps a FormError is re-wrapped rather than unwrapped.
impl From<AnyhowError> for FormError {
  fn from(err: AnyhowError) -> Self {
    FormError::SubmissionFailure { source: err }
  }
}

pub type FormResult<T, E = FormError> = std::result::Result<T, E>;
