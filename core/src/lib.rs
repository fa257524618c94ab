// src/lib.rs

//! Formwork: a framework-independent, async stepped-form engine for Rust.
//!
//! Formwork extracts the logic a multi-step form UI usually buries in its
//! rendering framework, so the same behavior is unit-testable without
//! mounting anything:
//!  - Ordered steps, each with its own validation schema.
//!  - Forward navigation gated on the current step's validity; the last
//!    step's "next" is the submit action.
//!  - Free backward navigation and jumps to already-visited steps.
//!  - Typed per-field bindings with touched-gated error visibility.
//!  - Debounced, serialized background autosave with a saving/saved
//!    status projection.
//!  - Clamped pagination and header-click sorting for the list views
//!    around the form.

// Declare modules according to the planned structure
pub mod core;
pub mod form;
pub mod schema;
pub mod autosave;
pub mod collection;
pub mod error;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::core::binding::FieldBinding;
pub use crate::core::control::Advance;
pub use crate::core::state::FormState;
pub use crate::core::state_cell::StateCell;
pub use crate::core::step::StepDef;
pub use crate::core::value::{form_values, FieldValue, FormValues};

// The main controller struct
pub use crate::form::definition::{SteppedForm, SubmitHandler};

// Validation
pub use crate::schema::{rules, Rule, Schema, ValidationReport};

// Autosave
pub use crate::autosave::{Autosave, AutosaveSink, FunctionalSink, SaveStatus, DEFAULT_DEBOUNCE};

// Collection view utilities
pub use crate::collection::{Pagination, SortOrder, Sorting, DEFAULT_PAGE_SIZE};

pub use crate::error::{FormError, FormResult};

/*
    Core Workflow:
    1. Declare the form's fields with `form_values([...])` (insertion
       order is declaration order).
    2. Build one `Schema` per step from the `rules` constructors.
    3. Create a `SteppedForm<MyErr>` from the `StepDef`s and initial
       values; register `on_submit`.
    4. Hand `bind("field")` bindings to the input widgets; they write
       values, mark fields touched, and expose touched-gated errors.
    5. Optionally spawn an `Autosave` with a sink wrapping your
       persistence call, and `notify` it after each change.
    6. Drive navigation with `next().await`, `previous()`, `jump(i)`.
*/
