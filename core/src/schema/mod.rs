// formwork/src/schema/mod.rs

//! Per-step validation: a `Schema` maps each field in a step to an ordered
//! list of rules, and `rules` provides constructors for the common ones.
//!
//! Any validator satisfying the `Rule` contract can participate; the
//! built-in constructors cover the shapes seen in real application forms
//! (required text, bounded integers, closed enumerations, URLs, consent
//! checkboxes) without pulling in a schema library.

pub mod definition;
pub mod rules;

pub use definition::{Rule, Schema, ValidationReport};
