// src/resolve/mod.rs
//! Shared derivation rules: outcomes from winners or scores, and canonical
//! competitor names from candidate fields.

pub mod names;
pub mod outcome;

pub use names::{CaseRule, NameSource};
pub use outcome::{DrawRule, Outcome, OutcomeRule, WinnerRule};
