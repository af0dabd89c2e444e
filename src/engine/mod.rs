// src/engine/mod.rs
//! Generic pipeline engine. A game is described by a [`GameSpec`]: ordered
//! rejection passes and derivation hooks over the decoded rows, plus an
//! optional team-decomposition section. The engine loads the raw files,
//! runs the steps through the validator, applies the closing guards and
//! writes the canonical table.

pub mod checks;
pub mod decompose;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod hooks;
pub mod types;

pub use engine::{PipelineReport, process, run_spec};
pub use types::{Check, GameSpec, Hook, ParticipantField, Step, TeamSpec, UnpackRule};
