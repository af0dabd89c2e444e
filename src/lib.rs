// src/lib.rs
//! Normalization core for raw esports match records.
//!
//! Raw JSON-lines batches (one or more per game) are decoded into a fixed
//! row shape, filtered through labelled validity passes that archive every
//! rejected row, and written as a deduplicated canonical table sorted by
//! `(date, match_id)`.
//!
//! ```no_run
//! use esports_norm::{config::{Game, Options}, engine, progress::TracingProgress};
//!
//! let opts = Options::from_env()?;
//! let report = engine::process(Game::CounterStrike, &opts, &mut TracingProgress::new())?;
//! println!("{} rows -> {}", report.rows_out, report.output.display());
//! # Ok::<(), esports_norm::error::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod engine;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod raw;
pub mod resolve;
pub mod runner;
pub mod snapshot;
pub mod specs;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
