// src/config/mod.rs
pub mod consts;
pub mod games;
pub mod options;

pub use games::{Game, GameConfig};
pub use options::{Options, OutputFormat};
