// src/progress.rs
use tracing::{info, warn};

/// Lightweight progress reporting used by pipeline runs.
/// Frontends implement this to surface row counts to an operator.
pub trait Progress {
    /// Called once the raw batch for `game` is loaded.
    fn begin(&mut self, _game: &str, _rows: usize) {}

    /// Called after every validator pass.
    fn stage(&mut self, _label: &str, _before: usize, _after: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when the canonical table for `game` has been written.
    fn finish(&mut self, _game: &str, _rows: usize) {}

    /// Runner hook: one game completed on a worker.
    fn item_done(&mut self, _game: &str, _rows: usize) {}

    /// Runner hook: one game failed on a worker.
    fn item_failed(&mut self, _game: &str, _msg: &str) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards everything to `tracing`, tagged with the game being processed.
#[derive(Default)]
pub struct TracingProgress {
    game: String,
}

impl TracingProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for TracingProgress {
    fn begin(&mut self, game: &str, rows: usize) {
        self.game = game.to_string();
        info!(game, rows, "loaded raw batch");
    }

    fn stage(&mut self, label: &str, before: usize, after: usize) {
        let removed = before - after;
        info!(game = %self.game, label, before, after, removed, "filter pass");
        if is_sharp_drop(before, removed) {
            warn!(game = %self.game, label, before, removed, "filter removed most of the batch; upstream schema may have changed");
        }
    }

    fn log(&mut self, msg: &str) {
        info!(game = %self.game, "{msg}");
    }

    fn finish(&mut self, game: &str, rows: usize) {
        info!(game, rows, "wrote canonical table");
    }

    fn item_done(&mut self, game: &str, rows: usize) {
        info!(game, rows, "pipeline finished");
    }

    fn item_failed(&mut self, game: &str, msg: &str) {
        warn!(game, "pipeline failed: {msg}");
    }
}

/// Batches this small are too noisy for the drop heuristic.
const SHARP_DROP_MIN_ROWS: usize = 20;

pub fn is_sharp_drop(before: usize, removed: usize) -> bool {
    before >= SHARP_DROP_MIN_ROWS && removed * 2 > before
}
