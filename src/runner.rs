// src/runner.rs
//! Several pipelines at once on a small worker pool. Pipelines share no
//! mutable state; each worker takes the next game off a shared index and
//! sends its result back to the calling thread, which owns the progress
//! sink.
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;

use tracing::warn;

use crate::config::games::Game;
use crate::config::options::Options;
use crate::engine::{PipelineReport, process};
use crate::error::Result;
use crate::progress::{Progress, TracingProgress};

#[derive(Debug, Default)]
pub struct RunSummary {
    pub completed: Vec<PipelineReport>,
    /// Games whose pipeline hit a fatal error, with the message.
    pub failed: Vec<(Game, String)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

type Outcome = std::result::Result<PipelineReport, (Game, String)>;

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("no message");
    format!("pipeline panicked: {detail}")
}

/// Run `games` with up to `options.workers` threads. A failing game does not
/// stop the others, and a panicking pipeline is reported as a failure.
pub fn run(games: &[Game], options: &Options, progress: &mut dyn Progress) -> RunSummary {
    run_with(games, options, progress, process)
}

fn run_with<F>(games: &[Game], options: &Options, progress: &mut dyn Progress, job: F) -> RunSummary
where
    F: Fn(Game, &Options, &mut dyn Progress) -> Result<PipelineReport> + Send + Sync + 'static,
{
    let mut summary = RunSummary::default();
    if games.is_empty() {
        return summary;
    }

    let games_arc: Arc<Vec<Game>> = Arc::new(games.to_vec());
    let counter = Arc::new(AtomicUsize::new(0));
    let job = Arc::new(job);
    let (res_tx, res_rx) = mpsc::channel::<Outcome>();

    let workers = options.workers.min(games.len()).max(1);
    let mut handles = Vec::with_capacity(workers);

    for _ in 0..workers {
        let games = Arc::clone(&games_arc);
        let idx = Arc::clone(&counter);
        let job = Arc::clone(&job);
        let tx = res_tx.clone();
        let opts = options.clone();

        handles.push(thread::spawn(move || {
            // stage counts from worker threads go straight to the log
            let mut stage_log = TracingProgress::new();
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= games.len() {
                    break;
                }
                let game = games[i];
                let result = match panic::catch_unwind(AssertUnwindSafe(|| job(game, &opts, &mut stage_log))) {
                    Ok(r) => r.map_err(|e| (game, e.to_string())),
                    Err(payload) => Err((game, panic_message(payload.as_ref()))),
                };
                if tx.send(result).is_err() {
                    break;
                }
            }
        }));
    }
    drop(res_tx); // main thread is sole receiver now

    for result in res_rx.iter() {
        match result {
            Ok(report) => {
                progress.item_done(report.game.long_name(), report.rows_out);
                summary.completed.push(report);
            }
            Err((game, msg)) => {
                progress.item_failed(game.long_name(), &msg);
                summary.failed.push((game, msg));
            }
        }
    }

    for h in handles {
        if h.join().is_err() {
            warn!("pipeline worker panicked");
        }
    }

    // anything still unaccounted for was lost with its worker
    for &game in games {
        let seen = summary.completed.iter().any(|r| r.game == game) || summary.failed.iter().any(|(g, _)| *g == game);
        if !seen {
            let msg = "worker exited without a result".to_string();
            progress.item_failed(game.long_name(), &msg);
            summary.failed.push((game, msg));
        }
    }

    // completion order depends on scheduling; report in request order
    let order = |g: Game| games.iter().position(|x| *x == g);
    summary.completed.sort_by_key(|r| order(r.game));
    summary.failed.sort_by_key(|(g, _)| order(*g));
    summary
}
