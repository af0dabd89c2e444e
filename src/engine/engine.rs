// src/engine/engine.rs
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::consts::{NO_TEAM_GAMES_LABEL, UNDECODABLE_LABEL, UNPARSABLE_LABEL};
use crate::config::games::{Game, RawInput};
use crate::config::options::Options;
use crate::data::MatchRow;
use crate::engine::checks;
use crate::engine::decompose;
use crate::engine::types::{GameSpec, Step, UnpackRule};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::raw::{self, RawBatch};
use crate::specs;
use crate::store::{CanonicalMatch, save_canonical};
use crate::validate::{StageCount, Validator};

/// What one pipeline run did.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub game: Game,
    /// Records read from the raw files, usable or not.
    pub rows_in: usize,
    /// Rows in the written canonical table.
    pub rows_out: usize,
    pub stages: Vec<StageCount>,
    pub output: PathBuf,
}

/// Run the pipeline for `game` against the files under `options.data_dir`.
pub fn process(game: Game, options: &Options, progress: &mut dyn Progress) -> Result<PipelineReport> {
    let spec = specs::build(game, options);
    run_spec(&spec, options, progress)
}

fn load_all<'a, I>(inputs: I, options: &Options, prefix: Option<&str>) -> Result<Vec<RawBatch>>
where
    I: Iterator<Item = &'a RawInput>,
{
    inputs
        .map(|input| raw::load(&options.raw_path(input.file), input.format, prefix))
        .collect()
}

/// Apply `steps` in order. Rows caught by a `Divert` step move to `diverted`;
/// where no diversion target is given those steps are skipped.
fn run_steps(
    v: &mut Validator<'_>,
    mut rows: Vec<MatchRow>,
    steps: &[Step],
    mut diverted: Option<&mut Vec<MatchRow>>,
) -> Result<Vec<MatchRow>> {
    for step in steps {
        match step {
            Step::Reject(check) => {
                rows = v.filter_invalid(rows, check.label, |r| (check.test)(r), check.drop_cols)?;
            }
            Step::Derive(hook) => {
                debug!(hook = hook.name, rows = rows.len(), "derive");
                rows.iter_mut().for_each(|r| (hook.apply)(r));
            }
            Step::Divert { name, test } => {
                let Some(out) = diverted.as_deref_mut() else { continue };
                let before = rows.len();
                let (moved, kept): (Vec<_>, Vec<_>) = rows.into_iter().partition(|r| test(r));
                v.progress().log(&format!("{name}: {} rows moved to decomposition", moved.len()));
                v.record(name, before, kept.len());
                out.extend(moved);
                rows = kept;
            }
        }
    }
    Ok(rows)
}

/// Split team matches into games. A match that yields no game at all is
/// archived rather than dropped.
fn decompose_all(v: &mut Validator<'_>, matches: Vec<MatchRow>, rule: &UnpackRule) -> Result<Vec<MatchRow>> {
    let before = matches.len();
    let mut games = Vec::new();
    let mut empty = Vec::new();
    for m in matches {
        let unpacked = decompose::unpack(&m, rule);
        if unpacked.is_empty() {
            empty.push(m);
        } else {
            games.extend(unpacked);
        }
    }
    v.archive(NO_TEAM_GAMES_LABEL, &empty, &[])?;
    v.record(NO_TEAM_GAMES_LABEL, before, before - empty.len());
    v.progress().log(&format!("decomposed {} team matches into {} games", before - empty.len(), games.len()));
    Ok(games)
}

/// Passes every pipeline ends with, whatever its own steps were.
fn guards(v: &mut Validator<'_>, rows: Vec<MatchRow>) -> Result<Vec<MatchRow>> {
    let rows = v.filter_invalid(rows, "invalid_date", checks::invalid_date, &[])?;
    let rows = v.filter_invalid(rows, "missing_team", checks::missing_competitor, &[])?;
    let rows = v.filter_invalid(rows, "played_self", checks::played_self, &[])?;
    v.filter_invalid(rows, "null_outcome", checks::null_outcome, &[])
}

pub fn run_spec(spec: &GameSpec, options: &Options, progress: &mut dyn Progress) -> Result<PipelineReport> {
    let game = spec.config.game;
    let prefix = spec.config.page_prefix();

    // Every raw file is read before anything is written, so a fatal error
    // leaves the previous run's outputs untouched.
    let main = load_all(spec.config.main_inputs(), options, prefix.as_deref())?;
    let team = load_all(spec.config.team_inputs(), options, prefix.as_deref())?;
    if !team.is_empty() && spec.team.is_none() {
        return Err(Error::Config(format!("{game} has team inputs but no decomposition rule")));
    }
    let rows_in: usize = main.iter().chain(&team).map(RawBatch::total).sum();
    progress.begin(game.long_name(), rows_in);

    let mut v = Validator::new(options.audit_dir(game), progress)?;

    let mut bad_lines = Vec::new();
    let mut undecodable = Vec::new();
    let mut split = |batches: Vec<RawBatch>| -> Vec<MatchRow> {
        let mut rows = Vec::new();
        for b in batches {
            bad_lines.extend(b.bad_lines);
            undecodable.extend(b.undecodable);
            rows.extend(b.rows);
        }
        rows
    };
    let main_rows = split(main);
    let mut team_rows = split(team);
    v.archive(UNPARSABLE_LABEL, &bad_lines, &[])?;
    v.archive(UNDECODABLE_LABEL, &undecodable, &[])?;

    let divert_to = spec.team.as_ref().map(|_| &mut team_rows);
    let mut rows = run_steps(&mut v, main_rows, &spec.main, divert_to)?;

    if let Some(ts) = &spec.team {
        let matches = run_steps(&mut v, team_rows, &ts.before, None)?;
        let games = decompose_all(&mut v, matches, &ts.unpack)?;
        rows.extend(run_steps(&mut v, games, &ts.after, None)?);
    }

    let rows = run_steps(&mut v, rows, &spec.after_merge, None)?;
    let rows = guards(&mut v, rows)?;

    let records: Vec<CanonicalMatch> = rows.iter().filter_map(CanonicalMatch::from_row).collect();
    let output = options.output_path(game);
    let rows_out = save_canonical(records, &output, options.format)?;
    v.progress().finish(game.long_name(), rows_out);
    info!(game = game.long_name(), rows_in, rows_out, output = %output.display(), "pipeline done");

    Ok(PipelineReport { game, rows_in, rows_out, stages: v.into_counts(), output })
}
