// src/snapshot.rs
//! Per-game summaries of the canonical tables, saved over time so two runs
//! can be compared at a glance.
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::options::{Options, OutputFormat};
use crate::error::{Error, Result};
use crate::file::create_truncate;
use crate::store::{CanonicalMatch, load_canonical};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_name: String,
    pub num_matches: usize,
    pub num_competitors: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub mean_outcome: Option<f64>,
}

pub fn summarize(game_name: &str, records: &[CanonicalMatch]) -> GameSnapshot {
    let competitors: HashSet<&str> = records
        .iter()
        .flat_map(|r| [r.competitor_1.as_str(), r.competitor_2.as_str()])
        .collect();
    let mean_outcome = if records.is_empty() {
        None
    } else {
        Some(records.iter().map(|r| r.outcome.value()).sum::<f64>() / records.len() as f64)
    };
    GameSnapshot {
        game_name: game_name.to_string(),
        num_matches: records.len(),
        num_competitors: competitors.len(),
        first_date: records.iter().map(|r| r.date).min(),
        last_date: records.iter().map(|r| r.date).max(),
        mean_outcome,
    }
}

/// Canonical tables under `full_data/`, sorted by file name.
fn canonical_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && OutputFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Summaries of every canonical table currently on disk.
pub fn make_snapshot(options: &Options) -> Result<Vec<GameSnapshot>> {
    canonical_files(&options.full_dir())?
        .iter()
        .map(|path| {
            let game_name = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            Ok(summarize(game_name, &load_canonical(path)?))
        })
        .collect()
}

/// Write `snapshots/{taken_at}.json`. The timestamp format sorts by time.
pub fn save_snapshot(snapshots: &[GameSnapshot], options: &Options, taken_at: NaiveDateTime) -> Result<PathBuf> {
    let path = options
        .snapshot_dir()
        .join(format!("{}.json", taken_at.format("%Y-%m-%d_%H-%M-%S")));
    let mut out = create_truncate(&path)?;
    serde_json::to_writer_pretty(&mut out, snapshots)?;
    out.write_all(b"\n").map_err(|e| Error::io(&path, e))?;
    out.flush().map_err(|e| Error::io(&path, e))?;
    info!(path = %path.display(), games = snapshots.len(), "snapshot saved");
    Ok(path)
}

pub fn load_snapshot(path: &Path) -> Result<Vec<GameSnapshot>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Saved snapshots, oldest first.
pub fn list_snapshots(options: &Options) -> Result<Vec<PathBuf>> {
    let dir = options.snapshot_dir();
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for entry in fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))? {
        let path = entry.map_err(|e| Error::io(&dir, e))?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotDiff {
    pub game_name: String,
    pub diff_num_matches: i64,
    pub diff_num_competitors: i64,
    /// `"{prev} -> {cur}"`.
    pub change_first_date: String,
    pub change_last_date: String,
    pub diff_mean_outcome: Option<f64>,
}

fn show(d: Option<NaiveDate>) -> String {
    d.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
}

/// Games present in both snapshots, in `cur` order.
pub fn compare(prev: &[GameSnapshot], cur: &[GameSnapshot]) -> Vec<SnapshotDiff> {
    let by_name: HashMap<&str, &GameSnapshot> = prev.iter().map(|s| (s.game_name.as_str(), s)).collect();
    cur.iter()
        .filter_map(|c| {
            let p = by_name.get(c.game_name.as_str())?;
            Some(SnapshotDiff {
                game_name: c.game_name.clone(),
                diff_num_matches: c.num_matches as i64 - p.num_matches as i64,
                diff_num_competitors: c.num_competitors as i64 - p.num_competitors as i64,
                change_first_date: format!("{} -> {}", show(p.first_date), show(c.first_date)),
                change_last_date: format!("{} -> {}", show(p.last_date), show(c.last_date)),
                diff_mean_outcome: c.mean_outcome.zip(p.mean_outcome).map(|(c, p)| c - p),
            })
        })
        .collect()
}

/// Match counts per calendar year, plus matches dated after `today`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearSummary {
    pub per_year: BTreeMap<i32, usize>,
    pub future: usize,
}

pub fn year_summary(records: &[CanonicalMatch], today: NaiveDate) -> YearSummary {
    let mut out = YearSummary::default();
    for r in records {
        *out.per_year.entry(r.date.year()).or_default() += 1;
        if r.date > today {
            out.future += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Outcome;
    use crate::store::save_canonical;

    fn rec(y: i32, c1: &str, c2: &str, outcome: Outcome) -> CanonicalMatch {
        CanonicalMatch {
            date: NaiveDate::from_ymd_opt(y, 6, 1).unwrap(),
            competitor_1: c1.into(),
            competitor_2: c2.into(),
            competitor_1_score: None,
            competitor_2_score: None,
            outcome,
            match_id: format!("{y}{c1}{c2}"),
            page: String::new(),
        }
    }

    #[test]
    fn summary_counts_and_mean() {
        let rows = vec![rec(2019, "a", "b", Outcome::Win), rec(2021, "b", "c", Outcome::Draw)];
        let s = summarize("halo", &rows);
        assert_eq!((s.num_matches, s.num_competitors), (2, 3));
        assert_eq!(s.first_date.unwrap().year(), 2019);
        assert_eq!(s.mean_outcome, Some(0.75));
        assert_eq!(summarize("empty", &[]).mean_outcome, None);
    }

    #[test]
    fn snapshot_round_trip_and_compare() {
        let dir = tempfile::tempdir().unwrap();
        let opts = Options::with_data_dir(dir.path());
        save_canonical(vec![rec(2020, "a", "b", Outcome::Win)], &opts.output_path(crate::config::Game::Halo), opts.format).unwrap();

        let first = make_snapshot(&opts).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].game_name, "halo");
        let t0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let p0 = save_snapshot(&first, &opts, t0).unwrap();
        assert_eq!(load_snapshot(&p0).unwrap(), first);

        save_canonical(
            vec![rec(2020, "a", "b", Outcome::Win), rec(2023, "a", "c", Outcome::Loss)],
            &opts.output_path(crate::config::Game::Halo),
            opts.format,
        )
        .unwrap();
        let second = make_snapshot(&opts).unwrap();
        save_snapshot(&second, &opts, t0 + chrono::Duration::hours(1)).unwrap();
        assert_eq!(list_snapshots(&opts).unwrap().len(), 2);

        let diff = compare(&first, &second);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].diff_num_matches, 1);
        assert_eq!(diff[0].diff_num_competitors, 1);
        assert_eq!(diff[0].change_last_date, "2020-06-01 -> 2023-06-01");
        assert_eq!(diff[0].diff_mean_outcome, Some(-0.5));
    }

    #[test]
    fn years_and_future() {
        let rows = vec![rec(2022, "a", "b", Outcome::Win), rec(2022, "a", "c", Outcome::Win), rec(2030, "a", "d", Outcome::Loss)];
        let s = year_summary(&rows, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(s.per_year.get(&2022), Some(&2));
        assert_eq!(s.future, 1);
    }
}
