// src/store.rs
//! Canonical table: projection, dedup, ordering, and CSV/TSV persistence.
use std::cmp::Ordering;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::options::OutputFormat;
use crate::core::dates::valid_date;
use crate::core::sanitize::non_blank;
use crate::data::MatchRow;
use crate::error::{Error, Result};
use crate::file::create_truncate;
use crate::resolve::Outcome;

pub const COLUMNS: [&str; 8] = [
    "date",
    "competitor_1",
    "competitor_2",
    "competitor_1_score",
    "competitor_2_score",
    "outcome",
    "match_id",
    "page",
];

/// One output row. Field order is the column order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalMatch {
    pub date: NaiveDate,
    pub competitor_1: String,
    pub competitor_2: String,
    pub competitor_1_score: Option<f64>,
    pub competitor_2_score: Option<f64>,
    pub outcome: Outcome,
    pub match_id: String,
    pub page: String,
}

impl CanonicalMatch {
    /// Project a fully validated row. `None` if a required field is still
    /// missing; the engine guards make that unreachable for pipeline output.
    pub fn from_row(row: &MatchRow) -> Option<Self> {
        Some(CanonicalMatch {
            date: valid_date(row.date.as_deref())?,
            competitor_1: non_blank(row.competitor_1.as_deref())?.to_string(),
            competitor_2: non_blank(row.competitor_2.as_deref())?.to_string(),
            competitor_1_score: row.score_1,
            competitor_2_score: row.score_2,
            outcome: row.outcome?,
            match_id: row.match_id.clone().unwrap_or_default(),
            page: row.page.clone().unwrap_or_default(),
        })
    }
}

fn cmp_score(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// `(date, match_id)` first, then every remaining column so equal rows end
/// up adjacent.
fn cmp_full(a: &CanonicalMatch, b: &CanonicalMatch) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.match_id.cmp(&b.match_id))
        .then_with(|| a.competitor_1.cmp(&b.competitor_1))
        .then_with(|| a.competitor_2.cmp(&b.competitor_2))
        .then_with(|| cmp_score(a.competitor_1_score, b.competitor_1_score))
        .then_with(|| cmp_score(a.competitor_2_score, b.competitor_2_score))
        .then_with(|| a.outcome.cmp(&b.outcome))
        .then_with(|| a.page.cmp(&b.page))
}

/// Sort by `(date, match_id)` and collapse identical rows.
pub fn canonicalize(mut records: Vec<CanonicalMatch>) -> Vec<CanonicalMatch> {
    records.sort_by(cmp_full);
    records.dedup_by(|a, b| cmp_full(a, b) == Ordering::Equal);
    records
}

/// Write the canonical table, truncating any previous file. Returns the
/// number of rows written after dedup.
pub fn save_canonical(records: Vec<CanonicalMatch>, path: &Path, format: OutputFormat) -> Result<usize> {
    let records = canonicalize(records);
    let out = create_truncate(path)?;
    let mut wtr = csv::WriterBuilder::new().delimiter(format.delim()).from_writer(out);
    if records.is_empty() {
        // serialize() only emits the header alongside the first row
        wtr.write_record(COLUMNS)?;
    }
    for r in &records {
        wtr.serialize(r)?;
    }
    let mut inner = wtr.into_inner().map_err(|e| Error::io(path, e.into_error()))?;
    inner.flush().map_err(|e| Error::io(path, e))?;
    Ok(records.len())
}

/// Read a table written by [`save_canonical`]. The delimiter follows the
/// file extension; anything other than `.tsv` is read as CSV.
pub fn load_canonical(path: &Path) -> Result<Vec<CanonicalMatch>> {
    let format = OutputFormat::from_path(path).unwrap_or_default();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut rdr = csv::ReaderBuilder::new().delimiter(format.delim()).from_reader(file);
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        out.push(rec?);
    }
    Ok(out)
}
