// src/raw/mod.rs
//! Loading raw JSON-lines batches written by the ingestion layer.
//!
//! A batch is read whole. Lines that are not JSON objects and objects that
//! do not fit the source format are kept aside for the audit trail; only a
//! missing file or a field missing from the entire batch is fatal.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::games::SourceFormat;
use crate::data::{BadLine, MatchRow, Undecodable};
use crate::error::{Error, Result};

pub mod formats;
pub mod lenient;

pub use formats::decode;

#[derive(Debug, Default)]
pub struct RawBatch {
    pub path: PathBuf,
    pub rows: Vec<MatchRow>,
    pub bad_lines: Vec<BadLine>,
    pub undecodable: Vec<Undecodable>,
}

impl RawBatch {
    /// Every record the file held, usable or not.
    pub fn total(&self) -> usize {
        self.rows.len() + self.bad_lines.len() + self.undecodable.len()
    }
}

/// Read raw JSON objects line by line; blank lines are skipped.
pub fn read_objects(path: &Path) -> Result<(Vec<Map<String, Value>>, Vec<BadLine>)> {
    if !path.is_file() {
        return Err(Error::MissingRaw(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::new(file);

    let mut objects = Vec::new();
    let mut bad = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io(path, e))?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => objects.push(map),
            Ok(_) => bad.push(BadLine { line: i + 1, text: text.to_string(), error: "not a JSON object".into() }),
            Err(e) => bad.push(BadLine { line: i + 1, text: text.to_string(), error: e.to_string() }),
        }
    }
    Ok((objects, bad))
}

/// Fail loudly when an expected field is absent from every record.
pub fn check_schema(path: &Path, objects: &[Map<String, Value>], format: SourceFormat) -> Result<()> {
    if objects.is_empty() {
        return Ok(());
    }
    for spellings in format.required_fields() {
        if !objects.iter().any(|o| spellings.iter().any(|k| o.contains_key(*k))) {
            return Err(Error::SchemaDrift { path: path.to_path_buf(), field: spellings[0].to_string() });
        }
    }
    Ok(())
}

pub fn load(path: &Path, format: SourceFormat, page_prefix: Option<&str>) -> Result<RawBatch> {
    let (objects, bad_lines) = read_objects(path)?;
    check_schema(path, &objects, format)?;

    let mut rows = Vec::with_capacity(objects.len());
    let mut undecodable = Vec::new();
    for obj in objects {
        match decode(obj.clone(), format, page_prefix) {
            Ok(row) => rows.push(row),
            Err(e) => undecodable.push(Undecodable { source: obj, error: e.to_string() }),
        }
    }
    debug!(
        path = %path.display(),
        rows = rows.len(),
        bad_lines = bad_lines.len(),
        undecodable = undecodable.len(),
        "raw batch loaded"
    );
    Ok(RawBatch { path: path.to_path_buf(), rows, bad_lines, undecodable })
}
