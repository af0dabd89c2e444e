// src/validate.rs
//! Predicate-based row filtering with an audit trail.
//!
//! Every pass splits the working table into kept and invalid rows. The
//! invalid partition goes to `{audit_dir}/{label}.jsonl`; the kept partition
//! comes back in its original order. A pass that matches nothing still
//! leaves an (empty) audit file behind.
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

use crate::config::consts::AUDIT_EXT;
use crate::data::AuditRow;
use crate::error::{Error, Result};
use crate::file::{clear_files_with_ext, create_truncate, ensure_directory, open_append};
use crate::progress::Progress;

/// Row counts around one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCount {
    pub label: String,
    pub before: usize,
    pub after: usize,
}

impl StageCount {
    pub fn removed(&self) -> usize {
        self.before - self.after
    }
}

pub struct Validator<'p> {
    audit_dir: PathBuf,
    /// Labels already opened this run; later passes under the same label append.
    opened: HashSet<String>,
    counts: Vec<StageCount>,
    progress: &'p mut dyn Progress,
}

impl<'p> Validator<'p> {
    /// Start a run: the audit dir is created and emptied of old audit files.
    pub fn new(audit_dir: impl Into<PathBuf>, progress: &'p mut dyn Progress) -> Result<Self> {
        let audit_dir = audit_dir.into();
        ensure_directory(&audit_dir)?;
        clear_files_with_ext(&audit_dir, AUDIT_EXT)?;
        Ok(Self { audit_dir, opened: HashSet::new(), counts: Vec::new(), progress })
    }

    pub fn audit_path(&self, label: &str) -> PathBuf {
        self.audit_dir.join(format!("{label}.{AUDIT_EXT}"))
    }

    /// Remove rows where `predicate` holds, archiving them under `label`.
    /// `drop_cols` names source fields left out of the audit lines.
    pub fn filter_invalid<R, P>(&mut self, rows: Vec<R>, label: &str, predicate: P, drop_cols: &[&str]) -> Result<Vec<R>>
    where
        R: AuditRow,
        P: Fn(&R) -> bool,
    {
        let before = rows.len();
        let (invalid, kept): (Vec<R>, Vec<R>) = rows.into_iter().partition(|r| predicate(r));
        self.archive(label, &invalid, drop_cols)?;
        self.record(label, before, kept.len());
        Ok(kept)
    }

    /// Write rows to the audit file for `label` without a filter pass.
    pub fn archive<R: AuditRow>(&mut self, label: &str, rows: &[R], drop_cols: &[&str]) -> Result<()> {
        let path = self.audit_path(label);
        let mut out = if self.opened.insert(label.to_string()) {
            create_truncate(&path)?
        } else {
            open_append(&path)?
        };
        for row in rows {
            serde_json::to_writer(&mut out, &row.audit_record(drop_cols))?;
            out.write_all(b"\n").map_err(|e| Error::io(&path, e))?;
        }
        out.flush().map_err(|e| Error::io(&path, e))?;
        Ok(())
    }

    /// Count a pass that moved rows somewhere other than an audit file, or
    /// archived them outside `filter_invalid`.
    pub fn record(&mut self, label: &str, before: usize, after: usize) {
        self.progress.stage(label, before, after);
        self.counts.push(StageCount { label: label.to_string(), before, after });
    }

    pub fn progress(&mut self) -> &mut dyn Progress {
        &mut *self.progress
    }

    pub fn counts(&self) -> &[StageCount] {
        &self.counts
    }

    pub fn into_counts(self) -> Vec<StageCount> {
        self.counts
    }
}
