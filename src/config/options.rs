// src/config/options.rs
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;
use super::games::Game;
use crate::error::{Error, Result};
use crate::resolve::names::CaseRule;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self { OutputFormat::Csv => "csv", OutputFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { OutputFormat::Csv => b',', OutputFormat::Tsv => b'\t' }
    }

    /// Format implied by a file extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "tsv" => Some(OutputFormat::Tsv),
            _ => None,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(Error::Config(format!("unknown output format `{other}`"))),
        }
    }
}

/// Where data lives and how tables are written.
///
/// Layout under `data_dir`:
/// ```text
/// raw_data/{file}.jsonl           raw batches from the ingestion layer
/// invalid_data/{long_name}/*.jsonl audit files, one per rejection label
/// full_data/{long_name}.csv        canonical tables
/// snapshots/{timestamp}.json       summary snapshots
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub data_dir: PathBuf,
    pub format: OutputFormat,
    pub workers: usize,
    /// Overrides a game's default name case policy.
    pub case_overrides: BTreeMap<Game, CaseRule>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            format: OutputFormat::Csv,
            workers: WORKERS,
            case_overrides: BTreeMap::new(),
        }
    }
}

impl Options {
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: dir.into(), ..Self::default() }
    }

    /// Defaults overlaid with `ESPORTS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|s| !s.trim().is_empty()) {
            opts.data_dir = PathBuf::from(dir.trim());
        }
        if let Some(fmt) = lookup(ENV_OUTPUT_FORMAT) {
            opts.format = fmt.parse()?;
        }
        if let Some(n) = lookup(ENV_WORKERS) {
            opts.workers = n
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| Error::Config(format!("{ENV_WORKERS} must be a positive integer, got `{n}`")))?;
        }
        for game in Game::ALL {
            let key = format!("{ENV_LOWERCASE_PREFIX}{}", game.short_name().to_ascii_uppercase());
            if let Some(v) = lookup(&key) {
                let rule = if parse_flag(&key, &v)? { CaseRule::Lower } else { CaseRule::Preserve };
                opts.case_overrides.insert(game, rule);
            }
        }
        Ok(opts)
    }

    pub fn case_rule(&self, game: Game, default: CaseRule) -> CaseRule {
        self.case_overrides.get(&game).copied().unwrap_or(default)
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.data_dir.join(RAW_SUBDIR)
    }
    pub fn raw_path(&self, file: &str) -> PathBuf {
        self.raw_dir().join(file)
    }
    pub fn audit_dir(&self, game: Game) -> PathBuf {
        self.data_dir.join(AUDIT_SUBDIR).join(game.long_name())
    }
    pub fn full_dir(&self) -> PathBuf {
        self.data_dir.join(FULL_SUBDIR)
    }
    pub fn output_path(&self, game: Game) -> PathBuf {
        self.full_dir().join(format!("{}.{}", game.long_name(), self.format.ext()))
    }
    pub fn snapshot_dir(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_SUBDIR)
    }
}

fn parse_flag(key: &str, v: &str) -> Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("{key} must be a boolean, got `{v}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let opts = Options::from_lookup(|_| None).unwrap();
        assert_eq!(opts, Options::default());
        assert_eq!(opts.output_path(Game::CounterStrike), PathBuf::from("data/full_data/counterstrike.csv"));
        assert_eq!(opts.audit_dir(Game::Dota2), PathBuf::from("data/invalid_data/dota2"));
    }

    #[test]
    fn env_overrides_apply() {
        let opts = Options::from_lookup(lookup(&[
            ("ESPORTS_DATA_DIR", "/tmp/esports"),
            ("ESPORTS_OUTPUT_FORMAT", "TSV"),
            ("ESPORTS_WORKERS", "2"),
            ("ESPORTS_LOWERCASE_DOTA2", "false"),
        ]))
        .unwrap();
        assert_eq!(opts.data_dir, PathBuf::from("/tmp/esports"));
        assert_eq!(opts.format, OutputFormat::Tsv);
        assert_eq!(opts.workers, 2);
        assert_eq!(opts.case_rule(Game::Dota2, CaseRule::Lower), CaseRule::Preserve);
        assert_eq!(opts.case_rule(Game::CounterStrike, CaseRule::Lower), CaseRule::Lower);
        assert!(opts.output_path(Game::Halo).ends_with("halo.tsv"));
    }

    #[test]
    fn bad_values_are_config_errors() {
        assert!(matches!(Options::from_lookup(lookup(&[("ESPORTS_WORKERS", "0")])), Err(Error::Config(_))));
        assert!(matches!(Options::from_lookup(lookup(&[("ESPORTS_OUTPUT_FORMAT", "xlsx")])), Err(Error::Config(_))));
        assert!(matches!(Options::from_lookup(lookup(&[("ESPORTS_LOWERCASE_CS", "maybe")])), Err(Error::Config(_))));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/b.TSV")), Some(OutputFormat::Tsv));
        assert_eq!(OutputFormat::from_path(Path::new("a/b")), None);
    }
}
