// src/config/consts.rs

// Data layout (relative to Options::data_dir)
pub const DEFAULT_DATA_DIR: &str = "data";
pub const RAW_SUBDIR: &str = "raw_data";
pub const AUDIT_SUBDIR: &str = "invalid_data";
pub const FULL_SUBDIR: &str = "full_data";
pub const SNAPSHOT_SUBDIR: &str = "snapshots";

// Audit
pub const AUDIT_EXT: &str = "jsonl";
pub const UNPARSABLE_LABEL: &str = "unparsable";
pub const UNDECODABLE_LABEL: &str = "undecodable";
/// Team matches that produced no 1v1 game.
pub const NO_TEAM_GAMES_LABEL: &str = "no_team_games";

// Upstream sentinels for "unknown date"
pub const SENTINEL_YEARS: [i32; 3] = [0, 1000, 1970];

// Placeholder competitors
pub const PLACEHOLDERS: &[&str] = &["bye", "tbd", "tba"];
pub const BYE_TBD: &[&str] = &["bye", "tbd"];
pub const TBD: &[&str] = &["tbd"];

// Provenance links
pub const LIQUIPEDIA_PREFIX: &str = "https://liquipedia.net/";
pub const LEAGUEPEDIA_WIKI_PREFIX: &str = "https://lol.fandom.com/wiki/";
pub const ALIGULAC_EVENT_PREFIX: &str = "http://aligulac.com/results/events/";

// Upstream endpoints (consumed by the ingestion layer)
pub const LIQUIPEDIA_API: &str = "https://api.liquipedia.net/api/";
pub const LEAGUEPEDIA_API: &str = "https://lol.fandom.com/api.php?";
pub const ALIGULAC_API: &str = "http://aligulac.com/api/v1/match/";

// Concurrency
pub const WORKERS: usize = 4;

// Env overrides
pub const ENV_DATA_DIR: &str = "ESPORTS_DATA_DIR";
pub const ENV_OUTPUT_FORMAT: &str = "ESPORTS_OUTPUT_FORMAT";
pub const ENV_WORKERS: &str = "ESPORTS_WORKERS";
pub const ENV_LOWERCASE_PREFIX: &str = "ESPORTS_LOWERCASE_";
