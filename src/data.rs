// src/data.rs
//
// Working-table row types shared by every pipeline.
//
// - MatchRow: one raw record decoded into a fixed shape, plus the fields the
//             pipeline derives from it (competitors, scores, outcome).
//             `source` keeps the record exactly as received so audit files
//             stay lossless.
// - Side / SubGame: decoded nested structures (opponents, embedded games).
//
// Rows are never mutated by the validator; only derivation hooks write the
// derived fields.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::raw::lenient;
use crate::resolve::Outcome;

/// Roster entry of an opponent (`match2players`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Player {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

/// One opposing side of a match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Side {
    pub name: Option<String>,
    pub template: Option<String>,
    pub template_name: Option<String>,
    pub redirect: Option<String>,
    pub score: Option<f64>,
    pub status: Option<String>,
    /// Opponent type (`team`, `solo`, ...).
    pub kind: Option<String>,
    pub players: Vec<Player>,
}

/// Player slot inside an embedded game.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Participant {
    /// Page name of the player.
    #[serde(default, deserialize_with = "lenient::string")]
    pub player: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameOpponent {
    #[serde(default, deserialize_with = "lenient::list")]
    pub players: Vec<Participant>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub score: Option<f64>,
}

/// One game embedded in a team match (`match2games` entry).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubGame {
    #[serde(default, deserialize_with = "lenient::string")]
    pub mode: Option<String>,
    /// Keyed `"{opponent}_{player}"`, sorted by key.
    #[serde(default, deserialize_with = "lenient::keyed")]
    pub participants: Vec<(String, Participant)>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub opponents: Vec<GameOpponent>,
    #[serde(default, deserialize_with = "lenient::floats")]
    pub scores: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default)]
pub struct MatchRow {
    /// The record as received.
    pub source: Map<String, Value>,

    pub date: Option<String>,
    pub match_id: Option<String>,
    /// Fully-qualified provenance URL.
    pub page: Option<String>,
    pub winner: Option<String>,
    pub result_type: Option<String>,
    pub best_of: Option<i64>,
    /// Upstream game-variant id.
    pub game: Option<String>,
    pub mode: Option<String>,
    pub sides: Vec<Side>,
    pub games: Vec<SubGame>,

    // derived
    pub game_idx: Option<usize>,
    pub competitor_1: Option<String>,
    pub competitor_2: Option<String>,
    pub score_1: Option<f64>,
    pub score_2: Option<f64>,
    pub score_outcome: Option<Outcome>,
    pub outcome: Option<Outcome>,
}

impl MatchRow {
    pub fn side(&self, i: usize) -> Option<&Side> {
        self.sides.get(i)
    }

    pub fn status(&self, i: usize) -> Option<&str> {
        self.side(i).and_then(|s| s.status.as_deref())
    }

    pub fn competitors(&self) -> (Option<&str>, Option<&str>) {
        (self.competitor_1.as_deref(), self.competitor_2.as_deref())
    }

    pub fn scores(&self) -> (Option<f64>, Option<f64>) {
        (self.score_1, self.score_2)
    }
}

/// Anything the validator can archive.
pub trait AuditRow {
    /// JSON object written to the audit file, minus `drop_cols`.
    fn audit_record(&self, drop_cols: &[&str]) -> Value;
}

fn without(source: &Map<String, Value>, drop_cols: &[&str]) -> Map<String, Value> {
    source
        .iter()
        .filter(|(k, _)| !drop_cols.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn put_str(map: &mut Map<String, Value>, key: &str, v: &Option<String>) {
    if let Some(s) = v {
        map.insert(key.to_string(), Value::String(s.clone()));
    }
}

fn put_num(map: &mut Map<String, Value>, key: &str, v: Option<f64>) {
    if let Some(n) = v.and_then(serde_json::Number::from_f64) {
        map.insert(key.to_string(), Value::Number(n));
    }
}

impl AuditRow for MatchRow {
    fn audit_record(&self, drop_cols: &[&str]) -> Value {
        let mut map = without(&self.source, drop_cols);
        if let Some(idx) = self.game_idx {
            map.insert("game_idx".into(), Value::from(idx));
        }
        put_str(&mut map, "match_id", &self.match_id);
        put_str(&mut map, "competitor_1", &self.competitor_1);
        put_str(&mut map, "competitor_2", &self.competitor_2);
        put_num(&mut map, "competitor_1_score", self.score_1);
        put_num(&mut map, "competitor_2_score", self.score_2);
        put_num(&mut map, "score_outcome", self.score_outcome.map(Outcome::value));
        put_num(&mut map, "outcome", self.outcome.map(Outcome::value));
        Value::Object(map)
    }
}

/// A raw line that is not a JSON object.
#[derive(Debug, Clone)]
pub struct BadLine {
    pub line: usize,
    pub text: String,
    pub error: String,
}

impl AuditRow for BadLine {
    fn audit_record(&self, _drop_cols: &[&str]) -> Value {
        let mut map = Map::new();
        map.insert("line".into(), Value::from(self.line));
        map.insert("text".into(), Value::String(self.text.clone()));
        map.insert("error".into(), Value::String(self.error.clone()));
        Value::Object(map)
    }
}

/// A JSON object that does not fit its source format.
#[derive(Debug, Clone)]
pub struct Undecodable {
    pub source: Map<String, Value>,
    pub error: String,
}

impl AuditRow for Undecodable {
    fn audit_record(&self, drop_cols: &[&str]) -> Value {
        let mut map = without(&self.source, drop_cols);
        map.insert("decode_error".into(), Value::String(self.error.clone()));
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn audit_record_keeps_source_and_adds_derived() {
        let source = json!({"date": "2020-01-01", "match2opponents": [{"name": "a"}], "winner": "1"});
        let row = MatchRow {
            source: source.as_object().cloned().unwrap(),
            competitor_1: Some("a".into()),
            outcome: Some(Outcome::Win),
            ..MatchRow::default()
        };
        let rec = row.audit_record(&["match2opponents"]);
        let obj = rec.as_object().unwrap();
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["date", "winner", "competitor_1", "outcome"]);
        assert_eq!(obj["outcome"], json!(1.0));
    }
}
