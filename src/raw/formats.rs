// src/raw/formats.rs
//! Per-source record shapes, decoded once into a `MatchRow`.
use serde::Deserialize;
use serde_json::{Map, Value};

use super::lenient;
use crate::config::consts::{ALIGULAC_EVENT_PREFIX, LEAGUEPEDIA_WIKI_PREFIX};
use crate::config::games::SourceFormat;
use crate::core::sanitize::{event_slug, non_blank, wiki_path};
use crate::data::{MatchRow, Player, Side, SubGame};

/* ---------------- LPDB v3 ---------------- */

#[derive(Debug, Deserialize)]
struct Match2Record {
    #[serde(default, deserialize_with = "lenient::string")]
    date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    match2id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pagename: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    winner: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    resulttype: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    bestof: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    game: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    mode: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    match2opponents: Vec<Match2Opponent>,
    #[serde(default, deserialize_with = "lenient::encoded_list")]
    match2games: Vec<SubGame>,
}

#[derive(Debug, Deserialize)]
struct Match2Opponent {
    #[serde(default, deserialize_with = "lenient::string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    template: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    teamtemplate: Option<TeamTemplate>,
    #[serde(default, deserialize_with = "lenient::float")]
    score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    status: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    match2players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
struct TeamTemplate {
    #[serde(default, deserialize_with = "lenient::string")]
    name: Option<String>,
}

impl From<Match2Opponent> for Side {
    fn from(o: Match2Opponent) -> Self {
        Side {
            name: o.name,
            template: o.template,
            template_name: o.teamtemplate.and_then(|t| t.name),
            redirect: None,
            score: o.score,
            status: o.status,
            kind: o.kind,
            players: o.match2players,
        }
    }
}

/* ---------------- LPDB v1 ---------------- */

#[derive(Debug, Deserialize)]
struct FlatRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    opponent1: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    opponent2: Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    opponent1score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    opponent2score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    winner: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    matchid: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pagename: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    game: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    mode: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    resulttype: Option<String>,
}

/* ---------------- Leaguepedia cargo ---------------- */

#[derive(Debug, Deserialize)]
struct CargoRecord {
    #[serde(default, rename = "DateTime UTC", alias = "DateTime_UTC", deserialize_with = "lenient::string")]
    date: Option<String>,
    #[serde(default, rename = "Team1", deserialize_with = "lenient::string")]
    team1: Option<String>,
    #[serde(default, rename = "Team2", deserialize_with = "lenient::string")]
    team2: Option<String>,
    #[serde(default, rename = "Team1Redirect", deserialize_with = "lenient::string")]
    team1_redirect: Option<String>,
    #[serde(default, rename = "Team2Redirect", deserialize_with = "lenient::string")]
    team2_redirect: Option<String>,
    #[serde(default, rename = "Team1Score", deserialize_with = "lenient::float")]
    team1_score: Option<f64>,
    #[serde(default, rename = "Team2Score", deserialize_with = "lenient::float")]
    team2_score: Option<f64>,
    #[serde(default, rename = "Winner", deserialize_with = "lenient::string")]
    winner: Option<String>,
    #[serde(default, rename = "MatchId", deserialize_with = "lenient::string")]
    match_id: Option<String>,
    #[serde(default, rename = "OverviewPage", deserialize_with = "lenient::string")]
    overview_page: Option<String>,
}

/* ---------------- Aligulac ---------------- */

#[derive(Debug, Deserialize)]
struct AligulacRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    date: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pla: Option<AligulacPlayer>,
    #[serde(default, deserialize_with = "lenient::object")]
    plb: Option<AligulacPlayer>,
    #[serde(default, deserialize_with = "lenient::float")]
    sca: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    scb: Option<f64>,
    #[serde(default, deserialize_with = "lenient::object")]
    eventobj: Option<AligulacEvent>,
}

#[derive(Debug, Deserialize)]
struct AligulacPlayer {
    #[serde(default, deserialize_with = "lenient::string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    tag: Option<String>,
}

impl AligulacPlayer {
    /// Tags are not unique on Aligulac, so the id is appended.
    fn handle(&self) -> Option<String> {
        let tag = non_blank(self.tag.as_deref())?;
        let id = non_blank(self.id.as_deref())?;
        Some(format!("{tag}_{id}"))
    }
}

#[derive(Debug, Deserialize)]
struct AligulacEvent {
    #[serde(default, deserialize_with = "lenient::string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    fullname: Option<String>,
}

/* ---------------- decode ---------------- */

fn lpdb_page(prefix: Option<&str>, pagename: Option<String>) -> Option<String> {
    let name = non_blank(pagename.as_deref())?;
    Some(match prefix {
        Some(p) => format!("{p}{name}"),
        None => name.to_string(),
    })
}

fn side_score(sides: &[Side], i: usize) -> Option<f64> {
    sides.get(i).and_then(|s| s.score)
}

/// Decode one raw JSON object. `page_prefix` is the Liquipedia wiki prefix
/// for LPDB sources.
pub fn decode(
    source: Map<String, Value>,
    format: SourceFormat,
    page_prefix: Option<&str>,
) -> Result<MatchRow, serde_json::Error> {
    let value = Value::Object(source);
    let mut row = match format {
        SourceFormat::Match2 | SourceFormat::Match2Games => {
            let r: Match2Record = serde_json::from_value(value.clone())?;
            let sides: Vec<Side> = r.match2opponents.into_iter().map(Side::from).collect();
            MatchRow {
                score_1: side_score(&sides, 0),
                score_2: side_score(&sides, 1),
                date: r.date,
                match_id: r.match2id,
                page: lpdb_page(page_prefix, r.pagename),
                winner: r.winner,
                result_type: r.resulttype,
                best_of: r.bestof,
                game: r.game,
                mode: r.mode,
                sides,
                games: r.match2games,
                ..MatchRow::default()
            }
        }
        SourceFormat::Flat => {
            let r: FlatRecord = serde_json::from_value(value.clone())?;
            MatchRow {
                date: r.date,
                match_id: r.matchid,
                page: lpdb_page(page_prefix, r.pagename),
                winner: r.winner,
                result_type: r.resulttype,
                game: r.game,
                mode: r.mode,
                sides: vec![
                    Side { name: r.opponent1, score: r.opponent1score, ..Side::default() },
                    Side { name: r.opponent2, score: r.opponent2score, ..Side::default() },
                ],
                score_1: r.opponent1score,
                score_2: r.opponent2score,
                ..MatchRow::default()
            }
        }
        SourceFormat::Cargo => {
            let r: CargoRecord = serde_json::from_value(value.clone())?;
            MatchRow {
                date: r.date,
                match_id: r.match_id,
                page: non_blank(r.overview_page.as_deref())
                    .map(|p| format!("{LEAGUEPEDIA_WIKI_PREFIX}{}", wiki_path(p))),
                winner: r.winner,
                sides: vec![
                    Side { name: r.team1, redirect: r.team1_redirect, score: r.team1_score, ..Side::default() },
                    Side { name: r.team2, redirect: r.team2_redirect, score: r.team2_score, ..Side::default() },
                ],
                score_1: r.team1_score,
                score_2: r.team2_score,
                ..MatchRow::default()
            }
        }
        SourceFormat::Aligulac => {
            let r: AligulacRecord = serde_json::from_value(value.clone())?;
            let page = r.eventobj.as_ref().and_then(|e| {
                let id = non_blank(e.id.as_deref())?;
                let name = non_blank(e.fullname.as_deref())?;
                Some(format!("{ALIGULAC_EVENT_PREFIX}{id}-{}", event_slug(name)))
            });
            MatchRow {
                date: r.date,
                match_id: r.id,
                page,
                sides: vec![
                    Side { name: r.pla.as_ref().and_then(AligulacPlayer::handle), score: r.sca, ..Side::default() },
                    Side { name: r.plb.as_ref().and_then(AligulacPlayer::handle), score: r.scb, ..Side::default() },
                ],
                score_1: r.sca,
                score_2: r.scb,
                ..MatchRow::default()
            }
        }
    };
    if let Value::Object(map) = value {
        row.source = map;
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn match2_opponents_decode() {
        let raw = json!({
            "date": "2023-03-01 17:00:00",
            "match2id": "RLCS_0001",
            "pagename": "RLCS/2023/Winter",
            "winner": 2,
            "bestof": "5",
            "match2opponents": [
                {"name": "", "template": "g2", "teamtemplate": {"name": "G2 Esports", "page": "G2_Esports"}, "score": "1", "type": "team"},
                {"name": "Vitality", "template": "vitality", "teamtemplate": [], "score": 3, "status": "S",
                 "match2players": [{"id": 1, "name": "zen"}]}
            ]
        });
        let row = decode(obj(raw), SourceFormat::Match2, Some("https://liquipedia.net/rocketleague/")).unwrap();
        assert_eq!(row.sides.len(), 2);
        assert_eq!(row.sides[0].template_name.as_deref(), Some("G2 Esports"));
        assert_eq!(row.sides[1].template_name, None);
        assert_eq!(row.sides[1].players[0].id.as_deref(), Some("1"));
        assert_eq!(row.scores(), (Some(1.0), Some(3.0)));
        assert_eq!(row.winner.as_deref(), Some("2"));
        assert_eq!(row.best_of, Some(5));
        assert_eq!(row.page.as_deref(), Some("https://liquipedia.net/rocketleague/RLCS/2023/Winter"));
        assert_eq!(row.source["winner"], json!(2));
    }

    #[test]
    fn match2_games_accepts_encoded_string() {
        let games = json!([{"mode": "1v1", "participants": {"2_1": {"player": "Moon"}, "1_1": {"player": "Grubby"}}, "scores": [1, 0]}]);
        let raw = json!({"date": "2010-01-01", "match2id": "M1", "match2games": games.to_string()});
        let row = decode(obj(raw), SourceFormat::Match2Games, None).unwrap();
        assert_eq!(row.games.len(), 1);
        assert_eq!(row.games[0].participants[0].0, "1_1");
        assert_eq!(row.games[0].participants[0].1.player.as_deref(), Some("Grubby"));
        assert_eq!(row.games[0].scores, vec![Some(1.0), Some(0.0)]);
    }

    #[test]
    fn cargo_and_aligulac_pages() {
        let raw = json!({"DateTime UTC": "2024-01-17 08:00:00", "Team1": "SKT", "Team2": "Gen.G",
                         "Team1Redirect": "T1", "Winner": "1", "MatchId": "LCK/2024_1", "OverviewPage": "LCK/2024 Season/Spring Season"});
        let row = decode(obj(raw), SourceFormat::Cargo, None).unwrap();
        assert_eq!(row.page.as_deref(), Some("https://lol.fandom.com/wiki/LCK/2024_Season/Spring_Season"));
        assert_eq!(row.sides[0].redirect.as_deref(), Some("T1"));

        let raw = json!({"id": 99, "date": "2019-05-12", "pla": {"id": 49, "tag": "Maru"}, "plb": {"id": 76, "tag": "Dark"},
                         "sca": 4, "scb": 2, "eventobj": {"id": 61000, "fullname": "GSL 2019 Season 1 / Code S"}});
        let row = decode(obj(raw), SourceFormat::Aligulac, None).unwrap();
        assert_eq!(row.sides[0].name.as_deref(), Some("Maru_49"));
        assert_eq!(row.match_id.as_deref(), Some("99"));
        assert_eq!(row.page.as_deref(), Some("http://aligulac.com/results/events/61000-GSL-2019-Season-1--Code-S"));
    }

    #[test]
    fn flat_record_has_two_sides() {
        let raw = json!({"date": "2018-01-11", "opponent1": "Seoul Dynasty", "opponent2": "", "opponent1score": "3", "winner": "1"});
        let row = decode(obj(raw), SourceFormat::Flat, None).unwrap();
        assert_eq!(row.sides.len(), 2);
        assert_eq!(row.score_1, Some(3.0));
        assert_eq!(row.score_2, None);
    }

    #[test]
    fn malformed_opponent_fails_decode() {
        let raw = json!({"date": "2020-01-01", "match2opponents": [{"name": "a"}, 5]});
        assert!(decode(obj(raw), SourceFormat::Match2, None).is_err());
    }
}
