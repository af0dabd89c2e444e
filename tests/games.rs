// tests/games.rs
mod common;

use esports_norm::config::Game;
use esports_norm::engine;
use esports_norm::progress::NullProgress;
use esports_norm::resolve::Outcome;
use esports_norm::runner;
use esports_norm::store::{CanonicalMatch, load_canonical};
use serde_json::json;

use common::{audit_lines, workspace, write_raw};

fn run(game: Game, opts: &esports_norm::config::Options) -> Vec<CanonicalMatch> {
    let report = engine::process(game, opts, &mut NullProgress).unwrap();
    load_canonical(&report.output).unwrap()
}

#[test]
fn team_matches_split_into_games() {
    let (_dir, opts) = workspace();
    write_raw(
        &opts,
        "starcraft1_1v1.jsonl",
        &[json!({
            "date": "2012-04-01 10:00:00", "match2id": "X1", "winner": "1", "pagename": "ASL/1",
            "match2opponents": [{"name": "Flash", "score": 3}, {"name": "Jaedong", "score": 1}]
        })],
    );
    write_raw(
        &opts,
        "starcraft1_team.jsonl",
        &[
            json!({
                "date": "2012-05-01 10:00:00", "match2id": "M123", "pagename": "Proleague/2012",
                "match2games": json!([
                    {"mode": "1v1", "participants": {"1_1": {"player": "Flash"}, "2_1": {"player": "Jaedong"}}, "scores": [1, 0]},
                    {"mode": "2v2", "participants": {"1_1": {"player": "Bisu"}, "2_1": {"player": "Stork"}}, "scores": [1, 0]},
                    {"mode": "1v1", "participants": {"1_2": {"player": "Bisu"}, "2_2": {"player": "Stork"}}, "scores": [0, 1]},
                    {"mode": "1v1", "participants": {"1_3": {"player": "Mind"}, "2_3": {"player": "Mind"}}, "scores": [1, 0]},
                    {"mode": "1v1", "participants": {"1_4": {"player": "sea"}, "2_4": {"player": "Hyuk"}}, "scores": [-1, -1]}
                ]).to_string()
            }),
            json!({"date": "1970-01-01", "match2id": "M0", "match2games": "[]"}),
        ],
    );

    let rows = run(Game::Starcraft1, &opts);
    let ids: Vec<_> = rows.iter().map(|r| r.match_id.as_str()).collect();
    assert_eq!(ids, ["X1", "M123_0", "M123_2"]);
    assert_eq!(rows[1].page, "https://liquipedia.net/starcraft/Proleague/2012");
    assert_eq!((rows[1].outcome, rows[2].outcome), (Outcome::Win, Outcome::Loss));
    assert_eq!(rows[2].competitor_1, "Bisu");

    let g = Game::Starcraft1;
    assert_eq!(audit_lines(&opts, g, "invalid_date_team")[0]["match2id"], "M0");
    assert_eq!(audit_lines(&opts, g, "bad_team_game")[0]["match_id"], "M123_4");
    assert!(audit_lines(&opts, g, "bad_team_game")[0].get("match2games").is_none());
    assert_eq!(audit_lines(&opts, g, "played_self")[0]["match_id"], "M123_3");
}

#[test]
fn mixed_file_diverts_team_matches() {
    let (_dir, opts) = workspace();
    let solo = |name: &str, score: i64| json!({"name": name, "score": score, "type": "solo", "match2players": [{"id": 1, "name": name}]});
    let squad = |players: &[&str]| {
        json!({
            "name": "Club", "score": 0, "type": "team",
            "match2players": players.iter().enumerate().map(|(i, p)| json!({"id": i + 1, "name": p})).collect::<Vec<_>>()
        })
    };
    write_raw(
        &opts,
        "ea_sports_fc.jsonl",
        &[
            json!({"date": "2023-02-01", "match2id": "S1", "winner": "2", "match2opponents": [solo("Tekkz", 1), solo("Vejrgang", 2)], "match2games": "[]"}),
            json!({
                "date": "2023-02-02", "match2id": "T1",
                "match2opponents": [squad(&["Tekkz", "Levi"]), squad(&["Vejrgang", "Obrun"])],
                "match2games": [
                    {"participants": {"1_1": {}, "2_1": {}}, "scores": [2, 1]},
                    {"participants": {"1_2": {"name": "Levi"}, "2_2": {"name": "TBD"}}, "scores": [0, 0]},
                    {"participants": {"1_2": {}, "2_2": {"name": "Obrun"}}, "scores": [1, 1]}
                ]
            }),
        ],
    );

    let rows = run(Game::EaSportsFc, &opts);
    let got: Vec<_> = rows
        .iter()
        .map(|r| (r.match_id.as_str(), r.competitor_1.as_str(), r.competitor_2.as_str(), r.outcome))
        .collect();
    assert_eq!(
        got,
        [
            ("S1", "Tekkz", "Vejrgang", Outcome::Loss),
            ("T1_0", "Tekkz", "Vejrgang", Outcome::Win),
            ("T1_2", "Levi", "Obrun", Outcome::Draw),
        ]
    );
}

#[test]
fn team_match_without_games_is_archived() {
    let (_dir, opts) = workspace();
    let solo = |name: &str, score: i64| json!({"name": name, "score": score, "type": "solo", "match2players": [{"id": 1, "name": name}]});
    let empty_squad = json!({"name": "Club", "score": 0, "type": "team", "match2players": []});
    write_raw(
        &opts,
        "ea_sports_fc.jsonl",
        &[
            json!({"date": "2023-02-01", "match2id": "S1", "winner": "1", "match2opponents": [solo("Tekkz", 2), solo("Vejrgang", 1)], "match2games": "[]"}),
            json!({
                "date": "2023-02-02", "match2id": "T9",
                "match2opponents": [empty_squad.clone(), empty_squad],
                "match2games": [{"participants": {"1_1": {}, "2_1": {}}, "scores": [2, 1]}]
            }),
        ],
    );
    let report = engine::process(Game::EaSportsFc, &opts, &mut NullProgress).unwrap();
    assert_eq!(report.rows_out, 1);

    let audit = audit_lines(&opts, Game::EaSportsFc, "no_team_games");
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0]["match2id"], "T9");

    // the divert shows up between the passes it sits between
    let labels: Vec<_> = report.stages.iter().map(|s| s.label.as_str()).collect();
    let at = labels.iter().position(|l| *l == "team_matches").unwrap();
    assert_eq!(labels[at - 1], "not_two_players");
    let divert = &report.stages[at];
    assert_eq!((divert.before, divert.after), (2, 1));
    assert_eq!(report.stages[at - 1].after, divert.before);
    assert_eq!(report.stages[at + 1].before, divert.after);

    let unpack = report.stages.iter().find(|s| s.label == "no_team_games").unwrap();
    assert_eq!((unpack.before, unpack.after), (1, 0));

    write_raw(&opts, "starcraft1_1v1.jsonl", &[]);
    write_raw(
        &opts,
        "starcraft1_team.jsonl",
        &[json!({"date": "2012-05-01 10:00:00", "match2id": "M7", "pagename": "Proleague/2012", "match2games": "[]"})],
    );
    engine::process(Game::Starcraft1, &opts, &mut NullProgress).unwrap();
    let audit = audit_lines(&opts, Game::Starcraft1, "no_team_games");
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0]["match2id"], "M7");
}

#[test]
fn shared_fighting_game_file_is_split_by_variant() {
    let (_dir, opts) = workspace();
    let m = |game: &str, obj: &str, p1: &str, p2: &str, winner: &str| {
        json!({
            "date": "2023-08-04", "opponent1": p1, "opponent2": p2, "opponent1score": 2, "opponent2score": 3,
            "winner": winner, "game": game, "matchid": "R1M1", "pagename": "Evo/2023", "objectname": obj
        })
    };
    write_raw(
        &opts,
        "fighting_games.jsonl",
        &[
            m("sf6", "Evo 2023\nR1M1", "Punk", "Daigo", "Daigo"),
            m("t8", "Evo 2023\nR1M2", "Arslan Ash", "Knee", "Knee"),
            m("sf6", "Evo 2023\nR1M3", "MenaRD", "Tokido", "nobody"),
        ],
    );

    let rows = run(Game::StreetFighter, &opts);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].match_id, "Evo 2023R1M1");
    assert_eq!(rows[0].outcome, Outcome::Loss);
    assert_eq!(audit_lines(&opts, Game::StreetFighter, "other_game").len(), 1);
    assert_eq!(audit_lines(&opts, Game::StreetFighter, "null_outcome").len(), 1);

    let rows = run(Game::Tekken, &opts);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].competitor_2, "Knee");
}

#[test]
fn display_name_falls_back_to_template_display() {
    let (_dir, opts) = workspace();
    write_raw(
        &opts,
        "rocket_league.jsonl",
        &[json!({
            "date": "2023-03-01", "match2id": "RL1", "winner": "2",
            "match2opponents": [
                {"name": null, "template": "teamA", "teamtemplate": {"name": "Team A"}, "score": 1},
                {"name": "False", "template": "teamB", "teamtemplate": "False", "score": 3}
            ]
        })],
    );
    let rows = run(Game::RocketLeague, &opts);
    assert_eq!((rows[0].competitor_1.as_str(), rows[0].competitor_2.as_str()), ("Team A", "teamB"));
}

#[test]
fn status_only_results_become_scores() {
    let (_dir, opts) = workspace();
    write_raw(
        &opts,
        "halo.jsonl",
        &[
            json!({"date": "2022-10-01", "match2id": "H1", "winner": "1",
                   "match2opponents": [{"name": "OpTic", "score": -1, "status": "W"}, {"name": "FaZe", "score": -1, "status": "L"}]}),
            json!({"date": "2022-10-02", "match2id": "H2", "winner": "1",
                   "match2opponents": [{"name": "OpTic", "score": 1, "status": "S"}, {"name": "FaZe", "score": 3, "status": "S"}]}),
        ],
    );
    let rows = run(Game::Halo, &opts);
    assert_eq!(rows.len(), 1);
    assert_eq!((rows[0].competitor_1_score, rows[0].competitor_2_score), (Some(1.0), Some(0.0)));
    assert_eq!(rows[0].competitor_1, "optic");
    assert_eq!(audit_lines(&opts, Game::Halo, "outcome_disagree")[0]["match2id"], "H2");
}

#[test]
fn leaguepedia_and_aligulac_sources() {
    let (_dir, opts) = workspace();
    write_raw(
        &opts,
        "league_of_legends.jsonl",
        &[json!({"DateTime UTC": "2024-01-17 08:00:00", "Team1": "SKT", "Team2": "Gen.G", "Team1Redirect": "T1",
                 "Team1Score": "2", "Team2Score": "1", "Winner": "1", "MatchId": "LCK_1", "OverviewPage": "LCK/2024 Season/Spring Season"})],
    );
    let rows = run(Game::LeagueOfLegends, &opts);
    assert_eq!(rows[0].competitor_1, "T1");
    assert_eq!(rows[0].page, "https://lol.fandom.com/wiki/LCK/2024_Season/Spring_Season");

    write_raw(
        &opts,
        "starcraft2.jsonl",
        &[json!({"id": 77, "date": "2019-02-01", "pla": {"id": 49, "tag": "Serral"}, "plb": {"id": 485, "tag": "Maru"},
                 "sca": 3, "scb": 3, "eventobj": {"id": 9, "fullname": "WCS Winter / Europe"}})],
    );
    let rows = run(Game::Starcraft2, &opts);
    assert_eq!((rows[0].competitor_1.as_str(), rows[0].outcome), ("Serral_49", Outcome::Draw));
    assert_eq!(rows[0].page, "http://aligulac.com/results/events/9-WCS-Winter--Europe");
}

#[test]
fn runner_reports_each_game() {
    let (_dir, mut opts) = workspace();
    opts.workers = 2;
    write_raw(
        &opts,
        "tetris.jsonl",
        &[json!({"date": "2021-12-05", "match2id": "CTWC1", "winner": "1",
                 "match2opponents": [{"name": "Huff", "score": 3}, {"name": "Dog", "score": 2}]})],
    );
    write_raw(&opts, "dota2.jsonl", &[]);

    let summary = runner::run(&[Game::Tetris, Game::Halo, Game::Dota2], &opts, &mut NullProgress);
    let done: Vec<_> = summary.completed.iter().map(|r| (r.game, r.rows_out)).collect();
    assert_eq!(done, [(Game::Tetris, 1), (Game::Dota2, 0)]);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, Game::Halo);
    assert!(!summary.is_success());
}
