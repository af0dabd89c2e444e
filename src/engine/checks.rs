// src/engine/checks.rs
//! Rejection predicates shared by the game specs. `true` means invalid.
use chrono::NaiveDate;

use crate::core::dates::{is_invalid_date, valid_date};
use crate::core::sanitize::{in_token_set, is_blank};
use crate::data::MatchRow;

pub fn invalid_date(r: &MatchRow) -> bool {
    is_invalid_date(r.date.as_deref())
}

/// Dated before `min`. Rows without a usable date are left to `invalid_date`.
pub fn before(min: NaiveDate) -> impl Fn(&MatchRow) -> bool + Send + Sync + 'static {
    move |r| valid_date(r.date.as_deref()).is_some_and(|d| d < min)
}

pub fn not_two_sides(r: &MatchRow) -> bool {
    r.sides.len() != 2
}

pub fn missing_competitor(r: &MatchRow) -> bool {
    let (c1, c2) = r.competitors();
    is_blank(c1) || is_blank(c2)
}

pub fn played_self(r: &MatchRow) -> bool {
    let (c1, c2) = r.competitors();
    c1.is_some() && c1 == c2
}

pub fn null_outcome(r: &MatchRow) -> bool {
    r.outcome.is_none()
}

/// Either side is a placeholder token.
pub fn placeholder_either(tokens: &'static [&'static str]) -> impl Fn(&MatchRow) -> bool + Send + Sync + 'static {
    move |r| {
        let (c1, c2) = r.competitors();
        in_token_set(c1, tokens) || in_token_set(c2, tokens)
    }
}

/// Both sides are placeholder tokens; one real side is kept.
pub fn placeholder_both(tokens: &'static [&'static str]) -> impl Fn(&MatchRow) -> bool + Send + Sync + 'static {
    move |r| {
        let (c1, c2) = r.competitors();
        in_token_set(c1, tokens) && in_token_set(c2, tokens)
    }
}

pub fn unknown_player(r: &MatchRow) -> bool {
    let (c1, c2) = r.competitors();
    in_token_set(c1, &["unknown"]) || in_token_set(c2, &["unknown"])
}

/// Either side disqualified.
pub fn disqualified(r: &MatchRow) -> bool {
    (0..2).any(|i| r.status(i).is_some_and(|s| s.eq_ignore_ascii_case("dq")))
}

fn blank_winner(r: &MatchRow) -> bool {
    is_blank(r.winner.as_deref())
}

fn winner_is(r: &MatchRow, w: &str) -> bool {
    r.winner.as_deref() == Some(w)
}

fn scores_are(r: &MatchRow, s1: f64, s2: f64) -> bool {
    r.score_1 == Some(s1) && r.score_2 == Some(s2)
}

fn sentinel_scores(r: &MatchRow) -> bool {
    scores_are(r, -1.0, -1.0) || scores_are(r, 0.0, 0.0)
}

/// 0-0 with nobody declared the winner.
pub fn did_not_play(r: &MatchRow) -> bool {
    scores_are(r, 0.0, 0.0) && blank_winner(r)
}

/// Sentinel scores (-1/-1 or 0/0) and no winner.
pub fn missing_results(r: &MatchRow) -> bool {
    sentinel_scores(r) && blank_winner(r)
}

/// As [`missing_results`], also treating a `'0'` winner as unset.
pub fn missing_results_or_zero_winner(r: &MatchRow) -> bool {
    sentinel_scores(r) && (blank_winner(r) || winner_is(r, "0"))
}

/// `'0'` winner with -1/-1 scores: the match never produced a result.
pub fn unresolved_zero_winner(r: &MatchRow) -> bool {
    winner_is(r, "0") && scores_are(r, -1.0, -1.0)
}

/// Winner field and score comparison both resolved and disagree.
pub fn outcome_disagrees(r: &MatchRow) -> bool {
    matches!((r.outcome, r.score_outcome), (Some(a), Some(b)) if a != b)
}

/// Row belongs to a different title sharing the raw file.
pub fn other_variant(variants: &'static [&'static str]) -> impl Fn(&MatchRow) -> bool + Send + Sync + 'static {
    move |r| !r.game.as_deref().is_some_and(|g| variants.contains(&g))
}

/// Embedded game with a missing player or an unusable score.
pub fn bad_team_game(r: &MatchRow) -> bool {
    let bad_score = |s: Option<f64>| s.is_none_or(|v| v == -1.0);
    missing_competitor(r) || bad_score(r.score_1) || bad_score(r.score_2)
}

/// Either opponent entry is a team.
pub fn is_team_match(r: &MatchRow) -> bool {
    r.sides.iter().take(2).any(|s| s.kind.as_deref() == Some("team"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Side;
    use crate::resolve::Outcome;

    fn scored(s1: Option<f64>, s2: Option<f64>, winner: Option<&str>) -> MatchRow {
        MatchRow { score_1: s1, score_2: s2, winner: winner.map(str::to_string), ..MatchRow::default() }
    }

    fn named(c1: &str, c2: &str) -> MatchRow {
        MatchRow { competitor_1: Some(c1.into()), competitor_2: Some(c2.into()), ..MatchRow::default() }
    }

    #[test]
    fn result_sentinels() {
        assert!(missing_results(&scored(Some(-1.0), Some(-1.0), Some(""))));
        assert!(missing_results(&scored(Some(0.0), Some(0.0), None)));
        assert!(!missing_results(&scored(Some(0.0), Some(0.0), Some("1"))));
        assert!(!missing_results(&scored(Some(-1.0), Some(-1.0), Some("0"))));
        assert!(missing_results_or_zero_winner(&scored(Some(-1.0), Some(-1.0), Some("0"))));
        assert!(unresolved_zero_winner(&scored(Some(-1.0), Some(-1.0), Some("0"))));
        assert!(!unresolved_zero_winner(&scored(Some(0.0), Some(0.0), Some("0"))));
        assert!(did_not_play(&scored(Some(0.0), Some(0.0), Some("False"))));
    }

    #[test]
    fn competitor_checks() {
        assert!(played_self(&named("teamx", "teamx")));
        assert!(!played_self(&named("teamx", "teamy")));
        assert!(!played_self(&MatchRow::default()));
        assert!(missing_competitor(&named("", "teamy")));
        assert!(placeholder_either(&["tbd"])(&named("TBD", "teamy")));
        assert!(!placeholder_both(&["tbd"])(&named("TBD", "teamy")));
        assert!(placeholder_both(&["tbd"])(&named("tbd", "TBD")));
        assert!(unknown_player(&named("Unknown", "Flash")));
    }

    #[test]
    fn status_and_kind() {
        let mut r = MatchRow {
            sides: vec![Side { status: Some("DQ".into()), ..Side::default() }, Side::default()],
            ..MatchRow::default()
        };
        assert!(disqualified(&r));
        assert!(!is_team_match(&r));
        r.sides[1].kind = Some("team".into());
        assert!(is_team_match(&r));
    }

    #[test]
    fn dates_and_variants() {
        let r = MatchRow { date: Some("2010-06-01".into()), game: Some("sfv".into()), ..MatchRow::default() };
        let min = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        assert!(before(min)(&r));
        assert!(!before(min)(&MatchRow::default()));
        assert!(!other_variant(&["sfv", "sf6"])(&r));
        assert!(other_variant(&["t7"])(&r));
        assert!(other_variant(&["t7"])(&MatchRow::default()));
    }

    #[test]
    fn team_game_and_disagreement() {
        let mut r = named("Moon", "Grubby");
        r.score_1 = Some(1.0);
        r.score_2 = Some(-1.0);
        assert!(bad_team_game(&r));
        r.score_2 = Some(0.0);
        assert!(!bad_team_game(&r));

        r.outcome = Some(Outcome::Win);
        r.score_outcome = Some(Outcome::Loss);
        assert!(outcome_disagrees(&r));
        r.score_outcome = None;
        assert!(!outcome_disagrees(&r));
    }
}
