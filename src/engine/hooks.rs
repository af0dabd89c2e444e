// src/engine/hooks.rs
//! Derivation hooks. Each writes derived fields on a row and never drops it.
use crate::data::MatchRow;
use crate::resolve::names::{self, CaseRule, NameSource};
use crate::resolve::outcome::{self, OutcomeInputs, OutcomeRule};

/// Fill `competitor_1`/`competitor_2` from the first two sides.
pub fn resolve_names(order: &'static [NameSource], case: CaseRule) -> impl Fn(&mut MatchRow) + Send + Sync + 'static {
    move |r| {
        r.competitor_1 = r.side(0).and_then(|s| names::resolve(s, order, case));
        r.competitor_2 = r.side(1).and_then(|s| names::resolve(s, order, case));
    }
}

pub fn score_outcome(r: &mut MatchRow) {
    r.score_outcome = outcome::from_scores(r.score_1, r.score_2);
}

/// Resolve `outcome`. Named winners are compared against the raw side
/// names, before any case folding.
pub fn resolve_outcome(rule: OutcomeRule) -> impl Fn(&mut MatchRow) + Send + Sync + 'static {
    move |r| {
        let inputs = OutcomeInputs {
            winner: r.winner.as_deref(),
            result_type: r.result_type.as_deref(),
            name_1: r.side(0).and_then(|s| s.name.as_deref()),
            name_2: r.side(1).and_then(|s| s.name.as_deref()),
            score_outcome: r.score_outcome,
        };
        r.outcome = outcome::resolve(rule, inputs);
    }
}

/// Best-of-1 round tallies are not a match score; emit the outcome instead.
pub fn best_of_one(r: &mut MatchRow) {
    if r.best_of != Some(1) {
        return;
    }
    if let Some(o) = r.outcome {
        r.score_1 = Some(o.value());
        r.score_2 = Some(o.flip().value());
    }
}

/// A `W`/`L` status pair stands in for the score, as 1 to 0.
pub fn status_scores(r: &mut MatchRow) {
    let status = |i| r.status(i).map(str::to_ascii_lowercase);
    let scores = match (status(0).as_deref(), status(1).as_deref()) {
        (Some("w"), Some("l")) => Some((1.0, 0.0)),
        (Some("l"), Some("w")) => Some((0.0, 1.0)),
        _ => None,
    };
    if let Some((s1, s2)) = scores {
        r.score_1 = Some(s1);
        r.score_2 = Some(s2);
    }
}

/// Fighting-game match ids are the LPDB object name with line breaks removed.
pub fn object_name_id(r: &mut MatchRow) {
    let name = r.source.get("objectname").and_then(|v| v.as_str());
    if let Some(name) = name {
        r.match_id = Some(name.replace('\n', ""));
    }
}
