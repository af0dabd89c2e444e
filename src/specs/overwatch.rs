// src/specs/overwatch.rs
//! Overwatch and Call of Duty share the LPDB v1 flat record and the same
//! rules.
use crate::config::games::GameConfig;
use crate::engine::checks;
use crate::engine::types::{GameSpec, Step};
use crate::resolve::names::{CaseRule, NAME_ONLY};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::{names, outcome, score_outcome};

pub const CASE: CaseRule = CaseRule::Preserve;

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            names(NAME_ONLY, case),
            Step::reject("missing_team", checks::missing_competitor),
            Step::reject("did_not_play", checks::did_not_play),
            score_outcome(),
            outcome(OutcomeRule::winner_then_scores(DrawRule::Unconditional)),
            Step::reject("null_outcome", checks::null_outcome),
            Step::reject("played_self", checks::played_self),
        ],
    )
}
