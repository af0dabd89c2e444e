// src/specs/halo.rs
//! Halo (LPDB v3). Some series only record a W/L status per side; those
//! become a 1-0 score before outcomes are compared. Rows where the winner
//! field and the scores disagree are set aside for review.
use crate::config::consts::TBD;
use crate::config::games::GameConfig;
use crate::engine::{checks, hooks};
use crate::engine::types::{GameSpec, Step};
use crate::resolve::names::{CaseRule, TEMPLATE_FIRST};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::{names, outcome, score_outcome};

pub const CASE: CaseRule = CaseRule::Lower;

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("not_two_teams", checks::not_two_sides),
            names(TEMPLATE_FIRST, case),
            Step::reject("placeholder", checks::placeholder_both(TBD)),
            Step::reject("missing_team", checks::missing_competitor),
            Step::reject("missing_results", checks::missing_results),
            Step::derive("status_scores", hooks::status_scores),
            score_outcome(),
            outcome(OutcomeRule::winner_then_scores(DrawRule::RequiresResultType)),
            Step::reject("null_outcome", checks::null_outcome),
            Step::reject("outcome_disagree", checks::outcome_disagrees),
            Step::reject("played_self", checks::played_self),
            Step::reject("invalid_date", checks::invalid_date),
        ],
    )
}
