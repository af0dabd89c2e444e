// src/specs/league_of_legends.rs
//! League of Legends (Leaguepedia cargo). Teams are keyed by their
//! redirect target so renamed organisations stay one competitor.
use crate::config::games::GameConfig;
use crate::engine::checks;
use crate::engine::types::{GameSpec, Step};
use crate::resolve::names::{CaseRule, REDIRECT_FIRST};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::{names, outcome};

pub const CASE: CaseRule = CaseRule::Preserve;

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            names(REDIRECT_FIRST, case),
            Step::reject("missing_team", checks::missing_competitor),
            Step::reject("played_self", checks::played_self),
            outcome(OutcomeRule::winner(DrawRule::Unconditional)),
            Step::reject("null_outcome", checks::null_outcome),
        ],
    )
}
