// src/specs/starcraft2.rs
//! Starcraft II (Aligulac). Competitors are `{tag}_{id}` handles built at
//! decode time; Aligulac has no winner field.
use crate::config::games::GameConfig;
use crate::engine::checks;
use crate::engine::types::{GameSpec, Step};
use crate::resolve::names::{CaseRule, NAME_ONLY};
use crate::resolve::outcome::OutcomeRule;

use super::{names, outcome, score_outcome};

pub const CASE: CaseRule = CaseRule::Preserve;

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            names(NAME_ONLY, case),
            Step::reject("missing_team", checks::missing_competitor),
            score_outcome(),
            outcome(OutcomeRule::SCORES_ONLY),
            Step::reject("null_outcome", checks::null_outcome),
            Step::reject("played_self", checks::played_self),
        ],
    )
}
