// src/specs/tetris.rs
use crate::config::consts::BYE_TBD;
use crate::config::games::GameConfig;
use crate::engine::checks;
use crate::engine::types::{GameSpec, Step};
use crate::resolve::names::{CaseRule, INDIVIDUAL};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::{names, outcome, score_outcome};

pub const CASE: CaseRule = CaseRule::Lower;

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            Step::reject("not_two_players", checks::not_two_sides),
            Step::reject("did_not_play", checks::did_not_play),
            score_outcome(),
            outcome(OutcomeRule::winner_then_scores(DrawRule::Unconditional)),
            Step::reject("null_outcome", checks::null_outcome),
            names(INDIVIDUAL, case),
            Step::reject("placeholder", checks::placeholder_either(BYE_TBD)),
            Step::reject("played_self", checks::played_self),
        ],
    )
}
