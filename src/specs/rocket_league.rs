// src/specs/rocket_league.rs
use crate::config::consts::BYE_TBD;
use crate::config::games::GameConfig;
use crate::engine::checks;
use crate::engine::types::{GameSpec, Step};
use crate::resolve::names::{CaseRule, DISPLAY_FIRST};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::{names, outcome};

pub const CASE: CaseRule = CaseRule::Preserve;

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            Step::reject("not_two_teams", checks::not_two_sides),
            names(DISPLAY_FIRST, case),
            Step::reject("placeholder", checks::placeholder_either(BYE_TBD)),
            Step::reject("missing_team", checks::missing_competitor),
            Step::reject("dq", checks::disqualified),
            Step::reject("missing_results", checks::unresolved_zero_winner),
            outcome(OutcomeRule::winner(DrawRule::RequiresResultType)),
            Step::reject("null_outcome", checks::null_outcome),
            Step::reject("played_self", checks::played_self),
        ],
    )
}
