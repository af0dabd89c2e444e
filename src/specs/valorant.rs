// src/specs/valorant.rs
use crate::config::consts::TBD;
use crate::config::games::GameConfig;
use crate::engine::types::{GameSpec, Step};
use crate::engine::{checks, hooks};
use crate::resolve::names::{CaseRule, TEMPLATE_FIRST};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::{names, outcome};

pub const CASE: CaseRule = CaseRule::Preserve;

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            Step::reject("not_two_teams", checks::not_two_sides),
            names(TEMPLATE_FIRST, case),
            // a single TBD side still names a real team
            Step::reject("placeholder", checks::placeholder_both(TBD)),
            Step::reject("missing_team", checks::missing_competitor),
            Step::reject("missing_results", checks::missing_results_or_zero_winner),
            outcome(OutcomeRule::winner(DrawRule::RequiresResultType)),
            Step::reject("null_outcome", checks::null_outcome),
            Step::reject("played_self", checks::played_self),
            Step::derive("best_of_one", hooks::best_of_one),
        ],
    )
}
