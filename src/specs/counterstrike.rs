// src/specs/counterstrike.rs
//! Counter-Strike (LPDB v3). Display names drift in capitalization, so
//! names are folded and the team template's display name wins.
use crate::config::consts::TBD;
use crate::config::games::GameConfig;
use crate::engine::types::{GameSpec, Step};
use crate::engine::{checks, hooks};
use crate::resolve::names::{CaseRule, TEMPLATE_FIRST};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::{names, outcome};

pub const CASE: CaseRule = CaseRule::Lower;

/// The nested opponent list does not survive audit writing in one piece.
const DROP: &[&str] = &["match2opponents"];

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject_dropping("invalid_date", DROP, checks::invalid_date),
            Step::reject_dropping("not_two_teams", DROP, checks::not_two_sides),
            names(TEMPLATE_FIRST, case),
            Step::reject("placeholder", checks::placeholder_either(TBD)),
            Step::reject("missing_team", checks::missing_competitor),
            Step::reject("played_self", checks::played_self),
            Step::reject("missing_results", checks::missing_results),
            outcome(OutcomeRule::winner(DrawRule::RequiresResultType)),
            Step::reject("null_outcome", checks::null_outcome),
            Step::derive("best_of_one", hooks::best_of_one),
        ],
    )
}
