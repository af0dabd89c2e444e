// src/specs/dota2.rs
//! Dota 2 (LPDB v3). Records before 2011 predate the structured match
//! data and are dropped. Outcomes come from the winner field, falling back
//! to scores; names are resolved last.
use chrono::NaiveDate;

use crate::config::consts::BYE_TBD;
use crate::config::games::GameConfig;
use crate::engine::checks;
use crate::engine::types::{GameSpec, Step};
use crate::resolve::names::{CaseRule, DISPLAY_FIRST};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::{names, outcome, score_outcome};

pub const CASE: CaseRule = CaseRule::Lower;

pub fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2011, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            Step::reject("too_early", checks::before(first_day())),
            Step::reject("not_two_teams", checks::not_two_sides),
            Step::reject("did_not_play", checks::did_not_play),
            score_outcome(),
            outcome(OutcomeRule::winner_then_scores(DrawRule::Unconditional)),
            Step::reject("null_outcome", checks::null_outcome),
            names(DISPLAY_FIRST, case),
            Step::reject("placeholder", checks::placeholder_either(BYE_TBD)),
            Step::reject("played_self", checks::played_self),
        ],
    )
}
