// src/specs/warcraft3.rs
//! Warcraft III (LPDB v3, hybrid). Same layout as Brood War; the 1v1
//! file records a `'0'` winner for draws without a result type.
use crate::config::consts::PLACEHOLDERS;
use crate::config::games::GameConfig;
use crate::engine::checks;
use crate::engine::types::{GameSpec, Step};
use crate::resolve::names::{CaseRule, INDIVIDUAL};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::starcraft1::{UNPACK, team_section};
use super::{names, outcome, score_outcome};

pub const CASE: CaseRule = CaseRule::Preserve;

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            Step::reject("not_two_players", checks::not_two_sides),
            names(INDIVIDUAL, case),
            Step::reject("invalid_competitor", checks::placeholder_either(PLACEHOLDERS)),
            Step::reject("missing_player", checks::missing_competitor),
            Step::reject("did_not_play", checks::did_not_play),
            Step::reject("dq", checks::disqualified),
            score_outcome(),
            outcome(OutcomeRule::winner_then_scores(DrawRule::Unconditional)),
            Step::reject("null_outcome", checks::null_outcome),
        ],
    )
    .with_team(team_section(UNPACK))
    .then(vec![Step::reject("played_self", checks::played_self)])
}
