// src/specs/fighting_games.rs
//! Fighting games (LPDB v1). Street Fighter, Tekken, King of Fighters and
//! Guilty Gear share one raw file and are told apart by the `game` variant
//! id; Smash Ultimate has its own file. The winner field names the winning
//! opponent.
use crate::config::games::GameConfig;
use crate::engine::{checks, hooks};
use crate::engine::types::{GameSpec, Step};
use crate::resolve::names::{CaseRule, NAME_ONLY};
use crate::resolve::outcome::OutcomeRule;

use super::{names, outcome};

pub const CASE: CaseRule = CaseRule::Preserve;

/// One title out of the shared fighting-game file.
pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    let variants = config.variants;
    GameSpec::new(
        config,
        vec![
            Step::reject("other_game", checks::other_variant(variants)),
            Step::derive("object_name_id", hooks::object_name_id),
            Step::reject("invalid_date", checks::invalid_date),
            names(NAME_ONLY, case),
            outcome(OutcomeRule::NAMED_WINNER),
            Step::reject("null_outcome", checks::null_outcome),
            Step::reject("played_self", checks::played_self),
        ],
    )
}

pub fn smash(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            names(NAME_ONLY, case),
            outcome(OutcomeRule::NAMED_WINNER),
            Step::reject("null_outcome", checks::null_outcome),
            Step::reject("played_self", checks::played_self),
        ],
    )
}
