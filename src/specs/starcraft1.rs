// src/specs/starcraft1.rs
//! Brood War (LPDB v3, hybrid). 1v1 matches come from one file; team
//! league matches from another, each split into its embedded 1v1 games.
use crate::config::consts::PLACEHOLDERS;
use crate::config::games::GameConfig;
use crate::engine::checks;
use crate::engine::types::{GameSpec, ParticipantField, Step, TeamSpec, UnpackRule};
use crate::resolve::names::{CaseRule, INDIVIDUAL};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::{names, outcome, score_outcome};

pub const CASE: CaseRule = CaseRule::Preserve;

pub const UNPACK: UnpackRule = UnpackRule {
    participant: ParticipantField::Player,
    roster_fallback: false,
    skip_modes: &["2v2"],
    skip_names: &[],
};

/// Team-file passes shared with Warcraft III.
pub(crate) fn team_section(unpack: UnpackRule) -> TeamSpec {
    TeamSpec {
        before: vec![Step::reject("invalid_date_team", checks::invalid_date)],
        unpack,
        after: vec![
            Step::reject_dropping("bad_team_game", &["match2games"], checks::bad_team_game),
            Step::reject_dropping("team_placeholder", &["match2games"], checks::placeholder_either(PLACEHOLDERS)),
            score_outcome(),
            outcome(OutcomeRule::SCORES_ONLY),
        ],
    }
}

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            Step::reject("not_two_players", checks::not_two_sides),
            names(INDIVIDUAL, case),
            Step::reject("invalid_competitor", checks::placeholder_either(PLACEHOLDERS)),
            Step::reject("unknown_player", checks::unknown_player),
            Step::reject("missing_team", checks::missing_competitor),
            Step::reject("dq", checks::disqualified),
            Step::reject("missing_results", checks::unresolved_zero_winner),
            outcome(OutcomeRule::winner(DrawRule::RequiresResultType)),
            Step::reject("null_outcome", checks::null_outcome),
        ],
    )
    .with_team(team_section(UNPACK))
    .then(vec![Step::reject("played_self", checks::played_self)])
}
