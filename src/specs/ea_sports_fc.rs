// src/specs/ea_sports_fc.rs
//! EA Sports FC (LPDB v3). One raw file holds both 1v1 and team matches;
//! team matches are diverted and split into their embedded games. Game
//! participants often carry only a roster slot, so names fall back to the
//! opponent's player list.
use crate::config::consts::{BYE_TBD, TBD};
use crate::config::games::GameConfig;
use crate::engine::checks;
use crate::engine::types::{GameSpec, ParticipantField, Step, TeamSpec, UnpackRule};
use crate::resolve::names::{CaseRule, INDIVIDUAL};
use crate::resolve::outcome::{DrawRule, OutcomeRule};

use super::{names, outcome, score_outcome};

pub const CASE: CaseRule = CaseRule::Preserve;

pub const UNPACK: UnpackRule = UnpackRule {
    participant: ParticipantField::Name,
    roster_fallback: true,
    skip_modes: &[],
    skip_names: TBD,
};

pub fn spec(config: GameConfig, case: CaseRule) -> GameSpec {
    GameSpec::new(
        config,
        vec![
            Step::reject("invalid_date", checks::invalid_date),
            Step::reject("not_two_players", checks::not_two_sides),
            Step::divert("team_matches", checks::is_team_match),
            names(INDIVIDUAL, case),
            Step::reject("placeholder", checks::placeholder_either(BYE_TBD)),
            Step::reject("missing_team", checks::missing_competitor),
            Step::reject("dq", checks::disqualified),
            Step::reject("missing_results", checks::unresolved_zero_winner),
            outcome(OutcomeRule::winner(DrawRule::RequiresResultType)),
            Step::reject("null_outcome", checks::null_outcome),
        ],
    )
    .with_team(TeamSpec {
        before: vec![Step::reject("invalid_date_team", checks::invalid_date)],
        unpack: UNPACK,
        after: vec![
            Step::reject_dropping("bad_team_game", &["match2games"], checks::bad_team_game),
            score_outcome(),
            outcome(OutcomeRule::SCORES_ONLY),
        ],
    })
    .then(vec![Step::reject("played_self", checks::played_self)])
}
