// src/specs/mod.rs
//! # Per-game pipeline specs
//!
//! Each module here describes one game (or one family of games sharing a
//! raw file) as a [`GameSpec`]: which rejection passes run, in what order,
//! and which derivation hooks fill in names, scores and outcomes.
//!
//! ## What lives here
//! - **Stage order** per game, including where names are resolved relative
//!   to the placeholder and self-play checks.
//! - **Source quirks**: per-game draw rules, name precedence, case folding,
//!   score reinterpretation (best-of-1, W/L status), variant filters.
//! - **Decomposition rules** for games whose team matches embed 1v1 games.
//!
//! ## What does **not** live here
//! - Loading, auditing and writing: that is `engine` + `validate` + `store`.
//! - The closing guards (`invalid_date`, `missing_team`, `played_self`,
//!   `null_outcome`); the engine runs them after every spec.
//!
//! ## Typical call chain
//! ```text
//! runner / caller → engine::process(game) → specs::build(game)
//!                                        ↘ engine::run_spec → store::save_canonical
//! ```
use crate::config::games::Game;
use crate::config::options::Options;
use crate::engine::hooks;
use crate::engine::types::{GameSpec, Step};
use crate::resolve::names::{CaseRule, NameSource};
use crate::resolve::outcome::OutcomeRule;

pub mod counterstrike;
pub mod dota2;
pub mod ea_sports_fc;
pub mod fighting_games;
pub mod halo;
pub mod league_of_legends;
pub mod overwatch;
pub mod rocket_league;
pub mod starcraft1;
pub mod starcraft2;
pub mod tetris;
pub mod valorant;
pub mod warcraft3;

/// Build the stage configuration for `game`. Case folding follows the
/// game's default unless `options` overrides it.
pub fn build(game: Game, options: &Options) -> GameSpec {
    let config = game.config();
    let case = |default| options.case_rule(game, default);
    match game {
        Game::CounterStrike => counterstrike::spec(config, case(counterstrike::CASE)),
        Game::Valorant => valorant::spec(config, case(valorant::CASE)),
        Game::Dota2 => dota2::spec(config, case(dota2::CASE)),
        Game::RocketLeague => rocket_league::spec(config, case(rocket_league::CASE)),
        Game::Halo => halo::spec(config, case(halo::CASE)),
        Game::Tetris => tetris::spec(config, case(tetris::CASE)),
        Game::Overwatch | Game::CallOfDuty => overwatch::spec(config, case(overwatch::CASE)),
        Game::SmashUltimate => fighting_games::smash(config, case(fighting_games::CASE)),
        Game::StreetFighter | Game::Tekken | Game::KingOfFighters | Game::GuiltyGear => {
            fighting_games::spec(config, case(fighting_games::CASE))
        }
        Game::LeagueOfLegends => league_of_legends::spec(config, case(league_of_legends::CASE)),
        Game::Starcraft2 => starcraft2::spec(config, case(starcraft2::CASE)),
        Game::Starcraft1 => starcraft1::spec(config, case(starcraft1::CASE)),
        Game::Warcraft3 => warcraft3::spec(config, case(warcraft3::CASE)),
        Game::EaSportsFc => ea_sports_fc::spec(config, case(ea_sports_fc::CASE)),
    }
}

/* shared step builders */

pub(crate) fn names(order: &'static [NameSource], case: CaseRule) -> Step {
    Step::derive("resolve_names", hooks::resolve_names(order, case))
}

pub(crate) fn score_outcome() -> Step {
    Step::derive("score_outcome", hooks::score_outcome)
}

pub(crate) fn outcome(rule: OutcomeRule) -> Step {
    Step::derive("outcome", hooks::resolve_outcome(rule))
}
