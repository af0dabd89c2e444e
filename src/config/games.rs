// src/config/games.rs
//! Static per-game configuration: names, upstream source parameters and the
//! raw files each pipeline consumes.
//!
//! The query parameters are what the ingestion layer sends upstream. They
//! are kept here so one table documents where every raw file comes from;
//! the normalization core only reads `file`, `format` and `role`.
use std::fmt;
use std::str::FromStr;

use super::consts::{ALIGULAC_API, LEAGUEPEDIA_API, LIQUIPEDIA_API, LIQUIPEDIA_PREFIX};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Game {
    LeagueOfLegends,
    CounterStrike,
    RocketLeague,
    Starcraft1,
    Starcraft2,
    SmashUltimate,
    Dota2,
    Overwatch,
    Valorant,
    Warcraft3,
    Halo,
    CallOfDuty,
    Tetris,
    StreetFighter,
    Tekken,
    KingOfFighters,
    GuiltyGear,
    EaSportsFc,
}

impl Game {
    pub const ALL: [Game; 18] = [
        Game::LeagueOfLegends,
        Game::CounterStrike,
        Game::RocketLeague,
        Game::Starcraft1,
        Game::Starcraft2,
        Game::SmashUltimate,
        Game::Dota2,
        Game::Overwatch,
        Game::Valorant,
        Game::Warcraft3,
        Game::Halo,
        Game::CallOfDuty,
        Game::Tetris,
        Game::StreetFighter,
        Game::Tekken,
        Game::KingOfFighters,
        Game::GuiltyGear,
        Game::EaSportsFc,
    ];

    pub fn short_name(self) -> &'static str {
        match self {
            Game::LeagueOfLegends => "lol",
            Game::CounterStrike => "cs",
            Game::RocketLeague => "rl",
            Game::Starcraft1 => "sc1",
            Game::Starcraft2 => "sc2",
            Game::SmashUltimate => "ssbu",
            Game::Dota2 => "dota2",
            Game::Overwatch => "ow",
            Game::Valorant => "val",
            Game::Warcraft3 => "wc3",
            Game::Halo => "halo",
            Game::CallOfDuty => "cod",
            Game::Tetris => "tetris",
            Game::StreetFighter => "sf",
            Game::Tekken => "tek",
            Game::KingOfFighters => "kof",
            Game::GuiltyGear => "gg",
            Game::EaSportsFc => "eafc",
        }
    }

    /// Canonical name; output tables are keyed by this, not the acronym.
    pub fn long_name(self) -> &'static str {
        match self {
            Game::LeagueOfLegends => "league_of_legends",
            Game::CounterStrike => "counterstrike",
            Game::RocketLeague => "rocket_league",
            Game::Starcraft1 => "starcraft1",
            Game::Starcraft2 => "starcraft2",
            Game::SmashUltimate => "smash_ultimate",
            Game::Dota2 => "dota2",
            Game::Overwatch => "overwatch",
            Game::Valorant => "valorant",
            Game::Warcraft3 => "warcraft3",
            Game::Halo => "halo",
            Game::CallOfDuty => "call_of_duty",
            Game::Tetris => "tetris",
            Game::StreetFighter => "street_fighter",
            Game::Tekken => "tekken",
            Game::KingOfFighters => "king_of_fighters",
            Game::GuiltyGear => "guilty_gear",
            Game::EaSportsFc => "ea_sports_fc",
        }
    }

    pub fn config(self) -> GameConfig {
        use Game::*;
        let (source, inputs, variants): (Source, &'static [RawInput], &'static [&'static str]) = match self {
            LeagueOfLegends => (Source::Leaguepedia, LOL_INPUTS, &[]),
            CounterStrike => (lpdb("counterstrike", LpdbVersion::V3), CS_INPUTS, &[]),
            RocketLeague => (lpdb("rocketleague", LpdbVersion::V3), RL_INPUTS, &[]),
            Starcraft1 => (lpdb("starcraft", LpdbVersion::V3), SC1_INPUTS, &[]),
            Starcraft2 => (Source::Aligulac, SC2_INPUTS, &[]),
            SmashUltimate => (lpdb("smash", LpdbVersion::V1), SSBU_INPUTS, &[]),
            Dota2 => (lpdb("dota2", LpdbVersion::V3), DOTA2_INPUTS, &[]),
            Overwatch => (lpdb("overwatch", LpdbVersion::V1), OW_INPUTS, &[]),
            Valorant => (lpdb("valorant", LpdbVersion::V3), VAL_INPUTS, &[]),
            Warcraft3 => (lpdb("warcraft", LpdbVersion::V3), WC3_INPUTS, &[]),
            Halo => (lpdb("halo", LpdbVersion::V3), HALO_INPUTS, &[]),
            CallOfDuty => (lpdb("callofduty", LpdbVersion::V1), COD_INPUTS, &[]),
            Tetris => (lpdb("tetris", LpdbVersion::V3), TETRIS_INPUTS, &[]),
            StreetFighter => (lpdb("fighters", LpdbVersion::V1), FIGHTING_INPUTS, STREET_FIGHTER_VARIANTS),
            Tekken => (lpdb("fighters", LpdbVersion::V1), FIGHTING_INPUTS, TEKKEN_VARIANTS),
            KingOfFighters => (lpdb("fighters", LpdbVersion::V1), FIGHTING_INPUTS, KOF_VARIANTS),
            GuiltyGear => (lpdb("fighters", LpdbVersion::V1), FIGHTING_INPUTS, GUILTY_GEAR_VARIANTS),
            EaSportsFc => (lpdb("easportsfc", LpdbVersion::V3), EAFC_INPUTS, &[]),
        };
        GameConfig { game: self, source, inputs, variants }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

impl FromStr for Game {
    type Err = Error;

    /// Accepts either the short acronym or the long name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Game::ALL
            .into_iter()
            .find(|g| g.short_name() == key || g.long_name() == key)
            .ok_or_else(|| Error::UnknownGame(s.to_string()))
    }
}

/* ---------------- source description ---------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpdbVersion {
    V1,
    V3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Liquipedia's structured match database.
    Liquipedia { wiki: &'static str, version: LpdbVersion },
    /// Leaguepedia's MediaWiki cargo tables.
    Leaguepedia,
    /// The Aligulac Starcraft II service.
    Aligulac,
}

impl Source {
    /// Endpoint the ingestion layer queries for this source.
    pub fn api_base(&self) -> String {
        match self {
            Source::Liquipedia { version: LpdbVersion::V1, .. } => format!("{LIQUIPEDIA_API}v1/match"),
            Source::Liquipedia { version: LpdbVersion::V3, .. } => format!("{LIQUIPEDIA_API}v3/match"),
            Source::Leaguepedia => LEAGUEPEDIA_API.to_string(),
            Source::Aligulac => ALIGULAC_API.to_string(),
        }
    }
}

const fn lpdb(wiki: &'static str, version: LpdbVersion) -> Source {
    Source::Liquipedia { wiki, version }
}

/// Shape of one raw JSON line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// LPDB v3 match with a nested `match2opponents` list.
    Match2,
    /// LPDB v3 team match whose individual games live in `match2games`.
    Match2Games,
    /// LPDB v1 flat record (`opponent1`, `opponent1score`, ...).
    Flat,
    /// Leaguepedia cargo row.
    Cargo,
    /// Aligulac match object.
    Aligulac,
}

impl SourceFormat {
    /// Fields that must exist somewhere in a non-empty batch. Each entry
    /// lists the accepted spellings of one field, canonical name first.
    pub fn required_fields(self) -> &'static [&'static [&'static str]] {
        match self {
            SourceFormat::Match2 => &[&["date"], &["match2opponents"]],
            SourceFormat::Match2Games => &[&["date"], &["match2games"]],
            SourceFormat::Flat => &[&["date"], &["opponent1"], &["opponent2"]],
            SourceFormat::Cargo => &[&["DateTime UTC", "DateTime_UTC"], &["Team1"], &["Team2"]],
            SourceFormat::Aligulac => &[&["date"], &["pla"], &["plb"]],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// Rows that already describe one pairwise match.
    Main,
    /// Team matches to be decomposed into individual games.
    Team,
}

/// Upstream query parameters for one raw file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub fields: &'static str,
    pub conditions: &'static str,
    pub order: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInput {
    pub file: &'static str,
    pub format: SourceFormat,
    pub role: InputRole,
    pub query: Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub game: Game,
    pub source: Source,
    pub inputs: &'static [RawInput],
    /// Upstream game-variant ids merged under this game. Empty means the raw
    /// file holds only this game.
    pub variants: &'static [&'static str],
}

impl GameConfig {
    /// Prefix that turns an upstream page name into a provenance URL.
    /// Leaguepedia and Aligulac build their links from other fields.
    pub fn page_prefix(&self) -> Option<String> {
        match self.source {
            Source::Liquipedia { wiki, .. } => Some(format!("{LIQUIPEDIA_PREFIX}{wiki}/")),
            Source::Leaguepedia | Source::Aligulac => None,
        }
    }

    pub fn main_inputs(&self) -> impl Iterator<Item = &'static RawInput> {
        self.inputs.iter().filter(|i| i.role == InputRole::Main)
    }

    pub fn team_inputs(&self) -> impl Iterator<Item = &'static RawInput> {
        self.inputs.iter().filter(|i| i.role == InputRole::Team)
    }
}

/* ---------------- raw inputs ---------------- */

const NO_WALKOVER: &str = "[[walkover::!1]] AND [[walkover::!2]] AND [[walkover::!ff]] AND [[finished::1]]";

const fn main(file: &'static str, format: SourceFormat, fields: &'static str, conditions: &'static str, order: &'static str) -> RawInput {
    RawInput { file, format, role: InputRole::Main, query: Query { fields, conditions, order } }
}

const fn team(file: &'static str, fields: &'static str, conditions: &'static str) -> RawInput {
    RawInput {
        file,
        format: SourceFormat::Match2Games,
        role: InputRole::Team,
        query: Query { fields, conditions, order: "date ASC, match2id ASC" },
    }
}

static LOL_INPUTS: &[RawInput] = &[main(
    "league_of_legends.jsonl",
    SourceFormat::Cargo,
    "DateTime_UTC, Team1, Team2, TRA._pageName=Team1Redirect, TRB._pageName=Team2Redirect, Team1Score, Team2Score, Winner, MatchId, OverviewPage",
    "(DateTime_UTC IS NOT NULL) AND (FF IS NULL) AND (Winner IS NOT NULL) AND (Team1 != \"TBD\") AND (Team2 != \"TBD\") AND (Player1 IS NULL) AND (Player2 IS NULL)",
    "DateTime_UTC, MatchId",
)];

static CS_INPUTS: &[RawInput] = &[main(
    "counterstrike.jsonl",
    SourceFormat::Match2,
    "date, match2opponents, winner, resulttype, finished, bestof, match2id, pagename",
    "[[mode::team]] AND [[walkover::!1]] AND [[walkover::!2]] AND [[walkover::!ff]] AND [[finished::1]] AND [[section::!Showmatch]] AND [[liquipediatiertype::!Showmatch]]",
    "date ASC, match2id ASC",
)];

static RL_INPUTS: &[RawInput] = &[main(
    "rocket_league.jsonl",
    SourceFormat::Match2,
    "date, match2opponents, winner, resulttype, extradata, finished, bestof, match2id, pagename",
    "[[mode::3v3]] AND [[walkover::!1]] AND [[walkover::!2]] AND [[walkover::!ff]] AND [[finished::1]]",
    "date ASC, match2id ASC",
)];

static SC1_INPUTS: &[RawInput] = &[
    main(
        "starcraft1_1v1.jsonl",
        SourceFormat::Match2,
        "date, match2opponents, winner, resulttype, finished, bestof, match2id, pagename",
        "([[mode::1_1]] OR [[mode::solo]] OR [[mode::1v1]]) AND [[walkover::!1]] AND [[walkover::!2]] AND [[walkover::!ff]] AND [[finished::1]]",
        "date ASC, match2id ASC",
    ),
    team(
        "starcraft1_team.jsonl",
        "date, match2games, mode, resulttype, match2id, pagename",
        "([[mode::team_team]] OR [[mode::team]] OR [[mode::mixed]]) AND [[walkover::!1]] AND [[walkover::!2]] AND [[walkover::!ff]] AND [[finished::1]] AND [[resulttype::!default]]",
    ),
];

static SC2_INPUTS: &[RawInput] = &[main("starcraft2.jsonl", SourceFormat::Aligulac, "", "format=json", "date")];

static SSBU_INPUTS: &[RawInput] = &[main(
    "smash_ultimate.jsonl",
    SourceFormat::Flat,
    "date, opponent1, opponent2, opponent1score, opponent2score, winner, matchid, pagename",
    "[[walkover::!1]] AND [[walkover::!2]] AND [[mode::singles]] AND [[game::ultimate]] AND [[opponent1::!Bye]] AND [[opponent2::!Bye]]",
    "date ASC, matchid ASC",
)];

static DOTA2_INPUTS: &[RawInput] = &[main(
    "dota2.jsonl",
    SourceFormat::Match2,
    "date, match2opponents, winner, resulttype, extradata, finished, bestof, match2id, pagename",
    "[[game::dota2]] AND [[mode::team]] AND [[finished::1]] AND [[walkover::!1]] AND [[walkover::!2]]",
    "date ASC, match2id ASC",
)];

static OW_INPUTS: &[RawInput] = &[main(
    "overwatch.jsonl",
    SourceFormat::Flat,
    "date, opponent1, opponent2, opponent1score, opponent2score, winner, game, status, mode, resulttype, walkover, matchid, pagename",
    "[[liquipediatier::!-1]] AND [[finished::1]] AND [[walkover::!1]] AND [[walkover::!2]] AND [[opponent1::!Bye]] AND [[opponent2::!Bye]] AND [[opponent1::!TBD]] AND [[opponent2::!TBD]]",
    "date ASC, matchid ASC",
)];

static VAL_INPUTS: &[RawInput] = &[main(
    "valorant.jsonl",
    SourceFormat::Match2,
    "date, match2opponents, winner, resulttype, extradata, finished, bestof, match2id, pagename",
    "[[mode::team]] AND [[winner::!-1]] AND [[walkover::!1]] AND [[walkover::!2]] AND [[walkover::!ff]] AND [[finished::1]] AND [[section::!Showmatch]] AND [[liquipediatiertype::!Showmatch]]",
    "date ASC, match2id ASC",
)];

static WC3_INPUTS: &[RawInput] = &[
    main(
        "warcraft3_1v1.jsonl",
        SourceFormat::Match2,
        "date, match2opponents, winner, resulttype, finished, bestof, match2id, pagename",
        "([[mode::1v1]] OR [[mode::solo]]) AND [[finished::1]] AND [[walkover::!1]] AND [[walkover::!2]]",
        "date ASC, match2id ASC",
    ),
    team(
        "warcraft3_team.jsonl",
        "date, match2games, mode, resulttype, match2id, pagename",
        "([[mode::team_team]] OR [[mode::team]] OR [[mode::mixed]]) AND [[walkover::!1]] AND [[walkover::!2]] AND [[walkover::!ff]] AND [[finished::1]] AND [[resulttype::!default]]",
    ),
];

static HALO_INPUTS: &[RawInput] = &[main(
    "halo.jsonl",
    SourceFormat::Match2,
    "date, match2opponents, winner, resulttype, finished, bestof, match2id, pagename",
    "[[mode::team]] AND [[walkover::!1]] AND [[walkover::!2]] AND [[walkover::!ff]] AND [[finished::1]] AND [[section::!Showmatch]] AND [[liquipediatiertype::!Showmatch]]",
    "date ASC, match2id ASC",
)];

static COD_INPUTS: &[RawInput] = &[main(
    "call_of_duty.jsonl",
    SourceFormat::Flat,
    "date, opponent1, opponent2, opponent1score, opponent2score, winner, game, status, mode, resulttype, walkover, matchid, pagename",
    "[[mode::team]] AND [[game::!mobile]] AND [[game::!codm]] AND [[game::!Call of Duty: Mobile]] AND [[finished::1]] AND [[walkover::!1]] AND [[walkover::!2]] AND [[opponent1::!Bye]] AND [[opponent2::!Bye]] AND [[opponent1::!TBD]] AND [[opponent2::!TBD]]",
    "date ASC, matchid ASC",
)];

static TETRIS_INPUTS: &[RawInput] = &[main(
    "tetris.jsonl",
    SourceFormat::Match2,
    "date, match2opponents, winner, resulttype, extradata, finished, bestof, match2id, pagename",
    "[[game::classic]] AND [[mode::individual]] AND [[finished::1]] AND [[walkover::!1]] AND [[walkover::!2]]",
    "date ASC, match2id ASC",
)];

static FIGHTING_INPUTS: &[RawInput] = &[main(
    "fighting_games.jsonl",
    SourceFormat::Flat,
    "date, opponent1, opponent2, opponent1score, opponent2score, winner, game, matchid, pagename, objectname, extradata",
    "[[walkover::!1]] AND [[walkover::!2]] AND [[mode::singles]] AND [[opponent1::!Bye]] AND [[opponent2::!Bye]]",
    "date ASC, objectname ASC",
)];

static EAFC_INPUTS: &[RawInput] = &[main(
    "ea_sports_fc.jsonl",
    SourceFormat::Match2,
    "date, match2opponents, winner, resulttype, finished, bestof, match2id, mode, match2games, extradata, pagename",
    NO_WALKOVER,
    "date ASC, match2id ASC",
)];

/* ---------------- fighting game variants ---------------- */

// `SFxT` is deliberately listed for both Street Fighter and Tekken.
static STREET_FIGHTER_VARIANTS: &[&str] = &[
    "hsfii", "SFxT", "sf6", "sfa2", "sfa3", "sfii", "sfiii", "sfiiis", "sfiii3s", "sfiit", "sfiv", "sfv", "sfvce",
    "sfxt", "ssfiit", "ssfiithdr", "ssfiv", "ssfivae", "usfiv", "sfvae",
];

static TEKKEN_VARIANTS: &[&str] = &["t4", "t5", "t5dr", "t6", "t7", "t8", "ttt", "ttt2", "tvc", "SFxT"];

static GUILTY_GEAR_VARIANTS: &[&str] = &[
    "gg", "ggx2r", "GGXrd", "ggst", "ggxrd", "ggxrdr", "ggxrdr2", "ggxx", "ggxxs", "ggxxacp", "ggxxacpr",
];

static KOF_VARIANTS: &[&str] = &[
    "KoFXV", "kof2002", "kof2002um", "kof2003", "kof98", "kof98um", "kofneowave", "kofxiii", "kofxiv", "kofxv",
];
