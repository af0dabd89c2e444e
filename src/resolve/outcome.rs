// src/resolve/outcome.rs
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a match from competitor 1's side. Serialized as `1.0`, `0.0`
/// or `0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    pub fn value(self) -> f64 {
        match self {
            Outcome::Loss => 0.0,
            Outcome::Draw => 0.5,
            Outcome::Win => 1.0,
        }
    }

    /// Same match seen from competitor 2.
    pub fn flip(self) -> Self {
        match self {
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Loss,
        }
    }
}

impl From<Outcome> for f64 {
    fn from(o: Outcome) -> f64 {
        o.value()
    }
}

#[derive(Debug, Error)]
#[error("not an outcome value: {0}")]
pub struct InvalidOutcome(pub f64);

impl TryFrom<f64> for Outcome {
    type Error = InvalidOutcome;
    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if v == 1.0 {
            Ok(Outcome::Win)
        } else if v == 0.0 {
            Ok(Outcome::Loss)
        } else if v == 0.5 {
            Ok(Outcome::Draw)
        } else {
            Err(InvalidOutcome(v))
        }
    }
}

/// When a winner indicator of `'0'` counts as a draw. Sources disagree, so
/// each game keeps its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawRule {
    /// `'0'` is always a draw.
    Unconditional,
    /// `'0'` is a draw only when `resulttype == "draw"`.
    RequiresResultType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinnerRule {
    /// Scores only; the winner field is ignored.
    None,
    /// `'1'`/`'2'`/`'0'` indicator.
    Indexed(DrawRule),
    /// The winner field holds the winning opponent's name.
    Named,
}

/// How a pipeline turns a row into an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeRule {
    pub winner: WinnerRule,
    /// Fall back to comparing scores when the winner field does not decide.
    pub score_fallback: bool,
}

impl OutcomeRule {
    pub const SCORES_ONLY: OutcomeRule = OutcomeRule { winner: WinnerRule::None, score_fallback: true };

    pub const fn winner(draw: DrawRule) -> Self {
        OutcomeRule { winner: WinnerRule::Indexed(draw), score_fallback: false }
    }

    pub const fn winner_then_scores(draw: DrawRule) -> Self {
        OutcomeRule { winner: WinnerRule::Indexed(draw), score_fallback: true }
    }

    pub const NAMED_WINNER: OutcomeRule = OutcomeRule { winner: WinnerRule::Named, score_fallback: false };
}

/// Strict comparison resolves win/loss; equal non-null scores are a draw.
pub fn from_scores(s1: Option<f64>, s2: Option<f64>) -> Option<Outcome> {
    let (a, b) = (s1?, s2?);
    match a.partial_cmp(&b)? {
        Ordering::Greater => Some(Outcome::Win),
        Ordering::Less => Some(Outcome::Loss),
        Ordering::Equal => Some(Outcome::Draw),
    }
}

pub fn from_winner(winner: Option<&str>, result_type: Option<&str>, rule: DrawRule) -> Option<Outcome> {
    match winner?.trim() {
        "1" => Some(Outcome::Win),
        "2" => Some(Outcome::Loss),
        "0" => match rule {
            DrawRule::Unconditional => Some(Outcome::Draw),
            DrawRule::RequiresResultType if result_type == Some("draw") => Some(Outcome::Draw),
            DrawRule::RequiresResultType => None,
        },
        _ => None,
    }
}

/// Winner field names the winning side directly.
pub fn from_named_winner(winner: Option<&str>, name_1: Option<&str>, name_2: Option<&str>) -> Option<Outcome> {
    let w = winner?;
    if name_1 == Some(w) {
        Some(Outcome::Win)
    } else if name_2 == Some(w) {
        Some(Outcome::Loss)
    } else {
        None
    }
}

/// Inputs the resolver looks at, borrowed from a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomeInputs<'a> {
    pub winner: Option<&'a str>,
    pub result_type: Option<&'a str>,
    pub name_1: Option<&'a str>,
    pub name_2: Option<&'a str>,
    pub score_outcome: Option<Outcome>,
}

/// An explicit winner field takes priority; scores only decide when the
/// winner does not.
pub fn resolve(rule: OutcomeRule, inputs: OutcomeInputs<'_>) -> Option<Outcome> {
    let by_winner = match rule.winner {
        WinnerRule::None => None,
        WinnerRule::Indexed(draw) => from_winner(inputs.winner, inputs.result_type, draw),
        WinnerRule::Named => from_named_winner(inputs.winner, inputs.name_1, inputs.name_2),
    };
    match by_winner {
        Some(o) => Some(o),
        None if rule.score_fallback => inputs.score_outcome,
        None => None,
    }
}
