// src/engine/types.rs
use crate::config::games::GameConfig;
use crate::data::MatchRow;

pub type Predicate = Box<dyn Fn(&MatchRow) -> bool + Send + Sync>;
pub type Derivation = Box<dyn Fn(&mut MatchRow) + Send + Sync>;

/* Rejection pass */
pub struct Check {
    pub label: &'static str,
    pub test: Predicate,
    /// Source fields left out of the audit lines.
    pub drop_cols: &'static [&'static str],
}

/* Named derivation hook */
pub struct Hook {
    pub name: &'static str,
    pub apply: Derivation,
}

pub enum Step {
    Reject(Check),
    Derive(Hook),
    /// Move matching rows into the team batch for decomposition.
    Divert { name: &'static str, test: Predicate },
}

impl Step {
    pub fn reject<F>(label: &'static str, test: F) -> Self
    where
        F: Fn(&MatchRow) -> bool + Send + Sync + 'static,
    {
        Step::Reject(Check { label, test: Box::new(test), drop_cols: &[] })
    }

    pub fn reject_dropping<F>(label: &'static str, drop_cols: &'static [&'static str], test: F) -> Self
    where
        F: Fn(&MatchRow) -> bool + Send + Sync + 'static,
    {
        Step::Reject(Check { label, test: Box::new(test), drop_cols })
    }

    pub fn derive<F>(name: &'static str, apply: F) -> Self
    where
        F: Fn(&mut MatchRow) + Send + Sync + 'static,
    {
        Step::Derive(Hook { name, apply: Box::new(apply) })
    }

    pub fn divert<F>(name: &'static str, test: F) -> Self
    where
        F: Fn(&MatchRow) -> bool + Send + Sync + 'static,
    {
        Step::Divert { name, test: Box::new(test) }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Step::Reject(c) => c.label,
            Step::Derive(h) => h.name,
            Step::Divert { name, .. } => *name,
        }
    }
}

/// Which participant field names the player in an embedded game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantField {
    /// Player page name.
    Player,
    /// Display name, with the opponent roster as fallback.
    Name,
}

/// How a team match is split into individual games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpackRule {
    pub participant: ParticipantField,
    /// Fill a blank participant name from the opponent's `match2players`.
    pub roster_fallback: bool,
    pub skip_modes: &'static [&'static str],
    /// Games with a participant named like this (case-insensitive) are skipped.
    pub skip_names: &'static [&'static str],
}

pub struct TeamSpec {
    /// Passes over team-level rows before decomposition.
    pub before: Vec<Step>,
    pub unpack: UnpackRule,
    /// Passes over the decomposed game rows.
    pub after: Vec<Step>,
}

/// A game's pipeline, as data.
pub struct GameSpec {
    pub config: GameConfig,
    /// Passes over the main batch, in order.
    pub main: Vec<Step>,
    /// Hybrid games only.
    pub team: Option<TeamSpec>,
    /// Passes over the union of main and decomposed rows.
    pub after_merge: Vec<Step>,
}

impl GameSpec {
    pub fn new(config: GameConfig, main: Vec<Step>) -> Self {
        Self { config, main, team: None, after_merge: Vec::new() }
    }

    pub fn with_team(mut self, team: TeamSpec) -> Self {
        self.team = Some(team);
        self
    }

    pub fn then(mut self, after_merge: Vec<Step>) -> Self {
        self.after_merge = after_merge;
        self
    }

    /// Step names in run order, for logs and tests.
    pub fn step_names(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = self.main.iter().map(Step::name).collect();
        if let Some(team) = &self.team {
            out.extend(team.before.iter().map(Step::name));
            out.push("decompose");
            out.extend(team.after.iter().map(Step::name));
        }
        out.extend(self.after_merge.iter().map(Step::name));
        out
    }
}
