// src/engine/decompose.rs
//! Team matches → one synthetic row per embedded 1v1 game.
//!
//! A sub-game names its two players either through a `participants` map
//! (keyed `"{opponent}_{player}"`) or through an `opponents` list of two
//! single-player opponents. Games that are not a clean 1v1 are skipped
//! here; games with a missing player or score are kept so that the
//! `bad_team_game` pass can archive them.
use crate::core::sanitize::{in_token_set, non_blank};
use crate::data::{GameOpponent, MatchRow, Participant, SubGame};
use crate::engine::types::{ParticipantField, UnpackRule};

/// Player named by a participant slot, per the rule's field choice.
fn participant_name(p: &Participant, field: ParticipantField) -> Option<&str> {
    match field {
        ParticipantField::Player => non_blank(p.player.as_deref()),
        ParticipantField::Name => non_blank(p.name.as_deref()),
    }
}

/// Roster lookup for a participant key like `"1_3"`: player id `3` of the
/// given opponent.
fn roster_name<'a>(parent: &'a MatchRow, side: usize, key: &str) -> Option<&'a str> {
    let (_, player_id) = key.split_once('_')?;
    parent
        .side(side)?
        .players
        .iter()
        .find(|p| p.id.as_deref() == Some(player_id))
        .and_then(|p| non_blank(p.name.as_deref()))
}

fn pair<T: Copy>(items: &[T]) -> Option<(T, T)> {
    match items {
        [a, b] => Some((*a, *b)),
        _ => None,
    }
}

/// Players and scores of one sub-game, or `None` when it is not a 1v1.
fn one_v_one<'a>(
    parent: &'a MatchRow,
    game: &'a SubGame,
    rule: &UnpackRule,
) -> Option<[(Option<&'a str>, Option<f64>); 2]> {
    if !game.participants.is_empty() {
        if game.participants.len() != 2 {
            return None;
        }
        let (s1, s2) = pair(&game.scores)?;
        let named: Vec<Option<&str>> = game
            .participants
            .iter()
            .enumerate()
            .map(|(side, (key, p))| {
                participant_name(p, rule.participant)
                    .or_else(|| if rule.roster_fallback { roster_name(parent, side, key) } else { None })
            })
            .collect();
        let (n1, n2) = pair(&named)?;
        return Some([(n1, s1), (n2, s2)]);
    }

    let (o1, o2) = match game.opponents.as_slice() {
        [a, b] => (a, b),
        _ => return None,
    };
    let one = |o: &'a GameOpponent| match o.players.as_slice() {
        [p] => Some(participant_name(p, rule.participant)),
        _ => None,
    };
    let (n1, n2) = (one(o1)?, one(o2)?);
    let (s1, s2) = pair(&game.scores).unwrap_or((o1.score, o2.score));
    Some([(n1, s1), (n2, s2)])
}

fn skipped(game: &SubGame, names: &[(Option<&str>, Option<f64>); 2], rule: &UnpackRule) -> bool {
    if game.mode.as_deref().is_some_and(|m| rule.skip_modes.contains(&m)) {
        return true;
    }
    game.participants
        .iter()
        .map(|(_, p)| p.name.as_deref())
        .chain(names.iter().map(|(n, _)| *n))
        .any(|n| in_token_set(n, rule.skip_names))
}

/// Split one team match. Synthetic rows keep the parent's source for the
/// audit trail, are best-of-1, and carry `{match_id}_{index}` ids.
pub fn unpack(parent: &MatchRow, rule: &UnpackRule) -> Vec<MatchRow> {
    if rule.roster_fallback && parent.sides.iter().take(2).any(|s| s.players.is_empty()) {
        return Vec::new();
    }
    let mut out = Vec::new();
    for (idx, game) in parent.games.iter().enumerate() {
        let Some(players) = one_v_one(parent, game, rule) else { continue };
        if skipped(game, &players, rule) {
            continue;
        }
        let [(c1, s1), (c2, s2)] = players;
        out.push(MatchRow {
            source: parent.source.clone(),
            date: parent.date.clone(),
            match_id: parent.match_id.as_ref().map(|id| format!("{id}_{idx}")),
            page: parent.page.clone(),
            winner: None,
            result_type: None,
            best_of: Some(1),
            game: parent.game.clone(),
            mode: game.mode.clone(),
            game_idx: Some(idx),
            competitor_1: c1.map(str::to_string),
            competitor_2: c2.map(str::to_string),
            score_1: s1,
            score_2: s2,
            ..MatchRow::default()
        });
    }
    out
}
