//! Adjacent-in-standings pairing for the next Swiss round.
//!
//! Standings arrive ordered by wins descending, so pairing position 0 with 1,
//! 2 with 3 and so on matches players with equal or nearly-equal records.
//! Earlier meetings between two players are not taken into account.

use serde::Serialize;

use crate::database::models::{PlayerId, PlayerRecord};
use crate::errors::{Result, TournamentError};

/// Two players drawn against each other for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub first_player_id: PlayerId,
    pub first_player_name: String,
    pub second_player_id: PlayerId,
    pub second_player_name: String,
}

impl Pairing {
    pub fn between(first: &PlayerRecord, second: &PlayerRecord) -> Self {
        Self {
            first_player_id: first.id,
            first_player_name: first.name.clone(),
            second_player_id: second.id,
            second_player_name: second.name.clone(),
        }
    }

    pub fn player_ids(&self) -> [PlayerId; 2] {
        [self.first_player_id, self.second_player_id]
    }
}

/// Pairs consecutive entries of `standings`.
///
/// Fails with [`TournamentError::OddPlayerCount`] when a player would be left
/// without a partner. An empty snapshot yields no pairings.
pub fn pair(standings: &[PlayerRecord]) -> Result<Vec<Pairing>> {
    if standings.len() % 2 == 1 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let pairings: Vec<Pairing> = standings
        .chunks_exact(2)
        .map(|chunk| Pairing::between(&chunk[0], &chunk[1]))
        .collect();

    log::debug!(
        "Paired {} players into {} pairings",
        standings.len(),
        pairings.len()
    );
    Ok(pairings)
}
