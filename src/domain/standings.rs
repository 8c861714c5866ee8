use crate::database::models::PlayerRecord;
use crate::errors::Result;

use super::pairing::{self, Pairing};

/// Source of the current standings: players ordered by wins, most first.
///
/// Players with equal wins come back in a stable order for the duration of a
/// single call. Implementations are read-only.
pub trait StandingsProvider {
    fn standings(&self) -> Result<Vec<PlayerRecord>>;
}

/// An in-memory snapshot. Sorting is stable, so ties keep their given order.
impl StandingsProvider for Vec<PlayerRecord> {
    fn standings(&self) -> Result<Vec<PlayerRecord>> {
        let mut sorted = self.clone();
        sorted.sort_by(|a, b| b.wins.cmp(&a.wins));
        Ok(sorted)
    }
}

/// Fetches a standings snapshot and pairs it. Provider errors propagate unchanged.
pub fn swiss_pairings<P: StandingsProvider + ?Sized>(provider: &P) -> Result<Vec<Pairing>> {
    let standings = provider.standings()?;
    pairing::pair(&standings)
}
