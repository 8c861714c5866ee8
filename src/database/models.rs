use chrono::NaiveDateTime;
use serde::Serialize;

pub type PlayerId = i64;
pub type MatchId = i64;

/// A registered player with their running record.
///
/// `wins <= matches_played` always holds for rows read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl PlayerRecord {
    pub fn new(id: PlayerId, name: &str, wins: u32, matches_played: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            wins,
            matches_played,
        }
    }

    pub fn losses(&self) -> u32 {
        self.matches_played - self.wins
    }
}

/// One reported result. The pair is kept in canonical low/high order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub player_low_id: PlayerId,
    pub player_high_id: PlayerId,
    pub winner_id: PlayerId,
    pub recorded_at: NaiveDateTime,
}

impl MatchRecord {
    pub fn loser_id(&self) -> PlayerId {
        if self.winner_id == self.player_low_id {
            self.player_high_id
        } else {
            self.player_low_id
        }
    }

    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player_low_id == player_id || self.player_high_id == player_id
    }
}

/// Orders two distinct ids as `(low, high)`.
pub fn canonical_pair(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a < b { (a, b) } else { (b, a) }
}
