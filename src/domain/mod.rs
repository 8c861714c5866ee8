pub mod pairing;
pub mod standings;

pub use pairing::{pair, Pairing};
pub use standings::{swiss_pairings, StandingsProvider};
