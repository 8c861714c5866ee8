use crate::database::models::PlayerId;

pub type Result<T> = std::result::Result<T, TournamentError>;

#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    /// The backing store could not be reached (pool creation or checkout)
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] r2d2::Error),

    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// Adjacent pairing needs an even number of players
    #[error("cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// A match report that would break the match table's invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("player {0} is not registered")]
    UnknownPlayer(PlayerId),

    #[error("player {0} cannot play against themself")]
    SelfMatch(PlayerId),
}

impl TournamentError {
    pub fn is_integrity(&self) -> bool {
        matches!(self, TournamentError::Integrity(_))
    }
}
