use log::info;
use rusqlite::TransactionBehavior;

use crate::config::AppConfig;
use crate::database::{self, matches, players, setup, DbConn, DbPool};
use crate::database::models::{MatchRecord, PlayerId, PlayerRecord};
use crate::domain::standings::{self, StandingsProvider};
use crate::domain::Pairing;
use crate::errors::{IntegrityError, Result};

/// Player registration, match reporting and pairing on top of one database.
///
/// Create it once at startup and share it; every operation checks a connection
/// out of the pool and returns it when the operation ends.
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.database)?;
        let conn = database::get_connection(&pool)?;
        setup::ensure_schema(&conn)?;
        drop(conn);

        info!("Opened tournament database: {}", config.database.path);
        Ok(Self { pool })
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }

    /// Removes every match and resets all players to zero wins and matches.
    pub fn delete_matches(&self) -> Result<()> {
        let mut conn = self.connection()?;
        let tx = conn.transaction()?;

        let removed = matches::delete_all(&tx)?;
        players::reset_records(&tx)?;
        tx.commit()?;

        info!("Deleted {} matches and reset player records", removed);
        Ok(())
    }

    pub fn delete_players(&self) -> Result<()> {
        let conn = self.connection()?;
        let removed = players::delete_all(&conn)?;

        info!("Deleted {} players", removed);
        Ok(())
    }

    pub fn count_players(&self) -> Result<usize> {
        let conn = self.connection()?;
        players::count_all(&conn)
    }

    pub fn register_player(&self, name: &str) -> Result<PlayerId> {
        let conn = self.connection()?;
        let player = players::insert_player(&conn, name)?;

        info!("Registered player {} ({})", player.name, player.id);
        Ok(player.id)
    }

    pub fn player_standings(&self) -> Result<Vec<PlayerRecord>> {
        let conn = self.connection()?;
        players::list_standings(&conn)
    }

    /// Records one result in a single transaction.
    ///
    /// Both players must exist and differ; nothing is written otherwise.
    pub fn report_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<MatchRecord> {
        if winner_id == loser_id {
            return Err(IntegrityError::SelfMatch(winner_id).into());
        }

        let mut conn = self.connection()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        for id in [winner_id, loser_id] {
            if players::find_by_id(&tx, id)?.is_none() {
                return Err(IntegrityError::UnknownPlayer(id).into());
            }
        }

        let record = matches::insert_match(&tx, winner_id, loser_id)?;
        players::record_win(&tx, winner_id)?;
        players::record_loss(&tx, loser_id)?;
        tx.commit()?;

        info!("Recorded match {}: {} beat {}", record.id, winner_id, loser_id);
        Ok(record)
    }

    pub fn matches(&self) -> Result<Vec<MatchRecord>> {
        let conn = self.connection()?;
        matches::list_all(&conn)
    }

    /// Every match the two players have played against each other, oldest first.
    pub fn matches_between(&self, a: PlayerId, b: PlayerId) -> Result<Vec<MatchRecord>> {
        let conn = self.connection()?;
        matches::list_between(&conn, a, b)
    }

    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        standings::swiss_pairings(self)
    }

    /// Drops and recreates all tables.
    pub fn reset_schema(&self) -> Result<()> {
        let mut conn = self.connection()?;
        setup::reset_database(&mut conn)
    }

    pub fn close(self) {
        let state = self.pool.state();
        info!("Closing tournament database ({} connections)", state.connections);
    }
}

impl StandingsProvider for TournamentService {
    fn standings(&self) -> Result<Vec<PlayerRecord>> {
        self.player_standings()
    }
}
