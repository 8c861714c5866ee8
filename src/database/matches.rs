use rusqlite::{Connection, params};

use super::models::{MatchRecord, PlayerId, canonical_pair};
use crate::errors::Result;

const MATCH_COLUMNS: &str = "id, player_low_id, player_high_id, winner_id, recorded_at";

/// Stores one result. Callers are responsible for validating the ids first.
pub fn insert_match(conn: &Connection, winner_id: PlayerId, loser_id: PlayerId) -> Result<MatchRecord> {
    let (low, high) = canonical_pair(winner_id, loser_id);
    let sql = format!(
        "INSERT INTO matches (player_low_id, player_high_id, winner_id) VALUES (?1, ?2, ?3) RETURNING {MATCH_COLUMNS}"
    );

    let record = conn.query_row(&sql, params![low, high, winner_id], parse_match_row)?;
    Ok(record)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRecord> {
    Ok(MatchRecord {
        id: row.get(0)?,
        player_low_id: row.get(1)?,
        player_high_id: row.get(2)?,
        winner_id: row.get(3)?,
        recorded_at: row.get(4)?,
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<MatchRecord>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches ORDER BY id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_between(conn: &Connection, a: PlayerId, b: PlayerId) -> Result<Vec<MatchRecord>> {
    let (low, high) = canonical_pair(a, b);
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE player_low_id = ?1 AND player_high_id = ?2 ORDER BY id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![low, high], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    let deleted = conn.execute("DELETE FROM matches", [])?;
    Ok(deleted)
}
