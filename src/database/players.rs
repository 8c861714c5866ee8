use rusqlite::{Connection, OptionalExtension, params};

use super::models::{PlayerId, PlayerRecord};
use crate::errors::Result;

const PLAYER_COLUMNS: &str = "id, name, wins, matches";

pub fn insert_player(conn: &Connection, name: &str) -> Result<PlayerRecord> {
    let sql = format!("INSERT INTO players (name, wins, matches) VALUES (?1, 0, 0) RETURNING {PLAYER_COLUMNS}");

    let player = conn.query_row(&sql, params![name], parse_player_row)?;
    Ok(player)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerRecord> {
    Ok(PlayerRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches_played: row.get(3)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> Result<Option<PlayerRecord>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1");

    let player = conn.query_row(&sql, params![id], parse_player_row).optional()?;
    Ok(player)
}

/// Players by wins descending; equal records keep registration (id) order.
pub fn list_standings(conn: &Connection) -> Result<Vec<PlayerRecord>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY wins DESC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_all(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
    Ok(count as usize)
}

pub fn record_win(conn: &Connection, id: PlayerId) -> Result<()> {
    conn.execute(
        "UPDATE players SET wins = wins + 1, matches = matches + 1 WHERE id = ?1",
        params![id],
    )?;
    Ok(())
}

pub fn record_loss(conn: &Connection, id: PlayerId) -> Result<()> {
    conn.execute("UPDATE players SET matches = matches + 1 WHERE id = ?1", params![id])?;
    Ok(())
}

pub fn reset_records(conn: &Connection) -> Result<usize> {
    let updated = conn.execute("UPDATE players SET wins = 0, matches = 0", [])?;
    Ok(updated)
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    let deleted = conn.execute("DELETE FROM players", [])?;
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::ensure_schema;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_player_starts_with_empty_record() {
        let conn = test_conn();

        let player = insert_player(&conn, "Ann").unwrap();

        assert_eq!(player.name, "Ann");
        assert_eq!(player.wins, 0);
        assert_eq!(player.matches_played, 0);
        assert_eq!(find_by_id(&conn, player.id).unwrap(), Some(player));
    }

    #[test]
    fn test_find_missing_player() {
        let conn = test_conn();

        assert_eq!(find_by_id(&conn, 42).unwrap(), None);
    }

    #[test]
    fn test_duplicate_names_get_distinct_ids() {
        let conn = test_conn();

        let first = insert_player(&conn, "Sam").unwrap();
        let second = insert_player(&conn, "Sam").unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(count_all(&conn).unwrap(), 2);
    }

    #[test]
    fn test_standings_order_by_wins_then_id() {
        let conn = test_conn();
        let a = insert_player(&conn, "A").unwrap();
        let b = insert_player(&conn, "B").unwrap();
        let c = insert_player(&conn, "C").unwrap();

        record_win(&conn, c.id).unwrap();
        record_loss(&conn, a.id).unwrap();

        let ids: Vec<PlayerId> = list_standings(&conn).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![c.id, a.id, b.id]);
    }

    #[test]
    fn test_reset_and_delete() {
        let conn = test_conn();
        let a = insert_player(&conn, "A").unwrap();
        record_win(&conn, a.id).unwrap();

        assert_eq!(reset_records(&conn).unwrap(), 1);
        let a = find_by_id(&conn, a.id).unwrap().unwrap();
        assert_eq!((a.wins, a.matches_played), (0, 0));

        assert_eq!(delete_all(&conn).unwrap(), 1);
        assert_eq!(count_all(&conn).unwrap(), 0);
    }
}
