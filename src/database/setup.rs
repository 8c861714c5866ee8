use rusqlite::Connection;

use crate::errors::Result;

const DROP_SQL: &str = "DROP TABLE IF EXISTS matches; DROP TABLE IF EXISTS players;";

/// Creates any missing tables and indexes. Existing data is left alone.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement).inspect_err(|e| {
            log::error!("Failed to execute schema statement {}: {}", idx + 1, e);
        })?;
    }

    log::debug!("Database schema ensured ({} statements)", statements.len());
    Ok(())
}

/// Drops every table and recreates the schema from scratch.
pub fn reset_database(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    for statement in split_sql_statements(DROP_SQL) {
        execute_sql(&tx, &statement)?;
    }
    ensure_schema(&tx)?;
    tx.commit()?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(strip_comments)
        .filter(|s| !s.is_empty())
        .collect()
}

fn strip_comments(statement: &str) -> String {
    statement
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])?;
    Ok(())
}
