use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::Match;

const COLUMNS: &str = "id, player1, player2, score1, score2, winner, elo_before1, elo_before2, elo_after1, elo_after2, elo_change1, elo_change2, played_at";

/// Ledger in stored order.
pub fn list_all(conn: &Connection) -> Result<Vec<Match>> {
    let sql = format!("SELECT {} FROM matches ORDER BY position", COLUMNS);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list matches")?;

    Ok(rows)
}

pub fn replace_all(conn: &Connection, matches: &[Match]) -> Result<()> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to clear matches")?;

    let sql = format!(
        "INSERT INTO matches (position, {}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;

    for (position, record) in matches.iter().enumerate() {
        stmt.execute(params![
            position as i64,
            record.id as i64,
            record.player1,
            record.player2,
            record.score1,
            record.score2,
            record.winner,
            record.elo_before1,
            record.elo_before2,
            record.elo_after1,
            record.elo_after2,
            record.elo_change1,
            record.elo_change2,
            record.played_at
        ])
        .with_context(|| format!("Failed to insert match #{}", record.id))?;
    }

    Ok(())
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    let id: i64 = row.get(0)?;
    Ok(Match {
        id: id as u64,
        player1: row.get(1)?,
        player2: row.get(2)?,
        score1: row.get(3)?,
        score2: row.get(4)?,
        winner: row.get(5)?,
        elo_before1: row.get(6)?,
        elo_before2: row.get(7)?,
        elo_after1: row.get(8)?,
        elo_after2: row.get(9)?,
        elo_change1: row.get(10)?,
        elo_change2: row.get(11)?,
        played_at: row.get(12)?,
    })
}
