use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::Player;

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = "SELECT name, rating, wins, losses FROM players ORDER BY position";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;

    Ok(rows)
}

/// Overwrite the roster, keeping the slice order.
pub fn replace_all(conn: &Connection, players: &[Player]) -> Result<()> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to clear players")?;

    let sql = "INSERT INTO players (name, position, rating, wins, losses) VALUES (?1, ?2, ?3, ?4, ?5)";
    let mut stmt = conn.prepare(sql)?;

    for (position, player) in players.iter().enumerate() {
        stmt.execute(params![
            player.name,
            position as i64,
            player.rating,
            player.wins,
            player.losses
        ])
        .with_context(|| format!("Failed to insert player {}", player.name))?;
    }

    Ok(())
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        name: row.get(0)?,
        rating: row.get(1)?,
        wins: row.get(2)?,
        losses: row.get(3)?,
    })
}
