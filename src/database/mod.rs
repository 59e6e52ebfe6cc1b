pub mod connection;
pub mod matches;
pub mod players;
pub mod setup;

use anyhow::Result;
use rusqlite::Connection;

use crate::config::RatingSettings;
use crate::domain::League;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};

pub fn load_league(conn: &Connection, settings: RatingSettings) -> Result<League> {
    let players = players::list_all(conn)?;
    let matches = matches::list_all(conn)?;
    Ok(League::from_parts(settings, players, matches))
}

/// Write the whole league. Call inside a transaction so readers never see
/// half of it.
pub fn save_league(conn: &Connection, league: &League) -> Result<()> {
    players::replace_all(conn, league.players())?;
    matches::replace_all(conn, league.matches())?;
    Ok(())
}
