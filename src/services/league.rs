use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::TransactionBehavior;

use crate::config::{AppConfig, RatingSettings};
use crate::database::{self, DbPool};
use crate::domain::League;
use crate::errors::{storage_context, LeagueError};

/// Owns the store and runs every mutation as load, mutate, save inside one
/// exclusive transaction.
pub struct LeagueService {
    pool: DbPool,
    settings: RatingSettings,
}

impl LeagueService {
    pub fn open(config: &AppConfig) -> Result<Self> {
        let path = &config.storage.database_path;
        let pool = database::create_pool(path).with_context(|| storage_context("open", path))?;
        info!("Using league database {}", path);
        Self::with_pool(pool, config.rating)
    }

    pub fn with_pool(pool: DbPool, settings: RatingSettings) -> Result<Self> {
        let conn = database::get_connection(&pool)?;
        database::setup::ensure_schema(&conn)?;
        Ok(Self { pool, settings })
    }

    /// Current league state.
    pub fn load(&self) -> Result<League> {
        let conn = database::get_connection(&self.pool)?;
        database::load_league(&conn, self.settings)
    }

    /// Apply `change` to a freshly loaded league and persist the result.
    /// A rejected change rolls back and leaves the store untouched.
    pub fn mutate<T>(&self, change: impl FnOnce(&mut League) -> Result<T, LeagueError>) -> Result<T> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to lock league for update")?;

        let mut league = database::load_league(&tx, self.settings)?;
        let outcome = change(&mut league)?;

        database::save_league(&tx, &league)?;
        tx.commit().context("Failed to commit league update")?;

        debug!(
            "Saved league with {} players and {} matches",
            league.players().len(),
            league.matches().len()
        );
        Ok(outcome)
    }

    /// Replace the stored league wholesale.
    pub fn replace(&self, league: &League) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to lock league for import")?;

        database::save_league(&tx, league)?;
        tx.commit().context("Failed to commit imported league")?;
        Ok(())
    }
}
