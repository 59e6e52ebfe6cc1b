use anyhow::Context as _;
use thiserror::Error;

use crate::domain::MatchId;

/// Why the league refused a mutation. The league is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("{0} cannot play against themselves")]
    SamePlayer(String),

    #[error("tied score {0}-{0} is not recorded")]
    TiedScore(u32),

    #[error("match #{0} not found")]
    UnknownMatch(MatchId),
}

/// Why a league document was refused on import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("player {0} is listed more than once")]
    DuplicatePlayer(String),

    #[error("match id #{0} is used more than once")]
    DuplicateMatch(MatchId),
}

impl LeagueError {
    pub fn is_invalid_participants(&self) -> bool {
        matches!(self, LeagueError::UnknownPlayer(_) | LeagueError::SamePlayer(_))
    }
}

/// Add context to storage errors
pub fn storage_context(operation: &str, path: &str) -> String {
    format!("Failed to {} league at: {}", operation, path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with storage context
pub fn with_storage_context<T, E>(
    result: Result<T, E>,
    operation: &str,
    path: &str,
) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| storage_context(operation, path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| parse_context(data_type))
}
