use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::legacy::LegacyDocument;
use super::warn_on_divergence;
use crate::config::RatingSettings;
use crate::domain::{League, Match, Player};
use crate::errors::{with_parse_context, with_storage_context, SnapshotError};

/// Serialized form of a league: roster in insertion order, ledger in stored
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
}

impl LeagueSnapshot {
    pub fn of(league: &League) -> Self {
        Self {
            players: league.players().to_vec(),
            matches: league.matches().to_vec(),
        }
    }

    /// Convert to a league whose roster is rebuilt from the ledger. Stored
    /// player records that disagree with the history are logged and
    /// replaced.
    pub fn into_league(self, settings: RatingSettings) -> Result<League, SnapshotError> {
        let mut names = HashSet::new();
        if let Some(dup) = self.players.iter().find(|p| !names.insert(p.name.as_str())) {
            return Err(SnapshotError::DuplicatePlayer(dup.name.clone()));
        }
        let mut ids = HashSet::new();
        if let Some(dup) = self.matches.iter().find(|m| !ids.insert(m.id)) {
            return Err(SnapshotError::DuplicateMatch(dup.id));
        }

        let stored = self.players.clone();
        let mut league = League::from_parts(settings, self.players, self.matches);
        league.rebuild();
        warn_on_divergence(&stored, &league, "Snapshot");

        Ok(league)
    }
}

/// A league stored as one JSON document on disk.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Save the league as a snapshot document
    pub fn save(&self, league: &League) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create snapshot directory")?;
        }

        let json = serde_json::to_string_pretty(&LeagueSnapshot::of(league))
            .context("Failed to serialize league")?;
        with_storage_context(fs::write(&self.path, json), "write", &self.display())?;

        info!("Saved league snapshot to {}", self.path.display());
        Ok(())
    }

    /// Load a snapshot document, or a legacy `data.json` document
    pub fn load(&self, settings: RatingSettings) -> Result<League> {
        self.load_at(settings, Utc::now().naive_utc())
    }

    /// Like `load`; legacy matches are stamped with `imported_at`.
    pub fn load_at(&self, settings: RatingSettings, imported_at: NaiveDateTime) -> Result<League> {
        let json = with_storage_context(fs::read_to_string(&self.path), "read", &self.display())?;
        let value: Value = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                self.path,
                json.chars().take(200).collect::<String>()
            )
        })?;

        let league = if is_legacy(&value) {
            let document: LegacyDocument =
                with_parse_context(serde_json::from_value(value), "legacy league document")?;
            info!("Converting legacy league document {}", self.path.display());
            document.into_league(settings, imported_at)
        } else {
            let snapshot: LeagueSnapshot =
                with_parse_context(serde_json::from_value(value), "league snapshot")?;
            snapshot
                .into_league(settings)
                .with_context(|| format!("Refusing league snapshot {}", self.path.display()))?
        };

        info!(
            "Loaded {} players and {} matches from {}",
            league.players().len(),
            league.matches().len(),
            self.path.display()
        );
        Ok(league)
    }
}

// The legacy layout keys players by name; snapshots list them.
fn is_legacy(value: &Value) -> bool {
    value.get("players").is_some_and(Value::is_object)
}
