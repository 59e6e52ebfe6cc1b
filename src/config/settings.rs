use serde::{Deserialize, Serialize};

const DEFAULT_DATABASE_PATH: &str = "league.db";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSettings {
    pub starting_rating: f64,
    pub k_factor: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            starting_rating: 1000.0,
            k_factor: 32.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsSettings {
    pub recent_matches: usize,
    pub upsets_shown: usize,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            recent_matches: 10,
            upsets_shown: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub stats: StatsSettings,
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            stats: StatsSettings::default(),
            storage: StorageSettings::default(),
        }
    }

    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.storage.database_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_defaults() {
        let settings = RatingSettings::default();
        assert_eq!(settings.starting_rating, 1000.0);
        assert_eq!(settings.k_factor, 32.0);
    }

    #[test]
    fn test_database_path_override() {
        let config = AppConfig::new().with_database_path(Some("club.db".to_string()));
        assert_eq!(config.storage.database_path, "club.db");

        let kept = AppConfig::new().with_database_path(None);
        assert!(!kept.storage.database_path.is_empty());
    }
}
