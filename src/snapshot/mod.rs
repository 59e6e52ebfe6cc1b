//! Whole-league JSON files for export, backup and migration.

pub mod file;
pub mod legacy;

pub use file::{LeagueSnapshot, SnapshotFile};
pub use legacy::LegacyDocument;

use log::warn;

use crate::domain::{League, Player};

/// Log every stored player record that the rebuilt `league` disagrees with.
/// Returns how many differed.
pub(crate) fn warn_on_divergence(stored: &[Player], league: &League, source: &str) -> usize {
    let mut differing = 0;
    for before in stored {
        let Some(after) = league.player(&before.name) else {
            continue;
        };
        if before != after {
            differing += 1;
            warn!(
                "{} record for {} ({} {}-{}) differs from its match history ({} {}-{})",
                source,
                before.name,
                before.rating,
                before.wins,
                before.losses,
                after.rating,
                after.wins,
                after.losses
            );
        }
    }
    differing
}
