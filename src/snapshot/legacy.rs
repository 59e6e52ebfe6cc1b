//! The older `data.json` layout: players keyed by name with their Elo
//! and record, and an optional list of matches carrying only the Elo
//! changes.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::warn_on_divergence;
use crate::config::RatingSettings;
use crate::domain::{League, Match, Player, Replay, ReplayStep};

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyPlayer {
    pub elo: f64,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyMatch {
    pub player1: String,
    pub player2: String,
    pub score1: u32,
    pub score2: u32,
    pub winner: String,
    pub elo_change1: i32,
    pub elo_change2: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyDocument {
    // Name order; the legacy file does not keep a usable roster order.
    pub players: BTreeMap<String, LegacyPlayer>,
    #[serde(default)]
    pub matches: Vec<LegacyMatch>,
}

impl LegacyDocument {
    /// Convert to a league. Matches get dense ids in file order and their
    /// before/after ratings from a replay; the recorded changes are kept.
    /// The roster is rebuilt from the ledger.
    pub fn into_league(self, settings: RatingSettings, imported_at: NaiveDateTime) -> League {
        let mut matches: Vec<Match> = self
            .matches
            .into_iter()
            .enumerate()
            .map(|(idx, m)| convert_match(idx as u64 + 1, m, imported_at))
            .collect();

        let steps: Vec<ReplayStep> = {
            let mut state = Replay::new(settings);
            matches.iter().map(|m| state.apply(m)).collect()
        };
        for (record, step) in matches.iter_mut().zip(steps) {
            (record.elo_before1, record.elo_before2) = step.before;
            (record.elo_after1, record.elo_after2) = step.after;
        }

        let stored: Vec<Player> = self
            .players
            .into_iter()
            .map(|(name, p)| Player {
                name,
                rating: p.elo,
                wins: p.wins,
                losses: p.losses,
            })
            .collect();

        let mut league = League::from_parts(settings, stored.clone(), matches);
        league.rebuild();
        warn_on_divergence(&stored, &league, "Legacy");

        league
    }
}

fn convert_match(id: u64, m: LegacyMatch, played_at: NaiveDateTime) -> Match {
    Match {
        id,
        player1: m.player1,
        player2: m.player2,
        score1: m.score1,
        score2: m.score2,
        winner: m.winner,
        elo_before1: 0.0,
        elo_before2: 0.0,
        elo_after1: 0.0,
        elo_after2: 0.0,
        elo_change1: m.elo_change1,
        elo_change2: m.elo_change2,
        played_at,
    }
}
