//! Forward replay of a ledger from the starting state.

use std::collections::HashMap;

use log::debug;

use super::models::{Match, Player};
use crate::config::RatingSettings;
use crate::rating::{update_ratings, Outcome, RatingValue};

#[derive(Debug, Clone, Copy)]
struct Standing {
    rating: RatingValue,
    wins: u32,
    losses: u32,
}

/// Rounded ratings around one replayed match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayStep {
    pub before: (RatingValue, RatingValue),
    pub after: (RatingValue, RatingValue),
}

/// Running standings keyed by player name.
///
/// Every name that appears in the ledger gets a standing, including players
/// no longer on the roster, so the remaining opponents are rated against
/// the same history that was reported.
pub struct Replay<'a> {
    settings: RatingSettings,
    standings: HashMap<&'a str, Standing>,
}

impl<'a> Replay<'a> {
    pub fn new(settings: RatingSettings) -> Self {
        Self {
            settings,
            standings: HashMap::new(),
        }
    }

    /// Apply one match using its stored winner.
    pub fn apply(&mut self, record: &'a Match) -> ReplayStep {
        let before1 = self.standing(&record.player1).rating;
        let before2 = self.standing(&record.player2).rating;
        let outcome = record.first_outcome();

        let updated = update_ratings(before1, before2, outcome, self.settings.k_factor);
        let (after1, after2) = updated.rounded();

        self.update(&record.player1, |s| {
            s.rating = after1;
            match outcome {
                Outcome::Win => s.wins += 1,
                Outcome::Loss => s.losses += 1,
            }
        });
        self.update(&record.player2, |s| {
            s.rating = after2;
            match outcome {
                Outcome::Win => s.losses += 1,
                Outcome::Loss => s.wins += 1,
            }
        });

        ReplayStep {
            before: (before1, before2),
            after: (after1, after2),
        }
    }

    /// Write the replayed standings onto the roster. Players without
    /// matches end up at the starting state.
    pub fn write_to(&self, players: &mut [Player]) {
        for player in players.iter_mut() {
            player.reset(self.settings.starting_rating);
            if let Some(standing) = self.standings.get(player.name.as_str()) {
                player.rating = standing.rating;
                player.wins = standing.wins;
                player.losses = standing.losses;
            }
        }
    }

    fn standing(&self, name: &str) -> Standing {
        self.standings.get(name).copied().unwrap_or(Standing {
            rating: self.settings.starting_rating,
            wins: 0,
            losses: 0,
        })
    }

    fn update(&mut self, name: &'a str, apply: impl FnOnce(&mut Standing)) {
        let starting = self.settings.starting_rating;
        let standing = self.standings.entry(name).or_insert(Standing {
            rating: starting,
            wins: 0,
            losses: 0,
        });
        apply(standing);
    }
}

/// Reset the roster and re-derive ratings and records from `matches`, in
/// stored order. Match records themselves are not touched.
pub fn replay(players: &mut [Player], matches: &[Match], settings: RatingSettings) {
    let mut state = Replay::new(settings);
    for record in matches {
        state.apply(record);
    }
    state.write_to(players);

    debug!(
        "Replayed {} matches onto {} players",
        matches.len(),
        players.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: u64, p1: &str, p2: &str, winner: &str) -> Match {
        let played_at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        Match {
            id,
            player1: p1.to_string(),
            player2: p2.to_string(),
            score1: if winner == p1 { 11 } else { 4 },
            score2: if winner == p2 { 11 } else { 4 },
            winner: winner.to_string(),
            elo_before1: 0.0,
            elo_before2: 0.0,
            elo_after1: 0.0,
            elo_after2: 0.0,
            elo_change1: 0,
            elo_change2: 0,
            played_at,
        }
    }

    fn roster(names: &[&str]) -> Vec<Player> {
        names.iter().map(|n| Player::new(n, 1000.0)).collect()
    }

    #[test]
    fn test_replay_of_empty_ledger_resets() {
        let mut players = roster(&["A", "B"]);
        players[0].rating = 1111.0;
        players[0].wins = 4;

        replay(&mut players, &[], RatingSettings::default());

        assert!(players.iter().all(|p| p.rating == 1000.0 && p.games_played() == 0));
    }

    #[test]
    fn test_replay_uses_stored_winner() {
        let mut players = roster(&["A", "B"]);
        let mut m = record(1, "A", "B", "B");
        // scores disagree with the winner field; the winner field decides
        m.score1 = 11;
        m.score2 = 2;

        replay(&mut players, &[m], RatingSettings::default());

        assert_eq!(players[0].rating, 984.0);
        assert_eq!(players[1].rating, 1016.0);
        assert_eq!(players[1].wins, 1);
        assert_eq!(players[0].losses, 1);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let matches = vec![
            record(1, "A", "B", "A"),
            record(2, "B", "C", "C"),
            record(3, "C", "A", "C"),
            record(4, "A", "B", "B"),
        ];

        let mut first = roster(&["A", "B", "C"]);
        let mut second = roster(&["A", "B", "C"]);
        replay(&mut first, &matches, RatingSettings::default());
        replay(&mut second, &matches, RatingSettings::default());

        assert_eq!(first, second);
    }

    #[test]
    fn test_unrostered_players_still_rate_opponents() {
        let matches = vec![record(1, "A", "Gone", "A"), record(2, "Gone", "A", "A")];
        let mut players = roster(&["A"]);

        replay(&mut players, &matches, RatingSettings::default());

        assert_eq!(players[0].wins, 2);
        assert_eq!(players[0].rating, 1031.0);
    }

    #[test]
    fn test_steps_report_before_and_after() {
        let matches = [record(1, "A", "B", "A"), record(2, "A", "B", "A")];
        let mut state = Replay::new(RatingSettings::default());

        let first = state.apply(&matches[0]);
        let second = state.apply(&matches[1]);

        assert_eq!(first.before, (1000.0, 1000.0));
        assert_eq!(first.after, (1016.0, 984.0));
        assert_eq!(second.before, first.after);
    }
}
