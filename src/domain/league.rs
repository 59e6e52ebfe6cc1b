//! The roster and the match ledger as one value.
//!
//! The ledger is the source of truth. Reporting appends and updates the two
//! participants incrementally; deleting rebuilds the whole roster from the
//! surviving matches.

use chrono::{NaiveDateTime, Utc};
use log::debug;

use super::models::{Match, MatchId, Player};
use super::replay::replay;
use crate::config::RatingSettings;
use crate::errors::LeagueError;
use crate::rating::{update_ratings, Outcome};

#[derive(Debug, Clone, PartialEq)]
pub struct League {
    settings: RatingSettings,
    players: Vec<Player>,
    matches: Vec<Match>,
}

impl Default for League {
    fn default() -> Self {
        Self::new(RatingSettings::default())
    }
}

impl League {
    pub fn new(settings: RatingSettings) -> Self {
        Self {
            settings,
            players: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Rebuild a league from stored state. Players are kept in the given
    /// order and matches in the given ledger order.
    pub fn from_parts(settings: RatingSettings, players: Vec<Player>, matches: Vec<Match>) -> Self {
        Self {
            settings,
            players,
            matches,
        }
    }

    pub fn settings(&self) -> RatingSettings {
        self.settings
    }

    /// Roster in insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Ledger in stored order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    /// Add a player at the starting rating. Adding a name that is already
    /// rostered returns the existing player unchanged. A name that still has
    /// matches in the ledger gets its record back from a replay.
    pub fn add_player(&mut self, name: &str) -> &Player {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.players
                    .push(Player::new(name, self.settings.starting_rating));
                if self.matches.iter().any(|m| m.involves(name)) {
                    self.rebuild();
                    debug!("Re-added player {} with their recorded history", name);
                } else {
                    debug!("Added player {}", name);
                }
                self.players.len() - 1
            }
        };
        &self.players[idx]
    }

    /// Remove a player from the roster. Their matches stay in the ledger.
    pub fn remove_player(&mut self, name: &str) -> Option<Player> {
        let idx = self.position(name)?;
        debug!("Removed player {}", name);
        Some(self.players.remove(idx))
    }

    pub fn report_match(
        &mut self,
        player1: &str,
        player2: &str,
        score1: u32,
        score2: u32,
    ) -> Result<&Match, LeagueError> {
        self.report_match_at(player1, player2, score1, score2, Utc::now().naive_utc())
    }

    /// Record a decisive match and update both players from their current
    /// ratings. Ties are rejected and leave no trace.
    pub fn report_match_at(
        &mut self,
        player1: &str,
        player2: &str,
        score1: u32,
        score2: u32,
        played_at: NaiveDateTime,
    ) -> Result<&Match, LeagueError> {
        let (idx1, idx2, outcome) = self
            .participants(player1, player2)
            .and_then(|(idx1, idx2)| Ok((idx1, idx2, decide(score1, score2)?)))
            .inspect_err(|e| debug!("Rejected report {} vs {}: {}", player1, player2, e))?;

        let before1 = self.players[idx1].rating;
        let before2 = self.players[idx2].rating;
        let updated = update_ratings(before1, before2, outcome, self.settings.k_factor);
        let (after1, after2) = updated.rounded();

        self.players[idx1].record(outcome, after1);
        self.players[idx2].record(outcome.flipped(), after2);

        let winner = match outcome {
            Outcome::Win => player1,
            Outcome::Loss => player2,
        };

        let record = Match {
            id: self.next_match_id(),
            player1: player1.to_string(),
            player2: player2.to_string(),
            score1,
            score2,
            winner: winner.to_string(),
            elo_before1: before1,
            elo_before2: before2,
            elo_after1: after1,
            elo_after2: after2,
            elo_change1: (updated.first - before1).round() as i32,
            elo_change2: (updated.second - before2).round() as i32,
            played_at,
        };

        debug!(
            "Recorded match #{}: {} {}-{} {} ({:+}/{:+})",
            record.id, player1, score1, score2, player2, record.elo_change1, record.elo_change2
        );

        self.matches.push(record);
        let last = self.matches.len() - 1;
        Ok(&self.matches[last])
    }

    /// Delete a match and rebuild every rostered player from the rest of the
    /// ledger.
    pub fn delete_match(&mut self, id: MatchId) -> Result<Match, LeagueError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(LeagueError::UnknownMatch(id))?;

        let removed = self.matches.remove(idx);
        self.rebuild();

        debug!("Deleted match #{} and rebuilt the roster", id);
        Ok(removed)
    }

    /// Reset the roster and replay the ledger in stored order.
    pub fn rebuild(&mut self) {
        replay(&mut self.players, &self.matches, self.settings);
    }

    pub fn matches_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Match> + 'a {
        self.matches.iter().filter(move |m| m.involves(name))
    }

    /// Roster sorted by rating, highest first. Equal ratings keep roster
    /// order.
    pub fn ranked(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    fn participants(&self, player1: &str, player2: &str) -> Result<(usize, usize), LeagueError> {
        let idx1 = self
            .position(player1)
            .ok_or_else(|| LeagueError::UnknownPlayer(player1.to_string()))?;
        let idx2 = self
            .position(player2)
            .ok_or_else(|| LeagueError::UnknownPlayer(player2.to_string()))?;

        if idx1 == idx2 {
            return Err(LeagueError::SamePlayer(player1.to_string()));
        }

        Ok((idx1, idx2))
    }

    // Ids stay unique after deletions because they continue from the
    // highest surviving id.
    fn next_match_id(&self) -> MatchId {
        self.matches.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }
}

fn decide(score1: u32, score2: u32) -> Result<Outcome, LeagueError> {
    if score1 > score2 {
        Ok(Outcome::Win)
    } else if score2 > score1 {
        Ok(Outcome::Loss)
    } else {
        Err(LeagueError::TiedScore(score1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(19, minute, 0)
            .unwrap()
    }

    fn league(names: &[&str]) -> League {
        let mut league = League::default();
        for name in names {
            league.add_player(name);
        }
        league
    }

    #[test]
    fn test_new_player_starts_at_default() {
        let mut league = League::default();
        let player = league.add_player("Ann");

        assert_eq!(player.rating, 1000.0);
        assert_eq!(player.wins, 0);
        assert_eq!(player.losses, 0);
    }

    #[test]
    fn test_add_player_is_idempotent() {
        let mut league = league(&["Ann", "Bob"]);
        league.report_match_at("Ann", "Bob", 11, 3, at(1)).unwrap();

        let again = league.add_player("Ann").clone();

        assert_eq!(league.players().len(), 2);
        assert_eq!(again.wins, 1);
        assert_eq!(again.rating, 1016.0);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let league = league(&["ann", "Ann"]);
        assert_eq!(league.players().len(), 2);
    }

    #[test]
    fn test_report_even_match() {
        let mut league = league(&["A", "B"]);

        let record = league.report_match_at("A", "B", 11, 5, at(0)).unwrap().clone();

        assert_eq!(record.id, 1);
        assert_eq!(record.winner, "A");
        assert_eq!(record.elo_change1, 16);
        assert_eq!(record.elo_change2, -16);
        assert_eq!(record.elo_before1, 1000.0);
        assert_eq!(record.elo_after1, 1016.0);
        assert_eq!(record.elo_after2, 984.0);

        let a = league.player("A").unwrap();
        let b = league.player("B").unwrap();
        assert_eq!((a.rating, a.wins, a.losses), (1016.0, 1, 0));
        assert_eq!((b.rating, b.wins, b.losses), (984.0, 0, 1));
    }

    #[test]
    fn test_second_player_can_win() {
        let mut league = league(&["A", "B"]);

        let record = league.report_match_at("A", "B", 7, 11, at(0)).unwrap();

        assert_eq!(record.winner, "B");
        assert_eq!(record.elo_change2, 16);
        assert_eq!(league.player("B").unwrap().wins, 1);
    }

    #[test]
    fn test_tie_is_rejected_without_trace() {
        let mut league = league(&["A", "B"]);
        let before = league.clone();

        let err = league.report_match_at("A", "B", 5, 5, at(0)).unwrap_err();

        assert_eq!(err, LeagueError::TiedScore(5));
        assert_eq!(league, before);
    }

    #[test]
    fn test_invalid_participants_are_rejected() {
        let mut league = league(&["A", "B"]);
        let before = league.clone();

        let unknown = league.report_match_at("A", "Zed", 11, 2, at(0)).unwrap_err();
        let same = league.report_match_at("A", "A", 11, 2, at(0)).unwrap_err();

        assert_eq!(unknown, LeagueError::UnknownPlayer("Zed".to_string()));
        assert_eq!(same, LeagueError::SamePlayer("A".to_string()));
        assert!(unknown.is_invalid_participants() && same.is_invalid_participants());
        assert_eq!(league, before);
    }

    #[test]
    fn test_ids_are_dense_when_appending() {
        let mut league = league(&["A", "B", "C"]);
        league.report_match_at("A", "B", 11, 1, at(0)).unwrap();
        league.report_match_at("B", "C", 11, 1, at(1)).unwrap();
        league.report_match_at("C", "A", 11, 1, at(2)).unwrap();

        let ids: Vec<_> = league.matches().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_ids_stay_unique_after_delete() {
        let mut league = league(&["A", "B"]);
        league.report_match_at("A", "B", 11, 1, at(0)).unwrap();
        league.report_match_at("A", "B", 11, 1, at(1)).unwrap();
        league.delete_match(1).unwrap();

        let record = league.report_match_at("A", "B", 11, 1, at(2)).unwrap();

        assert_eq!(record.id, 3);
    }

    #[test]
    fn test_deleting_only_match_resets_players() {
        let mut league = league(&["A", "B"]);
        league.report_match_at("A", "B", 11, 5, at(0)).unwrap();

        let removed = league.delete_match(1).unwrap();

        assert_eq!(removed.winner, "A");
        assert!(league.matches().is_empty());
        for player in league.players() {
            assert_eq!((player.rating, player.wins, player.losses), (1000.0, 0, 0));
        }
    }

    #[test]
    fn test_delete_unknown_match() {
        let mut league = league(&["A", "B"]);
        league.report_match_at("A", "B", 11, 5, at(0)).unwrap();
        let before = league.clone();

        let err = league.delete_match(42).unwrap_err();

        assert_eq!(err, LeagueError::UnknownMatch(42));
        assert_eq!(league, before);
    }

    #[test]
    fn test_mid_history_delete_matches_cold_replay() {
        let mut league = league(&["A", "B", "C"]);
        league.report_match_at("A", "B", 11, 9, at(0)).unwrap();
        league.report_match_at("B", "C", 11, 4, at(1)).unwrap();
        league.report_match_at("C", "A", 11, 8, at(2)).unwrap();
        league.report_match_at("A", "B", 3, 11, at(3)).unwrap();

        league.delete_match(2).unwrap();

        let mut cold = self::league(&["A", "B", "C"]);
        cold.report_match_at("A", "B", 11, 9, at(0)).unwrap();
        cold.report_match_at("C", "A", 11, 8, at(2)).unwrap();
        cold.report_match_at("A", "B", 3, 11, at(3)).unwrap();

        assert_eq!(league.players(), cold.players());
    }

    #[test]
    fn test_surviving_snapshots_are_not_rewritten() {
        let mut league = league(&["A", "B", "C"]);
        league.report_match_at("A", "B", 11, 9, at(0)).unwrap();
        league.report_match_at("A", "C", 11, 4, at(1)).unwrap();
        let frozen = league.matches()[1].clone();

        league.delete_match(1).unwrap();

        assert_eq!(league.matches()[0], frozen);
        assert_eq!(frozen.elo_before1, 1016.0);
        assert_eq!(league.player("A").unwrap().rating, 1016.0);
    }

    #[test]
    fn test_records_match_ledger_after_removal() {
        let mut league = league(&["A", "B", "C"]);
        league.report_match_at("A", "B", 11, 9, at(0)).unwrap();
        league.report_match_at("A", "C", 11, 4, at(1)).unwrap();
        league.report_match_at("B", "A", 11, 4, at(2)).unwrap();

        league.remove_player("B").unwrap();
        league.delete_match(2).unwrap();

        let a = league.player("A").unwrap();
        let decisive = league.matches_for("A").count() as u32;
        assert_eq!(a.games_played(), decisive);
        assert_eq!((a.wins, a.losses), (1, 1));
        assert_eq!(league.matches()[0].player2, "B");
    }

    #[test]
    fn test_re_added_player_gets_history_back() {
        let mut league = league(&["A", "B", "C"]);
        league.report_match_at("A", "B", 11, 9, at(0)).unwrap();
        league.report_match_at("C", "A", 11, 4, at(1)).unwrap();

        league.remove_player("A").unwrap();
        let restored = league.add_player("A").clone();
        assert_eq!((restored.wins, restored.losses), (1, 1));

        // A later rebuild must agree with what re-adding produced.
        let mut rebuilt = league.clone();
        rebuilt.rebuild();
        assert_eq!(rebuilt, league);

        league.delete_match(2).unwrap();
        let a = league.player("A").unwrap();
        assert_eq!((a.rating, a.wins, a.losses), (1016.0, 1, 0));
    }

    #[test]
    fn test_remove_unknown_player() {
        let mut league = league(&["A"]);
        assert!(league.remove_player("B").is_none());
        assert_eq!(league.players().len(), 1);
    }

    #[test]
    fn test_matches_for_keeps_stored_order() {
        let mut league = league(&["A", "B", "C"]);
        league.report_match_at("A", "B", 11, 1, at(5)).unwrap();
        league.report_match_at("B", "C", 11, 1, at(1)).unwrap();
        league.report_match_at("C", "A", 11, 1, at(0)).unwrap();

        let ids: Vec<_> = league.matches_for("A").map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let mut league = league(&["A", "B", "C", "D"]);
        league.report_match_at("C", "D", 11, 1, at(0)).unwrap();

        let names: Vec<_> = league.ranked().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B", "D"]);
    }
}
