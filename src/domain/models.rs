use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rating::{Outcome, RatingValue};

pub type MatchId = u64;

/// A rostered player. `rating` always holds a rounded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub rating: RatingValue,
    pub wins: u32,
    pub losses: u32,
}

impl Player {
    pub fn new(name: &str, starting_rating: RatingValue) -> Self {
        Self {
            name: name.to_string(),
            rating: starting_rating,
            wins: 0,
            losses: 0,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    pub(crate) fn reset(&mut self, starting_rating: RatingValue) {
        self.rating = starting_rating;
        self.wins = 0;
        self.losses = 0;
    }

    pub(crate) fn record(&mut self, outcome: Outcome, rating: RatingValue) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.rating = rating;
    }
}

/// A recorded decisive match. Players are referenced by name only, so a
/// match outlives the removal of either participant from the roster.
///
/// The Elo snapshot fields are frozen at report time and are not rewritten
/// when the ledger is rebuilt.
///
/// Ids continue from the highest surviving id, not the ledger length, so
/// they stay unique after a deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub player1: String,
    pub player2: String,
    pub score1: u32,
    pub score2: u32,
    pub winner: String,
    pub elo_before1: RatingValue,
    pub elo_before2: RatingValue,
    pub elo_after1: RatingValue,
    pub elo_after2: RatingValue,
    pub elo_change1: i32,
    pub elo_change2: i32,
    pub played_at: NaiveDateTime,
}

/// Which slot of a match a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

/// One match seen from a single participant.
#[derive(Debug, Clone, Copy)]
pub struct MatchView<'a> {
    pub record: &'a Match,
    pub side: Side,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl Match {
    pub fn name_at(&self, side: Side) -> &str {
        match side {
            Side::First => &self.player1,
            Side::Second => &self.player2,
        }
    }

    pub fn elo_before_at(&self, side: Side) -> RatingValue {
        match side {
            Side::First => self.elo_before1,
            Side::Second => self.elo_before2,
        }
    }

    pub fn winner_side(&self) -> Side {
        if self.winner == self.player1 {
            Side::First
        } else {
            Side::Second
        }
    }

    pub fn involves(&self, name: &str) -> bool {
        self.player1 == name || self.player2 == name
    }

    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.player1 == a && self.player2 == b) || (self.player1 == b && self.player2 == a)
    }

    pub fn side_of(&self, name: &str) -> Option<Side> {
        if self.player1 == name {
            Some(Side::First)
        } else if self.player2 == name {
            Some(Side::Second)
        } else {
            None
        }
    }

    pub fn view<'a>(&'a self, name: &str) -> Option<MatchView<'a>> {
        self.side_of(name).map(|side| MatchView { record: self, side })
    }

    /// Outcome for `player1`, derived from the stored winner rather than
    /// the scores.
    pub fn first_outcome(&self) -> Outcome {
        if self.winner == self.player1 {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    pub fn loser(&self) -> &str {
        if self.winner == self.player1 {
            &self.player2
        } else {
            &self.player1
        }
    }
}

impl<'a> MatchView<'a> {
    pub fn won(&self) -> bool {
        self.record.winner == self.name()
    }

    pub fn name(&self) -> &'a str {
        match self.side {
            Side::First => &self.record.player1,
            Side::Second => &self.record.player2,
        }
    }

    pub fn opponent(&self) -> &'a str {
        match self.side {
            Side::First => &self.record.player2,
            Side::Second => &self.record.player1,
        }
    }

    pub fn points_for(&self) -> u32 {
        match self.side {
            Side::First => self.record.score1,
            Side::Second => self.record.score2,
        }
    }

    pub fn points_against(&self) -> u32 {
        match self.side {
            Side::First => self.record.score2,
            Side::Second => self.record.score1,
        }
    }

    pub fn elo_before(&self) -> RatingValue {
        match self.side {
            Side::First => self.record.elo_before1,
            Side::Second => self.record.elo_before2,
        }
    }

    pub fn elo_change(&self) -> i32 {
        match self.side {
            Side::First => self.record.elo_change1,
            Side::Second => self.record.elo_change2,
        }
    }
}
