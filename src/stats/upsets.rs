use serde::Serialize;

use crate::domain::{Match, Side};
use crate::rating::RatingValue;

/// A match won by the player with the lower pre-match rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Upset {
    pub record: Match,
    pub rating_gap: RatingValue,
    pub underdog: Side,
}

impl Upset {
    pub fn underdog_name(&self) -> &str {
        self.record.name_at(self.underdog)
    }

    pub fn favorite_name(&self) -> &str {
        self.record.name_at(self.underdog.other())
    }
}

/// Upsets ordered by pre-match rating gap, largest first. Equal gaps keep
/// ledger order.
pub fn biggest_upsets(matches: &[Match]) -> Vec<Upset> {
    let mut upsets: Vec<Upset> = matches.iter().filter_map(as_upset).collect();
    upsets.sort_by(|a, b| b.rating_gap.total_cmp(&a.rating_gap));
    upsets
}

fn as_upset(record: &Match) -> Option<Upset> {
    let winner = record.winner_side();
    let winner_rating = record.elo_before_at(winner);
    let loser_rating = record.elo_before_at(winner.other());

    (winner_rating < loser_rating).then(|| Upset {
        record: record.clone(),
        rating_gap: loser_rating - winner_rating,
        underdog: winner,
    })
}
