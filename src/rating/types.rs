use serde::{Deserialize, Serialize};

pub type RatingValue = f64;

/// Result of a decisive game from the first player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn score(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Loss => 0.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
        }
    }
}

/// Unrounded ratings of both sides after an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingPair {
    pub first: RatingValue,
    pub second: RatingValue,
}

impl RatingPair {
    pub fn rounded(self) -> (RatingValue, RatingValue) {
        (self.first.round(), self.second.round())
    }
}
