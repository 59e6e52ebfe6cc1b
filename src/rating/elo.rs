//! Elo expected score and rating update.
//!
//! Everything here works on unrounded reals. Rounding happens only when a
//! value is written into a `Player` or a `Match`.

use super::types::{Outcome, RatingPair, RatingValue};

const SCALE: f64 = 400.0;

/// Probability that a player rated `rating_a` beats one rated `rating_b`.
pub fn expected_score(rating_a: RatingValue, rating_b: RatingValue) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((rating_b - rating_a) / SCALE))
}

/// New ratings for both sides after a decisive game.
pub fn update_ratings(
    rating_a: RatingValue,
    rating_b: RatingValue,
    outcome_a: Outcome,
    k_factor: f64,
) -> RatingPair {
    let expected_a = expected_score(rating_a, rating_b);
    let expected_b = expected_score(rating_b, rating_a);

    RatingPair {
        first: rating_a + k_factor * (outcome_a.score() - expected_a),
        second: rating_b + k_factor * (outcome_a.flipped().score() - expected_b),
    }
}
