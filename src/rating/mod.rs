pub mod elo;
pub mod types;

pub use elo::{expected_score, update_ratings};
pub use types::{Outcome, RatingPair, RatingValue};
