//! Fixture generation over a roster of player names.
//!
//! Both generators return an empty result for fewer than two players.

pub mod pairing;
pub mod round_robin;

pub use pairing::{random_pairing, weekly_matchups};
pub use round_robin::{round_robin_schedule, Round};

/// Two players drawn to meet, in slot order.
pub type Pairing = (String, String);
