pub mod league;
pub mod models;
pub mod replay;

pub use league::League;
pub use models::*;
pub use replay::{Replay, ReplayStep};
