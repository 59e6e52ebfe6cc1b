//! Read-only analytics derived from the ledger on demand.

pub mod head_to_head;
pub mod overview;
pub mod player;
pub mod upsets;

pub use head_to_head::{head_to_head, HeadToHead};
pub use overview::{league_overview, rankings, Insight, Insights, LeagueOverview, PlayerSummary, RankingRow};
pub use player::{elo_trend, player_stats, PlayerStats, TREND_WINDOW};
pub use upsets::{biggest_upsets, Upset};

pub(crate) fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

pub(crate) fn average(sum: u64, count: u32) -> f64 {
    if count == 0 { 0.0 } else { sum as f64 / count as f64 }
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
