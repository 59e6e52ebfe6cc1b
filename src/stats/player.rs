use serde::Serialize;

use crate::domain::{Match, MatchView};

use super::{average, percentage};

/// Number of most recent Elo changes summed into the trend.
pub const TREND_WINDOW: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub points_for: u64,
    pub points_against: u64,
    pub avg_points_for: f64,
    pub avg_points_against: f64,
    /// Positive while winning, negative while losing.
    pub current_streak: i32,
    pub longest_streak: u32,
    pub elo_history: Vec<i32>,
    pub elo_trend: i32,
}

impl PlayerStats {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn point_differential(&self) -> i128 {
        i128::from(self.points_for) - i128::from(self.points_against)
    }
}

#[derive(Default)]
struct Accumulator {
    wins: u32,
    losses: u32,
    points_for: u64,
    points_against: u64,
    current_streak: i32,
    longest_streak: u32,
    elo_history: Vec<i32>,
}

impl Accumulator {
    fn push(&mut self, view: MatchView<'_>) {
        if view.won() {
            self.wins += 1;
            self.current_streak = if self.current_streak > 0 {
                self.current_streak + 1
            } else {
                1
            };
        } else {
            self.losses += 1;
            self.current_streak = if self.current_streak < 0 {
                self.current_streak - 1
            } else {
                -1
            };
        }

        self.longest_streak = self.longest_streak.max(self.current_streak.unsigned_abs());
        self.points_for += u64::from(view.points_for());
        self.points_against += u64::from(view.points_against());
        self.elo_history.push(view.elo_change());
    }

    fn finish(self, name: &str) -> PlayerStats {
        let games = self.wins + self.losses;
        let elo_trend = trend_of(&self.elo_history);

        PlayerStats {
            name: name.to_string(),
            wins: self.wins,
            losses: self.losses,
            win_rate: percentage(self.wins, games),
            points_for: self.points_for,
            points_against: self.points_against,
            avg_points_for: average(self.points_for, games),
            avg_points_against: average(self.points_against, games),
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            elo_history: self.elo_history,
            elo_trend,
        }
    }
}

/// Stats for `name`, scanning matches in stored order. `None` when the
/// player has no recorded matches.
pub fn player_stats(matches: &[Match], name: &str) -> Option<PlayerStats> {
    let mut acc = Accumulator::default();

    for view in matches.iter().filter_map(|m| m.view(name)) {
        acc.push(view);
    }

    if acc.elo_history.is_empty() {
        return None;
    }

    Some(acc.finish(name))
}

/// Sum of the player's last `TREND_WINDOW` Elo changes, 0 without matches.
pub fn elo_trend(matches: &[Match], name: &str) -> i32 {
    let history: Vec<i32> = matches
        .iter()
        .filter_map(|m| m.view(name))
        .map(|v| v.elo_change())
        .collect();
    trend_of(&history)
}

fn trend_of(history: &[i32]) -> i32 {
    let start = history.len().saturating_sub(TREND_WINDOW);
    history[start..].iter().sum()
}
