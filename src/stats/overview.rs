//! League-wide summary: every rostered player's headline numbers, the most
//! recent results and a few leaders.

use serde::Serialize;

use crate::domain::{League, Match};

use super::player::{elo_trend, player_stats, PlayerStats};
use super::round_tenth;

/// One line of the rankings table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    pub rank: usize,
    pub name: String,
    pub rating: f64,
    pub wins: u32,
    pub losses: u32,
    pub elo_trend: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub win_rate: f64,
    pub avg_points_for: f64,
    pub avg_points_against: f64,
    pub elo_trend: i32,
    pub total_matches: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Insights {
    pub highest_win_rate: Option<Insight>,
    pub most_active: Option<Insight>,
    pub best_offense: Option<Insight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueOverview {
    pub players: Vec<PlayerSummary>,
    /// Newest first.
    pub recent_matches: Vec<Match>,
    pub insights: Insights,
}

/// Rostered players by rating with their recent Elo trend.
pub fn rankings(league: &League) -> Vec<RankingRow> {
    league
        .ranked()
        .into_iter()
        .enumerate()
        .map(|(idx, player)| RankingRow {
            rank: idx + 1,
            name: player.name.clone(),
            rating: player.rating,
            wins: player.wins,
            losses: player.losses,
            elo_trend: elo_trend(league.matches(), &player.name),
        })
        .collect()
}

pub fn league_overview(league: &League, recent: usize) -> LeagueOverview {
    let players: Vec<PlayerSummary> = league
        .players()
        .iter()
        .map(|p| summarize(&p.name, player_stats(league.matches(), &p.name)))
        .collect();

    let recent_matches = league.matches().iter().rev().take(recent).cloned().collect();
    let insights = insights(&players);

    LeagueOverview {
        players,
        recent_matches,
        insights,
    }
}

fn summarize(name: &str, stats: Option<PlayerStats>) -> PlayerSummary {
    match stats {
        Some(stats) => PlayerSummary {
            name: name.to_string(),
            win_rate: round_tenth(stats.win_rate),
            avg_points_for: round_tenth(stats.avg_points_for),
            avg_points_against: round_tenth(stats.avg_points_against),
            elo_trend: stats.elo_trend,
            total_matches: stats.games_played(),
        },
        None => PlayerSummary {
            name: name.to_string(),
            win_rate: 0.0,
            avg_points_for: 0.0,
            avg_points_against: 0.0,
            elo_trend: 0,
            total_matches: 0,
        },
    }
}

fn insights(players: &[PlayerSummary]) -> Insights {
    Insights {
        highest_win_rate: leader(players, |p| p.win_rate),
        most_active: leader(players, |p| p.total_matches as f64),
        best_offense: leader(players, |p| p.avg_points_for),
    }
}

// First player in roster order wins ties.
fn leader(players: &[PlayerSummary], key: impl Fn(&PlayerSummary) -> f64) -> Option<Insight> {
    let mut best: Option<(&PlayerSummary, f64)> = None;

    for player in players.iter().filter(|p| p.total_matches > 0) {
        let value = key(player);
        if best.is_none_or(|(_, current)| value > current) {
            best = Some((player, value));
        }
    }

    best.map(|(player, value)| Insight {
        name: player.name.clone(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league() -> League {
        let mut league = League::default();
        for name in ["A", "B", "C", "D"] {
            league.add_player(name);
        }
        league
    }

    #[test]
    fn test_rankings_carry_trend() {
        let mut league = league();
        league.report_match("B", "A", 11, 3).unwrap();

        let rows = rankings(&league);

        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].name, "B");
        assert_eq!(rows[0].elo_trend, 16);
        assert_eq!(rows[3].name, "A");
        assert_eq!(rows[3].elo_trend, -16);
        assert_eq!(rows[1].elo_trend, 0);
    }

    #[test]
    fn test_empty_league_has_no_insights() {
        let overview = league_overview(&league(), 10);

        assert_eq!(overview.players.len(), 4);
        assert!(overview.recent_matches.is_empty());
        assert_eq!(overview.insights, Insights::default());
    }

    #[test]
    fn test_summaries_are_rounded() {
        let mut league = league();
        league.report_match("A", "B", 11, 3).unwrap();
        league.report_match("A", "C", 11, 4).unwrap();
        league.report_match("D", "A", 11, 5).unwrap();

        let overview = league_overview(&league, 10);
        let a = &overview.players[0];

        assert_eq!(a.win_rate, 66.7);
        assert_eq!(a.avg_points_for, 9.0);
        assert_eq!(a.avg_points_against, 6.0);
        assert_eq!(a.total_matches, 3);
    }

    #[test]
    fn test_recent_matches_newest_first() {
        let mut league = league();
        league.report_match("A", "B", 11, 3).unwrap();
        league.report_match("C", "D", 11, 3).unwrap();
        league.report_match("A", "D", 11, 3).unwrap();

        let overview = league_overview(&league, 2);
        let ids: Vec<_> = overview.recent_matches.iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_leaders() {
        let mut league = league();
        league.report_match("A", "B", 11, 3).unwrap();
        league.report_match("B", "C", 15, 13).unwrap();
        league.report_match("C", "B", 11, 9).unwrap();

        let insights = league_overview(&league, 10).insights;

        assert_eq!(insights.highest_win_rate.unwrap().name, "A");
        assert_eq!(insights.most_active.unwrap().name, "B");
        assert_eq!(insights.best_offense.unwrap().name, "C");
    }
}
