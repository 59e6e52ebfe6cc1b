//! Plain-text tables for the terminal.

use colored::{ColoredString, Colorize};

use crate::domain::Match;
use crate::fixtures::{Pairing, Round};
use crate::stats::{HeadToHead, LeagueOverview, PlayerStats, RankingRow, Upset};

fn signed(value: i32) -> ColoredString {
    if value > 0 {
        format!("+{}", value).green().bold()
    } else if value < 0 {
        value.to_string().red().bold()
    } else {
        "0".dimmed()
    }
}

fn rule(width: usize) -> String {
    "-".repeat(width)
}

pub fn render_rankings(rows: &[RankingRow]) -> String {
    if rows.is_empty() {
        return "No players yet. Add some with `add-player`.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<24} {:>6} {:>5} {:>6}  {:>6}\n",
        "Rank", "Player", "Elo", "Wins", "Losses", "Trend"
    ));
    out.push_str(&rule(60));
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:>4}  {:<24} {:>6.0} {:>5} {:>6}  {:>6}\n",
            row.rank,
            row.name.bold(),
            row.rating,
            row.wins,
            row.losses,
            signed(row.elo_trend)
        ));
    }

    out
}

pub fn render_match(record: &Match) -> String {
    format!(
        "#{:<4} {} {}-{} {}  winner: {}  ({} {}, {} {})",
        record.id,
        record.player1,
        record.score1,
        record.score2,
        record.player2,
        record.winner.bold(),
        record.player1,
        signed(record.elo_change1),
        record.player2,
        signed(record.elo_change2)
    )
}

pub fn render_matches(matches: &[Match]) -> String {
    if matches.is_empty() {
        return "No matches recorded yet.\n".to_string();
    }

    matches
        .iter()
        .map(|m| format!("{}  {}\n", render_match(m), m.played_at.format("%Y-%m-%d %H:%M")))
        .collect()
}

pub fn render_stats(stats: &PlayerStats) -> String {
    let streak = match stats.current_streak {
        s if s > 0 => format!("{} won", s).green(),
        s => format!("{} lost", s.unsigned_abs()).red(),
    };
    let history: Vec<String> = stats.elo_history.iter().map(|c| signed(*c).to_string()).collect();

    let mut out = format!("=== {} ===\n", stats.name.bold());
    out.push_str(&format!(
        "Record:          {}-{} ({:.1}%)\n",
        stats.wins, stats.losses, stats.win_rate
    ));
    out.push_str(&format!(
        "Points:          {} for, {} against ({:+})\n",
        stats.points_for,
        stats.points_against,
        stats.point_differential()
    ));
    out.push_str(&format!(
        "Average score:   {:.1} - {:.1}\n",
        stats.avg_points_for, stats.avg_points_against
    ));
    out.push_str(&format!("Current streak:  {}\n", streak));
    out.push_str(&format!("Longest streak:  {}\n", stats.longest_streak));
    out.push_str(&format!("Elo trend:       {}\n", signed(stats.elo_trend)));
    out.push_str(&format!("Elo history:     {}\n", history.join(" ")));
    out
}

pub fn render_overview(overview: &LeagueOverview) -> String {
    let mut out = String::from("Player Performance\n");
    out.push_str(&format!(
        "{:<24} {:>8} {:>8} {:>8} {:>6} {:>8}\n",
        "Player", "Win %", "Avg For", "Avg Agt", "Trend", "Matches"
    ));
    out.push_str(&rule(67));
    out.push('\n');

    for p in &overview.players {
        out.push_str(&format!(
            "{:<24} {:>7.1}% {:>8.1} {:>8.1} {:>6} {:>8}\n",
            p.name,
            p.win_rate,
            p.avg_points_for,
            p.avg_points_against,
            signed(p.elo_trend),
            p.total_matches
        ));
    }

    out.push_str("\nRecent Matches\n");
    if overview.recent_matches.is_empty() {
        out.push_str("No matches recorded yet. Start playing to see statistics!\n");
    }
    for record in &overview.recent_matches {
        out.push_str(&render_match(record));
        out.push('\n');
    }

    let insights = &overview.insights;
    out.push_str("\nInsights\n");
    if let Some(top) = &insights.highest_win_rate {
        out.push_str(&format!("Highest win rate: {} ({:.1}%)\n", top.name, top.value));
    }
    if let Some(active) = &insights.most_active {
        out.push_str(&format!("Most active:      {} ({} matches)\n", active.name, active.value));
    }
    if let Some(offense) = &insights.best_offense {
        out.push_str(&format!(
            "Best offense:     {} ({:.1} avg score)\n",
            offense.name, offense.value
        ));
    }

    out
}

pub fn render_head_to_head(h2h: &HeadToHead) -> String {
    if h2h.total == 0 {
        return format!("{} and {} have not played each other.\n", h2h.player_a, h2h.player_b);
    }

    format!(
        "{} {} - {} {} ({} matches)\n",
        h2h.player_a.bold(),
        h2h.wins_a,
        h2h.wins_b,
        h2h.player_b.bold(),
        h2h.total
    )
}

pub fn render_upsets(upsets: &[Upset]) -> String {
    if upsets.is_empty() {
        return "No upsets yet.\n".to_string();
    }

    upsets
        .iter()
        .map(|u| {
            format!(
                "#{:<4} {} ({:.0}) beat {} ({:.0}) {}-{}, gap {:.0}\n",
                u.record.id,
                u.underdog_name().bold(),
                u.record.elo_before_at(u.underdog),
                u.favorite_name(),
                u.record.elo_before_at(u.underdog.other()),
                u.record.score1.max(u.record.score2),
                u.record.score1.min(u.record.score2),
                u.rating_gap
            )
        })
        .collect()
}

pub fn render_pairings(pairs: &[Pairing]) -> String {
    if pairs.is_empty() {
        return "Not enough players for matchups.\n".to_string();
    }

    pairs
        .iter()
        .map(|(a, b)| format!("{} vs {}\n", a, b))
        .collect()
}

pub fn render_schedule(rounds: &[Round]) -> String {
    if rounds.is_empty() {
        return "Not enough players for a schedule.\n".to_string();
    }

    let mut out = String::new();
    for (idx, round) in rounds.iter().enumerate() {
        out.push_str(&format!("Round {}\n", idx + 1));
        out.push_str(&render_pairings(round));
    }
    out
}
