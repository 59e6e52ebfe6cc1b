use serde::Serialize;

use crate::domain::Match;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub player_a: String,
    pub player_b: String,
    pub wins_a: u32,
    pub wins_b: u32,
    pub total: u32,
}

/// Record between two players over every match they played against each
/// other, in either slot order.
pub fn head_to_head(matches: &[Match], player_a: &str, player_b: &str) -> HeadToHead {
    let mut result = HeadToHead {
        player_a: player_a.to_string(),
        player_b: player_b.to_string(),
        wins_a: 0,
        wins_b: 0,
        total: 0,
    };

    for record in matches.iter().filter(|m| m.is_between(player_a, player_b)) {
        result.total += 1;
        if record.winner == player_a {
            result.wins_a += 1;
        } else {
            result.wins_b += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::League;

    #[test]
    fn test_counts_both_slot_orders() {
        let mut league = League::default();
        for name in ["A", "B", "C"] {
            league.add_player(name);
        }
        league.report_match("A", "B", 11, 4).unwrap();
        league.report_match("B", "A", 11, 4).unwrap();
        league.report_match("B", "A", 2, 11).unwrap();
        league.report_match("A", "C", 11, 4).unwrap();

        let h2h = head_to_head(league.matches(), "A", "B");

        assert_eq!((h2h.wins_a, h2h.wins_b, h2h.total), (2, 1, 3));

        let reversed = head_to_head(league.matches(), "B", "A");
        assert_eq!((reversed.wins_a, reversed.wins_b, reversed.total), (1, 2, 3));
    }

    #[test]
    fn test_never_met() {
        let h2h = head_to_head(&[], "A", "B");
        assert_eq!(h2h.total, 0);
        assert_eq!(h2h.wins_a + h2h.wins_b, 0);
    }
}
