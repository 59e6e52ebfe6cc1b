//! Circle-method round robin.
//!
//! The first player stays fixed while everyone else rotates one seat per
//! round. An odd roster gets a bye seat; pairings against it are dropped.

use super::Pairing;

pub type Round = Vec<Pairing>;

pub fn round_robin_schedule(players: &[String]) -> Vec<Round> {
    if players.len() < 2 {
        return Vec::new();
    }

    let mut seats: Vec<Option<&str>> = players.iter().map(|p| Some(p.as_str())).collect();
    if seats.len() % 2 == 1 {
        seats.push(None);
    }

    let n = seats.len();
    let mut rounds = Vec::with_capacity(n - 1);

    for _ in 0..n - 1 {
        rounds.push(pair_seats(&seats));
        rotate(&mut seats);
    }

    rounds
}

fn pair_seats(seats: &[Option<&str>]) -> Round {
    let n = seats.len();
    (0..n / 2)
        .filter_map(|i| match (seats[i], seats[n - 1 - i]) {
            (Some(a), Some(b)) => Some((a.to_string(), b.to_string())),
            _ => None,
        })
        .collect()
}

// [s0, s1, .., s(n-1)] -> [s0, s(n-1), s1, .., s(n-2)]
fn rotate(seats: &mut [Option<&str>]) {
    seats[1..].rotate_right(1);
}
