use rand::seq::SliceRandom;
use rand::Rng;

use super::Pairing;

/// Shuffle the roster and pair neighbours. With an odd roster the last
/// player after the shuffle sits out.
pub fn random_pairing<R: Rng + ?Sized>(players: &[String], rng: &mut R) -> Vec<Pairing> {
    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    shuffled
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

/// `random_pairing` driven by the thread-local generator.
pub fn weekly_matchups(players: &[String]) -> Vec<Pairing> {
    random_pairing(players, &mut rand::thread_rng())
}
