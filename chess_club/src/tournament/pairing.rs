//! Pairing engine: pure functions that produce a round's matches.
//!
//! Both entry points take an explicit random source so callers (and tests)
//! can pass a seeded generator. Both require an even number of players; the
//! state machine guarantees that, the engine still defends against it.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::errors::{TournamentError, TournamentResult};
use super::models::{Match, PlayerId, Round, pair_key};

/// Order-normalized pairs already played across prior rounds.
pub type PlayedPairs = HashSet<(PlayerId, PlayerId)>;

/// Collect every pairing that occurred in the given rounds.
pub fn played_pairs(rounds: &[Round]) -> PlayedPairs {
    rounds
        .iter()
        .flat_map(|round| round.matches().iter())
        .map(Match::pair)
        .collect()
}

/// Pair the first round: uniform shuffle, then consecutive pairing.
pub fn first_round<R: Rng + ?Sized>(
    players: &[PlayerId],
    rng: &mut R,
) -> TournamentResult<Round> {
    check_pairable(players.len())?;

    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    let mut round = Round::new();
    for pair in shuffled.chunks_exact(2) {
        round.add_match(Match::new(pair[0].as_str(), pair[1].as_str())?);
    }
    Ok(round)
}

/// Pair a subsequent round from the standings-ordered player list.
///
/// A waiting queue is seeded from the standings order. The head of the queue
/// is paired with a uniformly random opponent it has not faced yet; when
/// every remaining opponent is a repeat, it falls back to the very next
/// waiting player. The fallback guarantees a full pairing even when avoiding
/// all repeats is impossible.
pub fn next_round<R: Rng + ?Sized>(
    standings_order: &[PlayerId],
    played: &PlayedPairs,
    rng: &mut R,
) -> TournamentResult<Round> {
    check_pairable(standings_order.len())?;

    let mut waiting = standings_order.to_vec();
    let mut round = Round::new();
    while waiting.len() >= 2 {
        let first = waiting.remove(0);
        let fresh: Vec<usize> = waiting
            .iter()
            .enumerate()
            .filter(|(_, other)| !played.contains(&pair_key(&first, other.as_str())))
            .map(|(index, _)| index)
            .collect();

        let partner_index = if fresh.is_empty() {
            // Every remaining opponent is a repeat; take the next in line.
            0
        } else {
            fresh[rng.random_range(0..fresh.len())]
        };
        let partner = waiting.remove(partner_index);
        round.add_match(Match::new(first, partner)?);
    }
    Ok(round)
}

fn check_pairable(count: usize) -> TournamentResult<()> {
    if count < 2 {
        return Err(TournamentError::InsufficientPlayers(count));
    }
    if count % 2 != 0 {
        return Err(TournamentError::OddPlayers(count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn players(count: usize) -> Vec<PlayerId> {
        (0..count).map(|i| format!("PL{i:05}")).collect()
    }

    #[test]
    fn test_first_round_pairs_everyone_exactly_once() {
        let players = players(8);
        let mut rng = StdRng::seed_from_u64(1);
        let round = first_round(&players, &mut rng).unwrap();

        assert_eq!(round.len(), 4);
        let mut seen: Vec<&str> = round
            .matches()
            .iter()
            .flat_map(|m| m.players())
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = players.iter().map(String::as_str).collect();
        expected.sort_unstable();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_first_round_rejects_bad_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            first_round(&players(1), &mut rng),
            Err(TournamentError::InsufficientPlayers(1))
        ));
        assert!(matches!(
            first_round(&players(5), &mut rng),
            Err(TournamentError::OddPlayers(5))
        ));
        assert!(matches!(
            first_round(&[], &mut rng),
            Err(TournamentError::InsufficientPlayers(0))
        ));
    }

    #[test]
    fn test_first_round_is_deterministic_under_a_seed() {
        let players = players(10);
        let a = first_round(&players, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = first_round(&players, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_next_round_avoids_repeats_when_possible() {
        let players = players(4);
        let played: PlayedPairs = [
            pair_key(&players[0], &players[1]),
            pair_key(&players[2], &players[3]),
        ]
        .into_iter()
        .collect();

        // Whatever the random choice, the head must not face its old opponent.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let round = next_round(&players, &played, &mut rng).unwrap();
            assert_eq!(round.len(), 2);
            for m in round.matches() {
                assert!(!played.contains(&m.pair()), "repeat pairing {:?}", m.pair());
            }
        }
    }

    #[test]
    fn test_next_round_falls_back_to_repeats_when_unavoidable() {
        let players = players(2);
        let played: PlayedPairs = [pair_key(&players[0], &players[1])].into_iter().collect();

        let mut rng = StdRng::seed_from_u64(3);
        let round = next_round(&players, &played, &mut rng).unwrap();
        assert_eq!(round.len(), 1);
        assert_eq!(round.matches()[0].pair(), pair_key(&players[0], &players[1]));
    }

    #[test]
    fn test_next_round_rejects_odd_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            next_round(&players(3), &PlayedPairs::new(), &mut rng),
            Err(TournamentError::OddPlayers(3))
        ));
    }

    #[test]
    fn test_played_pairs_covers_all_rounds() {
        let players = players(4);
        let mut rng = StdRng::seed_from_u64(9);
        let r1 = first_round(&players, &mut rng).unwrap();
        let r2 = next_round(&players, &played_pairs(&[r1.clone()]), &mut rng).unwrap();

        let all = played_pairs(&[r1, r2]);
        assert_eq!(all.len(), 4, "two rounds of two matches, no overlap");
    }
}
