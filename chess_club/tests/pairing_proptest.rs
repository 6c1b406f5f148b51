//! Property-based tests for the pairing engine.
//!
//! These check the structural guarantees over a range of field sizes and
//! seeds: full coverage, no self-pairing, and the repeat-avoidance rule.

use std::collections::BTreeSet;

use chess_club::tournament::pairing::{self, PlayedPairs};
use chess_club::TournamentError;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn players(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("PL{i:05}")).collect()
}

// Strategy for an even, pairable field size.
fn even_count_strategy() -> impl Strategy<Value = usize> {
    (1usize..=12).prop_map(|half| half * 2)
}

proptest! {
    #[test]
    fn first_round_covers_every_player_exactly_once(
        count in even_count_strategy(),
        seed in any::<u64>(),
    ) {
        let players = players(count);
        let mut rng = StdRng::seed_from_u64(seed);
        let round = pairing::first_round(&players, &mut rng).unwrap();

        prop_assert_eq!(round.len(), count / 2);
        let mut seen = BTreeSet::new();
        for m in round.matches() {
            prop_assert_ne!(m.player_one(), m.player_two());
            for player in m.players() {
                prop_assert!(seen.insert(player.to_string()), "{} paired twice", player);
            }
        }
        prop_assert_eq!(seen.len(), count);
    }

    #[test]
    fn odd_counts_fail_with_odd_players(
        half in 1usize..=12,
        seed in any::<u64>(),
    ) {
        let players = players(half * 2 + 1);
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(matches!(
            pairing::first_round(&players, &mut rng),
            Err(TournamentError::OddPlayers(_))
        ));
        prop_assert!(matches!(
            pairing::next_round(&players, &PlayedPairs::new(), &mut rng),
            Err(TournamentError::OddPlayers(_))
        ));
    }

    #[test]
    fn next_round_covers_every_player_exactly_once(
        count in even_count_strategy(),
        seed in any::<u64>(),
    ) {
        let players = players(count);
        let mut rng = StdRng::seed_from_u64(seed);

        // Seed a history from a first round so avoidance has teeth.
        let first = pairing::first_round(&players, &mut rng).unwrap();
        let played = pairing::played_pairs(std::slice::from_ref(&first));
        let round = pairing::next_round(&players, &played, &mut rng).unwrap();

        prop_assert_eq!(round.len(), count / 2);
        let mut seen = BTreeSet::new();
        for m in round.matches() {
            for player in m.players() {
                prop_assert!(seen.insert(player.to_string()), "{} paired twice", player);
            }
        }
    }

    #[test]
    fn four_player_rematch_never_happens_after_one_round(seed in any::<u64>()) {
        // With four players and one prior round, every pick the queue head
        // can make leaves the remaining two players a fresh pairing, so no
        // repeat is ever forced. (Larger fields can corner the greedy pass
        // into its fallback, so this guarantee is specific to four.)
        let players = players(4);
        let mut rng = StdRng::seed_from_u64(seed);
        let first = pairing::first_round(&players, &mut rng).unwrap();
        let played = pairing::played_pairs(std::slice::from_ref(&first));
        let round = pairing::next_round(&players, &played, &mut rng).unwrap();

        for m in round.matches() {
            prop_assert!(!played.contains(&m.pair()), "repeat pairing {:?}", m.pair());
        }
    }
}
