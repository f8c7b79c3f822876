//! Board dealing and shuffle properties.

use memoria::{CardFace, CardState, DeckRng, MatchEngine, GameConfig, Pair, PairId, TopicDeck};
use proptest::prelude::*;

fn deck(n: u32) -> TopicDeck {
    let pairs = (0..n)
        .map(|i| Pair::new(format!("term {}", i), format!("definition {}", i)))
        .collect();
    TopicDeck::new(pairs).unwrap()
}

proptest! {
    /// Any deck of N pairs deals exactly 2N face-down cards, each pair
    /// appearing exactly twice, once per face.
    #[test]
    fn deal_covers_every_pair(n in 1u32..24, seed in any::<u64>()) {
        let mut rng = DeckRng::new(seed);
        let cards = deck(n).deal(&mut rng);

        prop_assert_eq!(cards.len(), (2 * n) as usize);
        prop_assert!(cards.iter().all(|c| c.state == CardState::FaceDown));

        for pair in 0..n {
            let members: Vec<_> = cards
                .iter()
                .filter(|c| c.pair == PairId::new(pair))
                .collect();
            prop_assert_eq!(members.len(), 2);
            prop_assert!(members.iter().any(|c| c.face == CardFace::Term));
            prop_assert!(members.iter().any(|c| c.face == CardFace::Definition));
        }
    }

    /// Card IDs always equal layout positions, whatever the permutation.
    #[test]
    fn deal_ids_are_positions(n in 1u32..24, seed in any::<u64>()) {
        let mut rng = DeckRng::new(seed);
        let cards = deck(n).deal(&mut rng);

        for (position, card) in cards.iter().enumerate() {
            prop_assert_eq!(card.id.index(), position);
        }
    }
}

/// Chi-square sanity check that the shuffle is unbiased: the term card of
/// pair 0 should land in each of the six positions of a 3-pair board about
/// equally often.
#[test]
fn shuffle_positions_are_uniform() {
    const TRIALS: u64 = 2400;
    let deck = deck(3);
    let mut counts = [0u64; 6];

    for seed in 0..TRIALS {
        let mut rng = DeckRng::new(seed);
        let cards = deck.deal(&mut rng);
        let position = cards
            .iter()
            .position(|c| c.pair == PairId::new(0) && c.face == CardFace::Term)
            .unwrap();
        counts[position] += 1;
    }

    let expected = TRIALS as f64 / 6.0;
    let chi_square: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // df = 5; the 99.9th percentile is ~20.5. A fair shuffle stays far
    // under a cutoff of 40; a positionally biased one blows through it.
    assert!(
        chi_square < 40.0,
        "shuffle looks biased: chi-square {:.1}, counts {:?}",
        chi_square,
        counts
    );
}

/// Entropy-seeded engines must not deal the same order twice. Odds of a
/// false failure are one in 24!.
#[test]
fn default_engines_deal_different_layouts() {
    let deck = deck(12);

    let mut a = MatchEngine::new(GameConfig::new(3));
    let mut b = MatchEngine::new(GameConfig::new(3));

    let layout_a: Vec<_> = a.new_session(&deck).unwrap().iter().map(|c| (c.pair, c.face)).collect();
    let layout_b: Vec<_> = b.new_session(&deck).unwrap().iter().map(|c| (c.pair, c.face)).collect();

    assert_ne!(layout_a, layout_b);
}

/// Successive sessions on one engine reshuffle.
#[test]
fn successive_sessions_reshuffle() {
    let deck = deck(12);
    let mut engine = MatchEngine::new(GameConfig::new(3));

    let first: Vec<_> = engine.new_session(&deck).unwrap().iter().map(|c| (c.pair, c.face)).collect();
    let second: Vec<_> = engine.new_session(&deck).unwrap().iter().map(|c| (c.pair, c.face)).collect();

    assert_ne!(first, second);
}
