//! Topic decks: the term/definition pairs a session is dealt from.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardFace};
use super::errors::EngineError;
use super::ids::{CardId, PairId};
use super::rng::DeckRng;

/// One term/definition entry.
///
/// Also the wire shape of topic payloads, so it derives serde directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub term: String,
    pub definition: String,
}

impl Pair {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// An ordered, validated, non-empty sequence of pairs.
///
/// Immutable once built; a session deals its board from a borrowed deck and
/// never writes back.
///
/// ```
/// use memoria::{Pair, TopicDeck};
///
/// let deck = TopicDeck::new(vec![Pair::new("mitosis", "cell division")]).unwrap();
/// assert_eq!(deck.len(), 1);
/// assert!(TopicDeck::new(vec![]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDeck {
    pairs: Vec<Pair>,
}

impl TopicDeck {
    /// Build a deck, rejecting empty pair lists.
    pub fn new(pairs: Vec<Pair>) -> Result<Self, EngineError> {
        if pairs.is_empty() {
            return Err(EngineError::InvalidDeck);
        }
        Ok(Self { pairs })
    }

    /// Number of pairs (the session's `total_pairs`).
    #[must_use]
    pub fn len(&self) -> u32 {
        self.pairs.len() as u32
    }

    /// A validated deck is never empty; this exists for the clippy-standard
    /// `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Deal the board: two cards per pair (one term face, one definition
    /// face), shuffled into a uniformly random layout. `CardId`s are
    /// assigned from the shuffled positions.
    #[must_use]
    pub fn deal(&self, rng: &mut DeckRng) -> Vec<Card> {
        let mut cards: Vec<Card> = Vec::with_capacity(self.pairs.len() * 2);

        for (index, pair) in self.pairs.iter().enumerate() {
            let pair_id = PairId::new(index as u32);
            cards.push(Card::face_down(pair_id, CardFace::Term, pair.term.clone()));
            cards.push(Card::face_down(
                pair_id,
                CardFace::Definition,
                pair.definition.clone(),
            ));
        }

        rng.shuffle(&mut cards);

        for (position, card) in cards.iter_mut().enumerate() {
            card.id = CardId::new(position as u32);
        }

        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::CardState;

    fn deck(n: u32) -> TopicDeck {
        let pairs = (0..n)
            .map(|i| Pair::new(format!("term {}", i), format!("definition {}", i)))
            .collect();
        TopicDeck::new(pairs).unwrap()
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(
            TopicDeck::new(vec![]),
            Err(EngineError::InvalidDeck)
        ));
    }

    #[test]
    fn test_deal_card_count() {
        let mut rng = DeckRng::new(42);
        for n in [1, 3, 8] {
            let cards = deck(n).deal(&mut rng);
            assert_eq!(cards.len(), (n * 2) as usize);
        }
    }

    #[test]
    fn test_deal_each_pair_twice_with_both_faces() {
        let mut rng = DeckRng::new(42);
        let cards = deck(5).deal(&mut rng);

        for pair in 0..5u32 {
            let members: Vec<_> = cards
                .iter()
                .filter(|c| c.pair == PairId::new(pair))
                .collect();
            assert_eq!(members.len(), 2);
            assert!(members.iter().any(|c| c.face == CardFace::Term));
            assert!(members.iter().any(|c| c.face == CardFace::Definition));
        }
    }

    #[test]
    fn test_deal_ids_match_positions() {
        let mut rng = DeckRng::new(42);
        let cards = deck(4).deal(&mut rng);

        for (position, card) in cards.iter().enumerate() {
            assert_eq!(card.id.index(), position);
            assert_eq!(card.state, CardState::FaceDown);
        }
    }

    #[test]
    fn test_deal_texts_carry_over() {
        let mut rng = DeckRng::new(7);
        let deck = TopicDeck::new(vec![Pair::new("osmosis", "solvent diffusion")]).unwrap();
        let cards = deck.deal(&mut rng);

        let texts: Vec<&str> = cards.iter().map(|c| c.text.as_str()).collect();
        assert!(texts.contains(&"osmosis"));
        assert!(texts.contains(&"solvent diffusion"));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let d = deck(6);
        let a = d.deal(&mut DeckRng::new(9));
        let b = d.deal(&mut DeckRng::new(9));
        assert_eq!(a, b);
    }
}
