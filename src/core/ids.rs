//! Identifier newtypes for cards and pairs.
//!
//! A `PairId` names one term/definition entry of the deck; exactly two cards
//! share it. A `CardId` is a card's position in the shuffled layout, so it
//! doubles as the grid index the host renders from.

use serde::{Deserialize, Serialize};

/// Position of a card in the shuffled layout.
///
/// ```
/// use memoria::CardId;
///
/// let id = CardId::new(7);
/// assert_eq!(id.raw(), 7);
/// assert_eq!(id.index(), 7usize);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The card's index into the dealt layout.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier of a term/definition pair within a deck.
///
/// Assigned from the deck's original order; two cards carry each `PairId`,
/// one showing the term and one the definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(id.index(), 3);
        assert_eq!(format!("{}", id), "Card(3)");
        assert_eq!(CardId::from(3u32), id);
    }

    #[test]
    fn test_pair_id() {
        let id = PairId::new(9);
        assert_eq!(id.raw(), 9);
        assert_eq!(format!("{}", id), "Pair(9)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId::new(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
