//! Cards: runtime state of the dealt board.

use serde::{Deserialize, Serialize};

use super::ids::{CardId, PairId};

/// Which half of the pair a card shows when flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    Term,
    Definition,
}

/// Card lifecycle.
///
/// `FaceDown → FaceUp` on selection, `FaceUp → Matched` when the pair
/// resolves, `FaceUp → FaceDown` when a mismatch settles. Matched is
/// terminal: a matched card never turns back over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    FaceDown,
    FaceUp,
    Matched,
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Position in the shuffled layout.
    pub id: CardId,

    /// The pair this card belongs to. Two cards share each pair ID.
    pub pair: PairId,

    /// Term side or definition side.
    pub face: CardFace,

    /// Text shown when the card is face up.
    pub text: String,

    pub state: CardState,
}

impl Card {
    /// Create a face-down card. The final `CardId` is assigned after the
    /// deal shuffles the layout.
    #[must_use]
    pub fn face_down(pair: PairId, face: CardFace, text: String) -> Self {
        Self {
            id: CardId::new(0),
            pair,
            face,
            text,
            state: CardState::FaceDown,
        }
    }

    /// Is this card still selectable?
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.state == CardState::FaceDown
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }
}
