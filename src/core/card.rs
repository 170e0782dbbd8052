//! Card identity and face state.
//!
//! A card's `CardId` is its position in the dealt deck. Decks are shuffled
//! once when a game starts and never reordered, so the id doubles as the
//! board position the presentation layer draws the card at.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::{Card, CardId, Symbol};
//!
//! let mut card = Card::new(CardId::new(3), Symbol::new(1));
//! assert!(card.is_hidden());
//!
//! card.is_flipped = true;
//! assert!(card.is_face_up());
//! assert!(!card.is_selectable());
//! ```

use serde::{Deserialize, Serialize};

/// Position of a card in the deck, in `[0, N)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Index into the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for CardId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Opaque card face token.
///
/// The engine only ever compares symbols for equality. The glyph shown to the
/// player lives in `GameConfig::symbols`, indexed by the raw value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw symbol value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// A card on the board.
///
/// `is_matched` implies `is_flipped`: a matched card stays face up for the
/// rest of the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Board position.
    pub id: CardId,

    /// Face token. Exactly one other card in the deck shares it.
    pub symbol: Symbol,

    /// Face up (either pending evaluation, awaiting revert, or matched).
    pub is_flipped: bool,

    /// Part of a found pair. Terminal.
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        !self.is_flipped
    }

    /// Face up, for any reason.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.is_flipped
    }

    /// Can this card be turned over by the player right now?
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    /// Do two cards form a pair?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }
}
