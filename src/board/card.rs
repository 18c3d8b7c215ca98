//! Cards and their flip lifecycle.
//!
//! A dealt board is a flat list of [`Card`]s. Each card remembers the
//! roster pair it came from ([`PairId`]), which half of the pair it shows
//! ([`CardKind`]), and where it is in its flip lifecycle ([`FlipState`]).
//!
//! The lifecycle only ever moves forward through a match:
//! face-down cards can be revealed, revealed cards can be concealed again
//! on a mismatch, and matched cards are frozen face-up for the rest of
//! the game.

use serde::{Deserialize, Serialize};

use crate::config::PairDef;

/// Unique identifier for a card on the board.
///
/// Card IDs are board positions in row-major order: the card in the top-left
/// cell is `CardId(0)`. IDs are only meaningful for the board that dealt them.
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
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier of a roster pair.
///
/// This is the index of the pair in the configured roster, so the two
/// cards dealt from roster entry 3 both carry `PairId(3)`.
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

/// Which half of a roster pair a card shows.
///
/// Under the classic rule a pair is dealt as one `Name` card and one
/// `Portrait` card. Under the identical-twin rule both cards are `Twin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    /// Shows the pair's name text.
    Name,
    /// Shows the pair's portrait image.
    Portrait,
    /// Shows both halves; used when a pair is dealt as two identical cards.
    Twin,
}

/// Flip lifecycle of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlipState {
    /// Face content hidden; the card can be selected.
    FaceDown,
    /// Revealed and waiting in the pending comparison.
    FaceUp,
    /// Claimed by a successful match; stays revealed forever.
    Matched,
}

/// Renderable face content of a card.
///
/// Carried by every card so a display surface can draw the board without
/// consulting the configuration. A field is `None` when the card's kind
/// does not show that half.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    /// Name text, if this card shows one.
    pub name: Option<String>,
    /// Portrait image reference, if this card shows one.
    pub portrait: Option<String>,
}

impl CardFace {
    /// Build the face a card of `kind` shows for the given roster pair.
    #[must_use]
    pub fn for_kind(kind: CardKind, def: &PairDef) -> Self {
        match kind {
            CardKind::Name => Self {
                name: Some(def.name.clone()),
                portrait: None,
            },
            CardKind::Portrait => Self {
                name: None,
                portrait: Some(def.portrait.clone()),
            },
            CardKind::Twin => Self {
                name: Some(def.name.clone()),
                portrait: Some(def.portrait.clone()),
            },
        }
    }
}

/// A single card on a dealt board.
///
/// The flip state is private so it can only move through the legal
/// transitions; everything else is plain data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Board position of this card.
    pub id: CardId,

    /// Roster pair this card was dealt from.
    pub pair: PairId,

    /// Which half of the pair this card shows.
    pub kind: CardKind,

    /// Renderable face content.
    pub face: CardFace,

    state: FlipState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub(crate) fn new(id: CardId, pair: PairId, kind: CardKind, face: CardFace) -> Self {
        Self {
            id,
            pair,
            kind,
            face,
            state: FlipState::FaceDown,
        }
    }

    /// Get the current flip state.
    #[must_use]
    pub fn state(&self) -> FlipState {
        self.state
    }

    /// Whether this card is face-down and selectable.
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.state == FlipState::FaceDown
    }

    /// Whether this card has been claimed by a match.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == FlipState::Matched
    }

    /// Turn a face-down card face-up.
    pub(crate) fn reveal(&mut self) {
        assert_eq!(
            self.state,
            FlipState::FaceDown,
            "{} cannot be revealed from {:?}",
            self.id,
            self.state
        );
        self.state = FlipState::FaceUp;
    }

    /// Turn a revealed, unmatched card back face-down.
    pub(crate) fn conceal(&mut self) {
        assert_eq!(
            self.state,
            FlipState::FaceUp,
            "{} cannot be concealed from {:?}",
            self.id,
            self.state
        );
        self.state = FlipState::FaceDown;
    }

    /// Freeze a revealed card as part of a completed pair.
    pub(crate) fn mark_matched(&mut self) {
        assert_eq!(
            self.state,
            FlipState::FaceUp,
            "{} cannot be matched from {:?}",
            self.id,
            self.state
        );
        self.state = FlipState::Matched;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_def() -> PairDef {
        PairDef {
            name: "Ada Lovelace".to_string(),
            portrait: "images/ada.png".to_string(),
        }
    }

    fn sample_card(kind: CardKind) -> Card {
        let def = sample_def();
        Card::new(CardId::new(0), PairId::new(0), kind, CardFace::for_kind(kind, &def))
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", CardId::new(7)), "Card(7)");
        assert_eq!(format!("{}", PairId::new(3)), "Pair(3)");
    }

    #[test]
    fn test_face_for_name_kind() {
        let face = CardFace::for_kind(CardKind::Name, &sample_def());
        assert_eq!(face.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(face.portrait, None);
    }

    #[test]
    fn test_face_for_portrait_kind() {
        let face = CardFace::for_kind(CardKind::Portrait, &sample_def());
        assert_eq!(face.name, None);
        assert_eq!(face.portrait.as_deref(), Some("images/ada.png"));
    }

    #[test]
    fn test_face_for_twin_kind_shows_both() {
        let face = CardFace::for_kind(CardKind::Twin, &sample_def());
        assert!(face.name.is_some());
        assert!(face.portrait.is_some());
    }

    #[test]
    fn test_flip_lifecycle() {
        let mut card = sample_card(CardKind::Name);
        assert!(card.is_face_down());

        card.reveal();
        assert_eq!(card.state(), FlipState::FaceUp);

        card.conceal();
        assert!(card.is_face_down());

        card.reveal();
        card.mark_matched();
        assert!(card.is_matched());
    }

    #[test]
    #[should_panic(expected = "cannot be revealed")]
    fn test_reveal_twice_panics() {
        let mut card = sample_card(CardKind::Name);
        card.reveal();
        card.reveal();
    }

    #[test]
    #[should_panic(expected = "cannot be concealed")]
    fn test_matched_card_cannot_be_concealed() {
        let mut card = sample_card(CardKind::Portrait);
        card.reveal();
        card.mark_matched();
        card.conceal();
    }

    #[test]
    #[should_panic(expected = "cannot be matched")]
    fn test_face_down_card_cannot_be_matched() {
        let mut card = sample_card(CardKind::Portrait);
        card.mark_matched();
    }
}
