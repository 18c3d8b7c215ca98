//! Board system: cards, the flip lifecycle, and the dealt grid.
//!
//! ## Key Types
//!
//! - `CardId`: Board position of a card, row-major from top-left
//! - `PairId`: Roster pair a card was dealt from
//! - `CardKind` / `CardFace`: Which half of the pair a card shows, and
//!   the renderable content for it
//! - `FlipState`: Face-down, face-up, or matched
//! - `Board`: The dealt grid itself

pub mod card;
pub mod grid;

pub use card::{Card, CardFace, CardId, CardKind, FlipState, PairId};
pub use grid::Board;
