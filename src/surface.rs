//! Display surface trait.
//!
//! The engine never draws anything. Every visible consequence of play is
//! pushed through a [`DisplaySurface`] the host hands to the controller:
//! a DOM renderer in the browser, a TUI, or a recording buffer in tests. All
//! methods default to no-ops so a surface only implements the
//! notifications it renders.
//!
//! Notifications arrive in gameplay order and carry enough data to render
//! without reaching back into the engine; [`Card`] values include their
//! face content for exactly this reason.

use crate::board::{Board, Card, CardId};
use crate::config::GridSize;
use crate::core::{Player, Scores};

/// Receiver for everything a player should see.
///
/// Implementations should render and return quickly; the controller calls
/// these synchronously in the middle of state transitions.
pub trait DisplaySurface {
    /// The configuration's default board size, offered before the first
    /// game. Sent once, when the controller is created.
    fn size_defaults(&mut self, size: GridSize) {
        let _ = size;
    }

    /// A fresh board was dealt. Every card in it is face-down; faces are
    /// included so the surface can build its cells up front.
    fn board_dealt(&mut self, board: &Board) {
        let _ = board;
    }

    /// A card turned face-up.
    fn card_revealed(&mut self, id: CardId, card: &Card) {
        let _ = (id, card);
    }

    /// A card turned back face-down after a mismatch.
    fn card_concealed(&mut self, id: CardId) {
        let _ = id;
    }

    /// A score changed. Sent with both tallies on every change and on
    /// every fresh deal.
    fn scores_updated(&mut self, scores: &Scores) {
        let _ = scores;
    }

    /// The turn indicator should now show this player.
    fn turn_changed(&mut self, player: Player) {
        let _ = player;
    }

    /// A blocking message for the players: a rejected board request or
    /// the end-of-game announcement.
    fn alert(&mut self, message: &str) {
        let _ = message;
    }
}

/// A surface that renders nothing.
///
/// Useful for headless simulations and tests that only care about state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl DisplaySurface for NullSurface {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_surface_accepts_everything() {
        let mut surface = NullSurface;
        surface.size_defaults(GridSize::new(4, 4));
        surface.turn_changed(Player::One);
        surface.alert("It's a tie!");
    }
}
