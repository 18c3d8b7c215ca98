//! Live state of a single game.
//!
//! A [`Session`] owns everything that changes while a game runs: the dealt
//! board, whose turn it is, both scores, the pending two-card comparison,
//! and the flip history. It enforces the mechanical invariants (at most
//! two cards pending, input locked while a comparison waits, matched cards
//! frozen) and leaves the judgement calls to the controller: the session
//! never consults a match rule and never talks to a display.
//!
//! Sessions are tagged with the [`Generation`] they were created under so
//! that deferred work scheduled against an abandoned game can be detected
//! and dropped.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Card, CardId};
use crate::core::player::{Player, Scores};

/// Monotonic identifier of a game within a controller.
///
/// Bumped every time a new board is dealt; deferred work carries the
/// generation it was scheduled under.
pub type Generation = u64;

/// Progress of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Cards remain to be matched.
    InProgress,
    /// Every pair has been claimed.
    Complete,
}

/// How a resolved comparison turned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipOutcome {
    Matched,
    Mismatched,
}

/// One resolved two-card comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipRecord {
    /// 0-based position of this comparison in the game.
    pub sequence: u32,
    /// The player who flipped both cards.
    pub player: Player,
    /// The cards compared, in flip order.
    pub cards: [CardId; 2],
    /// The outcome.
    pub outcome: FlipOutcome,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player claimed more pairs.
    Winner(Player),
    /// Both players claimed the same number of pairs.
    Tie,
}

impl GameResult {
    /// The winning player, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(player) => Some(*player),
            GameResult::Tie => None,
        }
    }
}

/// The full mutable state of one game.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    generation: Generation,
    current_player: Player,
    scores: Scores,
    pending: SmallVec<[CardId; 2]>,
    matched_pairs: usize,
    locked: bool,
    phase: SessionPhase,
    history: Vec<FlipRecord>,
}

impl Session {
    /// Start a session on a freshly dealt board. Player one moves first.
    pub(crate) fn new(board: Board, generation: Generation) -> Self {
        Self {
            board,
            generation,
            current_player: Player::One,
            scores: Scores::with_default(),
            pending: SmallVec::new(),
            matched_pairs: 0,
            locked: false,
            phase: SessionPhase::InProgress,
            history: Vec::new(),
        }
    }

    /// The dealt board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The generation this session was dealt under.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Matched-pair tallies for both players.
    #[must_use]
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Pairs claimed so far, by either player.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs dealt onto the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.board.total_pairs()
    }

    /// Cards revealed and awaiting comparison, in flip order.
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    /// The two pending cards, once a comparison is ready.
    #[must_use]
    pub fn pending_pair(&self) -> Option<[CardId; 2]> {
        if self.pending.len() == 2 {
            Some([self.pending[0], self.pending[1]])
        } else {
            None
        }
    }

    /// Whether selections are currently ignored while a comparison waits.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Progress of this session.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether every pair has been claimed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    /// Every resolved comparison so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[FlipRecord] {
        &self.history
    }

    /// Whether selecting `id` would do anything right now.
    ///
    /// False while the pending comparison is being studied, for cards not
    /// on the board, and for cards already revealed or matched.
    #[must_use]
    pub fn can_select(&self, id: CardId) -> bool {
        !self.locked && self.board.card(id).is_some_and(|card| card.is_face_down())
    }

    /// The outcome, once the session is complete.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.phase != SessionPhase::Complete {
            return None;
        }
        let one = self.scores[Player::One];
        let two = self.scores[Player::Two];
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Tie,
        })
    }

    /// Reveal a card and add it to the pending comparison.
    ///
    /// Returns true when this reveal filled the pair and locked input.
    /// Panics if called while locked or on a card that is not face-down;
    /// callers are expected to check [`Session::can_select`] first.
    pub(crate) fn flip_up(&mut self, id: CardId) -> bool {
        assert!(!self.locked, "Cannot flip while a comparison is pending");
        let card = match self.board.card_mut(id) {
            Some(card) => card,
            None => panic!("{} is not on this board", id),
        };
        card.reveal();
        self.pending.push(id);
        if self.pending.len() == 2 {
            self.locked = true;
        }
        self.locked
    }

    /// Resolve the pending comparison as a match for the current player.
    ///
    /// Both cards freeze face-up, the current player scores, and the turn
    /// stays with them. Returns true when this match completed the board.
    pub(crate) fn apply_match(&mut self) -> bool {
        let pair = self.take_pending();
        for id in pair {
            self.card_mut_checked(id).mark_matched();
        }
        self.scores[self.current_player] += 1;
        self.matched_pairs += 1;
        self.record(pair, FlipOutcome::Matched);
        self.locked = false;
        if self.matched_pairs == self.total_pairs() {
            self.phase = SessionPhase::Complete;
        }
        self.is_complete()
    }

    /// Resolve the pending comparison as a mismatch.
    ///
    /// Both cards return face-down and the turn passes to the other player.
    pub(crate) fn apply_mismatch(&mut self) {
        let pair = self.take_pending();
        for id in pair {
            self.card_mut_checked(id).conceal();
        }
        self.record(pair, FlipOutcome::Mismatched);
        self.current_player = self.current_player.other();
        self.locked = false;
    }

    fn take_pending(&mut self) -> [CardId; 2] {
        assert_eq!(self.pending.len(), 2, "No pending pair to resolve");
        let pair = [self.pending[0], self.pending[1]];
        self.pending.clear();
        pair
    }

    fn card_mut_checked(&mut self, id: CardId) -> &mut Card {
        match self.board.card_mut(id) {
            Some(card) => card,
            None => panic!("{} is not on this board", id),
        }
    }

    fn record(&mut self, cards: [CardId; 2], outcome: FlipOutcome) {
        let sequence = self.history.len() as u32;
        self.history.push(FlipRecord {
            sequence,
            player: self.current_player,
            cards,
            outcome,
        });
    }
}
