//! Game controller: turns raw card selections into a finished game.
//!
//! [`GameController`] owns the configuration, the RNG, the display surface,
//! and at most one live [`Session`]. Hosts feed it three kinds of events:
//!
//! - `initialize(rows, cols)` when the players ask for a new board,
//! - `select_card(id)` for every card the players click, and
//! - delayed ticket deliveries ([`MatchCheck`], [`Announcement`]).
//!
//! ## Tickets
//!
//! The game pauses twice: after the second card of a pair is revealed (so
//! both players can study it) and again before the end-of-game announcement.
//! The controller never sleeps. Instead it hands the host a ticket carrying
//! the configured [`delay`](MatchCheck::delay); the host schedules it with
//! its own timer facility and delivers it back.
//!
//! Tickets are move-only, so a ticket cannot be delivered twice, and each
//! carries the generation of the session it was minted for. Delivering a
//! ticket from a game that has since been replaced by `initialize` is a
//! safe no-op. Dropping a [`MatchCheck`] on the floor stalls its game
//! permanently, which is why the outcomes that carry tickets are
//! `#[must_use]`.
//!
//! ## Example
//!
//! ```
//! use pairmatch::{GameConfig, GameController, NullSurface, SelectOutcome};
//!
//! let config = GameConfig::new(2, 2)
//!     .with_pair("Ada Lovelace", "images/ada.png")
//!     .with_pair("Alan Turing", "images/alan.png");
//! let mut game = GameController::new(config, NullSurface, 42);
//!
//! game.initialize(2, 2).unwrap();
//! let outcome = game.select_card(pairmatch::CardId::new(0));
//! assert!(matches!(outcome, SelectOutcome::Revealed));
//! ```

use std::time::Duration;

use crate::board::{Board, CardId};
use crate::config::{GameConfig, GridSize};
use crate::core::{GameResult, GameRng, Generation, Session};
use crate::error::GameError;
use crate::surface::DisplaySurface;

/// Ticket for a pending two-card comparison.
///
/// Minted when a selection completes a pair. The host waits
/// [`delay`](MatchCheck::delay) and then passes the ticket to
/// [`GameController::resolve_match`].
#[derive(Debug)]
#[must_use = "deliver this ticket to GameController::resolve_match after its delay"]
pub struct MatchCheck {
    generation: Generation,
    delay: Duration,
}

impl MatchCheck {
    /// How long the host should wait before delivering this ticket.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The session generation this ticket belongs to.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// Ticket for the end-of-game announcement.
///
/// Minted by the match that clears the board. The host waits
/// [`delay`](Announcement::delay) and then passes the ticket to
/// [`GameController::announce_result`].
#[derive(Debug)]
#[must_use = "deliver this ticket to GameController::announce_result after its delay"]
pub struct Announcement {
    generation: Generation,
    delay: Duration,
}

impl Announcement {
    /// How long the host should wait before delivering this ticket.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The session generation this ticket belongs to.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// What a card selection did.
#[derive(Debug)]
#[must_use = "a PairFlipped outcome carries the ticket that resolves the comparison"]
pub enum SelectOutcome {
    /// Nothing happened: no game, input locked, or the card was not
    /// selectable.
    Ignored,
    /// The card turned face-up as the first half of a comparison.
    Revealed,
    /// The card completed a pair; input is locked until the ticket
    /// comes back.
    PairFlipped(MatchCheck),
}

impl SelectOutcome {
    /// Extract the comparison ticket, if this selection minted one.
    pub fn ticket(self) -> Option<MatchCheck> {
        match self {
            SelectOutcome::PairFlipped(check) => Some(check),
            _ => None,
        }
    }
}

/// What a delivered comparison ticket did.
#[derive(Debug)]
#[must_use = "a Complete outcome carries the ticket that announces the result"]
pub enum ResolveOutcome {
    /// The ticket belonged to an abandoned game; nothing happened.
    Stale,
    /// The pair matched; the acting player scored and keeps the turn.
    Matched,
    /// The pair did not match; the cards went back face-down and the
    /// turn passed.
    Mismatched,
    /// The pair matched and cleared the board; the session is complete.
    Complete(Announcement),
}

impl ResolveOutcome {
    /// Extract the announcement ticket, if this resolution finished the game.
    pub fn announcement(self) -> Option<Announcement> {
        match self {
            ResolveOutcome::Complete(announcement) => Some(announcement),
            _ => None,
        }
    }
}

/// The orchestration layer of a two-player matching game.
///
/// Generic over its display surface, so browsers, terminals, and tests all
/// drive the same engine. Independent controllers share nothing; hosts can
/// run any number of games side by side.
pub struct GameController<S> {
    config: GameConfig,
    surface: S,
    rng: GameRng,
    session: Option<Session>,
    generation: Generation,
}

impl<S: DisplaySurface> GameController<S> {
    /// Create a controller with a deterministic seed.
    ///
    /// The configured default size is pushed to the surface immediately so
    /// hosts can pre-fill their size controls. No board is dealt until
    /// [`initialize`](GameController::initialize).
    pub fn new(config: GameConfig, surface: S, seed: u64) -> Self {
        Self::with_rng(config, surface, GameRng::new(seed))
    }

    /// Create a controller seeded from the operating system.
    pub fn from_entropy(config: GameConfig, surface: S) -> Self {
        Self::with_rng(config, surface, GameRng::from_entropy())
    }

    fn with_rng(config: GameConfig, mut surface: S, rng: GameRng) -> Self {
        surface.size_defaults(config.default_size);
        Self {
            config,
            surface,
            rng,
            session: None,
            generation: 0,
        }
    }

    /// The configuration this controller was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The live session, if a board has been dealt.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The display surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The display surface, mutably. Hosts that collect rendered output
    /// (tests, buffers) drain it through here.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Deal a fresh board and start a new game.
    ///
    /// Validates the request first: both dimensions must be at least 2, the
    /// cell count must be even, and the roster must hold enough pairs. A
    /// rejected request raises the reason on the surface's alert and leaves
    /// any running game untouched.
    ///
    /// Starting a new game abandons the previous one; its outstanding
    /// tickets become stale and deliver as no-ops.
    pub fn initialize(&mut self, rows: u32, cols: u32) -> Result<(), GameError> {
        let size = GridSize::new(rows, cols);

        if rows < 2 || cols < 2 || size.cell_count() % 2 != 0 {
            let err = GameError::InvalidGrid { rows, cols };
            log::warn!("rejected board request: {}", err);
            self.surface.alert(&err.to_string());
            return Err(err);
        }

        let required = size.cell_count() / 2;
        let available = self.config.pair_count();
        if required > available as u64 {
            let err = GameError::InsufficientPairs {
                required: required as usize,
                available,
            };
            log::warn!(
                "rejected {} board: needs {} pairs, roster has {}",
                size,
                required,
                available
            );
            self.surface.alert(&err.to_string());
            return Err(err);
        }

        self.generation += 1;
        let rule = self.config.match_rule.rule();
        let mut deal_rng = self.rng.fork();
        let board = Board::deal(size, &self.config, rule, &mut deal_rng);
        let session = Session::new(board, self.generation);

        log::info!(
            "dealt {} board: {} pairs, {} rule, generation {}",
            size,
            session.total_pairs(),
            rule.name(),
            self.generation
        );

        self.surface.scores_updated(session.scores());
        self.surface.turn_changed(session.current_player());
        self.surface.board_dealt(session.board());
        self.session = Some(session);
        Ok(())
    }

    /// Select a card.
    ///
    /// Ignored whenever the selection cannot mean anything: no game is
    /// running, input is locked behind a pending comparison, the card is
    /// off the board, already revealed, or already matched. A meaningful
    /// selection reveals the card; the second reveal of a turn locks input
    /// and mints the comparison ticket.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        let Some(session) = self.session.as_mut() else {
            log::debug!("ignored {}: no game in progress", id);
            return SelectOutcome::Ignored;
        };
        if !session.can_select(id) {
            log::debug!("ignored {}: locked or not selectable", id);
            return SelectOutcome::Ignored;
        }

        let pair_ready = session.flip_up(id);
        if let Some(card) = session.board().card(id) {
            self.surface.card_revealed(id, card);
        }

        if pair_ready {
            SelectOutcome::PairFlipped(MatchCheck {
                generation: session.generation(),
                delay: self.config.resolve_delay(),
            })
        } else {
            SelectOutcome::Revealed
        }
    }

    /// Deliver a comparison ticket and resolve the pending pair.
    ///
    /// Applies the configured match rule to the two pending cards. On a
    /// match the acting player scores and keeps the turn; on a mismatch the
    /// cards go back face-down and the turn passes. Either way input
    /// unlocks. The match that claims the final pair completes the session
    /// and returns the announcement ticket.
    pub fn resolve_match(&mut self, check: MatchCheck) -> ResolveOutcome {
        let Some(session) = self.session.as_mut() else {
            log::debug!("dropped comparison ticket: no game in progress");
            return ResolveOutcome::Stale;
        };
        if check.generation != session.generation() {
            log::debug!(
                "dropped comparison ticket from generation {}; current is {}",
                check.generation,
                session.generation()
            );
            return ResolveOutcome::Stale;
        }
        let Some([first, second]) = session.pending_pair() else {
            log::debug!("dropped comparison ticket: no pending pair");
            return ResolveOutcome::Stale;
        };

        let rule = self.config.match_rule.rule();
        let matched = {
            let board = session.board();
            match (board.card(first), board.card(second)) {
                (Some(a), Some(b)) => rule.is_match(a, b),
                _ => panic!("pending cards {} and {} are not on the board", first, second),
            }
        };

        if matched {
            let finished = session.apply_match();
            self.surface.scores_updated(session.scores());
            if finished {
                log::info!(
                    "board cleared in generation {}; scheduling announcement",
                    check.generation
                );
                return ResolveOutcome::Complete(Announcement {
                    generation: check.generation,
                    delay: self.config.announce_delay(),
                });
            }
            ResolveOutcome::Matched
        } else {
            session.apply_mismatch();
            self.surface.card_concealed(first);
            self.surface.card_concealed(second);
            self.surface.turn_changed(session.current_player());
            ResolveOutcome::Mismatched
        }
    }

    /// Deliver an announcement ticket and raise the final result.
    ///
    /// Compares the scores and alerts either "Player N wins with S pairs!"
    /// or "It's a tie!". Returns `None` for stale tickets.
    pub fn announce_result(&mut self, announcement: Announcement) -> Option<GameResult> {
        let Some(session) = self.session.as_ref() else {
            log::debug!("dropped announcement ticket: no game in progress");
            return None;
        };
        if announcement.generation != session.generation() {
            log::debug!(
                "dropped announcement ticket from generation {}; current is {}",
                announcement.generation,
                session.generation()
            );
            return None;
        }
        let result = session.result()?;

        let message = match result {
            GameResult::Winner(winner) => format!(
                "Player {} wins with {} pairs!",
                winner.number(),
                session.scores()[winner]
            ),
            GameResult::Tie => String::from("It's a tie!"),
        };
        log::info!("game complete: {}", message);
        self.surface.alert(&message);
        Some(result)
    }
}
