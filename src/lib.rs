//! # pairmatch
//!
//! A two-player memory matching (concentration) game engine.
//!
//! A configured roster of name/portrait pairs is dealt face-down onto a
//! grid; players take turns revealing two cards, keeping the turn and a
//! point on a match, passing the turn on a mismatch. The player with more
//! matched pairs when the board is cleared wins.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engine never draws and never sleeps. Rendering
//!    goes through the `DisplaySurface` trait; delays travel as tickets the
//!    host schedules with its own timer facility.
//!
//! 2. **Deterministic**: Deals are driven by a seeded ChaCha8 RNG with
//!    per-game forking, so any game is reproducible from its seed.
//!
//! 3. **Configuration Over Convention**: The roster, default board size,
//!    match rule, and pacing all come from a JSON `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Players, deterministic RNG, the live session
//! - `board`: Cards, the flip lifecycle, the dealt grid
//! - `rules`: Pluggable match rules
//! - `config`: JSON configuration loading
//! - `controller`: The orchestration layer hosts drive
//! - `surface`: The display seam
//! - `error`: Configuration and setup errors
//!
//! ## Getting Started
//!
//! ```
//! use pairmatch::{GameConfig, GameController, NullSurface};
//!
//! let config = GameConfig::new(2, 2)
//!     .with_pair("Ada Lovelace", "images/ada.png")
//!     .with_pair("Alan Turing", "images/alan.png");
//!
//! let mut game = GameController::new(config, NullSurface, 42);
//! game.initialize(2, 2).unwrap();
//! assert_eq!(game.session().unwrap().total_pairs(), 2);
//! ```

pub mod board;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod rules;
pub mod surface;

// Re-export commonly used types
pub use crate::core::{
    FlipOutcome, FlipRecord, GameResult, GameRng, Generation, Player, PlayerMap, Scores, Session,
    SessionPhase,
};

pub use crate::board::{Board, Card, CardFace, CardId, CardKind, FlipState, PairId};

pub use crate::config::{GameConfig, GridSize, PairDef};

pub use crate::controller::{
    Announcement, GameController, MatchCheck, ResolveOutcome, SelectOutcome,
};

pub use crate::error::{ConfigError, GameError};

pub use crate::rules::{IdenticalTwinMatch, MatchRule, MatchRuleKind, SplitKindMatch};

pub use crate::surface::{DisplaySurface, NullSurface};
