//! Core engine types: players, deterministic RNG, and the live session.
//!
//! These are the pieces that change while a game runs. Everything here is
//! display-agnostic; rendering concerns live behind the
//! [`DisplaySurface`](crate::surface::DisplaySurface) seam.

pub mod player;
pub mod rng;
pub mod session;

pub use player::{Player, PlayerMap, Scores};
pub use rng::GameRng;
pub use session::{FlipOutcome, FlipRecord, GameResult, Generation, Session, SessionPhase};
