//! Error types for configuration loading and game setup.
//!
//! Two small taxonomies cover the fallible edges of the crate:
//!
//! - [`ConfigError`] wraps the I/O and parse failures that can occur while
//!   loading a [`GameConfig`](crate::config::GameConfig) from disk or from
//!   a raw JSON string.
//! - [`GameError`] covers rejected game setups. Its `Display` output is the
//!   exact text shown to players, so controllers can forward it to an alert
//!   verbatim.
//!
//! Everything past setup is infallible by construction: selections that make
//! no sense in the current state are ignored rather than reported.

use thiserror::Error;

/// Failure while loading or parsing a game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file was read but is not valid JSON for [`GameConfig`]
    /// (missing fields, wrong types, trailing garbage).
    ///
    /// [`GameConfig`]: crate::config::GameConfig
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rejected game setup.
///
/// Returned by [`GameController::initialize`] when the requested board cannot
/// be built. The running session (if any) is left untouched.
///
/// [`GameController::initialize`]: crate::controller::GameController::initialize
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The roster does not hold enough pairs to fill the requested board.
    #[error("Not enough pairs available. Maximum pairs: {available}")]
    InsufficientPairs {
        /// Pairs the requested board needs (`rows * cols / 2`).
        required: usize,
        /// Pairs the roster actually holds.
        available: usize,
    },

    /// The requested dimensions cannot form a playable board.
    ///
    /// A board is playable when both dimensions are at least 2 and the cell
    /// count is even, so every card can have a partner.
    #[error("Invalid board size: {rows}x{cols}. Each side must be at least 2 and the total card count even.")]
    InvalidGrid { rows: u32, cols: u32 },
}
