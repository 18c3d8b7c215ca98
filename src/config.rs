//! Game configuration loading.
//!
//! A configuration is a small JSON artifact with the pair roster and the
//! default board size, plus optional tuning knobs:
//!
//! ```json
//! {
//!   "defaultSize": { "rows": 4, "cols": 4 },
//!   "pairs": [
//!     { "name": "Ada Lovelace", "portrait": "images/ada.png" }
//!   ],
//!   "matchRule": "splitKind",
//!   "resolveDelayMs": 1000,
//!   "announceDelayMs": 500
//! }
//! ```
//!
//! `matchRule` and the delays are optional and default to the classic
//! behavior. Load from disk with [`GameConfig::load`], from an in-memory
//! string with [`GameConfig::from_json_str`], or build programmatically
//! with [`GameConfig::new`] and the `with_*` methods.
//!
//! Loading never fails on roster contents; suspicious rosters (duplicate
//! names, no pairs at all) are only logged, and board setup reports the
//! hard limits when a game is actually requested.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use rustc_hash::FxHashSet;

use crate::board::PairId;
use crate::error::ConfigError;
use crate::rules::MatchRuleKind;

/// Board dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
}

impl GridSize {
    /// Create a new grid size.
    #[must_use]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells, widened so absurd dimensions cannot overflow.
    #[must_use]
    pub const fn cell_count(self) -> u64 {
        self.rows as u64 * self.cols as u64
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// One matchable pair in the roster: a name and a portrait image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDef {
    /// Display name shown on the name card.
    pub name: String,
    /// Image reference shown on the portrait card.
    pub portrait: String,
}

fn default_resolve_delay_ms() -> u64 {
    1000
}

fn default_announce_delay_ms() -> u64 {
    500
}

/// Static game configuration.
///
/// Holds the full pair roster and the defaults a host needs to seed its
/// size inputs. The roster is the pool boards draw from; a board only ever
/// uses a subset of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Board size offered to players before they pick their own.
    pub default_size: GridSize,

    /// Pair roster. Boards draw a uniform subset of these.
    pub pairs: Vec<PairDef>,

    /// How dealt pairs are compared.
    #[serde(default)]
    pub match_rule: MatchRuleKind,

    /// Pause between the second reveal and the comparison outcome, in
    /// milliseconds. Both players study the cards during this window.
    #[serde(default = "default_resolve_delay_ms")]
    pub resolve_delay_ms: u64,

    /// Pause between the final match and the result announcement, in
    /// milliseconds.
    #[serde(default = "default_announce_delay_ms")]
    pub announce_delay_ms: u64,
}

impl GameConfig {
    /// Create a configuration with an empty roster.
    #[must_use]
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            default_size: GridSize::new(rows, cols),
            pairs: Vec::new(),
            match_rule: MatchRuleKind::default(),
            resolve_delay_ms: default_resolve_delay_ms(),
            announce_delay_ms: default_announce_delay_ms(),
        }
    }

    /// Add a pair to the roster (builder pattern).
    #[must_use]
    pub fn with_pair(mut self, name: impl Into<String>, portrait: impl Into<String>) -> Self {
        self.pairs.push(PairDef {
            name: name.into(),
            portrait: portrait.into(),
        });
        self
    }

    /// Set the match rule (builder pattern).
    #[must_use]
    pub fn with_match_rule(mut self, rule: MatchRuleKind) -> Self {
        self.match_rule = rule;
        self
    }

    /// Set the comparison pause in milliseconds (builder pattern).
    #[must_use]
    pub fn with_resolve_delay_ms(mut self, millis: u64) -> Self {
        self.resolve_delay_ms = millis;
        self
    }

    /// Set the announcement pause in milliseconds (builder pattern).
    #[must_use]
    pub fn with_announce_delay_ms(mut self, millis: u64) -> Self {
        self.announce_delay_ms = millis;
        self
    }

    /// Load a configuration from a JSON file.
    ///
    /// Failures are logged as well as returned, so hosts that can only
    /// surface a broken-page state still leave a trace of what went wrong.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            log::error!("error loading config from {}: {}", path.display(), err);
            ConfigError::from(err)
        })?;
        Self::from_json_str(&raw).map_err(|err| {
            log::error!("error loading config from {}: {}", path.display(), err);
            err
        })
    }

    /// Parse a configuration from a JSON string.
    ///
    /// Hosts that fetch their config over the network land here.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.log_roster_warnings();
        Ok(config)
    }

    /// Number of pairs in the roster.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Look up a roster pair by ID.
    #[must_use]
    pub fn pair(&self, id: PairId) -> Option<&PairDef> {
        self.pairs.get(id.raw() as usize)
    }

    /// Pause between the second reveal and the comparison outcome.
    #[must_use]
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }

    /// Pause between the final match and the result announcement.
    #[must_use]
    pub fn announce_delay(&self) -> Duration {
        Duration::from_millis(self.announce_delay_ms)
    }

    fn log_roster_warnings(&self) {
        if self.pairs.is_empty() {
            log::warn!("configured roster has no pairs; every board request will be rejected");
            return;
        }

        let mut seen = FxHashSet::default();
        for def in &self.pairs {
            if !seen.insert(def.name.as_str()) {
                log::warn!(
                    "roster name {:?} appears more than once; matching treats the entries as distinct pairs",
                    def.name
                );
            }
        }
    }
}
