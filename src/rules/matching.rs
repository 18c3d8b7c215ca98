//! Match rules that decide when two revealed cards belong together.
//!
//! The fixed part of the game (flip, compare, score, pass the turn) lives
//! in the controller. What counts as a matching pair is the pluggable
//! part: a [`MatchRule`] decides both how a roster pair is dealt onto the
//! board and whether two revealed cards complete each other.
//!
//! Two rules ship with the engine:
//! - [`SplitKindMatch`]: a pair is a name card plus a portrait card, and
//!   only opposite kinds match. Two name cards of the same person do not.
//! - [`IdenticalTwinMatch`]: a pair is two identical cards; sharing the
//!   pair is enough.

use serde::{Deserialize, Serialize};

use crate::board::{Card, CardKind};

/// Strategy for dealing and comparing pairs.
///
/// Implementations must be symmetric (`is_match(a, b) == is_match(b, a)`)
/// and must accept any two-card combination the deal can produce.
pub trait MatchRule {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// The two card kinds a roster pair is dealt as.
    fn deal_kinds(&self) -> [CardKind; 2];

    /// Whether two revealed cards complete a pair.
    fn is_match(&self, a: &Card, b: &Card) -> bool;
}

/// Classic rule: a pair is one name card and one portrait card.
///
/// Cards match when they come from the same roster pair and show opposite
/// halves. Revealing the same half twice is always a mismatch, so a board
/// dealt under this rule has exactly one partner for every card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplitKindMatch;

impl MatchRule for SplitKindMatch {
    fn name(&self) -> &'static str {
        "split-kind"
    }

    fn deal_kinds(&self) -> [CardKind; 2] {
        [CardKind::Name, CardKind::Portrait]
    }

    fn is_match(&self, a: &Card, b: &Card) -> bool {
        a.pair == b.pair && a.kind != b.kind
    }
}

/// Twin rule: a pair is two identical cards showing both halves.
///
/// Cards match whenever they come from the same roster pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdenticalTwinMatch;

impl MatchRule for IdenticalTwinMatch {
    fn name(&self) -> &'static str {
        "identical-twin"
    }

    fn deal_kinds(&self) -> [CardKind; 2] {
        [CardKind::Twin, CardKind::Twin]
    }

    fn is_match(&self, a: &Card, b: &Card) -> bool {
        a.pair == b.pair
    }
}

/// Configurable choice of match rule.
///
/// This is the serde-facing selector used in configuration files; call
/// [`MatchRuleKind::rule`] to get the strategy it names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchRuleKind {
    /// [`SplitKindMatch`], the classic name-plus-portrait rule.
    #[default]
    SplitKind,
    /// [`IdenticalTwinMatch`], two identical cards per pair.
    IdenticalTwin,
}

impl MatchRuleKind {
    /// Get the match rule this kind names.
    #[must_use]
    pub fn rule(self) -> &'static dyn MatchRule {
        match self {
            MatchRuleKind::SplitKind => &SplitKindMatch,
            MatchRuleKind::IdenticalTwin => &IdenticalTwinMatch,
        }
    }
}
