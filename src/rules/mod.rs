//! Match rules: the pluggable judgement of when two cards pair up.
//!
//! The controller asks a `MatchRule` two questions: how a roster pair is
//! dealt onto the board, and whether two revealed cards complete each
//! other. Configurations pick a rule with `MatchRuleKind`.

pub mod matching;

pub use matching::{IdenticalTwinMatch, MatchRule, MatchRuleKind, SplitKindMatch};
