//! Board construction and geometry.
//!
//! A [`Board`] is dealt once per game: a uniform sample of roster pairs is
//! materialized into cards according to the active match rule, the cards
//! are shuffled with Fisher-Yates, and each one takes the [`CardId`] of
//! its final cell. Positions are row-major with `CardId(0)` top-left.
//!
//! After the deal the board never changes shape; only the flip states of
//! its cards move.

use serde::{Deserialize, Serialize};

use crate::board::card::{Card, CardFace, CardId, PairId};
use crate::config::{GameConfig, GridSize};
use crate::core::GameRng;
use crate::rules::MatchRule;

/// A dealt grid of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: u32,
    cols: u32,
    cards: Vec<Card>,
}

impl Board {
    /// Deal a fresh board.
    ///
    /// Draws `rows * cols / 2` distinct pairs from the roster uniformly,
    /// materializes each as the two cards the rule calls for, and shuffles
    /// them across the grid. Callers are responsible for validating the
    /// dimensions and roster size first; this panics on a setup the
    /// controller should have rejected.
    pub(crate) fn deal(
        size: GridSize,
        config: &GameConfig,
        rule: &dyn MatchRule,
        rng: &mut GameRng,
    ) -> Self {
        let cells = size.cell_count() as usize;
        assert!(cells % 2 == 0, "Board must hold an even number of cards");

        let pair_count = cells / 2;
        assert!(
            pair_count <= config.pair_count(),
            "A {} board needs {} pairs but the roster has {}",
            size,
            pair_count,
            config.pair_count()
        );

        let picked = rng.sample_indices(config.pair_count(), pair_count);

        let mut blanks = Vec::with_capacity(cells);
        for index in picked {
            let pair = PairId::new(index as u32);
            let def = &config.pairs[index];
            for kind in rule.deal_kinds() {
                blanks.push((pair, kind, CardFace::for_kind(kind, def)));
            }
        }

        rng.shuffle(&mut blanks);

        let cards = blanks
            .into_iter()
            .enumerate()
            .map(|(cell, (pair, kind, face))| Card::new(CardId::new(cell as u32), pair, kind, face))
            .collect();

        Self {
            rows: size.rows,
            cols: size.cols,
            cards,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Dimensions of this board.
    #[must_use]
    pub fn size(&self) -> GridSize {
        GridSize::new(self.rows, self.cols)
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of pairs dealt onto the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// All cards in row-major order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.raw() as usize)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.raw() as usize)
    }

    /// Look up a card by cell coordinates.
    #[must_use]
    pub fn card_at(&self, row: u32, col: u32) -> Option<&Card> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.card(CardId::new(row * self.cols + col))
    }

    /// Cell coordinates of a card, as `(row, col)`.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<(u32, u32)> {
        if (id.raw() as usize) < self.cards.len() {
            Some((id.raw() / self.cols, id.raw() % self.cols))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{IdenticalTwinMatch, MatchRuleKind, SplitKindMatch};
    use crate::board::CardKind;
    use rustc_hash::FxHashMap;

    fn roster(pairs: usize) -> GameConfig {
        let mut config = GameConfig::new(4, 4);
        for i in 0..pairs {
            config = config.with_pair(format!("Person {i}"), format!("images/{i}.png"));
        }
        config
    }

    fn deal(rows: u32, cols: u32, pairs: usize, seed: u64) -> Board {
        let config = roster(pairs);
        let mut rng = GameRng::new(seed);
        Board::deal(GridSize::new(rows, cols), &config, &SplitKindMatch, &mut rng)
    }

    #[test]
    fn test_deal_fills_the_grid() {
        let board = deal(4, 4, 10, 42);

        assert_eq!(board.card_count(), 16);
        assert_eq!(board.total_pairs(), 8);
        assert_eq!(board.size(), GridSize::new(4, 4));
    }

    #[test]
    fn test_deal_ids_are_row_major_cells() {
        let board = deal(3, 4, 8, 42);

        for (cell, card) in board.cards().iter().enumerate() {
            assert_eq!(card.id, CardId::new(cell as u32));
        }
    }

    #[test]
    fn test_deal_every_pair_has_both_halves() {
        let board = deal(4, 4, 12, 7);

        let mut kinds: FxHashMap<PairId, Vec<CardKind>> = FxHashMap::default();
        for card in board.cards() {
            kinds.entry(card.pair).or_default().push(card.kind);
        }

        assert_eq!(kinds.len(), 8, "eight distinct pairs on a 4x4 board");
        for halves in kinds.values() {
            assert_eq!(halves.len(), 2);
            assert!(halves.contains(&CardKind::Name));
            assert!(halves.contains(&CardKind::Portrait));
        }
    }

    #[test]
    fn test_deal_twin_rule_deals_identical_kinds() {
        let config = roster(6).with_match_rule(MatchRuleKind::IdenticalTwin);
        let mut rng = GameRng::new(3);
        let board = Board::deal(GridSize::new(2, 4), &config, &IdenticalTwinMatch, &mut rng);

        assert!(board.cards().iter().all(|c| c.kind == CardKind::Twin));
        for card in board.cards() {
            assert!(card.face.name.is_some());
            assert!(card.face.portrait.is_some());
        }
    }

    #[test]
    fn test_deal_faces_come_from_the_roster() {
        let config = roster(10);
        let mut rng = GameRng::new(11);
        let board = Board::deal(GridSize::new(4, 4), &config, &SplitKindMatch, &mut rng);

        for card in board.cards() {
            let def = config.pair(card.pair).expect("dealt pair is in the roster");
            match card.kind {
                CardKind::Name => assert_eq!(card.face.name.as_deref(), Some(def.name.as_str())),
                CardKind::Portrait => {
                    assert_eq!(card.face.portrait.as_deref(), Some(def.portrait.as_str()));
                }
                CardKind::Twin => unreachable!("split deal never produces twins"),
            }
        }
    }

    #[test]
    fn test_deal_starts_face_down() {
        let board = deal(4, 4, 8, 42);
        assert!(board.cards().iter().all(Card::is_face_down));
    }

    #[test]
    fn test_deal_is_deterministic_per_seed() {
        let a = deal(4, 4, 10, 99);
        let b = deal(4, 4, 10, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_varies_across_seeds() {
        let a = deal(4, 4, 10, 1);
        let b = deal(4, 4, 10, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_card_at_and_position_agree() {
        let board = deal(3, 4, 6, 5);

        for row in 0..3 {
            for col in 0..4 {
                let card = board.card_at(row, col).expect("cell is on the board");
                assert_eq!(board.position(card.id), Some((row, col)));
            }
        }

        assert!(board.card_at(3, 0).is_none());
        assert!(board.card_at(0, 4).is_none());
        assert!(board.position(CardId::new(12)).is_none());
    }

    #[test]
    #[should_panic(expected = "even number of cards")]
    fn test_deal_rejects_odd_cell_count() {
        let config = roster(8);
        let mut rng = GameRng::new(0);
        let _ = Board::deal(GridSize::new(3, 3), &config, &SplitKindMatch, &mut rng);
    }

    #[test]
    #[should_panic(expected = "needs 8 pairs but the roster has 3")]
    fn test_deal_rejects_undersized_roster() {
        let config = roster(3);
        let mut rng = GameRng::new(0);
        let _ = Board::deal(GridSize::new(4, 4), &config, &SplitKindMatch, &mut rng);
    }
}
