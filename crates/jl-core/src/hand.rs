//! The player's hand: two rows of eight slots.
//!
//! Each row is kept compacted, so cards always occupy the leftmost slots.
//! Scans run row-major, which is also the order choices are presented in.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{CoreError, CoreResult};

/// Number of rows in the hand.
pub const HAND_ROWS: usize = 2;
/// Number of slots per hand row.
pub const HAND_COLS: usize = 8;

/// A slot coordinate in the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandSlot {
    /// Hand row.
    pub row: usize,
    /// Slot within the row.
    pub col: usize,
}

/// The cards the player is carrying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    rows: [[Option<Card>; HAND_COLS]; HAND_ROWS],
}

impl Hand {
    /// Create an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand by adding cards in order. Fails if there are more than 16.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> CoreResult<Self> {
        let mut hand = Self::new();
        for card in cards {
            hand.add(card)?;
        }
        Ok(hand)
    }

    /// Put a card into the first empty slot, row-major.
    pub fn add(&mut self, card: Card) -> CoreResult<HandSlot> {
        for (row, slots) in self.rows.iter_mut().enumerate() {
            if let Some(col) = slots.iter().position(Option::is_none) {
                slots[col] = Some(card);
                return Ok(HandSlot { row, col });
            }
        }
        Err(CoreError::HandFull)
    }

    /// Remove the first copy of `card`, compacting its row.
    ///
    /// Returns false if the card is not in the hand.
    pub fn remove(&mut self, card: &Card) -> bool {
        for slots in &mut self.rows {
            if let Some(col) = slots.iter().position(|c| c.as_ref() == Some(card)) {
                slots[col..].rotate_left(1);
                slots[HAND_COLS - 1] = None;
                return true;
            }
        }
        false
    }

    /// Discard every card, returning how many were held.
    pub fn clear(&mut self) -> usize {
        let count = self.len();
        self.rows = [[None; HAND_COLS]; HAND_ROWS];
        count
    }

    /// The card in a slot.
    pub fn get(&self, slot: HandSlot) -> CoreResult<Option<Card>> {
        self.rows
            .get(slot.row)
            .and_then(|r| r.get(slot.col))
            .copied()
            .ok_or(CoreError::SlotOutOfBounds {
                row: slot.row,
                col: slot.col,
            })
    }

    /// Occupied slots and their cards, row-major.
    pub fn iter_slots(&self) -> impl Iterator<Item = (HandSlot, Card)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, slots)| {
            slots
                .iter()
                .enumerate()
                .filter_map(move |(col, card)| card.map(|c| (HandSlot { row, col }, c)))
        })
    }

    /// The held cards, row-major.
    pub fn cards(&self) -> Vec<Card> {
        self.iter_slots().map(|(_, card)| card).collect()
    }

    /// Returns true if the card is held.
    pub fn contains(&self, card: &Card) -> bool {
        self.iter_slots().any(|(_, c)| c == *card)
    }

    /// Number of cards held.
    pub fn len(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Whether the hand is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len() == HAND_ROWS * HAND_COLS
    }
}
