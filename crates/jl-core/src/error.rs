//! Error types for the game model.

use crate::board::{CellState, Position};
use crate::card::Suit;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating cards, the board, or the hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The suit and rank do not describe a card in the deck.
    #[error("invalid card: rank {rank} of {suit:?}")]
    InvalidCard {
        /// The requested suit.
        suit: Suit,
        /// The requested rank.
        rank: u8,
    },

    /// A short card code such as "7D" or "QH" could not be parsed.
    #[error("unrecognized card code: \"{0}\"")]
    UnknownCardCode(String),

    /// A grid position lies outside the 7x7 dungeon.
    #[error("position {0} is outside the dungeon")]
    OutOfBounds(Position),

    /// A hand slot lies outside the hand layout.
    #[error("hand slot ({row}, {col}) is outside the hand")]
    SlotOutOfBounds {
        /// Hand row.
        row: usize,
        /// Hand column.
        col: usize,
    },

    /// There is no card at the given position.
    #[error("no card at {0}")]
    EmptyCell(Position),

    /// The cell is not in the state the operation requires.
    #[error("cell {position} is {actual}, expected {expected}")]
    UnexpectedCellState {
        /// The cell that was inspected.
        position: Position,
        /// The state the operation needed.
        expected: CellState,
        /// The state the cell was actually in.
        actual: CellState,
    },

    /// Every hand slot is occupied.
    #[error("hand is full")]
    HandFull,

    /// The deck ran out while dealing the dungeon.
    #[error("deck exhausted while dealing at {0}")]
    DeckExhausted(Position),
}
