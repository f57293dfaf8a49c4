//! The 7x7 dungeon grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{CoreError, CoreResult};

/// Number of rows in the dungeon.
pub const GRID_ROWS: usize = 7;
/// Number of columns in the dungeon.
pub const GRID_COLS: usize = 7;

/// A (row, col) coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Position {
    /// Create a position. Bounds are checked when the position is used.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the position lies on the 7x7 grid.
    pub fn in_bounds(self) -> bool {
        self.row < GRID_ROWS && self.col < GRID_COLS
    }

    /// Returns true if `other` is directly above, below, left, or right of this position.
    pub fn is_adjacent(self, other: Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Whether a cell's card is hidden, available to act on, or done with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// The card has not been revealed yet.
    FaceDown,
    /// The card is revealed and can be acted on.
    FaceUp,
    /// The cell has been dealt with; usually empty.
    Resolved,
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FaceDown => write!(f, "face-down"),
            Self::FaceUp => write!(f, "face-up"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

/// One grid cell: an optional card plus its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The card in the cell, if any.
    pub card: Option<Card>,
    /// The cell's state.
    pub state: CellState,
}

impl Cell {
    /// An empty, resolved cell.
    pub const EMPTY: Cell = Cell {
        card: None,
        state: CellState::Resolved,
    };

    /// Returns true if the cell holds a face-up card that can be acted on.
    pub fn is_actionable(&self) -> bool {
        self.card.is_some() && self.state == CellState::FaceUp
    }
}

/// The dungeon grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; GRID_COLS]; GRID_ROWS],
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::EMPTY; GRID_COLS]; GRID_ROWS],
        }
    }

    /// The centre cell, where the red joker is dealt and the player starts.
    pub fn center() -> Position {
        Position::new(GRID_ROWS / 2, GRID_COLS / 2)
    }

    /// Get a cell.
    pub fn cell(&self, position: Position) -> CoreResult<&Cell> {
        if !position.in_bounds() {
            return Err(CoreError::OutOfBounds(position));
        }
        Ok(&self.cells[position.row][position.col])
    }

    fn cell_mut(&mut self, position: Position) -> CoreResult<&mut Cell> {
        if !position.in_bounds() {
            return Err(CoreError::OutOfBounds(position));
        }
        Ok(&mut self.cells[position.row][position.col])
    }

    /// The card at a position, if any.
    pub fn card_at(&self, position: Position) -> CoreResult<Option<Card>> {
        Ok(self.cell(position)?.card)
    }

    /// The state of the cell at a position.
    pub fn state_at(&self, position: Position) -> CoreResult<CellState> {
        Ok(self.cell(position)?.state)
    }

    /// Put a card into a cell with the given state, replacing whatever was there.
    pub fn place(&mut self, position: Position, card: Card, state: CellState) -> CoreResult<()> {
        *self.cell_mut(position)? = Cell {
            card: Some(card),
            state,
        };
        Ok(())
    }

    /// Overwrite a cell, returning its previous contents.
    pub fn set_cell(&mut self, position: Position, cell: Cell) -> CoreResult<Cell> {
        let slot = self.cell_mut(position)?;
        Ok(std::mem::replace(slot, cell))
    }

    /// Change a cell's state without touching its card.
    pub fn set_state(&mut self, position: Position, state: CellState) -> CoreResult<()> {
        self.cell_mut(position)?.state = state;
        Ok(())
    }

    /// Turn a face-down card face-up and return it.
    pub fn reveal(&mut self, position: Position) -> CoreResult<Card> {
        let cell = self.cell_mut(position)?;
        let card = cell.card.ok_or(CoreError::EmptyCell(position))?;
        if cell.state != CellState::FaceDown {
            return Err(CoreError::UnexpectedCellState {
                position,
                expected: CellState::FaceDown,
                actual: cell.state,
            });
        }
        cell.state = CellState::FaceUp;
        Ok(card)
    }

    /// Remove the card from a cell and mark the cell resolved.
    pub fn take(&mut self, position: Position) -> CoreResult<Card> {
        let cell = self.cell_mut(position)?;
        let card = cell.card.take().ok_or(CoreError::EmptyCell(position))?;
        cell.state = CellState::Resolved;
        Ok(card)
    }

    /// All positions holding a face-up card, row-major.
    pub fn actionable_positions(&self) -> Vec<Position> {
        Self::positions()
            .filter(|&p| self.cells[p.row][p.col].is_actionable())
            .collect()
    }

    /// Every grid position, row-major.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..GRID_ROWS).flat_map(|row| (0..GRID_COLS).map(move |col| Position::new(row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
