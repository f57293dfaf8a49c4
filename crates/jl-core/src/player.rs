//! The player token.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::card::Suit;
use crate::error::{CoreError, CoreResult};

/// The player: a Jack of some suit moving through the dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    suit: Suit,
    position: Position,
    skip_next_turn: bool,
}

impl Player {
    /// Create a player of the given suit standing in the centre of the dungeon.
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            position: Board::center(),
            skip_next_turn: false,
        }
    }

    /// The suit the player identifies with. Queens and Kings of this suit are friendly.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The player's current grid position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the player to a position on the grid.
    pub fn set_position(&mut self, position: Position) -> CoreResult<()> {
        if !position.in_bounds() {
            return Err(CoreError::OutOfBounds(position));
        }
        log::debug!("player moved from {} to {position}", self.position);
        self.position = position;
        Ok(())
    }

    /// Whether the player must sit out their next turn.
    pub fn skip_next_turn(&self) -> bool {
        self.skip_next_turn
    }

    /// Set or clear the skip-next-turn penalty.
    pub fn set_skip_next_turn(&mut self, skip: bool) {
        self.skip_next_turn = skip;
    }

    /// Whether the target cell is orthogonally adjacent to the player.
    ///
    /// Interaction range is advisory; the engine does not enforce it.
    pub fn can_interact(&self, target: Position) -> bool {
        self.position.is_adjacent(target)
    }
}
