//! The explicit game-state aggregate that every operation borrows.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::action::{CardAction, classify};
use crate::board::{Board, CellState, Position};
use crate::card::Card;
use crate::config::GameConfig;
use crate::deck::deal_dungeon;
use crate::error::{CoreError, CoreResult};
use crate::hand::Hand;
use crate::player::Player;

/// Board, hand, and player together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The dungeon grid.
    pub board: Board,
    /// The player's hand.
    pub hand: Hand,
    /// The player.
    pub player: Player,
}

impl GameState {
    /// Assemble a state from its parts.
    pub fn new(board: Board, hand: Hand, player: Player) -> Self {
        Self {
            board,
            hand,
            player,
        }
    }

    /// Deal a fresh dungeon for a player of the configured suit.
    pub fn deal<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> CoreResult<Self> {
        let dungeon = deal_dungeon(rng)?;
        Ok(Self::new(
            dungeon.board,
            Hand::new(),
            Player::new(config.player_suit),
        ))
    }

    /// Turn a face-down card face-up.
    pub fn reveal(&mut self, position: Position) -> CoreResult<Card> {
        self.board.reveal(position)
    }

    /// The actionable card at a position, or an error if there is none.
    pub fn actionable_card(&self, position: Position) -> CoreResult<Card> {
        let cell = self.board.cell(position)?;
        let card = cell.card.ok_or(CoreError::EmptyCell(position))?;
        if cell.state != CellState::FaceUp {
            return Err(CoreError::UnexpectedCellState {
                position,
                expected: CellState::FaceUp,
                actual: cell.state,
            });
        }
        Ok(card)
    }

    /// What acting on the face-up card at `position` means for this player.
    pub fn action_at(&self, position: Position) -> CoreResult<CardAction> {
        let card = self.actionable_card(position)?;
        Ok(classify(&card, self.player.suit()))
    }

    /// Pick up a face-up card into the hand and resolve its cell.
    ///
    /// Returns false if the hand was full; the card then stays on the board
    /// but the cell is still resolved.
    pub fn collect(&mut self, position: Position) -> CoreResult<bool> {
        let card = self.actionable_card(position)?;
        match self.hand.add(card) {
            Ok(_) => {
                self.board.take(position)?;
                Ok(true)
            }
            Err(CoreError::HandFull) => {
                log::warn!("hand full, {card} left at {position}");
                self.board.set_state(position, CellState::Resolved)?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Resolve a face-up card that has no effect.
    pub fn settle(&mut self, position: Position) -> CoreResult<()> {
        self.actionable_card(position)?;
        self.board.set_state(position, CellState::Resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::hand::{HAND_COLS, HAND_ROWS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state_with(position: Position, code: &str, cell: CellState) -> GameState {
        let mut board = Board::new();
        board.place(position, code.parse().unwrap(), cell).unwrap();
        GameState::new(board, Hand::new(), Player::new(Suit::Spades))
    }

    #[test]
    fn deal_uses_config_suit() {
        let cfg = GameConfig::default().with_player_suit(Suit::Diamonds);
        let state = GameState::deal(&cfg, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(state.player.suit(), Suit::Diamonds);
        assert!(state.hand.is_empty());
        assert!(state.board.actionable_positions().is_empty());
    }

    #[test]
    fn reveal_then_classify() {
        let pos = Position::new(3, 4);
        let mut state = state_with(pos, "QH", CellState::FaceDown);
        assert!(state.action_at(pos).is_err());
        state.reveal(pos).unwrap();
        assert_eq!(state.action_at(pos).unwrap(), CardAction::Fight);
    }

    #[test]
    fn collect_moves_card_into_hand() {
        let pos = Position::new(2, 3);
        let mut state = state_with(pos, "7D", CellState::FaceUp);
        assert!(state.collect(pos).unwrap());
        assert!(state.hand.contains(&"7D".parse().unwrap()));
        assert_eq!(state.board.card_at(pos).unwrap(), None);
        assert_eq!(state.board.state_at(pos).unwrap(), CellState::Resolved);
    }

    #[test]
    fn collect_with_full_hand_leaves_card() {
        let pos = Position::new(2, 3);
        let mut state = state_with(pos, "7D", CellState::FaceUp);
        for _ in 0..HAND_ROWS * HAND_COLS {
            state.hand.add("2H".parse().unwrap()).unwrap();
        }
        assert!(!state.collect(pos).unwrap());
        assert_eq!(state.board.card_at(pos).unwrap(), Some("7D".parse().unwrap()));
        assert_eq!(state.board.state_at(pos).unwrap(), CellState::Resolved);
    }

    #[test]
    fn settle_resolves_inert_card() {
        let pos = Position::new(0, 0);
        let mut state = state_with(pos, "AS", CellState::FaceUp);
        assert_eq!(state.action_at(pos).unwrap(), CardAction::Inert);
        state.settle(pos).unwrap();
        assert_eq!(state.board.state_at(pos).unwrap(), CellState::Resolved);
        assert!(state.settle(pos).is_err());
    }
}
