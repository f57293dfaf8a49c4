//! Core types for Joker's Labyrinth: cards, the dungeon grid, the hand, and the player.
//!
//! This crate holds the game model that the combat engine reads and mutates.
//! It knows nothing about presentation; a front end renders a [`GameState`]
//! however it likes.

/// Card-action dispatch for revealed cards.
pub mod action;
/// The 7x7 dungeon grid and cell states.
pub mod board;
/// Playing cards, suits, ranks, and classification.
pub mod card;
/// Game configuration.
pub mod config;
/// Deck construction and the dungeon deal.
pub mod deck;
/// Error types used throughout the crate.
pub mod error;
/// The player's hand.
pub mod hand;
/// The player token.
pub mod player;
/// The game-state aggregate.
pub mod state;

/// Re-export card-action types.
pub use action::{CardAction, classify};
/// Re-export board types.
pub use board::{Board, Cell, CellState, GRID_COLS, GRID_ROWS, Position};
/// Re-export card types.
pub use card::{Card, CardKind, Color, Rank, Suit};
/// Re-export configuration.
pub use config::GameConfig;
/// Re-export deck types.
pub use deck::{Deck, Dungeon, deal_dungeon};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export hand types.
pub use hand::{HAND_COLS, HAND_ROWS, Hand, HandSlot};
/// Re-export the player.
pub use player::Player;
/// Re-export the game state.
pub use state::GameState;
