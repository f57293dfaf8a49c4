//! Error types for the combat engine.

use jl_core::{Card, CellState, CoreError, Position};

use crate::session::CombatPhase;

/// Errors that can occur while driving a combat session.
///
/// A failing call leaves the session and the game state as they were, with
/// the single exception of [`CombatError::StaleTarget`], which aborts the
/// session without touching the board or the hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// A game-model precondition failed (for example, an out-of-bounds target).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// There is no card to fight at the target position.
    #[error("no card to fight at {0}")]
    DefenderAbsent(Position),

    /// The target card is not face-up and actionable.
    #[error("cell {position} is {state}, not face-up")]
    NotActionable {
        /// The targeted cell.
        position: Position,
        /// The cell's actual state.
        state: CellState,
    },

    /// The operation is not allowed in the session's current phase.
    #[error("cannot {operation} during {phase}")]
    InvalidTransition {
        /// The operation that was attempted.
        operation: &'static str,
        /// The phase the session was in.
        phase: CombatPhase,
    },

    /// The chosen card is not one of the eligible value cards.
    #[error("{0} is not an eligible value card")]
    InvalidSelection(Card),

    /// Supplied dice do not match the combat parameters.
    #[error("invalid roll: {0}")]
    InvalidRoll(String),

    /// The target cell no longer holds the defender.
    #[error("target at {0} changed during combat")]
    StaleTarget(Position),
}

/// Convenience result type for combat operations.
pub type CombatResult<T> = Result<T, CombatError>;
