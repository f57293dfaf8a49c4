//! Applying a combat result to the game state.
//!
//! Both branches check that the target still holds the defender before
//! touching anything, so a failed call leaves the state untouched.

use jl_core::{Card, CellState, GameState, Position, Rank};

use crate::error::{CombatError, CombatResult};

/// Who fought whom, and with what.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    /// Where the defender sits.
    pub target: Position,
    /// The defending card.
    pub defender: Card,
    /// The value card spent from the hand, if any.
    pub spent: Option<Card>,
}

/// Apply the win or loss branch and return the consequence log.
pub fn apply(
    state: &mut GameState,
    engagement: &Engagement,
    won: bool,
) -> CombatResult<Vec<String>> {
    if won {
        apply_win(state, engagement)
    } else {
        apply_loss(state, engagement)
    }
}

/// Discard the spent card, clear the defender off the board, and move the
/// player onto the emptied cell.
pub fn apply_win(state: &mut GameState, engagement: &Engagement) -> CombatResult<Vec<String>> {
    check_target(state, engagement)?;
    let mut consequences = Vec::new();

    if let Some(card) = engagement.spent {
        discard_spent(state, card, &mut consequences);
    }

    let removed = state.board.take(engagement.target)?;
    consequences.push(format!("Discarded {removed} from the Dungeon."));

    let from = state.player.position();
    state.player.set_position(engagement.target)?;
    consequences.push(format!("Player moved from {from} to {}.", engagement.target));

    Ok(consequences)
}

/// Discard the spent card, leave the defender in place, and apply the
/// defender's penalty: Queens empty the hand, Kings cost the next turn.
pub fn apply_loss(state: &mut GameState, engagement: &Engagement) -> CombatResult<Vec<String>> {
    check_target(state, engagement)?;
    let mut consequences = Vec::new();

    match engagement.spent {
        Some(card) => discard_spent(state, card, &mut consequences),
        None => consequences.push("No value card was used in the fight.".to_string()),
    }

    state.board.set_state(engagement.target, CellState::FaceUp)?;
    consequences.push(format!("Player cannot move past {}.", engagement.defender));

    match engagement.defender.rank() {
        Rank::QUEEN => {
            let dropped = state.hand.clear();
            log::debug!("queen penalty discarded {dropped} cards");
            consequences.push("Lost to hostile Queen: Discard all cards from hand!".to_string());
        }
        Rank::KING => {
            state.player.set_skip_next_turn(true);
            consequences.push("Lost to hostile King: Skip next turn!".to_string());
        }
        _ => consequences.push("Lost to Hazard. Blocked movement.".to_string()),
    }

    Ok(consequences)
}

fn check_target(state: &GameState, engagement: &Engagement) -> CombatResult<()> {
    let cell = state.board.cell(engagement.target)?;
    if cell.card != Some(engagement.defender) {
        return Err(CombatError::StaleTarget(engagement.target));
    }
    Ok(())
}

fn discard_spent(state: &mut GameState, card: Card, consequences: &mut Vec<String>) {
    if state.hand.remove(&card) {
        consequences.push(format!("Discarded {card} from hand."));
    } else {
        log::error!("spent card {card} was not in the hand");
        consequences.push(format!("Error removing {card} from hand."));
    }
}
