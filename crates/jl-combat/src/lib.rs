//! Dice combat for Joker's Labyrinth.
//!
//! Fighting a face-up card runs through a [`CombatSession`]: the player picks
//! a value card to spend (or none), the card values are compared, and unless
//! the attacker is strictly stronger a pool of difference dice is rolled
//! against a single danger die. The danger die matching any difference die
//! is a loss. Effects on the board, hand and player are applied in one step
//! when the session finalizes; cancelling or aborting changes nothing.

/// d6 rollers and roll results.
pub mod dice;
/// Applying win and loss effects to the game state.
pub mod effects;
/// Combat errors.
pub mod error;
/// Combat identifiers.
pub mod id;
/// The combat history.
pub mod journal;
/// Notices for presentation layers.
pub mod notice;
/// Finished-combat outcomes.
pub mod outcome;
/// Combat totals and the difference-dice table.
pub mod params;
/// The danger-die win condition.
pub mod resolution;
/// Hand value-card selection.
pub mod select;
/// The combat state machine.
pub mod session;
/// Card combat values.
pub mod value;

/// Re-export dice types.
pub use dice::{DIE_FACES, DiceRoller, RngDice, RollResults, ScriptedDice};
/// Re-export effect application.
pub use effects::{Engagement, apply_loss, apply_win};
/// Re-export error types.
pub use error::{CombatError, CombatResult};
/// Re-export the combat ID.
pub use id::CombatId;
/// Re-export journal types.
pub use journal::{CombatJournal, CombatRecord, CombatResolution};
/// Re-export notice types.
pub use notice::{CombatNotice, NoticeKind};
/// Re-export the outcome.
pub use outcome::CombatOutcome;
/// Re-export parameter calculation.
pub use params::{CombatParameters, calculate_parameters, dice_for_difference};
/// Re-export the win evaluator.
pub use resolution::evaluate;
/// Re-export value-card selection.
pub use select::{EligibleCard, eligible_value_cards, is_value_card};
/// Re-export the session.
pub use session::{CombatPhase, CombatSession};
/// Re-export the combat value resolver.
pub use value::combat_value;
