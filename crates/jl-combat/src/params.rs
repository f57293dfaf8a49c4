//! Combat parameters: totals, their difference, and how many dice it costs.

use std::fmt;

use serde::{Deserialize, Serialize};

use jl_core::Card;

use crate::value::combat_value;

/// Number of difference dice for an absolute difference between totals.
///
/// | difference | dice |
/// |------------|------|
/// | 0-1        | 2    |
/// | 2-3        | 3    |
/// | 4-6        | 4    |
/// | 7-8        | 5    |
/// | 9+         | 6    |
pub fn dice_for_difference(difference: u8) -> usize {
    match difference {
        0..=1 => 2,
        2..=3 => 3,
        4..=6 => 4,
        7..=8 => 5,
        _ => 6,
    }
}

/// The numbers a combat is decided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatParameters {
    /// Combat value of the spent card (0 if none).
    pub attacker_total: u8,
    /// Combat value of the defender.
    pub defender_total: u8,
    /// `|attacker_total - defender_total|`.
    pub difference: u8,
    /// Difference dice to roll. Unused when the attacker wins outright.
    pub difference_dice: usize,
}

impl CombatParameters {
    /// Returns true if the attacker is strictly stronger and no dice are rolled.
    pub fn is_automatic_win(&self) -> bool {
        self.attacker_total > self.defender_total
    }
}

impl fmt::Display for CombatParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attack {} vs defence {} (difference {}, {} dice)",
            self.attacker_total, self.defender_total, self.difference, self.difference_dice
        )
    }
}

/// Compute the parameters for fighting `defender` with an optional spent card.
pub fn calculate_parameters(attacker: Option<&Card>, defender: &Card) -> CombatParameters {
    let attacker_total = combat_value(attacker);
    let defender_total = combat_value(Some(defender));
    let difference = attacker_total.abs_diff(defender_total);
    CombatParameters {
        attacker_total,
        defender_total,
        difference,
        difference_dice: dice_for_difference(difference),
    }
}
