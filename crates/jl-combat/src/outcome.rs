//! The result of a finished combat.

use serde::{Deserialize, Serialize};

use jl_core::{Card, Position};

use crate::dice::RollResults;
use crate::params::CombatParameters;

/// Everything the results screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    /// Whether the attacker won.
    pub won: bool,
    /// Whether the win came without rolling.
    pub automatic_win: bool,
    /// The value card spent, if any.
    pub attacker: Option<Card>,
    /// The defending card.
    pub defender: Card,
    /// Where the defender was.
    pub target: Position,
    /// Totals and dice count.
    pub parameters: CombatParameters,
    /// The dice, if any were rolled.
    pub rolls: Option<RollResults>,
    /// Effects applied, in order.
    pub consequences: Vec<String>,
}

impl CombatOutcome {
    /// Render the outcome as plain text.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let verdict = match (self.won, self.automatic_win) {
            (true, true) => "Victory! (automatic win)",
            (true, false) => "Victory!",
            (false, _) => "Defeat.",
        };
        out.push_str(verdict);
        out.push('\n');

        let attacker = self
            .attacker
            .map_or_else(|| "no card".to_string(), |c| c.to_string());
        out.push_str(&format!(
            "Attack {} ({attacker}) vs Defence {} ({})\n",
            self.parameters.attacker_total, self.parameters.defender_total, self.defender
        ));

        match &self.rolls {
            Some(rolls) => {
                let dice: Vec<String> = rolls.difference.iter().map(|v| v.to_string()).collect();
                let danger = rolls
                    .danger
                    .map_or_else(|| "-".to_string(), |d| d.to_string());
                out.push_str(&format!(
                    "Difference dice: {}  Danger die: {danger}\n",
                    dice.join(", ")
                ));
            }
            None => out.push_str("No dice rolled.\n"),
        }

        for line in &self.consequences {
            out.push_str(&format!("- {line}\n"));
        }
        out
    }
}
