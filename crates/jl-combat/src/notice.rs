//! Notices a combat session emits for whatever presents it.

use serde::{Deserialize, Serialize};

use jl_core::Card;

use crate::id::CombatId;
use crate::outcome::CombatOutcome;
use crate::params::CombatParameters;
use crate::select::EligibleCard;

/// A notice tagged with the combat it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatNotice {
    /// The session that emitted it.
    pub combat: CombatId,
    /// What happened.
    pub kind: NoticeKind,
}

/// What a presentation layer should show next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoticeKind {
    /// Offer the eligible value cards. Choosing none is always allowed.
    ChooseValueCard {
        /// The card being fought.
        defender: Card,
        /// Spendable cards, row-major.
        choices: Vec<EligibleCard>,
    },
    /// The attacker wins without rolling.
    AutoWin {
        /// The combat parameters.
        parameters: CombatParameters,
    },
    /// Dice must be rolled.
    RollRequired {
        /// The combat parameters, including how many difference dice.
        parameters: CombatParameters,
    },
    /// Show the results and wait for acknowledgement.
    Results {
        /// The finished combat.
        outcome: CombatOutcome,
    },
    /// The combat was cancelled during setup.
    Cancelled,
    /// The roll did not complete and the combat was abandoned.
    Aborted,
}
