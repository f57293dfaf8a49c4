//! A running record of every combat in a game.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jl_core::{Card, Position};

use crate::id::CombatId;

/// How a combat ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatResolution {
    /// The attacker won.
    Won {
        /// Whether no dice were rolled.
        automatic: bool,
    },
    /// The attacker lost.
    Lost,
    /// Cancelled during setup.
    Cancelled,
    /// Abandoned while rolling.
    Aborted,
}

impl fmt::Display for CombatResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won { automatic: true } => write!(f, "won (automatic)"),
            Self::Won { automatic: false } => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Aborted => write!(f, "aborted"),
        }
    }
}

/// One finished combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRecord {
    /// The session's ID.
    pub combat: CombatId,
    /// The card fought.
    pub defender: Card,
    /// Where it was.
    pub position: Position,
    /// The value card spent, if any.
    pub spent: Option<Card>,
    /// How it ended.
    pub resolution: CombatResolution,
    /// When it ended.
    pub timestamp: DateTime<Utc>,
}

/// The combat history of a game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatJournal {
    records: Vec<CombatRecord>,
}

impl CombatJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record.
    pub fn append(&mut self, record: CombatRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[CombatRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of combats the player won.
    pub fn victories(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.resolution, CombatResolution::Won { .. }))
            .count()
    }

    /// Number of combats the player lost.
    pub fn defeats(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.resolution == CombatResolution::Lost)
            .count()
    }

    /// Export as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Combat Journal\n==============\n\n");
        for record in &self.records {
            let spent = record
                .spent
                .map_or_else(|| "no card".to_string(), |c| c.to_string());
            out.push_str(&format!(
                "[{}] {} at {} with {spent}: {}\n",
                record.combat, record.defender, record.position, record.resolution
            ));
        }
        out.push_str(&format!(
            "\n{} won, {} lost, {} total\n",
            self.victories(),
            self.defeats(),
            self.len()
        ));
        out
    }
}
