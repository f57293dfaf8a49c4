//! Six-sided dice for combat.
//!
//! Every die in the game is a d6. The [`DiceRoller`] trait is the seam where
//! tests swap the OS-seeded random source for a scripted one.

pub mod scripted;

pub use scripted::ScriptedDice;

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use jl_core::GameConfig;

/// Number of faces on every die.
pub const DIE_FACES: u8 = 6;

/// A source of d6 results.
pub trait DiceRoller {
    /// Roll one die. `None` means the source could not produce a value and
    /// the roll must be abandoned.
    fn roll_die(&mut self) -> Option<u8>;

    /// Roll `count` independent dice. `roll_dice(0)` is an empty roll.
    fn roll_dice(&mut self, count: usize) -> Option<Vec<u8>> {
        (0..count).map(|_| self.roll_die()).collect()
    }
}

/// Dice backed by a pseudo-random generator.
#[derive(Debug, Clone)]
pub struct RngDice<R = StdRng> {
    rng: R,
}

impl RngDice<StdRng> {
    /// Dice seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Dice with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Dice seeded the way the game configuration asks.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.dice_rng())
    }
}

impl<R: Rng> RngDice<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DiceRoller for RngDice<R> {
    fn roll_die(&mut self) -> Option<u8> {
        Some(self.rng.random_range(1..=DIE_FACES))
    }
}

/// The dice rolled for one combat: the difference dice and the danger die.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResults {
    /// One value per difference die.
    pub difference: Vec<u8>,
    /// The danger die. Missing only if the roll was cut short.
    pub danger: Option<u8>,
}

impl RollResults {
    /// Build a complete roll.
    pub fn new(difference: Vec<u8>, danger: u8) -> Self {
        Self {
            difference,
            danger: Some(danger),
        }
    }
}

impl fmt::Display for RollResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.difference.iter().map(|v| v.to_string()).collect();
        match self.danger {
            Some(d) => write!(f, "[{}] vs danger {d}", values.join(", ")),
            None => write!(f, "[{}] vs no danger die", values.join(", ")),
        }
    }
}
