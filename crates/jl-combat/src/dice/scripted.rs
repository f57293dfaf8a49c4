//! A dice source that replays fixed values.

use std::collections::VecDeque;

use super::DiceRoller;

/// Dice that return a fixed sequence, then report failure once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    values: VecDeque<u8>,
}

impl ScriptedDice {
    /// Replay `values` in order.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet rolled.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DiceRoller for ScriptedDice {
    fn roll_die(&mut self) -> Option<u8> {
        self.values.pop_front()
    }
}
