//! Injectable randomness
//!
//! The simulation makes exactly two random decisions: which eligible invader
//! fires, and whether the bonus target spawns this tick. Both go through
//! [`Dice`] so callers can plug in a seeded generator or a fixed script.

use std::collections::VecDeque;

use rand::Rng;

/// Source of uniform integer rolls
pub trait Dice {
    /// Uniform roll in `0..sides`. Callers never pass zero sides.
    fn roll(&mut self, sides: u32) -> u32;
}

impl<R: Rng> Dice for R {
    fn roll(&mut self, sides: u32) -> u32 {
        debug_assert!(sides > 0, "roll needs at least one side");
        self.random_range(0..sides.max(1))
    }
}

/// Replays a fixed sequence of rolls (zero once exhausted)
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls not consumed yet
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        let roll = self.rolls.pop_front().unwrap_or(0);
        roll.min(sides.saturating_sub(1))
    }
}
