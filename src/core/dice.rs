//! A single six-sided die.
//!
//! Two independent `Dice` instances model the two physical dice: their sum
//! drives movement and their equality (a "double") drives the extra-turn
//! and three-doubles-to-jail rules.

use crate::core::rng::GameRng;

/// A six-sided die backed by its own deterministic RNG stream.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: GameRng,
}

impl Dice {
    /// Create a die from an RNG stream (typically a fork of the game RNG).
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Roll the die, returning a value uniformly drawn from 1..=6.
    pub fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..7) as u8
    }
}
