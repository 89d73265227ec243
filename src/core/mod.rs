//! Core engine types: players, dice, deterministic RNG.

pub mod dice;
pub mod player;
pub mod rng;

pub use dice::Dice;
pub use player::{Player, PlayerId, PlayerManager, STARTING_MONEY};
pub use rng::GameRng;
