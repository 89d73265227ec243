//! The prompt/response collaborator.
//!
//! The engine never reads stdin directly: every question it asks a player
//! goes through the [`Prompter`] trait, so interactive play, scripted
//! tests, and seeded random simulation are all the same engine code with
//! a different collaborator plugged in.
//!
//! Invalid input is always recovered locally by re-prompting; it never
//! propagates into the engine.

pub mod console;
pub mod random;
pub mod scripted;

pub use console::ConsolePrompter;
pub use random::RandomPrompter;
pub use scripted::{Response, ScriptedPrompter};

/// Blocking prompt/response contract between the engine and a player.
pub trait Prompter {
    /// Show a message and wait for acknowledgment.
    fn acknowledge(&mut self, message: &str);

    /// Ask for a number in `min..=max`, retrying until the answer is in
    /// range.
    fn number(&mut self, message: &str, min: i64, max: i64) -> i64;

    /// Ask for a string, retrying until it is non-empty and, when `valid`
    /// is non-empty, matches one of its entries case-insensitively. The
    /// matched entry is returned in its canonical spelling.
    fn string(&mut self, message: &str, valid: &[String]) -> String;

    /// Ask a yes/no question, retrying until the answer is recognizable.
    fn yes_no(&mut self, message: &str) -> bool;
}
