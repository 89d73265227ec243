//! Seeded random prompter for unattended whole-game simulation.

use tracing::{debug, info};

use super::Prompter;
use crate::core::GameRng;

/// Pool of player names handed out during automated setup.
const NAMES: [&str; 8] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Henry",
];

/// Prompter that answers every question with a seeded random choice.
///
/// Lets the whole turn loop run unattended, exploring purchase, auction,
/// jail, and build paths without a human. Deterministic for a given seed.
#[derive(Debug)]
pub struct RandomPrompter {
    rng: GameRng,
    name_cursor: usize,
}

impl RandomPrompter {
    /// Create a random prompter from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            name_cursor: 0,
        }
    }
}

impl Prompter for RandomPrompter {
    fn acknowledge(&mut self, message: &str) {
        info!("{message}");
    }

    fn number(&mut self, message: &str, min: i64, max: i64) -> i64 {
        info!("{message}");
        let n = self.rng.gen_range(min..max + 1);
        debug!("answering {n}");
        n
    }

    fn string(&mut self, message: &str, valid: &[String]) -> String {
        info!("{message}");
        let answer = if valid.is_empty() {
            // Free-form strings are only asked for during setup (names).
            let name = NAMES[self.name_cursor % NAMES.len()].to_string();
            self.name_cursor += 1;
            name
        } else {
            self.rng
                .choose(valid)
                .cloned()
                .unwrap_or_default()
        };
        debug!("answering {answer}");
        answer
    }

    fn yes_no(&mut self, message: &str) -> bool {
        info!("{message}");
        let answer = self.rng.gen_bool(0.5);
        debug!("answering {}", if answer { "yes" } else { "no" });
        answer
    }
}
