//! Interactive prompter reading answers from stdin.

use std::io::BufRead;

use tracing::{error, info};

use super::Prompter;

/// Prompter for interactive play: prints questions through the logger and
/// reads answers line-by-line from stdin, re-prompting on invalid input.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    /// Create a console prompter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> String {
        let mut line = String::new();
        if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
            error!("failed to read input: {e}");
        }
        line.trim().to_string()
    }
}

impl Prompter for ConsolePrompter {
    fn acknowledge(&mut self, message: &str) {
        info!("{message}");
        let input = self.read_line();
        if !input.is_empty() {
            info!("ignoring entered value");
        }
    }

    fn number(&mut self, message: &str, min: i64, max: i64) -> i64 {
        loop {
            info!("{message}");
            let input = self.read_line();
            match input.parse::<i64>() {
                Ok(n) if (min..=max).contains(&n) => return n,
                Ok(_) => error!("invalid input, enter a number between {min} and {max}"),
                Err(_) => error!("invalid input, enter a number"),
            }
        }
    }

    fn string(&mut self, message: &str, valid: &[String]) -> String {
        loop {
            info!("{message}");
            let input = self.read_line();
            if input.is_empty() {
                error!("invalid input, enter a non-empty string");
                continue;
            }
            if valid.is_empty() {
                return input;
            }
            if let Some(choice) = valid.iter().find(|v| v.eq_ignore_ascii_case(&input)) {
                return choice.clone();
            }
            error!("invalid input, valid answers are: {}", valid.join(", "));
        }
    }

    fn yes_no(&mut self, message: &str) -> bool {
        loop {
            info!("{message}");
            match self.read_line().to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => error!("invalid input, enter 'y' or 'n'"),
            }
        }
    }
}
