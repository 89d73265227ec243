//! Deterministic prompter fed from a queue of prepared responses.
//!
//! Used by tests to drive exact game scenarios: each engine prompt pops
//! the next response. When the queue runs dry (or a response has the
//! wrong shape for the question asked) a conservative default is used so
//! a scenario can script only the decisions it cares about.

use std::collections::VecDeque;

use tracing::debug;

use super::Prompter;

/// A single prepared answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Answer to a number prompt.
    Number(i64),
    /// Answer to a string prompt.
    Text(String),
    /// Affirmative answer to a yes/no prompt.
    Yes,
    /// Negative answer to a yes/no prompt.
    No,
}

/// Prompter that replays a prepared script.
///
/// Defaults when the script runs out: numbers answer `min`, yes/no
/// answers no, strings answer the first valid option (or empty).
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    responses: VecDeque<Response>,
}

impl ScriptedPrompter {
    /// Create a prompter that answers everything with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a prompter from a response script.
    #[must_use]
    pub fn with_responses(responses: impl IntoIterator<Item = Response>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
        }
    }

    /// Append a response to the script.
    pub fn push(&mut self, response: Response) {
        self.responses.push_back(response);
    }

    /// Number of unconsumed responses.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn acknowledge(&mut self, message: &str) {
        debug!("{message}");
    }

    fn number(&mut self, message: &str, min: i64, max: i64) -> i64 {
        debug!("{message}");
        match self.responses.pop_front() {
            Some(Response::Number(n)) if (min..=max).contains(&n) => n,
            Some(other) => {
                debug!("scripted response {other:?} out of range or wrong shape, answering {min}");
                min
            }
            None => min,
        }
    }

    fn string(&mut self, message: &str, valid: &[String]) -> String {
        debug!("{message}");
        let fallback = || valid.first().cloned().unwrap_or_default();
        match self.responses.pop_front() {
            Some(Response::Text(s)) => {
                if valid.is_empty() {
                    s
                } else {
                    valid
                        .iter()
                        .find(|v| v.eq_ignore_ascii_case(&s))
                        .cloned()
                        .unwrap_or_else(fallback)
                }
            }
            Some(other) => {
                debug!("scripted response {other:?} is not a string, answering default");
                fallback()
            }
            None => fallback(),
        }
    }

    fn yes_no(&mut self, message: &str) -> bool {
        debug!("{message}");
        match self.responses.pop_front() {
            Some(Response::Yes) => true,
            Some(Response::No) | None => false,
            Some(other) => {
                debug!("scripted response {other:?} is not yes/no, answering no");
                false
            }
        }
    }
}
