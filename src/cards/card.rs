//! Chance and Community Chest cards.

use std::sync::Arc;

use crate::board::BoardManager;
use crate::io::Prompter;

/// Effect run when a card is drawn, against the full board state.
pub type CardEffect = Arc<dyn Fn(&mut BoardManager, &mut dyn Prompter) + Send + Sync>;

/// What kind of card this is, independent of its text.
///
/// Get Out Of Jail Free cards need to be recognized by the deck (so the
/// copy a player holds is suppressed from draws) and by bankruptcy
/// cleanup; tagging them explicitly keeps that recognition away from the
/// display text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardKind {
    #[default]
    Standard,
    GetOutOfJailFree,
}

/// A drawable card: display text, kind tag, and effect.
#[derive(Clone)]
pub struct Card {
    pub text: String,
    pub kind: CardKind,
    effect: CardEffect,
}

impl Card {
    /// Create a standard card.
    pub fn new(text: impl Into<String>, effect: CardEffect) -> Self {
        Self {
            text: text.into(),
            kind: CardKind::Standard,
            effect,
        }
    }

    /// Create a Get Out Of Jail Free card.
    pub fn get_out_of_jail_free(text: impl Into<String>, effect: CardEffect) -> Self {
        Self {
            text: text.into(),
            kind: CardKind::GetOutOfJailFree,
            effect,
        }
    }

    /// Run the card's effect.
    pub fn run(&self, board: &mut BoardManager, io: &mut dyn Prompter) {
        (self.effect)(board, io);
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("text", &self.text)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
