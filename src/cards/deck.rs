//! Card decks.
//!
//! A deck is never consumed: drawing reshuffles the whole deck and takes
//! the top eligible card, so every draw is uniform over the cards
//! currently in circulation. The one wrinkle is Get Out Of Jail Free:
//! while a player holds that card it stays in the deck's vector but is
//! skipped by draws until the player spends it or leaves the game.

use tracing::{debug, error, warn};

use super::{Card, CardKind};
use crate::core::GameRng;

/// Which deck a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Chance => write!(f, "Chance"),
            DeckKind::CommunityChest => write!(f, "Community Chest"),
        }
    }
}

/// A shuffled deck of cards.
#[derive(Debug)]
pub struct Deck {
    kind: DeckKind,
    cards: Vec<Card>,
    gojfc_out: bool,
}

impl Deck {
    /// Create a deck from its cards.
    #[must_use]
    pub fn new(kind: DeckKind, cards: Vec<Card>) -> Self {
        Self {
            kind,
            cards,
            gojfc_out: false,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Whether this deck's Get Out Of Jail Free card is held by a player.
    #[must_use]
    pub fn gojfc_out(&self) -> bool {
        self.gojfc_out
    }

    /// Mark the Get Out Of Jail Free card as held by a player,
    /// suppressing it from draws.
    pub fn take_gojfc(&mut self) {
        self.gojfc_out = true;
    }

    /// Return the Get Out Of Jail Free card to circulation.
    pub fn return_gojfc(&mut self) {
        self.gojfc_out = false;
    }

    /// Draw a card: reshuffle, then take the top eligible card.
    ///
    /// A held Get Out Of Jail Free card is skipped. Returns `None` if the
    /// deck is empty or every card is suppressed.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.cards.is_empty() {
            error!("{} deck is empty", self.kind);
            return None;
        }
        rng.shuffle(&mut self.cards);
        let card = self
            .cards
            .iter()
            .find(|c| !(self.gojfc_out && c.kind == CardKind::GetOutOfJailFree));
        match card {
            Some(card) => {
                debug!("drew from {}: {}", self.kind, card.text);
                Some(card.clone())
            }
            None => {
                warn!("{} deck has no drawable cards", self.kind);
                None
            }
        }
    }
}
