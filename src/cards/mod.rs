//! Chance and Community Chest cards and decks.

pub mod card;
pub mod deck;

pub use card::{Card, CardEffect, CardKind};
pub use deck::{Deck, DeckKind};
