//! # rust-monopoly
//!
//! A turn-based Monopoly engine with pluggable player input.
//!
//! ## Design Principles
//!
//! 1. **Stable Identity**: Players are addressed by [`PlayerId`] everywhere
//!    (space ownership, the turn pointer), so removing a bankrupt player
//!    can never invalidate a reference.
//!
//! 2. **Closed Space Set**: Spaces are one tagged union, [`SpaceKind`],
//!    dispatched exhaustively in one place. New behavior means a new
//!    variant the compiler tracks through every match.
//!
//! 3. **Pluggable Input**: The engine only talks to players through the
//!    [`Prompter`] trait. Interactive play, scripted tests, and seeded
//!    random simulation all run the same engine code.
//!
//! 4. **Deterministic Randomness**: Dice and deck shuffles draw from
//!    seeded [`GameRng`] streams, so a whole game replays from a seed.
//!
//! ## Modules
//!
//! - `core`: Player identity, money transfers, dice, RNG
//! - `spaces`: The space tagged union and pure rent rules
//! - `cards`: Chance and community chest cards and decks
//! - `board`: Board state, landing dispatch, auctions, building
//! - `game`: Setup, the turn loop, and the win condition
//! - `io`: The prompt/response collaborators
//! - `games`: Ready-to-play game definitions

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod games;
pub mod io;
pub mod spaces;

// Re-export commonly used types
pub use crate::core::{Dice, GameRng, Player, PlayerId, PlayerManager, STARTING_MONEY};

pub use crate::spaces::{BuildingLevel, ColorGroup, RentTable, Space, SpaceKind};

pub use crate::cards::{Card, CardEffect, CardKind, Deck, DeckKind};

pub use crate::board::{
    BoardManager, GO_INDEX, JAIL_FINE, JAIL_INDEX, JAIL_SENTENCE, MAX_BUILD_ATTEMPTS,
    PASS_GO_BONUS,
};

pub use crate::game::{GameCore, GameOutcome, MAX_TURNS};

pub use crate::io::{ConsolePrompter, Prompter, RandomPrompter, Response, ScriptedPrompter};
