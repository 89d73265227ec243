//! Player identity, per-player state, and the turn roster.
//!
//! ## PlayerId
//!
//! Stable, copyable player identifier. Ownership fields elsewhere in the
//! engine (space owners, the current-turn pointer) store a `PlayerId`
//! rather than a reference, so a player leaving the game can never leave
//! a dangling pointer behind.
//!
//! ## PlayerManager
//!
//! Arena of all players ever created plus the ordered roster of players
//! still in the game. Bankrupt players are dropped from the roster but
//! their arena slot survives, keeping every outstanding `PlayerId` valid.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Money every player starts the game with.
pub const STARTING_MONEY: i64 = 1500;

/// Stable player identifier (index into the `PlayerManager` arena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Cash on hand. Never negative: transfers clamp at zero.
    pub money: i64,
    /// Board position (index into the board).
    pub position: usize,
    /// Number of stations this player owns, board-wide.
    pub stations_owned: u8,
    /// Number of utilities this player owns, board-wide.
    pub utilities_owned: u8,
    /// Turns left to serve in jail; zero means free ("just visiting").
    pub jail_turns: u8,
    /// Holds the chance deck's get-out-of-jail-free card.
    pub chance_gojfc: bool,
    /// Holds the community chest deck's get-out-of-jail-free card.
    pub chest_gojfc: bool,
}

impl Player {
    /// Create a player at the starting position with starting money.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            money: STARTING_MONEY,
            position: 0,
            stations_owned: 0,
            utilities_owned: 0,
            jail_turns: 0,
            chance_gojfc: false,
            chest_gojfc: false,
        }
    }

    /// Whether the player holds a get-out-of-jail-free card from either deck.
    #[must_use]
    pub fn has_gojfc(&self) -> bool {
        self.chance_gojfc || self.chest_gojfc
    }
}

/// Owns all players and the turn rotation.
#[derive(Clone, Debug, Default)]
pub struct PlayerManager {
    /// Arena: one slot per player ever added, never shrinks.
    players: Vec<Player>,
    /// Active players in turn order.
    roster: Vec<PlayerId>,
    /// Whose turn it is. `None` only while the roster is empty.
    current: Option<PlayerId>,
    /// Set when removing the current player already advanced the pointer,
    /// so the next `set_next_player` call must not advance again.
    advanced_by_removal: bool,
}

impl PlayerManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player to the end of the turn order.
    ///
    /// The first player added becomes the current player.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Player::new(name));
        self.roster.push(id);
        if self.current.is_none() {
            self.current = Some(id);
        }
        id
    }

    /// Remove a player from the turn order.
    ///
    /// The arena slot survives, so `id` stays dereferenceable. If the
    /// removed player was current, the turn pointer moves to the player
    /// who would have played next and the following `set_next_player`
    /// call becomes a no-op, keeping the rotation intact.
    pub fn remove_player(&mut self, id: PlayerId) {
        let Some(pos) = self.roster.iter().position(|&p| p == id) else {
            return;
        };
        if self.current == Some(id) {
            let next = self.roster[(pos + 1) % self.roster.len()];
            if next == id {
                self.current = None;
            } else {
                self.current = Some(next);
                self.advanced_by_removal = true;
            }
        }
        self.roster.remove(pos);
    }

    /// Get a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a mutable player by ID.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Active players in turn order.
    #[must_use]
    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }

    /// Number of active players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// The player whose turn it is, or `None` if the roster is empty.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        if self.current.is_none() {
            error!("current player is unset");
        }
        self.current
    }

    /// Force the turn pointer to a specific player.
    pub fn set_current(&mut self, id: PlayerId) {
        self.current = Some(id);
        self.advanced_by_removal = false;
    }

    /// Advance the turn pointer circularly through the roster.
    pub fn set_next_player(&mut self) {
        if self.advanced_by_removal {
            // Removal already moved the pointer to the next player.
            self.advanced_by_removal = false;
            return;
        }
        let Some(cur) = self.current else {
            self.current = self.roster.first().copied();
            return;
        };
        match self.roster.iter().position(|&p| p == cur) {
            Some(i) => self.current = Some(self.roster[(i + 1) % self.roster.len()]),
            // Current player left the roster without the pointer being
            // re-synchronized; restart rotation from the front.
            None => self.current = self.roster.first().copied(),
        }
    }

    /// Transfer money between two players, either of which may be the bank
    /// (`None`).
    ///
    /// The payer is debited first; if the debit would drive their balance
    /// below zero it clamps at exactly zero and the bank absorbs the
    /// shortfall, so the payee is always credited in full. This models
    /// "pay what you can, then go bankrupt", not a failed transaction.
    pub fn transfer(&mut self, from: Option<PlayerId>, to: Option<PlayerId>, amount: i64) {
        if let Some(from) = from {
            let payer = self.player_mut(from);
            let before = payer.money;
            payer.money -= amount;
            info!("{} has been debited {}", payer.name, amount);
            if payer.money < 0 {
                payer.money = 0;
                debug!(
                    "{} went bankrupt mid-transfer ({} short); the bank covers the difference",
                    payer.name,
                    amount - before
                );
            }
        }
        if let Some(to) = to {
            let payee = self.player_mut(to);
            payee.money += amount;
            info!("{} has been credited {}", payee.name, amount);
        }
    }
}
