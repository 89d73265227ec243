//! Board state and space actions.
//!
//! ## BoardManager
//!
//! Owns everything a turn acts on: the spaces, the player roster, both
//! card decks, and the dice. Landing on a space goes through
//! [`BoardManager::handle_space`], which matches exhaustively on the
//! space kind, so every landing outcome is dispatched from one place.
//!
//! Movement, rent, auctions, and building all mutate the board through
//! `&mut self` methods; nothing outside the manager holds references
//! into it. Players are addressed by [`PlayerId`] throughout.

mod auction;
mod build;
mod landing;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::cards::Deck;
use crate::core::{Dice, GameRng, PlayerId, PlayerManager};
use crate::io::Prompter;
use crate::spaces::{BuildingLevel, ColorGroup, Space, SpaceKind};

/// Board index of the Go space.
pub const GO_INDEX: usize = 0;
/// Board index of the jail space.
pub const JAIL_INDEX: usize = 10;
/// Amount collected for passing Go.
pub const PASS_GO_BONUS: i64 = 200;
/// Fine to leave jail early.
pub const JAIL_FINE: i64 = 50;
/// Turns served in jail when sent there.
pub const JAIL_SENTENCE: u8 = 3;
/// Re-prompts allowed when a build request keeps an uneven group.
pub const MAX_BUILD_ATTEMPTS: u32 = 50;

/// The game board: spaces, players, decks, and dice.
#[derive(Debug)]
pub struct BoardManager {
    spaces: Vec<Space>,
    players: PlayerManager,
    chance: Deck,
    chest: Deck,
    dice1: Dice,
    dice2: Dice,
    last_roll: (u8, u8),
    /// Property indices per color group, fixed at construction.
    group_index: FxHashMap<ColorGroup, Vec<usize>>,
    rng: GameRng,
}

impl BoardManager {
    /// Create a board from its spaces and decks.
    #[must_use]
    pub fn new(spaces: Vec<Space>, chance: Deck, chest: Deck, mut rng: GameRng) -> Self {
        let mut group_index: FxHashMap<ColorGroup, Vec<usize>> = FxHashMap::default();
        for (i, space) in spaces.iter().enumerate() {
            if let SpaceKind::Property { color, .. } = &space.kind {
                group_index.entry(*color).or_default().push(i);
            }
        }
        let dice1 = Dice::new(rng.fork());
        let dice2 = Dice::new(rng.fork());
        Self {
            spaces,
            players: PlayerManager::new(),
            chance,
            chest,
            dice1,
            dice2,
            last_roll: (0, 0),
            group_index,
            rng,
        }
    }

    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    #[must_use]
    pub fn space(&self, index: usize) -> &Space {
        &self.spaces[index]
    }

    pub fn space_mut(&mut self, index: usize) -> &mut Space {
        &mut self.spaces[index]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerManager {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut PlayerManager {
        &mut self.players
    }

    pub fn chance_deck_mut(&mut self) -> &mut Deck {
        &mut self.chance
    }

    pub fn chest_deck_mut(&mut self) -> &mut Deck {
        &mut self.chest
    }

    /// Roll both dice, remembering the result for utility rent.
    pub fn roll_dice(&mut self) {
        self.last_roll = (self.dice1.roll(), self.dice2.roll());
    }

    /// The most recent dice roll.
    #[must_use]
    pub fn last_roll(&self) -> (u8, u8) {
        self.last_roll
    }

    /// Whether the most recent roll was a double.
    #[must_use]
    pub fn rolled_double(&self) -> bool {
        self.last_roll.0 == self.last_roll.1
    }

    /// Move the current player by `distance` spaces (negative moves
    /// backwards) and run the landing action.
    ///
    /// Passing Go collects the bonus, but only when moving forward and
    /// not while being delivered to jail.
    pub fn move_player(&mut self, distance: i64, io: &mut dyn Prompter) {
        let Some(current) = self.players.current() else {
            return;
        };
        let len = self.spaces.len() as i64;
        let player = self.players.player(current);
        let position = player.position;
        let in_jail = player.jail_turns > 0;
        debug!("{} is currently on {}", player.name, self.spaces[position].name);

        let new_position = (position as i64 + distance).rem_euclid(len) as usize;
        debug!(
            "{} moved to {}",
            self.players.player(current).name,
            self.spaces[new_position].name
        );
        if new_position < position && !in_jail && distance > 0 {
            info!(
                "{} passed by the Go space and earned {PASS_GO_BONUS}",
                self.players.player(current).name
            );
            self.players.transfer(None, Some(current), PASS_GO_BONUS);
        }
        self.players.player_mut(current).position = new_position;
        self.handle_space(io);
    }

    /// Move the current player forward to an absolute board index,
    /// always going the long way round (a full lap when already there).
    pub fn advance_to(&mut self, target: usize, io: &mut dyn Prompter) {
        let Some(current) = self.players.current() else {
            return;
        };
        let len = self.spaces.len() as i64;
        let position = self.players.player(current).position as i64;
        self.move_player(len + target as i64 - position, io);
    }

    /// Run the action of the space the current player stands on.
    pub fn handle_space(&mut self, io: &mut dyn Prompter) {
        let Some(current) = self.players.current() else {
            return;
        };
        let position = self.players.player(current).position;
        let kind = self.spaces[position].kind.clone();
        info!(
            "{} is now on {} ({position})",
            self.players.player(current).name,
            self.spaces[position].name
        );
        match kind {
            SpaceKind::Go => {
                // Landing exactly on Go pays a second bonus on top of the
                // pass-by one.
                info!(
                    "{} landed exactly on the Go space and earned an extra {PASS_GO_BONUS}",
                    self.players.player(current).name
                );
                self.players.transfer(None, Some(current), PASS_GO_BONUS);
            }
            SpaceKind::Jail => self.resolve_jail(io),
            SpaceKind::GoToJail => {
                info!("You are going to jail");
                let position = self.players.player(current).position;
                self.players.player_mut(current).jail_turns = JAIL_SENTENCE;
                let len = self.spaces.len();
                let distance = (JAIL_INDEX + len - position) % len;
                self.move_player(distance as i64, io);
            }
            SpaceKind::FreeParking => {
                info!("You landed on Free Parking");
                info!("There is nothing to do here, enjoy your stay");
            }
            SpaceKind::CommunityChest => self.draw_community_chest_card(io),
            SpaceKind::Chance => self.draw_chance_card(io),
            SpaceKind::Tax { amount } => {
                info!(
                    "{} needs to pay {amount} to the bank",
                    self.players.player(current).name
                );
                self.players.transfer(Some(current), None, amount);
            }
            SpaceKind::Property { .. } | SpaceKind::Station { .. } | SpaceKind::Utility { .. } => {
                self.land_on_buyable(position, io);
            }
        }
    }

    /// Send the current player straight to jail: full sentence, placed on
    /// the jail space without passing Go, immediate landing action.
    pub fn jail_current_player(&mut self, io: &mut dyn Prompter) {
        let Some(current) = self.players.current() else {
            return;
        };
        let player = self.players.player_mut(current);
        player.jail_turns = JAIL_SENTENCE;
        player.position = JAIL_INDEX;
        self.handle_space(io);
    }

    /// One jail resolution attempt for the current player.
    ///
    /// Order of options: spend a Get Out Of Jail Free card (the chance
    /// one first), pay the fine, roll for a double. Accepting the fine
    /// without the money to pay it wastes the attempt. Every failed
    /// attempt serves one turn of the sentence.
    fn resolve_jail(&mut self, io: &mut dyn Prompter) {
        let Some(current) = self.players.current() else {
            return;
        };
        let player = self.players.player(current);
        if player.jail_turns == 0 {
            info!("You are free to go!");
            return;
        }
        info!("You are stuck in jail for {} turn(s)", player.jail_turns);

        if player.has_gojfc()
            && io.yes_no("Do you want to use your Get Out of Jail Free card? [y/n]")
        {
            let player = self.players.player_mut(current);
            player.jail_turns = 0;
            if player.chance_gojfc {
                player.chance_gojfc = false;
                self.chance.return_gojfc();
            } else {
                player.chest_gojfc = false;
                self.chest.return_gojfc();
            }
            info!("You used your card and are free to go");
            return;
        }

        if io.yes_no(&format!("Do you want to pay {JAIL_FINE} to get out of jail? [y/n]")) {
            if self.players.player(current).money < JAIL_FINE {
                info!("You don't have enough money to pay the fine");
            } else {
                self.players.transfer(Some(current), None, JAIL_FINE);
                self.players.player_mut(current).jail_turns = 0;
                info!("You are free to go");
                return;
            }
        } else {
            info!("Roll the dice and get a double to get out of jail");
            self.roll_dice();
            let (d1, d2) = self.last_roll;
            info!("You rolled a {d1} and a {d2}.");
            if d1 == d2 {
                self.players.player_mut(current).jail_turns = 0;
                info!("You rolled a double and are free to go!");
                return;
            }
            info!("You didn't get a double");
        }

        let player = self.players.player_mut(current);
        player.jail_turns -= 1;
        info!("You have {} turn(s) left in jail", player.jail_turns);
    }

    /// Draw and run a chance card.
    pub fn draw_chance_card(&mut self, io: &mut dyn Prompter) {
        let Some(card) = self.chance.draw(&mut self.rng) else {
            return;
        };
        info!("Chance Card: {}", card.text);
        card.run(self, io);
    }

    /// Draw and run a community chest card.
    pub fn draw_community_chest_card(&mut self, io: &mut dyn Prompter) {
        let Some(card) = self.chest.draw(&mut self.rng) else {
            return;
        };
        info!("Community Chest Card: {}", card.text);
        card.run(self, io);
    }

    /// Strip a departing player of everything they hold: spaces go back
    /// on the market unimproved, ownership counters reset, and any Get
    /// Out Of Jail Free cards return to their decks.
    pub fn release_holdings(&mut self, id: PlayerId) {
        for space in &mut self.spaces {
            if space.owner() == Some(id) {
                space.set_owner(None);
                if let SpaceKind::Property { level, .. } = &mut space.kind {
                    *level = BuildingLevel::Base;
                }
                info!("{} is now available for purchase.", space.name);
            }
        }
        if self.players.player(id).chance_gojfc {
            self.players.player_mut(id).chance_gojfc = false;
            self.chance.return_gojfc();
        }
        if self.players.player(id).chest_gojfc {
            self.players.player_mut(id).chest_gojfc = false;
            self.chest.return_gojfc();
        }
        let player = self.players.player_mut(id);
        player.stations_owned = 0;
        player.utilities_owned = 0;
    }
}
