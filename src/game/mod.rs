//! Game setup, the turn loop, and the win condition.
//!
//! ## Turn shape
//!
//! A turn is: resolve jail instead of moving if jailed, otherwise roll,
//! move, run the landing action, then (on a non-double roll) offer house
//! building. Doubles grant an extra roll within the same turn, three
//! doubles in a row go to jail, and a double that lands its roller in
//! jail forfeits the extra roll. The turn ends with a bankruptcy sweep
//! and the hand-off to the next player.
//!
//! The whole game stops when one player remains or after [`MAX_TURNS`]
//! turns.

use std::collections::BTreeMap;

use tracing::{error, info};

use crate::board::BoardManager;
use crate::core::PlayerId;
use crate::io::Prompter;
use crate::spaces::{BuildingLevel, SpaceKind};

/// Turn cap after which the game is called off undecided.
pub const MAX_TURNS: u32 = 1000;

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Last player standing.
    Winner(PlayerId),
    /// The turn cap was reached with several players still in the game.
    TurnLimit,
}

/// Drives a game of Monopoly over a [`BoardManager`].
#[derive(Debug)]
pub struct GameCore {
    board: BoardManager,
    consecutive_doubles: u8,
}

impl GameCore {
    /// Create a game over a board.
    #[must_use]
    pub fn new(board: BoardManager) -> Self {
        Self {
            board,
            consecutive_doubles: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &BoardManager {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardManager {
        &mut self.board
    }

    /// Register the players: ask how many (2 to 8), then their names.
    pub fn setup(&mut self, io: &mut dyn Prompter) {
        info!("MONOPOLY GAME");
        info!("Welcome to the Monopoly game!");
        let count = io.number("Enter the number of players (2-8): ", 2, 8);
        for i in 0..count {
            let name = io.string(&format!("Enter the name of player {}: ", i + 1), &[]);
            self.board.players_mut().add_player(name);
        }
    }

    /// Play until one player remains or the turn cap is hit.
    pub fn run(&mut self, io: &mut dyn Prompter) -> GameOutcome {
        io.acknowledge("Press Enter to start the game.");
        let mut turns = 0;
        while self.board.players().len() > 1 && turns < MAX_TURNS {
            self.play_turn(io);
            turns += 1;
        }
        info!("Game over!");
        if turns == MAX_TURNS {
            info!("The game has reached the maximum number of turns ({MAX_TURNS}).");
            return GameOutcome::TurnLimit;
        }
        match self.board.players().roster().first() {
            Some(&winner) => {
                info!("The winner is {}!", self.board.players().player(winner).name);
                GameOutcome::Winner(winner)
            }
            // A simultaneous final bankruptcy leaves nobody standing.
            None => {
                info!("Everyone went bankrupt; nobody wins.");
                GameOutcome::TurnLimit
            }
        }
    }

    /// Play one player's turn, including any extra rolls from doubles.
    pub fn play_turn(&mut self, io: &mut dyn Prompter) {
        loop {
            let Some(current) = self.board.players().current() else {
                self.board.players_mut().set_next_player();
                return;
            };
            {
                let player = self.board.players().player(current);
                info!("It is {}'s turn ({}).", player.name, player.money);
            }
            if self.board.players().player(current).jail_turns > 0 {
                self.board.handle_space(io);
                self.board.players_mut().set_next_player();
                return;
            }

            io.acknowledge("Press Enter to roll the dice.");
            self.board.roll_dice();
            let (d1, d2) = self.board.last_roll();
            info!("You rolled a {d1} and a {d2}.");
            self.board.move_player(i64::from(d1) + i64::from(d2), io);

            if d1 == d2 {
                self.consecutive_doubles += 1;
                if self.consecutive_doubles == 3 {
                    info!("You rolled 3 doubles in a row! Go to jail.");
                    self.board.jail_current_player(io);
                    self.board.players_mut().set_next_player();
                    self.consecutive_doubles = 0;
                    return;
                }
                // Ending up in jail off a double (a Go To Jail landing or
                // card) forfeits the extra roll and ends the turn here;
                // the hand-off happens on the jail branch next turn.
                if self.board.players().player(current).jail_turns > 0 {
                    return;
                }
                if self.board.players().player(current).money > 0 {
                    info!("You rolled a double! You get to play again.");
                    continue;
                }
            } else if self.board.players().player(current).money > 0 {
                self.build_phase(current, io);
            }
            break;
        }
        self.sweep_bankrupt();
        self.board.players_mut().set_next_player();
        self.consecutive_doubles = 0;
    }

    /// End-of-turn building: list holdings, then keep offering the fully
    /// owned color groups that still have room to build until the player
    /// stops or none remain.
    fn build_phase(&mut self, current: PlayerId, io: &mut dyn Prompter) {
        let owned: Vec<&str> = self
            .board
            .spaces()
            .iter()
            .filter(|s| s.owner() == Some(current))
            .map(|s| s.name.as_str())
            .collect();
        if !owned.is_empty() {
            info!("You own the following spaces:");
            for (i, name) in owned.iter().enumerate() {
                info!("{}. {name}", i + 1);
            }
        }

        loop {
            let group_indices = self.board.owned_groups(current);
            if group_indices.is_empty() {
                return;
            }
            // Group by color name for the prompt, dropping groups that
            // are hotels throughout.
            let mut by_color: BTreeMap<String, Vec<usize>> = BTreeMap::new();
            for &i in &group_indices {
                if let SpaceKind::Property { color, .. } = &self.board.space(i).kind {
                    by_color.entry(color.to_string()).or_default().push(i);
                }
            }
            by_color.retain(|_, indices| {
                !indices.iter().all(|&i| {
                    matches!(
                        &self.board.space(i).kind,
                        SpaceKind::Property { level, .. } if level.is_hotel()
                    )
                })
            });
            if by_color.is_empty() {
                return;
            }

            info!("You can build on the following properties:");
            let mut colors = Vec::with_capacity(by_color.len());
            for (color, indices) in &by_color {
                info!("Color: {color}");
                colors.push(color.clone());
                for (i, &index) in indices.iter().enumerate() {
                    info!("  {}. {}", i + 1, self.board.space(index).name);
                    let SpaceKind::Property { level, house_price, .. } =
                        &self.board.space(index).kind
                    else {
                        continue;
                    };
                    match level {
                        BuildingLevel::FullGroup => info!(
                            "     - Buildings: None (Price of a house: {house_price})"
                        ),
                        BuildingLevel::OneHouse
                        | BuildingLevel::TwoHouses
                        | BuildingLevel::ThreeHouses => info!(
                            "     - Buildings: {} house(s) (Price of another house: {house_price}/house)",
                            level.buildings()
                        ),
                        BuildingLevel::FourHouses => info!(
                            "     - Buildings: 4 house(s) (Price of a hotel: {house_price})"
                        ),
                        BuildingLevel::Hotel => info!("     - Buildings: Hotel"),
                        BuildingLevel::Base => {
                            error!("a fully owned group should never sit at base rent");
                        }
                    }
                }
            }

            if !io.yes_no("Do you want to build on a property? (y/n)") {
                return;
            }
            let color = io.string(
                "Enter the color of the property you want to build on: ",
                &colors,
            );
            match by_color.get(&color) {
                Some(group) => {
                    let group = group.clone();
                    self.board.build_on_properties(&group, io);
                }
                None => error!("{color} is an invalid color."),
            }
        }
    }

    /// Remove every player who ran out of money, returning their
    /// holdings to the board.
    fn sweep_bankrupt(&mut self) {
        let roster: Vec<PlayerId> = self.board.players().roster().to_vec();
        for id in roster {
            if self.board.players().player(id).money == 0 {
                info!("{} is bankrupt!", self.board.players().player(id).name);
                self.board.release_holdings(id);
                self.board.players_mut().remove_player(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, DeckKind};
    use crate::core::{GameRng, STARTING_MONEY};
    use crate::games::classic;
    use crate::io::{Response, ScriptedPrompter};

    fn game_with(names: &[&str]) -> GameCore {
        let mut board = BoardManager::new(
            classic::board(),
            Deck::new(DeckKind::Chance, Vec::new()),
            Deck::new(DeckKind::CommunityChest, Vec::new()),
            GameRng::new(42),
        );
        for name in names {
            board.players_mut().add_player(*name);
        }
        GameCore::new(board)
    }

    #[test]
    fn test_setup_registers_named_players() {
        let mut game = GameCore::new(BoardManager::new(
            classic::board(),
            Deck::new(DeckKind::Chance, Vec::new()),
            Deck::new(DeckKind::CommunityChest, Vec::new()),
            GameRng::new(42),
        ));
        let mut io = ScriptedPrompter::with_responses([
            Response::Number(3),
            Response::Text("Alice".to_string()),
            Response::Text("Bob".to_string()),
            Response::Text("Charlie".to_string()),
        ]);

        game.setup(&mut io);

        let players = game.board().players();
        assert_eq!(players.len(), 3);
        let names: Vec<_> = players
            .roster()
            .iter()
            .map(|&id| players.player(id).name.clone())
            .collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie"]);
        assert!(players
            .roster()
            .iter()
            .all(|&id| players.player(id).money == STARTING_MONEY));
    }

    #[test]
    fn test_jailed_turn_resolves_jail_and_passes() {
        let mut game = game_with(&["Alice", "Bob"]);
        let ids: Vec<_> = game.board().players().roster().to_vec();
        {
            let player = game.board_mut().players_mut().player_mut(ids[0]);
            player.jail_turns = 2;
            player.position = crate::board::JAIL_INDEX;
        }

        // Pay the fine; the turn still passes without a move.
        let mut io = ScriptedPrompter::with_responses([Response::Yes]);
        game.play_turn(&mut io);

        let player = game.board().players().player(ids[0]);
        assert_eq!(player.jail_turns, 0);
        assert_eq!(player.position, crate::board::JAIL_INDEX);
        assert_eq!(player.money, STARTING_MONEY - crate::board::JAIL_FINE);
        assert_eq!(game.board().players().current(), Some(ids[1]));
    }

    #[test]
    fn test_sweep_removes_broke_players_and_frees_holdings() {
        let mut game = game_with(&["Alice", "Bob", "Charlie"]);
        let ids: Vec<_> = game.board().players().roster().to_vec();
        game.board_mut().space_mut(1).set_owner(Some(ids[1]));
        game.board_mut().players_mut().player_mut(ids[1]).money = 0;

        game.sweep_bankrupt();

        assert_eq!(game.board().players().len(), 2);
        assert!(!game.board().players().roster().contains(&ids[1]));
        assert_eq!(game.board().space(1).owner(), None);
    }

    #[test]
    fn test_sweeping_the_current_player_keeps_rotation() {
        let mut game = game_with(&["Alice", "Bob"]);
        let ids: Vec<_> = game.board().players().roster().to_vec();
        game.board_mut().players_mut().player_mut(ids[0]).money = 0;

        game.sweep_bankrupt();
        game.board_mut().players_mut().set_next_player();

        // Bob inherited the turn when Alice left; the end-of-turn
        // advance must not skip him.
        assert_eq!(game.board().players().current(), Some(ids[1]));
    }

    #[test]
    fn test_build_phase_skips_players_without_a_group() {
        let mut game = game_with(&["Alice", "Bob"]);
        let ids: Vec<_> = game.board().players().roster().to_vec();
        game.board_mut().space_mut(1).set_owner(Some(ids[0]));

        // No full group: the phase ends without consuming any prompt.
        let mut io = ScriptedPrompter::with_responses([Response::Yes]);
        game.build_phase(ids[0], &mut io);
        assert_eq!(io.remaining(), 1);
    }

    #[test]
    fn test_build_phase_builds_on_the_chosen_group() {
        let mut game = game_with(&["Alice", "Bob"]);
        let ids: Vec<_> = game.board().players().roster().to_vec();
        game.board_mut().space_mut(1).set_owner(Some(ids[0]));
        game.board_mut().space_mut(3).set_owner(Some(ids[0]));

        let mut io = ScriptedPrompter::with_responses([
            Response::Yes,
            Response::Text("purple".to_string()),
            Response::Number(1),
            Response::Number(1),
            Response::No,
        ]);
        game.build_phase(ids[0], &mut io);

        match &game.board().space(1).kind {
            SpaceKind::Property { level, .. } => {
                assert_eq!(*level, BuildingLevel::OneHouse);
            }
            _ => panic!("expected a property"),
        }
        assert_eq!(
            game.board().players().player(ids[0]).money,
            STARTING_MONEY - 2 * 50
        );
    }

    #[test]
    fn test_all_hotel_groups_are_not_offered() {
        let mut game = game_with(&["Alice", "Bob"]);
        let ids: Vec<_> = game.board().players().roster().to_vec();
        for index in [1, 3] {
            game.board_mut().space_mut(index).set_owner(Some(ids[0]));
            if let SpaceKind::Property { level, .. } = &mut game.board_mut().space_mut(index).kind
            {
                *level = BuildingLevel::Hotel;
            }
        }

        let mut io = ScriptedPrompter::with_responses([Response::Yes]);
        game.build_phase(ids[0], &mut io);
        assert_eq!(io.remaining(), 1);
    }
}
