//! The classic French-edition board and its card decks.
//!
//! Forty spaces around the Paris street list, sixteen community chest
//! cards, and sixteen chance cards. [`game`] wires them into a ready
//! [`GameCore`] seeded for deterministic play.

use std::sync::Arc;

use tracing::info;

use crate::board::BoardManager;
use crate::cards::{Card, CardEffect, Deck, DeckKind};
use crate::core::GameRng;
use crate::game::GameCore;
use crate::io::Prompter;
use crate::spaces::{ColorGroup, Space, SpaceKind};

/// The forty spaces of the classic board, Go first.
#[must_use]
pub fn board() -> Vec<Space> {
    vec![
        Space::go(),
        Space::property("Boulevard de Belleville", ColorGroup::Purple, 60, 50, [4, 10, 30, 90, 160, 250, 2]),
        Space::community_chest(),
        Space::property("Rue Lecourbe", ColorGroup::Purple, 60, 50, [8, 20, 60, 180, 320, 450, 4]),
        Space::tax("Impôt sur le revenu", 200),
        Space::station("Gare Montparnasse"),
        Space::property("Avenue de Vaugirard", ColorGroup::LightBlue, 100, 50, [12, 30, 90, 270, 400, 550, 6]),
        Space::chance(),
        Space::property("Rue de Courcelles", ColorGroup::LightBlue, 100, 50, [12, 30, 90, 270, 400, 550, 6]),
        Space::property("Avenue de la République", ColorGroup::LightBlue, 120, 50, [16, 40, 100, 300, 450, 600, 8]),
        Space::jail(),
        Space::property("Boulevard de la Villette", ColorGroup::Pink, 140, 100, [20, 50, 150, 450, 625, 750, 10]),
        Space::utility("Compagnie de distribution d'électricité"),
        Space::property("Avenue de Neuilly", ColorGroup::Pink, 140, 100, [20, 50, 150, 450, 625, 750, 10]),
        Space::property("Rue de Paradis", ColorGroup::Pink, 160, 100, [24, 60, 180, 500, 700, 900, 12]),
        Space::station("Gare de Lyon"),
        Space::property("Avenue Mozart", ColorGroup::Orange, 180, 100, [28, 70, 200, 550, 750, 950, 14]),
        Space::community_chest(),
        Space::property("Boulevard Saint-Michel", ColorGroup::Orange, 180, 100, [28, 70, 200, 550, 750, 950, 14]),
        Space::property("Place Pigalle", ColorGroup::Orange, 200, 100, [32, 80, 220, 600, 800, 1000, 16]),
        Space::free_parking(),
        Space::property("Avenue Matignon", ColorGroup::Red, 220, 150, [36, 90, 250, 700, 875, 1050, 18]),
        Space::chance(),
        Space::property("Boulevard Malesherbes", ColorGroup::Red, 220, 150, [36, 90, 250, 700, 875, 1050, 18]),
        Space::property("Avenue Henri-Martin", ColorGroup::Red, 240, 150, [40, 100, 300, 750, 925, 1100, 20]),
        Space::station("Gare du Nord"),
        Space::property("Faubourg Saint-Honoré", ColorGroup::Yellow, 260, 150, [44, 110, 330, 800, 975, 1150, 22]),
        Space::property("Place de la Bourse", ColorGroup::Yellow, 260, 150, [44, 110, 330, 800, 975, 1150, 22]),
        Space::utility("Compagnie des eaux"),
        Space::property("Rue La Fayette", ColorGroup::Yellow, 280, 150, [48, 120, 360, 850, 1025, 1200, 24]),
        Space::go_to_jail(),
        Space::property("Avenue de Breteuil", ColorGroup::Green, 300, 200, [52, 130, 390, 900, 1100, 1275, 26]),
        Space::property("Avenue Foch", ColorGroup::Green, 300, 200, [52, 130, 390, 900, 1100, 1275, 26]),
        Space::community_chest(),
        Space::property("Boulevard des Capucines", ColorGroup::Green, 320, 200, [56, 150, 450, 1000, 1200, 1400, 28]),
        Space::station("Gare Saint-Lazare"),
        Space::chance(),
        Space::property("Avenue des Champs-Élysées", ColorGroup::Blue, 350, 200, [70, 175, 500, 1100, 1300, 1500, 35]),
        Space::tax("Taxe de luxe", 100),
        Space::property("Rue de la Paix", ColorGroup::Blue, 400, 200, [100, 200, 600, 1400, 1700, 2000, 50]),
    ]
}

fn gain(amount: i64) -> CardEffect {
    Arc::new(move |board, _io| {
        let Some(current) = board.players().current() else {
            return;
        };
        board.players_mut().transfer(None, Some(current), amount);
    })
}

fn pay(amount: i64) -> CardEffect {
    Arc::new(move |board, _io| {
        let Some(current) = board.players().current() else {
            return;
        };
        board.players_mut().transfer(Some(current), None, amount);
    })
}

fn advance_to(target: usize) -> CardEffect {
    Arc::new(move |board, io| board.advance_to(target, io))
}

fn go_to_jail() -> CardEffect {
    Arc::new(|board, io| board.jail_current_player(io))
}

/// Charge per house and per hotel across the player's completed groups.
fn repairs(per_house: i64, per_hotel: i64) -> CardEffect {
    Arc::new(move |board: &mut BoardManager, _io: &mut dyn Prompter| {
        let Some(current) = board.players().current() else {
            return;
        };
        let mut houses: i64 = 0;
        let mut hotels: i64 = 0;
        for i in board.owned_groups(current) {
            if let SpaceKind::Property { level, .. } = &board.space(i).kind {
                houses += i64::from(level.houses());
                if level.is_hotel() {
                    hotels += 1;
                }
            }
        }
        info!("You own {houses} houses and {hotels} hotels.");
        info!("You have to pay {}.", houses * per_house + hotels * per_hotel);
        board
            .players_mut()
            .transfer(Some(current), None, houses * per_house + hotels * per_hotel);
    })
}

const GOJFC_TEXT: &str = "Get out of Jail Free. This card may be kept until needed";

/// The sixteen community chest cards.
#[must_use]
pub fn community_chest_deck() -> Deck {
    let cards = vec![
        Card::get_out_of_jail_free(
            GOJFC_TEXT,
            Arc::new(|board, _io| {
                let Some(current) = board.players().current() else {
                    return;
                };
                board.players_mut().player_mut(current).chest_gojfc = true;
                board.chest_deck_mut().take_gojfc();
            }),
        ),
        Card::new("Advance to Go", advance_to(0)),
        Card::new("Receive your annual income of 100", gain(100)),
        Card::new("Go to Jail. Do not pass Go. Do not collect 200", go_to_jail()),
        Card::new("You have won second prize in a beauty contest. Collect 10", gain(10)),
        Card::new("Go back to Belleville", advance_to(1)),
        Card::new(
            "Pay a fine of 10 or draw a Chance card",
            Arc::new(|board, io| {
                let Some(current) = board.players().current() else {
                    return;
                };
                if io.yes_no("Do you want to draw a Chance card? (y/n)") {
                    board.draw_chance_card(io);
                } else {
                    board.players_mut().transfer(Some(current), None, 10);
                }
            }),
        ),
        Card::new("The sale of your stock earns you 50", gain(50)),
        Card::new("Pay the doctor's fee of 50", pay(50)),
        Card::new("Pay your hospital fee of 100", pay(100)),
        Card::new("Bank error in your favor. Collect 200", gain(200)),
        Card::new("Receive your 7% interest on loan: 25", gain(25)),
        Card::new("The contributions reimburse you the amount of 20", gain(20)),
        Card::new("You inherit 100", gain(100)),
        Card::new("Pay your Insurance Premium of 50", pay(50)),
        Card::new(
            "It's your birthday, each player must give you 10",
            Arc::new(|board, _io| {
                let Some(current) = board.players().current() else {
                    return;
                };
                for other in board.players().roster().to_vec() {
                    if other != current {
                        board.players_mut().transfer(Some(other), Some(current), 10);
                    }
                }
            }),
        ),
    ];
    Deck::new(DeckKind::CommunityChest, cards)
}

/// The sixteen chance cards.
#[must_use]
pub fn chance_deck() -> Deck {
    let cards = vec![
        Card::new(
            "Make repairs to all your houses. Pay 25 for each house and 100 for each hotel",
            repairs(25, 100),
        ),
        Card::new("You won the crossword prize. Receive 100", gain(100)),
        Card::new("Fine for drunkenness. Pay 20", pay(20)),
        Card::new("Go to Avenue Henri-Martin. If you pass Go, collect 200", advance_to(24)),
        Card::new("The bank pays you a dividend of 50", gain(50)),
        Card::new("Go to Lyon Station. If you pass Go, collect 200", advance_to(15)),
        Card::new(
            "Advance to Boulevard de la Villette. If you pass Go, collect 200",
            advance_to(11),
        ),
        Card::new("Go to Rue de la Paix", advance_to(39)),
        Card::get_out_of_jail_free(
            GOJFC_TEXT,
            Arc::new(|board, _io| {
                let Some(current) = board.players().current() else {
                    return;
                };
                board.players_mut().player_mut(current).chance_gojfc = true;
                board.chance_deck_mut().take_gojfc();
            }),
        ),
        Card::new("Go to Jail. Do not pass Go. Do not collect 200", go_to_jail()),
        Card::new("Speeding fine. Pay 15", pay(15)),
        Card::new(
            "You are taxed for road repairs at a rate of 40 per house and 115 per hotel",
            repairs(40, 115),
        ),
        Card::new("Move back three spaces", Arc::new(|board, io| board.move_player(-3, io))),
        Card::new("Your property and loan are paying off. You must receive 150", gain(150)),
        Card::new("Pay for tuition fees 150", pay(150)),
        Card::new("Advance to Go", advance_to(0)),
    ];
    Deck::new(DeckKind::Chance, cards)
}

/// A fully assembled classic game, seeded for deterministic dice and
/// deck order.
#[must_use]
pub fn game(seed: u64) -> GameCore {
    GameCore::new(BoardManager::new(
        board(),
        chance_deck(),
        community_chest_deck(),
        GameRng::new(seed),
    ))
}
