//! Cross-module scenarios driven through the public engine API with
//! scripted prompts.

use std::sync::Arc;

use rust_monopoly::games::classic;
use rust_monopoly::{
    BoardManager, BuildingLevel, Card, Deck, DeckKind, GameRng, Response,
    ScriptedPrompter, SpaceKind, JAIL_FINE, JAIL_INDEX, JAIL_SENTENCE, PASS_GO_BONUS,
    STARTING_MONEY,
};

fn empty_deck(kind: DeckKind) -> Deck {
    Deck::new(kind, Vec::new())
}

fn board_with(names: &[&str]) -> BoardManager {
    let mut board = BoardManager::new(
        classic::board(),
        empty_deck(DeckKind::Chance),
        empty_deck(DeckKind::CommunityChest),
        GameRng::new(42),
    );
    for name in names {
        board.players_mut().add_player(*name);
    }
    board
}

#[test]
fn test_declined_purchase_is_auctioned_to_the_highest_bidder() {
    let mut board = board_with(&["Alice", "Bob", "Charlie"]);
    let ids: Vec<_> = board.players().roster().to_vec();
    board.players_mut().player_mut(ids[0]).money = 40;
    board.players_mut().player_mut(ids[1]).money = 100;
    board.players_mut().player_mut(ids[2]).money = 60;
    board.players_mut().player_mut(ids[0]).position = 1;

    // Alice declines to buy, then declines to bid; Bob bids 55; Charlie
    // declines; Alice's cash cap eliminates her silently.
    let mut io = ScriptedPrompter::with_responses([
        Response::No,
        Response::No,
        Response::Yes,
        Response::Number(55),
        Response::No,
    ]);
    board.handle_space(&mut io);

    assert_eq!(board.space(1).owner(), Some(ids[1]));
    assert_eq!(board.players().player(ids[1]).money, 45);
    assert_eq!(board.players().player(ids[0]).money, 40);
    assert_eq!(io.remaining(), 0);
}

#[test]
fn test_completing_a_group_unlocks_building_and_raises_rent() {
    let mut board = board_with(&["Alice", "Bob"]);
    let ids: Vec<_> = board.players().roster().to_vec();

    // Alice buys both purple properties at list price.
    for position in [1, 3] {
        board.players_mut().player_mut(ids[0]).position = position;
        let mut io = ScriptedPrompter::with_responses([Response::Yes]);
        board.handle_space(&mut io);
        assert_eq!(board.space(position).owner(), Some(ids[0]));
    }
    assert_eq!(
        board.players().player(ids[0]).money,
        STARTING_MONEY - 60 - 60
    );

    // Completing the group flips both off base rent.
    assert_eq!(board.owned_groups(ids[0]), vec![1, 3]);

    // Two houses on Belleville: rent for Bob jumps from base 2 to 30.
    let mut io = ScriptedPrompter::with_responses([Response::Number(2), Response::Number(1)]);
    board.build_on_properties(&[1, 3], &mut io);
    match &board.space(1).kind {
        SpaceKind::Property { level, .. } => assert_eq!(*level, BuildingLevel::TwoHouses),
        _ => panic!("expected a property"),
    }

    board.players_mut().set_next_player();
    board.players_mut().player_mut(ids[1]).position = 1;
    let mut io = ScriptedPrompter::new();
    board.handle_space(&mut io);
    assert_eq!(board.players().player(ids[1]).money, STARTING_MONEY - 30);
}

#[test]
fn test_drawn_jail_card_is_suppressed_until_spent() {
    let gojfc = Card::get_out_of_jail_free(
        "Get out of Jail Free. This card may be kept until needed",
        Arc::new(|board: &mut BoardManager, _io: &mut dyn rust_monopoly::Prompter| {
            let Some(current) = board.players().current() else {
                return;
            };
            board.players_mut().player_mut(current).chance_gojfc = true;
            board.chance_deck_mut().take_gojfc();
        }),
    );
    let mut board = BoardManager::new(
        classic::board(),
        Deck::new(DeckKind::Chance, vec![gojfc]),
        empty_deck(DeckKind::CommunityChest),
        GameRng::new(42),
    );
    let alice = board.players_mut().add_player("Alice");

    let mut io = ScriptedPrompter::new();
    board.draw_chance_card(&mut io);
    assert!(board.players().player(alice).chance_gojfc);

    // The only card is held: another draw finds nothing and changes
    // nothing.
    board.draw_chance_card(&mut io);
    assert!(board.players().player(alice).chance_gojfc);

    // Spending it in jail frees the player and puts the card back in
    // circulation.
    let mut io = ScriptedPrompter::with_responses([Response::Yes]);
    board.jail_current_player(&mut io);
    let player = board.players().player(alice);
    assert_eq!(player.jail_turns, 0);
    assert!(!player.chance_gojfc);
    assert_eq!(player.money, STARTING_MONEY);

    board.draw_chance_card(&mut ScriptedPrompter::new());
    assert!(board.players().player(alice).chance_gojfc);
}

#[test]
fn test_go_to_jail_card_skips_the_go_bonus() {
    let mut board = BoardManager::new(
        classic::board(),
        Deck::new(
            DeckKind::Chance,
            vec![Card::new(
                "Go to Jail. Do not pass Go. Do not collect 200",
                Arc::new(|board: &mut BoardManager, io: &mut dyn rust_monopoly::Prompter| {
                    board.jail_current_player(io)
                }),
            )],
        ),
        empty_deck(DeckKind::CommunityChest),
        GameRng::new(42),
    );
    let alice = board.players_mut().add_player("Alice");
    board.players_mut().player_mut(alice).position = 36;

    // Land on the chance space at 36; the card jumps backwards to jail
    // with an immediate resolution attempt (decline the fine, fail the
    // double or not; either way no Go bonus was paid).
    let mut io = ScriptedPrompter::with_responses([Response::Yes]);
    board.players_mut().player_mut(alice).money = 10;
    board.handle_space(&mut io);

    let player = board.players().player(alice);
    assert_eq!(player.position, JAIL_INDEX);
    assert_eq!(player.jail_turns, JAIL_SENTENCE - 1);
    assert_eq!(player.money, 10);
}

#[test]
fn test_advance_card_collects_the_go_bonus_on_the_way() {
    let mut board = BoardManager::new(
        classic::board(),
        Deck::new(
            DeckKind::Chance,
            vec![Card::new(
                "Advance to Boulevard de la Villette. If you pass Go, collect 200",
                Arc::new(|board: &mut BoardManager, io: &mut dyn rust_monopoly::Prompter| {
                    board.advance_to(11, io)
                }),
            )],
        ),
        empty_deck(DeckKind::CommunityChest),
        GameRng::new(42),
    );
    let alice = board.players_mut().add_player("Alice");
    board.players_mut().player_mut(alice).position = 36;

    // 36 -> 11 passes Go; buy the property on arrival.
    let mut io = ScriptedPrompter::with_responses([Response::Yes]);
    board.handle_space(&mut io);

    let player = board.players().player(alice);
    assert_eq!(player.position, 11);
    assert_eq!(player.money, STARTING_MONEY + PASS_GO_BONUS - 140);
    assert_eq!(board.space(11).owner(), Some(alice));
}

#[test]
fn test_rent_can_ruin_the_payer_but_still_pays_in_full() {
    let mut board = board_with(&["Alice", "Bob"]);
    let ids: Vec<_> = board.players().roster().to_vec();
    board.space_mut(39).set_owner(Some(ids[1]));
    if let SpaceKind::Property { level, .. } = &mut board.space_mut(39).kind {
        *level = BuildingLevel::Hotel;
    }
    board.players_mut().player_mut(ids[0]).money = 500;
    board.players_mut().player_mut(ids[0]).position = 39;

    // Hotel rent on Rue de la Paix is 2000; Alice bottoms out at zero
    // while Bob is paid in full by the bank.
    let mut io = ScriptedPrompter::new();
    board.handle_space(&mut io);

    assert_eq!(board.players().player(ids[0]).money, 0);
    assert_eq!(board.players().player(ids[1]).money, STARTING_MONEY + 2000);
}

#[test]
fn test_jail_fine_path_full_round_trip() {
    let mut board = board_with(&["Alice", "Bob"]);
    let ids: Vec<_> = board.players().roster().to_vec();

    // Sent to jail, decline everything deterministic, then pay out.
    let mut io = ScriptedPrompter::with_responses([Response::No, Response::Yes]);
    board.players_mut().player_mut(ids[0]).position = 30;
    // Use the card-free fine path: first answer declines the fine which
    // rolls for a double; outcome of that roll only affects the count,
    // so re-check through state rather than assuming.
    board.handle_space(&mut io);
    let after_arrival = board.players().player(ids[0]).jail_turns;
    assert!(after_arrival == 0 || after_arrival == JAIL_SENTENCE - 1);

    if after_arrival > 0 {
        let mut io = ScriptedPrompter::with_responses([Response::Yes]);
        board.handle_space(&mut io);
        let player = board.players().player(ids[0]);
        assert_eq!(player.jail_turns, 0);
        assert_eq!(player.money, STARTING_MONEY - JAIL_FINE);
    }
}
