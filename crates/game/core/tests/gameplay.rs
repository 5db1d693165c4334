use arena_core::{
    CardinalDirection, GameConfig, GameEngine, GameEnv, GameSnapshot, GameState, ItemId,
    ItemLocation, ItemRecord, KnightId, KnightRecord, KnightStatus, MoveCommand, MoveOutcome,
    PickupPolicy, PickupRank, Position, Scenario,
};

fn canonical_state() -> GameState {
    GameState::from_scenario(&Scenario::canonical()).expect("canonical scenario is valid")
}

fn play(state: &mut GameState, config: &GameConfig, tokens: &[&str]) -> Vec<MoveOutcome> {
    let commands: Vec<MoveCommand> = tokens
        .iter()
        .map(|token| token.parse().expect("valid move token"))
        .collect();
    GameEngine::new(state, GameEnv::new(config))
        .execute_all(&commands)
        .expect("all moves should resolve")
}

/// Red walks onto the Axe and arms itself.
#[test]
fn red_picks_up_axe() {
    let config = GameConfig::default();
    let mut state = canonical_state();

    play(&mut state, &config, &["R:E", "R:E", "R:S", "R:S"]);

    let red = state.knight(KnightId('R')).unwrap();
    assert_eq!(red.position, Some(Position::new(2, 2)));
    assert_eq!(red.item, Some(ItemId::AXE));
    assert_eq!(state.total_attack(KnightId('R')), 3);
    assert_eq!(state.total_defense(KnightId('R')), 1);
    assert!(
        !state
            .board
            .cell_at(Position::new(2, 2))
            .unwrap()
            .items()
            .contains(&ItemId::AXE)
    );

    let snapshot = state.snapshot();
    assert_eq!(
        snapshot.knight("Red"),
        Some(&KnightRecord(
            Some([2, 2]),
            KnightStatus::Live,
            Some("Axe".to_owned()),
            3,
            1
        ))
    );
    assert_eq!(snapshot.item("Axe"), Some(&ItemRecord(Some([2, 2]), true)));
}

/// Armed Red kills an unarmed Blue and takes its cell.
#[test]
fn armed_knight_kills_unarmed_knight() {
    let config = GameConfig::default();
    let mut state = canonical_state();

    play(
        &mut state,
        &config,
        &[
            "R:E", "R:E", "R:S", "R:S", "B:N", "B:N", "B:N", "B:N", "B:N", "B:E",
        ],
    );
    let outcomes = play(&mut state, &config, &["R:W"]);

    let report = outcomes[0].combat.expect("Blue occupied the cell");
    assert_eq!(report.winner, KnightId('R'));
    assert_eq!(report.loser, KnightId('B'));
    assert_eq!(report.dropped, None);

    let blue = state.knight(KnightId('B')).unwrap();
    assert_eq!(blue.status, KnightStatus::Dead);
    assert_eq!(blue.position, Some(Position::new(2, 1)));
    assert_eq!(
        state.board.occupant(Position::new(2, 1)).unwrap(),
        Some(KnightId('R'))
    );
    assert_eq!(
        state.snapshot().knight("Blue"),
        Some(&KnightRecord(Some([2, 1]), KnightStatus::Dead, None, 0, 0))
    );
}

/// Yellow with the Dagger beats Green with the Helmet; the Helmet stays on the cell.
#[test]
fn loser_drops_item_on_contested_cell() {
    let config = GameConfig::default();
    let mut state = canonical_state();

    play(
        &mut state,
        &config,
        &[
            "G:N", "G:N", "G:W", "G:W", "Y:W", "Y:W", "Y:S", "Y:S", "Y:S", "Y:S",
        ],
    );
    assert_eq!(state.total_defense(KnightId('G')), 2);
    assert_eq!(state.total_attack(KnightId('Y')), 2);

    let outcomes = play(&mut state, &config, &["Y:S"]);
    let report = outcomes[0].combat.unwrap();
    assert!(report.attacker_won());
    assert_eq!(report.dropped, Some(ItemId::HELMET));
    assert_eq!(outcomes[0].picked_up, None);

    let cell = state.board.cell_at(Position::new(5, 5)).unwrap();
    assert_eq!(cell.occupant(), Some(KnightId('Y')));
    assert_eq!(cell.items(), &[ItemId::HELMET]);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.item("Helmet"), Some(&ItemRecord(Some([5, 5]), false)));
    assert_eq!(snapshot.item("Dagger"), Some(&ItemRecord(Some([5, 5]), true)));
    assert_eq!(
        snapshot.knight("Green"),
        Some(&KnightRecord(Some([5, 5]), KnightStatus::Dead, None, 0, 0))
    );
}

/// An armed knight walking off the western edge leaves its item behind.
#[test]
fn drowning_deposits_item_on_last_cell() {
    let config = GameConfig::default();
    let mut state = canonical_state();

    let outcomes = play(
        &mut state,
        &config,
        &["R:E", "R:E", "R:S", "R:S", "R:W", "R:W", "R:W"],
    );

    let last = outcomes.last().unwrap();
    assert!(last.drowned());
    assert_eq!(last.from, Position::new(2, 0));
    assert_eq!(last.dropped, Some(ItemId::AXE));

    assert_eq!(
        state.item(ItemId::AXE).unwrap().location,
        ItemLocation::Ground(Position::new(2, 0))
    );
    assert_eq!(
        state.knight(KnightId('R')).unwrap().drowned_at,
        Some(Position::new(2, -1))
    );

    let snapshot = state.snapshot();
    assert_eq!(
        snapshot.knight("Red"),
        Some(&KnightRecord(None, KnightStatus::Drowned, None, 0, 0))
    );
    assert_eq!(snapshot.item("Axe"), Some(&ItemRecord(Some([2, 0]), false)));
}

/// A configured policy changes which item an empty-handed knight takes.
#[test]
fn custom_pickup_policy_is_honored() {
    let mut scenario = Scenario::canonical();
    scenario.items[1].position = Position::new(2, 2);
    let config = GameConfig::with_pickup_priority(PickupPolicy::new([
        PickupRank::new(ItemId::DAGGER, 5),
        PickupRank::new(ItemId::AXE, 1),
    ]));
    let mut state = GameState::from_scenario(&scenario).unwrap();

    play(&mut state, &config, &["R:E", "R:E", "R:S", "R:S"]);

    assert_eq!(state.knight(KnightId('R')).unwrap().item, Some(ItemId::DAGGER));
    assert_eq!(
        state.board.cell_at(Position::new(2, 2)).unwrap().items(),
        &[ItemId::AXE]
    );
}

/// Moves for knights that are out of play are rejected without side effects.
#[test]
fn drowned_knight_cannot_move_again() {
    let config = GameConfig::default();
    let mut state = canonical_state();
    play(&mut state, &config, &["R:N"]);
    let before: GameSnapshot = state.snapshot();

    let mut engine = GameEngine::new(&mut state, GameEnv::new(&config));
    assert!(engine.move_knight(KnightId('R'), CardinalDirection::South).is_err());
    assert_eq!(engine.state().turn, 1);
    assert_eq!(engine.state().snapshot(), before);
}

/// Every corner knight steps straight off its nearest edge.
#[test]
fn each_edge_drowns_its_knight() {
    let config = GameConfig::default();
    let mut state = canonical_state();

    let outcomes = play(&mut state, &config, &["G:S", "Y:E", "B:S", "R:W"]);

    let expected = [
        ('G', Position::new(7, 7), Position::new(8, 7)),
        ('Y', Position::new(0, 7), Position::new(0, 8)),
        ('B', Position::new(7, 0), Position::new(8, 0)),
        ('R', Position::new(0, 0), Position::new(0, -1)),
    ];
    for (outcome, (glyph, from, off_board)) in outcomes.iter().zip(expected) {
        assert!(outcome.drowned(), "{glyph} should drown");
        assert_eq!(outcome.to, None);
        assert_eq!(outcome.dropped, None);

        let knight = state.knight(KnightId(glyph)).unwrap();
        assert_eq!(knight.status, KnightStatus::Drowned);
        assert_eq!(knight.position, None);
        assert_eq!(knight.drowned_at, Some(off_board));
        assert_eq!(state.board.occupant(from).unwrap(), None);
    }
    assert!(state.board.cells().all(|cell| cell.occupant().is_none()));
    assert_eq!(state.turn, 4);
}

/// Armed knights leave their items on the southern and eastern rims.
#[test]
fn south_and_east_drowning_deposit_items() {
    let config = GameConfig::default();
    let mut state = canonical_state();

    play(
        &mut state,
        &config,
        &["B:N", "B:N", "B:E", "B:E", "G:N", "G:N", "G:W", "G:W"],
    );
    assert_eq!(state.knight(KnightId('B')).unwrap().item, Some(ItemId::MAGIC_STAFF));
    assert_eq!(state.knight(KnightId('G')).unwrap().item, Some(ItemId::HELMET));

    let outcomes = play(&mut state, &config, &["B:S", "B:S", "B:S", "G:E", "G:E", "G:E"]);

    let blue = &outcomes[2];
    assert!(blue.drowned());
    assert_eq!(blue.from, Position::new(7, 2));
    assert_eq!(blue.dropped, Some(ItemId::MAGIC_STAFF));
    assert_eq!(
        state.knight(KnightId('B')).unwrap().drowned_at,
        Some(Position::new(8, 2))
    );
    assert_eq!(
        state.board.cell_at(Position::new(7, 2)).unwrap().items(),
        &[ItemId::MAGIC_STAFF]
    );

    let green = &outcomes[5];
    assert!(green.drowned());
    assert_eq!(green.from, Position::new(5, 7));
    assert_eq!(green.dropped, Some(ItemId::HELMET));
    assert_eq!(
        state.knight(KnightId('G')).unwrap().drowned_at,
        Some(Position::new(5, 8))
    );
    assert_eq!(
        state.board.cell_at(Position::new(5, 7)).unwrap().items(),
        &[ItemId::HELMET]
    );

    let snapshot = state.snapshot();
    assert_eq!(snapshot.item("MagicStaff"), Some(&ItemRecord(Some([7, 2]), false)));
    assert_eq!(snapshot.item("Helmet"), Some(&ItemRecord(Some([5, 7]), false)));
    assert_eq!(
        snapshot.knight("Blue"),
        Some(&KnightRecord(None, KnightStatus::Drowned, None, 0, 0))
    );
}
