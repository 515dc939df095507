use cardroom_engine::config::{TableConfig, MAX_PLAYERS};
use cardroom_engine::errors::ErrorKind;
use cardroom_engine::game::GameState;

#[test]
fn defaults_are_valid() {
    let cfg = TableConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.small_blind(), 5);
}

#[test]
fn parses_a_full_table() {
    let cfg = TableConfig::from_toml_str(
        r#"
        num_players = 9
        starting_money = 2500
        big_blind = 50
        seed = 42
        "#,
    )
    .unwrap();
    assert_eq!(
        cfg,
        TableConfig {
            num_players: 9,
            starting_money: 2500,
            big_blind: 50,
            seed: Some(42),
        }
    );
    let g = GameState::from_config(&cfg).unwrap();
    assert_eq!(g.players().len(), 9);
    assert_eq!(g.small_blind_amount(), 25);
    assert_eq!(g.big_blind_amount(), 50);
    assert_eq!(g.small_blind_pos(), 0);
    assert_eq!(g.big_blind_pos(), 1);
}

#[test]
fn empty_document_gives_defaults() {
    assert_eq!(TableConfig::from_toml_str("").unwrap(), TableConfig::default());
}

#[test]
fn rejects_unusable_tables() {
    let bad = [
        "num_players = 1",
        "num_players = 23",
        "big_blind = 1",
        "starting_money = 0",
        "num_players = 22\nstarting_money = 4000000000",
        "num_players = \"four\"",
        "this is not toml",
    ];
    for doc in bad {
        let err = TableConfig::from_toml_str(doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig, "{doc}");
    }
}

#[test]
fn new_game_validates_its_arguments() {
    assert!(GameState::new_game(2, 100, 10).is_ok());
    assert!(GameState::new_game(MAX_PLAYERS, 100, 10).is_ok());
    assert!(GameState::new_game(MAX_PLAYERS + 1, 100, 10).is_err());
    assert!(GameState::new_game(0, 100, 10).is_err());
}

#[test]
fn largest_table_can_play_a_full_hand() {
    let mut g = GameState::new_game(MAX_PLAYERS, 100, 10).unwrap();
    g.new_round().unwrap();
    for _ in 0..4 {
        g.advance_phase().unwrap();
    }
    assert_eq!(g.board().len(), 5);
    assert_eq!(g.remaining_cards(), 52 - 2 * MAX_PLAYERS - 8);
}
