use super::*;

#[test]
fn empty_file_gives_defaults() {
    let config = MatchConfig::from_toml_str("").unwrap();
    assert_eq!(config, MatchConfig::default());
    assert_eq!(config.white, "alphabeta:5");
    assert_eq!(config.black, "random");
}

#[test]
fn partial_file_overrides_fields() {
    let config = MatchConfig::from_toml_str(
        r#"
games = 4
seed = 99
white = "random"
black = "ab:2"
to_move = "black"
start = "w w - w w  - b w b -  b - - - w  - w b - -  b b - b b"
"#,
    )
    .unwrap();

    assert_eq!(config.games, 4);
    assert_eq!(config.seed, 99);
    assert_eq!(config.max_moves, 200);
    assert_eq!(
        config.engines().unwrap(),
        (EngineSpec::Random, EngineSpec::AlphaBeta { depth: 2 })
    );
    let board = config.start_board().unwrap();
    assert_eq!(board.turn(), PieceColor::Black);
    assert_eq!(board.legal_moves().len(), 4);
}

#[test]
fn config_survives_toml_round_trip() {
    let config = MatchConfig {
        games: 3,
        start: Some(INITIAL_LAYOUT.to_string()),
        ..Default::default()
    };
    let text = config.to_toml_string().unwrap();
    assert_eq!(MatchConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = MatchConfig::from_toml_str("games = \"many\"").unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}

#[test]
fn engine_specs_parse() {
    assert_eq!("alphabeta".parse::<EngineSpec>().unwrap(), EngineSpec::AlphaBeta { depth: MAX_DEPTH });
    assert_eq!("AlphaBeta:3".parse::<EngineSpec>().unwrap(), EngineSpec::AlphaBeta { depth: 3 });
    assert_eq!("random".parse::<EngineSpec>().unwrap(), EngineSpec::Random);
    assert!(matches!("minimax".parse::<EngineSpec>(), Err(HarnessError::UnknownEngine(_))));
    assert!("alphabeta:deep".parse::<EngineSpec>().is_err());
    assert!("random:2".parse::<EngineSpec>().is_err());
}

#[test]
fn set_depth_only_touches_alphabeta() {
    let mut config = MatchConfig::default();
    config.set_depth(2).unwrap();
    assert_eq!(config.white, "alphabeta:2");
    assert_eq!(config.black, "random");
}

#[test]
fn validate_rejects_bad_start() {
    let config = MatchConfig {
        start: Some("w w w".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(HarnessError::Rules(qirkat_core::QirkatError::InvalidLayout(_)))
    ));
}

#[test]
fn side_maps_to_piece_color() {
    assert_eq!(PieceColor::from(Side::White), PieceColor::White);
    assert_eq!(Side::from_color(PieceColor::Black), Some(Side::Black));
    assert_eq!(Side::from_color(PieceColor::Empty), None);
    assert_eq!(Side::Black.opposite().to_string(), "White");
}
