use super::*;

fn s(c: &str) -> Square {
    coord_to_sq(c).unwrap()
}

#[test]
fn test_step_orthogonal_and_diagonal() {
    assert!(Move::step(s("c2"), s("c3")).is_ok());
    assert!(Move::step(s("c2"), s("b2")).is_ok());
    // b2 lies on a diagonal line, b1 does not
    assert!(Move::step(s("b2"), s("c3")).is_ok());
    assert!(matches!(
        Move::step(s("b1"), s("c2")),
        Err(QirkatError::InvalidMove(_))
    ));
}

#[test]
fn test_step_rejects_non_adjacent() {
    assert!(matches!(
        Move::step(s("a1"), s("a3")),
        Err(QirkatError::InvalidMove(_))
    ));
    assert!(matches!(
        Move::step(s("c3"), s("c3")),
        Err(QirkatError::InvalidMove(_))
    ));
    assert!(matches!(
        Move::step(s("e1"), s("a2")),
        Err(QirkatError::InvalidMove(_))
    ));
    assert!(matches!(Move::step(3, 40), Err(QirkatError::InvalidMove(_))));
}

#[test]
fn test_jump_geometry() {
    let mv = Move::jump(s("a1"), s("c3")).unwrap();
    assert!(mv.is_jump());
    assert_eq!(mv.captured_square(), Some(s("b2")));
    assert_eq!(mv.next(), None);

    let mv = Move::jump(s("c1"), s("c3")).unwrap();
    assert_eq!(mv.captured_square(), Some(s("c2")));

    // b1 is off the diagonals
    assert!(Move::jump(s("b1"), s("d3")).is_err());
    // knight-like and three-square hops
    assert!(Move::jump(s("a1"), s("b3")).is_err());
    assert!(Move::jump(s("a1"), s("a4")).is_err());
}

#[test]
fn test_chain_builds_path() {
    let first = Move::jump(s("a1"), s("a3")).unwrap();
    let rest = Move::jump(s("a3"), s("c5")).unwrap();
    let chain = Move::chain(first.clone(), rest.clone()).unwrap();
    assert_eq!(chain.from(), s("a1"));
    assert_eq!(chain.to(), s("c5"));
    assert_eq!(chain.jump_len(), 2);
    assert_eq!(chain.next(), Some(rest));
    assert_eq!(
        chain.captured_squares().collect::<Vec<_>>(),
        vec![s("a2"), s("b4")]
    );

    let step = Move::step(s("c2"), s("c3")).unwrap();
    assert!(Move::chain(step, first.clone()).is_err());
    let elsewhere = Move::jump(s("e1"), s("e3")).unwrap();
    assert!(Move::chain(first, elsewhere).is_err());
}

#[test]
fn test_direction_classification() {
    let dir = |txt: &str| txt.parse::<Move>().unwrap().direction();
    assert_eq!(dir("c2-c3"), Some(Direction::Up));
    assert_eq!(dir("c3-c2"), Some(Direction::Down));
    assert_eq!(dir("c3-b3"), Some(Direction::Left));
    assert_eq!(dir("c3-d3"), Some(Direction::Right));
    assert_eq!(dir("c3-d4"), Some(Direction::Diagonal));
    assert_eq!(dir("c1-c3"), None);
}

#[test]
fn test_single_move_respects_forward_direction() {
    let up: Move = "c2-c3".parse().unwrap();
    let down: Move = "c3-c2".parse().unwrap();
    let side: Move = "c3-d3".parse().unwrap();
    assert!(up.is_single_move(PieceColor::White));
    assert!(!up.is_single_move(PieceColor::Black));
    assert!(down.is_single_move(PieceColor::Black));
    assert!(!down.is_single_move(PieceColor::White));
    assert!(side.is_single_move(PieceColor::White));
    assert!(side.is_single_move(PieceColor::Black));
}

#[test]
fn test_parse_and_display() {
    let mv: Move = "c2-c3".parse().unwrap();
    assert!(!mv.is_jump());
    assert_eq!(mv.to_string(), "c2-c3");

    let mv: Move = "a1-a3".parse().unwrap();
    assert!(mv.is_jump());

    let mv: Move = "a1-a3-a5".parse().unwrap();
    assert_eq!(mv.jump_len(), 2);
    assert_eq!(mv.to_string(), "a1-a3-a5");
}

#[test]
fn test_parse_errors() {
    for bad in ["", "c2", "c2-", "f1-f2", "c0-c1", "c2c3", "c2-c3-"] {
        assert!(
            matches!(bad.parse::<Move>(), Err(QirkatError::Parse(_))),
            "{bad:?} should not parse"
        );
    }
    // well-formed but impossible geometry
    assert!(matches!(
        "a1-d1".parse::<Move>(),
        Err(QirkatError::InvalidMove(_))
    ));
    assert!(matches!(
        "a1-a3-a4".parse::<Move>(),
        Err(QirkatError::InvalidMove(_))
    ));
}
