use super::*;

#[test]
fn start_position_is_level() {
    assert_eq!(evaluate(&Board::new()), 0);
}

#[test]
fn forced_capture_counts_against_black() {
    let mut board = Board::new();
    board.apply(&"c2-c3".parse().unwrap()).unwrap();
    // one single capture available to Black, material still even
    assert_eq!(evaluate(&board), -2);
}

#[test]
fn chains_count_for_white_on_top_of_material() {
    let board = Board::from_description(
        "- - - - -  - - - - -  - - w b -  - - b - b  - - - b -",
        PieceColor::White,
    )
    .unwrap();
    // 1 - 4 material, two cycles of four captures
    assert_eq!(evaluate(&board), 3);
}

#[test]
fn black_to_move_subtracts_mobility() {
    let board = Board::from_description(
        "w w - w w  - b w b -  b - - - w  - w b - -  b b - b b",
        PieceColor::Black,
    )
    .unwrap();
    assert_eq!(evaluate(&board), -7);
}
