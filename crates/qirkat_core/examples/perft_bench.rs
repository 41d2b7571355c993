//! Perft timing over a few fixed Qirkat positions.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p qirkat_core -- [depth] [layout] [w|b]
//!
//! With a layout, only that position is counted (White to move unless the
//! third argument says otherwise).

use qirkat_core::{perft, Board, PieceColor, INITIAL_LAYOUT};
use std::env;
use std::time::{Duration, Instant};

const TEST_POSITIONS: &[(&str, &str, PieceColor)] = &[
    ("Initial", INITIAL_LAYOUT, PieceColor::White),
    (
        "Open middle",
        "w w - w w  - b w b -  b - - - w  - w b - -  b b - b b",
        PieceColor::Black,
    ),
    (
        "Crowded",
        "w w w w w  w w - w w  b b w - b  b b b b b  b b b b b",
        PieceColor::Black,
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(7);

    if let Some(layout) = args.get(2) {
        let to_move = args
            .get(3)
            .and_then(|s| s.chars().next())
            .and_then(PieceColor::from_char)
            .filter(|c| c.is_piece())
            .unwrap_or(PieceColor::White);
        match Board::from_description(layout, to_move) {
            Ok(board) => run_single_position(board, depth),
            Err(e) => eprintln!("{e}"),
        }
    } else {
        run_all_positions(depth);
    }
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_position(mut board: Board, depth: u8) {
    println!("{}", board.to_string_with_legend());
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(&mut board, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, layout, to_move) in TEST_POSITIONS {
        let Ok(mut board) = Board::from_description(layout, *to_move) else {
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut board, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
