//! Match runner for playing games between engines

use qirkat_core::{BoardEvent, Engine, PieceColor};
use tracing::{debug, info, warn};

use crate::config::{EngineSpec, MatchConfig, Side};
use crate::error::Result;
use crate::replay::replay;
use crate::results::{GameRecord, GameResult, MatchReport};

/// An engine together with the depth it searches at.
pub struct Player {
    pub label: String,
    pub engine: Box<dyn Engine>,
    pub depth: u8,
}

impl Player {
    pub fn new(spec: EngineSpec, seed: u64) -> Self {
        Self {
            label: spec.to_string(),
            engine: spec.create(seed),
            depth: spec.depth(),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play the configured number of games.
    ///
    /// Results are from the first engine's perspective. Each game gets
    /// fresh engines seeded from the base seed plus the game index, and
    /// every transcript is replayed before it is recorded.
    pub fn run_match(&self) -> Result<MatchReport> {
        let (first, second) = self.config.engines()?;
        let mut report = MatchReport::new(self.config.clone());

        for game_num in 0..self.config.games {
            let seed = self.config.seed.wrapping_add(u64::from(game_num));
            let mut p1 = Player::new(first, seed);
            let mut p2 = Player::new(second, seed.wrapping_add(1));

            // Alternate colors if configured
            let first_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if first_white {
                self.play_game(game_num + 1, &mut p1, &mut p2)?
            } else {
                self.play_game(game_num + 1, &mut p2, &mut p1)?
            };

            let first_side = if first_white { Side::White } else { Side::Black };
            let result = match record.winner {
                Some(side) if side == first_side => GameResult::Win,
                Some(_) => GameResult::Loss,
                None => GameResult::Unfinished,
            };

            let winner = record.winner.map_or_else(|| "none".to_string(), |s| s.to_string());
            report.add_game(record, result);
            info!(
                game = game_num + 1,
                of = self.config.games,
                winner = %winner,
                wins = report.result.wins,
                losses = report.result.losses,
                unfinished = report.result.unfinished,
                "game finished"
            );
        }

        Ok(report)
    }

    /// Play a single game from the configured start position.
    pub fn play_game(
        &self,
        number: u32,
        white: &mut Player,
        black: &mut Player,
    ) -> Result<GameRecord> {
        let mut board = self.config.start_board()?;
        white.engine.new_game();
        black.engine.new_game();

        let mut transcript: Vec<String> = Vec::new();
        let mut winner = None;

        if board.game_over() {
            winner = Side::from_color(board.turn().opposite());
        }

        while winner.is_none() && (transcript.len() as u32) < self.config.max_moves {
            let mover = board.turn();
            let player = if mover == PieceColor::White {
                &mut *white
            } else {
                &mut *black
            };

            let result = player.engine.search(&board, player.depth);
            debug!(
                engine = player.engine.name(),
                score = result.score,
                nodes = result.nodes,
                "searched"
            );

            let Some(mv) = result.best_move else {
                // Only a finished position has no move; anything else forfeits.
                warn!(engine = %player.label, "engine returned no move, forfeiting");
                winner = Side::from_color(mover.opposite());
                break;
            };

            let event = board.apply(&mv)?;
            info!("{mover} moves {mv}.");
            transcript.push(mv.to_string());

            if let BoardEvent::Applied {
                game_over: true,
                mover,
                ..
            } = event
            {
                info!("{mover} wins.");
                winner = Side::from_color(mover);
            }
        }

        if winner.is_none() {
            info!(plies = transcript.len(), "move limit reached");
        }

        let replayed = replay(
            self.config.start_description(),
            self.config.to_move.into(),
            &transcript[..],
        )?;
        debug_assert_eq!(replayed.cells(), board.cells());

        Ok(GameRecord {
            number,
            white: white.label.clone(),
            black: black.label.clone(),
            winner,
            plies: transcript.len() as u32,
            transcript,
        })
    }
}

/// Quick utility to run a match between two engine specs
pub fn quick_match(white: &str, black: &str, games: u32, seed: u64) -> Result<MatchReport> {
    let config = MatchConfig {
        games,
        seed,
        white: white.to_string(),
        black: black.to_string(),
        ..Default::default()
    };
    MatchRunner::new(config).run_match()
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
