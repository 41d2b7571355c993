//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{MatchConfig, Side};
use crate::error::{HarnessError, Result};

/// Result of a single game from the first engine's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    /// Move limit reached with both sides still able to move
    Unfinished,
}

/// Tally of a match from the first engine's point of view
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub unfinished: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Unfinished => self.unfinished += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.unfinished
    }

    /// Share of points, counting an unfinished game as half.
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.unfinished as f64) / total
    }
}

/// One played game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    /// 1-based game number
    pub number: u32,
    pub white: String,
    pub black: String,
    /// Side that left its opponent without a move
    pub winner: Option<Side>,
    pub plies: u32,
    /// Every move in notation, first ply first
    pub transcript: Vec<String>,
}

/// Complete match results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    /// Name/description of the match
    pub name: String,
    pub engine1: String,
    pub engine2: String,
    /// Configuration used
    pub config: MatchConfig,
    pub games: Vec<GameRecord>,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            name: format!("{} vs {}", config.white, config.black),
            engine1: config.white.clone(),
            engine2: config.black.clone(),
            config,
            games: Vec::new(),
            result: MatchResult::new(),
        }
    }

    /// Add a finished game, scored for `engine1`.
    pub fn add_game(&mut self, record: GameRecord, result: GameResult) {
        self.result.record(result);
        self.games.push(record);
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| HarnessError::io(path, e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Config: {} games, max {} plies, seed {}\n\n",
            self.config.games, self.config.max_moves, self.config.seed
        ));

        report.push_str(&format!(
            "{:>4}  {:<14} {:<14} {:<8} {:>5}\n",
            "#", "White", "Black", "Winner", "Plies"
        ));
        report.push_str(&"-".repeat(50));
        report.push('\n');

        for game in &self.games {
            let winner = game.winner.map_or_else(|| "-".to_string(), |s| s.to_string());
            report.push_str(&format!(
                "{:>4}  {:<14} {:<14} {:<8} {:>5}\n",
                game.number, game.white, game.black, winner, game.plies
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} unfinished (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.unfinished,
            self.result.score() * 100.0
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
