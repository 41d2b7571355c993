//! Match configuration and engine selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use alphabeta_engine::{AlphaBetaEngine, MAX_DEPTH};
use qirkat_core::{Board, Engine, PieceColor, INITIAL_LAYOUT};
use random_engine::RandomEngine;

use crate::error::{HarnessError, Result};

/// A side as written in config files and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn from_color(color: PieceColor) -> Option<Side> {
        match color {
            PieceColor::White => Some(Side::White),
            PieceColor::Black => Some(Side::Black),
            PieceColor::Empty => None,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl From<Side> for PieceColor {
    fn from(side: Side) -> Self {
        match side {
            Side::White => PieceColor::White,
            Side::Black => PieceColor::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&PieceColor::from(*self), f)
    }
}

/// Configuration for a match, loadable from TOML.
///
/// ```toml
/// games = 20
/// white = "alphabeta:4"
/// black = "random"
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies per game before it is abandoned as unfinished
    pub max_moves: u32,
    /// Whether the engines swap colors every game
    pub alternate_colors: bool,
    /// Base seed; game `n` seeds both engines from `seed + n`
    pub seed: u64,
    /// Engine spec of the first engine, White in game one
    pub white: String,
    /// Engine spec of the second engine
    pub black: String,
    /// Board description to start from instead of the initial layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Side to move in the start position
    pub to_move: Side,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_moves: 200,
            alternate_colors: true,
            seed: 0,
            white: EngineSpec::AlphaBeta { depth: MAX_DEPTH }.to_string(),
            black: EngineSpec::Random.to_string(),
            start: None,
            to_move: Side::White,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// The layout every game starts from.
    pub fn start_description(&self) -> &str {
        self.start.as_deref().unwrap_or(INITIAL_LAYOUT)
    }

    pub fn start_board(&self) -> Result<Board> {
        Ok(Board::from_description(
            self.start_description(),
            self.to_move.into(),
        )?)
    }

    /// Parsed engine specs for (first, second).
    pub fn engines(&self) -> Result<(EngineSpec, EngineSpec)> {
        Ok((self.white.parse()?, self.black.parse()?))
    }

    /// Sets the search depth of every alpha-beta engine in the match.
    pub fn set_depth(&mut self, depth: u8) -> Result<()> {
        let (first, second) = self.engines()?;
        self.white = first.with_depth(depth).to_string();
        self.black = second.with_depth(depth).to_string();
        Ok(())
    }

    /// Checks the whole config without playing anything.
    pub fn validate(&self) -> Result<()> {
        self.engines()?;
        self.start_board()?;
        Ok(())
    }
}

/// Which engine plays a seat, written `alphabeta[:depth]` or `random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSpec {
    AlphaBeta { depth: u8 },
    Random,
}

impl EngineSpec {
    pub fn with_depth(self, depth: u8) -> Self {
        match self {
            EngineSpec::AlphaBeta { .. } => EngineSpec::AlphaBeta { depth },
            EngineSpec::Random => EngineSpec::Random,
        }
    }

    pub fn depth(self) -> u8 {
        match self {
            EngineSpec::AlphaBeta { depth } => depth,
            EngineSpec::Random => 1,
        }
    }

    /// Builds a fresh engine seeded with `seed`.
    pub fn create(self, seed: u64) -> Box<dyn Engine> {
        match self {
            EngineSpec::AlphaBeta { .. } => Box::new(AlphaBetaEngine::with_seed(seed)),
            EngineSpec::Random => Box::new(RandomEngine::with_seed(seed)),
        }
    }
}

impl FromStr for EngineSpec {
    type Err = HarnessError;

    fn from_str(spec: &str) -> Result<Self> {
        let (name, depth) = match spec.split_once(':') {
            Some((name, depth)) => (name, Some(depth)),
            None => (spec, None),
        };
        match name.trim().to_lowercase().as_str() {
            "alphabeta" | "ab" => {
                let depth = match depth {
                    Some(d) => d
                        .trim()
                        .parse()
                        .map_err(|_| HarnessError::UnknownEngine(spec.to_string()))?,
                    None => MAX_DEPTH,
                };
                Ok(EngineSpec::AlphaBeta { depth })
            }
            "random" | "rand" if depth.is_none() => Ok(EngineSpec::Random),
            _ => Err(HarnessError::UnknownEngine(spec.to_string())),
        }
    }
}

impl fmt::Display for EngineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSpec::AlphaBeta { depth } => write!(f, "alphabeta:{depth}"),
            EngineSpec::Random => f.write_str("random"),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
