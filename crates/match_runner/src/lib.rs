//! Match Runner for Qirkat engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines from a TOML config
//! - Replaying and validating recorded games
//! - Saving JSON reports and printing result tables
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta at depth 5 against the random player
//! cargo run -p match_runner -- --white alphabeta:5 --black random --games 20
//!
//! # Everything from a config file, report written to disk
//! cargo run -p match_runner -- --config match.toml --out report.json
//! ```

mod config;
mod error;
mod match_runner;
mod replay;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use replay::*;
pub use results::*;
