//! Match CLI
//!
//! Play Qirkat engines against each other and report the results.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use match_runner::{HarnessError, MatchConfig, MatchRunner, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Qirkat Match Runner");
    println!();
    println!("Usage:");
    println!("  qirkat-match [--config FILE] [--white SPEC] [--black SPEC]");
    println!("               [--games N] [--depth D] [--seed S] [--out FILE]");
    println!();
    println!("Engines:");
    println!("  alphabeta     - Alpha-beta search at the default depth");
    println!("  alphabeta:N   - Alpha-beta search N plies deep");
    println!("  random        - Uniformly random legal moves");
    println!();
    println!("Logging is controlled by RUST_LOG (default: info).");
}

/// Command-line overrides on top of the config file.
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    white: Option<String>,
    black: Option<String>,
    games: Option<u32>,
    depth: Option<u8>,
    seed: Option<u64>,
    help: bool,
}

fn value<'a>(flag: &str, it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String> {
    it.next()
        .ok_or_else(|| HarnessError::Usage(format!("{flag} needs a value")))
}

fn number<T: std::str::FromStr>(flag: &str, text: &str) -> Result<T> {
    text.parse()
        .map_err(|_| HarnessError::Usage(format!("{flag}: not a number: {text}")))
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" | "-c" => parsed.config = Some(value(arg, &mut it)?.into()),
            "--out" | "-o" => parsed.out = Some(value(arg, &mut it)?.into()),
            "--white" | "-w" => parsed.white = Some(value(arg, &mut it)?.clone()),
            "--black" | "-b" => parsed.black = Some(value(arg, &mut it)?.clone()),
            "--games" | "-g" => parsed.games = Some(number(arg, value(arg, &mut it)?)?),
            "--depth" | "-d" => parsed.depth = Some(number(arg, value(arg, &mut it)?)?),
            "--seed" | "-s" => parsed.seed = Some(number(arg, value(arg, &mut it)?)?),
            "help" | "--help" | "-h" => parsed.help = true,
            other => return Err(HarnessError::Usage(format!("unknown argument: {other}"))),
        }
    }
    Ok(parsed)
}

fn build_config(args: &Args) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(white) = &args.white {
        config.white = white.clone();
    }
    if let Some(black) = &args.black {
        config.black = black.clone();
    }
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(depth) = args.depth {
        config.set_depth(depth)?;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    info!(
        white = %config.white,
        black = %config.black,
        games = config.games,
        seed = config.seed,
        "starting match"
    );

    let report = MatchRunner::new(config).run_match()?;
    report.print_report();

    if let Some(path) = &args.out {
        report.save(path)?;
        info!(path = %path.display(), "report saved");
    }
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            error!("{e}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
