//! Tournament CLI
//!
//! Run matches between checkers engines and save the results.

use anyhow::{bail, Context};
use checkers_core::Engine;
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use std::env;
use std::path::PathBuf;
use tournament::{MatchConfig, MatchRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-checkers Match Runner");
    println!();
    println!("Usage:");
    println!(
        "  tournament match <engine1> <engine2> [--games N] [--depth D] [--config file.toml] [--out file.json]"
    );
    println!();
    println!("Engines:");
    println!("  classical     - Minimax with alpha-beta and a handcrafted eval");
    println!("  random        - Uniformly random legal turns");
    println!();
    println!("Examples:");
    println!("  tournament match classical random --games 20 --depth 4");
    println!("  tournament match classical classical --config match.toml --out report.json");
}

fn create_engine(spec: &str) -> anyhow::Result<Box<dyn Engine>> {
    match spec.to_lowercase().as_str() {
        "classical" | "classic" => Ok(Box::new(ClassicalEngine::new())),
        "random" => Ok(Box::new(RandomEngine::new())),
        _ => bail!("unknown engine: {spec}"),
    }
}

/// Flags after the two engine names.
#[derive(Debug, Default)]
struct MatchArgs {
    games: Option<u32>,
    depth: Option<u8>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn parse_match_args(args: &[String]) -> anyhow::Result<MatchArgs> {
    let mut parsed = MatchArgs::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .with_context(|| format!("{flag} needs a value"))?;
        match flag {
            "--games" | "-g" => {
                parsed.games = Some(value.parse().with_context(|| format!("bad game count {value}"))?)
            }
            "--depth" | "-d" => {
                parsed.depth = Some(value.parse().with_context(|| format!("bad depth {value}"))?)
            }
            "--config" | "-c" => parsed.config = Some(PathBuf::from(value)),
            "--out" | "-o" => parsed.out = Some(PathBuf::from(value)),
            _ => bail!("unknown option {flag}"),
        }
        i += 2;
    }
    Ok(parsed)
}

fn run_match(args: &[String]) -> anyhow::Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine specifications");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let flags = parse_match_args(&args[2..])?;

    let mut config = match &flags.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(games) = flags.games {
        config.num_games = games;
    }
    if let Some(depth) = flags.depth {
        config.depth = depth;
    }

    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    info!(
        "Match: {} vs {}, {} games, depth {}",
        engine1_spec, engine2_spec, config.num_games, config.depth
    );

    let runner = MatchRunner::new(config);
    let report = runner.play_match(engine1.as_mut(), engine2.as_mut());

    report.print_report();

    if let Some(path) = &flags.out {
        report.save(path)?;
        info!("Report written to {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
