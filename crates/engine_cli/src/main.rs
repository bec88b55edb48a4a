//! Line-protocol checkers engine.
//!
//! Reads commands from stdin and answers on stdout; logs go to stderr so
//! they never mix with protocol replies. Pass `random` as the first
//! argument to play random legal turns instead of searching.

mod session;

use anyhow::Context;
use checkers_core::Engine;
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use std::io::{self, BufRead};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::session::Session;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let engine: Box<dyn Engine> = match std::env::args().nth(1).as_deref() {
        Some("random") => Box::new(RandomEngine::new()),
        _ => Box::new(ClassicalEngine::new()),
    };
    info!(engine = engine.name(), "engine ready");

    let mut session = Session::new(engine);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if !session.handle(&line, &mut stdout).context("failed to write reply")? {
            break;
        }
    }
    Ok(())
}
