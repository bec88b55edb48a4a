//! Command handling for the line protocol.
//!
//! One `Session` owns the engine and the authoritative `TurnContext`. Each
//! input line is handled to completion before the next is read, so the
//! engine only ever sees a settled position.

use anyhow::{bail, Context};
use checkers_core::{
    move_to_text, parse_fen, parse_move, to_fen, Engine, SearchLimits, TurnContext,
};
use classical_engine::MAX_DEPTH;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_DEPTH: u8 = 6;

pub struct Session {
    engine: Box<dyn Engine>,
    ctx: TurnContext,
    depth: u8,
}

impl Session {
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self {
            engine,
            ctx: TurnContext::new(),
            depth: DEFAULT_DEPTH,
        }
    }

    /// Handles one input line. Returns `Ok(false)` once `quit` is read.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(true);
        };

        match command {
            "id" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {DEFAULT_DEPTH} min 1 max {MAX_DEPTH}"
                )?;
                writeln!(out, "idok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(args),
            "newgame" => {
                self.ctx = TurnContext::new();
                self.engine.new_game();
            }
            "position" => {
                if let Err(e) = self.set_position(args) {
                    warn!("position rejected: {e:#}");
                }
            }
            "go" => self.go(args, out)?,
            "winner" => {
                let name = self.ctx.winner().map_or("none", |c| c.name());
                writeln!(out, "winner {name}")?;
            }
            "fen" => writeln!(out, "fen {}", to_fen(&self.ctx.board, self.ctx.turn))?,
            "quit" => return Ok(false),
            _ => debug!(line, "ignoring unknown command"),
        }
        out.flush()?;
        Ok(true)
    }

    // setoption name <Name> value <Value>
    fn set_option(&mut self, args: &[&str]) {
        let name = args
            .iter()
            .position(|&x| x == "name")
            .and_then(|i| args.get(i + 1));
        let value = args
            .iter()
            .position(|&x| x == "value")
            .and_then(|i| args.get(i + 1));

        match (name, value) {
            (Some(name), Some(value)) if name.eq_ignore_ascii_case("depth") => {
                match value.parse::<u8>() {
                    Ok(d) => self.depth = d.clamp(1, MAX_DEPTH),
                    Err(_) => warn!(value, "bad Depth value"),
                }
            }
            (Some(name), Some(value)) => {
                if !self.engine.set_option(name, value) {
                    debug!(name, "unknown option");
                }
            }
            _ => warn!(?args, "malformed setoption"),
        }
    }

    // position startpos|fen <fen> [moves m1 m2 ...]
    fn set_position(&mut self, args: &[&str]) -> anyhow::Result<()> {
        let (mut ctx, rest) = match args {
            ["startpos", rest @ ..] => (TurnContext::new(), rest),
            ["fen", fen, rest @ ..] => {
                let (board, turn) = parse_fen(fen)?;
                (TurnContext::from_position(board, turn), rest)
            }
            _ => bail!("expected startpos or fen"),
        };

        let moves = match rest {
            [] => &[][..],
            ["moves", moves @ ..] => moves,
            _ => bail!("expected moves after the position"),
        };
        for text in moves {
            let mv = parse_move(&ctx.board, ctx.turn, text)?;
            ctx.play_turn(&mv)
                .with_context(|| format!("cannot play {text}"))?;
        }

        self.ctx = ctx;
        Ok(())
    }

    // go [depth N] [movetime MS]
    fn go(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let mut depth = self.depth;
        let mut move_time = None;
        for pair in args.chunks(2) {
            match pair {
                ["depth", v] => {
                    if let Ok(d) = v.parse::<u8>() {
                        depth = d.clamp(1, MAX_DEPTH);
                    }
                }
                ["movetime", v] => {
                    if let Ok(ms) = v.parse::<u64>() {
                        move_time = Some(Duration::from_millis(ms));
                    }
                }
                _ => debug!(?pair, "ignoring go argument"),
            }
        }

        if self.ctx.winner().is_some() {
            return writeln!(out, "bestmove none");
        }

        let limits = match move_time {
            Some(t) => SearchLimits::depth_and_time(depth, t),
            None => SearchLimits::depth(depth),
        };
        let result = self.engine.search(&self.ctx.board, self.ctx.turn, &limits);

        writeln!(
            out,
            "info depth {} score {:.2} nodes {}",
            result.depth, result.score, result.nodes
        )?;
        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", move_to_text(&mv)),
            None => writeln!(out, "bestmove none"),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
