//! Match runner for playing games between engines

use anyhow::Context;
use checkers_core::{move_to_text, Color, Engine, SearchLimits, TurnContext};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::results::{GameRecord, GameResult, MatchReport, MatchResult, Termination};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum time per move in milliseconds (None = no limit)
    pub move_time_ms: Option<u64>,
    /// Plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Random plies played before the engines take over
    pub opening_plies: u32,
    /// Seed for the opening generator
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            move_time_ms: None,
            max_plies: 200,
            alternate_colors: true,
            opening_plies: 0,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Reads a TOML file; missing keys keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        }
    }

    /// Opening generator for one game. Both games of a color-swapped pair
    /// get the same opening.
    fn opening_rng(&self, game_num: u32) -> StdRng {
        let pair = if self.alternate_colors {
            game_num / 2
        } else {
            game_num
        };
        StdRng::seed_from_u64(self.seed.wrapping_add(pair as u64))
    }
}

/// How a single game ended, from the board's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Option<Color>,
    pub termination: Termination,
    pub plies: u32,
    pub moves: Vec<String>,
}

impl GameOutcome {
    fn result_for(&self, color: Color) -> GameResult {
        match self.winner {
            Some(w) if w == color => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
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

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        self.play_match(engine1, engine2).result
    }

    /// Run a match and keep every game record.
    pub fn play_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut report = MatchReport::new(engine1.name(), engine2.name(), self.config.clone());

        for game_num in 0..self.config.num_games {
            // DARK moves first, so engine1 opens the even games.
            let engine1_color = if !self.config.alternate_colors || game_num % 2 == 0 {
                Color::Dark
            } else {
                Color::Light
            };

            let mut rng = self.config.opening_rng(game_num);
            let outcome = if engine1_color == Color::Dark {
                self.play_game(engine1, engine2, &mut rng)
            } else {
                self.play_game(engine2, engine1, &mut rng)
            };

            let result = outcome.result_for(engine1_color);
            report.add_game(GameRecord {
                game: game_num + 1,
                engine1_color,
                winner: outcome.winner,
                result,
                plies: outcome.plies,
                termination: outcome.termination,
                moves: outcome.moves,
            });

            info!(
                "Game {}/{}: {} ({}) after {} plies, {:?} - Score: {}-{}-{}",
                game_num + 1,
                self.config.num_games,
                result.score_text(),
                engine1_color,
                outcome.plies,
                outcome.termination,
                report.result.wins,
                report.result.losses,
                report.result.draws
            );
        }

        report
    }

    /// Play a single game from the start position
    pub fn play_game(
        &self,
        dark: &mut dyn Engine,
        light: &mut dyn Engine,
        rng: &mut StdRng,
    ) -> GameOutcome {
        let mut ctx = TurnContext::new();
        let mut moves = Vec::new();
        dark.new_game();
        light.new_game();

        for _ in 0..self.config.opening_plies {
            if ctx.winner().is_some() {
                break;
            }
            let options = ctx.legal_turn_moves();
            let Some(opt) = options.choose(rng) else {
                break;
            };
            let mv = opt.mv.clone();
            if ctx.play_turn(&mv).is_err() {
                break;
            }
            moves.push(move_to_text(&mv));
        }
        debug!(opening = ?moves, "opening played");

        let finish = |winner, termination, moves: Vec<String>| GameOutcome {
            winner,
            termination,
            plies: moves.len() as u32,
            moves,
        };

        while (moves.len() as u32) < self.config.max_plies {
            if let Some(winner) = ctx.winner() {
                return finish(Some(winner), Termination::Decided, moves);
            }

            // Create fresh search limits for each move (resets the clock)
            let limits = self.config.search_limits();
            let mover = ctx.turn;
            let engine: &mut dyn Engine = match mover {
                Color::Dark => &mut *dark,
                Color::Light => &mut *light,
            };
            let result = engine.search(&ctx.board, mover, &limits);

            let Some(mv) = result.best_move else {
                return finish(Some(mover.other()), Termination::NoMove, moves);
            };

            match ctx.play_turn(&mv) {
                Ok(_) => moves.push(move_to_text(&mv)),
                Err(e) => {
                    warn!(
                        engine = engine.name(),
                        color = %mover,
                        mv = %move_to_text(&mv),
                        "illegal move: {e}"
                    );
                    return finish(Some(mover.other()), Termination::IllegalMove, moves);
                }
            }
        }

        match ctx.winner() {
            Some(winner) => finish(Some(winner), Termination::Decided, moves),
            None => finish(None, Termination::MaxPlies, moves),
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
