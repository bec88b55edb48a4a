//! Match results storage and reporting

use anyhow::Context;
use checkers_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

use crate::match_runner::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other player's side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    pub fn score_text(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// One side has no pieces or cannot move.
    Decided,
    /// An engine reported no move although it was asked to play.
    NoMove,
    /// An engine returned a move the rules reject.
    IllegalMove,
    /// The ply limit was reached.
    MaxPlies,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One finished game, from engine1's point of view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    /// 1-based game number within the match
    pub game: u32,
    pub engine1_color: Color,
    pub winner: Option<Color>,
    pub result: GameResult,
    /// Plies played, random opening plies included
    pub plies: u32,
    pub termination: Termination,
    /// Every turn in PDN move text, opening plies first
    pub moves: Vec<String>,
}

/// Everything one match produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, config: MatchConfig) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    pub fn add_game(&mut self, record: GameRecord) {
        self.result.record(record.result);
        self.games.push(record);
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "=== Match: {} vs {} ===\n", self.engine1, self.engine2);
        let _ = writeln!(
            report,
            "Config: {} games, depth {}, max {} plies, {} opening plies\n",
            self.config.num_games,
            self.config.depth,
            self.config.max_plies,
            self.config.opening_plies
        );

        let _ = writeln!(
            report,
            "{:>4}  {:<6} {:<4} {:>6}  {}",
            "Game", "Color", "Res", "Plies", "Ending"
        );
        report.push_str(&"-".repeat(40));
        report.push('\n');

        for g in &self.games {
            let _ = writeln!(
                report,
                "{:>4}  {:<6} {:<4} {:>6}  {:?}",
                g.game,
                g.engine1_color.name(),
                g.result.score_text(),
                g.plies,
                g.termination
            );
        }

        let _ = writeln!(
            report,
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        );

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
