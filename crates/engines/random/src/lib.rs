//! Random Move Checkers Engine
//!
//! Picks uniformly among the legal full-turn moves. Mandatory capture and
//! maximal chains still apply, since it draws from `all_turn_moves`.
//! Useful as a sparring partner for the match runner and for shaking out
//! the move generator over many games.

use checkers_core::{all_turn_moves, Board, Color, Engine, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A checkers engine that plays random legal turns.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    nodes: u64,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move choices for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, to_move: Color, _limits: &SearchLimits) -> SearchResult {
        let moves = all_turn_moves(board, to_move);
        self.nodes = moves.len() as u64;

        let best_move = moves.choose(&mut self.rng).map(|opt| opt.mv.clone());

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
