//! Classical Checkers Engine
//!
//! Minimax with alpha-beta pruning over full-turn moves and a handcrafted
//! evaluation. This is the baseline every other strategy is measured against.

mod eval;
mod search;

use checkers_core::{Board, Color, Engine, SearchLimits, SearchResult};

/// Deepest search the `Depth` option accepts.
pub const MAX_DEPTH: u8 = 12;

/// Classical checkers engine using minimax with alpha-beta pruning.
///
/// The search depth comes from `SearchLimits` unless the `Depth` option
/// has been set, which then overrides it.
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
    depth: Option<u8>,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, to_move: Color, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;
        let depth = self.depth.unwrap_or(limits.depth);

        let outcome =
            search::pick_best_move(board, to_move, depth, &mut self.nodes, &limits.clock);

        SearchResult {
            best_move: outcome.best_move.as_ref().map(|(mv, _)| mv.clone()),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0.0),
            depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("depth") {
            return false;
        }
        match value.trim().parse::<u8>() {
            Ok(d) => {
                self.depth = Some(d.clamp(1, MAX_DEPTH));
                true
            }
            Err(_) => false,
        }
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, piece_score, KING_VALUE, MAN_VALUE};
pub use search::{best_move, minimax, pick_best_move, SearchOutcome, WIN_SCORE};
