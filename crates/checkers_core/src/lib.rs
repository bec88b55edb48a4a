pub mod board;
pub mod error;
pub mod game;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use notation::*;
pub use perft::perft;
pub use rules::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by every move-selection strategy
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best full-turn move found (None if the side to move is stuck)
    pub best_move: Option<TurnMove>,
    /// Score from the searching side's perspective
    pub score: f64,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early by the clock
    pub stopped: bool,
}

impl SearchResult {
    /// Result for a side with no legal move.
    pub fn no_move(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            depth,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all checkers engines implement.
///
/// Engines receive the authoritative board by reference and must not mutate
/// it; the driver applies the returned move.
pub trait Engine: Send {
    /// Picks a full-turn move for `to_move` within `limits`.
    fn search(&mut self, board: &Board, to_move: Color, limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's name for identification
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ML-checkers"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set an option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
