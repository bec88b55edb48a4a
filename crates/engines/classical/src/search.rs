//! Minimax search with alpha-beta pruning over full-turn moves.
//!
//! One ply is one player's whole turn, so a capture chain costs a single
//! level of depth. Children are the boards produced by `all_turn_moves`,
//! which are already independent clones; nothing is applied and undone.

use checkers_core::{all_turn_moves, terminal_winner, Board, Color, SearchClock, TurnMove};
use tracing::debug;

use crate::eval::evaluate;

/// Score of a decided game, positive when the searching side has won.
pub const WIN_SCORE: f64 = 10_000.0;

/// Result from pick_best_move indicating whether search completed or was stopped.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best move found with its score (None if the side to move is stuck)
    pub best_move: Option<(TurnMove, f64)>,
    /// True if search was stopped early by the clock
    pub stopped: bool,
}

struct Searcher<'a> {
    searching: Color,
    nodes: &'a mut u64,
    clock: Option<&'a SearchClock>,
    stopped: bool,
}

impl Searcher<'_> {
    fn should_stop(&mut self) -> bool {
        if !self.stopped {
            if let Some(clock) = self.clock {
                self.stopped = clock.poll(*self.nodes);
            }
        }
        self.stopped
    }

    fn decided(&self, winner: Color) -> f64 {
        if winner == self.searching {
            WIN_SCORE
        } else {
            -WIN_SCORE
        }
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        current: Color,
    ) -> (f64, Option<TurnMove>) {
        *self.nodes += 1;

        if let Some(winner) = terminal_winner(board) {
            return (self.decided(winner), None);
        }
        if depth == 0 {
            return (evaluate(board, self.searching), None);
        }

        let children = all_turn_moves(board, current);
        if children.is_empty() {
            // Agrees with terminal_winner: a side that cannot move loses.
            return (self.decided(current.other()), None);
        }

        let maximizing = current == self.searching;
        let mut best_val = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for child in children {
            if self.should_stop() {
                break;
            }

            let (val, _) = self.minimax(&child.board, depth - 1, alpha, beta, current.other());
            if self.stopped {
                // The child's value is incomplete; keep what was finished.
                break;
            }

            if maximizing {
                if val > best_val {
                    best_val = val;
                    best_move = Some(child.mv);
                }
                alpha = alpha.max(best_val);
            } else {
                if val < best_val {
                    best_val = val;
                    best_move = Some(child.mv);
                }
                beta = beta.min(best_val);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_val, best_move)
    }
}

/// Plain minimax with alpha-beta pruning.
///
/// `current` is the side to move at this node and `searching` the side the
/// value is reported for. Returns the value and, unless the node is terminal
/// or at depth zero, the best move for `current`.
pub fn minimax(
    board: &Board,
    depth: u8,
    alpha: f64,
    beta: f64,
    current: Color,
    searching: Color,
) -> (f64, Option<TurnMove>) {
    let mut nodes = 0;
    let mut searcher = Searcher {
        searching,
        nodes: &mut nodes,
        clock: None,
        stopped: false,
    };
    searcher.minimax(board, depth, alpha, beta, current)
}

/// Best full-turn move for `to_move`, searched `depth` plies deep.
pub fn best_move(board: &Board, to_move: Color, depth: u8) -> Option<TurnMove> {
    minimax(
        board,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        to_move,
        to_move,
    )
    .1
}

/// Searches the position and returns the best move with its score.
///
/// # Arguments
/// * `board` - The position to search; never mutated
/// * `to_move` - The side the move is chosen for
/// * `depth` - Maximum search depth in plies
/// * `nodes` - Counter for nodes searched (for statistics)
/// * `clock` - Deadline and cancel flag, polled between recursive calls
///
/// # Returns
/// `SearchOutcome` with the best move (if any) and whether search was
/// stopped. A stopped search falls back to the best root move completed so
/// far, or to the first ordered legal move.
pub fn pick_best_move(
    board: &Board,
    to_move: Color,
    depth: u8,
    nodes: &mut u64,
    clock: &SearchClock,
) -> SearchOutcome {
    let mut searcher = Searcher {
        searching: to_move,
        nodes: &mut *nodes,
        clock: Some(clock),
        stopped: false,
    };

    let (score, found) = searcher.minimax(
        board,
        depth.max(1),
        f64::NEG_INFINITY,
        f64::INFINITY,
        to_move,
    );
    let stopped = searcher.stopped;

    let best_move = match found {
        Some(mv) => Some((mv, score)),
        None if terminal_winner(board).is_some() => None,
        None => all_turn_moves(board, to_move)
            .into_iter()
            .next()
            .map(|opt| (opt.mv, 0.0)),
    };

    debug!(
        ?to_move,
        depth,
        nodes = *nodes,
        score,
        stopped,
        elapsed_ms = clock.elapsed().as_millis() as u64,
        "search finished"
    );

    SearchOutcome { best_move, stopped }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
