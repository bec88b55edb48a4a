use crate::{board::Board, rules::all_turn_moves, types::Color};

/// Counts full-turn leaf nodes `depth` plies below `board`, `color` to move.
/// A capture chain is one node however many jumps it makes.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_turn_moves(board, color);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|opt| perft(&opt.board, color.other(), depth - 1))
        .sum()
}
