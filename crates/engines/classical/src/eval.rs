//! Static position evaluation

use checkers_core::{Board, Color, Piece};

pub const MAN_VALUE: f64 = 1.0;
pub const KING_VALUE: f64 = 3.2;

/// Per row a man has advanced toward its promotion row.
pub const ADVANCE_BONUS: f64 = 0.03;

/// For each man still guarding its own back row.
pub const BACK_ROW_BONUS: f64 = 0.12;

/// Per move option of difference in mobility.
pub const MOBILITY_WEIGHT: f64 = 0.05;

/// Center-favoring square bonus, symmetric under both mirror axes so the
/// same table serves both colors. Light squares never hold pieces.
#[rustfmt::skip]
const POSITION_TABLE: [[f64; 8]; 8] = [
    [0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
    [0.00, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.00],
    [0.00, 0.02, 0.05, 0.05, 0.05, 0.05, 0.02, 0.00],
    [0.00, 0.02, 0.05, 0.08, 0.08, 0.05, 0.02, 0.00],
    [0.00, 0.02, 0.05, 0.08, 0.08, 0.05, 0.02, 0.00],
    [0.00, 0.02, 0.05, 0.05, 0.05, 0.05, 0.02, 0.00],
    [0.00, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.00],
    [0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
];

/// Evaluates `board` from `color`'s perspective; higher is better.
///
/// Every term is computed for a piece's owner and added with a sign, so
/// `evaluate(b, Light) == -evaluate(b, Dark)` exactly.
pub fn evaluate(board: &Board, color: Color) -> f64 {
    let mut score = 0.0;
    for pc in board.pieces() {
        if pc.color == color {
            score += piece_score(&pc);
        } else {
            score -= piece_score(&pc);
        }
    }

    let mobility = board.mobility(color) as i64 - board.mobility(color.other()) as i64;
    score + MOBILITY_WEIGHT * mobility as f64
}

/// Material, placement and structure value of one piece for its owner.
pub fn piece_score(pc: &Piece) -> f64 {
    let sq = pc.square;
    let mut v = POSITION_TABLE[sq.row as usize][sq.col as usize];

    if pc.is_king {
        return v + KING_VALUE;
    }

    v += MAN_VALUE;
    let advanced = match pc.color {
        Color::Dark => sq.row,
        Color::Light => 7 - sq.row,
    };
    v += ADVANCE_BONUS * advanced as f64;
    if sq.row == pc.color.back_row() {
        v += BACK_ROW_BONUS;
    }
    v
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
