//! Turn-level rules: mandatory capture, capture-chain expansion and
//! terminal-state detection.
//!
//! Every hypothetical step is applied to a fresh clone of the board, so the
//! board passed in is never mutated and recursive branches never observe
//! each other's changes.

use std::cmp::Reverse;

use crate::{
    board::{Board, MoveOptions},
    error::MoveError,
    types::*,
};

/// A maximal capture chain continuing from some square: the board after the
/// last jump, the landing squares and the squares jumped, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureChain {
    pub board: Board,
    pub path: Vec<Square>,
    pub captured: Vec<Square>,
}

/// A legal full-turn move together with the board it produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOption {
    pub board: Board,
    pub mv: TurnMove,
}

/// Keeps only the options that jump at least one piece.
pub fn captures_only(options: MoveOptions) -> MoveOptions {
    options
        .into_iter()
        .filter(|(_, caps)| !caps.is_empty())
        .collect()
}

/// True iff some piece of `color` can capture right now, which makes
/// capturing compulsory for the whole turn.
pub fn any_capture_exists(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|pc| board.valid_moves(&pc).values().any(|caps| !caps.is_empty()))
}

/// True iff `color` has at least one legal full-turn move.
///
/// Cheaper than `all_turn_moves(..).is_empty()`: any reachable square is
/// enough, since when captures are compulsory the pieces holding them have
/// capturing options.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|pc| !board.valid_moves(&pc).is_empty())
}

/// Destinations for the piece on `from` once mandatory capture is applied
/// for its owner.
pub fn legal_destinations(board: &Board, from: Square) -> Result<MoveOptions, MoveError> {
    let piece = board
        .get_piece(from)
        .ok_or(MoveError::NoPieceAtSource(from))?;
    let options = board.valid_moves(&piece);
    if any_capture_exists(board, piece.color) {
        Ok(captures_only(options))
    } else {
        Ok(options)
    }
}

/// Applies a single step: move, then clear the jumped squares.
pub fn apply_step(board: &mut Board, from: Square, to: Square, captured: &[Square]) {
    board.move_piece(from, to);
    board.remove_pieces(captured);
}

/// Expands every maximal capture chain of the piece standing on `start`.
///
/// A piece with no capture available yields a single empty chain; an empty
/// `start` square yields nothing.
pub fn capture_sequences(board: &Board, start: Square) -> Vec<CaptureChain> {
    let Some(piece) = board.get_piece(start) else {
        return Vec::new();
    };

    let captures = captures_only(board.valid_moves(&piece));
    if captures.is_empty() {
        return vec![CaptureChain {
            board: board.clone(),
            path: Vec::new(),
            captured: Vec::new(),
        }];
    }

    let mut chains = Vec::new();
    for (to, caps) in captures {
        let mut next = board.clone();
        apply_step(&mut next, start, to, &caps);

        for tail in capture_sequences(&next, to) {
            let mut path = Vec::with_capacity(tail.path.len() + 1);
            path.push(to);
            path.extend(tail.path);

            let mut captured = caps.clone();
            captured.extend(tail.captured);

            chains.push(CaptureChain {
                board: tail.board,
                path,
                captured,
            });
        }
    }
    chains
}

/// Every legal full-turn move for `color`.
///
/// Longer capture chains come first. The ordering only helps alpha-beta
/// cut earlier; equal lengths keep generation order (row-major pieces, then
/// destination order).
pub fn all_turn_moves(board: &Board, color: Color) -> Vec<TurnOption> {
    let must_capture = any_capture_exists(board, color);
    let mut out = Vec::new();

    for piece in board.pieces_of(color) {
        let mut options = board.valid_moves(&piece);
        if must_capture {
            options = captures_only(options);
        }
        let from = piece.square;

        for (to, caps) in options {
            let mut next = board.clone();
            apply_step(&mut next, from, to, &caps);

            if caps.is_empty() {
                out.push(TurnOption {
                    board: next,
                    mv: TurnMove::step(from, to),
                });
                continue;
            }

            // The chain must continue with the same piece.
            for tail in capture_sequences(&next, to) {
                let mut path = Vec::with_capacity(tail.path.len() + 1);
                path.push(to);
                path.extend(tail.path);

                let mut captured = caps.clone();
                captured.extend(tail.captured);

                out.push(TurnOption {
                    board: tail.board,
                    mv: TurnMove {
                        from,
                        path,
                        captured,
                    },
                });
            }
        }
    }

    out.sort_by_key(|opt| Reverse(opt.mv.path.len()));
    out
}

/// Looks up the legal turn that starts on `from` and visits `path`.
pub fn find_turn(board: &Board, color: Color, from: Square, path: &[Square]) -> Option<TurnOption> {
    all_turn_moves(board, color)
        .into_iter()
        .find(|opt| opt.mv.from == from && opt.mv.path == path)
}

/// Validates `mv` against the legal turns of `color` and, if found, replaces
/// `board` with the resulting position. The board is untouched on error.
pub fn apply_turn_move(board: &mut Board, color: Color, mv: &TurnMove) -> Result<(), MoveError> {
    let piece = board
        .get_piece(mv.from)
        .ok_or(MoveError::NoPieceAtSource(mv.from))?;
    if piece.color != color {
        return Err(MoveError::NotYourPiece {
            square: mv.from,
            owner: piece.color,
            to_move: color,
        });
    }

    let option = find_turn(board, color, mv.from, &mv.path).ok_or(MoveError::IllegalTurn(mv.from))?;
    *board = option.board;
    Ok(())
}

/// The winner, if the game is over.
///
/// A side loses when it has no pieces left or cannot move (a blocked side
/// loses rather than drawing). DARK is examined before LIGHT in each check.
pub fn terminal_winner(board: &Board) -> Option<Color> {
    if board.count(Color::Dark) == 0 {
        return Some(Color::Light);
    }
    if board.count(Color::Light) == 0 {
        return Some(Color::Dark);
    }
    if !has_legal_move(board, Color::Dark) {
        return Some(Color::Light);
    }
    if !has_legal_move(board, Color::Light) {
        return Some(Color::Dark);
    }
    None
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
