use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Destination square -> squares of the pieces jumped by moving there.
/// An empty capture list is a quiet move.
pub type MoveOptions = BTreeMap<Square, Vec<Square>>;

/// 8x8 grid of optional pieces.
///
/// Cloning produces a fully independent board: pieces are plain values, so a
/// clone never shares state with its source. Search relies on this and
/// explores every hypothetical line on its own copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// Standard opening: DARK men on the dark squares of rows 0-2, LIGHT men
    /// on rows 5-7.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for sq in Square::playable() {
            if sq.row < 3 {
                b.put(Piece::man(sq, Color::Dark));
            } else if sq.row > 4 {
                b.put(Piece::man(sq, Color::Light));
            }
        }
        b
    }

    /// Places a piece at its recorded square, replacing whatever was there.
    /// Used to set up positions; light and off-board squares are ignored.
    pub fn put(&mut self, piece: Piece) {
        let sq = piece.square;
        if sq.row < 8 && sq.col < 8 && sq.is_dark() {
            if let Some(cell) = self.cell_mut(sq) {
                *cell = Some(piece);
            }
        }
    }

    /// The piece on `sq`; `None` for empty or off-board squares.
    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.grid
            .get(sq.row as usize)
            .and_then(|row| row.get(sq.col as usize))
            .copied()
            .flatten()
    }

    fn cell_mut(&mut self, sq: Square) -> Option<&mut Option<Piece>> {
        self.grid.get_mut(sq.row as usize)?.get_mut(sq.col as usize)
    }

    fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cell_mut(sq)?.take()
    }

    /// Iterates pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().filter_map(|cell| *cell)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |pc| pc.color == color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Mechanically relocates the piece on `from` to `to`, crowning a man that
    /// lands on its promotion row. Legality is not checked here; the caller
    /// guarantees `to` is empty. Does nothing when `from` is empty or either
    /// square is off the board.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        if self.cell_mut(to).is_none() {
            return;
        }
        let Some(mut piece) = self.take(from) else {
            return;
        };
        piece.square = to;
        if !piece.is_king && to.row == piece.color.promotion_row() {
            piece.is_king = true;
        }
        if let Some(cell) = self.cell_mut(to) {
            *cell = Some(piece);
        }
    }

    /// Clears captured pieces by the squares they occupied when captured.
    /// Squares that are already empty are skipped.
    pub fn remove_pieces<'a>(&mut self, squares: impl IntoIterator<Item = &'a Square>) {
        for &sq in squares {
            self.take(sq);
        }
    }

    /// Per-piece reachability, ignoring the turn-level mandatory-capture rule.
    pub fn valid_moves(&self, piece: &Piece) -> MoveOptions {
        if piece.is_king {
            self.king_moves(piece)
        } else {
            self.man_moves(piece)
        }
    }

    fn king_moves(&self, piece: &Piece) -> MoveOptions {
        let mut moves = MoveOptions::new();
        for (dr, dc) in DIAGONALS {
            let mut jumped: Option<Square> = None;
            let mut cursor = piece.square.offset(dr, dc);
            while let Some(sq) = cursor {
                match self.get_piece(sq) {
                    None => {
                        moves.insert(sq, jumped.into_iter().collect());
                    }
                    Some(other) if other.color == piece.color => break,
                    Some(_) => {
                        if jumped.is_some() {
                            break;
                        }
                        jumped = Some(sq);
                    }
                }
                cursor = sq.offset(dr, dc);
            }
        }
        moves
    }

    fn man_moves(&self, piece: &Piece) -> MoveOptions {
        let mut moves = MoveOptions::new();
        let from = piece.square;
        let fwd = piece.color.forward();

        for dc in [-1, 1] {
            if let Some(to) = from.offset(fwd, dc) {
                if self.get_piece(to).is_none() {
                    moves.insert(to, Vec::new());
                }
            }
        }

        // Men capture backwards as well as forwards.
        for (dr, dc) in DIAGONALS {
            let (Some(mid), Some(land)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc))
            else {
                continue;
            };
            let enemy = self
                .get_piece(mid)
                .is_some_and(|pc| pc.color != piece.color);
            if enemy && self.get_piece(land).is_none() {
                moves.insert(land, vec![mid]);
            }
        }
        moves
    }

    /// Total number of move options across every piece of `color`.
    pub fn mobility(&self, color: Color) -> usize {
        self.pieces_of(color)
            .map(|pc| self.valid_moves(&pc).len())
            .sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', |pc| pc.symbol()))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
