use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a man's forward step.
    pub fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Row this color starts on nearest its own edge.
    pub fn back_row(self) -> u8 {
        self.other().promotion_row()
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Light => "light",
            Color::Dark => "dark",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board coordinate, 0-indexed. Row 0 is the edge DARK starts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Builds a square from signed coordinates, `None` when off the board.
    pub fn try_new(row: i8, col: i8) -> Option<Square> {
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Playable squares are the dark ones: (row + col) odd.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// All 32 playable squares in row-major order.
    pub fn playable() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square::new(row, col)))
            .filter(|sq| sq.is_dark())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four diagonal directions as (row, col) deltas.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub square: Square,
    pub color: Color,
    pub is_king: bool,
}

impl Piece {
    pub fn man(square: Square, color: Color) -> Self {
        Self {
            square,
            color,
            is_king: false,
        }
    }

    pub fn king(square: Square, color: Color) -> Self {
        Self {
            square,
            color,
            is_king: true,
        }
    }

    pub fn symbol(&self) -> char {
        match (self.color, self.is_king) {
            (Color::Dark, false) => 'd',
            (Color::Dark, true) => 'D',
            (Color::Light, false) => 'l',
            (Color::Light, true) => 'L',
        }
    }
}

/// One player's complete ply: the start square, every landing square in
/// order, and the squares of the pieces jumped along the way.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnMove {
    pub from: Square,
    pub path: Vec<Square>,
    pub captured: Vec<Square>,
}

impl TurnMove {
    pub fn step(from: Square, to: Square) -> Self {
        Self {
            from,
            path: vec![to],
            captured: Vec::new(),
        }
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Final landing square of the moving piece.
    pub fn to(&self) -> Square {
        self.path.last().copied().unwrap_or(self.from)
    }
}
