//! Text forms: PDN square numbers (1-32), move strings (`11-15`, `22x15x8`)
//! and PDN-style position strings (`B:W21,22,K30:B1,2,K12`).
//!
//! Square 1 is the first dark square of row 0, counting row by row. DARK is
//! written `B` and LIGHT `W`, as in printed checkers diagrams.

use crate::{
    board::Board,
    error::NotationError,
    rules::all_turn_moves,
    types::*,
};

pub fn square_number(sq: Square) -> u8 {
    sq.row * 4 + sq.col / 2 + 1
}

pub fn square_from_number(n: u8) -> Option<Square> {
    if !(1..=32).contains(&n) {
        return None;
    }
    let idx = n - 1;
    let row = idx / 4;
    let col = 2 * (idx % 4) + if row % 2 == 0 { 1 } else { 0 };
    Some(Square::new(row, col))
}

fn parse_square(txt: &str) -> Result<Square, NotationError> {
    txt.trim()
        .parse::<u8>()
        .ok()
        .and_then(square_from_number)
        .ok_or_else(|| NotationError::BadSquare(txt.to_string()))
}

pub fn move_to_text(mv: &TurnMove) -> String {
    let sep = if mv.is_capture() { "x" } else { "-" };
    let mut s = square_number(mv.from).to_string();
    for sq in &mv.path {
        s.push_str(sep);
        s.push_str(&square_number(*sq).to_string());
    }
    s
}

/// Parses move text and matches it against the legal turns of `color`, so
/// the returned move carries its captured squares.
///
/// A capture may be written with only its start and final square
/// (`22x8`) when that identifies a single legal chain.
pub fn parse_move(board: &Board, color: Color, txt: &str) -> Result<TurnMove, NotationError> {
    let squares: Vec<Square> = txt
        .split(['-', 'x', 'X'])
        .map(parse_square)
        .collect::<Result<_, _>>()
        .map_err(|_| NotationError::BadMove(txt.to_string()))?;
    let Some((&from, path)) = squares.split_first() else {
        return Err(NotationError::BadMove(txt.to_string()));
    };
    if path.is_empty() {
        return Err(NotationError::BadMove(txt.to_string()));
    }

    let legal: Vec<TurnMove> = all_turn_moves(board, color)
        .into_iter()
        .map(|opt| opt.mv)
        .filter(|mv| mv.from == from)
        .collect();

    if let Some(exact) = legal.iter().find(|mv| mv.path == path) {
        return Ok(exact.clone());
    }

    let target = path[path.len() - 1];
    let mut shorthand = legal.iter().filter(|mv| path.len() == 1 && mv.to() == target);
    match (shorthand.next(), shorthand.next()) {
        (Some(mv), None) => Ok(mv.clone()),
        _ => Err(NotationError::NotLegal(txt.to_string())),
    }
}

/// Writes `board` with `to_move` in PDN FEN form.
pub fn to_fen(board: &Board, to_move: Color) -> String {
    let side = |color: Color| -> String {
        let mut items: Vec<(u8, bool)> = board
            .pieces_of(color)
            .map(|pc| (square_number(pc.square), pc.is_king))
            .collect();
        items.sort_unstable();
        items
            .iter()
            .map(|&(n, king)| if king { format!("K{n}") } else { n.to_string() })
            .collect::<Vec<_>>()
            .join(",")
    };
    format!(
        "{}:W{}:B{}",
        color_letter(to_move),
        side(Color::Light),
        side(Color::Dark)
    )
}

/// Reads a PDN FEN position, e.g. `B:W21,22,K30:B1,2,K12`.
pub fn parse_fen(fen: &str) -> Result<(Board, Color), NotationError> {
    let bad = || NotationError::BadPosition(fen.to_string());
    let mut fields = fen.trim().trim_end_matches('.').split(':');

    let to_move = fields
        .next()
        .and_then(|f| letter_color(f.trim()))
        .ok_or_else(bad)?;

    let mut board = Board::empty();
    for field in fields {
        let field = field.trim();
        let color = field.get(..1).and_then(letter_color).ok_or_else(bad)?;
        let list = &field[1..];
        if list.is_empty() {
            continue;
        }
        for item in list.split(',') {
            let item = item.trim();
            let (king, num) = match item.strip_prefix('K') {
                Some(rest) => (true, rest),
                None => (false, item),
            };
            let sq = parse_square(num).map_err(|_| bad())?;
            // A man already on its promotion row is a king.
            board.put(Piece {
                square: sq,
                color,
                is_king: king || sq.row == color.promotion_row(),
            });
        }
    }
    Ok((board, to_move))
}

fn color_letter(color: Color) -> char {
    match color {
        Color::Dark => 'B',
        Color::Light => 'W',
    }
}

fn letter_color(s: &str) -> Option<Color> {
    match s {
        "B" | "b" => Some(Color::Dark),
        "W" | "w" => Some(Color::Light),
        _ => None,
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
