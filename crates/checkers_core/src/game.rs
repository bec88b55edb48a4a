//! Explicit turn state for interactive drivers.
//!
//! A `TurnContext` owns the authoritative board, the side to move and the
//! square of a piece that is partway through a capture chain. Drivers feed it
//! one step at a time (a click, a protocol command) or a whole turn (a search
//! result). Every request is validated before anything changes, so an error
//! leaves the context exactly as it was.

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, MoveOptions},
    error::MoveError,
    rules::{self, TurnOption},
    types::*,
};

/// What happened after a single step was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece on this square captured and can capture again; the same
    /// player must continue with it.
    ChainContinues(Square),
    /// The turn is over and passes to this color.
    TurnPassed(Color),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    pub board: Board,
    pub turn: Color,
    /// Piece that must keep capturing before the turn can pass.
    pub chain: Option<Square>,
}

impl Default for TurnContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnContext {
    /// Standard start; DARK moves first.
    pub fn new() -> Self {
        Self::from_position(Board::startpos(), Color::Dark)
    }

    pub fn from_position(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            chain: None,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        rules::terminal_winner(&self.board)
    }

    /// All full-turn moves for the side to move.
    pub fn legal_turn_moves(&self) -> Vec<TurnOption> {
        rules::all_turn_moves(&self.board, self.turn)
    }

    /// Destinations the piece on `from` may step to right now.
    ///
    /// Applies mandatory capture for the side to move and, during a chain,
    /// only allows further captures by the chaining piece.
    pub fn legal_destinations(&self, from: Square) -> Result<MoveOptions, MoveError> {
        // Mid-chain the turn is already underway and must be finished.
        if self.chain.is_none() {
            if let Some(winner) = self.winner() {
                return Err(MoveError::GameOver(winner));
            }
        }

        let piece = self
            .board
            .get_piece(from)
            .ok_or(MoveError::NoPieceAtSource(from))?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourPiece {
                square: from,
                owner: piece.color,
                to_move: self.turn,
            });
        }

        match self.chain {
            Some(chaining) if chaining != from => Err(MoveError::ChainInProgress(chaining)),
            Some(_) => Ok(rules::captures_only(self.board.valid_moves(&piece))),
            None => rules::legal_destinations(&self.board, from),
        }
    }

    /// Plays one step of the current turn.
    pub fn play_step(&mut self, from: Square, to: Square) -> Result<StepOutcome, MoveError> {
        let options = self.legal_destinations(from)?;
        let captured = options
            .get(&to)
            .ok_or(MoveError::IllegalMove { from, to })?
            .clone();

        rules::apply_step(&mut self.board, from, to, &captured);

        if !captured.is_empty() {
            if let Some(piece) = self.board.get_piece(to) {
                let further = rules::captures_only(self.board.valid_moves(&piece));
                if !further.is_empty() {
                    self.chain = Some(to);
                    return Ok(StepOutcome::ChainContinues(to));
                }
            }
        }

        Ok(StepOutcome::TurnPassed(self.pass_turn()))
    }

    /// Plays a whole turn at once, such as a search result.
    ///
    /// The turn must be one of `legal_turn_moves`; it cannot finish a chain
    /// that was started step by step.
    pub fn play_turn(&mut self, mv: &TurnMove) -> Result<Color, MoveError> {
        if let Some(chaining) = self.chain {
            return Err(MoveError::ChainInProgress(chaining));
        }
        if let Some(winner) = self.winner() {
            return Err(MoveError::GameOver(winner));
        }
        rules::apply_turn_move(&mut self.board, self.turn, mv)?;
        Ok(self.pass_turn())
    }

    fn pass_turn(&mut self) -> Color {
        self.chain = None;
        self.turn = self.turn.other();
        self.turn
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
