//! End-to-end rule scenarios driven through the public API, the way an
//! interactive driver would use it.

use checkers_core::{
    any_capture_exists, legal_destinations, parse_fen, terminal_winner, Board, Color, MoveError,
    Piece, Square, StepOutcome, TurnContext,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

// =============================================================================
// Mandatory capture
// =============================================================================

#[test]
fn test_dark_man_must_capture() {
    let mut board = Board::empty();
    board.put(Piece::man(sq(2, 1), Color::Dark));
    board.put(Piece::man(sq(3, 2), Color::Light));

    let dark = board.get_piece(sq(2, 1)).unwrap();
    let moves = board.valid_moves(&dark);
    assert_eq!(moves.get(&sq(4, 3)), Some(&vec![sq(3, 2)]));
    assert!(any_capture_exists(&board, Color::Dark));

    let legal = legal_destinations(&board, sq(2, 1)).unwrap();
    assert!(!legal.contains_key(&sq(3, 0)));

    let mut ctx = TurnContext::from_position(board, Color::Dark);
    assert!(matches!(
        ctx.play_step(sq(2, 1), sq(3, 0)),
        Err(MoveError::IllegalMove { .. })
    ));
    assert_eq!(
        ctx.play_step(sq(2, 1), sq(4, 3)),
        Ok(StepOutcome::TurnPassed(Color::Light))
    );
    assert!(ctx.board.get_piece(sq(3, 2)).is_none());
}

// =============================================================================
// Kings
// =============================================================================

#[test]
fn test_king_capture_ray_ends_at_edge() {
    let mut board = Board::empty();
    board.put(Piece::king(sq(4, 3), Color::Dark));
    board.put(Piece::man(sq(2, 1), Color::Light));

    let king = board.get_piece(sq(4, 3)).unwrap();
    let moves = board.valid_moves(&king);
    assert_eq!(moves.get(&sq(1, 0)), Some(&vec![sq(2, 1)]));
    let on_ray: Vec<&Square> = moves
        .keys()
        .filter(|s| s.row < 4 && s.row == s.col + 1)
        .collect();
    assert_eq!(on_ray, vec![&sq(1, 0), &sq(3, 2)]);
}

#[test]
fn test_promotion_is_immediate() {
    let mut board = Board::empty();
    board.put(Piece::man(sq(6, 3), Color::Dark));
    board.move_piece(sq(6, 3), sq(7, 4));
    assert!(board.get_piece(sq(7, 4)).unwrap().is_king);
}

// =============================================================================
// Terminal states
// =============================================================================

#[test]
fn test_no_light_pieces_dark_wins() {
    let (board, _) = parse_fen("W:W:B1,2,3").unwrap();
    assert_eq!(terminal_winner(&board), Some(Color::Dark));
}

#[test]
fn test_no_dark_pieces_light_wins() {
    let (board, _) = parse_fen("B:W21,K5:B").unwrap();
    assert_eq!(terminal_winner(&board), Some(Color::Light));
}

#[test]
fn test_first_move_playout_keeps_invariants() {
    // Always take the first legal turn and check board invariants each ply.
    let mut ctx = TurnContext::new();
    for _ in 0..400 {
        if ctx.winner().is_some() {
            break;
        }
        let mv = ctx.legal_turn_moves()[0].mv.clone();
        let mover = ctx.turn;
        let next = ctx.play_turn(&mv).unwrap();
        assert_eq!(next, mover.other());
        for pc in ctx.board.pieces() {
            assert!(pc.square.is_dark());
            assert_eq!(ctx.board.get_piece(pc.square), Some(pc));
        }
    }
}
