use super::*;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn board_with(pieces: &[Piece]) -> Board {
    let mut b = Board::empty();
    for &pc in pieces {
        b.put(pc);
    }
    b
}

#[test]
fn test_any_capture_exists() {
    let b = board_with(&[
        Piece::man(sq(2, 1), Color::Dark),
        Piece::man(sq(3, 2), Color::Light),
    ]);
    assert!(any_capture_exists(&b, Color::Dark));
    // LIGHT can jump backwards over the dark man too: (3,2) over (2,1) to (1,0).
    assert!(any_capture_exists(&b, Color::Light));
    assert!(!any_capture_exists(&Board::startpos(), Color::Dark));
}

#[test]
fn test_legal_destinations_enforce_mandatory_capture() {
    let b = board_with(&[
        Piece::man(sq(2, 1), Color::Dark),
        Piece::man(sq(3, 2), Color::Light),
        Piece::man(sq(2, 5), Color::Dark),
    ]);

    let capturing = legal_destinations(&b, sq(2, 1)).unwrap();
    assert_eq!(capturing.len(), 1);
    assert_eq!(capturing.get(&sq(4, 3)), Some(&vec![sq(3, 2)]));

    // The other dark man has only quiet moves, none of them legal now.
    assert!(legal_destinations(&b, sq(2, 5)).unwrap().is_empty());

    assert_eq!(
        legal_destinations(&b, sq(4, 4)),
        Err(MoveError::NoPieceAtSource(sq(4, 4)))
    );
}

#[test]
fn test_capture_sequences_without_capture_is_single_empty_chain() {
    let b = board_with(&[Piece::man(sq(2, 1), Color::Dark)]);
    let chains = capture_sequences(&b, sq(2, 1));
    assert_eq!(chains.len(), 1);
    assert!(chains[0].path.is_empty());
    assert_eq!(chains[0].board, b);

    assert!(capture_sequences(&b, sq(4, 3)).is_empty());
}

#[test]
fn test_double_jump_chain() {
    let b = board_with(&[
        Piece::man(sq(2, 1), Color::Dark),
        Piece::man(sq(3, 2), Color::Light),
        Piece::man(sq(5, 4), Color::Light),
    ]);

    let moves = all_turn_moves(&b, Color::Dark);
    assert_eq!(moves.len(), 1);
    let opt = &moves[0];
    assert_eq!(opt.mv.from, sq(2, 1));
    assert_eq!(opt.mv.path, vec![sq(4, 3), sq(6, 5)]);
    assert_eq!(opt.mv.captured, vec![sq(3, 2), sq(5, 4)]);
    assert_eq!(opt.board.count(Color::Light), 0);
    assert!(opt.board.get_piece(sq(6, 5)).is_some());

    // The source board is untouched.
    assert_eq!(b.count(Color::Light), 2);
}

#[test]
fn test_branching_chains_longest_first() {
    let b = board_with(&[
        Piece::man(sq(2, 3), Color::Dark),
        Piece::man(sq(3, 2), Color::Light),
        Piece::man(sq(3, 4), Color::Light),
        Piece::man(sq(5, 2), Color::Light),
    ]);

    let moves = all_turn_moves(&b, Color::Dark);
    let paths: Vec<Vec<Square>> = moves.iter().map(|o| o.mv.path.clone()).collect();
    assert_eq!(
        paths,
        vec![vec![sq(4, 1), sq(6, 3)], vec![sq(4, 5)]]
    );
}

#[test]
fn test_promotion_mid_chain_continues_as_king() {
    // Dark man jumps onto row 7, is crowned, and keeps jumping as a king.
    let b = board_with(&[
        Piece::man(sq(5, 2), Color::Dark),
        Piece::man(sq(6, 3), Color::Light),
        Piece::man(sq(5, 6), Color::Light),
    ]);

    let moves = all_turn_moves(&b, Color::Dark);
    assert_eq!(moves.len(), 1);
    let mv = &moves[0].mv;
    assert_eq!(mv.path[0], sq(7, 4));
    assert_eq!(mv.captured, vec![sq(6, 3), sq(5, 6)]);
    let landed = moves[0].board.get_piece(mv.to()).unwrap();
    assert!(landed.is_king);
}

#[test]
fn test_quiet_moves_when_no_capture() {
    let moves = all_turn_moves(&Board::startpos(), Color::Dark);
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|o| !o.mv.is_capture() && o.mv.path.len() == 1));
    assert!(moves.iter().all(|o| o.mv.from.row == 2));
}

#[test]
fn test_mandatory_capture_and_maximal_chains_along_a_game() {
    let mut board = Board::startpos();
    let mut color = Color::Dark;

    for ply in 0..60usize {
        let moves = all_turn_moves(&board, color);
        if moves.is_empty() {
            break;
        }

        if any_capture_exists(&board, color) {
            assert!(moves.iter().all(|o| o.mv.is_capture()), "ply {ply}");
            for opt in &moves {
                let landed = opt.board.get_piece(opt.mv.to()).unwrap();
                let more = captures_only(opt.board.valid_moves(&landed));
                assert!(more.is_empty(), "non-maximal chain at ply {ply}");
                assert_eq!(opt.mv.path.len(), opt.mv.captured.len());
            }
        } else {
            assert!(moves.iter().all(|o| !o.mv.is_capture()), "ply {ply}");
        }

        let lengths: Vec<usize> = moves.iter().map(|o| o.mv.path.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));

        board = moves[(ply * 7) % moves.len()].board.clone();
        color = color.other();
    }
}

#[test]
fn test_apply_turn_move_validates() {
    let mut b = board_with(&[
        Piece::man(sq(2, 1), Color::Dark),
        Piece::man(sq(3, 2), Color::Light),
        Piece::man(sq(6, 7), Color::Light),
    ]);
    let before = b.clone();

    let quiet = TurnMove::step(sq(2, 1), sq(3, 0));
    assert_eq!(
        apply_turn_move(&mut b, Color::Dark, &quiet),
        Err(MoveError::IllegalTurn(sq(2, 1)))
    );
    assert_eq!(b, before);

    let wrong_side = TurnMove::step(sq(3, 2), sq(2, 3));
    assert!(matches!(
        apply_turn_move(&mut b, Color::Dark, &wrong_side),
        Err(MoveError::NotYourPiece { .. })
    ));

    let empty = TurnMove::step(sq(4, 5), sq(5, 6));
    assert_eq!(
        apply_turn_move(&mut b, Color::Dark, &empty),
        Err(MoveError::NoPieceAtSource(sq(4, 5)))
    );
    assert_eq!(b, before);

    // Callers may omit the captured list; the path identifies the turn.
    let jump = TurnMove {
        from: sq(2, 1),
        path: vec![sq(4, 3)],
        captured: Vec::new(),
    };
    apply_turn_move(&mut b, Color::Dark, &jump).unwrap();
    assert!(b.get_piece(sq(3, 2)).is_none());
    assert!(b.get_piece(sq(4, 3)).is_some());
}

#[test]
fn test_terminal_winner_no_pieces() {
    let only_dark = board_with(&[Piece::man(sq(2, 1), Color::Dark)]);
    assert_eq!(terminal_winner(&only_dark), Some(Color::Dark));

    let only_light = board_with(&[Piece::man(sq(5, 2), Color::Light)]);
    assert_eq!(terminal_winner(&only_light), Some(Color::Light));

    assert_eq!(terminal_winner(&Board::startpos()), None);
}

#[test]
fn test_terminal_winner_blocked_side_loses() {
    // The light man on (1,0) can neither step onto (0,1) nor jump off the board.
    let b = board_with(&[
        Piece::man(sq(0, 1), Color::Dark),
        Piece::man(sq(1, 0), Color::Light),
    ]);
    assert!(!has_legal_move(&b, Color::Light));
    assert!(all_turn_moves(&b, Color::Light).is_empty());
    assert_eq!(terminal_winner(&b), Some(Color::Dark));
}
