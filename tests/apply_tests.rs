use herogrid::rules::{apply, check_terminal, legal_moves, validate};
use herogrid::{
    Board, Direction, GameResult, MoveRequest, PathPolicy, Piece, PieceKind, Player, Position,
    DEFAULT_FORMATION,
};

fn board_with(pieces: &[(PieceKind, Player, usize, usize)]) -> Board {
    let mut board = Board::empty();
    for &(kind, owner, r, c) in pieces {
        let id = format!("{}-{}-{}{}", owner, kind, r, c);
        board.place(Piece::new(kind, owner, id), Position::new(r, c)).unwrap();
    }
    board
}

fn play(board: &mut Board, request: MoveRequest, policy: PathPolicy) -> herogrid::rules::Applied {
    let plan = validate(board, &request, policy).unwrap();
    apply(board, &plan)
}

#[test]
fn test_pawn_captures_at_destination() {
    let mut board = board_with(&[
        (PieceKind::Pawn, Player::A, 1, 1),
        (PieceKind::Pawn, Player::B, 2, 1),
        (PieceKind::Hero1, Player::B, 4, 4),
    ]);
    let applied = play(
        &mut board,
        MoveRequest::step(Player::A, Position::new(1, 1), Direction::Forward),
        PathPolicy::Strict,
    );
    assert_eq!(applied.captured, vec!["B-Pawn-21".to_string()]);
    assert_eq!(applied.result, GameResult::InProgress);
    assert!(board.cell_at(1, 1).unwrap().is_none());
    let mover = board.cell_at(2, 1).unwrap().unwrap();
    assert_eq!(mover.id(), "A-Pawn-11");
    assert_eq!(mover.position(), Position::new(2, 1));
}

#[test]
fn test_hero2_diagonal_capture() {
    let mut board = board_with(&[
        (PieceKind::Hero2, Player::A, 0, 1),
        (PieceKind::Pawn, Player::B, 2, 3),
        (PieceKind::Pawn, Player::B, 4, 0),
    ]);
    let applied = play(
        &mut board,
        MoveRequest::step(Player::A, Position::new(0, 1), Direction::ForwardRight),
        PathPolicy::Strict,
    );
    assert_eq!(applied.captured, vec!["B-Pawn-23".to_string()]);
    assert_eq!(board.cell_at(2, 3).unwrap().unwrap().id(), "A-Hero2-01");
    assert_eq!(board.piece_count(Player::B), 1);
}

#[test]
fn test_hero1_jumps_over_and_captures_opponent_when_sweeping() {
    let mut board = board_with(&[
        (PieceKind::Hero1, Player::A, 0, 0),
        (PieceKind::Pawn, Player::B, 1, 0),
        (PieceKind::Pawn, Player::B, 4, 4),
    ]);
    let applied = play(
        &mut board,
        MoveRequest::step(Player::A, Position::new(0, 0), Direction::Forward),
        PathPolicy::Sweep,
    );
    assert_eq!(applied.captured, vec!["B-Pawn-10".to_string()]);
    assert!(board.cell_at(0, 0).unwrap().is_none());
    assert!(board.cell_at(1, 0).unwrap().is_none());
    assert_eq!(board.cell_at(2, 0).unwrap().unwrap().id(), "A-Hero1-00");
}

#[test]
fn test_sweep_captures_path_before_destination() {
    let mut board = board_with(&[
        (PieceKind::Hero1, Player::B, 4, 4),
        (PieceKind::Pawn, Player::A, 4, 3),
        (PieceKind::Hero2, Player::A, 4, 2),
        (PieceKind::Pawn, Player::A, 0, 0),
    ]);
    let applied = play(
        &mut board,
        MoveRequest::step(Player::B, Position::new(4, 4), Direction::Left),
        PathPolicy::Sweep,
    );
    assert_eq!(
        applied.captured,
        vec!["A-Pawn-43".to_string(), "A-Hero2-42".to_string()]
    );
    assert_eq!(board.piece_count(Player::A), 1);
}

#[test]
fn test_sweep_leaves_friendly_path_pieces() {
    let mut board = board_with(&[
        (PieceKind::Hero1, Player::A, 0, 0),
        (PieceKind::Pawn, Player::A, 1, 0),
        (PieceKind::Pawn, Player::B, 4, 4),
    ]);
    let applied = play(
        &mut board,
        MoveRequest::step(Player::A, Position::new(0, 0), Direction::Forward),
        PathPolicy::Sweep,
    );
    assert!(applied.captured.is_empty());
    assert_eq!(board.cell_at(1, 0).unwrap().unwrap().id(), "A-Pawn-10");
    assert_eq!(board.cell_at(2, 0).unwrap().unwrap().id(), "A-Hero1-00");
}

#[test]
fn test_capturing_last_piece_ends_game() {
    let mut board = board_with(&[
        (PieceKind::Hero2, Player::B, 4, 4),
        (PieceKind::Pawn, Player::A, 2, 2),
    ]);
    let applied = play(
        &mut board,
        MoveRequest::step(Player::B, Position::new(4, 4), Direction::ForwardLeft),
        PathPolicy::Strict,
    );
    assert_eq!(applied.captured, vec!["A-Pawn-22".to_string()]);
    assert_eq!(applied.result, GameResult::Winner(Player::B));
}

#[test]
fn test_check_terminal() {
    let only_a = board_with(&[(PieceKind::Pawn, Player::A, 0, 0)]);
    assert_eq!(check_terminal(&only_a), GameResult::Winner(Player::A));
    let only_b = board_with(&[(PieceKind::Pawn, Player::B, 4, 0)]);
    assert_eq!(check_terminal(&only_b), GameResult::Winner(Player::B));
    let both = Board::with_formations(&DEFAULT_FORMATION, &DEFAULT_FORMATION).unwrap();
    assert_eq!(check_terminal(&both), GameResult::InProgress);
}

#[test]
fn test_opening_legal_moves() {
    let board = Board::with_formations(&DEFAULT_FORMATION, &DEFAULT_FORMATION).unwrap();
    for player in Player::ALL {
        let moves = legal_moves(&board, player, PathPolicy::Strict);
        assert_eq!(moves.len(), 5, "{:?}: {:?}", player, moves);
        assert!(moves.iter().all(|m| m.player == player));
    }
}
