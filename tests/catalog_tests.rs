use herogrid::catalog::{direction_between, directions, displacement};
use herogrid::{Direction, PieceKind, Player};

#[test]
fn test_pawn_moves_one_cell_in_four_directions() {
    let expected = [
        (Direction::Left, 0, -1),
        (Direction::Right, 0, 1),
        (Direction::Forward, 1, 0),
        (Direction::Backward, -1, 0),
    ];
    for (dir, d_row, d_col) in expected {
        let d = displacement(PieceKind::Pawn, dir, Player::A).unwrap();
        assert_eq!((d.d_row, d.d_col), (d_row, d_col), "{:?}", dir);
        assert_eq!(d.path_length(), 1);
    }
}

#[test]
fn test_hero1_moves_two_cells_straight() {
    for &dir in directions(PieceKind::Hero1) {
        let d = displacement(PieceKind::Hero1, dir, Player::B).unwrap();
        assert!(d.d_row == 0 || d.d_col == 0);
        assert_eq!(d.path_length(), 2);
    }
    let fwd = displacement(PieceKind::Hero1, Direction::Forward, Player::B).unwrap();
    assert_eq!((fwd.d_row, fwd.d_col), (-2, 0));
}

#[test]
fn test_hero2_moves_two_cells_diagonally() {
    let expected = [
        (Direction::ForwardLeft, 2, -2),
        (Direction::ForwardRight, 2, 2),
        (Direction::BackwardLeft, -2, -2),
        (Direction::BackwardRight, -2, 2),
    ];
    for (dir, d_row, d_col) in expected {
        let d = displacement(PieceKind::Hero2, dir, Player::A).unwrap();
        assert_eq!((d.d_row, d.d_col), (d_row, d_col));
        assert_eq!(d.path_length(), 2);
        assert_eq!(d.step(), (d_row.signum(), d_col.signum()));
    }
}

#[test]
fn test_unsupported_pairs_yield_no_move() {
    for dir in [
        Direction::ForwardLeft,
        Direction::ForwardRight,
        Direction::BackwardLeft,
        Direction::BackwardRight,
    ] {
        assert!(displacement(PieceKind::Pawn, dir, Player::A).is_none());
        assert!(displacement(PieceKind::Hero1, dir, Player::B).is_none());
    }
    for dir in [Direction::Left, Direction::Forward] {
        assert!(displacement(PieceKind::Hero2, dir, Player::A).is_none());
    }
}

#[test]
fn test_direction_between_rejects_non_catalog_offsets() {
    assert_eq!(direction_between(PieceKind::Hero1, Player::A, 1, 0), None);
    assert_eq!(direction_between(PieceKind::Hero2, Player::A, 2, 0), None);
    assert_eq!(
        direction_between(PieceKind::Hero2, Player::B, -2, 2),
        Some(Direction::ForwardRight)
    );
}

#[test]
fn test_direction_codes_parse() {
    for dir in Direction::ALL {
        assert_eq!(dir.code().parse::<Direction>().unwrap(), dir);
    }
    assert_eq!("fl".parse::<Direction>().unwrap(), Direction::ForwardLeft);
    assert!("up".parse::<Direction>().is_err());
    assert_eq!("H1".parse::<PieceKind>().unwrap(), PieceKind::Hero1);
    assert_eq!("pawn".parse::<PieceKind>().unwrap(), PieceKind::Pawn);
    assert!("king".parse::<PieceKind>().is_err());
}
