use crate::piece::{PieceKind, Player};

/// Width and height of the square board.
pub const BOARD_SIZE: usize = 5;

/// Number of pieces each player starts with; one per column of the home row.
pub const FORMATION_WIDTH: usize = BOARD_SIZE;

/// Formation used when a session is created without explicit line-ups.
pub const DEFAULT_FORMATION: [PieceKind; FORMATION_WIDTH] = [
    PieceKind::Hero1,
    PieceKind::Hero2,
    PieceKind::Pawn,
    PieceKind::Hero2,
    PieceKind::Hero1,
];

/// Row on which `player`'s formation is placed.
pub const fn home_row(player: Player) -> usize {
    match player {
        Player::A => 0,
        Player::B => BOARD_SIZE - 1,
    }
}

/// How long-range pieces treat occupied cells between origin and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PathPolicy {
    /// Any piece on a path cell, friend or foe, stops the move.
    #[default]
    Strict,
    /// Friendly pieces are passed over; opponent pieces on the path are captured.
    Sweep,
}

/// Per-session rule settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub path_policy: PathPolicy,
}

impl EngineConfig {
    pub const fn new(path_policy: PathPolicy) -> Self {
        Self { path_policy }
    }
}
