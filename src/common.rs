//! Common types: board errors, move rejections, parse errors and game results.

use alloc::string::String;

use crate::piece::Player;

/// Outcome of the terminal check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    /// Both players still have pieces on the board.
    InProgress,
    /// The opponent of the winner has no pieces left.
    Winner(Player),
}

impl GameResult {
    pub fn is_over(self) -> bool {
        matches!(self, GameResult::Winner(_))
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::InProgress => None,
            GameResult::Winner(p) => Some(p),
        }
    }
}

/// Errors returned by Board operations. These indicate caller bugs, not
/// illegal moves; see [`Rejection`] for the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside the board.
    OutOfBounds { row: usize, col: usize },
    /// A formation must fill the whole home row.
    InvalidFormation { expected: usize, found: usize },
    /// Tried to place a piece on a cell that already holds one.
    CellOccupied { row: usize, col: usize },
    /// Two pieces on the board carry the same id.
    DuplicateId(String),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::InvalidFormation { expected, found } => write!(
                f,
                "Formation must contain {} pieces, got {}",
                expected, found
            ),
            BoardError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
            BoardError::DuplicateId(id) => write!(f, "Piece id {} appears more than once", id),
        }
    }
}

/// Why a move request was refused. All of these are ordinary gameplay
/// outcomes; the board is never touched when one is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// The origin is empty (or off the board, or the piece id is unknown).
    NoPieceAtOrigin,
    /// The origin holds an opponent piece.
    NotYourPiece,
    /// The piece kind has no such direction, or the destination is not reachable in one move.
    UnknownMove,
    /// The destination lies off the board.
    OutOfBounds,
    /// The destination holds one of the mover's own pieces.
    DestinationOccupiedBySelf,
    /// A path cell is occupied.
    PathBlocked,
    /// A winner has already been decided.
    GameOver,
    /// The request was made by the player who is not to move.
    NotYourTurn,
}

impl core::fmt::Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Rejection::NoPieceAtOrigin => "No piece at origin",
            Rejection::NotYourPiece => "Piece belongs to the opponent",
            Rejection::UnknownMove => "Piece cannot move that way",
            Rejection::OutOfBounds => "Destination is outside the board",
            Rejection::DestinationOccupiedBySelf => "Destination holds your own piece",
            Rejection::PathBlocked => "Path is blocked",
            Rejection::GameOver => "Game is already over",
            Rejection::NotYourTurn => "Not your turn",
        };
        f.write_str(msg)
    }
}

/// Errors returned when parsing textual piece kinds or directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    PieceKind,
    Direction,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::PieceKind => write!(f, "expected one of Pawn, Hero1, Hero2 (or P, H1, H2)"),
            ParseError::Direction => write!(f, "expected one of L, R, F, B, FL, FR, BL, BR"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for Rejection {}
#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
