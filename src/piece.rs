//! Players, piece kinds, board coordinates and the pieces themselves.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::common::ParseError;
use crate::config::BOARD_SIZE;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// The other side.
    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Row step that moves a piece away from this player's home row.
    pub const fn forward(self) -> i8 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

/// Piece type; determines which directions and distances are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Hero1,
    Hero2,
}

impl PieceKind {
    pub const ALL: [PieceKind; 3] = [PieceKind::Pawn, PieceKind::Hero1, PieceKind::Hero2];

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Hero1 => "Hero1",
            PieceKind::Hero2 => "Hero2",
        }
    }

    /// Single-character board glyph.
    pub const fn glyph(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Hero1 => '1',
            PieceKind::Hero2 => '2',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "p1" | "pawn" => Ok(PieceKind::Pawn),
            "h1" | "hero1" => Ok(PieceKind::Hero1),
            "h2" | "hero2" => Ok(PieceKind::Hero2),
            _ => Err(ParseError::PieceKind),
        }
    }
}

/// A cell on the board. Coordinates are only guaranteed in range when the
/// position was produced by [`Position::offset`] or checked by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Position displaced by `(d_row, d_col)`, or `None` if it leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Position> {
        let row = self.row as isize + d_row as isize;
        let col = self.col as isize + d_col as isize;
        if row < 0 || col < 0 {
            return None;
        }
        let pos = Position::new(row as usize, col as usize);
        pos.in_bounds().then_some(pos)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A piece on (or formerly on) the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    kind: PieceKind,
    owner: Player,
    position: Position,
    id: String,
}

impl Piece {
    /// A piece that is not yet placed. Its position is set by the board when placed.
    pub fn new(kind: PieceKind, owner: Player, id: impl Into<String>) -> Self {
        Self {
            kind,
            owner,
            position: Position::new(0, 0),
            id: id.into(),
        }
    }

    /// Piece for a formation slot, with the canonical `{owner}-{kind}-{slot}` id.
    pub fn for_slot(kind: PieceKind, owner: Player, slot: usize) -> Self {
        Self::new(kind, owner, format!("{}-{}-{}", owner, kind, slot))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn col(&self) -> usize {
        self.position.col
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
