//! Movement catalog: the fixed displacement table per piece kind and direction.

use core::fmt;
use core::str::FromStr;

use crate::common::ParseError;
use crate::piece::{PieceKind, Player};

/// Direction of a move, relative to the owner's forward row direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
    ForwardLeft,
    ForwardRight,
    BackwardLeft,
    BackwardRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
        Direction::ForwardLeft,
        Direction::ForwardRight,
        Direction::BackwardLeft,
        Direction::BackwardRight,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Direction::Left => "L",
            Direction::Right => "R",
            Direction::Forward => "F",
            Direction::Backward => "B",
            Direction::ForwardLeft => "FL",
            Direction::ForwardRight => "FR",
            Direction::BackwardLeft => "BL",
            Direction::BackwardRight => "BR",
        }
    }

    /// Unit step as (forward rows, columns); forward is flipped per owner later.
    const fn unit(self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (1, 0),
            Direction::Backward => (-1, 0),
            Direction::ForwardLeft => (1, -1),
            Direction::ForwardRight => (1, 1),
            Direction::BackwardLeft => (-1, -1),
            Direction::BackwardRight => (-1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.code().eq_ignore_ascii_case(s))
            .ok_or(ParseError::Direction)
    }
}

/// Board displacement of a single move, in absolute rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement {
    pub d_row: i8,
    pub d_col: i8,
}

impl Displacement {
    /// Number of unit steps from origin to destination. Cells strictly
    /// between are the path cells.
    pub fn path_length(self) -> usize {
        self.d_row.unsigned_abs().max(self.d_col.unsigned_abs()) as usize
    }

    /// The single-cell step along this displacement's line.
    pub fn step(self) -> (i8, i8) {
        (self.d_row.signum(), self.d_col.signum())
    }
}

const STRAIGHT: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Forward,
    Direction::Backward,
];

const DIAGONAL: [Direction; 4] = [
    Direction::ForwardLeft,
    Direction::ForwardRight,
    Direction::BackwardLeft,
    Direction::BackwardRight,
];

/// Directions available to `kind`.
pub fn directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Pawn | PieceKind::Hero1 => &STRAIGHT,
        PieceKind::Hero2 => &DIAGONAL,
    }
}

/// Cells travelled per move.
pub const fn magnitude(kind: PieceKind) -> i8 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Hero1 | PieceKind::Hero2 => 2,
    }
}

/// Look up the displacement of `kind` moving in `direction` for `owner`.
/// `None` means the piece has no such move.
pub fn displacement(kind: PieceKind, direction: Direction, owner: Player) -> Option<Displacement> {
    if !directions(kind).contains(&direction) {
        return None;
    }
    let (fwd, side) = direction.unit();
    let m = magnitude(kind);
    Some(Displacement {
        d_row: fwd * owner.forward() * m,
        d_col: side * m,
    })
}

/// Inverse lookup: the direction whose displacement is exactly `(d_row, d_col)`.
pub fn direction_between(kind: PieceKind, owner: Player, d_row: i8, d_col: i8) -> Option<Direction> {
    directions(kind).iter().copied().find(|&dir| {
        displacement(kind, dir, owner)
            .is_some_and(|d| d.d_row == d_row && d.d_col == d_col)
    })
}
