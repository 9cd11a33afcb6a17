//! Move validation, board mutation and the terminal check.
//!
//! [`validate`] never touches the board and returns a [`PlannedMove`] on
//! success; [`apply`] only accepts a plan, so a move cannot be applied
//! without having been validated against the same board.

use alloc::string::String;
use alloc::vec::Vec;

use crate::board::Board;
use crate::catalog::{self, Direction};
use crate::common::{GameResult, Rejection};
use crate::config::PathPolicy;
use crate::piece::{PieceKind, Player, Position};

/// How a request identifies the piece to move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceRef {
    /// Whatever piece currently stands on this cell.
    At(Position),
    /// The piece carrying this id.
    Id(String),
}

/// Where the piece should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Direction(Direction),
    Cell(Position),
}

/// A decoded move request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRequest {
    pub piece: PieceRef,
    pub target: Target,
    pub player: Player,
}

impl MoveRequest {
    /// Move the piece at `from` one catalog step in `direction`.
    pub fn step(player: Player, from: Position, direction: Direction) -> Self {
        Self {
            piece: PieceRef::At(from),
            target: Target::Direction(direction),
            player,
        }
    }

    /// Move the piece at `from` to `to`.
    pub fn to_cell(player: Player, from: Position, to: Position) -> Self {
        Self {
            piece: PieceRef::At(from),
            target: Target::Cell(to),
            player,
        }
    }

    /// Move the piece with `id` in `direction`.
    pub fn by_id(player: Player, id: impl Into<String>, direction: Direction) -> Self {
        Self {
            piece: PieceRef::Id(id.into()),
            target: Target::Direction(direction),
            player,
        }
    }
}

/// A move that passed validation against a particular board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub player: Player,
    pub kind: PieceKind,
    pub direction: Direction,
    pub from: Position,
    pub to: Position,
    /// Path cells in order from origin toward destination.
    pub path: Vec<Position>,
}

impl PlannedMove {
    /// Request that reproduces this move.
    pub fn request(&self) -> MoveRequest {
        MoveRequest::step(self.player, self.from, self.direction)
    }
}

/// Effects of an applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Ids of captured pieces: path captures first, then the destination.
    pub captured: Vec<String>,
    pub result: GameResult,
}

/// Check `request` against `board`. The first failing check decides the
/// rejection: ownership, catalog lookup, bounds, self-block, path.
pub fn validate(
    board: &Board,
    request: &MoveRequest,
    policy: PathPolicy,
) -> Result<PlannedMove, Rejection> {
    let from = match &request.piece {
        PieceRef::At(pos) => *pos,
        PieceRef::Id(id) => board.locate(id).ok_or(Rejection::NoPieceAtOrigin)?,
    };
    let piece = board.get(from).ok_or(Rejection::NoPieceAtOrigin)?;
    if piece.owner() != request.player {
        return Err(Rejection::NotYourPiece);
    }
    let (kind, owner) = (piece.kind(), piece.owner());

    let direction = match request.target {
        Target::Direction(dir) => dir,
        Target::Cell(to) => {
            let (Some(d_row), Some(d_col)) =
                (axis_delta(from.row, to.row), axis_delta(from.col, to.col))
            else {
                return Err(Rejection::UnknownMove);
            };
            catalog::direction_between(kind, owner, d_row, d_col)
                .ok_or(Rejection::UnknownMove)?
        }
    };
    let disp = catalog::displacement(kind, direction, owner).ok_or(Rejection::UnknownMove)?;

    let to = from
        .offset(disp.d_row, disp.d_col)
        .ok_or(Rejection::OutOfBounds)?;

    if board.get(to).is_some_and(|p| p.owner() == owner) {
        return Err(Rejection::DestinationOccupiedBySelf);
    }

    let (s_row, s_col) = disp.step();
    let mut path = Vec::new();
    for i in 1..disp.path_length() {
        let i = i as i8;
        let cell = from
            .offset(s_row * i, s_col * i)
            .ok_or(Rejection::OutOfBounds)?;
        if let Some(occupant) = board.get(cell) {
            if policy == PathPolicy::Strict {
                log::trace!("{} blocked at {} by {}", piece.id(), cell, occupant.id());
                return Err(Rejection::PathBlocked);
            }
        }
        path.push(cell);
    }

    Ok(PlannedMove {
        player: owner,
        kind,
        direction,
        from,
        to,
        path,
    })
}

/// Signed distance from `from` to `to` along one axis, if it fits in an `i8`.
fn axis_delta(from: usize, to: usize) -> Option<i8> {
    if to >= from {
        i8::try_from(to - from).ok()
    } else {
        i8::try_from(from - to).ok().map(|d| -d)
    }
}

/// Carry out a validated move: capture opponents on the path and at the
/// destination, relocate the mover, then run the terminal check.
pub fn apply(board: &mut Board, plan: &PlannedMove) -> Applied {
    let mut captured = Vec::new();
    let opponent = plan.player.opponent();

    for &cell in &plan.path {
        if board.get(cell).is_some_and(|p| p.owner() == opponent) {
            if let Some(victim) = board.take(cell) {
                captured.push(String::from(victim.id()));
            }
        }
    }
    if board.get(plan.to).is_some_and(|p| p.owner() == opponent) {
        if let Some(victim) = board.take(plan.to) {
            captured.push(String::from(victim.id()));
        }
    }

    if let Some(mover) = board.take(plan.from) {
        // destination was cleared above or was already empty
        let _ = board.place(mover, plan.to);
    }

    Applied {
        captured,
        result: check_terminal(board),
    }
}

/// Winner if one side has no pieces left.
pub fn check_terminal(board: &Board) -> GameResult {
    if board.piece_count(Player::A) == 0 {
        GameResult::Winner(Player::B)
    } else if board.piece_count(Player::B) == 0 {
        GameResult::Winner(Player::A)
    } else {
        GameResult::InProgress
    }
}

/// Every move `player` could make on `board`.
pub fn legal_moves(board: &Board, player: Player, policy: PathPolicy) -> Vec<PlannedMove> {
    let mut moves = Vec::new();
    for piece in board.pieces().filter(|p| p.owner() == player) {
        for &dir in catalog::directions(piece.kind()) {
            let request = MoveRequest::step(player, piece.position(), dir);
            if let Ok(plan) = validate(board, &request, policy) {
                moves.push(plan);
            }
        }
    }
    moves
}
