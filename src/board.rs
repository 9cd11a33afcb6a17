//! Board model: a fixed 5×5 grid of optional pieces.
//!
//! The grid is the single source of truth for piece locations; every piece
//! placed through [`Board`] has its stored coordinates rewritten to match
//! the cell it lands on.

use alloc::string::String;
use core::fmt;

use crate::common::BoardError;
use crate::config::{home_row, BOARD_SIZE, FORMATION_WIDTH};
use crate::mask::CellMask;
use crate::piece::{Piece, PieceKind, Player, Position};

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBoard")
)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

/// Wire form of [`Board`]. Decoded boards go through [`Board::try_from`],
/// which rewrites stored coordinates from the grid and rejects repeated ids.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawBoard {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

#[cfg(feature = "std")]
impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Board::empty();
        for (row, cells) in raw.cells.into_iter().enumerate() {
            for (col, cell) in cells.into_iter().enumerate() {
                if let Some(piece) = cell {
                    board.place(piece, Position::new(row, col))?;
                }
            }
        }
        Ok(board)
    }
}

impl Board {
    /// Board with every cell empty.
    pub fn empty() -> Self {
        Board {
            cells: core::array::from_fn(|_| core::array::from_fn(|_| None)),
        }
    }

    /// Board with both formations on their home rows.
    pub fn with_formations(a: &[PieceKind], b: &[PieceKind]) -> Result<Self, BoardError> {
        let mut board = Board::empty();
        board.place_initial_formation(Player::A, a)?;
        board.place_initial_formation(Player::B, b)?;
        Ok(board)
    }

    /// Occupant of `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Option<&Piece>, BoardError> {
        if !Position::new(row, col).in_bounds() {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col].as_ref())
    }

    /// Occupant of `pos`, treating off-board positions as empty.
    pub fn get(&self, pos: Position) -> Option<&Piece> {
        if pos.in_bounds() {
            self.cells[pos.row][pos.col].as_ref()
        } else {
            None
        }
    }

    /// Fill `player`'s home row with `kinds`, left to right. Each piece's id is
    /// derived from the player and its slot in the formation.
    pub fn place_initial_formation(
        &mut self,
        player: Player,
        kinds: &[PieceKind],
    ) -> Result<(), BoardError> {
        if kinds.len() != FORMATION_WIDTH {
            return Err(BoardError::InvalidFormation {
                expected: FORMATION_WIDTH,
                found: kinds.len(),
            });
        }
        let row = home_row(player);
        if let Some(col) = (0..BOARD_SIZE).find(|&c| self.cells[row][c].is_some()) {
            return Err(BoardError::CellOccupied { row, col });
        }
        for (slot, &kind) in kinds.iter().enumerate() {
            let mut piece = Piece::for_slot(kind, player, slot);
            piece.set_position(Position::new(row, slot));
            self.cells[row][slot] = Some(piece);
        }
        Ok(())
    }

    /// Put `piece` on the empty cell `at`, updating its stored coordinates.
    /// Fails if another piece on the board already carries the same id.
    pub fn place(&mut self, mut piece: Piece, at: Position) -> Result<(), BoardError> {
        if !at.in_bounds() {
            return Err(BoardError::OutOfBounds {
                row: at.row,
                col: at.col,
            });
        }
        if self.find(piece.id()).is_some() {
            return Err(BoardError::DuplicateId(String::from(piece.id())));
        }
        let cell = &mut self.cells[at.row][at.col];
        if cell.is_some() {
            return Err(BoardError::CellOccupied {
                row: at.row,
                col: at.col,
            });
        }
        piece.set_position(at);
        *cell = Some(piece);
        Ok(())
    }

    /// Remove and return the occupant of `pos`.
    pub(crate) fn take(&mut self, pos: Position) -> Option<Piece> {
        if pos.in_bounds() {
            self.cells[pos.row][pos.col].take()
        } else {
            None
        }
    }

    /// Piece with the given id, if it is still on the board.
    pub fn find(&self, id: &str) -> Option<&Piece> {
        self.pieces().find(|p| p.id() == id)
    }

    /// Cell holding the piece with the given id, read from the grid.
    pub fn locate(&self, id: &str) -> Option<Position> {
        self.occupants()
            .find(|(_, p)| p.id() == id)
            .map(|(pos, _)| pos)
    }

    /// All pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten().flatten()
    }

    /// All pieces with the cell they occupy, row-major.
    pub fn occupants(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_ref().map(|p| (Position::new(row, col), p)))
        })
    }

    /// Cells held by `player`.
    pub fn occupancy(&self, player: Player) -> CellMask {
        let mut mask = CellMask::new();
        for (pos, _) in self.occupants().filter(|(_, p)| p.owner() == player) {
            // grid indices are always on the board
            let _ = mask.insert(pos);
        }
        mask
    }

    /// Cells held by either player.
    pub fn occupied(&self) -> CellMask {
        self.occupancy(Player::A) | self.occupancy(Player::B)
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.occupancy(player).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            write!(f, " ")?;
            for cell in row {
                match cell {
                    Some(p) => write!(f, " {}{}", p.owner(), p.kind().glyph())?,
                    None => write!(f, " ..")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
