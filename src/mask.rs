//! Occupancy masks over the board, one bit per cell.
//!
//! Masks are computed from the grid on demand. The backing word is generic
//! and must hold at least `BOARD_SIZE * BOARD_SIZE` bits.

use core::fmt;
use core::ops::BitOr;
use num_traits::{PrimInt, Unsigned};

use crate::config::BOARD_SIZE;
use crate::piece::Position;

/// Errors returned by mask operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMaskError {
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for CellMaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellMaskError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// Set of board cells packed into the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T = u32>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T> CellMask<T>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn index(pos: Position) -> Result<usize, CellMaskError> {
        if pos.in_bounds() {
            Ok(pos.row * BOARD_SIZE + pos.col)
        } else {
            Err(CellMaskError::IndexOutOfBounds {
                row: pos.row,
                col: pos.col,
            })
        }
    }

    /// Empty mask.
    pub fn new() -> Self {
        Self { bits: T::zero() }
    }

    /// Number of cells in the mask.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn insert(&mut self, pos: Position) -> Result<(), CellMaskError> {
        let idx = Self::index(pos)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Iterator over the cells in the mask, row-major.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells { mask: self, idx: 0 }
    }
}

impl<T> Default for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask:")?;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let bit = if (self.bits >> (r * BOARD_SIZE + c)) & T::one() != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells of a mask.
pub struct Cells<'a, T>
where
    T: PrimInt + Unsigned,
{
    mask: &'a CellMask<T>,
    idx: usize,
}

impl<T> Iterator for Cells<'_, T>
where
    T: PrimInt + Unsigned,
{
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < BOARD_SIZE * BOARD_SIZE {
            let idx = self.idx;
            self.idx += 1;
            if (self.mask.bits >> idx) & T::one() != T::zero() {
                return Some(Position::new(idx / BOARD_SIZE, idx % BOARD_SIZE));
            }
        }
        None
    }
}

impl<T> BitOr for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_iterate() {
        let mut m: CellMask = CellMask::new();
        m.insert(Position::new(4, 4)).unwrap();
        m.insert(Position::new(0, 0)).unwrap();
        m.insert(Position::new(0, 0)).unwrap();
        assert_eq!(m.count(), 2);
        assert_eq!(
            m.iter().collect::<Vec<_>>(),
            vec![Position::new(0, 0), Position::new(4, 4)]
        );
    }

    #[test]
    fn union_with_wide_word() {
        let mut a: CellMask<u64> = CellMask::new();
        let mut b: CellMask<u64> = CellMask::new();
        a.insert(Position::new(1, 2)).unwrap();
        b.insert(Position::new(1, 2)).unwrap();
        b.insert(Position::new(3, 0)).unwrap();
        assert_eq!((a | b).count(), 2);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut m: CellMask = CellMask::new();
        assert_eq!(
            m.insert(Position::new(5, 0)),
            Err(CellMaskError::IndexOutOfBounds { row: 5, col: 0 })
        );
    }
}
