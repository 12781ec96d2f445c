//! Square types and coordinate mapping.
//!
//! Rows run from Black's back rank (row 0, rank 8) down to White's back
//! rank (row 7, rank 1). Columns run from file a (0) to file h (7).

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Map a rank character ('1'..='8') to its row (rank 1 is row 7).
#[must_use]
pub fn rank_to_row(rank: char) -> Option<usize> {
    match rank {
        '1'..='8' => Some(7 - (rank as usize - '1' as usize)),
        _ => None,
    }
}

/// Map a file character ('a'..='h') to its column.
#[must_use]
pub fn file_to_col(file: char) -> Option<usize> {
    match file {
        'a'..='h' => Some(file as usize - 'a' as usize),
        _ => None,
    }
}

/// Map a row (0-7) to its rank character (row 0 is '8').
#[must_use]
pub const fn row_to_rank(row: usize) -> char {
    (b'8' - row as u8) as char
}

/// Map a column (0-7) to its file character.
#[must_use]
pub const fn col_to_file(col: usize) -> char {
    (b'a' + col as u8) as char
}

/// A square on the chess board, represented as (row, col).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Square index (0-63, a8=0, b8=1, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// The square `(dr, dc)` away, if it is still on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0 as isize + dr;
        let col = self.1 as isize + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", col_to_file(self.1), row_to_rank(self.0))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = file_to_col(file).ok_or_else(invalid)?;
        let row = rank_to_row(rank).ok_or_else(invalid)?;
        Ok(Square(row, col))
    }
}
