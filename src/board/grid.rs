//! Mailbox board: an 8x8 array of optional colored pieces.

use std::fmt;

use super::{Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 8x8 grid. Row 0 is Black's back rank, row 7 White's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    pub(crate) const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            board.cells[Color::Black.back_row()][col] = Some((Color::Black, *piece));
            board.cells[Color::Black.pawn_start_row()][col] = Some((Color::Black, Piece::Pawn));
            board.cells[Color::White.pawn_start_row()][col] = Some((Color::White, Piece::Pawn));
            board.cells[Color::White.back_row()][col] = Some((Color::White, *piece));
        }
        board
    }

    /// Contents of a square
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Option<(Color, Piece)>) {
        self.cells[sq.0][sq.1] = cell;
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.0][sq.1].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|(color, _)| color)
    }

    /// Read-only view of the rows
    #[must_use]
    pub fn rows(&self) -> &[[Option<(Color, Piece)>; 8]; 8] {
        &self.cells
    }

    /// Every occupied square with its piece, row by row
    pub fn occupied(&self) -> impl Iterator<Item = (Square, (Color, Piece))> + '_ {
        (0..64).filter_map(move |idx| {
            let sq = Square::from_index(idx);
            self.get(sq).map(|cell| (sq, cell))
        })
    }

    /// Squares holding the given colored piece
    pub fn find(&self, color: Color, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.occupied()
            .filter(move |(_, cell)| *cell == (color, piece))
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let ch = match cell {
                    Some((color, piece)) => piece.to_colored_char(*color),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
