//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::grid::Board;

/// A single ply, frozen against the board it was built from.
///
/// The moved and captured pieces and the promotion/en-passant/castling flags
/// are derived once at construction and never recomputed. Two moves compare
/// equal iff their `(from, to)` pair matches, whatever board produced them.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: (Color, Piece),
    piece_captured: Option<(Color, Piece)>,
    promotion: Option<Piece>,
    is_en_passant: bool,
    is_castling: bool,
}

impl Move {
    /// Build a move from two squares and the board they refer to.
    ///
    /// Returns `None` when `from` is empty. The result is only a description
    /// of the request; compare it against the engine's valid moves before
    /// applying it.
    #[must_use]
    pub fn new(from: Square, to: Square, board: &Board) -> Option<Self> {
        let piece_moved = board.get(from)?;
        Some(Move::with_flags(from, to, piece_moved, board, false, false))
    }

    pub(crate) fn with_flags(
        from: Square,
        to: Square,
        piece_moved: (Color, Piece),
        board: &Board,
        is_en_passant: bool,
        is_castling: bool,
    ) -> Self {
        let (color, piece) = piece_moved;
        let piece_captured = if is_en_passant {
            Some((color.opponent(), Piece::Pawn))
        } else {
            board.get(to)
        };
        let promotion = if piece == Piece::Pawn && to.row() == color.promotion_row() {
            Some(Piece::Queen)
        } else {
            None
        };
        Move {
            from,
            to,
            piece_moved,
            piece_captured,
            promotion,
            is_en_passant,
            is_castling,
        }
    }

    /// Choose a different promotion piece. Has no effect on non-promotions
    /// and does not change move equality.
    #[must_use]
    pub fn with_promotion(mut self, piece: Piece) -> Self {
        if self.promotion.is_some() && !matches!(piece, Piece::Pawn | Piece::King) {
            self.promotion = Some(piece);
        }
        self
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn piece_moved(&self) -> (Color, Piece) {
        self.piece_moved
    }

    /// The captured piece; for en passant this is the pawn beside the destination
    #[inline]
    #[must_use]
    pub const fn piece_captured(&self) -> Option<(Color, Piece)> {
        self.piece_captured
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.is_castling
    }

    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(&self) -> bool {
        self.is_castling && self.to.1 > self.from.1
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Returns true if this move is a two-square pawn advance
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(&self) -> bool {
        matches!(self.piece_moved.1, Piece::Pawn) && self.from.0.abs_diff(self.to.0) == 2
    }

    /// Identity key: bits 0-5 hold the source index, bits 6-11 the destination.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u16 {
        (self.from.as_index() as u16) | ((self.to.as_index() as u16) << 6)
    }

    /// Four-character coordinate notation, e.g. "e2e4".
    #[must_use]
    pub fn to_chess_notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling {
            write!(f, " castle")?;
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

pub(crate) const MAX_MOVES: usize = 256;

pub(crate) const EMPTY_MOVE: Move = Move {
    from: Square(0, 0),
    to: Square(0, 0),
    piece_moved: (Color::White, Piece::Pawn),
    piece_captured: None,
    promotion: None,
    is_en_passant: false,
    is_castling: false,
};

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Keep only the moves for which `keep` returns true, preserving order.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(&mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    /// Returns true if an equal move (same `from`/`to`) is present
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.iter().any(|m| m == mv)
    }

    /// Find the listed move equal to `mv`
    #[must_use]
    pub fn find(&self, mv: &Move) -> Option<Move> {
        self.iter().find(|m| *m == mv).copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
