use super::super::{Board, Color, MoveList, Piece, Square};
use super::tables::KING_TARGETS;

impl Board {
    /// Adjacent king steps. Castling is generated by the game state, which
    /// can probe the transit squares for attacks.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_leaper_moves(from, (color, Piece::King), &KING_TARGETS[from.as_index()], moves);
    }
}
