use super::super::{Board, Color, Move, MoveList, Piece, Square};
use super::tables::KNIGHT_TARGETS;

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_leaper_moves(from, (color, Piece::Knight), &KNIGHT_TARGETS[from.as_index()], moves);
    }

    /// Single-step destinations that are empty or hold an enemy piece.
    pub(crate) fn generate_leaper_moves(
        &self,
        from: Square,
        mover: (Color, Piece),
        targets: &[Square],
        moves: &mut MoveList,
    ) {
        for &to in targets {
            if self.color_on(to) != Some(mover.0) {
                moves.push(Move::with_flags(from, to, mover, self, false, false));
            }
        }
    }
}
