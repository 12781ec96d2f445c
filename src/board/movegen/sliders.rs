use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Rays stop at the board edge, before a friendly piece, or on an enemy piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        mover: (Color, Piece),
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.color_on(to) {
                    None => moves.push(Move::with_flags(from, to, mover, self, false, false)),
                    Some(color) if color != mover.0 => {
                        moves.push(Move::with_flags(from, to, mover, self, false, false));
                        break;
                    }
                    Some(_) => break,
                }
                current = to;
            }
        }
    }
}
