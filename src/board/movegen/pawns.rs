use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        en_passant: Option<Square>,
        moves: &mut MoveList,
    ) {
        let mover = (color, Piece::Pawn);
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(Move::with_flags(from, forward, mover, self, false, false));
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::with_flags(from, double, mover, self, false, false));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.color_on(target) {
                Some(target_color) if target_color != color => {
                    moves.push(Move::with_flags(from, target, mover, self, false, false));
                }
                None if Some(target) == en_passant
                    && self.get(Square(from.row(), target.col()))
                        == Some((color.opponent(), Piece::Pawn)) =>
                {
                    moves.push(Move::with_flags(from, target, mover, self, true, false));
                }
                _ => {}
            }
        }
    }
}
