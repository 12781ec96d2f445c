//! Pseudo-legal move generation.
//!
//! Generators ignore whether the mover's own king is left attacked; the
//! game state filters for that by playing each candidate and probing.

mod kings;
mod knights;
mod pawns;
mod sliders;
mod tables;

use self::tables::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, MoveList, Piece, Square};

impl Board {
    /// All pseudo-legal moves for `side`, in row-major order of the moving piece.
    ///
    /// `en_passant` is the square passed over by the last two-square pawn
    /// advance, if any. Castling is not included.
    #[must_use]
    pub fn pseudo_legal_moves(&self, side: Color, en_passant: Option<Square>) -> MoveList {
        let mut moves = MoveList::new();
        for (from, (color, piece)) in self.occupied() {
            if color == side {
                self.generate_piece_moves(from, (color, piece), en_passant, &mut moves);
            }
        }
        moves
    }

    pub(crate) fn generate_piece_moves(
        &self,
        from: Square,
        mover: (Color, Piece),
        en_passant: Option<Square>,
        moves: &mut MoveList,
    ) {
        let (color, piece) = mover;
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, en_passant, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_sliding_moves(from, mover, &BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.generate_sliding_moves(from, mover, &ROOK_DIRECTIONS, moves),
            Piece::Queen => {
                self.generate_sliding_moves(from, mover, &ROOK_DIRECTIONS, moves);
                self.generate_sliding_moves(from, mover, &BISHOP_DIRECTIONS, moves);
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves_from(board: &Board, from: Square, ep: Option<Square>) -> Vec<String> {
        let (color, piece) = board.get(from).expect("occupied square");
        let mut moves = MoveList::new();
        board.generate_piece_moves(from, (color, piece), ep, &mut moves);
        let mut list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        list.sort();
        list
    }

    #[test]
    fn test_initial_pseudo_moves() {
        let board = Board::starting_position();
        assert_eq!(board.pseudo_legal_moves(Color::White, None).len(), 20);
        assert_eq!(board.pseudo_legal_moves(Color::Black, None).len(), 20);
    }

    #[test]
    fn test_rook_rays_stop_at_pieces() {
        let mut board = Board::empty();
        board.set(Square(4, 3), Some((Color::White, Piece::Rook)));
        board.set(Square(4, 6), Some((Color::White, Piece::Pawn)));
        board.set(Square(1, 3), Some((Color::Black, Piece::Knight)));
        let moves = moves_from(&board, Square(4, 3), None);
        // d4: up to d7 (capture), down to d1, left to a4, right to f4
        assert_eq!(moves.len(), 3 + 3 + 3 + 2);
        assert!(moves.contains(&"d4d7".to_string()));
        assert!(!moves.contains(&"d4d8".to_string()));
        assert!(!moves.contains(&"d4g4".to_string()));
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let mut board = Board::empty();
        board.set(Square(4, 4), Some((Color::Black, Piece::Queen)));
        assert_eq!(moves_from(&board, Square(4, 4), None).len(), 27);
    }

    #[test]
    fn test_knight_skips_friendly_squares() {
        let board = Board::starting_position();
        let moves = moves_from(&board, Square(7, 1), None);
        assert_eq!(moves, vec!["b1a3".to_string(), "b1c3".to_string()]);
    }

    #[test]
    fn test_pawn_double_push_needs_both_squares_empty() {
        let mut board = Board::starting_position();
        board.set(Square(4, 4), Some((Color::Black, Piece::Knight)));
        assert_eq!(moves_from(&board, Square(6, 4), None), vec!["e2e3".to_string()]);
        board.set(Square(5, 4), Some((Color::Black, Piece::Knight)));
        assert!(moves_from(&board, Square(6, 4), None).is_empty());
    }

    #[test]
    fn test_pawn_en_passant_capture_targets_beside_pawn() {
        let mut board = Board::empty();
        board.set(Square(3, 4), Some((Color::White, Piece::Pawn)));
        board.set(Square(3, 3), Some((Color::Black, Piece::Pawn)));
        let mut moves = MoveList::new();
        board.generate_pawn_moves(Square(3, 4), Color::White, Some(Square(2, 3)), &mut moves);
        let ep = moves
            .iter()
            .find(|m| m.is_en_passant())
            .expect("en passant available");
        assert_eq!(ep.to(), Square(2, 3));
        assert_eq!(ep.piece_captured(), Some((Color::Black, Piece::Pawn)));
        assert!(board.is_empty(ep.to()));
    }

    #[test]
    fn test_king_steps_exclude_castling() {
        let mut board = Board::empty();
        board.set(Square(7, 4), Some((Color::White, Piece::King)));
        board.set(Square(7, 7), Some((Color::White, Piece::Rook)));
        let moves = moves_from(&board, Square(7, 4), None);
        assert_eq!(moves.len(), 5);
        assert!(!moves.contains(&"e1g1".to_string()));
    }
}
