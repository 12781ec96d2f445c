//! Legality filtering, check detection and terminal-state detection.
//!
//! Legality is decided by simulation: each candidate is played on the state
//! itself, the mover's king is probed for attacks, and the move is taken back.

use log::debug;

use super::{Color, GameState, Move, MoveList, Piece, Square};

impl GameState {
    /// All legal moves for the side to move.
    ///
    /// Also refreshes the checkmate and stalemate flags: both are false
    /// when the returned list is non-empty.
    pub fn valid_moves(&mut self) -> MoveList {
        let saved_en_passant = self.en_passant_target;
        let saved_rights = self.castling_rights;
        let mover = self.side_to_move;

        let mut moves = self.board.pseudo_legal_moves(mover, self.en_passant_target);
        self.generate_castle_moves(self.king_square(mover), mover, &mut moves);

        moves.retain(|m| {
            self.make_move(*m);
            // look at the resulting position from the mover's side
            self.side_to_move = self.side_to_move.opponent();
            let exposed = self.in_check();
            self.side_to_move = self.side_to_move.opponent();
            self.undo_move();
            !exposed
        });

        if moves.is_empty() {
            let in_check = self.in_check();
            self.checkmate = in_check;
            self.stalemate = !in_check;
            debug!(
                "{} to move has no legal moves: {}",
                mover,
                if in_check { "checkmate" } else { "stalemate" }
            );
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        debug_assert_eq!(self.en_passant_target, saved_en_passant);
        debug_assert_eq!(self.castling_rights, saved_rights);
        self.en_passant_target = saved_en_passant;
        self.castling_rights = saved_rights;
        moves
    }

    /// True iff the side to move's king is attacked.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.square_under_attack(self.king_square(self.side_to_move))
    }

    /// True iff any pseudo-legal move of the side not to move lands on `sq`.
    ///
    /// Pawns count only where they could actually move: a diagonal onto an
    /// empty square is not seen, a straight push onto an empty square is.
    #[must_use]
    pub fn square_under_attack(&self, sq: Square) -> bool {
        self.square_attacked_by(sq, self.side_to_move.opponent())
    }

    pub(crate) fn square_attacked_by(&self, sq: Square, attacker: Color) -> bool {
        self.board
            .pseudo_legal_moves(attacker, self.en_passant_target)
            .iter()
            .any(|m| m.to() == sq)
    }

    /// Castling candidates for the king on `king_sq`.
    ///
    /// Requires the right, empty squares between king and rook, and that
    /// neither the king's square nor the two squares it crosses are attacked.
    /// The landing square is checked later by the legality filter.
    fn generate_castle_moves(&self, king_sq: Square, color: Color, moves: &mut MoveList) {
        if self.square_attacked_by(king_sq, color.opponent()) {
            return;
        }
        if self.castling_rights.has(color, true) {
            self.push_castle(king_sq, color, 1, &[1, 2], moves);
        }
        if self.castling_rights.has(color, false) {
            self.push_castle(king_sq, color, -1, &[1, 2, 3], moves);
        }
    }

    fn push_castle(
        &self,
        king_sq: Square,
        color: Color,
        dir: isize,
        must_be_empty: &[isize],
        moves: &mut MoveList,
    ) {
        let path_clear = must_be_empty.iter().all(|&step| {
            king_sq
                .offset(0, dir * step)
                .is_some_and(|sq| self.board.is_empty(sq))
        });
        if !path_clear {
            return;
        }
        let [Some(crossed), Some(landing)] = [1, 2].map(|step| king_sq.offset(0, dir * step))
        else {
            return;
        };
        // only the two squares the king crosses must be safe
        if [crossed, landing]
            .iter()
            .any(|&sq| self.square_attacked_by(sq, color.opponent()))
        {
            return;
        }
        moves.push(Move::with_flags(
            king_sq,
            landing,
            (color, Piece::King),
            &self.board,
            false,
            true,
        ));
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves.iter() {
            self.make_move(*m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }
}
