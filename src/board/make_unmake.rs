use log::{debug, trace};

use super::{Color, GameState, HistoryEntry, Move, Piece, Square};

/// Rook origin and destination for a castling move
fn castle_rook_squares(m: &Move) -> (Square, Square) {
    let row = m.to().row();
    if m.is_castle_kingside() {
        (Square(row, m.to().col() + 1), Square(row, m.to().col() - 1))
    } else {
        (Square(row, m.to().col() - 2), Square(row, m.to().col() + 1))
    }
}

/// Square of the pawn removed by an en-passant capture
fn en_passant_capture_square(m: &Move) -> Square {
    Square(m.from().row(), m.to().col())
}

impl GameState {
    /// Play a move without validating it.
    ///
    /// The move must come from `valid_moves` (or compare equal to one of
    /// them and carry the same derived fields). Use `try_make_move` for
    /// untrusted input.
    pub fn make_move(&mut self, m: Move) {
        let (color, piece) = m.piece_moved();

        self.history.push(HistoryEntry {
            mv: m,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
        });

        self.board.set(m.from(), None);
        self.board.set(m.to(), Some(m.piece_moved()));
        self.side_to_move = self.side_to_move.opponent();

        if piece == Piece::King {
            self.king_squares[color.index()] = m.to();
        }

        if let Some(promoted) = m.promotion() {
            self.board.set(m.to(), Some((color, promoted)));
        }

        if m.is_en_passant() {
            self.board.set(en_passant_capture_square(&m), None);
        }

        self.en_passant_target = if m.is_double_pawn_push() {
            Some(Square((m.from().row() + m.to().row()) / 2, m.from().col()))
        } else {
            None
        };

        if m.is_castling() {
            let (rook_from, rook_to) = castle_rook_squares(&m);
            let rook = self.board.take(rook_from);
            self.board.set(rook_to, rook);
        }

        self.update_castling_rights(&m);

        trace!("make {m:?} (ply {})", self.history.len());
        #[cfg(debug_assertions)]
        self.assert_consistent();
    }

    /// Take back the last move. Returns the move, or `None` (doing nothing)
    /// when the log is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let Some(entry) = self.history.pop() else {
            debug!("undo requested with an empty move log");
            return None;
        };
        let m = entry.mv;
        let (color, piece) = m.piece_moved();

        self.board.set(m.from(), Some(m.piece_moved()));
        self.board.set(m.to(), m.piece_captured());
        self.side_to_move = self.side_to_move.opponent();

        if piece == Piece::King {
            self.king_squares[color.index()] = m.from();
        }

        if m.is_en_passant() {
            self.board.set(m.to(), None);
            self.board.set(en_passant_capture_square(&m), m.piece_captured());
        }

        if m.is_castling() {
            let (rook_from, rook_to) = castle_rook_squares(&m);
            let rook = self.board.take(rook_to);
            self.board.set(rook_from, rook);
        }

        self.en_passant_target = entry.en_passant_target;
        self.castling_rights = entry.castling_rights;

        trace!("undo {m:?} (ply {})", self.history.len());
        #[cfg(debug_assertions)]
        self.assert_consistent();
        Some(m)
    }

    /// Revoke rights lost by this move.
    ///
    /// A capture on a rook home square revokes that side's right whenever the
    /// captured piece is a rook of the home color, regardless of which rook it is.
    fn update_castling_rights(&mut self, m: &Move) {
        let (color, piece) = m.piece_moved();
        match piece {
            Piece::King => self.castling_rights.remove_color(color),
            Piece::Rook => self.revoke_for_corner(color, m.from()),
            _ => {}
        }

        if let Some((captured_color, Piece::Rook)) = m.piece_captured() {
            self.revoke_for_corner(captured_color, m.to());
        }
    }

    fn revoke_for_corner(&mut self, color: Color, sq: Square) {
        if sq.row() != color.back_row() {
            return;
        }
        match sq.col() {
            0 => self.castling_rights.remove(color, false),
            7 => self.castling_rights.remove(color, true),
            _ => {}
        }
    }
}
