use super::{Board, CastlingRights, Color, Move, Piece, Square};

/// One ply of history: the move plus the state it overwrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
}

impl HistoryEntry {
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Castling rights in force before the move
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// En-passant target in force before the move
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }
}

/// A game in progress: board, side to move, special-move bookkeeping and history.
///
/// Every state is reached from the initial position through `make_move` and
/// `undo_move`, which are exact inverses for moves produced by `valid_moves`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) king_squares: [Square; 2],
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// Standard starting position, White to move, all castling rights.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            king_squares: [
                Square(Color::White.back_row(), 4),
                Square(Color::Black.back_row(), 4),
            ],
            en_passant_target: None,
            castling_rights: CastlingRights::all(),
            history: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Square passed over by the last move, if it was a two-square pawn advance
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Moves played so far, oldest first
    pub fn move_log(&self) -> impl DoubleEndedIterator<Item = Move> + ExactSizeIterator + '_ {
        self.history.iter().map(|entry| entry.mv)
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Castling rights before each move followed by the current rights.
    ///
    /// Always one entry longer than the move log; the last entry equals
    /// `castling_rights()`.
    #[must_use]
    pub fn castle_rights_log(&self) -> Vec<CastlingRights> {
        self.history
            .iter()
            .map(|entry| entry.castling_rights)
            .chain(std::iter::once(self.castling_rights))
            .collect()
    }

    /// Checkmate flag as of the most recent `valid_moves` call
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Stalemate flag as of the most recent `valid_moves` call
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    pub(crate) fn terminal_flags(&self) -> (bool, bool) {
        (self.checkmate, self.stalemate)
    }

    pub(crate) fn restore_terminal_flags(&mut self, (checkmate, stalemate): (bool, bool)) {
        self.checkmate = checkmate;
        self.stalemate = stalemate;
    }

    /// Piece on a square of the current board
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.get(sq)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
