//! Coordinate move notation ("e2e4") and validated move entry.
//!
//! # Examples
//! ```
//! use mailbox_chess::board::GameState;
//!
//! let mut game = GameState::new();
//! let mv = game.make_move_from_notation("e2e4").unwrap();
//! assert_eq!(mv.to_chess_notation(), "e2e4");
//! assert!(game.make_move_from_notation("e2e4").is_err());
//! ```

use log::warn;

use super::error::MoveError;
use super::{GameState, Move, Piece, Square};

impl GameState {
    /// Resolve coordinate notation against the current legal moves.
    ///
    /// Accepts "e2e4" and, for promotions, an optional fifth character
    /// naming the promotion piece ("a7a8n"). Without it, pawns promote to
    /// a queen.
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 4 && chars.len() != 5 {
            return Err(MoveError::InvalidLength { len: chars.len() });
        }

        let square_at = |range: std::ops::Range<usize>| -> Result<Square, MoveError> {
            chars[range]
                .iter()
                .collect::<String>()
                .parse::<Square>()
                .map_err(|_| MoveError::InvalidSquare {
                    notation: text.to_string(),
                })
        };
        let from = square_at(0..2)?;
        let to = square_at(2..4)?;

        let promotion = match chars.get(4) {
            None => None,
            Some(&c) => match Piece::from_char(c) {
                Some(p @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => Some(p),
                _ => return Err(MoveError::InvalidPromotion { char: c }),
            },
        };

        let illegal = || MoveError::IllegalMove {
            notation: text.to_string(),
        };
        let requested = Move::new(from, to, &self.board).ok_or_else(illegal)?;
        let found = self.valid_moves().find(&requested).ok_or_else(illegal)?;
        match promotion {
            Some(_) if !found.is_pawn_promotion() => Err(illegal()),
            Some(piece) => Ok(found.with_promotion(piece)),
            None => Ok(found),
        }
    }

    /// Play `m` if it equals one of the current legal moves.
    ///
    /// The engine's own instance of the move is applied, so derived fields
    /// (captured piece, en passant, castling) always match the board. A
    /// promotion choice carried by `m` is kept.
    pub fn try_make_move(&mut self, m: Move) -> Result<(), MoveError> {
        let Some(found) = self.valid_moves().find(&m) else {
            warn!("rejected move {m} for {}", self.side_to_move);
            return Err(MoveError::IllegalMove {
                notation: m.to_chess_notation(),
            });
        };
        let chosen = match m.promotion() {
            Some(piece) => found.with_promotion(piece),
            None => found,
        };
        self.make_move(chosen);
        Ok(())
    }

    /// Parse and play a move in coordinate notation.
    pub fn make_move_from_notation(&mut self, text: &str) -> Result<Move, MoveError> {
        let m = self.parse_move(text)?;
        self.make_move(m);
        Ok(m)
    }

    /// Play a whitespace-separated sequence of coordinate moves, stopping
    /// at the first one that fails.
    pub fn play_line(&mut self, line: &str) -> Result<usize, MoveError> {
        let mut played = 0;
        for text in line.split_whitespace() {
            self.make_move_from_notation(text)?;
            played += 1;
        }
        Ok(played)
    }
}
