//! One-ply move selection by material count.
//!
//! A thin consumer of the engine: each candidate is played, the resulting
//! position is scored, and the candidate is taken back. There is no deeper
//! search.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{find_best_move, GameState};
//!
//! let mut game = GameState::new();
//! let moves = game.valid_moves();
//! let best = find_best_move(&mut game, moves.as_slice());
//! assert!(best.is_some());
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Board, GameState, Move, Piece};

/// Score of a position where the side that just moved delivered mate
pub const CHECKMATE: i32 = 1000;
/// Score of a stalemated position
pub const STALEMATE: i32 = 0;

/// Material value of a piece kind
#[inline]
#[must_use]
pub const fn piece_score(piece: Piece) -> i32 {
    match piece {
        Piece::King => 0,
        Piece::Queen => 10,
        Piece::Rook => 5,
        Piece::Bishop => 3,
        Piece::Knight => 3,
        Piece::Pawn => 1,
    }
}

/// White material minus Black material.
#[must_use]
pub fn score_material(board: &Board) -> i32 {
    board
        .occupied()
        .map(|(_, (color, piece))| color.sign() * piece_score(piece))
        .sum()
}

/// Pick a move uniformly at random.
pub fn find_random_move<R: Rng + ?Sized>(valid_moves: &[Move], rng: &mut R) -> Option<Move> {
    valid_moves.choose(rng).copied()
}

/// Pick the candidate with the best score for the side to move.
///
/// Mates score `CHECKMATE`, stalemates `STALEMATE`, anything else the
/// material balance from the mover's point of view. The first candidate
/// with the strictly greatest score wins. The game state, including its
/// terminal flags, is unchanged on return.
pub fn find_best_move(game: &mut GameState, valid_moves: &[Move]) -> Option<Move> {
    let turn_multiplier = game.side_to_move().sign();
    let saved_flags = game.terminal_flags();

    let mut max_score = -CHECKMATE;
    let mut best_move = None;
    for &candidate in valid_moves {
        game.make_move(candidate);
        game.valid_moves();
        let score = if game.is_checkmate() {
            CHECKMATE
        } else if game.is_stalemate() {
            STALEMATE
        } else {
            turn_multiplier * score_material(game.board())
        };
        if score > max_score {
            max_score = score;
            best_move = Some(candidate);
        }
        game.undo_move();
    }

    game.restore_terminal_flags(saved_flags);
    best_move
}

/// Best move by material, falling back to a random pick.
pub fn choose_move<R: Rng + ?Sized>(
    game: &mut GameState,
    valid_moves: &[Move],
    rng: &mut R,
) -> Option<Move> {
    find_best_move(game, valid_moves).or_else(|| find_random_move(valid_moves, rng))
}
