//! Chess board representation and game logic.
//!
//! A mailbox (8x8 array) board, per-piece pseudo-legal move generation,
//! and a `GameState` that filters for legality by playing each candidate
//! and taking it back. Supports castling, en passant and promotion.
//!
//! # Example
//! ```
//! use mailbox_chess::board::GameState;
//!
//! let mut game = GameState::new();
//! let moves = game.valid_moves();
//! assert_eq!(moves.len(), 20);
//! ```

#[cfg(debug_assertions)]
mod debug;
mod error;
mod grid;
mod legal;
mod make_unmake;
mod movegen;
mod notation;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{MoveError, SquareError};
pub use grid::Board;
pub use search::{
    choose_move, find_best_move, find_random_move, piece_score, score_material, CHECKMATE,
    STALEMATE,
};
pub use state::{GameState, HistoryEntry};
pub use types::{
    col_to_file, file_to_col, rank_to_row, row_to_rank, CastlingRights, Color, Move, MoveList,
    MoveListIntoIter, Piece, Square,
};
