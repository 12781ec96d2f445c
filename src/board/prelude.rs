//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//!
//! let game = GameState::new();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

pub use super::{
    find_best_move, Board, CastlingRights, Color, GameState, Move, MoveError, MoveList, Piece,
    Square, SquareError,
};
