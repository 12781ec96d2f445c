//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::{col_to_file, file_to_col, rank_to_row, row_to_rank, Square};
