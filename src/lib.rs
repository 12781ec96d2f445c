pub mod board;

pub use board::{Board, Color, GameState, Move, Piece, Square};
