//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `make_unmake.rs` - Make/undo move correctness
//! - `edge_cases.rs` - Special moves, checks and terminal positions
//! - `proptest.rs` - Property-based tests

mod edge_cases;

use crate::board::{GameState, Move, Square};

pub(crate) fn game_after(line: &str) -> GameState {
    let mut game = GameState::new();
    game.play_line(line)
        .unwrap_or_else(|e| panic!("line '{line}' failed: {e}"));
    game
}

pub(crate) fn find_move(game: &mut GameState, notation: &str) -> Option<Move> {
    game.valid_moves()
        .iter()
        .find(|m| m.to_chess_notation() == notation)
        .copied()
}

pub(crate) fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}
