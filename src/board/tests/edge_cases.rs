//! Edge case tests for special moves, checks and terminal positions.

use super::{find_move, game_after, sq};
use crate::board::{Color, GameState, Piece};

const FOOLS_MATE: &str = "f2f3 e7e5 g2g4 d8h4";
const FASTEST_STALEMATE: &str = "e2e3 a7a5 d1h5 a8a6 h5a5 h7h5 h2h4 a6h6 a5c7 f7f6 \
                                 c7d7 e8f7 d7b7 d8d3 b7b8 d3h7 b8c8 f7g6 c8e6";

#[test]
fn test_initial_position_has_twenty_moves() {
    let mut game = GameState::new();
    let moves = game.valid_moves();
    assert_eq!(moves.len(), 20);
    let pawn_moves = moves
        .iter()
        .filter(|m| m.piece_moved().1 == Piece::Pawn)
        .count();
    let double_pushes = moves.iter().filter(|m| m.is_double_pawn_push()).count();
    assert_eq!(pawn_moves, 16);
    assert_eq!(double_pushes, 8);
    assert!(!game.is_checkmate());
    assert!(!game.is_stalemate());
}

#[test]
fn test_castling_rights_survive_development() {
    let game = game_after("e2e4 e7e5 g1f3");
    assert!(game.castling_rights().white_kingside());
    assert!(game.castling_rights().white_queenside());
    assert!(game.castling_rights().black_kingside());
    assert!(game.castling_rights().black_queenside());
}

#[test]
fn test_fools_mate_is_checkmate() {
    let mut game = game_after(FOOLS_MATE);
    assert!(game.in_check());
    assert!(game.valid_moves().is_empty());
    assert!(game.is_checkmate());
    assert!(!game.is_stalemate());
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn test_scholars_mate_is_checkmate() {
    let mut game = game_after("e2e4 e7e5 f1c4 b8c6 d1h5 g8f6 h5f7");
    assert!(game.valid_moves().is_empty());
    assert!(game.is_checkmate());
}

#[test]
fn test_fastest_stalemate() {
    let mut game = game_after(FASTEST_STALEMATE);
    assert!(!game.in_check());
    assert!(game.valid_moves().is_empty());
    assert!(game.is_stalemate());
    assert!(!game.is_checkmate());
}

#[test]
fn test_terminal_flags_clear_after_undo() {
    let mut game = game_after(FOOLS_MATE);
    game.valid_moves();
    assert!(game.is_checkmate());
    game.undo_move();
    assert!(!game.valid_moves().is_empty());
    assert!(!game.is_checkmate());
    assert!(!game.is_stalemate());
}

#[test]
fn test_en_passant_capture() {
    let mut game = game_after("e2e4 a7a6 e4e5 d7d5");
    assert_eq!(game.en_passant_target(), Some(sq("d6")));
    assert_eq!(game.piece_at(sq("d6")), None);

    let mv = find_move(&mut game, "e5d6").expect("en passant available");
    assert!(mv.is_en_passant());
    assert_eq!(mv.piece_captured(), Some((Color::Black, Piece::Pawn)));

    game.make_move(mv);
    assert_eq!(game.piece_at(sq("d5")), None);
    assert_eq!(game.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut game = game_after("e2e4 a7a6 e4e5 d7d5 g1f3 a6a5");
    assert_eq!(game.en_passant_target(), None);
    assert!(find_move(&mut game, "e5d6").is_none());
}

#[test]
fn test_en_passant_target_only_after_double_push() {
    let game = game_after("e2e3");
    assert_eq!(game.en_passant_target(), None);
    let game = game_after("e2e4");
    assert_eq!(game.en_passant_target(), Some(sq("e3")));
}

#[test]
fn test_castling_generated_when_path_clear() {
    let mut game = game_after("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6");
    let castles: Vec<String> = game
        .valid_moves()
        .iter()
        .filter(|m| m.is_castling())
        .map(|m| m.to_chess_notation())
        .collect();
    assert_eq!(castles, vec!["e1g1".to_string()]);
}

#[test]
fn test_castling_blocked_by_attacked_transit_square() {
    // bishop on a6 covers f1
    let mut game = game_after("g2g3 b7b6 f1g2 c8a6 g1f3 a7a5 e2e3 a5a4");
    assert!(game.castling_rights().white_kingside());
    assert!(find_move(&mut game, "e1g1").is_none());
    assert!(find_move(&mut game, "e1f1").is_none());
}

#[test]
fn test_castling_not_allowed_out_of_check() {
    // Bb4+ with the kingside path clear
    let mut game = game_after("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3 f8b4");
    assert!(game.castling_rights().white_kingside());
    assert!(game.in_check());
    assert!(find_move(&mut game, "e1g1").is_none());
}

fn castles(game: &mut GameState) -> Vec<String> {
    game.valid_moves()
        .iter()
        .filter(|m| m.is_castling())
        .map(|m| m.to_chess_notation())
        .collect()
}

#[test]
fn test_queenside_castling_ignores_attack_on_b_file() {
    // knight on a3 covers b1, which the king never crosses
    let mut game = game_after("d2d4 b8c6 b1c3 c6a5 c1f4 a5c4 d1d2 c4a3");
    assert!(game.square_under_attack(sq("b1")));
    assert!(!game.square_under_attack(sq("c1")));
    assert!(!game.square_under_attack(sq("d1")));
    assert_eq!(castles(&mut game), vec!["e1c1".to_string()]);
}

#[test]
fn test_queenside_castling_needs_empty_b_file() {
    let mut game = game_after("d2d4 d7d5 c1f4 c8f5 d1d2 d8d7 e2e3 e7e6");
    assert!(game.castling_rights().white_queenside());
    assert_eq!(game.piece_at(sq("b1")), Some((Color::White, Piece::Knight)));
    assert!(castles(&mut game).is_empty());
}

#[test]
fn test_kingside_castling_refused_onto_attacked_square() {
    // bishop on c5 sees g1 through the vacated f2
    let mut game = game_after(
        "e2e4 e7e5 g1h3 f8c5 f1c4 d7d6 f2f4 c8e6 f4e5 d8d7 e5d6 b8c6 d6c7 g8e7",
    );
    assert!(game.castling_rights().white_kingside());
    assert!(!game.in_check());
    assert!(!game.square_under_attack(sq("f1")));
    assert!(game.square_under_attack(sq("g1")));
    assert!(castles(&mut game).is_empty());
    assert!(find_move(&mut game, "e1f1").is_some());
}

#[test]
fn test_castling_right_lost_when_king_moves_and_returns() {
    let mut game = game_after("e2e4 e7e5 e1e2 e8e7 e2e1 e7e8 g1f3 g8f6 f1c4 f8c5");
    assert!(!game.castling_rights().white_kingside());
    assert!(!game.castling_rights().black_queenside());
    assert!(find_move(&mut game, "e1g1").is_none());
}

#[test]
fn test_rook_move_revokes_one_side() {
    let game = game_after("h2h4 a7a5 h1h3 a8a6");
    assert!(!game.castling_rights().white_kingside());
    assert!(game.castling_rights().white_queenside());
    assert!(!game.castling_rights().black_queenside());
    assert!(game.castling_rights().black_kingside());
}

#[test]
fn test_pinned_piece_cannot_leave_pin_line() {
    // Bb5 pins the c6 knight to the e8 king
    let mut game = game_after("e2e4 d7d6 f1b5 b8c6 g1f3");
    let knight_moves: Vec<String> = game
        .valid_moves()
        .iter()
        .filter(|m| m.from() == sq("c6"))
        .map(|m| m.to_chess_notation())
        .collect();
    assert!(knight_moves.is_empty(), "pinned knight moved: {knight_moves:?}");
}

#[test]
fn test_check_must_be_answered() {
    let mut game = game_after("e2e4 d7d5 f1b5");
    assert!(game.in_check());
    let moves = game.valid_moves();
    assert!(!moves.is_empty());
    for mv in moves.iter() {
        game.make_move(*mv);
        assert!(
            !game.square_attacked_by(game.king_square(Color::Black), Color::White),
            "{mv} leaves the king attacked"
        );
        game.undo_move();
    }
    assert!(!game.is_checkmate());
}

#[test]
fn test_king_cannot_step_into_attack() {
    // queen on g5 covers e3
    let mut game = game_after("e2e4 e7e5 e1e2 d8g5");
    let mut king_moves: Vec<String> = game
        .valid_moves()
        .iter()
        .filter(|m| m.from() == sq("e2"))
        .map(|m| m.to_chess_notation())
        .collect();
    king_moves.sort();
    assert_eq!(king_moves, vec!["e2d3", "e2e1", "e2f3"]);
}
