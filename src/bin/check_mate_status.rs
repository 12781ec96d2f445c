use std::env;
use std::process::ExitCode;

use mailbox_chess::board::GameState;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = GameState::new();
    for (ply, text) in args.iter().enumerate() {
        if let Err(e) = game.make_move_from_notation(text) {
            eprintln!("ply {}: {e}", ply + 1);
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = game.valid_moves();
    println!("side_to_move: {}", game.side_to_move());
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", game.is_checkmate());
    println!("stalemate: {}", game.is_stalemate());
    for mv in legal_moves.iter() {
        println!("{}", mv.to_chess_notation());
    }
    ExitCode::SUCCESS
}
