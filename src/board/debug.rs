use super::{Color, GameState, Piece};

#[cfg(debug_assertions)]
impl GameState {
    /// Panic if the bookkeeping fields disagree with the board.
    pub(crate) fn assert_consistent(&self) {
        for color in Color::BOTH {
            let kings: Vec<_> = self.board.find(color, Piece::King).collect();
            assert_eq!(
                kings,
                vec![self.king_square(color)],
                "{color} king location out of sync after {:?}\n{}",
                self.last_move(),
                self.board
            );
        }
        if let Some(ep) = self.en_passant_target {
            assert!(
                ep.row() == 2 || ep.row() == 5,
                "en passant target {ep} off the third/sixth rank"
            );
            assert!(self.board.is_empty(ep), "en passant target {ep} occupied");
        }
    }

    /// Print the board and bookkeeping fields
    pub fn debug_print(&self) {
        println!("{}", self.board);
        println!("Side to move: {}", self.side_to_move);
        println!("Castling mask: {:#06b}", self.castling_rights.as_u8());
        if let Some(ep) = self.en_passant_target {
            println!("EP Target: {ep}");
        }
        println!(
            "Kings: White {} Black {}",
            self.king_square(Color::White),
            self.king_square(Color::Black)
        );
        println!("Moves played: {}", self.history.len());
        println!("------------------------------------");
    }
}
