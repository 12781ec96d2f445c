//! Precomputed destination tables for leaper pieces (knights, kings).

use once_cell::sync::Lazy;

use super::super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

fn leaper_table(deltas: &[(isize, isize); 8]) -> Vec<Vec<Square>> {
    (0..64)
        .map(|idx| {
            let from = Square::from_index(idx);
            deltas
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .collect()
        })
        .collect()
}

/// On-board knight destinations, indexed by `Square::as_index`
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

/// On-board king destinations, indexed by `Square::as_index`
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| leaper_table(&KING_DELTAS));
