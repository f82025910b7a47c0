//! Knight move geometry.

use crate::game_state::game_types::{offset_square, Square};

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// True when `from -> to` is a knight jump: `(|d_row|, |d_col|)` is (2,1) or
/// (1,2).
#[inline]
pub fn is_knight_jump(from: Square, to: Square) -> bool {
    let d_row = (to.0 - from.0).abs();
    let d_col = (to.1 - from.1).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}

/// All on-board knight targets from `from`.
pub fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_DELTAS
        .into_iter()
        .filter_map(move |(d_row, d_col)| offset_square(from, d_row, d_col))
}
