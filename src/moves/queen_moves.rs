//! Queen move geometry: the union of rook and bishop lines.

use crate::game_state::game_types::Square;
use crate::moves::bishop_moves::is_bishop_line;
use crate::moves::rook_moves::is_rook_line;

pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

#[inline]
pub fn is_queen_line(from: Square, to: Square) -> bool {
    is_rook_line(from, to) || is_bishop_line(from, to)
}
