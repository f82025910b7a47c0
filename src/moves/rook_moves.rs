//! Rook move geometry.

use crate::game_state::game_types::Square;

pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// True when `from -> to` lies on a shared row or column. Assumes
/// `from != to`; the validator filters null moves before asking.
#[inline]
pub fn is_rook_line(from: Square, to: Square) -> bool {
    from.0 == to.0 || from.1 == to.1
}

/// Unit step along the rook line from `from` toward `to`.
#[inline]
pub fn rook_step(from: Square, to: Square) -> (i8, i8) {
    ((to.0 - from.0).signum(), (to.1 - from.1).signum())
}
