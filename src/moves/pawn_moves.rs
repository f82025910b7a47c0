//! Pawn move geometry.
//!
//! Pawns are the only piece whose moves depend on the owning team: each team
//! pushes along its fixed forward direction and captures on the two diagonals
//! flanking that direction.

use crate::game_state::game_types::{offset_square, Square, Team};

/// The single non-capturing push target, if it stays on the board.
#[inline]
pub fn pawn_push_square(team: Team, from: Square) -> Option<Square> {
    let (d_row, d_col) = team.forward();
    offset_square(from, d_row, d_col)
}

/// The two capture targets diagonal to the forward axis. For vertical-forward
/// teams the diagonals are column offsets of one; for horizontal-forward
/// teams they are row offsets of one.
pub fn pawn_capture_squares(team: Team, from: Square) -> [Option<Square>; 2] {
    let (d_row, d_col) = team.forward();
    if d_row != 0 {
        [
            offset_square(from, d_row, -1),
            offset_square(from, d_row, 1),
        ]
    } else {
        [
            offset_square(from, -1, d_col),
            offset_square(from, 1, d_col),
        ]
    }
}
