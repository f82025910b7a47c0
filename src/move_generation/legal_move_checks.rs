//! Move legality rules.
//!
//! `is_legal_move` is the single authority on whether a from/to pair is
//! playable for a team on a given board. Piece geometry comes from the
//! `moves` modules; occupancy and path clearance are resolved here.

use crate::game_state::board::Board;
use crate::game_state::game_types::{in_bounds, offset_square, PieceKind, Square, Team};
use crate::moves::bishop_moves::{bishop_step, is_bishop_line};
use crate::moves::knight_moves::is_knight_jump;
use crate::moves::pawn_moves::{pawn_capture_squares, pawn_push_square};
use crate::moves::queen_moves::is_queen_line;
use crate::moves::rook_moves::{is_rook_line, rook_step};

/// Full legality check: bounds, ownership, destination occupancy, and the
/// per-kind movement rule. There is no check/checkmate concept; kings live
/// off-board and cannot constrain moves.
pub fn is_legal_move(board: &Board, from: Square, to: Square, team: Team) -> bool {
    if !in_bounds(from) || !in_bounds(to) || from == to {
        return false;
    }
    let Some(piece) = board.get(from) else {
        return false;
    };
    if piece.team != team {
        return false;
    }
    if let Some(target) = board.get(to) {
        if target.team == team {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => is_legal_pawn_move(board, from, to, team),
        PieceKind::Knight => is_knight_jump(from, to),
        PieceKind::Bishop => is_bishop_line(from, to) && path_clear(board, from, to, bishop_step(from, to)),
        PieceKind::Rook => is_rook_line(from, to) && path_clear(board, from, to, rook_step(from, to)),
        PieceKind::Queen => {
            is_queen_line(from, to) && path_clear(board, from, to, line_step(from, to))
        }
    }
}

/// Pawn rule: one square straight forward onto an empty cell, or one square
/// diagonally forward onto an occupied cell.
fn is_legal_pawn_move(board: &Board, from: Square, to: Square, team: Team) -> bool {
    if pawn_push_square(team, from) == Some(to) {
        return board.get(to).is_none();
    }
    if pawn_capture_squares(team, from).contains(&Some(to)) {
        return board.get(to).is_some();
    }
    false
}

/// Every cell strictly between `from` and `to` along `step` must be empty.
pub fn path_clear(board: &Board, from: Square, to: Square, step: (i8, i8)) -> bool {
    let mut current = match offset_square(from, step.0, step.1) {
        Some(sq) => sq,
        None => return false,
    };
    while current != to {
        if board.get(current).is_some() {
            return false;
        }
        current = match offset_square(current, step.0, step.1) {
            Some(sq) => sq,
            None => return false,
        };
    }
    true
}

fn line_step(from: Square, to: Square) -> (i8, i8) {
    ((to.0 - from.0).signum(), (to.1 - from.1).signum())
}
