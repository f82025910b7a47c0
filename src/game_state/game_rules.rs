//! Canonical rule constants.
//!
//! This module stores the static rule literals the rest of the engine builds
//! on: board and king-path geometry, capture pricing, the cascade iteration
//! cap, and the seeded starting layout.

use crate::game_state::game_types::{PieceKind, Square, Team};

pub const BOARD_SIZE: i8 = 8;

/// Shared outer ring length. Each team owns a quarter of it.
pub const RING_LEN: u32 = 32;

/// Length of each team's private home stretch.
pub const HOME_LEN: u32 = 8;

/// Progress value at which a king occupies home-stretch box 0.
pub const HOME_ENTRY_PROGRESS: u32 = RING_LEN + 1;

/// Progress value at which a king sits on the throne and wins.
pub const VICTORY_PROGRESS: u32 = RING_LEN + HOME_LEN;

/// Safety bound on cascade iterations. Not expected to bind under normal
/// piece density.
pub const CASCADE_ITERATION_CAP: u32 = 10;

/// A team's first pawn capture is worth more than the rest.
pub const FIRST_PAWN_CAPTURE_VALUE: u32 = 2;
pub const LATER_PAWN_CAPTURE_VALUE: u32 = 1;

/// Capture value of a non-pawn piece. Pawn pricing depends on the capturing
/// team's history and lives in the capture resolver.
#[inline]
pub const fn base_capture_value(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Queen => 6,
        PieceKind::Rook => 5,
        PieceKind::Bishop => 4,
        PieceKind::Knight => 3,
        PieceKind::Pawn => FIRST_PAWN_CAPTURE_VALUE,
    }
}

/// Anchor square of each team's starting queen formation. Each 3x3 formation
/// sits inside its own board quadrant, so the four never overlap.
#[inline]
pub const fn queen_square(team: Team) -> Square {
    match team {
        Team::Blue => (5, 2),
        Team::Red => (5, 5),
        Team::Yellow => (2, 5),
        Team::Green => (2, 2),
    }
}

/// Pieces per team placed by the queen formation: the queen plus her escorts.
pub const QUEEN_FORMATION_SIZE: usize = 1 + ESCORT_OFFSETS.len();

/// Escort ring around each queen, as board-relative offsets from the queen
/// square. Identical for all teams: pawns on the orthogonal neighbors,
/// knights above, bishops below.
pub const ESCORT_OFFSETS: [((i8, i8), PieceKind); 8] = [
    ((-1, 0), PieceKind::Pawn),
    ((1, 0), PieceKind::Pawn),
    ((0, -1), PieceKind::Pawn),
    ((0, 1), PieceKind::Pawn),
    ((-1, -1), PieceKind::Knight),
    ((-1, 1), PieceKind::Knight),
    ((1, -1), PieceKind::Bishop),
    ((1, 1), PieceKind::Bishop),
];

/// Per-team supplemental pieces poured onto the free cells after the queen
/// formations are seeded. The combined pool exceeds the free cells; the
/// overflow is discarded.
pub const SUPPLEMENTAL_POOL: [(PieceKind, u8); 4] = [
    (PieceKind::Rook, 2),
    (PieceKind::Bishop, 2),
    (PieceKind::Knight, 2),
    (PieceKind::Pawn, 4),
];
