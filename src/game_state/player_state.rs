//! Per-team scoring state.

/// Accumulated capture value and pawn-capture history for one team. Mutated
/// only by the capture resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerState {
    /// Points scored from captures so far.
    pub points: u32,
    /// Pawns this team has captured; prices the next pawn capture.
    pub pawn_capture_count: u32,
}
