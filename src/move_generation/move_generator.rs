//! Move generation seam: result type, payload, and the generator trait.

use std::error::Error;
use std::fmt;

use crate::game_state::game_state::GameState;
use crate::game_state::game_types::{PieceKind, Team};
use crate::moves::move_descriptions::MoveDescription;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

/// One legal move plus what it does to the board it was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub move_description: MoveDescription,
    pub moved: PieceKind,
    pub captured: Option<PieceKind>,
}

impl GeneratedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(
        &self,
        game_state: &GameState,
        team: Team,
    ) -> MoveGenResult<Vec<GeneratedMove>>;
}
