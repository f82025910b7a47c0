//! Engine abstraction layer.
//!
//! Defines the output payload and trait interface so different move-choosing
//! strategies can sit behind a single seam for the CLI, the self-play
//! harness, and tests.

use crate::game_state::game_state::GameState;
use crate::game_state::game_types::Team;
use crate::moves::move_descriptions::MoveDescription;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal moves.
    pub best_move: Option<MoveDescription>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        team: Team,
    ) -> Result<EngineOutput, String>;
}
