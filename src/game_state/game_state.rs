//! Aggregate game state.
//!
//! `GameState` is the central model for the engine: the board, the king
//! track, per-team scoring, the side to move, and the process-wide phase.
//! Mutation flows through the documented component operations (board
//! primitives, capture resolver, king track, cascade, turn controller);
//! nothing else writes these fields.

use rand::rngs::StdRng;

use crate::game_state::board::Board;
use crate::game_state::game_types::{GamePhase, Team};
use crate::game_state::player_state::PlayerState;
use crate::king_track::track::{KingTrack, PathSegment};

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub kings: KingTrack,
    pub players: [PlayerState; 4],
    pub side_to_move: Team,
    pub phase: GamePhase,
    /// Monotonic turn counter, bumped on every accepted move or skip.
    pub turn: u32,
}

/// One team's scoreboard row, for hosts to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamStanding {
    pub team: Team,
    pub points: u32,
    pub pawn_captures: u32,
    pub king_progress: u32,
    pub king_position: PathSegment,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl GameState {
    /// Empty board, everything reset, awaiting initialization.
    pub fn new_empty() -> Self {
        Self {
            board: Board::empty(),
            kings: KingTrack::new(),
            players: [PlayerState::default(); 4],
            side_to_move: Team::Blue,
            phase: GamePhase::Setup,
            turn: 1,
        }
    }

    /// Seeds the starting position and enters play. Blue always opens.
    pub fn new_game(rng: &mut StdRng) -> Self {
        Self {
            board: Board::new_game(rng),
            phase: GamePhase::Playing,
            ..Self::new_empty()
        }
    }

    pub fn winner(&self) -> Option<Team> {
        match self.phase {
            GamePhase::Victory(team) => Some(team),
            _ => None,
        }
    }

    pub fn standings(&self) -> [TeamStanding; 4] {
        Team::ALL.map(|team| TeamStanding {
            team,
            points: self.players[team.index()].points,
            pawn_captures: self.players[team.index()].pawn_capture_count,
            king_progress: self.kings.progress(team),
            king_position: self.kings.segment(team),
        })
    }
}
