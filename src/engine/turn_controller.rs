//! Turn controller and engine facade.
//!
//! Owns the game state, the injected random source, and the event queue, and
//! routes every public operation: move submission, turn cycling, skipping,
//! legal-move listing, and event polling. Hosts construct one controller per
//! session and drive it synchronously.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cascade::capture_resolver::resolve_capture;
use crate::cascade::cascade_engine::run_cascade;
use crate::engine::events::{EngineEvent, EventQueue};
use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;
use crate::game_state::game_types::{GamePhase, PieceKind, Square, Team};
use crate::move_generation::legal_move_checks::is_legal_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};

/// Why a submitted move was declined. Rejections are silent no-ops: no state
/// changes and no events are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// A cascade or king advance is being resolved.
    EngineBusy,
    /// The move fails validation: out of turn, out of bounds, blocked path,
    /// or wrong piece ownership.
    IllegalMove,
    /// Victory has been declared; the session is over.
    GameOver,
}

/// Everything a host learns from one `submit_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub rejection: Option<MoveRejection>,
    pub capture: Option<PieceKind>,
    pub points_awarded: u32,
    pub collision_kill: bool,
    pub entered_home_stretch: bool,
    pub cascade_ran: bool,
    pub victory: Option<Team>,
}

impl MoveResult {
    #[inline]
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }

    fn rejected(rejection: MoveRejection) -> Self {
        Self {
            rejection: Some(rejection),
            ..Self::quiet()
        }
    }

    fn quiet() -> Self {
        Self {
            rejection: None,
            capture: None,
            points_awarded: 0,
            collision_kill: false,
            entered_home_stretch: false,
            cascade_ran: false,
            victory: None,
        }
    }
}

pub struct TurnController {
    state: GameState,
    events: EventQueue,
    rng: StdRng,
    seed: u64,
    move_generator: LegalMoveGenerator,
}

impl TurnController {
    /// Builds the starting position from `seed`, or from OS entropy when no
    /// seed is given, and enters play.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::new_game(&mut rng);
        Self {
            state,
            events: EventQueue::new(),
            rng,
            seed,
            move_generator: LegalMoveGenerator,
        }
    }

    /// Rebuilds the session in place: new board, fresh per-team state, empty
    /// event queue.
    pub fn reset(&mut self, seed: Option<u64>) {
        *self = Self::new(seed);
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// A copy of the current board for hosts to render.
    pub fn board_snapshot(&self) -> Board {
        self.state.board.clone()
    }

    #[inline]
    pub fn current_team(&self) -> Team {
        self.state.side_to_move
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// The seed this session was built from, for reproduction.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn list_legal_moves(&self, team: Team) -> MoveGenResult<Vec<GeneratedMove>> {
        self.move_generator.generate_legal_moves(&self.state, team)
    }

    /// Legal destinations of the piece on `from`, for selection highlighting.
    pub fn list_legal_moves_from(&self, from: Square) -> MoveGenResult<Vec<GeneratedMove>> {
        let mut moves = self.list_legal_moves(self.current_team())?;
        moves.retain(|m| m.move_description.from == from);
        Ok(moves)
    }

    /// Removes and returns the oldest pending animation event.
    pub fn poll_event(&mut self) -> Option<EngineEvent> {
        self.events.poll()
    }

    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain_all()
    }

    /// Unconditionally passes the turn to the next team. Returns false (and
    /// does nothing) outside the playing phase.
    pub fn skip_turn(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }
        self.advance_turn();
        true
    }

    /// Plays `from -> to` for the side to move. A non-capturing legal move
    /// advances the turn immediately; a capturing move is resolved to
    /// completion (scoring, king advance, cascade) before the turn passes.
    /// Rejected moves change nothing.
    pub fn submit_move(&mut self, from: Square, to: Square) -> MoveResult {
        match self.state.phase {
            GamePhase::Playing => {}
            GamePhase::Victory(_) => return MoveResult::rejected(MoveRejection::GameOver),
            GamePhase::Setup | GamePhase::Cascading => {
                return MoveResult::rejected(MoveRejection::EngineBusy)
            }
        }

        let team = self.state.side_to_move;
        if !is_legal_move(&self.state.board, from, to, team) {
            return MoveResult::rejected(MoveRejection::IllegalMove);
        }

        let displaced = self.state.board.move_piece(from, to);
        let Some(target) = displaced else {
            self.advance_turn();
            return MoveResult::quiet();
        };

        // Capture: resolve fully before the next team may act.
        self.state.phase = GamePhase::Cascading;
        let resolved = resolve_capture(
            &mut self.state.players,
            &mut self.state.kings,
            team,
            target.kind,
            &mut self.events,
        );
        let mut result = MoveResult {
            capture: Some(target.kind),
            points_awarded: resolved.points,
            collision_kill: resolved.collision_kill,
            entered_home_stretch: resolved.entered_home_stretch,
            ..MoveResult::quiet()
        };

        if resolved.victory {
            self.state.phase = GamePhase::Victory(team);
            result.victory = Some(team);
            return result;
        }

        let cascade = run_cascade(&mut self.state, team, &mut self.rng, &mut self.events);
        result.cascade_ran = true;
        if let Some(winner) = cascade.victory {
            self.state.phase = GamePhase::Victory(winner);
            result.victory = Some(winner);
            return result;
        }

        self.state.phase = GamePhase::Playing;
        self.advance_turn();
        result
    }

    fn advance_turn(&mut self) {
        self.state.side_to_move = self.state.side_to_move.next();
        self.state.turn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_types::PieceRecord;
    use crate::king_track::track::PathSegment;

    fn piece(kind: PieceKind, team: Team) -> PieceRecord {
        PieceRecord { kind, team }
    }

    /// A controller whose board holds exactly the given pieces, Blue to move.
    fn controller_with(pieces: &[(Square, PieceKind, Team)]) -> TurnController {
        let mut controller = TurnController::new(Some(0));
        controller.state.board = Board::empty();
        for &(sq, kind, team) in pieces {
            controller.state.board.place(sq, piece(kind, team));
        }
        controller.events.clear();
        controller
    }

    #[test]
    fn same_seed_builds_identical_sessions() {
        let a = TurnController::new(Some(77));
        let b = TurnController::new(Some(77));
        assert_eq!(a.state().board, b.state().board);
        assert_eq!(a.seed(), 77);
    }

    #[test]
    fn illegal_moves_are_silently_rejected() {
        let mut controller = controller_with(&[((6, 3), PieceKind::Pawn, Team::Blue)]);
        let before = controller.state().board.clone();

        let result = controller.submit_move((6, 3), (3, 3));
        assert_eq!(result.rejection, Some(MoveRejection::IllegalMove));
        assert_eq!(controller.state().board, before);
        assert_eq!(controller.current_team(), Team::Blue);
        assert_eq!(controller.state().turn, 1);
        assert!(controller.drain_events().is_empty());
    }

    #[test]
    fn moving_out_of_turn_is_illegal() {
        let mut controller = controller_with(&[((4, 4), PieceKind::Rook, Team::Red)]);
        let result = controller.submit_move((4, 4), (4, 0));
        assert_eq!(result.rejection, Some(MoveRejection::IllegalMove));
    }

    #[test]
    fn quiet_moves_advance_the_turn_without_events() {
        let mut controller = controller_with(&[((6, 3), PieceKind::Pawn, Team::Blue)]);
        let result = controller.submit_move((6, 3), (5, 3));
        assert!(result.accepted());
        assert_eq!(result.capture, None);
        assert!(!result.cascade_ran);
        assert_eq!(controller.current_team(), Team::Red);
        assert_eq!(controller.state().turn, 2);
        assert!(controller.drain_events().is_empty());
    }

    #[test]
    fn captures_score_advance_the_king_and_cascade() {
        let mut controller = controller_with(&[
            ((6, 3), PieceKind::Pawn, Team::Blue),
            ((5, 2), PieceKind::Rook, Team::Red),
        ]);
        let result = controller.submit_move((6, 3), (5, 2));
        assert!(result.accepted());
        assert_eq!(result.capture, Some(PieceKind::Rook));
        assert_eq!(result.points_awarded, 5);
        assert!(result.cascade_ran);
        assert_eq!(result.victory, None);

        let state = controller.state();
        assert_eq!(state.players[Team::Blue.index()].points, 5);
        assert_eq!(state.kings.progress(Team::Blue), 6);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.side_to_move, Team::Red);

        let events = controller.drain_events();
        let king_steps = events
            .iter()
            .filter(|e| matches!(e, EngineEvent::KingStep { team: Team::Blue, .. }))
            .count();
        assert_eq!(king_steps, 5);
        // King animation strictly precedes cascade playback.
        let first_cascade = events.iter().position(|e| {
            matches!(
                e,
                EngineEvent::GravityPass { .. } | EngineEvent::RespawnPass { .. }
            )
        });
        let last_step = events
            .iter()
            .rposition(|e| matches!(e, EngineEvent::KingStep { team: Team::Blue, .. }));
        if let (Some(first_cascade), Some(last_step)) = (first_cascade, last_step) {
            assert!(last_step < first_cascade);
        }
    }

    #[test]
    fn skip_turn_cycles_teams_without_touching_the_board() {
        let mut controller = controller_with(&[((6, 3), PieceKind::Pawn, Team::Blue)]);
        let before = controller.state().board.clone();
        assert!(controller.skip_turn());
        assert_eq!(controller.current_team(), Team::Red);
        assert!(controller.skip_turn());
        assert!(controller.skip_turn());
        assert!(controller.skip_turn());
        assert_eq!(controller.current_team(), Team::Blue);
        assert_eq!(controller.state().turn, 5);
        assert_eq!(controller.state().board, before);
    }

    #[test]
    fn moves_are_rejected_while_cascading_and_after_victory() {
        let mut controller = controller_with(&[((6, 3), PieceKind::Pawn, Team::Blue)]);

        controller.state.phase = GamePhase::Cascading;
        let busy = controller.submit_move((6, 3), (5, 3));
        assert_eq!(busy.rejection, Some(MoveRejection::EngineBusy));
        assert!(!controller.skip_turn());

        controller.state.phase = GamePhase::Victory(Team::Green);
        let over = controller.submit_move((6, 3), (5, 3));
        assert_eq!(over.rejection, Some(MoveRejection::GameOver));
        assert_eq!(controller.state().winner(), Some(Team::Green));
    }

    #[test]
    fn a_capture_reaching_the_throne_ends_the_game_without_advancing_the_turn() {
        let mut controller = controller_with(&[
            ((6, 3), PieceKind::Pawn, Team::Blue),
            ((5, 2), PieceKind::Bishop, Team::Red),
        ]);
        // Blue needs 4 points for the throne.
        let mut silent = EventQueue::new();
        controller.state.kings.advance(Team::Blue, 35, &mut silent); // progress 36

        let result = controller.submit_move((6, 3), (5, 2));
        assert_eq!(result.points_awarded, 4);
        assert_eq!(result.victory, Some(Team::Blue));
        assert!(!result.cascade_ran);
        assert_eq!(controller.phase(), GamePhase::Victory(Team::Blue));
        assert_eq!(
            controller.state().kings.segment(Team::Blue),
            PathSegment::Throne
        );
        // The turn never passed.
        assert_eq!(controller.current_team(), Team::Blue);

        assert!(matches!(
            controller.drain_events().last(),
            Some(EngineEvent::Victory { team: Team::Blue })
        ));
    }

    #[test]
    fn selection_queries_filter_by_source_square() {
        let controller = controller_with(&[
            ((6, 3), PieceKind::Pawn, Team::Blue),
            ((0, 0), PieceKind::Rook, Team::Blue),
        ]);
        let moves = controller.list_legal_moves_from((6, 3)).unwrap();
        assert!(moves.iter().all(|m| m.move_description.from == (6, 3)));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn reset_reseeds_the_session() {
        let mut controller = TurnController::new(Some(5));
        controller.skip_turn();
        controller.reset(Some(5));
        assert_eq!(controller.current_team(), Team::Blue);
        assert_eq!(controller.state().turn, 1);
        assert_eq!(controller.phase(), GamePhase::Playing);
        let fresh = TurnController::new(Some(5));
        assert_eq!(controller.state().board, fresh.state().board);
    }
}
