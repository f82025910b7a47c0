//! Post-capture cascade resolution.
//!
//! Runs once per capture. Each iteration applies, in fixed order: gravity
//! toward the capturing team's edge, a pawn respawn along the opposite edge,
//! and one forced capture by the team next in turn order. The loop stops as
//! soon as a full iteration changes nothing, or at the iteration cap.

use rand::rngs::StdRng;
use rand::Rng;

use crate::cascade::capture_resolver::resolve_capture;
use crate::engine::events::{EngineEvent, EventQueue};
use crate::game_state::board::Board;
use crate::game_state::game_rules::CASCADE_ITERATION_CAP;
use crate::game_state::game_state::GameState;
use crate::game_state::game_types::{offset_square, PieceKind, PieceRecord, Square, Team};
use crate::move_generation::legal_move_generator::generate_captures_for_board;
use crate::move_generation::move_generator::GeneratedMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Iterations executed, including the final no-change one.
    pub iterations: u32,
    pub auto_captures: u32,
    /// Set when a forced capture pushed some king onto its throne.
    pub victory: Option<Team>,
}

/// Resolves the cascade triggered by `capturing_team`'s capture. Mutates the
/// board, player states, and king track through the same single-writer
/// operations normal play uses; auto-captures never trigger a nested cascade.
pub fn run_cascade(
    state: &mut GameState,
    capturing_team: Team,
    rng: &mut StdRng,
    events: &mut EventQueue,
) -> CascadeOutcome {
    let mut outcome = CascadeOutcome::default();

    for _ in 0..CASCADE_ITERATION_CAP {
        outcome.iterations += 1;
        let mut changed = false;

        // Gravity: single-cell passes until a pass moves nothing.
        loop {
            let moved = gravity_pass(&mut state.board, capturing_team);
            if moved.is_empty() {
                break;
            }
            changed = true;
            events.push(EngineEvent::GravityPass {
                team: capturing_team,
                moved,
            });
        }

        // Respawn along the edge opposite the gravity edge.
        let spawned = respawn_pass(&mut state.board, capturing_team, rng);
        if !spawned.is_empty() {
            changed = true;
            events.push(EngineEvent::RespawnPass { spawned });
        }

        // One forced capture by the next team in turn order.
        let auto_team = capturing_team.next();
        if let Some(capture) = select_auto_capture(&state.board, auto_team) {
            let mv = capture.move_description;
            let captured = capture
                .captured
                .expect("auto-capture selection only yields captures");
            state.board.move_piece(mv.from, mv.to);
            events.push(EngineEvent::AutoCapture {
                team: auto_team,
                from: mv.from,
                to: mv.to,
                captured,
            });
            let resolved = resolve_capture(
                &mut state.players,
                &mut state.kings,
                auto_team,
                captured,
                events,
            );
            changed = true;
            outcome.auto_captures += 1;
            if resolved.victory {
                outcome.victory = Some(auto_team);
                return outcome;
            }
        }

        if !changed {
            break;
        }
    }

    outcome
}

/// One gravity pass: every piece with an empty neighbor in the gravity
/// direction slides one cell into it. Cells nearest the gravity edge are
/// processed first so each piece moves at most once per pass.
pub fn gravity_pass(board: &mut Board, team: Team) -> Vec<(Square, Square)> {
    let (d_row, d_col) = team.gravity();
    let rows: Vec<i8> = scan_order(d_row);
    let cols: Vec<i8> = scan_order(d_col);

    let mut moved = Vec::new();
    for &row in &rows {
        for &col in &cols {
            let from = (row, col);
            if board.get(from).is_none() {
                continue;
            }
            if let Some(to) = offset_square(from, d_row, d_col) {
                if board.get(to).is_none() {
                    board.move_piece(from, to);
                    moved.push((from, to));
                }
            }
        }
    }
    moved
}

fn scan_order(direction: i8) -> Vec<i8> {
    if direction > 0 {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    }
}

/// Fills every empty cell on the capturing team's respawn edge with a pawn
/// of a uniformly random team.
pub fn respawn_pass(
    board: &mut Board,
    team: Team,
    rng: &mut StdRng,
) -> Vec<(Square, Team)> {
    let mut spawned = Vec::new();
    for sq in team.respawn_squares() {
        if board.get(sq).is_none() {
            let pawn_team = Team::from_index(rng.random_range(0..4));
            board.place(
                sq,
                PieceRecord {
                    kind: PieceKind::Pawn,
                    team: pawn_team,
                },
            );
            spawned.push((sq, pawn_team));
        }
    }
    spawned
}

/// Picks the forced capture for `team`: the capture whose attacker has the
/// lowest priority rank, ties broken by row-major scan order of the attacker
/// and then of the target.
pub fn select_auto_capture(board: &Board, team: Team) -> Option<GeneratedMove> {
    generate_captures_for_board(board, team)
        .into_iter()
        .min_by_key(|capture| {
            (
                capture.moved.capture_priority(),
                capture.move_description.from,
                capture.move_description.to,
            )
        })
}
