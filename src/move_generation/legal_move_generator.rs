//! Legal move enumeration.
//!
//! Walks a team's pieces in row-major board order and emits every legal move,
//! piece-wise: pawn and knight moves from their target lists, sliders by ray
//! walk. Generated moves are cross-checked against the validator so the two
//! can never silently disagree.

use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;
use crate::game_state::game_types::{offset_square, PieceKind, PieceRecord, Square, Team};
use crate::move_generation::legal_move_checks::is_legal_move;
use crate::move_generation::move_generator::{
    GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator,
};
use crate::moves::bishop_moves::BISHOP_DIRS;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::pawn_moves::{pawn_capture_squares, pawn_push_square};
use crate::moves::queen_moves::QUEEN_DIRS;
use crate::moves::rook_moves::ROOK_DIRS;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(
        &self,
        game_state: &GameState,
        team: Team,
    ) -> MoveGenResult<Vec<GeneratedMove>> {
        let moves = generate_moves_for_board(&game_state.board, team);
        for mv in &moves {
            if !is_legal_move(
                &game_state.board,
                mv.move_description.from,
                mv.move_description.to,
                team,
            ) {
                return Err(MoveGenerationError::InvalidState(format!(
                    "generated move {} fails validation",
                    mv.move_description
                )));
            }
        }
        Ok(moves)
    }
}

/// All legal moves for `team`, in row-major scan order of the moving piece
/// and then of the destination.
pub fn generate_moves_for_board(board: &Board, team: Team) -> Vec<GeneratedMove> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in board.occupied_squares() {
        if piece.team == team {
            generate_piece_moves(board, from, piece, &mut out);
        }
    }
    out
}

/// The capturing subset, used by the cascade's forced auto-capture.
pub fn generate_captures_for_board(board: &Board, team: Team) -> Vec<GeneratedMove> {
    let mut captures = generate_moves_for_board(board, team);
    captures.retain(GeneratedMove::is_capture);
    captures
}

fn generate_piece_moves(
    board: &Board,
    from: Square,
    piece: PieceRecord,
    out: &mut Vec<GeneratedMove>,
) {
    match piece.kind {
        PieceKind::Pawn => {
            if let Some(to) = pawn_push_square(piece.team, from) {
                if board.get(to).is_none() {
                    push_move(board, from, to, piece, out);
                }
            }
            for to in pawn_capture_squares(piece.team, from).into_iter().flatten() {
                if board.get(to).is_some() {
                    push_move(board, from, to, piece, out);
                }
            }
        }
        PieceKind::Knight => {
            for to in knight_targets(from) {
                push_move(board, from, to, piece, out);
            }
        }
        PieceKind::Bishop => slide(board, from, piece, &BISHOP_DIRS, out),
        PieceKind::Rook => slide(board, from, piece, &ROOK_DIRS, out),
        PieceKind::Queen => slide(board, from, piece, &QUEEN_DIRS, out),
    }
}

fn slide(
    board: &Board,
    from: Square,
    piece: PieceRecord,
    dirs: &[(i8, i8)],
    out: &mut Vec<GeneratedMove>,
) {
    for &(d_row, d_col) in dirs {
        let mut current = offset_square(from, d_row, d_col);
        while let Some(to) = current {
            match board.get(to) {
                None => {
                    push_move(board, from, to, piece, out);
                    current = offset_square(to, d_row, d_col);
                }
                Some(_) => {
                    push_move(board, from, to, piece, out);
                    break;
                }
            }
        }
    }
}

fn push_move(
    board: &Board,
    from: Square,
    to: Square,
    piece: PieceRecord,
    out: &mut Vec<GeneratedMove>,
) {
    match board.get(to) {
        Some(target) if target.team == piece.team => {}
        Some(target) => out.push(GeneratedMove {
            move_description: MoveDescription::new(from, to),
            moved: piece.kind,
            captured: Some(target.kind),
        }),
        None => out.push(GeneratedMove {
            move_description: MoveDescription::new(from, to),
            moved: piece.kind,
            captured: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generator_agrees_with_the_validator_on_seeded_boards() {
        for seed in 0..8u64 {
            let board = Board::new_game(&mut StdRng::seed_from_u64(seed));
            for team in Team::ALL {
                let generated = generate_moves_for_board(&board, team);
                let mut expected = 0usize;
                for from_row in 0..8i8 {
                    for from_col in 0..8i8 {
                        for to_row in 0..8i8 {
                            for to_col in 0..8i8 {
                                let from = (from_row, from_col);
                                let to = (to_row, to_col);
                                if is_legal_move(&board, from, to, team) {
                                    expected += 1;
                                    assert!(
                                        generated
                                            .iter()
                                            .any(|m| m.move_description
                                                == MoveDescription::new(from, to)),
                                        "validator accepts {from:?}->{to:?} but generator missed it"
                                    );
                                }
                            }
                        }
                    }
                }
                assert_eq!(generated.len(), expected, "seed {seed} team {team}");
            }
        }
    }

    #[test]
    fn lone_pawn_generates_exactly_its_push() {
        let mut board = Board::empty();
        board.place(
            (6, 3),
            PieceRecord {
                kind: PieceKind::Pawn,
                team: Team::Blue,
            },
        );
        let moves = generate_moves_for_board(&board, Team::Blue);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].move_description, MoveDescription::new((6, 3), (5, 3)));
        assert!(!moves[0].is_capture());
    }

    #[test]
    fn capture_list_is_the_capturing_subset() {
        let mut board = Board::empty();
        board.place(
            (3, 0),
            PieceRecord {
                kind: PieceKind::Rook,
                team: Team::Green,
            },
        );
        board.place(
            (3, 5),
            PieceRecord {
                kind: PieceKind::Pawn,
                team: Team::Blue,
            },
        );
        let captures = generate_captures_for_board(&board, Team::Green);
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].captured, Some(PieceKind::Pawn));
        assert_eq!(
            captures[0].move_description,
            MoveDescription::new((3, 0), (3, 5))
        );
    }

    #[test]
    fn sliders_stop_at_the_first_blocker() {
        let mut board = Board::empty();
        board.place(
            (0, 0),
            PieceRecord {
                kind: PieceKind::Queen,
                team: Team::Yellow,
            },
        );
        board.place(
            (0, 2),
            PieceRecord {
                kind: PieceKind::Pawn,
                team: Team::Yellow,
            },
        );
        let moves = generate_moves_for_board(&board, Team::Yellow);
        // The queen's east ray yields only (0,1); (0,2) is an own piece and
        // everything past it is shadowed.
        assert!(moves
            .iter()
            .any(|m| m.move_description == MoveDescription::new((0, 0), (0, 1))));
        assert!(!moves
            .iter()
            .any(|m| m.move_description.from == (0, 0) && m.move_description.to.1 >= 2 && m.move_description.to.0 == 0));
    }
}
