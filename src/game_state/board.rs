//! The 8x8 board model.
//!
//! Owns cell contents exclusively. All coordinates passed to the primitives
//! here must already be bounds-checked by the caller; the move validator
//! guarantees that before any mutation reaches this module.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::game_state::game_rules::{queen_square, ESCORT_OFFSETS, SUPPLEMENTAL_POOL};
use crate::game_state::game_types::{offset_square, PieceKind, PieceRecord, Square, Team};

const SIZE: usize = 8;

/// 8x8 grid of optional pieces. At most one piece per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PieceRecord>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<PieceRecord> {
        debug_assert!(crate::game_state::game_types::in_bounds(sq));
        self.cells[sq.0 as usize][sq.1 as usize]
    }

    #[inline]
    pub fn place(&mut self, sq: Square, piece: PieceRecord) {
        debug_assert!(crate::game_state::game_types::in_bounds(sq));
        self.cells[sq.0 as usize][sq.1 as usize] = Some(piece);
    }

    /// Empties a cell, returning whatever occupied it.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<PieceRecord> {
        debug_assert!(crate::game_state::game_types::in_bounds(sq));
        self.cells[sq.0 as usize][sq.1 as usize].take()
    }

    /// Moves the piece at `from` onto `to`, returning any piece that occupied
    /// the destination. A no-op returning `None` when `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<PieceRecord> {
        let Some(piece) = self.clear(from) else {
            return None;
        };
        let displaced = self.clear(to);
        self.place(to, piece);
        displaced
    }

    /// Iterates occupied cells in row-major order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, PieceRecord)> + '_ {
        (0..SIZE as i8).flat_map(move |row| {
            (0..SIZE as i8).filter_map(move |col| {
                self.cells[row as usize][col as usize]
                    .map(|piece| ((row, col), piece))
            })
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied_squares().count()
    }

    /// Builds the starting position: each team's queen formation is seeded
    /// deterministically, then the remaining cells are filled from a shuffled
    /// supplemental pool. Pool pieces left over once the board is full are
    /// discarded, so per-team totals are not guaranteed equal.
    pub fn new_game(rng: &mut StdRng) -> Self {
        let mut board = Self::empty();

        for team in Team::ALL {
            let queen = queen_square(team);
            board.place(
                queen,
                PieceRecord {
                    kind: PieceKind::Queen,
                    team,
                },
            );
            for ((d_row, d_col), kind) in ESCORT_OFFSETS {
                let sq = offset_square(queen, d_row, d_col)
                    .expect("escort offsets stay on the board");
                board.place(sq, PieceRecord { kind, team });
            }
        }

        let mut pool = Vec::new();
        for team in Team::ALL {
            for (kind, count) in SUPPLEMENTAL_POOL {
                for _ in 0..count {
                    pool.push(PieceRecord { kind, team });
                }
            }
        }
        pool.shuffle(rng);

        let mut pool_iter = pool.into_iter();
        'fill: for row in 0..SIZE as i8 {
            for col in 0..SIZE as i8 {
                if board.get((row, col)).is_some() {
                    continue;
                }
                match pool_iter.next() {
                    Some(piece) => board.place((row, col), piece),
                    None => break 'fill,
                }
            }
        }

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_rules::QUEEN_FORMATION_SIZE;
    use rand::SeedableRng;

    #[test]
    fn place_move_and_clear_round_trip() {
        let mut board = Board::empty();
        let pawn = PieceRecord {
            kind: PieceKind::Pawn,
            team: Team::Blue,
        };
        let rook = PieceRecord {
            kind: PieceKind::Rook,
            team: Team::Red,
        };

        board.place((3, 3), pawn);
        board.place((3, 5), rook);
        assert_eq!(board.get((3, 3)), Some(pawn));

        let displaced = board.move_piece((3, 3), (3, 5));
        assert_eq!(displaced, Some(rook));
        assert_eq!(board.get((3, 3)), None);
        assert_eq!(board.get((3, 5)), Some(pawn));

        assert_eq!(board.clear((3, 5)), Some(pawn));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn moving_from_an_empty_cell_changes_nothing() {
        let mut board = Board::empty();
        assert_eq!(board.move_piece((0, 0), (0, 1)), None);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn new_game_fills_all_sixty_four_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::new_game(&mut rng);
        assert_eq!(board.occupied_count(), 64);
    }

    #[test]
    fn new_game_seeds_every_queen_formation() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::new_game(&mut rng);
        for team in Team::ALL {
            let queen = queen_square(team);
            assert_eq!(
                board.get(queen),
                Some(PieceRecord {
                    kind: PieceKind::Queen,
                    team
                })
            );
            for ((d_row, d_col), kind) in ESCORT_OFFSETS {
                let sq = offset_square(queen, d_row, d_col).unwrap();
                assert_eq!(board.get(sq), Some(PieceRecord { kind, team }));
            }
        }
    }

    #[test]
    fn new_game_is_reproducible_per_seed() {
        let board_a = Board::new_game(&mut StdRng::seed_from_u64(1234));
        let board_b = Board::new_game(&mut StdRng::seed_from_u64(1234));
        let board_c = Board::new_game(&mut StdRng::seed_from_u64(4321));
        assert_eq!(board_a, board_b);
        assert_ne!(board_a, board_c);
    }

    #[test]
    fn formation_seeding_places_thirty_six_pieces() {
        assert_eq!(QUEEN_FORMATION_SIZE * Team::ALL.len(), 36);
    }
}
