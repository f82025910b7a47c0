//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the CLI.
//! Each cell shows the owning team's initial and the piece letter, e.g. `bQ`
//! for the blue queen.

use crate::game_state::game_state::GameState;
use crate::game_state::game_types::{PieceRecord, Team};

/// Render the board plus a one-line king-track summary per team.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("    0  1  2  3  4  5  6  7\n");
    for row in 0..8i8 {
        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push(' ');
        for col in 0..8i8 {
            match game_state.board.get((row, col)) {
                Some(piece) => {
                    out.push(' ');
                    push_piece(&mut out, piece);
                }
                None => out.push_str(" ··"),
            }
        }
        out.push('\n');
    }

    for standing in game_state.standings() {
        out.push_str(&format!(
            "{:<6} points {:>3}  king {:?}\n",
            standing.team.to_string(),
            standing.points,
            standing.king_position,
        ));
    }

    out
}

fn push_piece(out: &mut String, piece: PieceRecord) {
    out.push(piece.team.letter());
    out.push(piece.kind.letter());
}
