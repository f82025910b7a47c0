//! Move payload shared between the validator, generator, and controller.

use std::fmt;
use std::str::FromStr;

use crate::game_state::game_types::{in_bounds, Square};

/// A from/to pair on the board. Carries no capture flag; whether a move
/// captures is a property of the board it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub from: Square,
    pub to: Square,
}

impl MoveDescription {
    #[inline]
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} {},{}",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// Parses the text form produced by `Display`: `"r,c r,c"`.
impl FromStr for MoveDescription {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = s.split_whitespace().map(parse_square);
        let from = squares.next().ok_or("missing source square")??;
        let to = squares.next().ok_or("missing destination square")??;
        if squares.next().is_some() {
            return Err(format!("trailing input in move '{s}'"));
        }
        Ok(Self { from, to })
    }
}

fn parse_square(s: &str) -> Result<Square, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected 'row,col', got '{s}'"))?;
    let row: i8 = row.trim().parse().map_err(|_| format!("bad row '{row}'"))?;
    let col: i8 = col.trim().parse().map_err(|_| format!("bad col '{col}'"))?;
    let sq = (row, col);
    if !in_bounds(sq) {
        return Err(format!("square {row},{col} is off the board"));
    }
    Ok(sq)
}
