//! First-class move events.
//!
//! Moves are domain events, not side effects. The engine records every
//! applied move in the game history.

use crate::coord::Coord;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark lands.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, coord: Coord) -> Self {
        Self { mark, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.mark, self.coord)
    }
}

/// Reason a requested move was not applied.
///
/// The engine treats both cases as no-ops at its boundary; the error only
/// feeds debug logging.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The targeted cell is already occupied.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The game is already over.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Mark::O, Coord::new(2, 1).unwrap());
        assert_eq!(mov.to_string(), "O -> (2, 1)");
    }

    #[test]
    fn test_error_display() {
        let err = MoveError::CellOccupied(Coord::new(0, 2).unwrap());
        assert_eq!(err.to_string(), "cell (0, 2) is already occupied");
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
    }
}
