//! Empty-cell enumeration and draw detection.

use crate::coord::Coord;
use crate::types::Board;
use tracing::instrument;

/// Returns all empty coordinates in row-major order.
///
/// An empty result with no winner is a draw; the same sequence is the
/// fallback pool for the opponent heuristic.
#[instrument(skip(board))]
pub fn empty_cells(board: &Board) -> Vec<Coord> {
    Coord::ALL
        .iter()
        .copied()
        .filter(|&coord| board.is_empty(coord))
        .collect()
}
