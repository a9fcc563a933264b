//! Win detection logic.

use crate::coord::Coord;
use crate::state::{Win, WinningLine};
use crate::types::{Board, Cell};
use tracing::instrument;

/// The 8 candidate lines in priority order: rows, then columns, then the
/// main diagonal, then the anti-diagonal. A winning line reports its
/// coordinates in the order listed here.
const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Finds the first completed line on the board.
///
/// When several lines complete simultaneously (only possible on a directly
/// constructed board, never after a single move) the earliest line in the
/// priority order is reported. The board is not mutated.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Occupied(mark) = board.get(a) {
            if board.get(b) == Cell::Occupied(mark) && board.get(c) == Cell::Occupied(mark) {
                return Some(Win {
                    mark,
                    line: WinningLine::new(line),
                });
            }
        }
    }
    None
}
