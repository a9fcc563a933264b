//! Keyboard navigation for the board cursor.

use crossterm::event::KeyCode;
use oxo_core::Coord;

/// Moves the cursor one cell in the direction of an arrow key.
///
/// Movement clamps at the board edge; other keys leave the cursor alone.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Coord::new(row, col).unwrap_or(cursor)
}
