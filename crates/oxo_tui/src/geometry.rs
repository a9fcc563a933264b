//! Pixel geometry for the winning-line reveal.
//!
//! The engine reports a winning line as cell coordinates only; everything
//! pixel-flavored is derived here from a cell size.

use oxo_core::WinningLine;

/// Board edge length in pixels.
pub const BOARD_SIZE: f32 = 192.0;
/// Edge length of one cell.
pub const CELL_SIZE: f32 = BOARD_SIZE / 3.0;
/// Edge length of a drawn mark inside its cell.
pub const ICON_SIZE: f32 = CELL_SIZE * 0.6;

/// A point in board pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal offset from the board's left edge.
    pub x: f32,
    /// Vertical offset from the board's top edge.
    pub y: f32,
}

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Horizontal line through the given row.
    Row(u8),
    /// Vertical line through the given column.
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Classifies a winning line by its three coordinates.
pub fn line_kind(line: &WinningLine) -> LineKind {
    let [a, b, c] = *line.cells();
    if a.row() == b.row() && b.row() == c.row() {
        LineKind::Row(a.row())
    } else if a.col() == b.col() && b.col() == c.col() {
        LineKind::Column(a.col())
    } else if a.col() == 0 {
        // Diagonals are reported starting from the top corner.
        LineKind::Diagonal
    } else {
        LineKind::AntiDiagonal
    }
}

/// Endpoints of the strike-through for a line, given the cell size.
///
/// Rows and columns are struck through their center; diagonals corner to
/// corner.
pub fn line_endpoints(line: &WinningLine, cell_size: f32) -> (Point, Point) {
    let board = cell_size * 3.0;
    match line_kind(line) {
        LineKind::Row(row) => {
            let y = row as f32 * cell_size + cell_size / 2.0;
            (Point { x: 0.0, y }, Point { x: board, y })
        }
        LineKind::Column(col) => {
            let x = col as f32 * cell_size + cell_size / 2.0;
            (Point { x, y: 0.0 }, Point { x, y: board })
        }
        LineKind::Diagonal => (Point { x: 0.0, y: 0.0 }, Point { x: board, y: board }),
        LineKind::AntiDiagonal => (Point { x: board, y: 0.0 }, Point { x: 0.0, y: board }),
    }
}

/// Length of the strike-through revealed at `progress`, clamped to `[0, 1]`.
pub fn reveal_length(line: &WinningLine, cell_size: f32, progress: f32) -> f32 {
    let (start, end) = line_endpoints(line, cell_size);
    let total = (end.x - start.x).hypot(end.y - start.y);
    total * progress.clamp(0.0, 1.0)
}
