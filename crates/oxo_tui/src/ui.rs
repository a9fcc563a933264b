//! Stateless frame rendering and click hit-testing.

use oxo_core::{Cell, Coord, GameStatus, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::geometry;

/// Renders one frame: title, board, status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("oxo - tic-tac-toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let rects = cell_rects(frame.area());
    let struck = struck_cells(app);
    for &coord in &Coord::ALL {
        draw_cell(
            frame,
            rects[coord.row() as usize][coord.col() as usize],
            app,
            coord,
            struck.contains(&coord),
        );
    }
    draw_grid_lines(frame, frame.area());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Maps a terminal click to a board cell, if it lands on one.
pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<Coord> {
    let rects = cell_rects(area);
    Coord::ALL.iter().copied().find(|&coord| {
        rects[coord.row() as usize][coord.col() as usize].contains(Position::new(x, y))
    })
}

/// Winning-line cells currently covered by the reveal animation.
///
/// The strike-through crosses the three cells in line order; how far it
/// has come is derived from the pixel geometry.
fn struck_cells(app: &App) -> Vec<Coord> {
    match (app.snapshot().status(), app.reveal()) {
        (GameStatus::Won(win), Some(reveal)) => {
            let (start, end) = geometry::line_endpoints(&win.line, geometry::CELL_SIZE);
            let total = (end.x - start.x).hypot(end.y - start.y);
            let drawn = geometry::reveal_length(&win.line, geometry::CELL_SIZE, reveal.progress());
            let crossed = (((drawn / total) * 3.0).ceil() as usize).min(3);
            win.line.cells()[..crossed].to_vec()
        }
        _ => Vec::new(),
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord, struck: bool) {
    let (symbol, base_style) = match app.snapshot().board().get(coord) {
        Cell::Empty => (
            (coord.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if struck {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else if coord == app.cursor() && !app.snapshot().status().is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol inside the 3-row cell.
    let paragraph = Paragraph::new(format!("\n{symbol}"))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_grid_lines(frame: &mut Frame, area: Rect) {
    let board_area = board_area(area);
    let rows = board_rows(board_area);
    for sep in [rows[1], rows[3]] {
        let line = Paragraph::new("─".repeat(sep.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, sep);
    }
    for row_area in [rows[0], rows[2], rows[4]] {
        let cols = board_cols(row_area);
        for sep in [cols[1], cols[3]] {
            let line = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(line, sep);
        }
    }
}

fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
        ])
        .split(area)
}

fn board_area(area: Rect) -> Rect {
    center_rect(screen_chunks(area)[1], 40, 11)
}

fn board_rows(board_area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area)
}

fn board_cols(row_area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(row_area)
}

/// The 3x3 cell rectangles for a terminal of the given size.
///
/// Derived purely from the area so click hit-testing and drawing agree.
fn cell_rects(area: Rect) -> [[Rect; 3]; 3] {
    let rows = board_rows(board_area(area));
    let mut rects = [[Rect::default(); 3]; 3];
    for (r, &row_area) in [rows[0], rows[2], rows[4]].iter().enumerate() {
        let cols = board_cols(row_area);
        for (c, &col_area) in [cols[0], cols[2], cols[4]].iter().enumerate() {
            rects[r][c] = col_area;
        }
    }
    rects
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
