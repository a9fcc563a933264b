//! Application state and event handling.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use oxo_core::{Coord, GameEngine, GameState, GameStatus, Mark};
use tracing::{debug, info};

use crate::geometry::{self, LineKind};
use crate::timer::{ResetTimer, TimerFired};

/// Time the winning-line reveal takes to cross the board.
pub const LINE_REVEAL: Duration = Duration::from_millis(500);
/// Delay before a finished game resets itself.
pub const AUTO_RESET_DELAY: Duration = Duration::from_millis(2000);

const HELP: &str = "Arrows move, Enter places O, 1-9 jump, r restarts, q quits.";

/// An in-flight winning-line reveal.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    started: Instant,
}

impl Reveal {
    fn begin() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Fraction of the strike-through drawn so far, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.started.elapsed().as_secs_f32() / LINE_REVEAL.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Main application state.
///
/// Owns the engine and the reset timer; everything the frame renderer
/// needs is read through accessors on the latest snapshot.
pub struct App {
    engine: GameEngine,
    snapshot: GameState,
    cursor: Coord,
    reveal: Option<Reveal>,
    reset_timer: ResetTimer,
    status_message: String,
}

impl App {
    /// Creates the application and starts the first game.
    pub fn new(mut engine: GameEngine, reset_timer: ResetTimer) -> Self {
        let snapshot = engine.start_or_reset();
        Self {
            engine,
            snapshot,
            cursor: Coord::new(1, 1).expect("center is on the board"),
            reveal: None,
            reset_timer,
            status_message: HELP.to_string(),
        }
    }

    /// The latest game snapshot.
    pub fn snapshot(&self) -> &GameState {
        &self.snapshot
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// The reveal animation, when a win is being struck through.
    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    /// Current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = crate::input::move_cursor(self.cursor, key);
    }

    /// Handles a click on a cell.
    ///
    /// Clicks are disabled while the game is finished; the engine would
    /// ignore them anyway, but skipping the call keeps the reveal and
    /// timer untouched.
    pub fn click(&mut self, coord: Coord) {
        if self.snapshot.status().is_terminal() {
            debug!(%coord, "click ignored, game over");
            return;
        }
        self.cursor = coord;
        self.snapshot = self.engine.apply_human_move(coord);
        self.after_transition();
    }

    /// Handles a timer event from the channel.
    pub fn handle_timer(&mut self, fired: TimerFired) {
        if !self.reset_timer.is_current(fired) {
            debug!(?fired, "dropping stale timer event");
            return;
        }
        info!("auto-reset timer fired");
        self.reset();
    }

    /// Starts a new game, cancelling any pending auto-reset.
    pub fn reset(&mut self) {
        self.reset_timer.cancel();
        self.reveal = None;
        self.snapshot = self.engine.start_or_reset();
        self.status_message = HELP.to_string();
    }

    fn after_transition(&mut self) {
        let status = *self.snapshot.status();
        match status {
            GameStatus::InProgress => {
                self.status_message = HELP.to_string();
            }
            GameStatus::Won(win) => {
                let along = line_description(geometry::line_kind(&win.line));
                self.status_message = match win.mark {
                    Mark::O => format!("You win, striking through {along}. New game shortly."),
                    Mark::X => {
                        format!("The computer wins, striking through {along}. New game shortly.")
                    }
                };
                self.reveal = Some(Reveal::begin());
                self.reset_timer.schedule(AUTO_RESET_DELAY);
            }
            GameStatus::Draw => {
                self.status_message = "A draw. New game shortly.".to_string();
                self.reset_timer.schedule(AUTO_RESET_DELAY);
            }
        }
    }
}

fn line_description(kind: LineKind) -> String {
    match kind {
        LineKind::Row(row) => format!("row {row}"),
        LineKind::Column(col) => format!("column {col}"),
        LineKind::Diagonal => "the diagonal".to_string(),
        LineKind::AntiDiagonal => "the anti-diagonal".to_string(),
    }
}
