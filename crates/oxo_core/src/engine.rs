//! The game engine: owns the state and sequences turns.

use crate::action::Move;
use crate::coord::Coord;
use crate::opponent;
use crate::rng::GameRng;
use crate::rules::{empty_cells, evaluate_winner};
use crate::state::{GameState, GameStatus};
use crate::types::Mark;
use tracing::{debug, info, instrument};

/// Owns one [`GameState`] and a random source, and applies the turn and
/// lifecycle sequencing: the computer opens every game, turns alternate,
/// and a terminal state stays fixed until reset.
///
/// All transitions are synchronous; a renderer reads snapshots and never
/// writes back. "Errors" (occupied cell, finished game) are no-ops at this
/// boundary, surfaced only in debug logs.
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    rng: GameRng,
}

impl GameEngine {
    /// Creates an engine with the given random source.
    ///
    /// The board stays empty until [`start_or_reset`](Self::start_or_reset)
    /// opens the first game.
    pub fn new(rng: GameRng) -> Self {
        Self {
            state: GameState::new(),
            rng,
        }
    }

    /// Creates an engine with a seeded random source.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Starts a fresh game and plays the computer's opening move.
    ///
    /// Called once at mount and again after each auto-reset delay. The
    /// winner re-evaluation after the opening move cannot fire, but keeps
    /// the sequencing identical to [`apply_human_move`](Self::apply_human_move).
    #[instrument(skip(self))]
    pub fn start_or_reset(&mut self) -> GameState {
        self.state = GameState::new();
        self.computer_turn();
        info!("new game started, computer opened");
        self.state.clone()
    }

    /// Applies the human's O at `coord`, then the computer's reply.
    ///
    /// A move onto an occupied cell or into a finished game leaves the
    /// state untouched. When the human's placement completes a line the
    /// game ends immediately and the computer does not reply.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, coord: Coord) -> GameState {
        if let Err(err) = self.state.try_place(Move::new(Mark::O, coord)) {
            debug!(%err, "ignoring human move");
            return self.state.clone();
        }
        if let Some(win) = evaluate_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(win));
            info!(winner = ?win.mark, "game over");
            return self.state.clone();
        }
        self.computer_turn();
        self.state.clone()
    }

    /// Plays the computer's X and re-evaluates the terminal conditions.
    fn computer_turn(&mut self) {
        if let Some(coord) = opponent::choose_move(self.state.board(), &mut self.rng) {
            self.state
                .try_place(Move::new(Mark::X, coord))
                .expect("opponent move targets an empty cell");
        }
        if let Some(win) = evaluate_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(win));
            info!(winner = ?win.mark, "game over");
        } else if empty_cells(self.state.board()).is_empty() {
            self.state.set_status(GameStatus::Draw);
            info!("game over, draw");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}
