//! Pure tic-tac-toe game logic with a heuristic computer opponent.
//!
//! The human plays O against a computer X that opens every game and picks
//! its cells with a proximity-biased random policy. The engine owns the
//! whole game lifecycle; a renderer consumes [`GameState`] snapshots and
//! feeds cell clicks back in.
//!
//! # Example
//!
//! ```
//! use oxo_core::{Coord, GameEngine};
//!
//! let mut engine = GameEngine::with_seed(7);
//! let state = engine.start_or_reset();
//! assert_eq!(state.history().len(), 1); // the computer always opens
//!
//! let click = Coord::new(1, 1).expect("on the board");
//! let state = engine.apply_human_move(click);
//! assert!(state.history().len() >= 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coord;
mod engine;
mod opponent;
mod rng;
mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use coord::Coord;
pub use engine::GameEngine;
pub use opponent::{choose_move, computer_move};
pub use rng::GameRng;
pub use rules::{empty_cells, evaluate_winner};
pub use state::{GameState, GameStatus, Win, WinningLine};
pub use types::{Board, Cell, Mark};
