//! Game state: status, winning line, and move history.

use crate::action::{Move, MoveError};
use crate::coord::Coord;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// The three coordinates of a completed line.
///
/// Coordinates are kept in the fixed enumeration order of the matching
/// candidate line, so a row reads left to right and a column top to bottom.
/// Pixel geometry for highlighting is derived by the renderer, not stored
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    cells: [Coord; 3],
}

impl WinningLine {
    pub(crate) fn new(cells: [Coord; 3]) -> Self {
        Self { cells }
    }

    /// The line's coordinates, in enumeration order.
    pub fn cells(&self) -> &[Coord; 3] {
        &self.cells
    }

    /// Checks whether the line passes through `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// A decided game: the winning mark and its completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The mark that completed a line.
    pub mark: Mark,
    /// The completed line.
    pub line: WinningLine,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Won(Win),
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Checks whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if the game is won.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(win) => Some(win.mark),
            _ => None,
        }
    }

    /// Returns the winning line, if the game is won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won(win) => Some(&win.line),
            _ => None,
        }
    }
}

/// Complete game state.
///
/// Mutated only through the engine's move operations and replaced wholesale
/// on reset. The renderer reads snapshots of this and never writes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Game status.
    status: GameStatus,
    /// Moves applied so far, in order.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh state: empty board, in progress, no history.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places a mark, guarding against occupied cells and finished games.
    pub(crate) fn try_place(&mut self, mov: Move) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(mov.coord) {
            return Err(MoveError::CellOccupied(mov.coord));
        }
        self.board.set(mov.coord, Cell::Occupied(mov.mark));
        self.history.push(mov);
        Ok(())
    }

    /// Sets the game status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_place_records_history() {
        let mut state = GameState::new();
        state.try_place(Move::new(Mark::X, coord(1, 1))).unwrap();
        state.try_place(Move::new(Mark::O, coord(0, 0))).unwrap();
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.board().get(coord(1, 1)), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut state = GameState::new();
        state.try_place(Move::new(Mark::X, coord(1, 1))).unwrap();
        let err = state.try_place(Move::new(Mark::O, coord(1, 1))).unwrap_err();
        assert_eq!(err, MoveError::CellOccupied(coord(1, 1)));
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_place_rejects_after_game_over() {
        let mut state = GameState::new();
        state.set_status(GameStatus::Draw);
        let err = state.try_place(Move::new(Mark::O, coord(0, 0))).unwrap_err();
        assert_eq!(err, MoveError::GameOver);
        assert!(state.board().is_empty(coord(0, 0)));
    }

    #[test]
    fn test_status_projections() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::InProgress.winning_line(), None);
    }
}
