//! Explicit game state: board history plus the player to move.
//!
//! A [`Game`] is what an interaction or rendering layer holds on to. It
//! owns the [`History`] of board snapshots; the player to move is derived
//! from the history cursor (Black moves first), so undo and redo keep it in
//! step automatically.

use crate::board::{Board, Color};
use crate::error::{BoardError, MoveError};
use crate::history::History;
use crate::position::attempt_move;
use crate::sgf::Puzzle;

#[derive(Clone, Debug)]
pub struct Game {
    history: History,
}

impl Default for Game {
    /// An empty board of the default size, Black to move.
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl Game {
    /// Start a game on an empty `size`x`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    /// Start a game from an arbitrary initial position, Black to move.
    pub fn from_board(board: Board) -> Self {
        Self {
            history: History::new(board),
        }
    }

    /// Start a game from a puzzle's setup position.
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self::from_board(puzzle.initial_board.clone())
    }

    /// Play a stone for the player to move.
    ///
    /// Returns the number of captured stones. On error, the board and the
    /// history are left exactly as they were.
    pub fn place_move(&mut self, row: usize, col: usize) -> Result<usize, MoveError> {
        let placement = attempt_move(self.current_board(), row, col, self.current_player())?;
        let captured = placement.captures();
        self.history.commit(placement.board);
        Ok(captured)
    }

    /// Pass: the position is repeated and the turn goes to the opponent.
    pub fn pass(&mut self) {
        let board = self.current_board().clone();
        self.history.commit(board);
    }

    /// Step back one move. Returns `false` at the initial position.
    pub fn undo(&mut self) -> bool {
        self.history.back()
    }

    /// Step forward one undone move. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.forward()
    }

    /// Board at the history cursor.
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    /// Whose turn it is; Black moves first.
    pub fn current_player(&self) -> Color {
        Color::to_move_after(self.move_number())
    }

    /// Number of moves (including passes) leading to the current position.
    pub fn move_number(&self) -> usize {
        self.history.cursor()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Play the first `count` solution moves of `puzzle` from the current position.
    ///
    /// When a solution move belongs to the player not on turn, a pass is
    /// inserted first. Stops at the first illegal move and returns its error;
    /// moves already played stay in the history. Neither the rejected move
    /// nor its pass is committed.
    pub fn replay(&mut self, puzzle: &Puzzle, count: usize) -> Result<usize, MoveError> {
        let mut captured = 0;
        for mv in puzzle.solution_moves.iter().take(count) {
            let placement = attempt_move(self.current_board(), mv.row, mv.col, mv.color)?;
            if mv.color != self.current_player() {
                self.pass();
            }
            captured += placement.captures();
            self.history.commit(placement.board);
        }
        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Intersection;
    use crate::sgf::decode;

    #[test]
    fn test_new_game() {
        let game = Game::new(19).unwrap();
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.move_number(), 0);
        assert!(game.current_board().is_empty_board());
        assert!(Game::new(0).is_err());
    }

    #[test]
    fn test_players_alternate() {
        let mut game = Game::new(9).unwrap();
        game.place_move(2, 2).unwrap();
        assert_eq!(game.current_player(), Color::White);
        game.place_move(6, 6).unwrap();
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.current_board().get(2, 2), Ok(Intersection::Black));
        assert_eq!(game.current_board().get(6, 6), Ok(Intersection::White));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new(9).unwrap();
        game.place_move(2, 2).unwrap();
        let before = game.current_board().clone();
        assert_eq!(
            game.place_move(2, 2),
            Err(MoveError::OccupiedIntersection { row: 2, col: 2 })
        );
        assert_eq!(game.current_board(), &before);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_player(), Color::White);
    }

    #[test]
    fn test_undo_redo_tracks_player() {
        let mut game = Game::new(9).unwrap();
        game.place_move(0, 0).unwrap();
        game.place_move(1, 1).unwrap();

        assert!(game.undo());
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.current_board().get(1, 1), Ok(Intersection::Empty));

        assert!(game.redo());
        assert!(!game.redo());
        assert_eq!(game.current_board().get(1, 1), Ok(Intersection::White));

        assert!(game.undo());
        assert!(game.undo());
        assert!(!game.undo());
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn test_move_after_undo_drops_redo() {
        let mut game = Game::new(9).unwrap();
        game.place_move(0, 0).unwrap();
        game.place_move(1, 1).unwrap();
        game.undo();
        game.place_move(2, 2).unwrap();
        assert_eq!(game.history().len(), 3);
        assert!(!game.redo());
        assert_eq!(game.current_board().get(1, 1), Ok(Intersection::Empty));
        assert_eq!(game.current_board().get(2, 2), Ok(Intersection::White));
    }

    #[test]
    fn test_pass() {
        let mut game = Game::new(9).unwrap();
        game.pass();
        assert_eq!(game.current_player(), Color::White);
        assert!(game.current_board().is_empty_board());
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_puzzle_replay() {
        // White to capture the black stone at the corner.
        let puzzle = decode("(;SZ[9]AB[aa]AW[ba];W[ab])").unwrap();
        let mut game = Game::from_puzzle(&puzzle);
        assert_eq!(game.current_board().get(0, 0), Ok(Intersection::Black));

        let captured = game.replay(&puzzle, usize::MAX).unwrap();
        assert_eq!(captured, 1);
        // A pass was inserted so that White is the one playing.
        assert_eq!(game.move_number(), 2);
        assert_eq!(game.current_board().get(0, 0), Ok(Intersection::Empty));
        assert_eq!(game.current_board().get(1, 0), Ok(Intersection::White));
    }

    #[test]
    fn test_replay_stops_at_illegal_move() {
        let puzzle = decode("(;SZ[9];B[aa];W[aa])").unwrap();
        let mut game = Game::from_puzzle(&puzzle);
        assert_eq!(
            game.replay(&puzzle, 2),
            Err(MoveError::OccupiedIntersection { row: 0, col: 0 })
        );
        assert_eq!(game.move_number(), 1);
    }

    #[test]
    fn test_replay_rejected_out_of_turn_move_adds_no_pass() {
        let puzzle = decode("(;SZ[9]AB[aa];W[aa])").unwrap();
        let mut game = Game::from_puzzle(&puzzle);
        assert_eq!(
            game.replay(&puzzle, 1),
            Err(MoveError::OccupiedIntersection { row: 0, col: 0 })
        );
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.current_board(), &puzzle.initial_board);
    }
}
