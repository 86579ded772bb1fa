//! Move resolution: legality, captures and suicide.
//!
//! This module provides the rules of play on top of [`Board`] snapshots:
//! - Stone placement with occupancy checks
//! - Capture of opponent groups left without liberties
//! - Rejection of self-capture (suicide)
//!
//! It also converts between board points and GTP vertices such as `D4`.
//!
//! Resolution is a pure function: the input board is never modified. A
//! rejected move yields an error and nothing else; an accepted move yields a
//! brand-new board.

use crate::board::{Board, Color, Point};
use crate::constants::{GTP_COLUMNS, MAX_GTP_SIZE};
use crate::error::{BoardError, MoveError};
use crate::group::{dead_groups, group_and_liberties};

/// An accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Board after the stone was placed and captures were removed.
    pub board: Board,
    /// Opponent stones removed by this move, group by group.
    pub captured: Vec<Point>,
}

impl Placement {
    /// Number of opponent stones captured.
    pub fn captures(&self) -> usize {
        self.captured.len()
    }
}

/// Try to play `color` at `(row, col)`.
///
/// Opponent captures are resolved before the suicide check, so a move that
/// would have no liberties on its own is legal when it captures.
///
/// # Errors
/// - [`MoveError::OutOfBounds`] - the point is not on the board
/// - [`MoveError::OccupiedIntersection`] - the point already holds a stone
/// - [`MoveError::SuicideMove`] - the placed stone's group has no liberties after captures
pub fn attempt_move(
    board: &Board,
    row: usize,
    col: usize,
    color: Color,
) -> Result<Placement, MoveError> {
    let out_of_bounds = |_: BoardError| MoveError::OutOfBounds {
        row,
        col,
        size: board.size(),
    };

    if !board.get(row, col).map_err(out_of_bounds)?.is_empty() {
        return Err(MoveError::OccupiedIntersection { row, col });
    }

    let candidate = board.with_stone(row, col, color).map_err(out_of_bounds)?;

    // Remove every opponent group that lost its last liberty.
    let captured: Vec<Point> = dead_groups(&candidate, color.opponent())
        .into_iter()
        .flat_map(|group| group.stones)
        .collect();
    let candidate = candidate.without_stones(&captured).map_err(out_of_bounds)?;

    let suicide = group_and_liberties(&candidate, row, col).is_none_or(|group| group.is_dead());
    if suicide {
        return Err(MoveError::SuicideMove { row, col });
    }

    Ok(Placement {
        board: candidate,
        captured,
    })
}

/// Check whether `color` may play at `(row, col)`.
pub fn is_legal(board: &Board, row: usize, col: usize, color: Color) -> bool {
    attempt_move(board, row, col, color).is_ok()
}

/// Every point where `color` may legally play, in row-major order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Point> {
    board
        .points()
        .filter(|&(row, col)| is_legal(board, row, col, color))
        .collect()
}

/// A GTP vertex: either a pass or a board point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vertex {
    Pass,
    Point(Point),
}

/// Parse a GTP vertex (e.g., "D4", "pass") for a board of the given size.
///
/// Columns use letters A-Z skipping I; rows count from 1 at the bottom edge.
/// Returns `None` for malformed or off-board vertices.
pub fn parse_vertex(s: &str, size: usize) -> Option<Vertex> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(Vertex::Pass);
    }
    if size > MAX_GTP_SIZE {
        return None;
    }

    let bytes = s.as_bytes();
    let (&letter, digits) = bytes.split_first()?;
    let col = GTP_COLUMNS
        .iter()
        .position(|&c| c == letter.to_ascii_uppercase())?;

    let number: usize = std::str::from_utf8(digits).ok()?.parse().ok()?;
    if col >= size || number == 0 || number > size {
        return None;
    }

    Some(Vertex::Point((size - number, col)))
}

/// Convert a vertex to its GTP string (e.g., "D4", "pass").
pub fn str_vertex(vertex: Vertex, size: usize) -> String {
    match vertex {
        Vertex::Pass => "pass".into(),
        Vertex::Point((row, col)) => {
            let letter = GTP_COLUMNS.get(col).map_or('?', |&c| c as char);
            format!("{letter}{}", size - row)
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{ArbBoard, ArbPoint};
    use crate::board::Intersection;

    fn place(board: Board, stones: &[(usize, usize, Color)]) -> Board {
        stones
            .iter()
            .fold(board, |b, &(r, c, color)| b.with_stone(r, c, color).unwrap())
    }

    #[test]
    fn test_play_move_basic() {
        let board = Board::new(9).unwrap();
        let placement = attempt_move(&board, 3, 3, Color::Black).unwrap();
        assert_eq!(placement.board.get(3, 3), Ok(Intersection::Black));
        assert_eq!(placement.captures(), 0);
        assert!(board.is_empty_board());
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new(9).unwrap();
        assert_eq!(
            attempt_move(&board, 9, 0, Color::Black),
            Err(MoveError::OutOfBounds { row: 9, col: 0, size: 9 })
        );
    }

    #[test]
    fn test_occupied() {
        let board = place(Board::new(9).unwrap(), &[(2, 2, Color::White)]);
        let before = board.clone();
        assert_eq!(
            attempt_move(&board, 2, 2, Color::Black),
            Err(MoveError::OccupiedIntersection { row: 2, col: 2 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_move_suicide() {
        // Black at (0,1) and (1,0) make (0,0) suicide for White.
        let board = place(
            Board::new(9).unwrap(),
            &[(0, 1, Color::Black), (1, 0, Color::Black)],
        );
        assert_eq!(
            attempt_move(&board, 0, 0, Color::White),
            Err(MoveError::SuicideMove { row: 0, col: 0 })
        );
        // Black may fill its own eye-like point: the group keeps liberties.
        assert!(is_legal(&board, 0, 0, Color::Black));
    }

    #[test]
    fn test_multi_stone_suicide() {
        // White (0,0) already sits inside Black's wall; White (0,1) joins it with no liberties.
        let board = place(
            Board::new(5).unwrap(),
            &[
                (0, 0, Color::White),
                (1, 0, Color::Black),
                (1, 1, Color::Black),
                (0, 2, Color::Black),
            ],
        );
        assert_eq!(
            attempt_move(&board, 0, 1, Color::White),
            Err(MoveError::SuicideMove { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_capture() {
        // White stone at (3,3) surrounded on three sides by Black.
        let board = place(
            Board::new(9).unwrap(),
            &[
                (3, 3, Color::White),
                (2, 3, Color::Black),
                (4, 3, Color::Black),
                (3, 2, Color::Black),
            ],
        );
        let placement = attempt_move(&board, 3, 4, Color::Black).unwrap();
        assert_eq!(placement.captured, vec![(3, 3)]);
        assert_eq!(placement.board.get(3, 3), Ok(Intersection::Empty));
    }

    #[test]
    fn test_capture_beats_suicide() {
        // Corner: White (0,1) is in atari; Black's (0,0) would have no
        // liberties on its own, but it captures first.
        let board = place(
            Board::new(5).unwrap(),
            &[
                (0, 1, Color::White),
                (1, 0, Color::White),
                (0, 2, Color::Black),
                (1, 1, Color::Black),
            ],
        );
        // (1,0) White has liberties at (2,0), so only (0,1) dies.
        let placement = attempt_move(&board, 0, 0, Color::Black).unwrap();
        assert_eq!(placement.captured, vec![(0, 1)]);
        let group = group_and_liberties(&placement.board, 0, 0).unwrap();
        assert_eq!(group.liberties.len(), 1);
    }

    #[test]
    fn test_captures_multiple_groups() {
        // Two separate white stones in atari, both sharing the liberty (1,1).
        let board = place(
            Board::new(5).unwrap(),
            &[
                (0, 1, Color::White),
                (1, 0, Color::White),
                (0, 0, Color::Black),
                (0, 2, Color::Black),
                (2, 0, Color::Black),
                (1, 2, Color::Black),
                (2, 1, Color::Black),
            ],
        );
        let placement = attempt_move(&board, 1, 1, Color::Black).unwrap();
        assert_eq!(placement.captured, vec![(0, 1), (1, 0)]);
        assert_eq!(placement.captures(), 2);
    }

    #[test]
    fn test_legal_moves() {
        let board = place(
            Board::new(2).unwrap(),
            &[(0, 1, Color::Black), (1, 0, Color::Black)],
        );
        assert_eq!(legal_moves(&board, Color::White), Vec::<Point>::new());
        assert_eq!(legal_moves(&board, Color::Black), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_one_by_one_board_is_always_suicide() {
        let board = Board::new(1).unwrap();
        assert!(!is_legal(&board, 0, 0, Color::Black));
    }

    #[test]
    fn test_parse_vertex() {
        assert_eq!(parse_vertex("A1", 19), Some(Vertex::Point((18, 0))));
        assert_eq!(parse_vertex("a19", 19), Some(Vertex::Point((0, 0))));
        assert_eq!(parse_vertex("T19", 19), Some(Vertex::Point((0, 18))));
        assert_eq!(parse_vertex("pass", 9), Some(Vertex::Pass));
        assert_eq!(parse_vertex("PASS", 9), Some(Vertex::Pass));
        assert_eq!(parse_vertex("J9", 9), Some(Vertex::Point((0, 8))));
        assert_eq!(parse_vertex("I5", 9), None);
        assert_eq!(parse_vertex("K1", 9), None);
        assert_eq!(parse_vertex("A10", 9), None);
        assert_eq!(parse_vertex("A0", 9), None);
        assert_eq!(parse_vertex("", 9), None);
    }

    #[test]
    fn test_parse_str_vertex_roundtrip() {
        let board = Board::new(13).unwrap();
        for pt in board.points() {
            let s = str_vertex(Vertex::Point(pt), 13);
            assert_eq!(parse_vertex(&s, 13), Some(Vertex::Point(pt)), "Failed roundtrip for {}", s);
        }
        assert_eq!(str_vertex(Vertex::Pass, 13), "pass");
    }

    quickcheck! {
        fn occupied_move_leaves_board_identical(input: ArbBoard, pt: ArbPoint, color: Color) -> bool {
            let board = input.board;
            let size = board.size();
            let (row, col) = (pt.row % size, pt.col % size);
            if board.get(row, col) == Ok(Intersection::Empty) {
                return true;
            }
            let before = board.clone();
            attempt_move(&board, row, col, color) == Err(MoveError::OccupiedIntersection { row, col })
                && board == before
        }
    }

    quickcheck! {
        fn accepted_move_removes_whole_groups(input: ArbBoard, pt: ArbPoint, color: Color) -> bool {
            let board = input.board;
            let size = board.size();
            let (row, col) = (pt.row % size, pt.col % size);
            match attempt_move(&board, row, col, color) {
                Ok(placement) => {
                    // No opponent group is left without liberties and the
                    // placed stone's group is alive.
                    dead_groups(&placement.board, color.opponent()).is_empty()
                        && group_and_liberties(&placement.board, row, col).is_some_and(|g| !g.is_dead())
                        && placement.captured.iter().all(|&(r, c)| {
                            placement.board.get(r, c) == Ok(Intersection::Empty)
                        })
                }
                Err(MoveError::SuicideMove { .. }) => {
                    // Suicide is only reported when no adjacent opponent group dies.
                    let candidate = board.with_stone(row, col, color).unwrap();
                    candidate.neighbors(row, col).all(|(r, c)| {
                        group_and_liberties(&candidate, r, c)
                            .is_none_or(|g| g.color == color || !g.is_dead())
                    })
                }
                Err(MoveError::OccupiedIntersection { .. }) => board.get(row, col) != Ok(Intersection::Empty),
                Err(MoveError::OutOfBounds { .. }) => false,
            }
        }
    }
}
