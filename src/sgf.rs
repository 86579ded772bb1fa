//! SGF (Smart Game Format) puzzle decoding.
//!
//! Only what a puzzle needs is read from the game record:
//! - `SZ` - board size (default 19, `N` or `N:N`)
//! - `GN` - title, `C` in the root node - description
//! - `AB` / `AW` / `AE` in the root node - setup stones
//! - `B` / `W` - solution moves, following the first variation at every branch
//!
//! Points are two lowercase letters, column first, both counted from `a`.
//! Compressed point lists (`aa:cc`) are expanded. Passes (`B[]`, or `B[tt]`
//! on boards up to 19x19) are skipped in the solution.
//!
//! ## Example
//!
//! ```
//! use learngo::board::{Color, Intersection};
//! use learngo::sgf::decode;
//!
//! let puzzle = decode("(;GN[Corner]SZ[9]AB[aa]AW[ba];B[ab])").unwrap();
//! assert_eq!(puzzle.title, "Corner");
//! assert_eq!(puzzle.initial_board.get(0, 0), Ok(Intersection::Black));
//! assert_eq!(puzzle.solution_moves[0].color, Color::Black);
//! ```

use serde::Serialize;
use sgf_parse::go::{Move, Point as SgfPoint, Prop};
use sgf_parse::{GameTree, SgfNode, SgfProp};

use crate::board::{Board, Color, Point};
use crate::constants::{DEFAULT_PUZZLE_TITLE, DEFAULT_SIZE, MAX_SGF_SIZE};
use crate::error::SgfError;

/// `tt`, the FF[3] pass, on boards that cannot reach it.
const LEGACY_PASS: SgfPoint = SgfPoint { x: 19, y: 19 };

/// One move of a puzzle solution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolutionMove {
    pub color: Color,
    pub row: usize,
    pub col: usize,
}

/// A decoded puzzle: setup position plus the main-line solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub initial_board: Board,
    pub solution_moves: Vec<SolutionMove>,
}

impl Puzzle {
    /// Side length of the puzzle board.
    pub fn size(&self) -> usize {
        self.initial_board.size()
    }
}

// =============================================================================
// Game tree
// =============================================================================

/// Drop a set of subtrees one node at a time.
///
/// `SgfNode` owns its children directly, so dropping a deep tree in one go
/// recurses once per level.
fn release<P: SgfProp>(mut pending: Vec<SgfNode<P>>) {
    while let Some(mut node) = pending.pop() {
        pending.append(&mut node.children);
    }
}

fn release_tree(tree: GameTree) {
    match tree {
        GameTree::GoGame(root) => release(vec![root]),
        GameTree::Unknown(root) => release(vec![root]),
    }
}

/// Root node of the first game tree in the collection.
fn first_go_tree(text: &str) -> Result<SgfNode<Prop>, SgfError> {
    let mut trees = sgf_parse::parse(text)?.into_iter();
    let first = trees.next();
    trees.for_each(release_tree);
    match first {
        Some(GameTree::GoGame(root)) => Ok(root),
        Some(tree) => {
            release_tree(tree);
            Err(SgfError::NotGo)
        }
        None => Err(SgfError::MissingRoot),
    }
}

/// Flatten the first variation at every branch into a node list.
///
/// The returned nodes have no children left; every other variation is
/// released on the way.
fn main_line(root: SgfNode<Prop>) -> Vec<SgfNode<Prop>> {
    let mut line = Vec::new();
    let mut discarded = Vec::new();
    let mut next = Some(root);
    while let Some(mut node) = next {
        let mut children = std::mem::take(&mut node.children).into_iter();
        next = children.next();
        discarded.extend(children);
        line.push(node);
    }
    release(discarded);
    line
}

// =============================================================================
// Decoding
// =============================================================================

/// Letters of an SGF point, for error messages.
fn point_text(point: &SgfPoint) -> String {
    [point.x, point.y]
        .iter()
        .map(|&v| match v {
            0..26 => char::from(b'a' + v),
            _ => char::from(b'A' + (v - 26)),
        })
        .collect()
}

fn invalid_point(ident: &str, value: String) -> SgfError {
    SgfError::InvalidPoint {
        property: ident.to_string(),
        value,
    }
}

/// Convert an SGF point (column `x`, row `y`) to a board point.
fn board_point(ident: &str, point: &SgfPoint, size: usize) -> Result<Point, SgfError> {
    let (row, col) = (usize::from(point.y), usize::from(point.x));
    if row < size && col < size {
        Ok((row, col))
    } else {
        Err(invalid_point(ident, point_text(point)))
    }
}

fn board_size(root: &SgfNode<Prop>) -> Result<usize, SgfError> {
    match root.get_property("SZ") {
        None => Ok(DEFAULT_SIZE),
        Some(Prop::SZ((cols, rows))) if cols != rows => {
            Err(SgfError::InvalidSize(format!("{cols}:{rows}")))
        }
        Some(Prop::SZ((size, _))) => {
            let size = usize::from(*size);
            if (1..=MAX_SGF_SIZE).contains(&size) {
                Ok(size)
            } else {
                Err(SgfError::InvalidSize(size.to_string()))
            }
        }
        Some(other) => Err(SgfError::InvalidSize(raw_values(other))),
    }
}

fn raw_values(prop: &Prop) -> String {
    match prop {
        Prop::Invalid(_, values) | Prop::Unknown(_, values) => values.join(""),
        other => other.to_string(),
    }
}

/// Apply `AB`, `AW` and then `AE` of the root node to an empty board.
fn setup_board(root: &SgfNode<Prop>, size: usize) -> Result<Board, SgfError> {
    let mut board = Board::new(size).map_err(|_| SgfError::InvalidSize(size.to_string()))?;
    let mut cleared = Vec::new();
    for prop in root.properties() {
        let (ident, points, color) = match prop {
            Prop::AB(points) => ("AB", points, Some(Color::Black)),
            Prop::AW(points) => ("AW", points, Some(Color::White)),
            Prop::AE(points) => ("AE", points, None),
            Prop::Invalid(ident, values) if matches!(ident.as_str(), "AB" | "AW" | "AE") => {
                return Err(invalid_point(ident, values.join("")));
            }
            _ => continue,
        };
        for point in points {
            let (row, col) = board_point(ident, point, size)?;
            match color {
                Some(color) => {
                    board = board
                        .with_stone(row, col, color)
                        .map_err(|_| invalid_point(ident, point_text(point)))?;
                }
                None => cleared.push((row, col)),
            }
        }
    }
    board
        .without_stones(&cleared)
        .map_err(|_| invalid_point("AE", format!("{cleared:?}")))
}

/// The move carried by a node, if any. Passes yield `None`.
fn node_move(node: &SgfNode<Prop>, size: usize) -> Result<Option<SolutionMove>, SgfError> {
    let Some(prop) = node.get_property("B").or_else(|| node.get_property("W")) else {
        return Ok(None);
    };
    let (ident, mv, color) = match prop {
        Prop::B(mv) => ("B", mv, Color::Black),
        Prop::W(mv) => ("W", mv, Color::White),
        other => return Err(invalid_point(&other.identifier(), raw_values(other))),
    };
    let point = match mv {
        Move::Pass => return Ok(None),
        Move::Move(point) if *point == LEGACY_PASS && size <= 19 => return Ok(None),
        Move::Move(point) => point,
    };
    let (row, col) = board_point(ident, point, size)?;
    Ok(Some(SolutionMove { color, row, col }))
}

/// Decode an SGF game record into a puzzle.
///
/// Text before the first `(` is ignored, as is every game tree after the
/// first one.
///
/// # Errors
/// Any structural problem, unreadable size or off-board point is an
/// [`SgfError`]; no partial puzzle is ever returned.
pub fn decode(text: &str) -> Result<Puzzle, SgfError> {
    let start = text.find('(').ok_or(SgfError::MissingRoot)?;
    let line = main_line(first_go_tree(&text[start..])?);
    let root = line.first().ok_or(SgfError::MissingRoot)?;

    let size = board_size(root)?;
    let initial_board = setup_board(root, size)?;

    let mut solution_moves = Vec::new();
    for node in &line {
        if let Some(mv) = node_move(node, size)? {
            solution_moves.push(mv);
        }
    }

    let title = match root.get_property("GN") {
        Some(Prop::GN(name)) => name.to_string(),
        _ => DEFAULT_PUZZLE_TITLE.to_string(),
    };
    let description = match root.get_property("C") {
        Some(Prop::C(comment)) => Some(comment.to_string()),
        _ => None,
    };

    Ok(Puzzle {
        title,
        description,
        initial_board,
        solution_moves,
    })
}
