//! Immutable 2D board representation.
//!
//! A [`Board`] is a value snapshot: nothing mutates it after construction.
//! Placing or removing stones returns a fresh copy, so any snapshot kept in
//! the history stays independently inspectable.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::constants::{DEFAULT_SIZE, EMPTY, STONE_BLACK, STONE_WHITE};
use crate::error::BoardError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The color to move after `moves` moves, Black moving first.
    pub fn to_move_after(moves: usize) -> Color {
        if moves % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Single-letter SGF/GTP tag (`B` or `W`).
    pub fn letter(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// State of a single intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intersection {
    #[default]
    Empty,
    Black,
    White,
}

impl Intersection {
    /// Color of the stone here, `None` when empty.
    pub fn color(self) -> Option<Color> {
        match self {
            Intersection::Empty => None,
            Intersection::Black => Some(Color::Black),
            Intersection::White => Some(Color::White),
        }
    }

    /// True if no stone occupies the intersection.
    pub fn is_empty(self) -> bool {
        self == Intersection::Empty
    }

    fn glyph(self) -> char {
        match self {
            Intersection::Empty => EMPTY,
            Intersection::Black => STONE_BLACK,
            Intersection::White => STONE_WHITE,
        }
    }
}

impl From<Color> for Intersection {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Intersection::Black,
            Color::White => Intersection::White,
        }
    }
}

/// `(row, col)`, zero-based, row 0 at the top edge.
pub type Point = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Intersection>,
}

impl Default for Board {
    /// An empty board of the default size.
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![Intersection::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

impl Board {
    /// Create an empty `size`x`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < 1 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Intersection::Empty; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn check(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.idx(row, col))
    }

    /// Contents of an intersection, or `OutOfBounds` off the board.
    pub fn get(&self, row: usize, col: usize) -> Result<Intersection, BoardError> {
        let i = self.check(row, col)?;
        Ok(self.cells[i])
    }

    /// Copy of this board with one stone set. Legality is not checked here.
    pub fn with_stone(&self, row: usize, col: usize, color: Color) -> Result<Board, BoardError> {
        let i = self.check(row, col)?;
        let mut next = self.clone();
        next.cells[i] = color.into();
        Ok(next)
    }

    /// Copy of this board with every given point emptied.
    pub fn without_stones<'a, I>(&self, points: I) -> Result<Board, BoardError>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut next = self.clone();
        for &(row, col) in points {
            let i = next.check(row, col)?;
            next.cells[i] = Intersection::Empty;
        }
        Ok(next)
    }

    /// In-bounds orthogonal neighbors, always in the order down, up, right, left.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if row > 0 {
            v.push((row - 1, col));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        v.into_iter()
    }

    /// Every point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| (row, col)))
    }

    /// Points holding a stone of `color`, row-major.
    pub fn stones(&self, color: Color) -> impl Iterator<Item = Point> + '_ {
        let target = Intersection::from(color);
        self.points()
            .filter(move |&(row, col)| self.cells[self.idx(row, col)] == target)
    }

    /// True if no stone has been placed anywhere.
    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    fn row_string(&self, row: usize) -> String {
        (0..self.size)
            .map(|col| self.cells[self.idx(row, col)].glyph())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self.cells[self.idx(row, col)].glyph();
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<String> = (0..self.size).map(|row| self.row_string(row)).collect();
        let mut state = serializer.serialize_struct("Board", 2)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}
