//! Connected-group and liberty analysis.
//!
//! Groups are never stored: they are recomputed from a [`Board`] snapshot
//! whenever they are needed. Traversal is iterative with an explicit stack,
//! so stack usage does not grow with the board size.

use std::collections::BTreeSet;

use crate::board::{Board, Color, Intersection, Point};

/// A maximal 4-connected set of same-colored stones and its liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    pub stones: BTreeSet<Point>,
    pub liberties: BTreeSet<Point>,
}

impl Group {
    /// Number of stones in the group.
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// True if the group has no liberties left.
    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }

    pub fn in_atari(&self) -> bool {
        self.liberties.len() == 1
    }
}

/// Find the group containing `(row, col)` along with its liberties.
///
/// Returns `None` if the point is empty or off the board.
pub fn group_and_liberties(board: &Board, row: usize, col: usize) -> Option<Group> {
    let color = board.get(row, col).ok()?.color()?;
    let mut visited = vec![false; board.size() * board.size()];
    Some(flood(board, (row, col), color, &mut visited))
}

/// Flood-fill from `start`, marking every stone of the group in `visited`.
fn flood(board: &Board, start: Point, color: Color, visited: &mut [bool]) -> Group {
    let size = board.size();
    let target = Intersection::from(color);
    let mut stones = BTreeSet::new();
    let mut liberties = BTreeSet::new();
    let mut stack = vec![start];

    while let Some((r, c)) = stack.pop() {
        let i = r * size + c;
        if visited[i] {
            continue;
        }
        visited[i] = true;
        stones.insert((r, c));

        for (nr, nc) in board.neighbors(r, c) {
            match board.get(nr, nc) {
                Ok(Intersection::Empty) => {
                    liberties.insert((nr, nc));
                }
                Ok(s) if s == target && !visited[nr * size + nc] => stack.push((nr, nc)),
                _ => {}
            }
        }
    }

    Group {
        color,
        stones,
        liberties,
    }
}

/// All groups of `color` with no liberties, in row-major order of their first stone.
///
/// Every intersection is visited at most once: stones already assigned to a
/// group are skipped as seeds.
pub fn dead_groups(board: &Board, color: Color) -> Vec<Group> {
    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut dead = Vec::new();

    for (row, col) in board.stones(color) {
        if visited[row * size + col] {
            continue;
        }
        let group = flood(board, (row, col), color, &mut visited);
        if group.is_dead() {
            dead.push(group);
        }
    }
    dead
}
