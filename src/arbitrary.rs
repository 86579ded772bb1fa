use quickcheck::Arbitrary;

use crate::board::{Board, Color};

/// A small board with stones scattered at random, without regard to legality.
#[derive(Clone, Debug)]
pub struct ArbBoard {
    pub board: Board,
}

impl Arbitrary for Color {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Color::Black, Color::White]).unwrap()
    }
}

impl Arbitrary for ArbBoard {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = 1 + usize::arbitrary(g) % 9;
        let empty = Board::new(size).unwrap();
        let mut board = empty.clone();
        for (row, col) in empty.points() {
            // Roughly a third empty, a third of each color.
            match u8::arbitrary(g) % 3 {
                0 => {}
                1 => board = board.with_stone(row, col, Color::Black).unwrap(),
                _ => board = board.with_stone(row, col, Color::White).unwrap(),
            }
        }
        ArbBoard { board }
    }
}

/// A random point, reduced modulo the board size by the caller.
#[derive(Clone, Copy, Debug)]
pub struct ArbPoint {
    pub row: usize,
    pub col: usize,
}

impl Arbitrary for ArbPoint {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        ArbPoint {
            row: usize::arbitrary(g),
            col: usize::arbitrary(g),
        }
    }
}
