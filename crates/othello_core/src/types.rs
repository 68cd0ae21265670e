use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// A placement on the board. The acting side is supplied separately when
/// the move is applied, so a `Move` carries no board or side reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8, // 0..8, row 0 at the top
    pub col: u8, // 0..8
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Algebraic coordinate, column letter then 1-based row: (2, 3) -> "d3".
    pub fn to_coord(self) -> String {
        let c = (b'a' + self.col) as char;
        let r = (b'1' + self.row) as char;
        format!("{c}{r}")
    }

    pub fn from_coord(s: &str) -> Option<Move> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return None;
        }
        Some(Move::new(b[1] - b'1', b[0] - b'a'))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coord())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
