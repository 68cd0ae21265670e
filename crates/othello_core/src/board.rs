use std::fmt;

use crate::error::IllegalMoveError;
use crate::movegen;
use crate::types::{Move, Side};

pub const BOARD_SIZE: u8 = 8;

/// An Othello position. Value-like and cheap to copy; every mutation
/// produces a fresh `Board`, so positions can be shared freely across
/// search branches without synchronization.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Side>; 64],
    black: u8,
    white: u8,
}

fn idx(row: u8, col: u8) -> usize {
    row as usize * 8 + col as usize
}

impl Board {
    /// Standard opening position: four center disks in the diagonal
    /// arrangement, White on d4/e5 and Black on e4/d5.
    pub fn initial() -> Self {
        let mut cells = [None; 64];
        cells[idx(3, 3)] = Some(Side::White);
        cells[idx(4, 4)] = Some(Side::White);
        cells[idx(3, 4)] = Some(Side::Black);
        cells[idx(4, 3)] = Some(Side::Black);
        Board {
            cells,
            black: 2,
            white: 2,
        }
    }

    /// Parse an 8-line grid of `.`, `B`, `W` (whitespace-separated rows,
    /// row 0 first). Used by tests and position setup; panics on
    /// malformed input.
    pub fn from_grid(grid: &str) -> Self {
        let rows: Vec<&str> = grid.split_whitespace().collect();
        assert!(rows.len() == 8, "expected 8 rows, got {}", rows.len());

        let mut cells = [None; 64];
        let mut black = 0u8;
        let mut white = 0u8;
        for (r, row) in rows.iter().enumerate() {
            assert!(row.len() == 8, "row {} has {} cells", r, row.len());
            for (c, ch) in row.chars().enumerate() {
                cells[r * 8 + c] = match ch {
                    '.' => None,
                    'B' => {
                        black += 1;
                        Some(Side::Black)
                    }
                    'W' => {
                        white += 1;
                        Some(Side::White)
                    }
                    _ => panic!("invalid cell char: {}", ch),
                };
            }
        }
        Board {
            cells,
            black,
            white,
        }
    }

    pub fn disk_at(&self, row: u8, col: u8) -> Option<Side> {
        self.cells[idx(row, col)]
    }

    pub fn count(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    pub fn total_disks(&self) -> u8 {
        self.black + self.white
    }

    /// Disk count difference from `side`'s point of view.
    pub fn disk_difference(&self, side: Side) -> i32 {
        self.count(side) as i32 - self.count(side.other()) as i32
    }

    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        movegen::legal_moves(self, side)
    }

    pub fn has_any_legal_move(&self, side: Side) -> bool {
        movegen::has_any_legal_move(self, side)
    }

    /// Play `mv` for `side`, flipping every captured disk, and return the
    /// resulting position. The receiver is left untouched.
    pub fn apply_move(&self, mv: Move, side: Side) -> Result<Board, IllegalMoveError> {
        let flips = movegen::flips_for(self, mv, side);
        if flips.is_empty() {
            return Err(IllegalMoveError { mv, side });
        }

        let mut next = *self;
        next.place(mv.row, mv.col, side);
        for (r, c) in flips {
            next.flip(r, c, side);
        }
        Ok(next)
    }

    /// Neither side has a legal move. Note this is the terminal condition,
    /// not the board being full.
    pub fn is_terminal(&self) -> bool {
        !self.has_any_legal_move(Side::Black) && !self.has_any_legal_move(Side::White)
    }

    /// Side with more disks, or `None` on a draw. Only meaningful once the
    /// position is terminal.
    pub fn winner(&self) -> Option<Side> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn place(&mut self, row: u8, col: u8, side: Side) {
        debug_assert!(self.cells[idx(row, col)].is_none());
        self.cells[idx(row, col)] = Some(side);
        match side {
            Side::Black => self.black += 1,
            Side::White => self.white += 1,
        }
    }

    fn flip(&mut self, row: u8, col: u8, side: Side) {
        debug_assert_eq!(self.cells[idx(row, col)], Some(side.other()));
        self.cells[idx(row, col)] = Some(side);
        match side {
            Side::Black => {
                self.black += 1;
                self.white -= 1;
            }
            Side::White => {
                self.white += 1;
                self.black -= 1;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for r in 0..BOARD_SIZE {
            write!(f, "{} ", r + 1)?;
            for c in 0..BOARD_SIZE {
                let ch = match self.disk_at(r, c) {
                    Some(Side::Black) => 'B',
                    Some(Side::White) => 'W',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "Black {} - {} White", self.black, self.white)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
