//! Legal-move and flip generation.
//!
//! A move is legal iff its target cell is empty and, in at least one of the
//! eight directions, a contiguous run of one or more opponent disks is
//! immediately bounded by one of the mover's own disks.

use crate::board::Board;
use crate::types::{Move, Side};

pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn on_board(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// Length of the opponent run that `side` would capture by playing at
/// (row, col) and scanning outward along one direction. Zero when the run
/// is unbounded, empty, or ends at the board edge.
fn run_length(board: &Board, row: u8, col: u8, side: Side, dir: (i8, i8)) -> u8 {
    let opponent = side.other();
    let mut run = 0u8;
    let mut r = row as i8 + dir.0;
    let mut c = col as i8 + dir.1;
    while on_board(r, c) {
        match board.disk_at(r as u8, c as u8) {
            Some(s) if s == opponent => run += 1,
            Some(_) => return run,
            None => return 0,
        }
        r += dir.0;
        c += dir.1;
    }
    0
}

/// All legal moves for `side`, enumerated in row-major order. The fixed
/// order makes tie-breaking in the search deterministic.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    for row in 0..8u8 {
        for col in 0..8u8 {
            if board.disk_at(row, col).is_some() {
                continue;
            }
            if DIRECTIONS
                .iter()
                .any(|&dir| run_length(board, row, col, side, dir) > 0)
            {
                out.push(Move::new(row, col));
            }
        }
    }
    out
}

/// Early-exit check used for turn-skipping and terminal detection.
pub fn has_any_legal_move(board: &Board, side: Side) -> bool {
    for row in 0..8u8 {
        for col in 0..8u8 {
            if board.disk_at(row, col).is_some() {
                continue;
            }
            if DIRECTIONS
                .iter()
                .any(|&dir| run_length(board, row, col, side, dir) > 0)
            {
                return true;
            }
        }
    }
    false
}

/// Every opponent disk captured by playing `mv` for `side`, across all
/// eight directions. Empty iff the move is illegal.
pub fn flips_for(board: &Board, mv: Move, side: Side) -> Vec<(u8, u8)> {
    if mv.row >= 8 || mv.col >= 8 || board.disk_at(mv.row, mv.col).is_some() {
        return Vec::new();
    }
    let mut flips = Vec::new();
    for &dir in &DIRECTIONS {
        let run = run_length(board, mv.row, mv.col, side, dir);
        let mut r = mv.row as i8 + dir.0;
        let mut c = mv.col as i8 + dir.1;
        for _ in 0..run {
            flips.push((r as u8, c as u8));
            r += dir.0;
            c += dir.1;
        }
    }
    flips
}

/// Number of empty cells adjacent (8-neighborhood) to at least one of
/// `side`'s disks; each empty cell is counted once. This is the raw input
/// to the potential-mobility heuristic.
pub fn empty_neighbors(board: &Board, side: Side) -> u32 {
    let mut seen = [false; 64];
    let mut count = 0u32;
    for row in 0..8u8 {
        for col in 0..8u8 {
            if board.disk_at(row, col) != Some(side) {
                continue;
            }
            for &(dr, dc) in &DIRECTIONS {
                let r = row as i8 + dr;
                let c = col as i8 + dc;
                if !on_board(r, c) {
                    continue;
                }
                let i = r as usize * 8 + c as usize;
                if board.disk_at(r as u8, c as u8).is_none() && !seen[i] {
                    seen[i] = true;
                    count += 1;
                }
            }
        }
    }
    count
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
