//! Positional evaluation functions.
//!
//! Every heuristic maps (board, perspective) to a score in [-100, 100]
//! where positive favors `perspective`. They are pure: no mutation, no
//! shared state, deterministic for fixed inputs, so they can be called
//! from parallel searches freely. The closed set of variants is selected
//! by tagged enumeration rather than function pointers passed by name.

use std::fmt;
use std::str::FromStr;

use othello_core::{
    empty_neighbors, legal_moves, Board, InvalidConfigurationError, Move, Side, DIRECTIONS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    DiskParity,
    Mobility,
    Corners,
    Stability,
    Hybrid,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::DiskParity,
        Heuristic::Mobility,
        Heuristic::Corners,
        Heuristic::Stability,
        Heuristic::Hybrid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::DiskParity => "parity",
            Heuristic::Mobility => "mobility",
            Heuristic::Corners => "corners",
            Heuristic::Stability => "stability",
            Heuristic::Hybrid => "hybrid",
        }
    }

    pub fn evaluate(self, board: &Board, perspective: Side) -> f64 {
        match self {
            Heuristic::DiskParity => disk_parity(board, perspective),
            Heuristic::Mobility => mobility(board, perspective),
            Heuristic::Corners => corners(board, perspective),
            Heuristic::Stability => stability(board, perspective),
            Heuristic::Hybrid => hybrid(board, perspective),
        }
    }
}

impl FromStr for Heuristic {
    type Err = InvalidConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parity" | "disk-parity" | "coin-parity" => Ok(Heuristic::DiskParity),
            "mobility" => Ok(Heuristic::Mobility),
            "corners" | "corner" => Ok(Heuristic::Corners),
            "stability" => Ok(Heuristic::Stability),
            "hybrid" => Ok(Heuristic::Hybrid),
            _ => Err(InvalidConfigurationError::UnknownHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized contrast `100 * (my - opp) / (my + opp)`, defined as 0 when
/// both quantities are 0. Keeps every component score in [-100, 100] so
/// the hybrid can blend them linearly.
fn contrast(my: f64, opp: f64) -> f64 {
    if my + opp == 0.0 {
        0.0
    } else {
        100.0 * (my - opp) / (my + opp)
    }
}

/// Disk-count differential. The denominator is never 0 on a reachable
/// board (at least the four center disks are present).
pub fn disk_parity(board: &Board, perspective: Side) -> f64 {
    contrast(
        board.count(perspective) as f64,
        board.count(perspective.other()) as f64,
    )
}

/// Mean of actual mobility (legal-move counts) and potential mobility
/// (empty cells bordering the opposing side's disks).
pub fn mobility(board: &Board, perspective: Side) -> f64 {
    let opponent = perspective.other();

    let my_actual = legal_moves(board, perspective).len() as f64;
    let opp_actual = legal_moves(board, opponent).len() as f64;

    // A side's potential mobility counts empties next to the *other*
    // side's disks: future squares it could contest.
    let my_potential = empty_neighbors(board, opponent) as f64;
    let opp_potential = empty_neighbors(board, perspective) as f64;

    (contrast(my_actual, opp_actual) + contrast(my_potential, opp_potential)) / 2.0
}

const CORNERS: [(u8, u8); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

const CORNER_CAPTURED_WEIGHT: f64 = 2.0;
const CORNER_POTENTIAL_WEIGHT: f64 = 1.0;

/// Corner occupancy weighted above corner reachability (a corner that is
/// a legal move this turn).
pub fn corners(board: &Board, perspective: Side) -> f64 {
    let opponent = perspective.other();

    let mut my_captured = 0.0;
    let mut opp_captured = 0.0;
    for &(r, c) in &CORNERS {
        match board.disk_at(r, c) {
            Some(s) if s == perspective => my_captured += 1.0,
            Some(_) => opp_captured += 1.0,
            None => {}
        }
    }

    let is_corner = |mv: &Move| CORNERS.contains(&(mv.row, mv.col));
    let my_potential = legal_moves(board, perspective)
        .iter()
        .filter(|m| is_corner(m))
        .count() as f64;
    let opp_potential = legal_moves(board, opponent)
        .iter()
        .filter(|m| is_corner(m))
        .count() as f64;

    contrast(
        CORNER_CAPTURED_WEIGHT * my_captured + CORNER_POTENTIAL_WEIGHT * my_potential,
        CORNER_CAPTURED_WEIGHT * opp_captured + CORNER_POTENTIAL_WEIGHT * opp_potential,
    )
}

const STABLE_WEIGHT: f64 = 2.0;
const UNSTABLE_WEIGHT: f64 = 1.0;

/// Stable-versus-unstable disk contrast.
///
/// Stability here is the conservative full-neighborhood approximation: a
/// disk whose every in-bounds neighbor is occupied is counted stable. That
/// under- and over-estimates true (proof-level) stability in rare shapes
/// but is cheap and monotone enough for evaluation. A disk is unstable
/// when it sits next to the landing square of an opponent legal move;
/// counted per move, so a disk threatened twice weighs twice.
pub fn stability(board: &Board, perspective: Side) -> f64 {
    let opponent = perspective.other();

    let my_stable = stable_disks(board, perspective) as f64;
    let opp_stable = stable_disks(board, opponent) as f64;

    let my_unstable = unstable_disks(board, perspective, &legal_moves(board, opponent)) as f64;
    let opp_unstable = unstable_disks(board, opponent, &legal_moves(board, perspective)) as f64;

    let stable_diff = contrast(my_stable, opp_stable);
    // Fewer threatened disks is better, so the contrast is inverted.
    let unstable_diff = contrast(opp_unstable, my_unstable);

    (STABLE_WEIGHT * stable_diff + UNSTABLE_WEIGHT * unstable_diff)
        / (STABLE_WEIGHT + UNSTABLE_WEIGHT)
}

fn stable_disks(board: &Board, side: Side) -> u32 {
    let mut count = 0;
    for row in 0..8u8 {
        for col in 0..8u8 {
            if board.disk_at(row, col) != Some(side) {
                continue;
            }
            let surrounded = DIRECTIONS.iter().all(|&(dr, dc)| {
                let r = row as i8 + dr;
                let c = col as i8 + dc;
                !(0..8).contains(&r)
                    || !(0..8).contains(&c)
                    || board.disk_at(r as u8, c as u8).is_some()
            });
            if surrounded {
                count += 1;
            }
        }
    }
    count
}

fn unstable_disks(board: &Board, side: Side, opponent_moves: &[Move]) -> u32 {
    let mut count = 0;
    for mv in opponent_moves {
        for &(dr, dc) in &DIRECTIONS {
            let r = mv.row as i8 + dr;
            let c = mv.col as i8 + dc;
            if (0..8).contains(&r)
                && (0..8).contains(&c)
                && board.disk_at(r as u8, c as u8) == Some(side)
            {
                count += 1;
            }
        }
    }
    count
}

const MOBILITY_WEIGHT: f64 = 20.0;
const CORNER_WEIGHT: f64 = 50.0;
const STABILITY_WEIGHT: f64 = 40.0;

/// Parity weight `(1 + n/64)^6` for `n` disks on the board: grows
/// super-linearly toward the endgame, where raw disk count decides.
pub fn parity_weight(total_disks: u8) -> f64 {
    (1.0 + total_disks as f64 / 64.0).powi(6)
}

/// Weighted mean of the four component heuristics. Each component is
/// computed independently on the same board and perspective; dividing by
/// the weight sum keeps the blend inside [-100, 100].
pub fn hybrid(board: &Board, perspective: Side) -> f64 {
    let parity = disk_parity(board, perspective);
    let mobility = mobility(board, perspective);
    let corners = corners(board, perspective);
    let stability = stability(board, perspective);

    let w_parity = parity_weight(board.total_disks());
    let total_weight = w_parity + MOBILITY_WEIGHT + CORNER_WEIGHT + STABILITY_WEIGHT;

    (w_parity * parity
        + MOBILITY_WEIGHT * mobility
        + CORNER_WEIGHT * corners
        + STABILITY_WEIGHT * stability)
        / total_weight
}

#[cfg(test)]
#[path = "heuristics_tests.rs"]
mod heuristics_tests;
