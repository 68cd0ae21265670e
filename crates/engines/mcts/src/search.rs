//! UCT tree search over Othello positions.
//!
//! The tree is an index-based arena: nodes refer to parents and children
//! by `usize`, so growing it never invalidates references. Each node
//! banks its statistics for the side that moved into it, which keeps
//! UCB1 selection correct across pass edges where the side to move does
//! not alternate.

use othello_core::{legal_moves, Board, Move, Side};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::MctsConfig;

struct Node {
    board: Board,
    to_move: Side,
    /// Edge from the parent. `None` at the root and on pass edges.
    mv: Option<Move>,
    parent: Option<usize>,
    /// The side whose statistics this node banks.
    actor: Side,
    children: Vec<usize>,
    untried: Vec<Move>,
    pending_pass: bool,
    visits: u32,
    wins: f64,
}

impl Node {
    fn new(
        board: Board,
        to_move: Side,
        mv: Option<Move>,
        parent: Option<usize>,
        actor: Side,
    ) -> Self {
        let untried = legal_moves(&board, to_move);
        let pending_pass = untried.is_empty() && !board.is_terminal();
        Self {
            board,
            to_move,
            mv,
            parent,
            actor,
            children: Vec::new(),
            untried,
            pending_pass,
            visits: 0,
            wins: 0.0,
        }
    }

    fn fully_expanded(&self) -> bool {
        self.untried.is_empty() && !self.pending_pass
    }
}

/// Runs `config.iterations` rounds of select/expand/rollout/backpropagate
/// and returns the most-visited root move. `None` when `side` has no
/// legal move. `playouts` counts every random playout run.
pub fn search_move<R: Rng>(
    board: &Board,
    side: Side,
    config: &MctsConfig,
    playouts: &mut u64,
    rng: &mut R,
) -> Option<Move> {
    if !board.has_any_legal_move(side) {
        return None;
    }

    let mut tree = vec![Node::new(*board, side, None, None, side)];

    for _ in 0..config.iterations {
        let mut idx = 0;
        while tree[idx].fully_expanded() && !tree[idx].children.is_empty() {
            idx = select_child(&tree, idx, config.exploration);
        }
        if !tree[idx].board.is_terminal() {
            idx = expand(&mut tree, idx, rng);
        }
        for _ in 0..config.rollouts {
            let end = rollout(&tree[idx].board, tree[idx].to_move, rng);
            *playouts += 1;
            backpropagate(&mut tree, idx, &end);
        }
    }

    let best = tree[0]
        .children
        .iter()
        .copied()
        .max_by_key(|&c| tree[c].visits)?;
    tree[best].mv
}

/// UCB1 over the children of `idx`. Every child has at least one visit
/// by construction, so the ratios are well defined.
fn select_child(tree: &[Node], idx: usize, exploration: f64) -> usize {
    let parent_visits = tree[idx].visits as f64;
    let mut best = tree[idx].children[0];
    let mut best_score = f64::NEG_INFINITY;
    for &c in &tree[idx].children {
        let child = &tree[c];
        let v = child.visits as f64;
        let score = child.wins / v + exploration * (parent_visits.ln() / v).sqrt();
        if score > best_score {
            best_score = score;
            best = c;
        }
    }
    best
}

/// Attaches one new child to `idx`: a random untried move, or the single
/// pass edge when the side to move is blocked.
fn expand<R: Rng>(tree: &mut Vec<Node>, idx: usize, rng: &mut R) -> usize {
    let actor = tree[idx].to_move;
    let (board, mv) = {
        let node = &mut tree[idx];
        if node.pending_pass {
            node.pending_pass = false;
            (node.board, None)
        } else {
            let i = rng.gen_range(0..node.untried.len());
            let m = node.untried.swap_remove(i);
            let next = node
                .board
                .apply_move(m, node.to_move)
                .expect("generated move must apply");
            (next, Some(m))
        }
    };

    let child_idx = tree.len();
    tree.push(Node::new(board, actor.other(), mv, Some(idx), actor));
    tree[idx].children.push(child_idx);
    child_idx
}

/// Plays uniformly random moves (passing when blocked) until the game
/// ends, returning the final board.
fn rollout<R: Rng>(start: &Board, to_move: Side, rng: &mut R) -> Board {
    let mut board = *start;
    let mut side = to_move;
    while !board.is_terminal() {
        if let Some(&mv) = legal_moves(&board, side).choose(rng) {
            board = board
                .apply_move(mv, side)
                .expect("generated move must apply");
        }
        side = side.other();
    }
    board
}

fn reward(board: &Board, side: Side) -> f64 {
    match board.winner() {
        Some(winner) if winner == side => 1.0,
        Some(_) => 0.0,
        None => 0.5,
    }
}

fn backpropagate(tree: &mut [Node], mut idx: usize, end: &Board) {
    loop {
        let actor = tree[idx].actor;
        tree[idx].visits += 1;
        tree[idx].wins += reward(end, actor);
        match tree[idx].parent {
            Some(parent) => idx = parent,
            None => break,
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
