//! Depth-limited minimax with alpha-beta pruning

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::core::game::Game;

use super::node::{Move, SearchNode};

/// Bounds on one search. Depth is always honoured; time and node budgets are
/// only checked before a node is expanded, and never during the first ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub depth: u32,
    pub move_time: Option<Duration>,
    pub nodes: Option<u64>,
}

impl SearchLimits {
    pub fn depth(depth: u32) -> Self {
        Self {
            depth,
            move_time: None,
            nodes: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: f32,
    /// Deepest fully searched depth
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

struct SearchContext {
    nodes: u64,
    deadline: Option<Instant>,
    max_nodes: Option<u64>,
    interruptible: bool,
    aborted: bool,
}

impl SearchContext {
    fn unlimited() -> Self {
        Self {
            nodes: 0,
            deadline: None,
            max_nodes: None,
            interruptible: false,
            aborted: false,
        }
    }

    fn should_stop(&mut self) -> bool {
        if !self.interruptible || self.aborted {
            return self.aborted;
        }

        let out_of_time = self.deadline.is_some_and(|deadline| Instant::now() >= deadline);
        let out_of_nodes = self.max_nodes.is_some_and(|max| self.nodes >= max);
        self.aborted = out_of_time || out_of_nodes;
        self.aborted
    }
}

/// Minimax value of `node` for the side the tree was rooted for, searching
/// `depth` plies within the window `alpha..beta`
pub fn alphabeta(node: &mut SearchNode, depth: u32, alpha: f32, beta: f32, maximizing: bool) -> f32 {
    search_node(node, depth, alpha, beta, maximizing, &mut SearchContext::unlimited())
}

fn search_node(
    node: &mut SearchNode,
    depth: u32,
    mut alpha: f32,
    mut beta: f32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> f32 {
    ctx.nodes += 1;

    if depth == 0 || node.is_terminal() || ctx.should_stop() {
        return node.value();
    }

    if maximizing {
        let mut value = f32::NEG_INFINITY;
        for mut child in node.children() {
            value = value.max(search_node(&mut child, depth - 1, alpha, beta, false, ctx));
            alpha = alpha.max(value);
            if beta <= alpha {
                trace!(depth, alpha, beta, "beta cutoff");
                break;
            }
        }
        value
    } else {
        let mut value = f32::INFINITY;
        for mut child in node.children() {
            value = value.min(search_node(&mut child, depth - 1, alpha, beta, true, ctx));
            beta = beta.min(value);
            if beta <= alpha {
                trace!(depth, alpha, beta, "alpha cutoff");
                break;
            }
        }
        value
    }
}

/// Best reply at a fixed depth, or `None` if there is no legal move or the
/// budget ran out before every candidate was scored
fn search_root(game: &Game, depth: u32, ctx: &mut SearchContext) -> Option<(SearchNode, f32)> {
    let mut root = SearchNode::root(game.clone(), !game.side_to_move());
    let mut best: Option<(SearchNode, f32)> = None;

    for mut child in root.children() {
        let alpha = best.as_ref().map_or(f32::NEG_INFINITY, |(_, score)| *score);
        let score = search_node(&mut child, depth - 1, alpha, f32::INFINITY, false, ctx);
        if ctx.aborted {
            return None;
        }
        if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
            best = Some((child, score));
        }
    }

    best
}

/// Iterative deepening from depth 1 up to `limits.depth`. Moves for the side
/// opposite to `game.side_to_move()`, whose turn is considered finished.
/// Returns the chosen move and the position it leads to.
pub fn search(game: &Game, limits: &SearchLimits) -> Option<(SearchResult, Game)> {
    let start = Instant::now();
    let max_depth = limits.depth.max(1);

    let mut ctx = SearchContext {
        nodes: 0,
        deadline: limits.move_time.map(|time| start + time),
        max_nodes: limits.nodes,
        interruptible: false,
        aborted: false,
    };
    let mut best: Option<(SearchNode, f32, u32)> = None;

    for depth in 1..=max_depth {
        ctx.interruptible = depth > 1;

        let Some((node, score)) = search_root(game, depth, &mut ctx) else {
            break;
        };

        debug!(
            depth,
            score,
            nodes = ctx.nodes,
            mv = %node.mv().map(ToString::to_string).unwrap_or_default(),
            "depth completed"
        );
        best = Some((node, score, depth));
    }

    let (node, score, depth) = best?;
    let best_move = node.mv()?.clone();
    let result = SearchResult {
        best_move,
        score,
        depth,
        nodes: ctx.nodes,
        elapsed: start.elapsed(),
    };

    info!(
        mv = %result.best_move,
        score = result.score,
        depth = result.depth,
        nodes = result.nodes,
        "move chosen"
    );

    Some((result, node.into_game()))
}

/// Search `depth` plies, play the best move on `game` and end the turn.
/// Leaves `game` unchanged and returns `None` when no move is legal.
pub fn choose_move(game: &mut Game, depth: u32) -> Option<SearchResult> {
    let (result, next) = search(game, &SearchLimits::depth(depth))?;
    *game = next;
    game.end_turn();
    Some(result)
}
