//! Depth-limited minimax over the shared game tree.
//!
//! # Algorithm
//!
//! The first player maximizes `advantage(FIRST)`, the second minimizes it.
//! Terminal positions score `±WIN_SCORE` (or 0 for a draw), strictly outside
//! every heuristic value, so a forced win always beats a good-looking
//! position.
//!
//! Children are searched in generator order and the first strict
//! improvement wins ties. Two prunings keep that choice intact:
//!
//! - **Alpha-beta**: fail-soft cutoffs once `alpha >= beta`
//! - **Bounds**: a child whose optimistic value (exact when terminal, the
//!   heuristic's upper bound when it would be a leaf, `WIN_SCORE` otherwise)
//!   cannot strictly beat the current best is skipped without a recursive
//!   call
//!
//! # Caching
//!
//! Every searched node stores its value, best move, depth, and bound type
//! under `"Minimax-score"`. Exact entries searched to the same depth are
//! reused by later calls on the same tree.

use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerId, SearchError, WIN_SCORE};
use crate::rules::{GameState, Heuristic, MoveGenerator, Rules};
use crate::tree::{GameTree, NodeId};

use super::options::MinimaxOptions;

/// Per-node cache namespace.
pub const CACHE_KEY: &str = "Minimax-score";

/// How a cached value relates to the true minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,
    /// True value is at least the stored one.
    Lower,
    /// True value is at most the stored one.
    Upper,
}

/// Minimax result memoized on a node.
#[derive(Clone, Debug)]
pub struct ScoreEntry<M> {
    pub value: f64,
    pub best_move: Option<M>,
    pub depth: u32,
    pub bound: BoundType,
}

/// Best move and its value, from the first player's point of view.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<M> {
    pub best_move: M,
    pub value: f64,
}

/// Counters for the most recent search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MinimaxStats {
    /// Recursive evaluations, leaves included.
    pub nodes_visited: u64,

    /// Alpha-beta cutoffs.
    pub cutoffs: u64,

    /// Children skipped by heuristic bounds.
    pub bound_prunes: u64,

    /// Exact cache entries reused.
    pub cache_hits: u64,

    /// Wall-clock time of the search.
    pub elapsed: Duration,
}

/// Minimax searcher bound to one game.
pub struct Minimax<'a, R: Rules, G, H> {
    rules: &'a R,
    generator: &'a G,
    heuristic: &'a H,
    config: &'a R::Config,
    options: MinimaxOptions,
    stats: MinimaxStats,
    rng: GameRng,
}

impl<'a, R, G, H> Minimax<'a, R, G, H>
where
    R: Rules,
    G: MoveGenerator<R>,
    H: Heuristic<R>,
{
    pub fn new(
        rules: &'a R,
        generator: &'a G,
        heuristic: &'a H,
        config: &'a R::Config,
        options: MinimaxOptions,
    ) -> Self {
        let rng = GameRng::new(options.seed);
        Self {
            rules,
            generator,
            heuristic,
            config,
            options,
            stats: MinimaxStats::default(),
            rng,
        }
    }

    #[must_use]
    pub fn options(&self) -> &MinimaxOptions {
        &self.options
    }

    /// Counters for the most recent search.
    #[must_use]
    pub fn stats(&self) -> &MinimaxStats {
        &self.stats
    }

    /// Best move at `node`.
    pub fn choose_next_move(
        &mut self,
        tree: &mut GameTree<R>,
        node: NodeId,
    ) -> Result<R::Move, SearchError> {
        self.evaluate(tree, node).map(|outcome| outcome.best_move)
    }

    /// Best move at `node` together with its value.
    ///
    /// # Errors
    /// - `GameOver` if the node is terminal
    /// - `NoAvailableMoves` if the generator lists nothing
    /// - `DepthTooLow` if `max_depth` is zero
    pub fn evaluate(
        &mut self,
        tree: &mut GameTree<R>,
        node: NodeId,
    ) -> Result<SearchOutcome<R::Move>, SearchError> {
        let status = tree.node(node).status();
        if status.is_over() {
            warn!("minimax called on finished game: {:?}", status);
            return Err(SearchError::GameOver(status));
        }
        if self.options.max_depth < 1 {
            warn!("minimax called with depth 0");
            return Err(SearchError::DepthTooLow);
        }
        let moves = self.generator.list_moves(tree.view(node), self.config);
        if moves.is_empty() {
            warn!("minimax called on a position with no moves");
            return Err(SearchError::NoAvailableMoves);
        }

        debug!(
            "minimax search depth: {}, root moves: {}",
            self.options.max_depth,
            moves.len()
        );
        self.stats = MinimaxStats::default();
        let start = Instant::now();

        let depth = self.options.max_depth;
        let maximizing = tree.node(node).state().current_player() == PlayerId::FIRST;
        let mut alpha = -WIN_SCORE;
        let mut beta = WIN_SCORE;
        let mut best: Option<(f64, R::Move)> = None;
        let mut tied: Vec<R::Move> = Vec::new();

        for mv in moves {
            let child = tree.child(self.rules, self.config, node, &mv);

            if self.options.random {
                // Full window keeps every root value exact for tie detection.
                let value = self.recurse(tree, child, depth - 1, -WIN_SCORE, WIN_SCORE);
                trace!("root move {:?} scored {}", mv, value);
                match &best {
                    Some((best_value, _)) if value == *best_value => tied.push(mv),
                    Some((best_value, _)) if !improves(value, *best_value, maximizing) => {}
                    _ => {
                        tied.clear();
                        tied.push(mv.clone());
                        best = Some((value, mv));
                    }
                }
                continue;
            }

            if let Some((best_value, _)) = &best {
                if self.bounds_prune(tree, child, depth - 1, *best_value, maximizing) {
                    continue;
                }
            }

            let value = self.recurse(tree, child, depth - 1, alpha, beta);
            trace!("root move {:?} scored {}", mv, value);
            if best
                .as_ref()
                .map_or(true, |(best_value, _)| improves(value, *best_value, maximizing))
            {
                best = Some((value, mv));
            }
            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
            if self.options.prune && is_win(value, maximizing) {
                break;
            }
        }

        let (value, mut best_move) = best.ok_or(SearchError::NoAvailableMoves)?;
        if self.options.random && tied.len() > 1 {
            if let Some(choice) = self.rng.choose(&tied) {
                best_move = choice.clone();
            }
            debug!(
                "minimax broke a {}-way tie with seed {}",
                tied.len(),
                self.rng.seed()
            );
        }

        tree.node_mut(node).put_cache(
            CACHE_KEY,
            ScoreEntry {
                value,
                best_move: Some(best_move.clone()),
                depth,
                bound: BoundType::Exact,
            },
        );

        self.stats.elapsed = start.elapsed();
        debug!(
            "minimax chose {:?} (value {}) after {} nodes, {} cutoffs, {} bound prunes, {} cache hits in {:?}",
            best_move,
            value,
            self.stats.nodes_visited,
            self.stats.cutoffs,
            self.stats.bound_prunes,
            self.stats.cache_hits,
            self.stats.elapsed
        );

        Ok(SearchOutcome { best_move, value })
    }

    fn recurse(
        &mut self,
        tree: &mut GameTree<R>,
        id: NodeId,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.stats.nodes_visited += 1;

        if let Some(value) = tree.node(id).status().terminal_value() {
            return value.advantage(PlayerId::FIRST);
        }
        if depth == 0 {
            return self.leaf_value(tree, id);
        }

        if let Some(entry) = tree.node(id).cache::<ScoreEntry<R::Move>>(CACHE_KEY) {
            if entry.bound == BoundType::Exact && entry.depth == depth {
                self.stats.cache_hits += 1;
                return entry.value;
            }
        }

        let moves = self.generator.list_moves(tree.view(id), self.config);
        if moves.is_empty() {
            return self.leaf_value(tree, id);
        }

        let maximizing = tree.node(id).state().current_player() == PlayerId::FIRST;
        let (original_alpha, original_beta) = (alpha, beta);
        let mut best: Option<(f64, R::Move)> = None;

        for mv in moves {
            let child = tree.child(self.rules, self.config, id, &mv);

            if let Some((best_value, _)) = &best {
                if self.bounds_prune(tree, child, depth - 1, *best_value, maximizing) {
                    continue;
                }
            }

            let value = self.recurse(tree, child, depth - 1, alpha, beta);
            if best
                .as_ref()
                .map_or(true, |(best_value, _)| improves(value, *best_value, maximizing))
            {
                best = Some((value, mv));
            }

            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
            if self.options.prune {
                if is_win(value, maximizing) {
                    break;
                }
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        let Some((value, best_move)) = best else {
            return self.leaf_value(tree, id);
        };

        let bound = if value <= original_alpha && original_alpha > -WIN_SCORE {
            BoundType::Upper
        } else if value >= original_beta && original_beta < WIN_SCORE {
            BoundType::Lower
        } else {
            BoundType::Exact
        };
        tree.node_mut(id).put_cache(
            CACHE_KEY,
            ScoreEntry {
                value,
                best_move: Some(best_move),
                depth,
                bound,
            },
        );

        value
    }

    fn leaf_value(&self, tree: &GameTree<R>, id: NodeId) -> f64 {
        self.heuristic
            .board_value(tree.view(id), self.config)
            .advantage(PlayerId::FIRST)
    }

    /// Skip `child` if even its optimistic value cannot beat `best_value`.
    fn bounds_prune(
        &mut self,
        tree: &GameTree<R>,
        child: NodeId,
        child_depth: u32,
        best_value: f64,
        maximizing: bool,
    ) -> bool {
        if !self.options.prune {
            return false;
        }
        let optimistic = match tree.node(child).status().terminal_value() {
            Some(value) => value.advantage(PlayerId::FIRST),
            None if child_depth == 0 => match self.heuristic.bounds(self.config) {
                Some(bounds) if maximizing => bounds.get(PlayerId::FIRST),
                Some(bounds) => -bounds.get(PlayerId::SECOND),
                None => return false,
            },
            None => return false,
        };
        if improves(optimistic, best_value, maximizing) {
            false
        } else {
            self.stats.bound_prunes += 1;
            true
        }
    }
}

#[inline]
fn improves(value: f64, best: f64, maximizing: bool) -> bool {
    if maximizing {
        value > best
    } else {
        value < best
    }
}

#[inline]
fn is_win(value: f64, maximizing: bool) -> bool {
    if maximizing {
        value >= WIN_SCORE
    } else {
        value <= -WIN_SCORE
    }
}
