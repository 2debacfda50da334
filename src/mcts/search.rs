//! Core MCTS search algorithm.
//!
//! UCT without random rollouts. A freshly expanded leaf is scored by the
//! game heuristic, squashed into `[0, 1]`, and backed up with the
//! perspective flipping at every ply. Search state lives on the shared game
//! tree under `"MCTS-stats"`, so repeated searches from the same node keep
//! refining the same statistics.

use std::time::Instant;

use log::{debug, trace, warn};
use smallvec::SmallVec;

use crate::core::SearchError;
use crate::rules::{GameStatus, Heuristic, MoveGenerator, Rules};
use crate::tree::{GameTree, NodeId};

use super::config::MctsConfig;
use super::policy::{EdgeStats, SelectionPolicy, UCB1};
use super::stats::SearchStats;

/// Per-node cache namespace.
pub const CACHE_KEY: &str = "MCTS-stats";

/// An expanded move and the child it leads to.
#[derive(Clone, Debug)]
pub struct Edge<M> {
    pub mv: M,
    pub child: NodeId,
}

/// MCTS statistics memoized on a node.
#[derive(Clone, Debug)]
pub struct MctsEntry<M> {
    /// Times this node was on a search path.
    pub visits: u32,

    /// Summed reward for the player who moved into this node.
    pub total_reward: f64,

    /// Moves not yet expanded, next one last.
    unexplored: Vec<M>,

    /// Expanded moves in expansion order.
    pub edges: SmallVec<[Edge<M>; 8]>,
}

impl<M> MctsEntry<M> {
    fn new(mut moves: Vec<M>) -> Self {
        moves.reverse();
        Self {
            visits: 0,
            total_reward: 0.0,
            unexplored: moves,
            edges: SmallVec::new(),
        }
    }

    /// Moves still waiting for expansion.
    #[must_use]
    pub fn unexplored_count(&self) -> usize {
        self.unexplored.len()
    }

    fn edge_stats(&self) -> EdgeStats {
        EdgeStats {
            visits: self.visits,
            total_reward: self.total_reward,
        }
    }
}

/// Main MCTS search context bound to one game.
pub struct Mcts<'a, R: Rules, G, H> {
    rules: &'a R,
    generator: &'a G,
    heuristic: &'a H,
    config: &'a R::Config,

    /// Search configuration.
    options: MctsConfig,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Statistics of the most recent search.
    stats: SearchStats,
}

impl<'a, R, G, H> Mcts<'a, R, G, H>
where
    R: Rules,
    G: MoveGenerator<R>,
    H: Heuristic<R>,
{
    /// Create a new MCTS search context.
    pub fn new(
        rules: &'a R,
        generator: &'a G,
        heuristic: &'a H,
        config: &'a R::Config,
        options: MctsConfig,
    ) -> Self {
        Self {
            rules,
            generator,
            heuristic,
            config,
            options,
            selection: Box::new(UCB1),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn options(&self) -> &MctsConfig {
        &self.options
    }

    /// Search from `node` within the budget and return the most visited move.
    ///
    /// # Errors
    /// - `GameOver` if the node is terminal
    /// - `NoAvailableMoves` if the generator lists nothing
    /// - `NoBudget` if neither an iteration nor a time budget is set
    pub fn choose_next_move(
        &mut self,
        tree: &mut GameTree<R>,
        node: NodeId,
    ) -> Result<R::Move, SearchError> {
        let status = tree.node(node).status();
        if status.is_over() {
            warn!("mcts called on finished game: {:?}", status);
            return Err(SearchError::GameOver(status));
        }
        if !self.options.has_budget() {
            warn!("mcts called without a budget");
            return Err(SearchError::NoBudget);
        }
        let root = self.entry_mut(tree, node);
        if root.edges.is_empty() && root.unexplored.is_empty() {
            warn!("mcts called on a position with no moves");
            return Err(SearchError::NoAvailableMoves);
        }

        self.search(tree, node);
        self.best_move(tree, node).ok_or(SearchError::NoAvailableMoves)
    }

    /// `(move, visits)` for every expanded move at `node`.
    #[must_use]
    pub fn root_visits(&self, tree: &GameTree<R>, node: NodeId) -> Vec<(R::Move, u32)> {
        let Some(entry) = tree.node(node).cache::<MctsEntry<R::Move>>(CACHE_KEY) else {
            return Vec::new();
        };
        entry
            .edges
            .iter()
            .map(|edge| (edge.mv.clone(), visits(tree, edge.child)))
            .collect()
    }

    /// Run iterations until the budget or node limit is exhausted.
    ///
    /// At least one iteration always runs.
    fn search(&mut self, tree: &mut GameTree<R>, root: NodeId) {
        let start = Instant::now();
        let deadline = self.options.time_limit().map(|limit| start + limit);
        self.stats.reset();

        loop {
            self.iteration(tree, root);
            self.stats.iterations += 1;

            if let Some(limit) = self.options.max_iterations {
                if self.stats.iterations >= limit {
                    break;
                }
            }
            if deadline.map_or(false, |deadline| Instant::now() >= deadline) {
                break;
            }
            if tree.len() >= self.options.max_nodes {
                debug!("mcts stopped at node limit {}", self.options.max_nodes);
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "mcts ran {} iterations ({:.0}/s, {:.2} expansions each), depth {} in {}us",
            self.stats.iterations,
            self.stats.iterations_per_second(),
            self.stats.avg_nodes_per_iteration(),
            self.stats.max_depth,
            self.stats.time_us
        );
    }

    /// Single MCTS iteration: select, expand, evaluate, backpropagate.
    fn iteration(&mut self, tree: &mut GameTree<R>, root: NodeId) {
        let mut path: SmallVec<[NodeId; 32]> = SmallVec::new();
        path.push(root);
        let mut current = root;

        // === SELECTION / EXPANSION ===
        loop {
            if tree.node(current).is_terminal() {
                break;
            }

            let entry = self.entry_mut(tree, current);
            if let Some(mv) = entry.unexplored.pop() {
                let child = tree.child(self.rules, self.config, current, &mv);
                self.entry_mut(tree, current).edges.push(Edge { mv, child });
                self.stats.nodes_expanded += 1;
                path.push(child);
                current = child;
                break;
            }
            if entry.edges.is_empty() {
                // The generator offered nothing here; score it as a leaf.
                break;
            }

            let parent_visits = entry.visits;
            let children: SmallVec<[NodeId; 8]> = entry.edges.iter().map(|e| e.child).collect();
            let child_stats: SmallVec<[EdgeStats; 8]> = children
                .iter()
                .map(|&child| {
                    tree.node(child)
                        .cache::<MctsEntry<R::Move>>(CACHE_KEY)
                        .map(MctsEntry::edge_stats)
                        .unwrap_or_default()
                })
                .collect();

            let selected = self.selection.select(parent_visits, &child_stats, &self.options);
            current = children[selected.min(children.len() - 1)];
            path.push(current);
        }

        self.stats.max_depth = self.stats.max_depth.max(path.len() as u32 - 1);

        // === EVALUATION ===
        let mut reward = self.estimate(tree, current);
        self.stats.evaluations += 1;
        trace!("mcts leaf {} estimated {:.3}", current, reward);

        // === BACKPROPAGATION ===
        for &id in path.iter().rev() {
            let entry = self.entry_mut(tree, id);
            entry.visits += 1;
            entry.total_reward += reward;
            reward = 1.0 - reward;
        }
    }

    /// Estimated reward at `id` for the player who moved into it.
    fn estimate(&self, tree: &GameTree<R>, id: NodeId) -> f64 {
        let view = tree.view(id);
        let mover = view.current_player().opponent();
        match view.status() {
            GameStatus::Victory(winner) if winner == mover => 1.0,
            GameStatus::Victory(_) => 0.0,
            GameStatus::Draw => 0.5,
            GameStatus::Ongoing => {
                let advantage = self.heuristic.board_value(view, self.config).advantage(mover);
                logistic(advantage / self.options.value_scale)
            }
        }
    }

    /// The entry at `id`, created from the move generator on first use.
    fn entry_mut<'t>(&self, tree: &'t mut GameTree<R>, id: NodeId) -> &'t mut MctsEntry<R::Move> {
        let missing = tree.node(id).cache::<MctsEntry<R::Move>>(CACHE_KEY).is_none();
        let moves = if missing && !tree.node(id).is_terminal() {
            self.generator.list_moves(tree.view(id), self.config)
        } else {
            Vec::new()
        };
        tree.node_mut(id)
            .cache_or_insert_with(CACHE_KEY, || MctsEntry::new(moves))
    }

    /// Most visited expanded move at `node`; ties go to the earliest.
    fn best_move(&self, tree: &GameTree<R>, node: NodeId) -> Option<R::Move> {
        let entry = tree.node(node).cache::<MctsEntry<R::Move>>(CACHE_KEY)?;
        let mut best: Option<(&Edge<R::Move>, u32)> = None;
        for edge in &entry.edges {
            let count = visits(tree, edge.child);
            if best.map_or(true, |(_, most)| count > most) {
                best = Some((edge, count));
            }
        }
        best.map(|(edge, _)| edge.mv.clone())
    }
}

fn visits<R: Rules>(tree: &GameTree<R>, id: NodeId) -> u32 {
    tree.node(id)
        .cache::<MctsEntry<R::Move>>(CACHE_KEY)
        .map_or(0, |entry| entry.visits)
}

/// Squash an advantage into a win estimate in `(0, 1)`.
#[inline]
fn logistic(x: f64) -> f64 {
    if x == f64::INFINITY {
        1.0
    } else if x == f64::NEG_INFINITY {
        0.0
    } else {
        1.0 / (1.0 + (-x).exp())
    }
}
