//! Arena-based game tree.
//!
//! Uses a flat `Vec<GameNode>` with index-based references. Only the visited
//! slice of the game tree is materialized, and every search engine sharing a
//! tree shares its nodes and their per-algorithm caches.

use crate::core::{IllegalMove, PlayerId};
use crate::rules::{GameState, GameStatus, Rules};

use super::node::{GameNode, NodeId};

/// Arena-based game tree.
///
/// The tree owns every materialized node. A search call borrows the tree
/// mutably for its whole duration, so two searches can never share a root
/// concurrently.
pub struct GameTree<R: Rules> {
    /// All nodes in the tree.
    nodes: Vec<GameNode<R>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<R: Rules> GameTree<R> {
    /// Create a tree rooted at the game's initial position.
    pub fn new(rules: &R, config: &R::Config) -> Self {
        Self::from_state(rules, rules.initial_state(config), config)
    }

    /// Create a tree rooted at an arbitrary position.
    pub fn from_state(rules: &R, state: R::State, config: &R::Config) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(1024),
            root: NodeId::new(0),
        };
        tree.nodes.push(GameNode::new(state, None, NodeId::NONE, 0));
        let status = rules.game_status(tree.view(tree.root), config);
        tree.nodes[0].status = status;
        tree
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &GameNode<R> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut GameNode<R> {
        &mut self.nodes[id.0 as usize]
    }

    /// Read-only view of a node, as handed to game plug-ins.
    #[inline]
    #[must_use]
    pub fn view(&self, id: NodeId) -> NodeRef<'_, R> {
        NodeRef { tree: self, id }
    }

    /// Child already materialized for `mv`, if any.
    #[must_use]
    pub fn find_child(&self, id: NodeId, mv: &R::Move) -> Option<NodeId> {
        self.node(id).children.get(mv).copied()
    }

    /// Child reached by playing `mv` at `id`, materializing it on first use.
    ///
    /// `mv` must be legal at `id`. Value-equal moves always return the same
    /// child.
    pub fn child(&mut self, rules: &R, config: &R::Config, id: NodeId, mv: &R::Move) -> NodeId {
        if let Some(existing) = self.find_child(id, mv) {
            return existing;
        }

        let parent = self.node(id);
        let state = rules.apply_legal_move(mv, &parent.state, config);
        let depth = parent.depth + 1;

        let child_id = NodeId::new(self.nodes.len() as u32);
        self.nodes
            .push(GameNode::new(state, Some(mv.clone()), id, depth));
        let status = rules.game_status(self.view(child_id), config);
        self.node_mut(child_id).status = status;

        let parent = self.node_mut(id);
        parent.children.insert(mv.clone(), child_id);
        parent.child_order.push(child_id);

        log::trace!("materialized {} at depth {} ({:?})", child_id, depth, status);
        child_id
    }

    /// Apply an untrusted move, checking legality first.
    pub fn play(
        &mut self,
        rules: &R,
        config: &R::Config,
        id: NodeId,
        mv: &R::Move,
    ) -> Result<NodeId, IllegalMove> {
        if self.node(id).is_terminal() {
            return Err(IllegalMove::new("game-over"));
        }
        rules.is_legal(mv, &self.node(id).state, config)?;
        Ok(self.child(rules, config, id, mv))
    }

    /// Materialized children of `id` in materialization order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id).child_order.iter().copied()
    }

    /// Moves leading from the root to `id`.
    #[must_use]
    pub fn history(&self, id: NodeId) -> Vec<R::Move> {
        let mut moves = Vec::with_capacity(self.node(id).depth as usize);
        let mut current = id;
        while !current.is_none() {
            let node = self.node(current);
            if let Some(mv) = &node.last_move {
                moves.push(mv.clone());
            }
            current = node.parent;
        }
        moves.reverse();
        moves
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
        }
    }
}

/// Read-only view of one node inside its tree.
pub struct NodeRef<'a, R: Rules> {
    tree: &'a GameTree<R>,
    id: NodeId,
}

impl<R: Rules> Clone for NodeRef<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Rules> Copy for NodeRef<'_, R> {}

impl<'a, R: Rules> NodeRef<'a, R> {
    /// ID of the viewed node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The underlying node.
    #[must_use]
    pub fn node(&self) -> &'a GameNode<R> {
        self.tree.node(self.id)
    }

    /// Position at this node.
    #[must_use]
    pub fn state(&self) -> &'a R::State {
        &self.node().state
    }

    /// Move that produced this node.
    #[must_use]
    pub fn last_move(&self) -> Option<&'a R::Move> {
        self.node().last_move.as_ref()
    }

    /// Depth below the tree root.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.node().depth
    }

    /// Status of this node.
    ///
    /// Reads `Ongoing` while `Rules::game_status` is computing it.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.node().status
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state().current_player()
    }

    /// View of the parent node, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'a, R>> {
        let parent = self.node().parent;
        (!parent.is_none()).then(|| self.tree.view(parent))
    }

    /// Moves leading from the tree root to this node.
    #[must_use]
    pub fn history(&self) -> Vec<R::Move> {
        self.tree.history(self.id)
    }
}

/// Statistics about the game tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth materialized.
    pub max_depth: u32,

    /// Number of terminal nodes.
    pub terminal_count: usize,
}
