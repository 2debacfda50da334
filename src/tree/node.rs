//! Game tree node identifiers and node storage.
//!
//! Nodes live in the `GameTree` arena and reference each other by `NodeId`.
//! The parent link is an identity used to rebuild move history; it is never
//! used to reach back and mutate an ancestor.

use std::any::Any;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rules::{GameStatus, Rules};

/// Index into the `GameTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A materialized position in the game tree.
pub struct GameNode<R: Rules> {
    pub(crate) state: R::State,
    pub(crate) last_move: Option<R::Move>,
    pub(crate) parent: NodeId,
    pub(crate) depth: u32,
    pub(crate) status: GameStatus,

    /// Materialized children keyed by the move that produced them.
    pub(crate) children: FxHashMap<R::Move, NodeId>,

    /// Children in materialization order.
    pub(crate) child_order: Vec<NodeId>,

    /// Per-algorithm memo slots.
    cache: FxHashMap<&'static str, Box<dyn Any>>,
}

impl<R: Rules> GameNode<R> {
    pub(crate) fn new(
        state: R::State,
        last_move: Option<R::Move>,
        parent: NodeId,
        depth: u32,
    ) -> Self {
        Self {
            state,
            last_move,
            parent,
            depth,
            status: GameStatus::Ongoing,
            children: FxHashMap::default(),
            child_order: Vec::new(),
            cache: FxHashMap::default(),
        }
    }

    /// Position at this node.
    #[must_use]
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Move that produced this node (`None` at the root).
    #[must_use]
    pub fn last_move(&self) -> Option<&R::Move> {
        self.last_move.as_ref()
    }

    /// Parent node (NONE for root).
    #[must_use]
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Depth below the tree root.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Status computed when the node was materialized.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has ended at this node.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_over()
    }

    /// Get a cached value stored under `key`.
    ///
    /// Returns `None` if nothing is stored or the stored value has another
    /// type.
    #[must_use]
    pub fn cache<T: 'static>(&self, key: &str) -> Option<&T> {
        self.cache.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    /// Get a mutable cached value stored under `key`.
    pub fn cache_mut<T: 'static>(&mut self, key: &str) -> Option<&mut T> {
        self.cache.get_mut(key).and_then(|v| v.downcast_mut::<T>())
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn put_cache<T: 'static>(&mut self, key: &'static str, value: T) {
        self.cache.insert(key, Box::new(value));
    }

    /// Get the entry under `key`, creating it with `init` on first use.
    ///
    /// An existing entry of a different type is replaced.
    pub fn cache_or_insert_with<T: 'static>(
        &mut self,
        key: &'static str,
        init: impl FnOnce() -> T,
    ) -> &mut T {
        if !matches!(self.cache.get(key), Some(v) if v.is::<T>()) {
            self.cache.insert(key, Box::new(init()));
        }
        self.cache
            .get_mut(key)
            .and_then(|v| v.downcast_mut::<T>())
            .expect("cache slot holds the requested type")
    }
}

impl<R: Rules> std::fmt::Debug for GameNode<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.cache.keys().collect();
        keys.sort();
        f.debug_struct("GameNode")
            .field("state", &self.state)
            .field("last_move", &self.last_move)
            .field("parent", &self.parent)
            .field("depth", &self.depth)
            .field("status", &self.status)
            .field("children", &self.child_order.len())
            .field("cache", &keys)
            .finish()
    }
}
