//! Game tree shared by the search engines.
//!
//! ## Overview
//!
//! - **Lazy materialization**: a child is computed only when a search or a
//!   user move first reaches it, then memoized by move
//! - **Arena storage**: nodes are referenced by `NodeId`; the parent link is
//!   an identity, not an owning pointer
//! - **Per-algorithm caches**: each node carries memo slots namespaced by
//!   algorithm name so engines sharing a node never collide
//!
//! ## Usage
//!
//! ```rust
//! use board_engine::games::take_away::{TakeAway, TakeAwayConfig, Take};
//! use board_engine::tree::GameTree;
//!
//! let config = TakeAwayConfig { pile: 10, max_take: 3 };
//! let mut tree = GameTree::new(&TakeAway, &config);
//! let root = tree.root();
//!
//! let child = tree.child(&TakeAway, &config, root, &Take(2));
//! assert_eq!(tree.child(&TakeAway, &config, root, &Take(2)), child);
//! assert_eq!(tree.history(child), vec![Take(2)]);
//! ```

pub mod arena;
pub mod node;

pub use arena::{GameTree, NodeRef, TreeStats};
pub use node::{GameNode, NodeId};
