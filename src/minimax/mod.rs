//! Depth-limited minimax with alpha-beta and heuristic-bounds pruning.
//!
//! ## Usage
//!
//! ```rust
//! use board_engine::games::take_away::{Take, TakeAway, TakeAwayConfig, TakeAwayMoves, TakeAwayParity};
//! use board_engine::minimax::{Minimax, MinimaxOptions};
//! use board_engine::tree::GameTree;
//!
//! let config = TakeAwayConfig { pile: 6, max_take: 3 };
//! let mut tree = GameTree::new(&TakeAway, &config);
//! let root = tree.root();
//!
//! let options = MinimaxOptions::default().with_depth(4);
//! let mut minimax = Minimax::new(&TakeAway, &TakeAwayMoves, &TakeAwayParity, &config, options);
//!
//! // Taking two leaves a multiple of four.
//! assert_eq!(minimax.choose_next_move(&mut tree, root).unwrap(), Take(2));
//! ```

pub mod options;
pub mod search;

pub use options::MinimaxOptions;
pub use search::{BoundType, Minimax, MinimaxStats, ScoreEntry, SearchOutcome, CACHE_KEY};
