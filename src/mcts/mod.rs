//! Monte Carlo Tree Search over the shared game tree.
//!
//! ## Overview
//!
//! - **Heuristic-guided**: leaves are scored by the game's `Heuristic`
//!   instead of random rollouts, so a search is fully deterministic
//! - **Shared tree**: statistics live on `GameTree` nodes, next to whatever
//!   minimax cached there
//! - **Budgeted**: iterations and/or wall-clock time, plus a node limit
//! - **Configurable Policies**: selection is a trait; `UCB1` by default
//!
//! ## Usage
//!
//! ```rust
//! use board_engine::games::connect_four::{CentreControl, ConnectFour, ConnectFourConfig, ConnectFourMoves};
//! use board_engine::mcts::{Mcts, MctsConfig};
//! use board_engine::tree::GameTree;
//!
//! let config = ConnectFourConfig::default();
//! let mut tree = GameTree::new(&ConnectFour, &config);
//! let root = tree.root();
//!
//! let options = MctsConfig::default().with_iterations(200);
//! let mut search = Mcts::new(&ConnectFour, &ConnectFourMoves, &CentreControl, &config, options);
//!
//! let mv = search.choose_next_move(&mut tree, root).unwrap();
//! for (candidate, visits) in search.root_visits(&tree, root) {
//!     println!("{:?}: {}", candidate, visits);
//! }
//! # let _ = mv;
//! ```

pub mod config;
pub mod policy;
pub mod search;
pub mod stats;

pub use config::MctsConfig;
pub use policy::{EdgeStats, SelectionPolicy, UCB1};
pub use search::{Edge, Mcts, MctsEntry, CACHE_KEY};
pub use stats::SearchStats;
