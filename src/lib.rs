//! # board-engine
//!
//! A generic engine for two-player, perfect-information, deterministic
//! abstract-strategy games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: the search engines never interpret game concepts.
//!    Games plug in through `Rules`, `MoveGenerator`, and `Heuristic`.
//!
//! 2. **Immutable States**: every move produces a new state; boards use
//!    persistent `im` collections so successors share structure.
//!
//! 3. **Configuration Over Convention**: games declare their parameters
//!    once via `RulesConfig`, and configs are validated before use.
//!
//! ## Architecture
//!
//! - **Shared Game Tree**: an arena of lazily materialized nodes. Minimax and
//!   MCTS memoize into per-node caches keyed by algorithm name, so both can
//!   search the same tree.
//!
//! - **Integer Moves**: bijective encoders map any move onto a single `u64`,
//!   which is how histories cross the registry boundary.
//!
//! ## Modules
//!
//! - `core`: players, board values, RNG, errors, rules configuration
//! - `encoding`: composable bijective encoders
//! - `rules`: the plug-in traits a game implements
//! - `tree`: game tree and per-node caches
//! - `minimax`: alpha-beta with heuristic-bounds pruning
//! - `mcts`: UCT guided by the game heuristic
//! - `registry`: type-erased access to registered games
//! - `games`: Connect Four and take-away

pub mod core;
pub mod encoding;
pub mod rules;
pub mod tree;
pub mod minimax;
pub mod mcts;
pub mod registry;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    BoardValue, ConfigDescription, ConfigError, DecodingError, EngineError, FieldDescription,
    GameRng, IllegalMove, NoConfig, NumericRange, PlayerId, PlayerMap, RulesConfig, SearchError,
    WIN_SCORE,
};

pub use crate::encoding::{
    BooleanEncoder, BoundedNumber, Disjunction, Either, Encoder, Mapped, NumberEncoder, Product,
};

pub use crate::rules::{GameState, GameStatus, Heuristic, MoveGenerator, Rules};

pub use crate::tree::{GameNode, GameTree, NodeId, NodeRef, TreeStats};

pub use crate::minimax::{Minimax, MinimaxOptions, SearchOutcome};

pub use crate::mcts::{Mcts, MctsConfig, SearchStats, SelectionPolicy, UCB1};

pub use crate::registry::{EngineChoice, GameBundle, GameEntry, GameRegistry, ReplaySummary};
