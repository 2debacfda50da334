//! Plug-in contracts for game implementations.
//!
//! Games implement `Rules`, `MoveGenerator`, and `Heuristic`. The search
//! engines call into them but never interpret game-specific concepts
//! directly.

pub mod engine;

pub use engine::{GameState, GameStatus, Heuristic, MoveGenerator, Rules};
