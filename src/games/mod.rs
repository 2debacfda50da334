//! Bundled games.
//!
//! The engine core knows nothing about these; each plugs in through the
//! `rules` traits and registers a `GameBundle`.
//!
//! - `connect_four`: Connect Four with configurable board, line length, and
//!   the pop-out variant
//! - `take_away`: a one-pile subtraction game with a known solution, used to
//!   check search correctness

pub mod connect_four;
pub mod take_away;
