//! Core engine types: players, board values, RNG, errors, rules configuration.
//!
//! Everything here is game-agnostic. Games plug in through the traits in
//! `rules` and describe their parameters through `RulesConfig`.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod value;

pub use config::{ConfigDescription, FieldDescription, NoConfig, NumericRange, RulesConfig};
pub use error::{ConfigError, DecodingError, EngineError, IllegalMove, SearchError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use value::{BoardValue, WIN_SCORE};
