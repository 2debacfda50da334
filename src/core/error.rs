//! Error kinds surfaced by the engine.
//!
//! `IllegalMove` is an ordinary, recoverable outcome of validating user
//! input. `DecodingError` and `SearchError` signal corrupted data or a caller
//! bug and are never silently swallowed.

use std::borrow::Cow;

use thiserror::Error;

use crate::rules::GameStatus;

/// A move rejected by `Rules::is_legal`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("illegal move: {reason}")]
pub struct IllegalMove {
    /// Machine-readable reason code, e.g. `"column-full"`.
    pub reason: Cow<'static, str>,
}

impl IllegalMove {
    /// Create an illegal-move result with the given reason code.
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// An encoded value outside the decoder's domain.
#[derive(Error, Debug)]
pub enum DecodingError {
    #[error("encoded value {value} exceeds maximum {max}")]
    OutOfRange { value: u64, max: u64 },
    #[error("malformed encoding: {0}")]
    Malformed(String),
    #[error("json decoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A search invoked on a position it cannot search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("game is already over: {0:?}")]
    GameOver(GameStatus),
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("search budget allows no iterations")]
    NoBudget,
}

/// A rules configuration that fails its description.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config must be a JSON object")]
    NotAnObject,
    #[error("missing config field `{0}`")]
    MissingField(String),
    #[error("config field `{field}` must be an integer")]
    NotAnInteger { field: String },
    #[error("config field `{field}` = {value} is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("config could not be read: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Any failure reported through the game registry.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unknown game `{0}`")]
    UnknownGame(String),
    #[error("move {index} of the history is illegal: {source}")]
    IllegalHistory {
        index: usize,
        #[source]
        source: IllegalMove,
    },
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),
    #[error(transparent)]
    Decoding(#[from] DecodingError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
