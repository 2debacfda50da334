//! Registry of playable games.
//!
//! The registry is built once and passed explicitly to whoever needs it.
//!
//! ## Example
//!
//! ```
//! use board_engine::registry::{EngineChoice, GameRegistry};
//! use board_engine::minimax::MinimaxOptions;
//!
//! let registry = GameRegistry::with_builtin_games();
//! let game = registry.game("connect_four").unwrap();
//!
//! let config = game.default_config();
//! let engine = EngineChoice::Minimax(MinimaxOptions::default().with_depth(3));
//!
//! // Drops travel as even numbers: the centre column is 6.
//! assert_eq!(game.choose_move(&[], &config, &engine).unwrap(), 6);
//! ```

pub mod bundle;

pub use bundle::{EngineChoice, GameBundle, GameEntry, ReplaySummary};

use rustc_hash::FxHashMap;

use crate::core::EngineError;
use crate::games::{connect_four, take_away};

/// Registry of games by id.
#[derive(Default)]
pub struct GameRegistry {
    games: FxHashMap<&'static str, Box<dyn GameEntry>>,
}

impl GameRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every bundled game.
    #[must_use]
    pub fn with_builtin_games() -> Self {
        let mut registry = Self::new();
        registry.register(connect_four::bundle());
        registry.register(take_away::bundle());
        log::info!("registered games: {:?}", registry.ids());
        registry
    }

    /// Register a game.
    ///
    /// Panics if a game with the same id already exists.
    pub fn register(&mut self, game: impl GameEntry + 'static) {
        let id = game.id();
        if self.games.contains_key(id) {
            panic!("Game with id {:?} already registered", id);
        }
        self.games.insert(id, Box::new(game));
    }

    /// Get a game by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn GameEntry> {
        self.games.get(id).map(|game| game.as_ref())
    }

    /// Get a game by id, reporting unknown ids as an error.
    pub fn game(&self, id: &str) -> Result<&dyn GameEntry, EngineError> {
        self.get(id)
            .ok_or_else(|| EngineError::UnknownGame(id.to_string()))
    }

    /// Registered ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.games.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Get the number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl std::fmt::Debug for GameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRegistry")
            .field("games", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_games() {
        let registry = GameRegistry::with_builtin_games();
        assert_eq!(registry.ids(), vec!["connect_four", "take_away"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("take_away").unwrap().name(), "Take-away");
    }

    #[test]
    fn test_unknown_game() {
        let registry = GameRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.game("chess"),
            Err(EngineError::UnknownGame(ref id)) if id == "chess"
        ));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration() {
        let mut registry = GameRegistry::new();
        registry.register(take_away::bundle());
        registry.register(take_away::bundle());
    }
}
