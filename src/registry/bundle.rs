//! Type-erased access to one game.
//!
//! A `GameBundle` ties a game's rules, move generator, heuristic, and move
//! encoder together. Through `GameEntry` callers only ever see integers and
//! JSON: a history is a list of encoded moves, a config is a JSON object
//! checked against the game's `ConfigDescription`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{ConfigDescription, EngineError, PlayerId, RulesConfig};
use crate::encoding::NumberEncoder;
use crate::mcts::{Mcts, MctsConfig};
use crate::minimax::{Minimax, MinimaxOptions};
use crate::rules::{GameStatus, Heuristic, MoveGenerator, Rules};
use crate::tree::{GameTree, NodeId};

/// Which engine to run, with its options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum EngineChoice {
    Minimax(MinimaxOptions),
    Mcts(MctsConfig),
}

/// Position reached by replaying a history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub moves_played: usize,
    pub status: GameStatus,
    pub current_player: PlayerId,
}

/// Object-safe view of a registered game.
pub trait GameEntry: Send + Sync {
    /// Stable identifier, e.g. `"connect_four"`.
    fn id(&self) -> &'static str;

    /// Display name.
    fn name(&self) -> &'static str;

    /// The game's configurable parameters.
    fn config_description(&self) -> ConfigDescription;

    /// JSON config holding every default.
    fn default_config(&self) -> Value {
        self.config_description().defaults()
    }

    /// Replay `history` from the initial position.
    fn replay(&self, history: &[u64], config: &Value) -> Result<ReplaySummary, EngineError>;

    /// Encoded moves the generator offers after `history`.
    fn legal_moves(&self, history: &[u64], config: &Value) -> Result<Vec<u64>, EngineError>;

    /// Search the position after `history` and return the encoded best move.
    fn choose_move(
        &self,
        history: &[u64],
        config: &Value,
        engine: &EngineChoice,
    ) -> Result<u64, EngineError>;
}

/// A game's plug-ins bundled for registration.
#[derive(Clone, Debug)]
pub struct GameBundle<R, G, H, E> {
    pub id: &'static str,
    pub name: &'static str,
    pub rules: R,
    pub generator: G,
    pub heuristic: H,
    pub encoder: E,
}

impl<R, G, H, E> GameBundle<R, G, H, E> {
    pub fn new(
        id: &'static str,
        name: &'static str,
        rules: R,
        generator: G,
        heuristic: H,
        encoder: E,
    ) -> Self {
        Self {
            id,
            name,
            rules,
            generator,
            heuristic,
            encoder,
        }
    }
}

impl<R, G, H, E> GameBundle<R, G, H, E>
where
    R: Rules,
    E: NumberEncoder<R::Move>,
{
    /// Parse the config and replay `history`, checking every move.
    pub fn build(
        &self,
        history: &[u64],
        config: &Value,
    ) -> Result<(R::Config, GameTree<R>, NodeId), EngineError> {
        let config = R::Config::from_json(config)?;
        let mut tree = GameTree::new(&self.rules, &config);
        let mut node = tree.root();

        for (index, encoded) in history.iter().enumerate() {
            let mv = self.encoder.decode(encoded).map_err(|err| {
                log::error!("{}: move {} of the history does not decode: {}", self.id, index, err);
                err
            })?;
            node = tree
                .play(&self.rules, &config, node, &mv)
                .map_err(|source| EngineError::IllegalHistory { index, source })?;
        }

        Ok((config, tree, node))
    }
}

impl<R, G, H, E> GameEntry for GameBundle<R, G, H, E>
where
    R: Rules + Send + Sync,
    G: MoveGenerator<R> + Send + Sync,
    H: Heuristic<R> + Send + Sync,
    E: NumberEncoder<R::Move> + Send + Sync,
{
    fn id(&self) -> &'static str {
        self.id
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn config_description(&self) -> ConfigDescription {
        R::Config::description()
    }

    fn replay(&self, history: &[u64], config: &Value) -> Result<ReplaySummary, EngineError> {
        let (_, tree, node) = self.build(history, config)?;
        let view = tree.view(node);
        Ok(ReplaySummary {
            moves_played: history.len(),
            status: view.status(),
            current_player: view.current_player(),
        })
    }

    fn legal_moves(&self, history: &[u64], config: &Value) -> Result<Vec<u64>, EngineError> {
        let (config, tree, node) = self.build(history, config)?;
        if tree.node(node).is_terminal() {
            return Ok(Vec::new());
        }
        Ok(self
            .generator
            .list_moves(tree.view(node), &config)
            .iter()
            .map(|mv| self.encoder.encode(mv))
            .collect())
    }

    fn choose_move(
        &self,
        history: &[u64],
        config: &Value,
        engine: &EngineChoice,
    ) -> Result<u64, EngineError> {
        let (config, mut tree, node) = self.build(history, config)?;
        let mv = match engine {
            EngineChoice::Minimax(options) => Minimax::new(
                &self.rules,
                &self.generator,
                &self.heuristic,
                &config,
                options.clone(),
            )
            .choose_next_move(&mut tree, node)?,
            EngineChoice::Mcts(options) => Mcts::new(
                &self.rules,
                &self.generator,
                &self.heuristic,
                &config,
                options.clone(),
            )
            .choose_next_move(&mut tree, node)?,
        };
        log::debug!("{}: chose {:?} after {} moves", self.id, mv, history.len());
        Ok(self.encoder.encode(&mv))
    }
}
