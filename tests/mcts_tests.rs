//! MCTS integration tests on the bundled games.

use std::time::Duration;

use board_engine::core::SearchError;
use board_engine::games::connect_four::{
    CentreControl, ConnectFour, ConnectFourConfig, ConnectFourMove, ConnectFourMoves,
};
use board_engine::games::take_away::{Take, TakeAway, TakeAwayConfig, TakeAwayMoves, TakeAwayParity};
use board_engine::mcts::{self, EdgeStats, Mcts, MctsConfig, MctsEntry, SelectionPolicy};
use board_engine::minimax::{self, Minimax, MinimaxOptions, ScoreEntry};
use board_engine::rules::MoveGenerator;
use board_engine::tree::{GameTree, NodeId};

fn drop(column: u8) -> ConnectFourMove {
    ConnectFourMove::Drop { column }
}

fn connect_four_after(
    config: &ConnectFourConfig,
    moves: &[ConnectFourMove],
) -> (GameTree<ConnectFour>, NodeId) {
    let mut tree = GameTree::new(&ConnectFour, config);
    let mut node = tree.root();
    for mv in moves {
        node = tree.play(&ConnectFour, config, node, mv).unwrap();
    }
    (tree, node)
}

fn root_visits(config: &ConnectFourConfig, options: MctsConfig) -> Vec<(ConnectFourMove, u32)> {
    let mut tree = GameTree::new(&ConnectFour, config);
    let root = tree.root();
    let mut search = Mcts::new(&ConnectFour, &ConnectFourMoves, &CentreControl, config, options);
    search.choose_next_move(&mut tree, root).unwrap();
    search.root_visits(&tree, root)
}

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_mcts_returns_legal_move() {
    let config = ConnectFourConfig::default();
    let history = [drop(3), drop(3), drop(2)];
    let (mut tree, node) = connect_four_after(&config, &history);
    let legal = ConnectFourMoves.list_moves(tree.view(node), &config);

    let options = MctsConfig::default().with_iterations(100);
    let mut search = Mcts::new(&ConnectFour, &ConnectFourMoves, &CentreControl, &config, options);
    let mv = search.choose_next_move(&mut tree, node).unwrap();

    assert!(legal.contains(&mv));
    assert_eq!(search.stats().iterations, 100);
}

#[test]
fn test_mcts_with_single_iteration() {
    let config = TakeAwayConfig { pile: 9, max_take: 3 };
    let mut tree = GameTree::new(&TakeAway, &config);
    let root = tree.root();

    let options = MctsConfig::default().with_iterations(1);
    let mut search = Mcts::new(&TakeAway, &TakeAwayMoves, &TakeAwayParity, &config, options);

    // Only the first listed move has been expanded.
    assert_eq!(search.choose_next_move(&mut tree, root).unwrap(), Take(1));
}

#[test]
fn test_mcts_finds_winning_drop() {
    let config = ConnectFourConfig::default();
    let history = [drop(0), drop(6), drop(0), drop(6), drop(0), drop(5)];
    let (mut tree, node) = connect_four_after(&config, &history);

    let options = MctsConfig::default().with_iterations(500);
    let mut search = Mcts::new(&ConnectFour, &ConnectFourMoves, &CentreControl, &config, options);

    assert_eq!(search.choose_next_move(&mut tree, node).unwrap(), drop(0));
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_mcts_is_deterministic() {
    let config = ConnectFourConfig::default();
    let options = MctsConfig::default().with_iterations(300);

    let first = root_visits(&config, options.clone());
    let second = root_visits(&config, options);
    assert_eq!(first, second);
}

#[test]
fn test_visits_grow_with_budget() {
    let config = ConnectFourConfig::default();
    let small = root_visits(&config, MctsConfig::default().with_iterations(50));
    let large = root_visits(&config, MctsConfig::default().with_iterations(200));

    let total = |visits: &[(ConnectFourMove, u32)]| visits.iter().map(|(_, n)| n).sum::<u32>();
    assert!(total(&large) > total(&small));

    for (mv, count) in &small {
        let grown = large
            .iter()
            .find(|(other, _)| other == mv)
            .map_or(0, |(_, n)| *n);
        assert!(grown >= *count, "{:?}: {} < {}", mv, grown, count);
    }
}

// =============================================================================
// Budget Tests
// =============================================================================

#[test]
fn test_time_limit_budget() {
    let config = ConnectFourConfig::default();
    let mut tree = GameTree::new(&ConnectFour, &config);
    let root = tree.root();

    let options = MctsConfig::default()
        .without_iteration_limit()
        .with_time_limit(Duration::from_millis(20))
        .with_max_nodes(usize::MAX);
    let mut search = Mcts::new(&ConnectFour, &ConnectFourMoves, &CentreControl, &config, options);

    assert!(search.choose_next_move(&mut tree, root).is_ok());
    let stats = search.stats();
    assert!(stats.iterations >= 1);

    // The deadline is checked between iterations, so the search may overrun
    // by at most one iteration plus scheduling noise.
    assert!(stats.time_us >= 20_000, "stopped early after {}us", stats.time_us);
    assert!(stats.time_us < 20_000 + 50_000, "overran to {}us", stats.time_us);
}

#[test]
fn test_requires_a_budget() {
    let config = ConnectFourConfig::default();
    let mut tree = GameTree::new(&ConnectFour, &config);
    let root = tree.root();

    let options = MctsConfig::default().without_iteration_limit();
    let mut search = Mcts::new(&ConnectFour, &ConnectFourMoves, &CentreControl, &config, options);

    assert_eq!(
        search.choose_next_move(&mut tree, root).unwrap_err(),
        SearchError::NoBudget
    );
}

#[test]
fn test_finished_game_is_rejected() {
    let config = ConnectFourConfig::default();
    let history = [drop(0), drop(6), drop(0), drop(6), drop(0), drop(6), drop(0)];
    let (mut tree, node) = connect_four_after(&config, &history);

    let mut search = Mcts::new(
        &ConnectFour,
        &ConnectFourMoves,
        &CentreControl,
        &config,
        MctsConfig::default(),
    );
    assert!(matches!(
        search.choose_next_move(&mut tree, node),
        Err(SearchError::GameOver(_))
    ));
}

// =============================================================================
// Selection Policies
// =============================================================================

/// Always descends into the earliest expanded child.
struct FirstChild;

impl SelectionPolicy for FirstChild {
    fn select(&self, _parent_visits: u32, _children: &[EdgeStats], _config: &MctsConfig) -> usize {
        0
    }
}

#[test]
fn test_custom_selection_policy() {
    let config = TakeAwayConfig { pile: 9, max_take: 3 };
    let mut tree = GameTree::new(&TakeAway, &config);
    let root = tree.root();

    let options = MctsConfig::default().with_iterations(100);
    let mut search = Mcts::new(&TakeAway, &TakeAwayMoves, &TakeAwayParity, &config, options)
        .with_selection(FirstChild);
    let mv = search.choose_next_move(&mut tree, root).unwrap();

    // Each root move is expanded once; every later iteration goes to the first.
    assert_eq!(mv, Take(1));
    assert_eq!(
        search.root_visits(&tree, root),
        vec![(Take(1), 98), (Take(2), 1), (Take(3), 1)]
    );
}

// =============================================================================
// Shared Tree
// =============================================================================

#[test]
fn test_engines_share_one_tree() {
    let config = TakeAwayConfig { pile: 10, max_take: 3 };
    let mut tree = GameTree::new(&TakeAway, &config);
    let root = tree.root();

    let mut minimax = Minimax::new(
        &TakeAway,
        &TakeAwayMoves,
        &TakeAwayParity,
        &config,
        MinimaxOptions::default().with_depth(3),
    );
    let by_minimax = minimax.choose_next_move(&mut tree, root).unwrap();
    let after_minimax = tree.len();

    let mut search = Mcts::new(
        &TakeAway,
        &TakeAwayMoves,
        &TakeAwayParity,
        &config,
        MctsConfig::default().with_iterations(200),
    );
    let by_mcts = search.choose_next_move(&mut tree, root).unwrap();

    assert_eq!(by_minimax, Take(2));
    assert!((1..=3).contains(&by_mcts.0));

    // Minimax already materialized the first plies, so MCTS reuses them.
    assert!(tree.len() >= after_minimax);
    let node = tree.node(root);
    assert!(node.cache::<ScoreEntry<Take>>(minimax::CACHE_KEY).is_some());
    let entry = node.cache::<MctsEntry<Take>>(mcts::CACHE_KEY).unwrap();
    assert_eq!(entry.visits, 200);
    assert_eq!(entry.edges.len(), 3);
}
