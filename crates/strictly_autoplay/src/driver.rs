//! Plays whole games with a strategy and collects the outcomes.

use crate::config::{AutoplayConfig, ConfigError};
use crate::strategy::StrategyKind;
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use strictly_2048::{Board, GameError, GameResult, GameSetup};
use tracing::{debug, info, instrument, warn};

/// Errors raised while driving games.
#[derive(Debug, Display, Error, From)]
pub enum AutoplayError {
    /// Configuration was rejected.
    #[display("{}", _0)]
    Config(ConfigError),

    /// The engine refused a move.
    #[display("Game error: {}", _0)]
    Game(GameError),
}

/// Outcome of one game.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, derive_new::new)]
pub struct GameReport {
    /// Seed the game was played with.
    seed: u64,
    /// Final score.
    score: u64,
    /// Largest tile reached.
    max_tile: u32,
    /// Moves that changed the board.
    moves: u64,
    /// True if the game reached a terminal board, false if abandoned.
    finished: bool,
    /// Final board.
    board: Board,
}

/// Outcome of a run of games.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct RunSummary {
    /// Seed of the first game.
    base_seed: u64,
    /// Strategy every game used.
    strategy: StrategyKind,
    /// One report per game, in play order.
    reports: Vec<GameReport>,
}

impl RunSummary {
    /// Highest final score.
    pub fn best_score(&self) -> u64 {
        self.reports.iter().map(|r| r.score).max().unwrap_or(0)
    }

    /// Mean final score.
    pub fn mean_score(&self) -> f64 {
        if self.reports.is_empty() {
            return 0.0;
        }
        let total: u64 = self.reports.iter().map(|r| r.score).sum();
        total as f64 / self.reports.len() as f64
    }

    /// Largest tile reached in any game.
    pub fn best_tile(&self) -> u32 {
        self.reports.iter().map(|r| r.max_tile).max().unwrap_or(0)
    }

    /// Games that ran to a terminal board.
    pub fn finished_count(&self) -> usize {
        self.reports.iter().filter(|r| r.finished).count()
    }
}

/// Plays a single game from `seed` until it ends, the strategy gives up,
/// or `max_moves` is reached.
#[instrument(skip(config), fields(strategy = %config.strategy()))]
pub fn play_game(config: &AutoplayConfig, seed: u64) -> Result<GameReport, AutoplayError> {
    let rules = config.game_rules()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut strategy = config.strategy().build();

    let mut moves = 0u64;
    let mut state = GameSetup::with_rules(rules).start(&mut rng);

    let (board, score, finished) = loop {
        let game = match state {
            GameResult::Over(over) => break (*over.board(), over.score(), true),
            GameResult::Active(game) => game,
        };

        if moves >= *config.max_moves() {
            warn!(moves, "Move limit reached, abandoning game");
            break (*game.board(), game.score(), false);
        }

        let Some(direction) = strategy.choose(&game, &mut rng) else {
            warn!(strategy = strategy.name(), "Strategy found no move");
            break (*game.board(), game.score(), false);
        };

        state = game.make_move(direction, &mut rng)?;
        moves += 1;
    };

    debug!(score, moves, finished, "Game finished");
    Ok(GameReport::new(
        seed,
        score,
        board.max_tile(),
        moves,
        finished,
        board,
    ))
}

/// Plays `config.games` games; game `i` uses seed `base + i`.
#[instrument(skip(config), fields(games = config.games(), strategy = %config.strategy()))]
pub fn run(config: &AutoplayConfig) -> Result<RunSummary, AutoplayError> {
    config.validate()?;
    let base_seed = (*config.seed()).unwrap_or_else(rand::random);
    info!(base_seed, "Starting autoplay run");

    let reports = (0..u64::from(*config.games()))
        .map(|i| play_game(config, base_seed.wrapping_add(i)))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = RunSummary {
        base_seed,
        strategy: *config.strategy(),
        reports,
    };
    info!(
        best_score = summary.best_score(),
        best_tile = summary.best_tile(),
        finished = summary.finished_count(),
        "Autoplay run complete"
    );
    Ok(summary)
}
