//! Phase-specific typestate structs for 2048.
//!
//! Each phase is its own type. Only `GameActive` has `make_move`, so a
//! finished game cannot be moved at compile time.

use crate::contracts::{Contract, MoveContract};
use crate::direction::Direction;
use crate::error::GameError;
use crate::rules::{available_directions, is_terminal, slide};
use crate::settings::GameRules;
use crate::types::{Board, BoardError, GameView};
use crate::wrapper::Snapshot;
use rand::Rng;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
    rules: GameRules,
}

impl GameSetup {
    /// Creates a new game with the classic rules.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with custom rules.
    #[instrument]
    pub fn with_rules(rules: GameRules) -> Self {
        Self {
            board: Board::new(),
            rules,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the rules.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Seeds the starting tiles (consumes setup, returns the first phase).
    ///
    /// With the classic rules this is always `GameResult::Active`.
    #[instrument(skip(self, rng))]
    pub fn start<R: Rng + ?Sized>(self, rng: &mut R) -> GameResult {
        let board = self
            .rules
            .spawner()
            .seed(&self.board, self.rules.initial_tiles(), rng);
        info!(tiles = board.tile_count(), "Game started");
        GameResult::settle(board, 0, self.rules)
    }
}

// ─────────────────────────────────────────────────────────────
//  Active Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// Invariant enforced by construction: the board always has a move left.
#[derive(Debug, Clone, PartialEq)]
pub struct GameActive {
    pub(crate) board: Board,
    pub(crate) score: u64,
    pub(crate) rules: GameRules,
}

impl GameActive {
    /// Rebuilds a game from externally supplied parts.
    ///
    /// The board is validated cell by cell, since boards can arrive through
    /// deserialization. A terminal board yields `GameResult::Over`.
    ///
    /// # Errors
    ///
    /// - `GameError::MalformedBoard` for an invalid tile value or a board
    ///   with no tiles
    /// - `GameError::InvalidScore` for a score no sequence of merges produces
    #[instrument(skip(board))]
    pub fn from_parts(
        board: Board,
        score: u64,
        rules: GameRules,
    ) -> Result<GameResult, GameError> {
        let board = Board::from_cells(*board.cells())?;
        if board.tile_count() == 0 {
            return Err(BoardError::NoTiles.into());
        }
        if score % 4 != 0 {
            return Err(GameError::InvalidScore(score));
        }
        Ok(GameResult::settle(board, score, rules))
    }

    /// Slides the tiles, consuming self and transitioning to the next state.
    ///
    /// A move that changes nothing returns the same game: no tile is spawned
    /// and the score is untouched. Otherwise one tile is spawned, the merge
    /// score is added, and the game ends if no move remains.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self, rng), fields(direction = %direction, score = self.score))]
    pub fn make_move<R: Rng + ?Sized>(
        self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<GameResult, GameError> {
        let before = self.snapshot();
        MoveContract::pre(&before, &direction)?;

        let moved = slide(&self.board, direction);
        if !moved.changed() {
            debug!("Move changed nothing, ignoring");
            return Ok(GameResult::Active(self));
        }

        let board = self.rules.spawner().spawn(moved.board(), rng);
        let score = self.score + u64::from(moved.score_delta());
        let result = GameResult::settle(board, score, self.rules);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &result.snapshot())?;

        debug!(
            score_delta = moved.score_delta(),
            over = result.is_over(),
            "Move applied"
        );
        Ok(result)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Returns the rules.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Directions that would change the board. Never empty.
    pub fn available_directions(&self) -> Vec<Direction> {
        available_directions(&self.board)
    }

    /// Returns the observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board, self.score, false)
    }
}

// ─────────────────────────────────────────────────────────────
//  Over Phase
// ─────────────────────────────────────────────────────────────

/// Game over - no move can change the board.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOver {
    board: Board,
    score: u64,
    rules: GameRules,
}

impl GameOver {
    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the final score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Returns the rules the game was played with.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Returns the observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board, self.score, true)
    }

    /// Restarts the game with the same rules (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::with_rules(self.rules)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of starting a game or making a move.
#[derive(Debug, Clone, PartialEq)]
pub enum GameResult {
    /// Game continues.
    Active(GameActive),
    /// Game over.
    Over(GameOver),
}

impl GameResult {
    /// Picks the phase for a board: over iff no move remains.
    fn settle(board: Board, score: u64, rules: GameRules) -> Self {
        if is_terminal(&board) {
            info!(score, max_tile = board.max_tile(), "Game over");
            GameResult::Over(GameOver {
                board,
                score,
                rules,
            })
        } else {
            GameResult::Active(GameActive {
                board,
                score,
                rules,
            })
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, GameResult::Over(_))
    }

    /// Returns the observable state.
    pub fn snapshot(&self) -> Snapshot {
        match self {
            GameResult::Active(game) => game.snapshot(),
            GameResult::Over(game) => game.snapshot(),
        }
    }
}

impl GameView for GameSetup {
    fn board(&self) -> &Board {
        &self.board
    }

    fn score(&self) -> u64 {
        0
    }
}

impl GameView for GameActive {
    fn board(&self) -> &Board {
        &self.board
    }

    fn score(&self) -> u64 {
        self.score
    }
}

impl GameView for GameOver {
    fn board(&self) -> &Board {
        &self.board
    }

    fn score(&self) -> u64 {
        self.score
    }
}

impl GameView for GameResult {
    fn board(&self) -> &Board {
        match self {
            GameResult::Active(game) => &game.board,
            GameResult::Over(game) => &game.board,
        }
    }

    fn score(&self) -> u64 {
        match self {
            GameResult::Active(game) => game.score,
            GameResult::Over(game) => game.score,
        }
    }
}
