//! Serializable session value for typestate phases.
//!
//! A presentation layer holds one `Session`, hands it to a transition and
//! keeps the session it gets back. Nothing is mutated in place.

use crate::direction::Direction;
use crate::error::GameError;
use crate::settings::GameRules;
use crate::typestate::{GameActive, GameOver, GameResult, GameSetup};
use crate::types::{Board, GameView};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Observable state handed to the presentation layer after every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    score: u64,
    terminal: bool,
}

impl Snapshot {
    /// Creates a snapshot.
    pub fn new(board: Board, score: u64, terminal: bool) -> Self {
        Self {
            board,
            score,
            terminal,
        }
    }

    /// The board to render.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cumulative score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// True once no move can change the board.
    pub fn terminal(&self) -> bool {
        self.terminal
    }
}

impl GameView for Snapshot {
    fn board(&self) -> &Board {
        &self.board
    }

    fn score(&self) -> u64 {
        self.score
    }
}

/// Serializable wrapper for a started game in either phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum Session {
    /// Game accepts moves.
    Active {
        /// The board state.
        board: Board,
        /// Cumulative score.
        score: u64,
        /// Rules the session was started with.
        rules: GameRules,
    },
    /// Game over; moves are ignored.
    Terminal {
        /// The final board.
        board: Board,
        /// Final score.
        score: u64,
        /// Rules the session was started with.
        rules: GameRules,
    },
}

impl From<GameActive> for Session {
    fn from(game: GameActive) -> Self {
        Session::Active {
            board: game.board,
            score: game.score,
            rules: game.rules,
        }
    }
}

impl From<GameOver> for Session {
    fn from(game: GameOver) -> Self {
        Session::Terminal {
            board: *game.board(),
            score: game.score(),
            rules: *game.rules(),
        }
    }
}

impl From<GameResult> for Session {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Active(g) => g.into(),
            GameResult::Over(g) => g.into(),
        }
    }
}

impl Session {
    /// Starts a fresh session with the classic rules.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_rules(GameRules::default(), rng)
    }

    /// Starts a fresh session with custom rules.
    #[instrument(skip(rng))]
    pub fn with_rules<R: Rng + ?Sized>(rules: GameRules, rng: &mut R) -> Self {
        GameSetup::with_rules(rules).start(rng).into()
    }

    /// Builds a session around an externally supplied board and score.
    ///
    /// # Errors
    ///
    /// See [`GameActive::from_parts`].
    #[instrument(skip(board))]
    pub fn from_parts(board: Board, score: u64, rules: GameRules) -> Result<Self, GameError> {
        GameActive::from_parts(board, score, rules).map(Into::into)
    }

    /// Returns the board for either phase.
    pub fn board(&self) -> &Board {
        match self {
            Session::Active { board, .. } => board,
            Session::Terminal { board, .. } => board,
        }
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> u64 {
        match self {
            Session::Active { score, .. } | Session::Terminal { score, .. } => *score,
        }
    }

    /// Returns the rules the session was started with.
    pub fn rules(&self) -> &GameRules {
        match self {
            Session::Active { rules, .. } => rules,
            Session::Terminal { rules, .. } => rules,
        }
    }

    /// Returns true if the game is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Session::Terminal { .. })
    }

    /// Returns the observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(*self.board(), self.score(), self.is_terminal())
    }

    /// Applies one player input and returns the next session.
    ///
    /// A terminal session comes back unchanged, as does an active one when
    /// the move changes nothing.
    ///
    /// # Errors
    ///
    /// Fails only if the session was built from corrupted data (for example
    /// a hand-edited serialized session).
    #[instrument(skip(self, rng), fields(direction = %direction))]
    pub fn apply_move<R: Rng + ?Sized>(
        self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        match self {
            Session::Active {
                board,
                score,
                rules,
            } => match GameActive::from_parts(board, score, rules)? {
                GameResult::Active(game) => Ok(game.make_move(direction, rng)?.into()),
                GameResult::Over(game) => {
                    warn!("Active session held a board with no moves left");
                    Ok(game.into())
                }
            },
            Session::Terminal { .. } => {
                debug!("Session is over, ignoring move");
                Ok(self)
            }
        }
    }

    /// Parses a direction from text, then applies it.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidDirection` for unrecognised input; the
    /// caller's session is left as it was.
    #[instrument(skip(self, rng))]
    pub fn apply_input<R: Rng + ?Sized>(
        &self,
        input: &str,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let direction: Direction = input.parse()?;
        self.apply_move(direction, rng)
    }
}

impl GameView for Session {
    fn board(&self) -> &Board {
        Session::board(self)
    }

    fn score(&self) -> u64 {
        Session::score(self)
    }
}
