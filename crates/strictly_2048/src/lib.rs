//! Strictly 2048 - the rules engine of the sliding-tile puzzle.
//!
//! Pure game logic with no rendering or I/O: a presentation layer hands in
//! a direction and gets back the next board, score and game-over flag.
//!
//! # Architecture
//!
//! - **Board**: immutable 4x4 value type
//! - **Rules**: row reduction, orientation, sliding, spawning, terminal detection
//! - **Typestate**: `GameSetup` → `GameActive` → `GameOver`
//! - **Session**: serializable value wrapping either started phase
//! - **Contracts**: invariants checked around every move
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_2048::{Direction, Session};
//!
//! let mut rng = StdRng::seed_from_u64(2048);
//! let session = Session::new(&mut rng);
//! let session = session.apply_move(Direction::Left, &mut rng).unwrap();
//! let snapshot = session.snapshot();
//! assert!(snapshot.board().tile_count() >= 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod contracts;
mod direction;
mod error;
mod invariants;
mod settings;
mod typestate;
mod types;
mod wrapper;

pub mod rules;

// Crate-level exports - Domain types
pub use direction::Direction;
pub use error::GameError;
pub use settings::{DEFAULT_INITIAL_TILES, GameRules};
pub use types::{Board, BoardError, Cells, GRID_SIZE, GameView, MAX_TILE, is_valid_tile};

// Crate-level exports - Rules
pub use rules::{MoveResult, Spawner, is_terminal, slide};

// Crate-level exports - Typestate
pub use typestate::{GameActive, GameOver, GameResult, GameSetup};

// Crate-level exports - Session
pub use wrapper::{Session, Snapshot};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, MoveContract, check_invariants};
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, OccupiedBoardInvariant,
    PowerOfTwoInvariant, ScoreMultipleInvariant,
};
