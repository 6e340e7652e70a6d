//! Game rules for 2048.
//!
//! This module contains pure functions for evaluating and transforming
//! boards. Only the spawner touches randomness, and it takes the source
//! as a parameter.

pub mod orientation;
pub mod reduce;
pub mod slide;
pub mod spawn;
pub mod terminal;

pub use orientation::{orient, restore, reverse_rows, transpose};
pub use reduce::reduce_row;
pub use slide::{MoveResult, slide};
pub use spawn::{DEFAULT_FOUR_PROBABILITY, Spawner};
pub use terminal::{available_directions, has_moves, is_terminal};
