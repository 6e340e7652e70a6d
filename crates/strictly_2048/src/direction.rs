//! Direction enum for 2048 moves.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A direction the player can slide the tiles.
///
/// The set is closed; every match over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Tiles slide toward row 0.
    Up,
    /// Tiles slide toward the last row.
    Down,
    /// Tiles slide toward column 0.
    Left,
    /// Tiles slide toward the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Get label for this direction (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parse from a full label or its first letter, ignoring case.
    #[instrument]
    pub fn from_label(s: &str) -> Option<Direction> {
        let s = s.trim().to_lowercase();
        <Direction as strum::IntoEnumIterator>::iter()
            .find(|dir| dir.label() == s || (s.len() == 1 && dir.label().starts_with(&s)))
    }
}

impl std::str::FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| GameError::InvalidDirection(s.to_string()))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(" Left ".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("R".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("d".parse::<Direction>(), Ok(Direction::Down));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "diagonal".parse::<Direction>(),
            Err(GameError::InvalidDirection("diagonal".to_string()))
        );
        assert!("".parse::<Direction>().is_err());
        assert!("upp".parse::<Direction>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Direction::Down).unwrap();
        assert_eq!(json, "\"down\"");
    }
}
