//! Data structures for the mansion and the investigation
//!
//! The room tree, the sorted clue catalog and the clue→suspect index,
//! plus the small shared types the game layer and the UI pass around.

pub mod catalog;
pub mod mansion;
pub mod suspects;

pub use catalog::*;
pub use mansion::*;
pub use suspects::*;

use serde::{Deserialize, Serialize};

/// Longest clue text accepted from the player.
pub const MAX_CLUE_LEN: usize = 99;

/// Longest suspect name accepted from the player.
pub const MAX_SUSPECT_LEN: usize = 49;

/// A move the player can make while exploring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    /// Walk out of the mansion from wherever you are
    Leave,
}

impl Direction {
    /// Map a typed key to a direction.
    ///
    /// Accepts the classic `e`/`d`/`s` (esquerda, direita, sair) keys as
    /// well as `l`/`r`/`q`, in either case.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'e' | 'l' => Some(Direction::Left),
            'd' | 'r' => Some(Direction::Right),
            's' | 'q' => Some(Direction::Leave),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Leave => write!(f, "out"),
        }
    }
}

/// Kind of a log message, used for coloring in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    Info,
    Clue,
    Warning,
    Verdict,
}

impl MessageKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            MessageKind::Info => "ℹ",
            MessageKind::Clue => "◆",
            MessageKind::Warning => "▲",
            MessageKind::Verdict => "●",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Info => write!(f, "INFO"),
            MessageKind::Clue => write!(f, "CLUE"),
            MessageKind::Warning => write!(f, "WARN"),
            MessageKind::Verdict => write!(f, "VERDICT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_keys() {
        assert_eq!(Direction::from_key('e'), Some(Direction::Left));
        assert_eq!(Direction::from_key('E'), Some(Direction::Left));
        assert_eq!(Direction::from_key('d'), Some(Direction::Right));
        assert_eq!(Direction::from_key('R'), Some(Direction::Right));
        assert_eq!(Direction::from_key('s'), Some(Direction::Leave));
        assert_eq!(Direction::from_key('q'), Some(Direction::Leave));
        assert_eq!(Direction::from_key('x'), None);
        assert_eq!(Direction::from_key('1'), None);
    }
}
