//! Detective Quest: The Mansion Murder
//!
//! A terminal mystery game. Walk the rooms of a mansion, pick up clues,
//! link each clue to a suspect and let the evidence point at the culprit.
//!
//! # Game Mechanics
//!
//! - **Exploration**: The mansion is a binary tree; go left, go right, or leave
//! - **Clue catalog**: Every clue found is kept in alphabetical order, once
//! - **Suspect index**: Clues are linked to suspects in a chained hash table
//! - **Verdict**: The suspect cited by the most clues is the prime suspect
//!
//! # Architecture
//!
//! - `data` - Room tree, clue catalog (BST) and suspect index (hash table)
//! - `game` - Game state, exploration state machine, case file, analysis
//! - `tui` - Terminal user interface with ratatui

pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::{Game, GameConfig};

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Errors raised when player input or game state doesn't allow an action
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("The clue cannot be empty")]
    EmptyClue,

    #[error("The suspect name cannot be empty")]
    EmptySuspect,

    #[error("Clue is {len} characters long (max {max})")]
    ClueTooLong { len: usize, max: usize },

    #[error("Suspect name is {len} characters long (max {max})")]
    SuspectTooLong { len: usize, max: usize },

    #[error("No exploration in progress")]
    NoExploration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_from_manifest() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(VERSION.split('.').count(), 3);
    }

    #[test]
    fn test_game_error_converts_into_result() {
        fn reject() -> Result<()> {
            Err(GameError::ClueTooLong { len: 120, max: 99 }.into())
        }
        let err = reject().unwrap_err();
        assert_eq!(err.to_string(), "Clue is 120 characters long (max 99)");
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::ClueTooLong { len: 120, max: 99 })
        );
    }
}
