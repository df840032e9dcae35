//! Investigation mechanics
//!
//! Input checks for player-supplied clues and suspect names, the result of
//! registering an association, and the suspect analysis.

use crate::data::*;
use crate::GameError;
use serde::{Deserialize, Serialize};

/// Trim a clue typed by the player and check it against the limits
pub fn normalize_clue(input: &str) -> Result<&str, GameError> {
    let clue = input.trim();
    let len = clue.chars().count();
    if len == 0 {
        return Err(GameError::EmptyClue);
    }
    if len > MAX_CLUE_LEN {
        return Err(GameError::ClueTooLong { len, max: MAX_CLUE_LEN });
    }
    Ok(clue)
}

/// Trim a suspect name typed by the player and check it against the limits
pub fn normalize_suspect(input: &str) -> Result<&str, GameError> {
    let suspect = input.trim();
    let len = suspect.chars().count();
    if len == 0 {
        return Err(GameError::EmptySuspect);
    }
    if len > MAX_SUSPECT_LEN {
        return Err(GameError::SuspectTooLong { len, max: MAX_SUSPECT_LEN });
    }
    Ok(suspect)
}

/// Result of linking a clue to a suspect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub clue: String,
    pub suspect: String,
    /// The clue was not in the catalog before and has been added
    pub newly_catalogued: bool,
}

/// Everyone cited so far and who leads the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseAnalysis {
    pub citations: Vec<Citation>,
    pub prime_suspect: Option<Citation>,
    pub total_entries: usize,
}

impl CaseAnalysis {
    pub fn from_index(index: &SuspectIndex) -> Self {
        Self {
            citations: index.citation_counts(),
            prime_suspect: index.most_cited_suspect(),
            total_entries: index.len(),
        }
    }

    /// Report lines for display
    pub fn lines(&self) -> Vec<String> {
        let Some(prime) = &self.prime_suspect else {
            return vec!["No suspect has been registered yet.".to_string()];
        };

        let mut lines: Vec<String> = self
            .citations
            .iter()
            .map(|c| format!("{}: {} clue(s)", c.suspect, c.count))
            .collect();
        lines.push(String::new());
        lines.push(format!(
            "PRIME SUSPECT: {} ({} clues found)",
            prime.suspect, prime.count
        ));
        lines
    }
}
