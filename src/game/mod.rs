//! Core game logic and state management

pub mod case_file;
pub mod exploration;
pub mod investigation;

pub use exploration::{ExplorationSession, ExplorationState, StepOutcome};
pub use investigation::{CaseAnalysis, Registration};

use crate::data::*;
use crate::GameError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Messages kept in the log before the oldest are dropped
const MESSAGE_LOG_LIMIT: usize = 200;

/// Start-up options for a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Load the case file's associations before play starts
    pub load_case_file: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            load_case_file: true,
        }
    }
}

/// The main game state
#[derive(Debug)]
pub struct Game {
    /// The house being searched
    pub mansion: RoomTree,

    /// Clues found so far, sorted
    pub catalog: ClueCatalog,

    /// Clue → suspect associations
    pub suspects: SuspectIndex,

    /// Case being investigated
    pub case: case_file::CaseFile,

    /// Walk in progress, if any
    pub exploration: Option<ExplorationSession>,

    /// Game statistics
    pub stats: GameStats,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,
}

/// Game statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub explorations: u32,
    pub rooms_visited: u32,
    pub clues_discovered: u32,
    pub invalid_moves: u32,
    pub associations_registered: u32,
    pub queries: u32,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    pub message: String,
}

impl GameMessage {
    pub fn info(message: &str) -> Self {
        Self::new(MessageKind::Info, message)
    }

    pub fn new(kind: MessageKind, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            message: message.to_string(),
        }
    }
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let mut game = Self {
            mansion: RoomTree::build(),
            catalog: ClueCatalog::new(),
            suspects: SuspectIndex::new(),
            case: case_file::mansion_murder(),
            exploration: None,
            stats: GameStats::default(),
            message_log: Vec::new(),
        };

        game.add_message(GameMessage::info(game.case.synopsis));

        if config.load_case_file {
            let loaded = game.case.load_into(&mut game.suspects, &mut game.catalog);
            game.add_message(GameMessage::info(&format!(
                "Case file loaded: {} clue/suspect associations on record.",
                loaded
            )));
        }

        tracing::info!(
            case = game.case.title,
            catalogued = game.catalog.len(),
            "new game"
        );
        game
    }

    /// Add a message to the log
    pub fn add_message(&mut self, message: GameMessage) {
        self.message_log.push(message);
        if self.message_log.len() > MESSAGE_LOG_LIMIT {
            let excess = self.message_log.len() - MESSAGE_LOG_LIMIT;
            self.message_log.drain(..excess);
        }
    }

    /// Walk in through the front door. Any previous walk is abandoned.
    pub fn begin_exploration(&mut self) -> RoomId {
        let catalogued = self.catalog.len();
        let session = ExplorationSession::start(&self.mansion, &mut self.catalog);
        let root = self.mansion.root();
        self.stats.explorations += 1;
        self.stats.rooms_visited += 1;
        self.stats.clues_discovered += (self.catalog.len() - catalogued) as u32;
        self.exploration = Some(session);

        let name = self.mansion[root].name.clone();
        self.add_message(GameMessage::info(&format!("You step into {}.", name)));
        tracing::debug!(room = %name, "exploration started");
        root
    }

    /// Take a step in the current walk.
    ///
    /// Leaving the house, or reaching a room with no way onwards, ends the
    /// walk; the detective heads back to the main menu.
    pub fn explore(&mut self, direction: Direction) -> Result<StepOutcome, GameError> {
        let session = self.exploration.as_mut().ok_or(GameError::NoExploration)?;
        let outcome = session.step(&self.mansion, &mut self.catalog, direction);
        tracing::debug!(?direction, ?outcome, "exploration step");

        match &outcome {
            StepOutcome::Moved {
                room,
                clue,
                newly_catalogued,
                dead_end,
            } => {
                self.stats.rooms_visited += 1;
                let name = self.mansion[*room].name.clone();
                self.add_message(GameMessage::info(&format!("You are in: {}", name)));
                match clue {
                    Some(clue) if *newly_catalogued => {
                        self.stats.clues_discovered += 1;
                        self.add_message(GameMessage::new(
                            MessageKind::Clue,
                            &format!("You found a clue: \"{}\"", clue),
                        ));
                    }
                    Some(clue) => self.add_message(GameMessage::info(&format!(
                        "\"{}\" is already in your catalog.",
                        clue
                    ))),
                    None => {}
                }
                if *dead_end {
                    self.add_message(GameMessage::new(
                        MessageKind::Warning,
                        "This is the end of the corridor. Heading back...",
                    ));
                    self.exploration = None;
                }
            }
            StepOutcome::InvalidMove { direction, .. } => {
                self.stats.invalid_moves += 1;
                self.add_message(GameMessage::new(
                    MessageKind::Warning,
                    &format!("There is no way {}!", direction),
                ));
            }
            StepOutcome::DeadEnd { .. } => {
                self.stats.invalid_moves += 1;
                self.add_message(GameMessage::new(
                    MessageKind::Warning,
                    "You have reached a dead end!",
                ));
                self.exploration = None;
            }
            StepOutcome::Exited { .. } | StepOutcome::AlreadyExited => {
                self.add_message(GameMessage::info("Leaving the exploration..."));
                self.exploration = None;
            }
        }

        Ok(outcome)
    }

    /// The room the detective is standing in, if exploring
    pub fn current_room(&self) -> Option<&Room> {
        let id = self.exploration.as_ref()?.current()?;
        self.mansion.get(id)
    }

    /// Link a clue to a suspect and make sure the clue is catalogued
    pub fn register_association(
        &mut self,
        clue: &str,
        suspect: &str,
    ) -> Result<Registration, GameError> {
        let clue = investigation::normalize_clue(clue)?;
        let suspect = investigation::normalize_suspect(suspect)?;

        self.suspects.insert(clue, suspect);
        let newly_catalogued = self.catalog.insert(clue);
        self.stats.associations_registered += 1;

        self.add_message(GameMessage::new(
            MessageKind::Clue,
            &format!("Clue \"{}\" linked to suspect: {}", clue, suspect),
        ));
        if newly_catalogued {
            self.add_message(GameMessage::info("Clue added to the catalog."));
        }
        tracing::info!(clue, suspect, newly_catalogued, "association registered");

        Ok(Registration {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            newly_catalogued,
        })
    }

    /// Everyone on record for this clue, newest first
    pub fn suspects_for(&mut self, clue: &str) -> Result<Vec<String>, GameError> {
        let clue = investigation::normalize_clue(clue)?;
        self.stats.queries += 1;
        let found: Vec<String> = self.suspects.lookup_all(clue).map(String::from).collect();
        tracing::debug!(clue, matches = found.len(), "clue query");
        Ok(found)
    }

    /// Tally every citation and name the prime suspect
    pub fn analysis(&self) -> CaseAnalysis {
        CaseAnalysis::from_index(&self.suspects)
    }

    /// Hidden clues the catalog already holds, and how many there are
    pub fn discovery_progress(&self) -> (usize, usize) {
        let total = self.mansion.clues().count();
        let found = self
            .mansion
            .clues()
            .filter(|c| self.catalog.contains(c))
            .count();
        (found, total)
    }

    /// One-line status summary
    pub fn check_status(&self) -> String {
        let (found, total) = self.discovery_progress();
        format!(
            "Clues: {}/{} | Catalog: {} | Associations: {} | Rooms visited: {}",
            found,
            total,
            self.catalog.len(),
            self.suspects.len(),
            self.stats.rooms_visited
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_game() -> Game {
        Game::new(&GameConfig {
            load_case_file: false,
        })
    }

    #[test]
    fn test_new_game_loads_case_file() {
        let game = Game::new(&GameConfig::default());
        assert_eq!(game.catalog.len(), 10);
        assert_eq!(game.suspects.len(), 10);
        assert_eq!(game.discovery_progress(), (10, 10));
    }

    #[test]
    fn test_blank_game() {
        let game = blank_game();
        assert!(game.catalog.is_empty());
        assert!(game.suspects.is_empty());
        assert_eq!(game.discovery_progress(), (0, 10));
        assert_eq!(game.analysis().prime_suspect, None);
    }

    #[test]
    fn test_explore_without_walk() {
        let mut game = blank_game();
        assert_eq!(game.explore(Direction::Left), Err(GameError::NoExploration));
    }

    #[test]
    fn test_explore_collects_clues() {
        let mut game = blank_game();
        game.begin_exploration();
        assert_eq!(game.current_room().unwrap().name, "Hall de Entrada");

        game.explore(Direction::Left).unwrap();
        game.explore(Direction::Right).unwrap();
        assert_eq!(game.current_room().unwrap().name, "Sala de Leitura");

        let clues: Vec<&str> = game.catalog.inorder().collect();
        assert_eq!(clues, vec!["Livro com páginas rasgadas", "Marca de sangue no tapete"]);
        assert_eq!(game.stats.clues_discovered, 2);
        assert_eq!(game.stats.rooms_visited, 3);
    }

    #[test]
    fn test_dead_end_ends_walk() {
        let mut game = blank_game();
        game.begin_exploration();
        game.explore(Direction::Left).unwrap();
        game.explore(Direction::Left).unwrap();
        let outcome = game.explore(Direction::Left).unwrap();

        assert!(matches!(outcome, StepOutcome::Moved { dead_end: true, .. }));
        assert!(game.exploration.is_none());
        assert_eq!(game.explore(Direction::Left), Err(GameError::NoExploration));
        assert!(game.catalog.contains("Documento comprometedor"));
    }

    #[test]
    fn test_repeat_walks_count_each_clue_once() {
        let mut game = blank_game();
        for _ in 0..3 {
            game.begin_exploration();
            game.explore(Direction::Left).unwrap();
            game.explore(Direction::Leave).unwrap();
        }

        assert_eq!(game.catalog.len(), 1);
        assert_eq!(game.stats.clues_discovered, 1);
        assert_eq!(game.stats.explorations, 3);
        assert_eq!(game.stats.rooms_visited, 6);
        assert_eq!(game.message_log.last().unwrap().message, "Leaving the exploration...");
        assert!(game
            .message_log
            .iter()
            .any(|m| m.message == "\"Livro com páginas rasgadas\" is already in your catalog."));
    }

    #[test]
    fn test_case_file_clues_are_not_discoveries() {
        let mut game = Game::new(&GameConfig::default());
        game.begin_exploration();
        game.explore(Direction::Right).unwrap();
        assert_eq!(game.stats.clues_discovered, 0);
    }

    #[test]
    fn test_invalid_move_keeps_walk() {
        let mut game = blank_game();
        game.begin_exploration();
        game.explore(Direction::Left).unwrap();
        game.explore(Direction::Left).unwrap();

        let outcome = game.explore(Direction::Right).unwrap();
        assert!(matches!(outcome, StepOutcome::InvalidMove { .. }));
        assert!(game.exploration.is_some());
        assert_eq!(game.stats.invalid_moves, 1);
    }

    #[test]
    fn test_leave_ends_walk() {
        let mut game = blank_game();
        game.begin_exploration();
        let outcome = game.explore(Direction::Leave).unwrap();
        assert!(matches!(outcome, StepOutcome::Exited { .. }));
        assert!(game.current_room().is_none());
    }

    #[test]
    fn test_register_association_mirrors_into_catalog() {
        let mut game = blank_game();
        let first = game.register_association("  Carta anônima\n", "Sr. Ricardo").unwrap();
        assert_eq!(first.clue, "Carta anônima");
        assert!(first.newly_catalogued);

        let second = game.register_association("Carta anônima", "Mordomo James").unwrap();
        assert!(!second.newly_catalogued);

        assert_eq!(game.catalog.len(), 1);
        assert_eq!(game.suspects.len(), 2);
        assert_eq!(
            game.suspects_for("Carta anônima").unwrap(),
            vec!["Mordomo James", "Sr. Ricardo"]
        );
    }

    #[test]
    fn test_register_rejects_bad_input() {
        let mut game = blank_game();
        assert_eq!(
            game.register_association("", "Sr. Ricardo"),
            Err(GameError::EmptyClue)
        );
        assert_eq!(
            game.register_association("Carta anônima", " "),
            Err(GameError::EmptySuspect)
        );
        assert!(matches!(
            game.register_association(&"x".repeat(120), "Sr. Ricardo"),
            Err(GameError::ClueTooLong { len: 120, .. })
        ));
        assert!(game.suspects.is_empty());
        assert!(game.catalog.is_empty());
    }

    #[test]
    fn test_suspects_for_unknown_clue() {
        let mut game = Game::new(&GameConfig::default());
        assert!(game.suspects_for("Chapéu esquecido").unwrap().is_empty());
        assert_eq!(game.stats.queries, 1);
    }

    #[test]
    fn test_message_log_is_bounded() {
        let mut game = blank_game();
        for i in 0..(MESSAGE_LOG_LIMIT + 50) {
            game.add_message(GameMessage::info(&format!("note {}", i)));
        }
        assert_eq!(game.message_log.len(), MESSAGE_LOG_LIMIT);
        assert_eq!(
            game.message_log.last().unwrap().message,
            format!("note {}", MESSAGE_LOG_LIMIT + 49)
        );
    }
}
