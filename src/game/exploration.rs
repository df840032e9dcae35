//! Walking the mansion
//!
//! An exploration is a small state machine: the detective is either standing
//! in a room or has left the house. Every room entered that holds a clue
//! hands the clue to the catalog.

use crate::data::*;
use serde::{Deserialize, Serialize};

/// Where the detective currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplorationState {
    AtRoom(RoomId),
    Exited,
}

/// What happened after a single step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// Walked into a new room. `dead_end` is set when it has no way onwards,
    /// `newly_catalogued` when the room's clue was not in the catalog yet.
    Moved {
        room: RoomId,
        clue: Option<String>,
        newly_catalogued: bool,
        dead_end: bool,
    },
    /// No door that way; still standing in `room`
    InvalidMove { room: RoomId, direction: Direction },
    /// Tried to go on from a room with no doors at all
    DeadEnd { room: RoomId },
    /// Walked out of the mansion from `room`
    Exited { room: RoomId },
    /// The exploration was already over
    AlreadyExited,
}

/// A single walk through the mansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationSession {
    state: ExplorationState,
    path: Vec<RoomId>,
    clues_found: Vec<String>,
}

impl ExplorationSession {
    /// Enter the mansion at the entrance hall
    pub fn start(mansion: &RoomTree, catalog: &mut ClueCatalog) -> Self {
        let root = mansion.root();
        let mut session = Self {
            state: ExplorationState::AtRoom(root),
            path: Vec::new(),
            clues_found: Vec::new(),
        };
        session.visit(mansion, catalog, root);
        session
    }

    /// Take one step in `direction`
    pub fn step(
        &mut self,
        mansion: &RoomTree,
        catalog: &mut ClueCatalog,
        direction: Direction,
    ) -> StepOutcome {
        let current = match self.state {
            ExplorationState::AtRoom(room) => room,
            ExplorationState::Exited => return StepOutcome::AlreadyExited,
        };

        let (left, right) = mansion.children(current);
        let next = match direction {
            Direction::Left => left,
            Direction::Right => right,
            Direction::Leave => {
                self.state = ExplorationState::Exited;
                return StepOutcome::Exited { room: current };
            }
        };

        match next {
            Some(room) => {
                self.state = ExplorationState::AtRoom(room);
                let (clue, newly_catalogued) = match self.visit(mansion, catalog, room) {
                    Some((clue, new)) => (Some(clue), new),
                    None => (None, false),
                };
                StepOutcome::Moved {
                    room,
                    clue,
                    newly_catalogued,
                    dead_end: mansion.is_leaf(room),
                }
            }
            None if left.is_none() && right.is_none() => StepOutcome::DeadEnd { room: current },
            None => StepOutcome::InvalidMove {
                room: current,
                direction,
            },
        }
    }

    /// Enter `room`. Returns its clue and whether the catalog gained it.
    fn visit(
        &mut self,
        mansion: &RoomTree,
        catalog: &mut ClueCatalog,
        room: RoomId,
    ) -> Option<(String, bool)> {
        self.path.push(room);
        let clue = mansion.get(room)?.clue()?;
        let newly_catalogued = catalog.insert(clue);
        self.clues_found.push(clue.to_string());
        Some((clue.to_string(), newly_catalogued))
    }

    pub fn state(&self) -> ExplorationState {
        self.state
    }

    /// The room the detective is standing in, unless they already left
    pub fn current(&self) -> Option<RoomId> {
        match self.state {
            ExplorationState::AtRoom(room) => Some(room),
            ExplorationState::Exited => None,
        }
    }

    pub fn is_exited(&self) -> bool {
        self.state == ExplorationState::Exited
    }

    /// Rooms entered so far, entrance first
    pub fn path(&self) -> &[RoomId] {
        &self.path
    }

    /// Clues picked up on this walk, in the order they were found
    pub fn clues_found(&self) -> &[String] {
        &self.clues_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (RoomTree, ClueCatalog) {
        (RoomTree::build(), ClueCatalog::new())
    }

    #[test]
    fn test_start_at_hall() {
        let (mansion, mut catalog) = setup();
        let session = ExplorationSession::start(&mansion, &mut catalog);

        assert_eq!(session.current(), Some(mansion.root()));
        assert_eq!(session.path(), &[mansion.root()]);
        assert!(session.clues_found().is_empty());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_walk_left_left() {
        let (mansion, mut catalog) = setup();
        let mut session = ExplorationSession::start(&mansion, &mut catalog);

        let first = session.step(&mansion, &mut catalog, Direction::Left);
        assert_eq!(
            first,
            StepOutcome::Moved {
                room: mansion.find("Biblioteca").unwrap(),
                clue: Some("Livro com páginas rasgadas".to_string()),
                newly_catalogued: true,
                dead_end: false,
            }
        );

        let second = session.step(&mansion, &mut catalog, Direction::Left);
        assert_eq!(
            second,
            StepOutcome::Moved {
                room: mansion.find("Escritório").unwrap(),
                clue: Some("Carta anônima".to_string()),
                newly_catalogued: true,
                dead_end: false,
            }
        );

        assert_eq!(
            session.clues_found(),
            &["Livro com páginas rasgadas".to_string(), "Carta anônima".to_string()]
        );
        assert!(catalog.contains("Livro com páginas rasgadas"));
        assert!(catalog.contains("Carta anônima"));
    }

    #[test]
    fn test_invalid_move_stays_put() {
        let (mansion, mut catalog) = setup();
        let mut session = ExplorationSession::start(&mansion, &mut catalog);
        session.step(&mansion, &mut catalog, Direction::Left);
        session.step(&mansion, &mut catalog, Direction::Left);
        let study = mansion.find("Escritório").unwrap();

        // The study only has a door to the left
        let outcome = session.step(&mansion, &mut catalog, Direction::Right);
        assert_eq!(
            outcome,
            StepOutcome::InvalidMove {
                room: study,
                direction: Direction::Right
            }
        );
        assert_eq!(session.current(), Some(study));
        assert_eq!(session.path().len(), 3);
    }

    #[test]
    fn test_reaching_a_leaf() {
        let (mansion, mut catalog) = setup();
        let mut session = ExplorationSession::start(&mansion, &mut catalog);
        session.step(&mansion, &mut catalog, Direction::Right);
        session.step(&mansion, &mut catalog, Direction::Right);

        let outcome = session.step(&mansion, &mut catalog, Direction::Right);
        let greenhouse = mansion.find("Estufa").unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                room: greenhouse,
                clue: Some("Luvas sujas de terra".to_string()),
                newly_catalogued: true,
                dead_end: true,
            }
        );

        for direction in [Direction::Left, Direction::Right] {
            assert_eq!(
                session.step(&mansion, &mut catalog, direction),
                StepOutcome::DeadEnd { room: greenhouse }
            );
        }
        assert_eq!(session.current(), Some(greenhouse));
    }

    #[test]
    fn test_leave_from_anywhere() {
        let (mansion, mut catalog) = setup();
        let mut session = ExplorationSession::start(&mansion, &mut catalog);
        assert_eq!(
            session.step(&mansion, &mut catalog, Direction::Leave),
            StepOutcome::Exited {
                room: mansion.root()
            }
        );
        assert!(session.is_exited());
        assert_eq!(session.state(), ExplorationState::Exited);
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_no_reentry_after_exit() {
        let (mansion, mut catalog) = setup();
        let mut session = ExplorationSession::start(&mansion, &mut catalog);
        session.step(&mansion, &mut catalog, Direction::Leave);

        for direction in [Direction::Left, Direction::Right, Direction::Leave] {
            assert_eq!(
                session.step(&mansion, &mut catalog, direction),
                StepOutcome::AlreadyExited
            );
        }
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_revisit_does_not_duplicate_catalog() {
        let (mansion, mut catalog) = setup();
        for _ in 0..2 {
            let mut session = ExplorationSession::start(&mansion, &mut catalog);
            session.step(&mansion, &mut catalog, Direction::Right);
            session.step(&mansion, &mut catalog, Direction::Left);
        }
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_revisit_reports_clue_as_known() {
        let (mansion, mut catalog) = setup();
        let mut first = ExplorationSession::start(&mansion, &mut catalog);
        first.step(&mansion, &mut catalog, Direction::Left);

        let mut second = ExplorationSession::start(&mansion, &mut catalog);
        let outcome = second.step(&mansion, &mut catalog, Direction::Left);
        assert!(matches!(
            outcome,
            StepOutcome::Moved { clue: Some(_), newly_catalogued: false, .. }
        ));
        let library = mansion.find("Biblioteca").unwrap();
        assert_eq!(second.state(), ExplorationState::AtRoom(library));
        assert_eq!(second.clues_found().len(), 1);
    }
}
