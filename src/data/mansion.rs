//! The mansion floor plan
//!
//! A fixed binary tree of rooms. Rooms live in an arena and refer to their
//! children by index, so the whole house is one flat `Vec`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Index of a room inside its [`RoomTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(usize);

/// A single room of the mansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// Clue hidden here, if any
    pub clue: Option<String>,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
}

impl Room {
    fn new(name: &str, clue: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            clue: clue.map(String::from),
            left: None,
            right: None,
        }
    }

    /// The clue in this room. An empty clue counts as no clue.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref().filter(|c| !c.is_empty())
    }

    /// True when there is no door onwards
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The whole mansion. Read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTree {
    rooms: Vec<Room>,
    root: RoomId,
}

impl RoomTree {
    /// Build the mansion.
    ///
    /// ```text
    ///                         Hall de Entrada
    ///                /                               \
    ///          Biblioteca                        Sala de Estar
    ///         /          \                      /             \
    ///   Escritório   Sala de Leitura       Cozinha      Jardim de Inverno
    ///     /                  \             /                     \
    /// Cofre Secreto   Varanda dos Fundos  Despensa              Estufa
    /// ```
    pub fn build() -> Self {
        let mut tree = Self {
            rooms: Vec::new(),
            root: RoomId(0),
        };

        let hall = tree.add_room("Hall de Entrada", None);

        let library = tree.add_room("Biblioteca", Some("Livro com páginas rasgadas"));
        let living = tree.add_room("Sala de Estar", Some("Taça de vinho quebrada"));
        tree.attach(hall, Some(library), Some(living));

        let study = tree.add_room("Escritório", Some("Carta anônima"));
        let reading = tree.add_room("Sala de Leitura", Some("Marca de sangue no tapete"));
        tree.attach(library, Some(study), Some(reading));

        let kitchen = tree.add_room("Cozinha", Some("Faca com resíduos"));
        let winter_garden = tree.add_room("Jardim de Inverno", Some("Pegadas na lama"));
        tree.attach(living, Some(kitchen), Some(winter_garden));

        let vault = tree.add_room("Cofre Secreto", Some("Documento comprometedor"));
        tree.attach(study, Some(vault), None);

        let porch = tree.add_room("Varanda dos Fundos", Some("Cigarro apagado às pressas"));
        tree.attach(reading, None, Some(porch));

        let pantry = tree.add_room("Despensa", Some("Veneno para ratos"));
        tree.attach(kitchen, Some(pantry), None);

        let greenhouse = tree.add_room("Estufa", Some("Luvas sujas de terra"));
        tree.attach(winter_garden, None, Some(greenhouse));

        tree.root = hall;
        tree
    }

    fn add_room(&mut self, name: &str, clue: Option<&str>) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(name, clue));
        id
    }

    fn attach(&mut self, parent: RoomId, left: Option<RoomId>, right: Option<RoomId>) {
        let room = &mut self.rooms[parent.0];
        room.left = left;
        room.right = right;
    }

    /// The entrance
    pub fn root(&self) -> RoomId {
        self.root
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Doors out of a room: (left, right)
    pub fn children(&self, id: RoomId) -> (Option<RoomId>, Option<RoomId>) {
        self.get(id)
            .map(|room| (room.left, room.right))
            .unwrap_or((None, None))
    }

    pub fn is_leaf(&self, id: RoomId) -> bool {
        self.get(id).map_or(true, Room::is_leaf)
    }

    /// Look a room up by its exact name
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.name == name).map(RoomId)
    }

    /// Every clue hidden in the house
    pub fn clues(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().filter_map(Room::clue)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Index<RoomId> for RoomTree {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }
}
