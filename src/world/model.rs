use std::collections::HashMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Immutable snapshot of the world as loaded from the data files.
///
/// The live game never mutates this; it copies the room item lists out of
/// it on construction and again on every reset.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
    pub items: HashMap<String, Item>,
    pub puzzles: HashMap<String, Puzzle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub description: String,
    pub exits: Vec<Exit>,
    /// Item ids initially placed here, in display order.
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Puzzle records are carried through untouched; no operation reads them.
pub type Puzzle = serde_json::Value;

impl World {
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.get(item_id)
    }

    /// Display name for an item id, falling back to the id itself.
    pub fn item_name<'a>(&'a self, item_id: &'a str) -> &'a str {
        self.items
            .get(item_id)
            .map(|i| i.name.as_str())
            .unwrap_or(item_id)
    }
}

impl Room {
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }
}
