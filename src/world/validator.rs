use std::collections::HashMap;
use std::fmt;

use super::model::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks the integrity rules the live game relies on. Every violation is
/// reported, sorted so the output is stable across runs.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start_room must exist
    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    let mut room_errors: Vec<ValidationError> = Vec::new();

    // Validate exits
    for (room_id, room) in &world.rooms {
        for exit in &room.exits {
            if exit.direction.trim().is_empty() {
                room_errors.push(ValidationError::new(format!(
                    "room '{}' has an exit with an empty direction",
                    room_id
                )));
            }
            if !world.rooms.contains_key(&exit.target) {
                room_errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, exit.direction, exit.target
                )));
            }
        }
    }

    // Validate item placement: each id known, and in at most one slot overall
    let mut placed_in: HashMap<&str, &str> = HashMap::new();
    for (room_id, room) in &world.rooms {
        for item_id in &room.items {
            if !world.items.contains_key(item_id) {
                room_errors.push(ValidationError::new(format!(
                    "room '{}' lists missing item '{}'",
                    room_id, item_id
                )));
            }
            if let Some(first) = placed_in.insert(item_id.as_str(), room_id.as_str()) {
                room_errors.push(ValidationError::new(format!(
                    "item '{}' is placed more than once (rooms '{}' and '{}')",
                    item_id,
                    first.min(room_id.as_str()),
                    first.max(room_id.as_str())
                )));
            }
        }
    }

    for (item_id, item) in &world.items {
        if item.name.trim().is_empty() {
            room_errors.push(ValidationError::new(format!(
                "item '{}' has an empty name",
                item_id
            )));
        }
    }

    room_errors.sort_by(|a, b| a.message.cmp(&b.message));
    errors.extend(room_errors);

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::model::{Exit, Item, Room};

    fn room(id: &str, exits: &[(&str, &str)], items: &[&str]) -> Room {
        Room {
            id: id.to_string(),
            description: format!("The {id}."),
            exits: exits
                .iter()
                .map(|(d, t)| Exit {
                    direction: d.to_string(),
                    target: t.to_string(),
                })
                .collect(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
        }
    }

    fn world(rooms: Vec<Room>, items: Vec<Item>) -> World {
        World {
            start_room: "entrance".to_string(),
            rooms: rooms.into_iter().map(|r| (r.id.clone(), r)).collect(),
            items: items.into_iter().map(|i| (i.id.clone(), i)).collect(),
            puzzles: HashMap::new(),
        }
    }

    #[test]
    fn consistent_world_passes() {
        let w = world(
            vec![
                room("entrance", &[("north", "hall")], &[]),
                room("hall", &[("south", "entrance")], &["key"]),
            ],
            vec![item("key", "key")],
        );
        assert!(validate_world(&w).is_empty());
    }

    #[test]
    fn empty_world_reports_missing_rooms_and_start() {
        let errors = validate_world(&world(vec![], vec![]));
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "world has no rooms",
                "start_room 'entrance' not found among rooms"
            ]
        );
    }

    #[test]
    fn dangling_exit_is_reported() {
        let w = world(vec![room("entrance", &[("down", "cellar")], &[])], vec![]);
        let errors = validate_world(&w);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "room 'entrance' exit 'down' targets missing room 'cellar'"
        );
    }

    #[test]
    fn unknown_item_in_room_is_reported() {
        let w = world(vec![room("entrance", &[], &["lamp"])], vec![]);
        let errors = validate_world(&w);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("missing item 'lamp'"));
    }

    #[test]
    fn item_placed_twice_is_reported() {
        let w = world(
            vec![
                room("entrance", &[("north", "hall")], &["key"]),
                room("hall", &[], &["key"]),
            ],
            vec![item("key", "key")],
        );
        let errors = validate_world(&w);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "item 'key' is placed more than once (rooms 'entrance' and 'hall')"
        );
    }

    #[test]
    fn duplicate_item_names_are_allowed() {
        let w = world(
            vec![room("entrance", &[], &["coin_a", "coin_b"])],
            vec![item("coin_a", "coin"), item("coin_b", "Coin")],
        );
        assert!(validate_world(&w).is_empty());
    }

    #[test]
    fn blank_names_and_directions_are_reported() {
        let w = world(
            vec![room("entrance", &[(" ", "entrance")], &["thing"])],
            vec![item("thing", "  ")],
        );
        let errors = validate_world(&w);
        assert_eq!(errors.len(), 2);
    }
}
