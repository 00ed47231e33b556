use std::collections::HashMap;

use crate::world;

/// The room description, followed by the names of whatever still lies
/// there. Nothing is appended for an empty room.
pub fn look(
    world: &world::World,
    room_items: &HashMap<String, Vec<String>>,
    room_id: &str,
) -> String {
    let Some(room) = world.room(room_id) else {
        return format!("Error: you are in an unknown room '{}'", room_id);
    };

    let mut room_desc = room.description.clone();

    let here = room_items.get(room_id).map(Vec::as_slice).unwrap_or(&[]);
    if !here.is_empty() {
        let names = here
            .iter()
            .map(|id| world.item_name(id))
            .collect::<Vec<&str>>()
            .join(", ");
        room_desc.push_str("\nYou see: ");
        room_desc.push_str(&names);
    }

    room_desc
}

pub fn inventory_line(names: &[String]) -> String {
    if names.is_empty() {
        "Your inventory is empty.".to_string()
    } else {
        format!("You are carrying: {}", names.join(", "))
    }
}

pub fn help_text() -> String {
    [
        "Game Instructions:",
        "  go <direction> (or just the direction, e.g. 'north' or 'n') moves between rooms.",
        "  take <item> picks something up.",
        "  use <item> / examine <item> work on what you carry.",
        "  step up|down|left|right walks around the room; touching an item picks it up.",
        "  look shows your surroundings, inventory lists your items.",
        "  new game starts over, quit leaves.",
    ]
    .join("\n")
}
