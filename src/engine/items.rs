use std::collections::HashMap;

use crate::Outcome;
use crate::world;

/// Position in `ids` of the first item whose name equals `name`, ignoring
/// case. Duplicate names resolve to the earliest entry.
pub fn find_item_by_name(world: &world::World, ids: &[String], name: &str) -> Option<usize> {
    let query = name.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    ids.iter().position(|id| {
        world
            .item(id)
            .is_some_and(|item| item.name.to_lowercase() == query)
    })
}

pub fn take_item(
    world: &world::World,
    room_items: &mut HashMap<String, Vec<String>>,
    inventory: &mut Vec<String>,
    current_room_id: &str,
    name: &str,
) -> Outcome {
    let found = room_items
        .get(current_room_id)
        .and_then(|ids| find_item_by_name(world, ids, name));

    match found {
        Some(idx) => transfer_to_inventory(world, room_items, inventory, current_room_id, idx),
        None => Outcome::fail(format!("There is no {} here.", name.trim())),
    }
}

/// Same contract as [`take_item`], resolved directly by id. Used by the
/// pickup field, which knows exactly which marker was touched.
pub fn take_item_by_id(
    world: &world::World,
    room_items: &mut HashMap<String, Vec<String>>,
    inventory: &mut Vec<String>,
    current_room_id: &str,
    item_id: &str,
) -> Outcome {
    let found = room_items
        .get(current_room_id)
        .and_then(|ids| ids.iter().position(|id| id == item_id));

    match found {
        Some(idx) => transfer_to_inventory(world, room_items, inventory, current_room_id, idx),
        None => Outcome::fail(format!("There is no {} here.", world.item_name(item_id))),
    }
}

fn transfer_to_inventory(
    world: &world::World,
    room_items: &mut HashMap<String, Vec<String>>,
    inventory: &mut Vec<String>,
    current_room_id: &str,
    idx: usize,
) -> Outcome {
    let Some(ids) = room_items.get_mut(current_room_id) else {
        return Outcome::fail("There is nothing here.");
    };

    let item_id = ids.remove(idx);
    let message = format!("You have taken the {}.", world.item_name(&item_id));
    tracing::debug!(item = %item_id, room = current_room_id, "take");
    inventory.push(item_id);

    Outcome::ok(message)
}

pub fn use_item(world: &world::World, inventory: &[String], name: &str) -> Outcome {
    match find_item_by_name(world, inventory, name) {
        // Item use has no modelled effect yet.
        Some(idx) => Outcome::ok(format!("You used the {}.", world.item_name(&inventory[idx]))),
        None => not_held(name),
    }
}

pub fn examine_item(world: &world::World, inventory: &[String], name: &str) -> Outcome {
    let item = find_item_by_name(world, inventory, name).and_then(|idx| world.item(&inventory[idx]));

    match item {
        Some(item) => Outcome::ok(format!("{}: {}", item.name, item.description)),
        None => not_held(name),
    }
}

fn not_held(name: &str) -> Outcome {
    Outcome::fail(format!("You don't have a {}.", name.trim()))
}
