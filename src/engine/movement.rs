use std::collections::{HashMap, HashSet};

use crate::Outcome;
use crate::engine::render::look;
use crate::world;

/// Follow `direction` out of the current room. Exit targets are checked at
/// load time, so a successful lookup always lands in a known room.
pub fn move_player(
    world: &world::World,
    room_items: &HashMap<String, Vec<String>>,
    current_room_id: &mut String,
    visited_rooms: &mut HashSet<String>,
    direction: &str,
) -> Outcome {
    let exit = world
        .room(current_room_id)
        .and_then(|room| room.exit(direction));

    let Some(exit) = exit else {
        return Outcome::fail("You can't go that way.");
    };

    tracing::debug!(from = %current_room_id, to = %exit.target, direction, "move");
    *current_room_id = exit.target.clone();
    visited_rooms.insert(exit.target.clone());

    Outcome::ok(look(world, room_items, current_room_id))
}

pub enum DirectionMatch {
    None,
    One(String),
    Many(Vec<String>),
}

/// Resolve a bare word typed by the player against the room's exits.
///
/// Exact direction names win; otherwise a single character is taken as an
/// abbreviation of every exit starting with it.
pub fn resolve_direction(room: &world::Room, token: &str) -> DirectionMatch {
    let token = token.trim();
    if token.is_empty() {
        return DirectionMatch::None;
    }

    if let Some(exit) = room
        .exits
        .iter()
        .find(|e| e.direction.eq_ignore_ascii_case(token))
    {
        return DirectionMatch::One(exit.direction.clone());
    }

    // Abbreviations: only if the token is EXACTLY one character (e.g. "s")
    let mut chars = token.chars();
    let (Some(abbrev), None) = (chars.next(), chars.next()) else {
        return DirectionMatch::None;
    };

    let mut matches: Vec<String> = room
        .exits
        .iter()
        .filter(|e| {
            e.direction
                .chars()
                .next()
                .is_some_and(|c| c.eq_ignore_ascii_case(&abbrev))
        })
        .map(|e| e.direction.clone())
        .collect();

    match matches.len() {
        0 => DirectionMatch::None,
        1 => DirectionMatch::One(matches.remove(0)),
        _ => {
            matches.sort();
            DirectionMatch::Many(matches)
        }
    }
}
