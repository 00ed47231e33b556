use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::model::{Exit, Item, Puzzle, Room, World};
use super::validator::validate_world;
use crate::error::{GameError, Result};

pub const ROOMS_FILE: &str = "rooms.json";
pub const ITEMS_FILE: &str = "items.json";
pub const PUZZLES_FILE: &str = "puzzles.json";

////////////////////
/// JSON STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct RoomsFile {
    rooms: HashMap<String, RoomConfig>,
}

#[derive(Deserialize)]
struct RoomConfig {
    #[serde(default)]
    description: String,
    #[serde(default)]
    exits: BTreeMap<String, String>, // direction -> room id
    #[serde(default)]
    items: Vec<String>,
}

#[derive(Deserialize)]
struct ItemsFile {
    items: HashMap<String, ItemConfig>,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct PuzzlesFile {
    #[serde(default)]
    puzzles: HashMap<String, Puzzle>,
}

/////////////////////////////
/// JSON PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load the three data documents from a directory on disk.
///
/// `puzzles.json` may be absent; the other two may not.
pub fn load_world_from_dir(dir: &Path, start_room: &str) -> Result<World> {
    let rooms_path = dir.join(ROOMS_FILE);
    let items_path = dir.join(ITEMS_FILE);
    let puzzles_path = dir.join(PUZZLES_FILE);

    let rooms = read_file(&rooms_path)?;
    let items = read_file(&items_path)?;
    let puzzles = match fs::read_to_string(&puzzles_path) {
        Ok(s) => Some(s),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no {} in {}, using an empty catalog", PUZZLES_FILE, dir.display());
            None
        }
        Err(source) => {
            return Err(GameError::Io {
                path: puzzles_path,
                source,
            });
        }
    };

    let world = build_world(
        parse(&rooms, &rooms_path)?,
        parse(&items, &items_path)?,
        match puzzles {
            Some(p) => parse(&p, &puzzles_path)?,
            None => PuzzlesFile {
                puzzles: HashMap::new(),
            },
        },
        start_room,
    )?;

    tracing::info!(
        rooms = world.rooms.len(),
        items = world.items.len(),
        puzzles = world.puzzles.len(),
        "loaded world from {}",
        dir.display()
    );
    Ok(world)
}

/// Public API: load the world from in-memory JSON documents.
pub fn load_world_from_strs(
    rooms: &str,
    items: &str,
    puzzles: &str,
    start_room: &str,
) -> Result<World> {
    build_world(
        parse(rooms, Path::new(ROOMS_FILE))?,
        parse(items, Path::new(ITEMS_FILE))?,
        parse(puzzles, Path::new(PUZZLES_FILE))?,
        start_room,
    )
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: for<'de> Deserialize<'de>>(contents: &str, path: &Path) -> Result<T> {
    serde_json::from_str(contents).map_err(|source| GameError::Json {
        path: PathBuf::from(path),
        source,
    })
}

fn build_world(
    rooms_file: RoomsFile,
    items_file: ItemsFile,
    puzzles_file: PuzzlesFile,
    start_room: &str,
) -> Result<World> {
    let rooms = rooms_file
        .rooms
        .into_iter()
        .map(|(id, rc)| {
            let exits = rc
                .exits
                .into_iter()
                .map(|(direction, target)| Exit { direction, target })
                .collect();
            let room = Room {
                id: id.clone(),
                description: rc.description,
                exits,
                items: rc.items,
            };
            (id, room)
        })
        .collect();

    let items = items_file
        .items
        .into_iter()
        .map(|(id, ic)| {
            let item = Item {
                id: id.clone(),
                name: ic.name,
                description: ic.description,
            };
            (id, item)
        })
        .collect();

    let world = World {
        start_room: start_room.to_string(),
        rooms,
        items,
        puzzles: puzzles_file.puzzles,
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(GameError::Invalid(errors));
    }

    Ok(world)
}
