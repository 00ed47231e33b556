mod loader;
mod model;
mod validator;

pub use loader::{ITEMS_FILE, PUZZLES_FILE, ROOMS_FILE, load_world_from_dir, load_world_from_strs};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Exit, Item, Puzzle, Room, World};
pub use validator::{ValidationError, validate_world};
