mod command;
mod field;
mod items;
mod movement;
mod output;
mod render;

pub use command::{Command, Nudge};
pub use field::{Field, Marker};
pub use items::{examine_item, find_item_by_name, take_item, take_item_by_id, use_item};
pub use movement::{DirectionMatch, move_player, resolve_direction};
pub use output::{Output, OutputBlock};
pub use render::{help_text, inventory_line, look};
