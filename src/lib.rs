pub mod config;
pub mod engine;
pub mod error;
pub mod world;

use std::collections::{HashMap, HashSet};

use config::FieldConfig;
use engine::{Command, DirectionMatch, Field, Output, help_text, inventory_line, resolve_direction};
use world::World;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use world::{load_world_from_dir, load_world_from_strs};

/// What every model operation hands back: did it go through, and the text
/// to show the player. Expected failures are never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Outcome {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Outcome {
            success: false,
            message: message.into(),
        }
    }
}

impl From<Outcome> for (bool, String) {
    fn from(o: Outcome) -> Self {
        (o.success, o.message)
    }
}

/// The world model: an immutable snapshot plus the player-specific state
/// derived from it.
///
/// Each item id sits in exactly one place at a time: one entry of
/// `room_items` or `inventory`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub world: World,
    /// Live item lists per room, rebuilt from `world` on reset.
    pub room_items: HashMap<String, Vec<String>>,
    pub current_room_id: String,
    pub inventory: Vec<String>,
    pub visited_rooms: HashSet<String>,
    /// Free-form progress markers; nothing reads them yet.
    pub flags: HashMap<String, String>,
}

impl GameState {
    pub fn new(world: World) -> Self {
        let room_items = initial_room_items(&world);
        GameState {
            current_room_id: world.start_room.clone(),
            world,
            room_items,
            inventory: Vec::new(),
            visited_rooms: HashSet::new(),
            flags: HashMap::new(),
        }
    }

    /// Back to the start of the game. The snapshot is untouched, so this is
    /// structurally identical to a freshly constructed state.
    pub fn reset(&mut self) {
        self.room_items = initial_room_items(&self.world);
        self.current_room_id = self.world.start_room.clone();
        self.inventory.clear();
        self.visited_rooms.clear();
        self.flags.clear();
        tracing::info!(room = %self.current_room_id, "game reset");
    }

    /// Follow the exit named `direction` out of the current room.
    pub fn go(&mut self, direction: &str) -> Outcome {
        engine::move_player(
            &self.world,
            &self.room_items,
            &mut self.current_room_id,
            &mut self.visited_rooms,
            direction,
        )
    }

    pub fn take_item(&mut self, name: &str) -> Outcome {
        engine::take_item(
            &self.world,
            &mut self.room_items,
            &mut self.inventory,
            &self.current_room_id,
            name,
        )
    }

    pub fn take_item_by_id(&mut self, item_id: &str) -> Outcome {
        engine::take_item_by_id(
            &self.world,
            &mut self.room_items,
            &mut self.inventory,
            &self.current_room_id,
            item_id,
        )
    }

    pub fn use_item(&self, name: &str) -> Outcome {
        engine::use_item(&self.world, &self.inventory, name)
    }

    pub fn examine_item(&self, name: &str) -> Outcome {
        engine::examine_item(&self.world, &self.inventory, name)
    }

    pub fn look(&self) -> String {
        engine::look(&self.world, &self.room_items, &self.current_room_id)
    }

    /// Names of held items, in the order they were taken.
    pub fn inventory_names(&self) -> Vec<String> {
        self.inventory
            .iter()
            .map(|id| self.world.item_name(id).to_string())
            .collect()
    }

    pub fn items_here(&self) -> &[String] {
        self.room_items
            .get(&self.current_room_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn initial_room_items(world: &World) -> HashMap<String, Vec<String>> {
    world
        .rooms
        .iter()
        .map(|(id, room)| (id.clone(), room.items.clone()))
        .collect()
}

/// Single owner of the model and the pickup field. Every shell drives the
/// game through [`Session::step`] or [`Session::handle`], one call at a time.
pub struct Session {
    pub state: GameState,
    pub field: Field,
}

impl Session {
    pub fn new(world: World, field_config: FieldConfig) -> Self {
        let state = GameState::new(world);
        let mut field = Field::new(field_config);
        field.reset(&state);
        Session { state, field }
    }

    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        out.say(self.state.look());
        out
    }

    /// Process a single player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        self.handle(Command::parse(input))
    }

    pub fn handle(&mut self, command: Command) -> (Output, bool) {
        let mut out = Output::new();
        let mut quit = false;

        match command {
            Command::Go(direction) => {
                self.go_towards(&mut out, &direction, "You can't go that way.")
            }
            Command::Take(name) => out.outcome(self.state.take_item(&name)),
            Command::Use(name) => out.outcome(self.state.use_item(&name)),
            Command::Examine(name) => out.outcome(self.state.examine_item(&name)),
            Command::Look => out.say(self.state.look()),
            Command::Inventory => out.say(inventory_line(&self.state.inventory_names())),
            Command::Nudge(nudge) => {
                if let Some(outcome) = self.field.nudge(&mut self.state, nudge) {
                    out.outcome(outcome);
                }
            }
            Command::NewGame => {
                self.state.reset();
                self.field.reset(&self.state);
                out.event("New game started!");
                out.say(self.state.look());
            }
            Command::Help => out.say(help_text()),
            Command::Quit => {
                out.say("Thank you for playing!");
                quit = true;
            }
            Command::Incomplete(question) => out.refuse(question),
            Command::Unknown(text) => {
                self.go_towards(&mut out, &text, "I don't understand that command.")
            }
        }

        self.field.sync(&self.state);
        (out, quit)
    }

    /// Resolve typed text against the current room's exits (any case, or a
    /// one-letter abbreviation) and move; `no_match` is the refusal otherwise.
    fn go_towards(&mut self, out: &mut Output, text: &str, no_match: &'static str) {
        let Some(room) = self.state.world.room(&self.state.current_room_id) else {
            out.refuse(no_match);
            return;
        };

        match resolve_direction(room, text) {
            DirectionMatch::One(direction) => out.outcome(self.state.go(&direction)),
            DirectionMatch::Many(directions) => out.refuse(format!(
                "That direction is ambiguous here. Did you mean: {}?",
                directions.join(", ")
            )),
            DirectionMatch::None => out.refuse(no_match),
        }
    }
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        session: Session,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from the three JSON data documents.
        #[wasm_bindgen(constructor)]
        pub fn new(
            rooms_json: &str,
            items_json: &str,
            puzzles_json: &str,
            start_room: &str,
        ) -> std::result::Result<WasmGame, JsValue> {
            let world = load_world_from_strs(rooms_json, items_json, puzzles_json, start_room)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                session: Session::new(world, FieldConfig::default()),
            })
        }

        /// Return the opening description of the start room.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            to_value(&WasmStepResult {
                blocks: self.session.initialize().blocks,
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = self.session.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}
