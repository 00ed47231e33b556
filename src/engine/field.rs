//! Headless pickup field.
//!
//! The player marker walks a bounded rectangle; items of the current room
//! are scattered on it as markers, and touching one takes that item through
//! the model. The field holds no game state of its own beyond positions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FieldConfig;
use crate::engine::command::Nudge;
use crate::{GameState, Outcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub item_id: String,
    pub x: i32,
    pub y: i32,
}

pub struct Field {
    config: FieldConfig,
    position: (i32, i32),
    markers: Vec<Marker>,
    /// Room the markers were scattered for.
    room_id: String,
    rng: StdRng,
}

impl Field {
    pub fn new(config: FieldConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Field {
            position: centre(&config),
            config,
            markers: Vec::new(),
            room_id: String::new(),
            rng,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Player back to the centre, markers re-scattered for the current room.
    pub fn reset(&mut self, state: &GameState) {
        self.position = centre(&self.config);
        self.scatter(state);
    }

    /// Bring markers in line with the model after any command: re-scatter on
    /// a room change, otherwise drop markers whose item has left the room.
    pub fn sync(&mut self, state: &GameState) {
        if self.room_id != state.current_room_id {
            self.scatter(state);
            return;
        }
        let here = state.items_here();
        self.markers.retain(|m| here.contains(&m.item_id));
    }

    fn scatter(&mut self, state: &GameState) {
        let FieldConfig {
            width,
            height,
            margin,
            ..
        } = self.config;

        self.room_id = state.current_room_id.clone();
        self.markers = state
            .items_here()
            .iter()
            .map(|item_id| Marker {
                item_id: item_id.clone(),
                x: spot(&mut self.rng, margin, width),
                y: spot(&mut self.rng, margin, height),
            })
            .collect();
    }

    /// Move one step. Returns a refusal when the step would leave the field,
    /// the take result when a marker is touched, and nothing otherwise.
    pub fn nudge(&mut self, state: &mut GameState, nudge: Nudge) -> Option<Outcome> {
        self.sync(state);

        let (dx, dy) = nudge.delta(self.config.step);
        let next = self
            .position
            .0
            .checked_add(dx)
            .zip(self.position.1.checked_add(dy));

        let Some((x, y)) = next.filter(|&(x, y)| {
            0 < x && x < self.config.width && 0 < y && y < self.config.height
        }) else {
            return Some(Outcome::fail("You can't go that way."));
        };
        self.position = (x, y);

        let reach = self.config.reach;
        let touched = self
            .markers
            .iter()
            .position(|m| (m.x - x).abs() <= reach && (m.y - y).abs() <= reach)?;

        let marker = self.markers.remove(touched);
        tracing::debug!(item = %marker.item_id, x, y, "field pickup");
        Some(state.take_item_by_id(&marker.item_id))
    }

    #[cfg(test)]
    fn place(&mut self, item_id: &str, x: i32, y: i32) {
        self.markers.retain(|m| m.item_id != item_id);
        self.markers.push(Marker {
            item_id: item_id.to_string(),
            x,
            y,
        });
    }
}

fn centre(config: &FieldConfig) -> (i32, i32) {
    (config.width / 2, config.height / 2)
}

/// A coordinate at least `margin` away from both ends of `0..=extent`, or
/// the middle when the field is too small for that.
fn spot(rng: &mut StdRng, margin: i32, extent: i32) -> i32 {
    let (lo, hi) = (margin, extent - margin);
    if lo > hi {
        extent / 2
    } else {
        rng.gen_range(lo..=hi)
    }
}
