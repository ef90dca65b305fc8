pub mod layer;
pub mod opening;
pub mod room;
pub mod wall;

pub use layer::{Label, Layer, Style};
pub use opening::{Opening, OpeningKey, OpeningKind, Reference};
pub use room::{Room, RoomBoundary, RoomKey};
pub use wall::{Justify, Wall, WallKey};

use crate::error::StructuralError;
use crate::math::Units;
use slotmap::SlotMap;

/// Corner of the sheet the plan's coordinates grow from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    #[default]
    LowerLeft,
    UpperLeft,
}

/// Owns every entity of a floor plan.
///
/// Entities live in arenas keyed by generational indices. References
/// between entities (`Opening::wall_id`, `RoomBoundary::ByLoop`) are
/// authored ids resolved by lookup, never keys.
#[derive(Debug, Clone)]
pub struct Plan {
    pub units: Units,
    pub origin: Origin,
    /// Drawing scale such as `"1:50"`, passed to renderers as is.
    pub scale: Option<String>,
    pub theme: String,
    layers: Vec<Layer>,
    walls: SlotMap<WallKey, Wall>,
    openings: SlotMap<OpeningKey, Opening>,
    rooms: SlotMap<RoomKey, Room>,
    labels: Vec<Label>,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            units: Units::default(),
            origin: Origin::default(),
            scale: None,
            theme: "default".to_owned(),
            layers: vec![
                Layer::new("walls"),
                Layer::new("rooms"),
                Layer::new("annotations"),
            ],
            walls: SlotMap::with_key(),
            openings: SlotMap::with_key(),
            rooms: SlotMap::with_key(),
            labels: Vec::new(),
        }
    }
}

impl Plan {
    /// Creates an empty plan with the default layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Layers ---

    /// Adds a layer, or replaces the one with the same name.
    pub fn set_layer(&mut self, layer: Layer) {
        if let Some(existing) = self.layers.iter_mut().find(|l| l.name == layer.name) {
            *existing = layer;
        } else {
            self.layers.push(layer);
        }
    }

    /// Adds a visible layer with this name unless one already exists.
    pub fn ensure_layer(&mut self, name: &str) {
        if !self.layers.iter().any(|l| l.name == name) {
            self.layers.push(Layer::new(name));
        }
    }

    /// Layers in definition order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    // --- Wall operations ---

    /// Inserts a wall and returns its key.
    pub fn add_wall(&mut self, wall: Wall) -> WallKey {
        self.walls.insert(wall)
    }

    /// Returns a reference to the wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not in this plan.
    pub fn wall(&self, key: WallKey) -> Result<&Wall, StructuralError> {
        self.walls
            .get(key)
            .ok_or_else(|| StructuralError::EntityNotFound("wall".into()))
    }

    /// Looks a wall up by its authored id. The first wall inserted with the
    /// id wins.
    #[must_use]
    pub fn wall_by_id(&self, id: &str) -> Option<(WallKey, &Wall)> {
        self.walls
            .iter()
            .find(|(_, w)| w.id.as_deref() == Some(id))
    }

    /// Walls in insertion order.
    pub fn walls(&self) -> impl Iterator<Item = (WallKey, &Wall)> {
        self.walls.iter()
    }

    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    // --- Opening operations ---

    /// Inserts an opening and returns its key.
    pub fn add_opening(&mut self, opening: Opening) -> OpeningKey {
        self.openings.insert(opening)
    }

    /// Returns a reference to the opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not in this plan.
    pub fn opening(&self, key: OpeningKey) -> Result<&Opening, StructuralError> {
        self.openings
            .get(key)
            .ok_or_else(|| StructuralError::EntityNotFound("opening".into()))
    }

    /// Openings in insertion order.
    pub fn openings(&self) -> impl Iterator<Item = (OpeningKey, &Opening)> {
        self.openings.iter()
    }

    // --- Room operations ---

    /// Inserts a room and returns its key.
    pub fn add_room(&mut self, room: Room) -> RoomKey {
        self.rooms.insert(room)
    }

    /// Returns a reference to the room, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not in this plan.
    pub fn room(&self, key: RoomKey) -> Result<&Room, StructuralError> {
        self.rooms
            .get(key)
            .ok_or_else(|| StructuralError::EntityNotFound("room".into()))
    }

    /// Returns a mutable reference to the room, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not in this plan.
    pub fn room_mut(&mut self, key: RoomKey) -> Result<&mut Room, StructuralError> {
        self.rooms
            .get_mut(key)
            .ok_or_else(|| StructuralError::EntityNotFound("room".into()))
    }

    /// Rooms in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomKey, &Room)> {
        self.rooms.iter()
    }

    // --- Labels ---

    /// Appends a label.
    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

/// Name used for an entity in messages: its id, or its position among
/// entities of the same kind.
#[must_use]
pub fn entity_name(id: Option<&str>, kind: &str, index: usize) -> String {
    match id {
        Some(id) => id.to_owned(),
        None => format!("(unnamed {kind} #{})", index + 1),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn wall(id: &str, x: f64) -> Wall {
        Wall::new(Point2::new(x, 0.0), Point2::new(x + 1000.0, 0.0), 100.0).with_id(id)
    }

    #[test]
    fn default_layers() {
        let plan = Plan::new();
        let names: Vec<_> = plan.layers().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["walls", "rooms", "annotations"]);
    }

    #[test]
    fn ensure_layer_is_idempotent() {
        let mut plan = Plan::new();
        plan.ensure_layer("partitions");
        plan.ensure_layer("partitions");
        assert_eq!(plan.layers().len(), 4);
    }

    #[test]
    fn set_layer_replaces() {
        let mut plan = Plan::new();
        plan.set_layer(Layer::new("walls").hidden());
        assert_eq!(plan.layers().len(), 3);
        assert!(!plan.layers()[0].visible);
    }

    #[test]
    fn wall_lookup_first_wins() {
        let mut plan = Plan::new();
        let first = plan.add_wall(wall("w1", 0.0));
        plan.add_wall(wall("w1", 5000.0));
        let (key, found) = plan.wall_by_id("w1").unwrap();
        assert_eq!(key, first);
        assert!((found.p1.x).abs() < 1e-12);
        assert!(plan.wall_by_id("w9").is_none());
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut plan = Plan::new();
        for (id, x) in [("a", 0.0), ("b", 2000.0), ("c", 4000.0)] {
            plan.add_wall(wall(id, x));
        }
        let ids: Vec<_> = plan.walls().map(|(_, w)| w.id.clone().unwrap()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn keys_resolve_to_entities() {
        let mut plan = Plan::new();
        let o = plan.add_opening(
            Opening::new("w1", 0.0, 900.0, OpeningKind::Window).with_id("win"),
        );
        assert_eq!(plan.opening(o).unwrap().id.as_deref(), Some("win"));

        let other = Plan::new();
        let err = other.opening(o).unwrap_err();
        assert_eq!(err, StructuralError::EntityNotFound("opening".into()));
    }

    #[test]
    fn unnamed_entities_are_positional() {
        assert_eq!(entity_name(Some("w1"), "wall", 0), "w1");
        assert_eq!(entity_name(None, "wall", 2), "(unnamed wall #3)");
    }
}
