mod defaults;

pub use defaults::{Direction, WallDefaults, WallOptions};

use crate::error::{ConfigError, Result};
use crate::math::{Length, Point2, Units};
use crate::model::{
    Label, Layer, Opening, OpeningKey, Origin, Plan, Room, RoomKey, Wall, WallKey,
};

/// Assembles a [`Plan`] with a drawing cursor.
///
/// Walls are drawn from the cursor with [`go`](Self::go), between two
/// points with [`line`](Self::line), and back to the last
/// [`start`](Self::start) point with [`close_path`](Self::close_path). Each
/// wall takes its thickness, justify and layer from the current
/// [`WallDefaults`] unless overridden by its [`WallOptions`].
///
/// Each builder produces an independent plan; nothing is shared between
/// builders.
#[derive(Debug, Default)]
pub struct PlanBuilder {
    plan: Plan,
    defaults: WallDefaults,
    cursor: Option<Point2>,
    path_start: Option<Point2>,
}

impl PlanBuilder {
    /// Creates a builder over an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the units the plan is authored in.
    pub fn units(&mut self, units: Units) -> &mut Self {
        self.plan.units = units;
        self
    }

    /// Sets the sheet corner coordinates grow from.
    pub fn origin(&mut self, origin: Origin) -> &mut Self {
        self.plan.origin = origin;
        self
    }

    /// Sets the drawing scale recorded on the plan.
    pub fn scale(&mut self, scale: impl Into<String>) -> &mut Self {
        self.plan.scale = Some(scale.into());
        self
    }

    /// Sets the theme name passed to renderers.
    pub fn theme(&mut self, theme: impl Into<String>) -> &mut Self {
        self.plan.theme = theme.into();
        self
    }

    /// Adds a layer, or replaces the one with the same name.
    pub fn layer(&mut self, layer: Layer) -> &mut Self {
        self.plan.set_layer(layer);
        self
    }

    /// Replaces the defaults for walls drawn from now on.
    pub fn walls(&mut self, defaults: WallDefaults) -> &mut Self {
        self.defaults = defaults;
        self
    }

    /// Moves the cursor and starts a new path there.
    pub fn start(&mut self, at: Point2) -> &mut Self {
        self.cursor = Some(at);
        self.path_start = Some(at);
        self
    }

    /// Draws a wall from the cursor and moves the cursor to its end.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoStartPoint` if no start point was set.
    pub fn go(
        &mut self,
        direction: Direction,
        length: Length,
        options: WallOptions,
    ) -> Result<WallKey> {
        let from = self.cursor.ok_or(ConfigError::NoStartPoint)?;
        let to = from + direction.offset(length);
        let key = self.add_wall(from, to, options);
        self.cursor = Some(to);
        Ok(key)
    }

    /// Draws a wall between two points and moves the cursor to its end.
    /// The current path start is kept.
    pub fn line(&mut self, from: Point2, to: Point2, options: WallOptions) -> WallKey {
        let key = self.add_wall(from, to, options);
        self.cursor = Some(to);
        key
    }

    /// Draws a wall from the cursor back to the path start and ends the path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoOpenPath` if there is no path to close.
    pub fn close_path(&mut self, options: WallOptions) -> Result<WallKey> {
        let (Some(from), Some(to)) = (self.cursor, self.path_start) else {
            return Err(ConfigError::NoOpenPath.into());
        };
        let key = self.add_wall(from, to, options);
        self.cursor = Some(to);
        self.path_start = None;
        Ok(key)
    }

    /// Adds an opening. It is placed on its wall during validation.
    pub fn opening(&mut self, opening: Opening) -> OpeningKey {
        self.plan.add_opening(opening)
    }

    /// Adds a room and ensures its layer.
    pub fn room(&mut self, room: Room) -> RoomKey {
        self.plan.ensure_layer(&room.layer);
        self.plan.add_room(room)
    }

    /// Adds a label and ensures its layer.
    pub fn label(&mut self, label: Label) -> &mut Self {
        self.plan.ensure_layer(&label.layer);
        self.plan.add_label(label);
        self
    }

    /// Finishes the plan. The plan is not validated.
    #[must_use]
    pub fn build(self) -> Plan {
        self.plan
    }

    fn add_wall(&mut self, p1: Point2, p2: Point2, options: WallOptions) -> WallKey {
        let layer = options.layer.unwrap_or_else(|| self.defaults.layer.clone());
        self.plan.ensure_layer(&layer);
        let mut wall = Wall::new(
            p1,
            p2,
            options.thickness.unwrap_or(self.defaults.thickness).to_mm(),
        )
        .with_justify(options.justify.unwrap_or(self.defaults.justify))
        .with_layer(layer);
        wall.id = options.id;
        self.plan.add_wall(wall)
    }
}
