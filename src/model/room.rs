use crate::geometry::Polygon;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a room in the plan.
    pub struct RoomKey;
}

/// How a room's outline is given.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomBoundary {
    /// Explicit vertices, taken as-is.
    Polygon(Vec<Point2>),
    /// Ids of walls whose centerlines are stitched into a closed loop.
    ByLoop(Vec<String>),
}

/// A labelled region of the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: Option<String>,
    pub label: Option<String>,
    pub boundary: RoomBoundary,
    pub layer: String,
    pub fill: Option<String>,
    /// Outline cached by validation. Once set it is authoritative.
    pub resolved: Option<Polygon>,
}

impl Room {
    /// Creates an unnamed room on the `rooms` layer.
    #[must_use]
    pub fn new(boundary: RoomBoundary) -> Self {
        Self {
            id: None,
            label: None,
            boundary,
            layer: "rooms".to_owned(),
            fill: None,
            resolved: None,
        }
    }

    /// Sets the authored id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Moves the room to another layer.
    #[must_use]
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    /// Sets the fill passed to renderers.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// The polygon downstream consumers should use: the cached outline if
    /// validation ran, otherwise an explicit polygon.
    #[must_use]
    pub fn outline(&self) -> Option<&[Point2]> {
        if let Some(resolved) = &self.resolved {
            return Some(resolved.vertices());
        }
        match &self.boundary {
            RoomBoundary::Polygon(points) => Some(points.as_slice()),
            RoomBoundary::ByLoop(_) => None,
        }
    }
}
