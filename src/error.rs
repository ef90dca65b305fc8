use thiserror::Error;

/// Top-level error type for floor plan resolution.
#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error(transparent)]
    Overlap(#[from] OverlapError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// Errors in the shape or connectivity of the plan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StructuralError {
    #[error("wall {wall} has zero length")]
    ZeroLengthWall { wall: String },

    #[error("wall id {id} is defined more than once")]
    DuplicateWallId { id: String },

    #[error("opening {opening} references unknown wall {wall_id}")]
    DanglingOpening { opening: String, wall_id: String },

    #[error("room {room} references unknown wall(s): {}", .wall_ids.join(", "))]
    UnknownLoopWalls { room: String, wall_ids: Vec<String> },

    #[error("room {room} loop could not be closed: {reason}")]
    UnresolvedLoop { room: String, reason: String },

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("polygon of {owner} has {vertices} vertices, at least 3 required")]
    DegeneratePolygon { owner: String, vertices: usize },
}

/// Errors for values outside the extent they must lie in.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoundsError {
    #[error("opening {opening} width must be > 0 (got {width})")]
    NonPositiveWidth { opening: String, width: f64 },

    #[error("opening {opening} offset must be >= 0 (got {at})")]
    NegativeOffset { opening: String, at: f64 },

    #[error("opening {opening} starts {start} before the start of wall {wall}")]
    BeforeWallStart {
        opening: String,
        wall: String,
        start: f64,
    },

    #[error("opening {opening} ends at {end}, past the end of wall {wall} (length {length})")]
    PastWallEnd {
        opening: String,
        wall: String,
        end: f64,
        length: f64,
    },

    #[error("wall {wall} thickness must be >= 0 (got {thickness})")]
    NegativeThickness { wall: String, thickness: f64 },
}

/// Two openings on one wall that claim the same stretch of it.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("openings {first} and {second} overlap on wall {wall}")]
pub struct OverlapError {
    pub wall: String,
    pub first: String,
    pub second: String,
}

/// Errors in how the plan was described.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("opening {opening} has unknown reference frame {symbol:?} (expected centerline, inner_face or outer_face)")]
    UnknownReference { opening: String, symbol: String },

    #[error("start point not set (call start first)")]
    NoStartPoint,

    #[error("no open path to close")]
    NoOpenPath,
}

/// Every violation found by one validation pass.
#[derive(Debug, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<FloorplanError>);

impl ValidationErrors {
    /// Returns the collected violations in the order they were found.
    #[must_use]
    pub fn violations(&self) -> &[FloorplanError] {
        &self.0
    }

    /// Number of collected violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn join_messages(errors: &[FloorplanError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convenience type alias for results using [`FloorplanError`].
pub type Result<T> = std::result::Result<T, FloorplanError>;
