pub mod query;
pub mod resolve;
pub mod validate;

pub use query::{polygon_area_and_centroid, Metrics, PolygonMetrics, RoomMetrics};
pub use resolve::{
    opening_cutout, wall_footprint, OpeningCutout, RoomLoop, WallFootprint, WallFrame,
};
pub use validate::{resolve_and_validate, ResolveAndValidate};
