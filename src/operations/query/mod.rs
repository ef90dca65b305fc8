mod polygon_metrics;
mod room_metrics;

pub use polygon_metrics::{polygon_area_and_centroid, Metrics, PolygonMetrics};
pub use room_metrics::RoomMetrics;
