pub mod polygon_2d;
pub mod units;

pub use units::{point, Length, Units};

/// 2D point type, in canonical millimeters.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for coincident points and interval comparisons, in millimeters.
pub const EPSILON: f64 = 1e-6;

/// Below this absolute area a polygon is treated as collinear.
pub const AREA_EPSILON: f64 = 1e-9;

/// Tolerances shared by every resolver and the validation engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveParams {
    /// Distance under which two points or offsets are considered equal.
    pub epsilon: f64,
    /// Absolute area under which the centroid falls back to the vertex mean.
    pub area_epsilon: f64,
}

impl Default for ResolveParams {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            area_epsilon: AREA_EPSILON,
        }
    }
}
