use crate::error::{Result, StructuralError};
use crate::math::polygon_2d::area_and_centroid_2d;
use crate::math::{Point2, ResolveParams};

/// Area and centroid of a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Signed area in square millimeters; positive for counter-clockwise.
    pub area: f64,
    pub centroid: Point2,
}

/// Computes the signed area (shoelace formula) and area-weighted centroid
/// of a polygon. The polygon need not be convex.
pub struct PolygonMetrics<'a> {
    points: &'a [Point2],
    params: ResolveParams,
}

impl<'a> PolygonMetrics<'a> {
    /// Creates a new `PolygonMetrics` query over `points`.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            params: ResolveParams::default(),
        }
    }

    /// Sets the area below which the centroid falls back to the vertex mean.
    #[must_use]
    pub fn with_params(mut self, params: ResolveParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `StructuralError::DegeneratePolygon` for fewer than 3 vertices.
    pub fn execute(&self) -> Result<Metrics> {
        if self.points.len() < 3 {
            return Err(StructuralError::DegeneratePolygon {
                owner: "polygon".to_owned(),
                vertices: self.points.len(),
            }
            .into());
        }
        let (area, centroid) = area_and_centroid_2d(self.points, self.params.area_epsilon);
        Ok(Metrics { area, centroid })
    }
}

/// Signed area and centroid of a polygon at the default tolerances.
///
/// # Errors
///
/// See [`PolygonMetrics::execute`].
pub fn polygon_area_and_centroid(points: &[Point2]) -> Result<(f64, Point2)> {
    let m = PolygonMetrics::new(points).execute()?;
    Ok((m.area, m.centroid))
}
