use crate::error::{BoundsError, Result};
use crate::geometry::Polygon;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector2};
use crate::model::Wall;

/// Local frame of a wall: centerline origin and direction, plus the
/// transverse band its thickness occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct WallFrame {
    /// Name used in messages about this wall.
    pub name: String,
    pub origin: Point2,
    /// Unit direction from p1 to p2.
    pub dir: Vector2,
    /// Left normal of `dir`.
    pub normal: Vector2,
    pub length: f64,
    pub thickness: f64,
    /// Offset of the near long edge along `normal`.
    pub lo: f64,
    /// Offset of the far long edge along `normal`.
    pub hi: f64,
}

impl WallFrame {
    /// Resolves the frame of a wall.
    ///
    /// # Errors
    ///
    /// Returns `StructuralError::ZeroLengthWall` if p1 and p2 coincide and
    /// `BoundsError::NegativeThickness` if the thickness is below zero.
    pub fn from_wall(wall: &Wall, name: &str) -> Result<Self> {
        let (dir, length) = segment_direction(&wall.p1, &wall.p2, name)?;
        if wall.thickness < 0.0 || !wall.thickness.is_finite() {
            return Err(BoundsError::NegativeThickness {
                wall: name.to_owned(),
                thickness: wall.thickness,
            }
            .into());
        }
        let (lo, hi) = wall.justify.band(wall.thickness);
        Ok(Self {
            name: name.to_owned(),
            origin: wall.p1,
            dir,
            normal: left_normal(dir),
            length,
            thickness: wall.thickness,
            lo,
            hi,
        })
    }

    /// Point `along` the centerline from p1, shifted `across` along the normal.
    #[must_use]
    pub fn point_at(&self, along: f64, across: f64) -> Point2 {
        self.origin + self.dir * along + self.normal * across
    }

    /// The full-thickness rectangle between two offsets along the wall,
    /// ordered `a1, b1, b2, a2` (counter-clockwise when thickness > 0).
    #[must_use]
    pub fn band_rect(&self, start: f64, end: f64) -> Polygon {
        Polygon::new(vec![
            self.point_at(start, self.lo),
            self.point_at(end, self.lo),
            self.point_at(end, self.hi),
            self.point_at(start, self.hi),
        ])
    }
}

/// Resolves the plan-view footprint of a wall.
#[derive(Debug)]
pub struct WallFootprint<'a> {
    wall: &'a Wall,
    name: Option<String>,
}

impl<'a> WallFootprint<'a> {
    /// Creates a new `WallFootprint` resolver for `wall`.
    #[must_use]
    pub fn new(wall: &'a Wall) -> Self {
        Self {
            wall,
            name: None,
        }
    }

    /// Overrides the name used in error messages.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Executes the resolution, returning the footprint quad.
    ///
    /// # Errors
    ///
    /// Returns `StructuralError::ZeroLengthWall` for a degenerate centerline
    /// and `BoundsError::NegativeThickness` for a negative thickness.
    pub fn execute(&self) -> Result<Polygon> {
        let name = self
            .name
            .clone()
            .or_else(|| self.wall.id.clone())
            .unwrap_or_else(|| "(unnamed wall)".to_owned());
        let frame = WallFrame::from_wall(self.wall, &name)?;
        Ok(frame.band_rect(0.0, frame.length))
    }
}

/// Resolves the footprint of a wall.
///
/// # Errors
///
/// See [`WallFootprint::execute`].
pub fn wall_footprint(wall: &Wall) -> Result<Polygon> {
    WallFootprint::new(wall).execute()
}
