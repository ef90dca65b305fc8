use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a wall in the plan.
    pub struct WallKey;
}

/// How a wall's solid thickness is distributed around its centerline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Thickness straddles the centerline.
    #[default]
    Center,
    /// Thickness lies entirely on the left of the p1 → p2 direction.
    Left,
    /// Thickness lies entirely on the right of the p1 → p2 direction.
    Right,
}

impl Justify {
    /// Transverse band `(lo, hi)` occupied by the wall, measured along the
    /// left normal of the centerline.
    #[must_use]
    pub fn band(self, thickness: f64) -> (f64, f64) {
        match self {
            Self::Center => (-thickness * 0.5, thickness * 0.5),
            Self::Left => (0.0, thickness),
            Self::Right => (-thickness, 0.0),
        }
    }
}

/// A straight wall segment given by its centerline.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub id: Option<String>,
    pub p1: Point2,
    pub p2: Point2,
    pub thickness: f64,
    pub justify: Justify,
    pub layer: String,
}

impl Wall {
    /// Creates a center-justified wall on the `walls` layer.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2, thickness: f64) -> Self {
        Self {
            id: None,
            p1,
            p2,
            thickness,
            justify: Justify::Center,
            layer: "walls".to_owned(),
        }
    }

    /// Sets the authored id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets which side of the centerline the thickness occupies.
    #[must_use]
    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Moves the wall to another layer.
    #[must_use]
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    /// Centerline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn length_3_4_5() {
        let w = Wall::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0), 100.0);
        assert_relative_eq!(w.length(), 5.0);
    }

    #[test]
    fn bands_per_justify() {
        for (justify, lo, hi) in [
            (Justify::Center, -100.0, 100.0),
            (Justify::Left, 0.0, 200.0),
            (Justify::Right, -200.0, 0.0),
        ] {
            let band = justify.band(200.0);
            assert_relative_eq!(band.0, lo);
            assert_relative_eq!(band.1, hi);
        }
    }
}
