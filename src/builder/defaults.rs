use crate::math::{Length, Vector2};
use crate::model::Justify;

/// Settings applied to every wall drawn after they are set.
#[derive(Debug, Clone, PartialEq)]
pub struct WallDefaults {
    pub thickness: Length,
    pub justify: Justify,
    pub layer: String,
}

impl Default for WallDefaults {
    fn default() -> Self {
        Self {
            thickness: Length::mm(100.0),
            justify: Justify::Center,
            layer: "walls".to_owned(),
        }
    }
}

/// Per-wall overrides of [`WallDefaults`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallOptions {
    pub id: Option<String>,
    pub thickness: Option<Length>,
    pub justify: Option<Justify>,
    pub layer: Option<String>,
}

impl WallOptions {
    /// Options that only name the wall.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Overrides the default thickness.
    #[must_use]
    pub fn thickness(mut self, thickness: Length) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Overrides the default justify.
    #[must_use]
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    /// Overrides the default layer.
    #[must_use]
    pub fn layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }
}

/// Heading for a cursor move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    East,
    West,
    North,
    South,
    /// Counter-clockwise from +x.
    Degrees(f64),
}

impl Direction {
    /// Displacement of a move of `length` in this direction.
    #[must_use]
    pub fn offset(self, length: Length) -> Vector2 {
        let len = length.to_mm();
        match self {
            Self::East => Vector2::new(len, 0.0),
            Self::West => Vector2::new(-len, 0.0),
            Self::North => Vector2::new(0.0, len),
            Self::South => Vector2::new(0.0, -len),
            Self::Degrees(deg) => {
                let (sin, cos) = deg.to_radians().sin_cos();
                Vector2::new(cos * len, sin * len)
            }
        }
    }
}
