use std::fmt;

use super::Point2;

/// Length unit a plan is authored in. All geometry is stored in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Millimeters,
    Centimeters,
    Meters,
}

impl Units {
    /// Number of millimeters in one of this unit.
    #[must_use]
    pub fn scale_to_mm(self) -> f64 {
        match self {
            Self::Millimeters => 1.0,
            Self::Centimeters => 10.0,
            Self::Meters => 1000.0,
        }
    }

    /// Tags a raw value authored in this unit.
    #[must_use]
    pub fn length(self, value: f64) -> Length {
        Length::from_mm(value * self.scale_to_mm())
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Millimeters => "millimeters",
            Self::Centimeters => "centimeters",
            Self::Meters => "meters",
        };
        f.write_str(name)
    }
}

/// A length normalized to canonical millimeters at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Length(f64);

impl Length {
    /// Wraps a value already in millimeters.
    #[must_use]
    pub fn from_mm(mm: f64) -> Self {
        Self(mm)
    }

    /// A length in millimeters.
    #[must_use]
    pub fn mm(value: f64) -> Self {
        Self(value)
    }

    /// A length in centimeters.
    #[must_use]
    pub fn cm(value: f64) -> Self {
        Units::Centimeters.length(value)
    }

    /// A length in meters.
    #[must_use]
    pub fn m(value: f64) -> Self {
        Units::Meters.length(value)
    }

    /// The value in millimeters.
    #[must_use]
    pub fn to_mm(self) -> f64 {
        self.0
    }
}

/// Builds a point from two unit-tagged coordinates.
#[must_use]
pub fn point(x: Length, y: Length) -> Point2 {
    Point2::new(x.to_mm(), y.to_mm())
}

impl From<Length> for f64 {
    fn from(value: Length) -> Self {
        value.0
    }
}
