use std::fmt;

use crate::error::ConfigError;

slotmap::new_key_type! {
    /// Unique identifier for an opening in the plan.
    pub struct OpeningKey;
}

/// What fills an opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpeningKind {
    Door,
    Window,
    Other(String),
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => f.write_str("door"),
            Self::Window => f.write_str("window"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Line an opening's `at` offset is measured from.
///
/// The offset is always normalized to the centerline before placement:
/// an inner face starts half a thickness further along the wall, an outer
/// face half a thickness earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reference {
    #[default]
    Centerline,
    InnerFace,
    OuterFace,
}

impl Reference {
    /// Parses one of the recognized symbols.
    #[must_use]
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol {
            "centerline" => Some(Self::Centerline),
            "inner_face" => Some(Self::InnerFace),
            "outer_face" => Some(Self::OuterFace),
            _ => None,
        }
    }

    /// Converts an offset measured from this reference into one measured
    /// from p1 along the centerline.
    #[must_use]
    pub fn canonical_offset(self, at: f64, thickness: f64) -> f64 {
        match self {
            Self::Centerline => at,
            Self::InnerFace => at + thickness * 0.5,
            Self::OuterFace => at - thickness * 0.5,
        }
    }
}

/// A door, window or other cutout placed along a wall.
///
/// `swing`, `sill` and `head` describe the opening in elevation and are
/// carried for renderers only.
#[derive(Debug, Clone, PartialEq)]
pub struct Opening {
    pub id: Option<String>,
    pub wall_id: String,
    pub at: f64,
    pub width: f64,
    pub kind: OpeningKind,
    pub swing: Option<String>,
    pub sill: Option<f64>,
    pub head: Option<f64>,
    /// Raw reference symbol as authored; see [`Opening::reference_frame`].
    pub reference: Option<String>,
}

impl Opening {
    /// Creates an opening `width` wide at offset `at` on the wall with id `wall_id`.
    #[must_use]
    pub fn new(wall_id: impl Into<String>, at: f64, width: f64, kind: OpeningKind) -> Self {
        Self {
            id: None,
            wall_id: wall_id.into(),
            at,
            width,
            kind,
            swing: None,
            sill: None,
            head: None,
            reference: None,
        }
    }

    /// Sets the authored id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the reference-frame symbol `at` is measured in.
    #[must_use]
    pub fn with_reference(mut self, symbol: impl Into<String>) -> Self {
        self.reference = Some(symbol.into());
        self
    }

    /// Sets the door swing passed to renderers.
    #[must_use]
    pub fn with_swing(mut self, swing: impl Into<String>) -> Self {
        self.swing = Some(swing.into());
        self
    }

    /// Sets the sill height.
    #[must_use]
    pub fn with_sill(mut self, sill: f64) -> Self {
        self.sill = Some(sill);
        self
    }

    /// Sets the head height.
    #[must_use]
    pub fn with_head(mut self, head: f64) -> Self {
        self.head = Some(head);
        self
    }

    /// Parsed reference frame, defaulting to the centerline.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownReference` naming `name` if the symbol is
    /// not recognized.
    pub fn reference_frame(&self, name: &str) -> Result<Reference, ConfigError> {
        match self.reference.as_deref() {
            None => Ok(Reference::Centerline),
            Some(symbol) => Reference::parse(symbol).ok_or_else(|| ConfigError::UnknownReference {
                opening: name.to_owned(),
                symbol: symbol.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn missing_reference_is_centerline() {
        let o = Opening::new("w1", 900.0, 900.0, OpeningKind::Door);
        assert_eq!(o.reference_frame("d1").unwrap(), Reference::Centerline);
    }

    #[test]
    fn unknown_reference_is_config_error() {
        let o = Opening::new("w1", 900.0, 900.0, OpeningKind::Door).with_reference("outside");
        let err = o.reference_frame("d1").unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownReference {
                opening: "d1".into(),
                symbol: "outside".into(),
            }
        );
    }

    #[test]
    fn faces_shift_by_half_thickness() {
        assert_relative_eq!(Reference::Centerline.canonical_offset(900.0, 240.0), 900.0);
        assert_relative_eq!(Reference::InnerFace.canonical_offset(900.0, 240.0), 1020.0);
        assert_relative_eq!(Reference::OuterFace.canonical_offset(900.0, 240.0), 780.0);
    }

    #[test]
    fn kind_display() {
        assert_eq!(OpeningKind::Door.to_string(), "door");
        assert_eq!(OpeningKind::Other("arch".into()).to_string(), "arch");
    }
}
