use crate::error::{BoundsError, Result};
use crate::geometry::Polygon;
use crate::math::ResolveParams;
use crate::model::{Opening, Wall};

use super::wall_footprint::WallFrame;

/// Interval an opening occupies along its wall, measured from p1 along the
/// centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningSpan {
    pub start: f64,
    pub end: f64,
}

impl OpeningSpan {
    /// Normalizes an opening's offset into its canonical span on `frame`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownReference` if the opening's reference
    /// symbol is not recognized.
    pub fn resolve(frame: &WallFrame, opening: &Opening, name: &str) -> Result<Self> {
        let reference = opening.reference_frame(name)?;
        let start = reference.canonical_offset(opening.at, frame.thickness);
        Ok(Self {
            start,
            end: start + opening.width,
        })
    }

    /// Whether `other` starts before this span ends.
    #[must_use]
    pub fn overlaps_next(&self, other: &Self, epsilon: f64) -> bool {
        other.start < self.end - epsilon
    }
}

/// Collects every bounds violation of an opening on its wall.
///
/// Width and offset are checked as authored; the span checks run on the
/// canonical span when one could be resolved.
#[must_use]
pub fn bounds_violations(
    frame: &WallFrame,
    opening: &Opening,
    span: Option<OpeningSpan>,
    name: &str,
    epsilon: f64,
) -> Vec<BoundsError> {
    let mut errors = Vec::new();
    if opening.width <= 0.0 || !opening.width.is_finite() {
        errors.push(BoundsError::NonPositiveWidth {
            opening: name.to_owned(),
            width: opening.width,
        });
    }
    if opening.at < 0.0 || !opening.at.is_finite() {
        errors.push(BoundsError::NegativeOffset {
            opening: name.to_owned(),
            at: opening.at,
        });
    }
    if let Some(span) = span {
        // A negative authored offset is already reported above.
        if opening.at >= 0.0 && span.start < -epsilon {
            errors.push(BoundsError::BeforeWallStart {
                opening: name.to_owned(),
                wall: frame.name.clone(),
                start: span.start,
            });
        }
        if span.end > frame.length + epsilon {
            errors.push(BoundsError::PastWallEnd {
                opening: name.to_owned(),
                wall: frame.name.clone(),
                end: span.end,
                length: frame.length,
            });
        }
    }
    errors
}

/// Resolves the plan-view cutout an opening removes from its wall.
///
/// Openings always cut the full wall thickness.
#[derive(Debug)]
pub struct OpeningCutout<'a> {
    frame: &'a WallFrame,
    opening: &'a Opening,
    params: ResolveParams,
}

impl<'a> OpeningCutout<'a> {
    /// Creates a new `OpeningCutout` resolver for `opening` on `frame`.
    #[must_use]
    pub fn new(frame: &'a WallFrame, opening: &'a Opening) -> Self {
        Self {
            frame,
            opening,
            params: ResolveParams::default(),
        }
    }

    /// Sets the tolerances used for the bounds checks.
    #[must_use]
    pub fn with_params(mut self, params: ResolveParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the placement, returning the cutout rectangle.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownReference` for an unrecognized reference
    /// and the first `BoundsError` if the opening does not fit its wall.
    pub fn execute(&self) -> Result<Polygon> {
        let name = self
            .opening
            .id
            .clone()
            .unwrap_or_else(|| "(unnamed opening)".to_owned());
        let span = OpeningSpan::resolve(self.frame, self.opening, &name)?;
        let violations =
            bounds_violations(self.frame, self.opening, Some(span), &name, self.params.epsilon);
        if let Some(first) = violations.into_iter().next() {
            return Err(first.into());
        }
        Ok(self.frame.band_rect(span.start, span.end))
    }
}

/// Resolves the cutout of an opening on `wall` at the default tolerances.
///
/// # Errors
///
/// Fails if the wall has no valid frame or the opening does not fit it.
pub fn opening_cutout(wall: &Wall, opening: &Opening) -> Result<Polygon> {
    let name = wall.id.clone().unwrap_or_else(|| "(unnamed wall)".to_owned());
    let frame = WallFrame::from_wall(wall, &name)?;
    OpeningCutout::new(&frame, opening).execute()
}
