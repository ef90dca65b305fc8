mod checks;

use crate::error::ValidationErrors;
use crate::math::ResolveParams;
use crate::model::Plan;

/// Resolves and validates a whole plan.
///
/// Every check runs and every violation is collected, in this order:
/// walls (duplicate ids, zero length, negative thickness), openings
/// (dangling wall, reference, width, offset, extent), overlapping openings
/// per wall, then room outlines. On success the returned plan is a copy of
/// the input with every room's `resolved` outline filled in; the input is
/// never modified. Validating an already validated plan yields identical
/// outlines.
#[derive(Debug, Default)]
pub struct ResolveAndValidate {
    params: ResolveParams,
}

impl ResolveAndValidate {
    /// Creates a new `ResolveAndValidate` operation with default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerances used by every check.
    #[must_use]
    pub fn with_params(mut self, params: ResolveParams) -> Self {
        self.params = params;
        self
    }

    /// Executes validation.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` holding every violation found.
    pub fn execute(&self, plan: &Plan) -> Result<Plan, ValidationErrors> {
        tracing::debug!(
            walls = plan.wall_count(),
            openings = plan.openings().count(),
            rooms = plan.rooms().count(),
            "validating plan"
        );

        let mut errors = Vec::new();
        let walls = checks::check_walls(plan, &mut errors);
        let mut placed = checks::check_openings(plan, &walls, &self.params, &mut errors);
        checks::check_overlaps(plan, &walls, &mut placed, &self.params, &mut errors);
        let outlines = checks::resolve_rooms(plan, &self.params, &mut errors);

        if !errors.is_empty() {
            for e in &errors {
                tracing::warn!(error = %e, "plan violation");
            }
            return Err(ValidationErrors(errors));
        }

        let mut resolved = plan.clone();
        for (key, polygon) in outlines {
            if let Ok(room) = resolved.room_mut(key) {
                room.resolved = Some(polygon);
            }
        }
        Ok(resolved)
    }
}

/// Resolves and validates a plan at the default tolerances.
///
/// # Errors
///
/// See [`ResolveAndValidate::execute`].
pub fn resolve_and_validate(plan: &Plan) -> Result<Plan, ValidationErrors> {
    ResolveAndValidate::new().execute(plan)
}
