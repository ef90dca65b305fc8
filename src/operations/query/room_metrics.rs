use crate::error::{Result, StructuralError};
use crate::model::{Plan, RoomKey};

use super::polygon_metrics::{Metrics, PolygonMetrics};

/// Computes the floor area and centroid of a room.
///
/// Uses the room's cached outline, so a room bounded by a wall loop must
/// have been through validation first. The area is reported unsigned; the
/// centroid is where renderers place the room's label.
pub struct RoomMetrics {
    room: RoomKey,
}

impl RoomMetrics {
    /// Creates a new `RoomMetrics` query.
    #[must_use]
    pub fn new(room: RoomKey) -> Self {
        Self { room }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not in the plan, has no outline yet,
    /// or its outline has fewer than 3 vertices.
    pub fn execute(&self, plan: &Plan) -> Result<Metrics> {
        let room = plan.room(self.room)?;
        let outline = room.outline().ok_or_else(|| StructuralError::UnresolvedLoop {
            room: room.id.clone().unwrap_or_else(|| "(unnamed room)".to_owned()),
            reason: "plan has not been validated".to_owned(),
        })?;
        let m = PolygonMetrics::new(outline).execute()?;
        Ok(Metrics {
            area: m.area.abs(),
            centroid: m.centroid,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::model::{Room, RoomBoundary};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn clockwise_room_reports_positive_area() {
        let mut plan = Plan::new();
        let key = plan.add_room(Room::new(RoomBoundary::Polygon(vec![
            p(3000.0, 0.0),
            p(3000.0, 4000.0),
            p(6000.0, 4000.0),
            p(6000.0, 0.0),
        ])));
        let m = RoomMetrics::new(key).execute(&plan).unwrap();
        assert_relative_eq!(m.area, 12_000_000.0);
        assert_relative_eq!(m.centroid, p(4500.0, 2000.0), epsilon = 1e-9);
    }

    #[test]
    fn unvalidated_loop_room_fails() {
        let mut plan = Plan::new();
        let key =
            plan.add_room(Room::new(RoomBoundary::ByLoop(vec!["w1".into()])).with_id("hall"));
        let err = RoomMetrics::new(key).execute(&plan).unwrap_err();
        assert!(err.to_string().contains("hall"));
    }
}
