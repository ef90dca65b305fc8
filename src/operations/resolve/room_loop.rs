use crate::error::{Result, StructuralError};
use crate::geometry::Polygon;
use crate::math::polygon_2d::points_near;
use crate::math::{Point2, ResolveParams};
use crate::model::{Plan, Room, RoomBoundary, Wall};

/// Resolves the closed outline of a room.
///
/// A cached or explicit polygon with at least three vertices is returned
/// as-is. A wall loop is stitched greedily:
///
/// 1. Start with the first listed wall, oriented p1 → p2.
/// 2. Scan the unconsumed walls in list order and take the first one with
///    an endpoint (p1 checked before p2) on the path's last vertex; append
///    its other endpoint.
/// 3. Stop when nothing connects, when the path is closed with every wall
///    consumed, or when the path outgrows `walls + 2` vertices.
///
/// The walk never backtracks, so a loop through a T-junction can fail even
/// though a closed circuit exists.
#[derive(Debug)]
pub struct RoomLoop<'a> {
    room: &'a Room,
    name: Option<String>,
    params: ResolveParams,
}

impl<'a> RoomLoop<'a> {
    /// Creates a new `RoomLoop` resolver for `room`.
    #[must_use]
    pub fn new(room: &'a Room) -> Self {
        Self {
            room,
            name: None,
            params: ResolveParams::default(),
        }
    }

    /// Overrides the name used in error messages.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the endpoint tolerance used when stitching.
    #[must_use]
    pub fn with_params(mut self, params: ResolveParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the resolution against the walls of `plan`.
    ///
    /// # Errors
    ///
    /// Returns `StructuralError::DegeneratePolygon` for an explicit polygon
    /// with fewer than three vertices, `StructuralError::UnknownLoopWalls`
    /// naming every id not found in the plan, and
    /// `StructuralError::UnresolvedLoop` when the walls do not close.
    pub fn execute(&self, plan: &Plan) -> Result<Polygon> {
        let name = self
            .name
            .clone()
            .or_else(|| self.room.id.clone())
            .unwrap_or_else(|| "(unnamed room)".to_owned());

        if let Some(cached) = &self.room.resolved {
            if cached.len() >= 3 {
                return Ok(cached.clone());
            }
        }

        let ids = match &self.room.boundary {
            RoomBoundary::Polygon(points) => {
                if points.len() < 3 {
                    return Err(StructuralError::DegeneratePolygon {
                        owner: format!("room {name}"),
                        vertices: points.len(),
                    }
                    .into());
                }
                return Ok(Polygon::new(points.clone()));
            }
            RoomBoundary::ByLoop(ids) => ids,
        };

        let mut walls = Vec::with_capacity(ids.len());
        let mut missing = Vec::new();
        for id in ids {
            match plan.wall_by_id(id) {
                Some((_, wall)) => walls.push((id.as_str(), wall)),
                None => missing.push(id.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(StructuralError::UnknownLoopWalls {
                room: name,
                wall_ids: missing,
            }
            .into());
        }

        let vertices = stitch(&walls, self.params.epsilon).map_err(|reason| {
            StructuralError::UnresolvedLoop {
                room: name.clone(),
                reason,
            }
        })?;
        tracing::debug!(room = %name, vertices = vertices.len(), "room loop stitched");
        Ok(Polygon::new(vertices))
    }
}

/// Walks the walls into a closed vertex loop, or explains why it can't.
fn stitch(walls: &[(&str, &Wall)], epsilon: f64) -> std::result::Result<Vec<Point2>, String> {
    let Some((_, first)) = walls.first() else {
        return Err("loop lists no walls".to_owned());
    };

    let mut used = vec![false; walls.len()];
    used[0] = true;
    let mut path = vec![first.p1, first.p2];

    while let Some(end) = path.last().copied() {
        let next = walls.iter().enumerate().find_map(|(i, (_, w))| {
            if used[i] {
                None
            } else if points_near(&end, &w.p1, epsilon) {
                Some((i, w.p2))
            } else if points_near(&end, &w.p2, epsilon) {
                Some((i, w.p1))
            } else {
                None
            }
        });
        let Some((i, far)) = next else {
            break;
        };

        used[i] = true;
        path.push(far);
        tracing::trace!(wall = walls[i].0, x = far.x, y = far.y, "loop extended");

        if points_near(&far, &path[0], epsilon) && used.iter().all(|u| *u) {
            break;
        }
        if path.len() > walls.len() + 2 {
            break;
        }
    }

    let start = path[0];
    let end = path[path.len() - 1];
    if !points_near(&start, &end, epsilon) {
        return Err(format!(
            "path ends at ({}, {}) instead of its start ({}, {})",
            end.x, end.y, start.x, start.y
        ));
    }

    let unconsumed: Vec<&str> = walls
        .iter()
        .zip(&used)
        .filter(|(_, u)| !**u)
        .map(|((id, _), _)| *id)
        .collect();
    if !unconsumed.is_empty() {
        return Err(format!("walls not on the loop: {}", unconsumed.join(", ")));
    }

    // Remove the duplicate closing vertex.
    path.pop();
    if path.len() < 3 {
        return Err(format!("loop has only {} distinct vertices", path.len()));
    }
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FloorplanError;
    use crate::math::polygon_2d::signed_area_2d;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn add(plan: &mut Plan, id: &str, a: Point2, b: Point2) {
        plan.add_wall(Wall::new(a, b, 200.0).with_id(id));
    }

    fn rectangle_plan() -> Plan {
        let mut plan = Plan::new();
        add(&mut plan, "w1", p(0.0, 0.0), p(4000.0, 0.0));
        add(&mut plan, "w2", p(4000.0, 0.0), p(4000.0, 3000.0));
        add(&mut plan, "w3", p(4000.0, 3000.0), p(0.0, 3000.0));
        add(&mut plan, "w4", p(0.0, 3000.0), p(0.0, 0.0));
        plan
    }

    fn by_loop(ids: &[&str]) -> Room {
        Room::new(RoomBoundary::ByLoop(ids.iter().map(|s| (*s).to_owned()).collect()))
            .with_id("living")
    }

    #[test]
    fn rectangle_loop_closes() {
        let plan = rectangle_plan();
        let room = by_loop(&["w1", "w2", "w3", "w4"]);
        let poly = RoomLoop::new(&room).execute(&plan).unwrap();
        assert_eq!(
            poly.vertices(),
            &[p(0.0, 0.0), p(4000.0, 0.0), p(4000.0, 3000.0), p(0.0, 3000.0)]
        );
        assert_relative_eq!(signed_area_2d(poly.vertices()), 12_000_000.0);
    }

    #[test]
    fn walls_listed_out_of_order_and_reversed() {
        let mut plan = Plan::new();
        add(&mut plan, "a", p(0.0, 0.0), p(4000.0, 0.0));
        add(&mut plan, "c", p(0.0, 3000.0), p(4000.0, 3000.0));
        add(&mut plan, "b", p(4000.0, 3000.0), p(4000.0, 0.0));
        add(&mut plan, "d", p(0.0, 0.0), p(0.0, 3000.0));
        let room = by_loop(&["a", "c", "d", "b"]);
        let poly = RoomLoop::new(&room).execute(&plan).unwrap();
        assert_eq!(
            poly.vertices(),
            &[p(0.0, 0.0), p(4000.0, 0.0), p(4000.0, 3000.0), p(0.0, 3000.0)]
        );
    }

    #[test]
    fn endpoints_within_epsilon_connect() {
        let mut plan = Plan::new();
        add(&mut plan, "w1", p(0.0, 0.0), p(1000.0, 0.0));
        add(&mut plan, "w2", p(1000.0 + 5e-7, 0.0), p(0.0, 1000.0));
        add(&mut plan, "w3", p(0.0, 1000.0), p(0.0, -5e-7));
        let room = by_loop(&["w1", "w2", "w3"]);
        let poly = RoomLoop::new(&room).execute(&plan).unwrap();
        assert_eq!(poly.len(), 3);
    }

    #[test]
    fn missing_walls_are_named() {
        let plan = rectangle_plan();
        let room = by_loop(&["w1", "w2", "w9", "w3", "w8"]);
        let err = RoomLoop::new(&room).execute(&plan).unwrap_err();
        match err {
            FloorplanError::Structural(StructuralError::UnknownLoopWalls { room, wall_ids }) => {
                assert_eq!(room, "living");
                assert_eq!(wall_ids, ["w9", "w8"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn open_loop_is_unresolved() {
        let plan = rectangle_plan();
        let room = by_loop(&["w1", "w2", "w3"]);
        let err = RoomLoop::new(&room).execute(&plan).unwrap_err();
        assert!(matches!(
            err,
            FloorplanError::Structural(StructuralError::UnresolvedLoop { .. })
        ));
    }

    #[test]
    fn disconnected_extra_wall_is_unresolved() {
        let mut plan = rectangle_plan();
        add(&mut plan, "w5", p(10_000.0, 0.0), p(11_000.0, 0.0));
        let room = by_loop(&["w1", "w2", "w3", "w4", "w5"]);
        let err = RoomLoop::new(&room).execute(&plan).unwrap_err();
        assert!(err.to_string().contains("w5"));
    }

    #[test]
    fn back_and_forth_pair_is_degenerate() {
        let mut plan = Plan::new();
        add(&mut plan, "a", p(0.0, 0.0), p(1000.0, 0.0));
        add(&mut plan, "b", p(1000.0, 0.0), p(0.0, 0.0));
        let room = by_loop(&["a", "b"]);
        let err = RoomLoop::new(&room).execute(&plan).unwrap_err();
        assert!(err.to_string().contains("distinct vertices"));
    }

    #[test]
    fn empty_loop_is_unresolved() {
        let plan = rectangle_plan();
        let room = by_loop(&[]);
        assert!(RoomLoop::new(&room).execute(&plan).is_err());
    }

    #[test]
    fn t_junction_fails_without_backtracking() {
        // A spur out and back from the second corner. Visiting it before w2
        // closes every wall, but the first match at that corner is w2.
        let mut plan = rectangle_plan();
        add(&mut plan, "spur", p(4000.0, 0.0), p(5000.0, 0.0));
        add(&mut plan, "back", p(5000.0, 0.0), p(4000.0, 0.0));
        let room = by_loop(&["w1", "w2", "w3", "w4", "spur", "back"]);
        let err = RoomLoop::new(&room).execute(&plan).unwrap_err();
        assert!(err.to_string().contains("spur, back"));

        let room = by_loop(&["w1", "spur", "back", "w2", "w3", "w4"]);
        let poly = RoomLoop::new(&room).execute(&plan).unwrap();
        assert_eq!(poly.len(), 6);
    }

    #[test]
    fn explicit_polygon_is_taken_as_is() {
        let plan = Plan::new();
        let pts = vec![p(0.0, 0.0), p(3000.0, 0.0), p(3000.0, 4000.0), p(0.0, 4000.0)];
        let room = Room::new(RoomBoundary::Polygon(pts.clone()));
        let poly = RoomLoop::new(&room).execute(&plan).unwrap();
        assert_eq!(poly.vertices(), pts.as_slice());
    }

    #[test]
    fn explicit_polygon_needs_three_vertices() {
        let plan = Plan::new();
        let room = Room::new(RoomBoundary::Polygon(vec![p(0.0, 0.0), p(1.0, 0.0)])).with_id("hall");
        let err = RoomLoop::new(&room).execute(&plan).unwrap_err();
        assert!(matches!(
            err,
            FloorplanError::Structural(StructuralError::DegeneratePolygon { vertices: 2, .. })
        ));
    }

    #[test]
    fn cached_polygon_wins() {
        let plan = Plan::new();
        let mut room = by_loop(&["gone"]);
        room.resolved = Some(Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]));
        let poly = RoomLoop::new(&room).execute(&plan).unwrap();
        assert_eq!(poly.len(), 3);
    }
}
