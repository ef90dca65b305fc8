use std::collections::HashMap;

use slotmap::SecondaryMap;

use crate::error::{FloorplanError, OverlapError, StructuralError};
use crate::geometry::Polygon;
use crate::math::ResolveParams;
use crate::model::{entity_name, Plan, RoomKey, WallKey};
use crate::operations::resolve::{bounds_violations, OpeningSpan, RoomLoop, WallFrame};

/// An opening whose canonical span on its wall is known.
#[derive(Debug)]
pub(super) struct PlacedOpening {
    name: String,
    span: OpeningSpan,
}

/// Resolved wall frames plus the id → wall index (first definition wins).
pub(super) struct WallIndex<'p> {
    pub frames: SecondaryMap<WallKey, WallFrame>,
    pub by_id: HashMap<&'p str, WallKey>,
}

/// Resolves every wall's frame, reporting duplicate ids, zero-length walls
/// and negative thicknesses.
pub(super) fn check_walls<'p>(
    plan: &'p Plan,
    errors: &mut Vec<FloorplanError>,
) -> WallIndex<'p> {
    let mut frames = SecondaryMap::new();
    let mut by_id = HashMap::new();

    for (index, (key, wall)) in plan.walls().enumerate() {
        let name = entity_name(wall.id.as_deref(), "wall", index);
        if let Some(id) = wall.id.as_deref() {
            if by_id.contains_key(id) {
                errors.push(StructuralError::DuplicateWallId { id: id.to_owned() }.into());
            } else {
                by_id.insert(id, key);
            }
        }
        match WallFrame::from_wall(wall, &name) {
            Ok(frame) => {
                frames.insert(key, frame);
            }
            Err(e) => errors.push(e),
        }
    }

    tracing::debug!(walls = frames.len(), "wall frames resolved");
    WallIndex { frames, by_id }
}

/// Checks every opening against its wall and returns the spans of those
/// that could be placed, grouped by wall.
pub(super) fn check_openings(
    plan: &Plan,
    walls: &WallIndex<'_>,
    params: &ResolveParams,
    errors: &mut Vec<FloorplanError>,
) -> SecondaryMap<WallKey, Vec<PlacedOpening>> {
    let mut placed: SecondaryMap<WallKey, Vec<PlacedOpening>> = SecondaryMap::new();

    for (index, (_, opening)) in plan.openings().enumerate() {
        let name = entity_name(opening.id.as_deref(), "opening", index);
        let Some(&wall_key) = walls.by_id.get(opening.wall_id.as_str()) else {
            errors.push(
                StructuralError::DanglingOpening {
                    opening: name,
                    wall_id: opening.wall_id.clone(),
                }
                .into(),
            );
            continue;
        };
        // A wall without a frame has already been reported.
        let Some(frame) = walls.frames.get(wall_key) else {
            continue;
        };

        let span = match OpeningSpan::resolve(frame, opening, &name) {
            Ok(span) => Some(span),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        errors.extend(
            bounds_violations(frame, opening, span, &name, params.epsilon)
                .into_iter()
                .map(FloorplanError::from),
        );

        if let Some(span) = span {
            if let Some(list) = placed.get_mut(wall_key) {
                list.push(PlacedOpening { name, span });
            } else {
                placed.insert(wall_key, vec![PlacedOpening { name, span }]);
            }
        }
    }

    placed
}

/// Reports openings that collide on the same wall.
///
/// Openings are sorted by start; each one is compared with the
/// furthest-reaching opening before it, so an opening nested inside a wide
/// one is caught even when its direct predecessor is clear of it.
pub(super) fn check_overlaps(
    plan: &Plan,
    walls: &WallIndex<'_>,
    placed: &mut SecondaryMap<WallKey, Vec<PlacedOpening>>,
    params: &ResolveParams,
    errors: &mut Vec<FloorplanError>,
) {
    for (key, _) in plan.walls() {
        let (Some(list), Some(frame)) = (placed.get_mut(key), walls.frames.get(key)) else {
            continue;
        };
        list.sort_by(|a, b| a.span.start.total_cmp(&b.span.start));

        let mut reach = 0;
        for next in 1..list.len() {
            if list[reach].span.overlaps_next(&list[next].span, params.epsilon) {
                errors.push(
                    OverlapError {
                        wall: frame.name.clone(),
                        first: list[reach].name.clone(),
                        second: list[next].name.clone(),
                    }
                    .into(),
                );
            }
            if list[next].span.end > list[reach].span.end {
                reach = next;
            }
        }
    }
}

/// Resolves every room's outline.
pub(super) fn resolve_rooms(
    plan: &Plan,
    params: &ResolveParams,
    errors: &mut Vec<FloorplanError>,
) -> Vec<(RoomKey, Polygon)> {
    let mut outlines = Vec::new();
    for (index, (key, room)) in plan.rooms().enumerate() {
        let name = entity_name(room.id.as_deref(), "room", index);
        match RoomLoop::new(room).named(name).with_params(*params).execute(plan) {
            Ok(polygon) => outlines.push((key, polygon)),
            Err(e) => errors.push(e),
        }
    }
    outlines
}
