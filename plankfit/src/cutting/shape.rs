use super::area_spare;
use crate::entities::Dimensions;
use crate::entities::Plank;
use crate::geometry::clip_polygon;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::BOUNDARY_TOL;
use crate::geometry::primitives::ORect;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::SPolygon;

/// Minimum clipped-area fraction for planks that are large relative to the
/// room: such planks legitimately lose most of their area to the clip.
const MIN_AREA_FRACTION_LARGE: f64 = 0.005;
/// Minimum clipped-area fraction otherwise.
const MIN_AREA_FRACTION: f64 = 0.02;
/// A plank covering more than this fraction of the room area counts as large.
const LARGE_PLANK_ROOM_FRACTION: f64 = 0.5;

/// Fallback: clip the full oriented rectangle against the room outline.
///
/// Accepts if the clipped remnant clears an adaptive area minimum and every
/// clipped vertex re-verifies as inside the room (or on its boundary), a
/// defense against numerical drift in the clipping.
pub(super) fn try_cut(
    id: usize,
    rect: &ORect,
    room: &SPolygon,
    dims: &Dimensions,
) -> Option<(Plank, Option<Plank>)> {
    let clipped = clip_polygon(&rect.corners(), room);
    if clipped.len() < 3 {
        return None;
    }

    let clipped_area = SPolygon::calculate_area(&clipped).abs();
    let min_fraction = match rect.area() > LARGE_PLANK_ROOM_FRACTION * room.area {
        true => MIN_AREA_FRACTION_LARGE,
        false => MIN_AREA_FRACTION,
    };
    if clipped_area < min_fraction * rect.area() {
        return None;
    }

    let all_vertices_in_room = clipped
        .iter()
        .all(|p| room.collides_with(p) || room.on_boundary(p, BOUNDARY_TOL));
    if !all_vertices_in_room {
        return None;
    }

    let local_shape: Vec<Point> = clipped.iter().map(|p| rect.to_local(*p)).collect();
    let fitted = Plank {
        id,
        center: rect.center,
        rotation: rect.rotation,
        length: rect.length,
        width: rect.width,
        shape: Some(local_shape),
        cut_lines: vec![],
        is_spare: false,
        original_length: rect.length,
    };
    let spare = area_spare(id, rect, rect.area() - clipped_area, dims);

    Some((fitted, spare))
}
