use super::overlapping_edges;
use crate::entities::Dimensions;
use crate::entities::Plank;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::ORect;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::SPolygon;

/// Fits keeping less than this fraction of the original length are too trivial
/// to be worth a plank.
const MIN_KEEP_FRACTION: f64 = 0.05;
/// Fits keeping more than this fraction usually indicate a geometry that needs
/// multi-line or shape cutting rather than a straight trim.
const MAX_KEEP_FRACTION: f64 = 0.95;

/// A single straight trim perpendicular to the plank's length axis.
///
/// Applicable only when the plank's bounding box overlaps exactly one polygon
/// edge. The two long edges are cast as rays from the in-room end; the nearest
/// intersection distance, minus the configured gap, becomes the fitted length.
pub(super) fn try_cut(
    id: usize,
    rect: &ORect,
    room: &SPolygon,
    dims: &Dimensions,
) -> Option<(Plank, Option<Plank>)> {
    let overlapping = overlapping_edges(&rect.bbox(), room);
    if overlapping.len() != 1 {
        return None;
    }

    let (ax, ay) = rect.axis();
    let hl = rect.length / 2.0;
    let Point(cx, cy) = rect.center;
    let end_a = Point(cx - ax * hl, cy - ay * hl);
    let end_b = Point(cx + ax * hl, cy + ay * hl);

    let a_inside = room.collides_with(&end_a);
    let b_inside = room.collides_with(&end_b);

    //a straight trim needs exactly one end in the room
    let anchor = match (a_inside, b_inside) {
        (true, false) => end_a,
        (false, true) => end_b,
        _ => return None,
    };
    let other = if a_inside { end_b } else { end_a };

    //cast both long edges as rays from the anchor end towards the other end
    let (pxv, pyv) = rect.perp_axis();
    let hw = rect.width / 2.0;
    let side = |end: Point, sign: f64| Point(end.0 + pxv * hw * sign, end.1 + pyv * hw * sign);
    let rays = [
        Edge::new(side(anchor, 1.0), side(other, 1.0)).ok()?,
        Edge::new(side(anchor, -1.0), side(other, -1.0)).ok()?,
    ];

    //nearest intersection distance over both rays and all polygon edges
    let cut_distance = rays
        .iter()
        .flat_map(|ray| {
            room.edge_iter()
                .filter_map(|edge| ray.collides_at(&edge))
                .map(|p| ray.start.distance_to(&p))
        })
        .min_by(|a, b| a.partial_cmp(b).unwrap())?;

    let fitted_length = cut_distance - dims.gap;
    let keep_fraction = fitted_length / rect.length;
    if !(MIN_KEEP_FRACTION..=MAX_KEEP_FRACTION).contains(&keep_fraction) {
        return None;
    }

    //anchor the trimmed plank at the in-room end, falling back to the other end
    let fitted_rect = [(anchor, other), (other, anchor)]
        .into_iter()
        .map(|(from, towards)| {
            let t = fitted_length / (2.0 * rect.length);
            let center = Point(
                from.0 + (towards.0 - from.0) * t,
                from.1 + (towards.1 - from.1) * t,
            );
            ORect::new(center, rect.rotation, fitted_length, rect.width)
        })
        .find(|r| r.fully_inside(room))?;

    let fitted = Plank {
        id,
        center: fitted_rect.center,
        rotation: rect.rotation,
        length: fitted_length,
        width: rect.width,
        shape: None,
        cut_lines: vec![],
        is_spare: false,
        original_length: rect.length,
    };
    let spare = Plank {
        id,
        center: rect.center,
        rotation: 0.0,
        length: rect.length - fitted_length,
        width: dims.width,
        shape: None,
        cut_lines: vec![],
        is_spare: true,
        original_length: rect.length,
    };
    Some((fitted, Some(spare)))
}
