use ordered_float::OrderedFloat;

use super::{area_spare, overlapping_edges};
use crate::entities::Dimensions;
use crate::entities::Plank;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::BOUNDARY_TOL;
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::ORect;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::SPolygon;

/// Shapes below this fraction of the full rectangle's area are not worth a cut.
const MIN_AREA_FRACTION: f64 = 0.15;

/// A corner cut assembled from multiple straight cut lines.
///
/// Applicable when the plank's bounding box overlaps at least two polygon
/// edges of differing orientation (one near-horizontal, one near-vertical):
/// the plank spans a room corner, as in L- or H-shaped rooms. The polygon
/// edges clipped to the bounding box become the cut lines; the fitted shape is
/// the intersection of the plank rectangle with the room, traced along both
/// boundaries.
pub(super) fn try_cut(
    id: usize,
    rect: &ORect,
    room: &SPolygon,
    dims: &Dimensions,
) -> Option<(Plank, Option<Plank>)> {
    let bbox = rect.bbox();
    let overlapping = overlapping_edges(&bbox, room);
    if overlapping.len() < 2 {
        return None;
    }
    let has_horizontal = overlapping.iter().any(|e| e.is_near_horizontal());
    let has_vertical = overlapping.iter().any(|e| !e.is_near_horizontal());
    if !has_horizontal || !has_vertical {
        return None;
    }

    //polygon edges clipped to the bounding box become the cut lines
    let cut_lines: Vec<Edge> = overlapping
        .iter()
        .filter_map(|e| bbox.clip_edge(e))
        .collect();
    if cut_lines.is_empty() {
        return None;
    }

    let shape = rect_room_intersection(rect, room)?;
    let shape_area = SPolygon::calculate_area(&shape).abs();
    if shape_area < MIN_AREA_FRACTION * rect.area() {
        return None;
    }
    let all_vertices_in_room = shape
        .iter()
        .all(|p| room.collides_with(p) || room.on_boundary(p, BOUNDARY_TOL));
    if !all_vertices_in_room {
        return None;
    }

    let local_shape: Vec<Point> = shape.iter().map(|p| rect.to_local(*p)).collect();
    let fitted = Plank {
        id,
        center: rect.center,
        rotation: rect.rotation,
        length: rect.length,
        width: rect.width,
        shape: Some(local_shape),
        cut_lines,
        is_spare: false,
        original_length: rect.length,
    };
    let spare = area_spare(id, rect, rect.area() - shape_area, dims);

    Some((fitted, spare))
}

/// A boundary crossing between the rectangle perimeter and the room outline.
/// `t_rect` is the position along the rectangle perimeter in `[0, 4)` (edge
/// index plus the fraction along that edge), `t_room` the analogue in
/// `[0, n_vertices)` along the room outline.
struct Crossing {
    point: Point,
    t_rect: f64,
    t_room: f64,
}

enum Event {
    Corner(usize),
    Crossing(usize),
}

/// Traces the boundary of the intersection of `rect` and `room`.
///
/// Both boundaries are counterclockwise, so the intersection is traced by
/// walking the rectangle perimeter while inside the room, and detouring along
/// the room outline from each exit crossing to the next crossing. Assumes a
/// single intersection component; returns `None` on any degenerate
/// configuration, leaving the candidate to the fallback strategy.
fn rect_room_intersection(rect: &ORect, room: &SPolygon) -> Option<Vec<Point>> {
    let corners = rect.corners();
    let rect_edges = rect.edges();
    let n_room = room.n_vertices() as f64;

    let mut crossings: Vec<Crossing> = vec![];
    for (i, re) in rect_edges.iter().enumerate() {
        for (j, pe) in room.edge_iter().enumerate() {
            if let Some(x) = re.collides_at(&pe) {
                crossings.push(Crossing {
                    point: x,
                    t_rect: i as f64 + re.start.distance_to(&x) / re.length(),
                    t_room: (j as f64 + pe.start.distance_to(&x) / pe.length())
                        .rem_euclid(n_room),
                });
            }
        }
    }
    if crossings.is_empty() {
        return None;
    }

    //events on the rectangle perimeter: its corners plus all crossings
    let mut events: Vec<(f64, Event)> = (0..4).map(|i| (i as f64, Event::Corner(i))).collect();
    events.extend(
        crossings
            .iter()
            .enumerate()
            .map(|(k, c)| (c.t_rect, Event::Crossing(k))),
    );
    events.sort_by_key(|(t, _)| OrderedFloat(*t));
    let m = events.len();

    //whether the perimeter interval following each event lies inside the room
    let inside_after: Vec<bool> = (0..m)
        .map(|i| {
            let t0 = events[i].0;
            let t1 = match i + 1 < m {
                true => events[i + 1].0,
                false => events[0].0 + 4.0,
            };
            let mid = perimeter_point(&corners, ((t0 + t1) / 2.0).rem_euclid(4.0));
            room.collides_with(&mid) || room.on_boundary(&mid, BOUNDARY_TOL)
        })
        .collect();

    //start where the perimeter re-enters the room
    let start = (0..m).find(|&i| inside_after[i] && !inside_after[(i + m - 1) % m])?;

    let mut shape: Vec<Point> = vec![];
    let mut closed = false;
    let mut i = start;
    let budget = 2 * (m + room.n_vertices());
    for _ in 0..budget {
        let point = match &events[i].1 {
            Event::Corner(c) => corners[*c],
            Event::Crossing(k) => crossings[*k].point,
        };
        push_dedup(&mut shape, point);

        if inside_after[i] {
            i = (i + 1) % m;
        } else {
            //exit crossing: detour along the room outline to the next crossing
            let Event::Crossing(k) = events[i].1 else {
                return None;
            };
            let exit_t = crossings[k].t_room;
            let (entry, _) = crossings
                .iter()
                .enumerate()
                .filter(|(kk, _)| *kk != k)
                .min_by_key(|(_, c)| OrderedFloat((c.t_room - exit_t).rem_euclid(n_room)))?;
            let span = (crossings[entry].t_room - exit_t).rem_euclid(n_room);

            let mut v = (exit_t.floor() as usize + 1) % room.n_vertices();
            for _ in 0..room.n_vertices() {
                if (v as f64 - exit_t).rem_euclid(n_room) >= span {
                    break;
                }
                push_dedup(&mut shape, room.vertex(v));
                v = (v + 1) % room.n_vertices();
            }

            i = events
                .iter()
                .position(|(_, e)| matches!(e, Event::Crossing(kk) if *kk == entry))?;
        }
        if i == start {
            closed = true;
            break;
        }
    }
    if !closed {
        return None;
    }

    //drop a closing point that duplicates the start
    if shape.len() > 1
        && shape[0].sq_distance_to(&shape[shape.len() - 1]) <= BOUNDARY_TOL.powi(2)
    {
        shape.pop();
    }
    if shape.len() < 3 {
        return None;
    }
    Some(shape)
}

/// The point at position `t` in `[0, 4)` along the rectangle perimeter.
fn perimeter_point(corners: &[Point; 4], t: f64) -> Point {
    let i = (t.floor() as usize).min(3);
    let frac = t - i as f64;
    let a = corners[i];
    let b = corners[(i + 1) % 4];
    Point(a.0 + (b.0 - a.0) * frac, a.1 + (b.1 - a.1) * frac)
}

fn push_dedup(shape: &mut Vec<Point>, p: Point) {
    if shape
        .last()
        .is_none_or(|q| q.sq_distance_to(&p) > BOUNDARY_TOL.powi(2))
    {
        shape.push(p);
    }
}
