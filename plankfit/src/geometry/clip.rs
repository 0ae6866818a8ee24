use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::SPolygon;

/// Clips `subject` against every edge of `clip` in turn.
/// [Sutherland–Hodgman](https://en.wikipedia.org/wiki/Sutherland%E2%80%93Hodgman_algorithm)
///
/// `clip` is counterclockwise by construction ([SPolygon::new] normalizes the
/// winding), which defines "inside" as the left side of each clip edge.
/// The result may be empty or degenerate (<3 points) and is returned as a raw
/// point list; callers must decide whether such a remnant is usable.
pub fn clip_polygon(subject: &[Point], clip: &SPolygon) -> Vec<Point> {
    let mut output = subject.to_vec();

    for clip_edge in clip.edge_iter() {
        if output.is_empty() {
            break;
        }
        let input = std::mem::take(&mut output);

        for i in 0..input.len() {
            let current = input[i];
            let previous = input[(i + input.len() - 1) % input.len()];

            let current_inside = is_left_of(&clip_edge, &current);
            let previous_inside = is_left_of(&clip_edge, &previous);

            match (previous_inside, current_inside) {
                (true, true) => output.push(current),
                (true, false) => {
                    if let Some(p) = line_intersection(&clip_edge, previous, current) {
                        output.push(p);
                    }
                }
                (false, true) => {
                    if let Some(p) = line_intersection(&clip_edge, previous, current) {
                        output.push(p);
                    }
                    output.push(current);
                }
                (false, false) => {}
            }
        }
    }

    dedup_consecutive(output)
}

/// True if `point` lies on or to the left of the infinite line through `edge`.
fn is_left_of(edge: &Edge, point: &Point) -> bool {
    let Point(sx, sy) = edge.start;
    let Point(ex, ey) = edge.end;
    (ex - sx) * (point.1 - sy) - (ey - sy) * (point.0 - sx) >= 0.0
}

/// Intersection of the infinite line through `clip_edge` with the segment (a, b).
/// The clip stage guarantees a and b straddle the line, but near-parallel
/// configurations are resolved as "no intersection".
fn line_intersection(clip_edge: &Edge, a: Point, b: Point) -> Option<Point> {
    let Point(x1, y1) = clip_edge.start;
    let Point(x2, y2) = clip_edge.end;
    let Point(x3, y3) = a;
    let Point(x4, y4) = b;

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < crate::geometry::primitives::PARALLEL_EPS {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    Some(Point(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
}

fn dedup_consecutive(points: Vec<Point>) -> Vec<Point> {
    let mut result: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if result.last() != Some(&p) {
            result.push(p);
        }
    }
    if result.len() > 1 && result.first() == result.last() {
        result.pop();
    }
    result
}
