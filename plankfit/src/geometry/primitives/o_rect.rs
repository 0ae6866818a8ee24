use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use crate::geometry::primitives::SPolygon;

/// Projection overlaps smaller than this are not counted as collisions.
/// Ensures exactly touching rectangles are reported as non-overlapping,
/// so a zero gap admits edge-adjacent planks.
pub const SAT_TOL: f64 = 1e-9;

/// Points within this distance of a polygon boundary are considered to lie on it.
pub const BOUNDARY_TOL: f64 = 1e-6;

/// Oriented rectangle: an axis-aligned `length` × `width` box rotated by
/// `rotation` degrees (standard mathematical convention) about its center.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct ORect {
    pub center: Point,
    /// Rotation in degrees, counterclockwise
    pub rotation: f64,
    /// Extent along the rotated x-axis
    pub length: f64,
    /// Extent along the rotated y-axis
    pub width: f64,
}

impl ORect {
    pub fn new(center: Point, rotation: f64, length: f64, width: f64) -> Self {
        ORect {
            center,
            rotation,
            length,
            width,
        }
    }

    /// Unit vector along the rectangle's length axis.
    pub fn axis(&self) -> (f64, f64) {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        (cos, sin)
    }

    /// Unit vector perpendicular to the rectangle's length axis.
    pub fn perp_axis(&self) -> (f64, f64) {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        (-sin, cos)
    }

    /// The 4 corners, counterclockwise, starting from the (+length, +width) one.
    pub fn corners(&self) -> [Point; 4] {
        let (ax, ay) = self.axis();
        let (px, py) = self.perp_axis();
        let (hl, hw) = (self.length / 2.0, self.width / 2.0);
        let Point(cx, cy) = self.center;

        [
            Point(cx + ax * hl + px * hw, cy + ay * hl + py * hw),
            Point(cx - ax * hl + px * hw, cy - ay * hl + py * hw),
            Point(cx - ax * hl - px * hw, cy - ay * hl - py * hw),
            Point(cx + ax * hl - px * hw, cy + ay * hl - py * hw),
        ]
    }

    /// The four edges of the rectangle, in the same order as [ORect::corners].
    pub fn edges(&self) -> [Edge; 4] {
        let c = self.corners();
        [
            Edge {
                start: c[0],
                end: c[1],
            },
            Edge {
                start: c[1],
                end: c[2],
            },
            Edge {
                start: c[2],
                end: c[3],
            },
            Edge {
                start: c[3],
                end: c[0],
            },
        ]
    }

    /// Maps a point from world coordinates into the rectangle's rotated frame,
    /// with the rectangle's center at the origin and its length along +x.
    pub fn to_local(&self, point: Point) -> Point {
        let rotated = point.rotate_around(self.center, -self.rotation.to_radians());
        Point(rotated.0 - self.center.0, rotated.1 - self.center.1)
    }

    /// Maps a point from the rectangle's rotated frame back to world coordinates.
    pub fn to_world(&self, point: Point) -> Point {
        Point(point.0 + self.center.0, point.1 + self.center.1)
            .rotate_around(self.center, self.rotation.to_radians())
    }

    /// Returns a new rectangle with the same center and rotation, but grown by
    /// `d` on every side (both dimensions increase by `2 * d`).
    pub fn inflate(&self, d: f64) -> ORect {
        ORect {
            length: self.length + 2.0 * d,
            width: self.width + 2.0 * d,
            ..*self
        }
    }

    /// True if the rectangle lies entirely within `poly`: all 4 corners are
    /// inside (or on the boundary, within [BOUNDARY_TOL]) and none of its
    /// edges properly cross any polygon edge. A rectangle flush against a
    /// wall touches the boundary at edge endpoints without leaving the
    /// polygon; such contacts do not count as crossings.
    ///
    /// Both checks are necessary: corner containment alone misclassifies
    /// rectangles that straddle a concave notch without any corner falling
    /// outside. The combination is still incomplete for a notch that lies
    /// strictly within the rectangle's interior (no corner outside, no edge
    /// crossing); detecting that requires true Boolean polygon containment.
    pub fn fully_inside(&self, poly: &SPolygon) -> bool {
        let corners_inside = self
            .corners()
            .iter()
            .all(|c| poly.collides_with(c) || poly.on_boundary(c, BOUNDARY_TOL));
        if !corners_inside {
            return false;
        }
        let edge_crossing = self
            .edges()
            .iter()
            .any(|re| poly.edge_iter().any(|pe| edges_properly_cross(re, &pe)));
        !edge_crossing
    }

    /// True if the rectangle and `poly` share any area: a corner or the center
    /// of the rectangle lies inside the polygon, or a polygon vertex lies
    /// inside the rectangle (the latter captures a rectangle fully enclosing a
    /// concave notch).
    pub fn overlaps(&self, poly: &SPolygon) -> bool {
        if poly.collides_with(&self.center) {
            return true;
        }
        if self.corners().iter().any(|c| poly.collides_with(c)) {
            return true;
        }
        poly.vertices.iter().any(|v| self.collides_with(v))
    }

    /// Triage of the rectangle against a polygon, used to dispatch candidates:
    /// fully inside, partially overlapping, or disjoint.
    pub fn relation_to(&self, poly: &SPolygon) -> GeoRelation {
        if self.fully_inside(poly) {
            GeoRelation::Enclosed
        } else if self.overlaps(poly) {
            GeoRelation::Intersecting
        } else {
            GeoRelation::Disjoint
        }
    }
}

/// True if the two segments intersect at a point that is not an endpoint of
/// either: touching at an endpoint is contact, not a crossing.
fn edges_properly_cross(a: &Edge, b: &Edge) -> bool {
    use crate::geometry::geo_traits::DistanceTo;
    match a.collides_at(b) {
        None => false,
        Some(x) => ![a.start, a.end, b.start, b.end]
            .iter()
            .any(|p| p.sq_distance_to(&x) <= BOUNDARY_TOL.powi(2)),
    }
}

impl Shape for ORect {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        self.length * self.width
    }

    fn bbox(&self) -> Rect {
        let corners = self.corners();
        let mut bbox = Rect {
            x_min: f64::MAX,
            y_min: f64::MAX,
            x_max: f64::MIN,
            y_max: f64::MIN,
        };
        for Point(x, y) in corners {
            bbox.x_min = bbox.x_min.min(x);
            bbox.y_min = bbox.y_min.min(y);
            bbox.x_max = bbox.x_max.max(x);
            bbox.y_max = bbox.y_max.max(y);
        }
        bbox
    }
}

impl CollidesWith<Point> for ORect {
    fn collides_with(&self, point: &Point) -> bool {
        let Point(lx, ly) = self.to_local(*point);
        lx.abs() <= self.length / 2.0 && ly.abs() <= self.width / 2.0
    }
}

impl CollidesWith<ORect> for ORect {
    /// Separating Axis Theorem over the 4 candidate axes (each rectangle's two edge normals).
    fn collides_with(&self, other: &ORect) -> bool {
        let axes = [
            self.axis(),
            self.perp_axis(),
            other.axis(),
            other.perp_axis(),
        ];
        let corners_a = self.corners();
        let corners_b = other.corners();

        for (ax, ay) in axes {
            let project = |corners: &[Point; 4]| -> (f64, f64) {
                let mut min = f64::MAX;
                let mut max = f64::MIN;
                for Point(x, y) in corners {
                    let p = x * ax + y * ay;
                    min = min.min(p);
                    max = max.max(p);
                }
                (min, max)
            };
            let (a_min, a_max) = project(&corners_a);
            let (b_min, b_max) = project(&corners_b);

            if a_max <= b_min + SAT_TOL || b_max <= a_min + SAT_TOL {
                //separating axis found
                return false;
            }
        }
        true
    }
}
