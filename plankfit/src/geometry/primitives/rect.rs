use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Returns a new rectangle with the same centroid as `self` but expanded by `dx` in both x-directions and by `dy` in both y-directions.
    /// If the new rectangle is invalid (x_min >= x_max or y_min >= y_max), returns None.
    pub fn resize_by(mut self, dx: f64, dy: f64) -> Option<Self> {
        self.x_min -= dx;
        self.y_min -= dy;
        self.x_max += dx;
        self.y_max += dy;

        if self.x_min < self.x_max && self.y_min < self.y_max {
            Some(self)
        } else {
            //resizing would lead to invalid rectangle
            None
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Clips a segment to the part that lies within `self`.
    /// Returns `None` if the segment misses the rectangle entirely or only grazes it in a single point.
    pub fn clip_edge(&self, edge: &Edge) -> Option<Edge> {
        //Liang-Barsky: https://en.wikipedia.org/wiki/Liang%E2%80%93Barsky_algorithm
        let Point(x0, y0) = edge.start;
        let Point(x1, y1) = edge.end;
        let (dx, dy) = (x1 - x0, y1 - y0);

        let p = [-dx, dx, -dy, dy];
        let q = [
            x0 - self.x_min,
            self.x_max - x0,
            y0 - self.y_min,
            self.y_max - y0,
        ];

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for i in 0..4 {
            if p[i] == 0.0 {
                if q[i] < 0.0 {
                    //parallel to this boundary and outside of it
                    return None;
                }
            } else {
                let r = q[i] / p[i];
                if p[i] < 0.0 {
                    t0 = t0.max(r);
                } else {
                    t1 = t1.min(r);
                }
            }
        }
        if t0 >= t1 {
            return None;
        }

        let start = Point(x0 + t0 * dx, y0 + t0 * dy);
        let end = Point(x0 + t1 * dx, y0 + t1 * dy);
        Edge::new(start, end).ok()
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
