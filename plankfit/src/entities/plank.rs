use crate::geometry::primitives::Edge;
use crate::geometry::primitives::ORect;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::SPolygon;
use crate::util::FPA;

/// One unit of flooring material: an oriented rectangle, or (once cut) an
/// arbitrary polygon stored in the plank's own rotated frame.
#[derive(Clone, Debug)]
pub struct Plank {
    pub id: usize,
    pub center: Point,
    /// Rotation in degrees, counterclockwise
    pub rotation: f64,
    pub length: f64,
    pub width: f64,
    /// Populated when the plank was cut into an arbitrary shape.
    /// Points are relative to the plank's own rotated frame (center at origin, length along +x).
    pub shape: Option<Vec<Point>>,
    /// The boundary segments along which a multi-line cut was made (world frame).
    /// Provenance only, does not affect the geometry of the plank.
    pub cut_lines: Vec<Edge>,
    pub is_spare: bool,
    /// Length of the plank before any cut, for waste accounting.
    pub original_length: f64,
}

/// How a plank ended up in its final geometry. Mutually exclusive, derived
/// from which optional fields are populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlankKind {
    /// Uncut, full nominal rectangle
    Full,
    /// Rectangle trimmed to a shorter length by a single straight cut
    LinearCut,
    /// Arbitrary shape assembled from multiple straight cut lines
    MultiLineCut,
    /// Arbitrary shape produced by clipping against the room outline
    ShapeCut,
}

impl Plank {
    /// A full, uncut plank.
    pub fn full(id: usize, center: Point, rotation: f64, length: f64, width: f64) -> Self {
        Plank {
            id,
            center,
            rotation,
            length,
            width,
            shape: None,
            cut_lines: vec![],
            is_spare: false,
            original_length: length,
        }
    }

    pub fn kind(&self) -> PlankKind {
        match &self.shape {
            Some(_) if !self.cut_lines.is_empty() => PlankKind::MultiLineCut,
            Some(_) => PlankKind::ShapeCut,
            None if FPA(self.length) < FPA(self.original_length) => PlankKind::LinearCut,
            None => PlankKind::Full,
        }
    }

    /// The rectangle this plank occupies.
    /// For shaped planks this is the bounding rectangle of the cut shape,
    /// re-oriented to the plank's rotation. Collision queries operate on this
    /// rectangle, a deliberate approximation for shaped planks.
    pub fn footprint(&self) -> ORect {
        match &self.shape {
            None => ORect::new(self.center, self.rotation, self.length, self.width),
            Some(shape) => {
                let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
                let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);
                for Point(x, y) in shape {
                    x_min = x_min.min(*x);
                    y_min = y_min.min(*y);
                    x_max = x_max.max(*x);
                    y_max = y_max.max(*y);
                }
                let nominal = ORect::new(self.center, self.rotation, self.length, self.width);
                let local_center = Point((x_min + x_max) / 2.0, (y_min + y_max) / 2.0);
                ORect::new(
                    nominal.to_world(local_center),
                    self.rotation,
                    x_max - x_min,
                    y_max - y_min,
                )
            }
        }
    }

    /// Area of the plank's final geometry.
    pub fn area(&self) -> f64 {
        match &self.shape {
            None => self.length * self.width,
            Some(shape) => SPolygon::calculate_area(shape).abs(),
        }
    }

    /// The cut shape mapped back to world coordinates, if any.
    pub fn world_shape(&self) -> Option<Vec<Point>> {
        let nominal = ORect::new(self.center, self.rotation, self.length, self.width);
        self.shape
            .as_ref()
            .map(|shape| shape.iter().map(|p| nominal.to_world(*p)).collect())
    }
}
