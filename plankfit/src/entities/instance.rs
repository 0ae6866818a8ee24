use crate::geometry::primitives::ORect;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::SPolygon;
use anyhow::Result;
use anyhow::ensure;

/// Nominal plank dimensions and the layout clearances.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Dimensions {
    /// Nominal plank length
    pub length: f64,
    /// Nominal plank width
    pub width: f64,
    /// Fixed clearance between plank edges (and against the room boundary)
    pub gap: f64,
    /// Minimum stagger between the start positions of consecutive rows
    pub min_row_offset: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, gap: f64, min_row_offset: f64) -> Result<Self> {
        ensure!(
            length > 0.0 && width > 0.0,
            "plank dimensions must be positive, length: {length}, width: {width}"
        );
        ensure!(
            gap >= 0.0 && min_row_offset >= 0.0,
            "clearances cannot be negative, gap: {gap}, min_row_offset: {min_row_offset}"
        );
        Ok(Dimensions {
            length,
            width,
            gap,
            min_row_offset,
        })
    }

    /// Area of one uncut plank.
    pub fn plank_area(&self) -> f64 {
        self.length * self.width
    }

    /// Distance between the start of two consecutive planks in a row.
    pub fn span(&self) -> f64 {
        self.length + self.gap
    }

    /// Perpendicular distance between the center lines of two consecutive rows.
    pub fn row_spacing(&self) -> f64 {
        self.width + self.gap
    }
}

/// Position and orientation of the first plank, anchoring the row grid.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct SeedPlacement {
    pub center: Point,
    /// Rotation in degrees, counterclockwise; defines the row axis
    pub rotation: f64,
}

/// An immutable snapshot of a tessellation problem: the room outline, the
/// plank dimensions and the seed placement.
#[derive(Clone, Debug)]
pub struct Instance {
    pub room: SPolygon,
    pub dims: Dimensions,
    pub seed: SeedPlacement,
}

impl Instance {
    pub fn new(room: SPolygon, dims: Dimensions, seed: SeedPlacement) -> Result<Self> {
        let seed_rect = ORect::new(seed.center, seed.rotation, dims.length, dims.width);
        ensure!(
            seed_rect.overlaps(&room),
            "seed plank at {:?} does not overlap the room",
            seed.center
        );
        Ok(Instance { room, dims, seed })
    }
}
