use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// Outline of the room, a simple polygon
    pub room: ExtSPolygon,
    /// Nominal plank dimensions and clearances
    pub dimensions: ExtDimensions,
    /// Placement of the first plank, anchoring the row grid
    pub seed: ExtSeedPlacement,
    /// Multiplier from the room/seed coordinates to the unit the dimensions
    /// are expressed in. 1.0 if not specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coord_scale: Option<f64>,
}

/// External representation of [`Dimensions`](crate::entities::Dimensions).
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtDimensions {
    pub length: f64,
    pub width: f64,
    #[serde(default)]
    pub gap: f64,
    #[serde(default)]
    pub min_row_offset: f64,
}

/// External representation of a [`SeedPlacement`](crate::entities::SeedPlacement).
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtSeedPlacement {
    pub center: (f64, f64),
    /// Rotation in degrees, counterclockwise
    #[serde(default)]
    pub rotation: f64,
}

/// External representation of a [`SPolygon`](crate::geometry::primitives::SPolygon).
/// A polygon with no holes and no self-intersections.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSPolygon(pub Vec<(f64, f64)>);

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    pub planks: Vec<ExtPlank>,
    /// Leftovers that were never reused
    pub spares: Vec<ExtSpare>,
    pub coverage: f64,
    pub stock_consumed: usize,
    pub run_time_ms: u64,
}

/// External representation of a placed [`Plank`](crate::entities::Plank).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlank {
    pub id: u64,
    pub kind: ExtPlankKind,
    pub center: (f64, f64),
    /// Rotation in degrees, counterclockwise
    pub rotation: f64,
    pub length: f64,
    pub width: f64,
    /// Cut outline in world coordinates, for cut planks with a non-rectangular shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<(f64, f64)>>,
    /// Segments along which a multi-line cut was made, in world coordinates
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub cut_lines: Vec<((f64, f64), (f64, f64))>,
}

/// External representation of a [`PlankKind`](crate::entities::PlankKind).
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ExtPlankKind {
    Full,
    LinearCut,
    MultiLineCut,
    ShapeCut,
}

/// External representation of a leftover in the spare ledger.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtSpare {
    pub length: f64,
    pub width: f64,
}
