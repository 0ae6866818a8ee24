mod clip;

/// Enums to describe relative geometric positions and relations
pub mod geo_enums;

/// Traits for geometric properties and relations
pub mod geo_traits;

/// Geometric primitives: points, edges, rectangles and simple polygons
pub mod primitives;

pub use clip::clip_polygon;
