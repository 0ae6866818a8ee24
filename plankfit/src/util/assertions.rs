//! Expensive sanity checks, used in debug assertions and tests.

use itertools::Itertools;

use crate::entities::{Instance, Layout, Solution};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{BOUNDARY_TOL, SPolygon};

/// Every pair of accepted planks respects the configured gap.
pub fn no_overlapping_planks(layout: &Layout, gap: f64) -> bool {
    layout
        .placed
        .values()
        .tuple_combinations()
        .all(|(a, b)| !a.footprint().inflate(gap).collides_with(&b.footprint()))
}

/// No plank area appears out of thin air: the area of all accepted planks
/// plus the unreused leftovers never exceeds the stock consumed.
/// Leftovers of area-based cuts are approximated conservatively, so this is
/// an inequality rather than an exact balance.
pub fn area_is_conserved(solution: &Solution, instance: &Instance) -> bool {
    let placed_area: f64 = solution.planks.iter().map(|p| p.area()).sum();
    let total = placed_area + solution.waste_area();
    total <= solution.stock_area(instance) * (1.0 + 1e-9)
}

/// Every accepted plank lies inside the room: shaped planks by their cut
/// shape's vertices, rectangular planks by their footprint.
pub fn all_planks_inside_room(solution: &Solution, room: &SPolygon) -> bool {
    solution.planks.iter().all(|plank| match plank.world_shape() {
        Some(shape) => shape
            .iter()
            .all(|p| room.collides_with(p) || room.on_boundary(p, BOUNDARY_TOL)),
        None => plank.footprint().fully_inside(room),
    })
}
