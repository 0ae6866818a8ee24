use slotmap::{SlotMap, new_key_type};

use crate::entities::Plank;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::ORect;
use crate::geometry::primitives::SPolygon;
use crate::placement::SpareLedger;

new_key_type! {
    /// Key for accepted planks in a [`Layout`]
    pub struct PlankKey;
}

/// The in-progress state of one tessellation run: all accepted planks plus
/// the ledger of leftover cut-offs. Local to a single run, never shared.
#[derive(Clone, Debug)]
pub struct Layout {
    pub placed: SlotMap<PlankKey, Plank>,
    pub spares: SpareLedger,
}

impl Layout {
    pub fn new() -> Self {
        Layout {
            placed: SlotMap::with_key(),
            spares: SpareLedger::new(),
        }
    }

    pub fn place(&mut self, plank: Plank) -> PlankKey {
        self.placed.insert(plank)
    }

    /// True if `rect` comes closer than `gap` to any accepted plank.
    /// Each placed footprint is inflated by the gap on every side; exactly
    /// touching the inflated rectangle still counts as clear.
    pub fn collides_with_placed(&self, rect: &ORect, gap: f64) -> bool {
        self.placed
            .values()
            .any(|plank| plank.footprint().inflate(gap).collides_with(rect))
    }

    /// Sum of the areas of all accepted planks.
    pub fn placed_area(&self) -> f64 {
        self.placed.values().map(|p| p.area()).sum()
    }

    /// Fraction of the room area covered by accepted planks.
    pub fn coverage(&self, room: &SPolygon) -> f64 {
        self.placed_area() / room.area
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}
