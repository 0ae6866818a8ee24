use std::time::Duration;

use crate::entities::Instance;
use crate::entities::Layout;
use crate::entities::Plank;

/// Final snapshot of a tessellation run.
///
/// Deterministic for a fixed [`Instance`]: the engine contains no randomness
/// and the plank order follows the row scan.
#[derive(Clone, Debug)]
pub struct Solution {
    /// All accepted planks, in placement order
    pub planks: Vec<Plank>,
    /// Leftover cut-offs that were never reused: the residual waste
    pub spares: Vec<Plank>,
    /// Fraction of the room area covered by accepted planks.
    /// Anything below 1.0 signals incomplete coverage, the engine's only
    /// caller-visible failure mode.
    pub coverage: f64,
    /// Number of virgin planks consumed (reused spares consume none)
    pub stock_consumed: usize,
    pub runtime: Duration,
}

impl Solution {
    pub fn new(layout: &Layout, instance: &Instance, runtime: Duration) -> Self {
        let planks: Vec<Plank> = layout.placed.values().cloned().collect();
        let spares: Vec<Plank> = layout.spares.iter().cloned().collect();
        let stock_consumed = planks.iter().filter(|p| !p.is_spare).count();

        Solution {
            coverage: layout.coverage(&instance.room),
            planks,
            spares,
            stock_consumed,
            runtime,
        }
    }

    /// Total area of stock material consumed.
    pub fn stock_area(&self, instance: &Instance) -> f64 {
        self.stock_consumed as f64 * instance.dims.plank_area()
    }

    /// Total area of leftovers that were never reused.
    pub fn waste_area(&self) -> f64 {
        self.spares.iter().map(|s| s.length * s.width).sum()
    }
}
