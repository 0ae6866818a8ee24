//! Three escalating strategies to trim an oversized plank to the room
//! boundary: a single straight trim, a multi-line corner cut and a full
//! polygon clip as fallback. Invoked only for candidates that overlap the
//! room but are not fully inside it.

mod linear;
mod multi_line;
mod shape;

use crate::entities::Dimensions;
use crate::entities::Plank;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::ORect;
use crate::geometry::primitives::Rect;
use crate::geometry::primitives::SPolygon;
use log::{debug, trace};

/// Minimum dimensions of a leftover worth keeping for reuse.
pub const MIN_SPARE_DIMS: (f64, f64) = (200.0, 50.0);

/// Tolerance when counting which polygon edges a plank's bounding box overlaps.
const EDGE_OVERLAP_TOL: f64 = 1e-6;

/// Which cutting strategy produced a fitted plank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CutStrategy {
    Linear,
    MultiLine,
    Shape,
}

/// A successful cut: the fitted piece and the optional leftover.
#[derive(Clone, Debug)]
pub struct CutPlacement {
    pub fitted: Plank,
    pub spare: Option<Plank>,
    pub strategy: CutStrategy,
}

/// Result of running the strategy chain on one candidate.
#[derive(Clone, Debug)]
pub enum CutOutcome {
    Fitted(CutPlacement),
    NoFit,
}

type StrategyFn = fn(usize, &ORect, &SPolygon, &Dimensions) -> Option<(Plank, Option<Plank>)>;

/// Tries the strategies in order (linear → multi-line → shape), short-circuiting
/// on the first that produces a fitted piece.
pub fn cut_to_fit(id: usize, rect: &ORect, room: &SPolygon, dims: &Dimensions) -> CutOutcome {
    const STRATEGIES: [(CutStrategy, StrategyFn); 3] = [
        (CutStrategy::Linear, linear::try_cut),
        (CutStrategy::MultiLine, multi_line::try_cut),
        (CutStrategy::Shape, shape::try_cut),
    ];

    for (strategy, try_cut) in STRATEGIES {
        match try_cut(id, rect, room, dims) {
            Some((fitted, spare)) => {
                debug!(
                    "[CUT] {strategy:?} fit plank {id} at {:?}, area {:.1} of {:.1}",
                    rect.center,
                    fitted.area(),
                    rect.area()
                );
                return CutOutcome::Fitted(CutPlacement {
                    fitted,
                    spare,
                    strategy,
                });
            }
            None => trace!("[CUT] {strategy:?} not applicable for plank {id}"),
        }
    }
    CutOutcome::NoFit
}

/// Polygon edges whose bounding box overlaps `bbox`, with a small tolerance.
fn overlapping_edges(bbox: &Rect, room: &SPolygon) -> Vec<Edge> {
    room.edge_iter()
        .filter(|e| {
            e.x_min() <= bbox.x_max + EDGE_OVERLAP_TOL
                && e.x_max() >= bbox.x_min - EDGE_OVERLAP_TOL
                && e.y_min() <= bbox.y_max + EDGE_OVERLAP_TOL
                && e.y_max() >= bbox.y_min - EDGE_OVERLAP_TOL
        })
        .collect()
}

/// Rectangular approximation of the leftover of an area-based cut:
/// a square of the remaining area, capped to the original dimensions.
/// Returns `None` when the result is below [MIN_SPARE_DIMS] in either dimension.
fn area_spare(id: usize, rect: &ORect, remaining_area: f64, dims: &Dimensions) -> Option<Plank> {
    if remaining_area <= 0.0 {
        return None;
    }
    let side = remaining_area.sqrt();
    let length = side.min(dims.length);
    let width = side.min(dims.width);
    if length < MIN_SPARE_DIMS.0 || width < MIN_SPARE_DIMS.1 {
        return None;
    }
    Some(Plank {
        id,
        center: rect.center,
        rotation: 0.0,
        length,
        width,
        shape: None,
        cut_lines: vec![],
        is_spare: true,
        original_length: rect.length,
    })
}
