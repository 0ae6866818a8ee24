//! Row-based placement: planks are laid in rows along the seed plank's axis,
//! brick-style, with each row staggered against its neighbor. Candidates that
//! cross the room boundary are handed to the cutting chain; leftovers land in
//! the spare ledger and are substituted back in when a row start matches.

mod spares;

pub use spares::SpareLedger;

use std::time::Instant;

use log::{debug, info, warn};
use thousands::Separable;

use crate::cutting::{CutOutcome, cut_to_fit};
use crate::entities::{Instance, Layout, Plank, Solution};
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::{ORect, Point};
use crate::util::FPA;

/// Consecutive failed candidates after which a row is abandoned.
pub const MAX_ROW_ATTEMPTS: usize = 20;

/// Default cap on the total number of candidate positions examined per run.
pub const DEFAULT_CANDIDATE_BUDGET: usize = 100_000;

/// Why a row's scan ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowEnd {
    /// The cursor walked off the far end of the room
    Complete,
    /// Too many consecutive candidates failed to place
    RetriesExhausted,
    /// The global candidate budget ran out
    BudgetExhausted,
}

/// Outcome of one candidate position.
enum PlaceResult {
    /// A plank was accepted; carries the length to advance the cursor by
    Placed(f64),
    /// The candidate lies outside the room, advance by a full span
    Skip,
    /// The candidate overlaps the room but could not be placed
    Failed,
}

/// Deterministic row scanner. Rows fan out from the seed row in both
/// perpendicular directions; within a row the cursor walks the seed axis in
/// plank-plus-gap strides, cutting planks at the boundary and reusing spares.
pub struct RowPlacer {
    pub instance: Instance,
    pub layout: Layout,
    max_candidates: usize,
    n_candidates: usize,
    next_id: usize,
}

impl RowPlacer {
    pub fn new(instance: Instance, max_candidates: usize) -> Self {
        RowPlacer {
            instance,
            layout: Layout::new(),
            max_candidates,
            n_candidates: 0,
            next_id: 0,
        }
    }

    /// Runs the full scan and snapshots the result.
    pub fn solve(&mut self) -> Solution {
        let start = Instant::now();
        let instance = self.instance.clone();
        let seed_rect = ORect::new(
            instance.seed.center,
            instance.seed.rotation,
            instance.dims.length,
            instance.dims.width,
        );
        let (px, py) = seed_rect.perp_axis();

        //every row whose center line can still intersect the room bbox
        let bbox = instance.room.bbox;
        let max_perp = [
            Point(bbox.x_min, bbox.y_min),
            Point(bbox.x_max, bbox.y_min),
            Point(bbox.x_max, bbox.y_max),
            Point(bbox.x_min, bbox.y_max),
        ]
        .iter()
        .map(|c| ((c.0 - instance.seed.center.0) * px + (c.1 - instance.seed.center.1) * py).abs())
        .fold(0.0, f64::max);
        let n_rows = (max_perp / instance.dims.row_spacing()).ceil() as i64 + 1;

        //0, 1, -1, 2, -2, ... so both sides of the seed row fill evenly
        let row_order = (0..=n_rows).flat_map(|r| match r {
            0 => vec![0],
            r => vec![r, -r],
        });

        for row in row_order {
            let placed_before = self.layout.placed.len();
            let end = self.fill_row(row, &seed_rect);
            debug!(
                "[PLACE] row {row}: +{} planks ({end:?})",
                self.layout.placed.len() - placed_before
            );
            if end == RowEnd::BudgetExhausted {
                warn!(
                    "[PLACE] candidate budget of {} exhausted at row {row}",
                    self.max_candidates.separate_with_commas()
                );
                break;
            }
        }

        let solution = Solution::new(&self.layout, &instance, start.elapsed());
        info!(
            "[PLACE] {} planks placed, coverage {:.3}%, {} candidates, {} spares left, {:?}",
            solution.planks.len(),
            solution.coverage * 100.0,
            self.n_candidates.separate_with_commas(),
            solution.spares.len(),
            solution.runtime
        );
        debug_assert!(crate::util::assertions::no_overlapping_planks(
            &self.layout,
            instance.dims.gap
        ));
        solution
    }

    /// Scans one row from before the room's near edge to past its far edge.
    fn fill_row(&mut self, row: i64, seed_rect: &ORect) -> RowEnd {
        let dims = self.instance.dims;
        let (ax, ay) = seed_rect.axis();
        let (px, py) = seed_rect.perp_axis();
        let seed = self.instance.seed.center;

        //the origin is the near end of the seed plank, offset perpendicular
        //to its row: the s = 0 candidate of row 0 coincides with the seed
        let origin = Point(
            seed.0 + px * dims.row_spacing() * row as f64 - ax * dims.length / 2.0,
            seed.1 + py * dims.row_spacing() * row as f64 - ay * dims.length / 2.0,
        );

        //extent of the room along the row axis, relative to the origin
        let bbox = self.instance.room.bbox;
        let (mut s_min, mut s_max) = (f64::MAX, f64::MIN);
        for c in [
            Point(bbox.x_min, bbox.y_min),
            Point(bbox.x_max, bbox.y_min),
            Point(bbox.x_max, bbox.y_max),
            Point(bbox.x_min, bbox.y_max),
        ] {
            let s = (c.0 - origin.0) * ax + (c.1 - origin.1) * ay;
            s_min = s_min.min(s);
            s_max = s_max.max(s);
        }

        //stagger the row start, then walk back in whole strides to cover the
        //full row: the offset is preserved modulo the span
        let span = dims.span();
        let offset = self
            .layout
            .spares
            .optimal_row_offset(row, dims.min_row_offset, span);
        let walk_back = ((offset - (s_min - dims.length)) / span).ceil();
        let mut s = offset - walk_back * span;

        let mut attempts = 0;
        while s <= s_max + dims.length {
            if self.n_candidates >= self.max_candidates {
                return RowEnd::BudgetExhausted;
            }
            let start = Point(origin.0 + ax * s, origin.1 + ay * s);
            match self.try_place(start, (ax, ay)) {
                PlaceResult::Placed(length) => {
                    attempts = 0;
                    s += length + dims.gap;
                }
                PlaceResult::Skip => s += span,
                PlaceResult::Failed => {
                    attempts += 1;
                    if attempts >= MAX_ROW_ATTEMPTS {
                        return RowEnd::RetriesExhausted;
                    }
                    s += span;
                }
            }
        }
        RowEnd::Complete
    }

    /// Evaluates one candidate position, anchored at `start` (the near end of
    /// the candidate's center line).
    fn try_place(&mut self, start: Point, (ax, ay): (f64, f64)) -> PlaceResult {
        let dims = self.instance.dims;
        let rotation = self.instance.seed.rotation;
        self.n_candidates += 1;
        let room = &self.instance.room;

        let center = Point(
            start.0 + ax * dims.length / 2.0,
            start.1 + ay * dims.length / 2.0,
        );
        let rect = ORect::new(center, rotation, dims.length, dims.width);

        let relation = rect.relation_to(room);
        if relation == GeoRelation::Disjoint {
            return PlaceResult::Skip;
        }
        if self.layout.collides_with_placed(&rect, dims.gap) {
            return PlaceResult::Skip;
        }

        //prefer reusing a spare of matching width, longest first
        let reusable_idx = self.layout.spares.iter().position(|spare| {
            if FPA(spare.width) != FPA(dims.width) {
                return false;
            }
            let spare_rect = ORect::new(
                Point(
                    start.0 + ax * spare.length / 2.0,
                    start.1 + ay * spare.length / 2.0,
                ),
                rotation,
                spare.length,
                spare.width,
            );
            spare_rect.fully_inside(room)
                && !self.layout.collides_with_placed(&spare_rect, dims.gap)
        });
        if let Some(idx) = reusable_idx {
            let spare = self.layout.spares.remove(idx);
            let length = spare.length;
            debug!("[PLACE] reusing spare of length {length:.1} at {start:?}");
            let id = self.next_id;
            self.next_id += 1;
            self.layout.place(Plank {
                id,
                center: Point(start.0 + ax * length / 2.0, start.1 + ay * length / 2.0),
                rotation,
                ..spare
            });
            return PlaceResult::Placed(length);
        }

        match relation {
            GeoRelation::Enclosed => {
                let id = self.next_id;
                self.next_id += 1;
                let plank = Plank::full(id, center, rotation, dims.length, dims.width);
                self.layout.place(plank);
                PlaceResult::Placed(dims.length)
            }
            GeoRelation::Intersecting => {
                match cut_to_fit(self.next_id, &rect, room, &dims) {
                    CutOutcome::Fitted(placement) => {
                        let footprint = placement.fitted.footprint();
                        if self.layout.collides_with_placed(&footprint, dims.gap) {
                            return PlaceResult::Failed;
                        }
                        //advance to the far end of the fitted piece: cut pieces
                        //are not necessarily anchored at the cursor
                        let center_proj = (footprint.center.0 - start.0) * ax
                            + (footprint.center.1 - start.1) * ay;
                        let advance = center_proj + footprint.length / 2.0;
                        self.next_id += 1;
                        self.layout.place(placement.fitted);
                        if let Some(spare) = placement.spare {
                            self.layout.spares.add(spare);
                        }
                        PlaceResult::Placed(advance)
                    }
                    CutOutcome::NoFit => PlaceResult::Failed,
                }
            }
            GeoRelation::Disjoint => unreachable!(),
        }
    }
}
