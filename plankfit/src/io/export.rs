use crate::entities::{Plank, PlankKind, Solution};
use crate::io::ext_repr::{ExtPlank, ExtPlankKind, ExtSolution, ExtSpare};

/// Exports a [`Solution`] by composing an [`ExtSolution`] from it.
pub fn export_solution(solution: &Solution) -> ExtSolution {
    ExtSolution {
        planks: solution.planks.iter().map(export_plank).collect(),
        spares: solution
            .spares
            .iter()
            .map(|s| ExtSpare {
                length: s.length,
                width: s.width,
            })
            .collect(),
        coverage: solution.coverage,
        stock_consumed: solution.stock_consumed,
        run_time_ms: solution.runtime.as_millis() as u64,
    }
}

pub fn export_plank(plank: &Plank) -> ExtPlank {
    ExtPlank {
        id: plank.id as u64,
        kind: match plank.kind() {
            PlankKind::Full => ExtPlankKind::Full,
            PlankKind::LinearCut => ExtPlankKind::LinearCut,
            PlankKind::MultiLineCut => ExtPlankKind::MultiLineCut,
            PlankKind::ShapeCut => ExtPlankKind::ShapeCut,
        },
        center: (plank.center.0, plank.center.1),
        rotation: plank.rotation,
        length: plank.length,
        width: plank.width,
        shape: plank
            .world_shape()
            .map(|shape| shape.iter().map(|p| (p.0, p.1)).collect()),
        cut_lines: plank
            .cut_lines
            .iter()
            .map(|e| ((e.start.0, e.start.1), (e.end.0, e.end.1)))
            .collect(),
    }
}
