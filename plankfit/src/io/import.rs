use anyhow::{Result, bail};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::warn;

use crate::entities::{Dimensions, Instance, SeedPlacement};
use crate::geometry::primitives::Point;
use crate::geometry::primitives::SPolygon;
use crate::io::ext_repr::{ExtInstance, ExtSPolygon};

/// Converts an external instance into an internal one.
///
/// The room outline and the seed center are multiplied by `coord_scale`;
/// the plank dimensions are taken as-is, they are already expressed in the
/// target unit.
pub fn import_instance(ext: &ExtInstance) -> Result<Instance> {
    let scale = ext.coord_scale.unwrap_or(1.0);
    if scale <= 0.0 {
        bail!("coord_scale must be positive: {scale}");
    }

    let room = import_simple_polygon(&ext.room, scale)?;
    let dims = Dimensions::new(
        ext.dimensions.length,
        ext.dimensions.width,
        ext.dimensions.gap,
        ext.dimensions.min_row_offset,
    )?;
    let seed = SeedPlacement {
        center: Point(ext.seed.center.0 * scale, ext.seed.center.1 * scale),
        rotation: ext.seed.rotation,
    };

    Instance::new(room, dims, seed)
}

pub fn import_simple_polygon(sp: &ExtSPolygon, scale: f64) -> Result<SPolygon> {
    let mut points = sp.0.iter().map(|(x, y)| Point(x * scale, y * scale)).collect_vec();
    //Strip the last vertex if it is the same as the first one
    if points.len() > 1 && points[0] == points[points.len() - 1] {
        points.pop();
    }
    //Remove duplicates that are consecutive (e.g. [1, 2, 2, 3] -> [1, 2, 3])
    eliminate_degenerate_points(&mut points);
    //Bail if there are any non-consecutive duplicates.
    if points.len() != points.iter().unique().count() {
        bail!("room outline has non-consecutive duplicate vertices");
    }
    SPolygon::new(points)
}

pub fn eliminate_degenerate_points(points: &mut Vec<Point>) {
    let mut indices_to_remove = vec![];
    let n_points = points.len();
    for i in 0..n_points {
        let j = (i + 1) % n_points;
        let p_i = points[i];
        let p_j = points[j];
        if approx_eq!(f64, p_i.0, p_j.0) && approx_eq!(f64, p_i.1, p_j.1) {
            //points are equal, mark for removal
            indices_to_remove.push(i);
        }
    }
    //remove points in reverse order to avoid shifting indices
    indices_to_remove.sort_unstable_by(|a, b| b.cmp(a));
    for index in indices_to_remove {
        if index < points.len() {
            let j = (index + 1) % points.len();
            warn!(
                "[IMPORT] degenerate point of room outline eliminated (idx: {}, {:?}, {:?})",
                index, points[index], points[j]
            );
            points.remove(index);
        }
    }
}
