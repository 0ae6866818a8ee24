use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Text, Title};

use crate::entities::{Instance, PlankKind, Solution};
use crate::geometry::primitives::Point;
use crate::io::svg::svg_util::{self, SvgDrawOptions};

/// Composes an SVG drawing of a [`Solution`]: the room outline, every placed
/// plank colored by how it was cut, and optionally the cut lines and a
/// coverage label.
pub fn solution_to_svg(solution: &Solution, instance: &Instance, options: SvgDrawOptions) -> Document {
    let theme = options.theme.get_theme();
    let bbox = instance.room.bbox;
    let vbox = bbox
        .resize_by(0.05 * bbox.width(), 0.05 * bbox.height())
        .unwrap_or(bbox);
    let stroke_width =
        f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    //draw room
    let room_group = {
        let data = polygon_data(&instance.room.vertices);
        Group::new()
            .set("id", "room")
            .add(data_to_path(
                data,
                &[
                    ("fill", theme.room_fill),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(Title::new(format!(
                "room, area: {:.1}, vertices: {}",
                instance.room.area,
                instance.room.n_vertices()
            )))
    };

    //draw planks
    let mut planks_group = Group::new().set("id", "planks");
    for plank in &solution.planks {
        let kind = plank.kind();
        let outline = match plank.world_shape() {
            Some(shape) => shape,
            None => plank.footprint().corners().to_vec(),
        };
        let fill = match kind {
            PlankKind::Full => theme.full_fill,
            PlankKind::LinearCut => theme.linear_cut_fill,
            PlankKind::MultiLineCut => theme.multi_line_cut_fill,
            PlankKind::ShapeCut => theme.shape_cut_fill,
        };
        let stroke = svg_util::change_brightness(fill, 0.5);
        planks_group = planks_group.add(
            data_to_path(
                polygon_data(&outline),
                &[
                    ("fill", fill),
                    ("stroke", &stroke),
                    ("stroke-width", &*format!("{stroke_width}")),
                    ("stroke-linejoin", "round"),
                ],
            )
            .add(Title::new(format!(
                "plank {}, {kind:?}, area: {:.1}",
                plank.id,
                plank.area()
            ))),
        );
    }

    //draw cut lines
    let mut cut_lines_group = Group::new().set("id", "cut_lines");
    if options.cut_lines {
        for plank in &solution.planks {
            for cl in &plank.cut_lines {
                let data = Data::new()
                    .move_to((cl.start.0, cl.start.1))
                    .line_to((cl.end.0, cl.end.1));
                cut_lines_group = cut_lines_group.add(data_to_path(
                    data,
                    &[
                        ("fill", "none"),
                        ("stroke", theme.cut_line_stroke),
                        ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                        ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                        ("stroke-linecap", "round"),
                    ],
                ));
            }
        }
    }

    let mut document = Document::new()
        .set(
            "viewBox",
            (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()),
        )
        .add(room_group)
        .add(planks_group)
        .add(cut_lines_group);

    if options.labels {
        let label = Text::new(format!(
            "coverage: {:.2}%, stock: {}, waste: {:.1}",
            solution.coverage * 100.0,
            solution.stock_consumed,
            solution.waste_area()
        ))
        .set("x", vbox.x_min + 2.0 * stroke_width)
        .set("y", vbox.y_min + 20.0 * stroke_width)
        .set("font-size", format!("{}", 15.0 * stroke_width));
        document = document.add(label);
    }

    document
}

pub fn polygon_data(points: &[Point]) -> Data {
    let mut data = Data::new().move_to::<(f64, f64)>(points[0].into());
    for p in &points[1..] {
        data = data.line_to::<(f64, f64)>((*p).into());
    }
    data.close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
