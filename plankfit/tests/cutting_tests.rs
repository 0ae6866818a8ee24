use plankfit::cutting::{CutOutcome, CutStrategy, cut_to_fit};
use plankfit::entities::{Dimensions, PlankKind};
use plankfit::geometry::geo_traits::CollidesWith;
use plankfit::geometry::primitives::{ORect, Point, SPolygon};
use test_case::test_case;

fn rect_room() -> SPolygon {
    SPolygon::new(vec![
        Point(10000.0, 10000.0),
        Point(35000.0, 10000.0),
        Point(35000.0, 20000.0),
        Point(10000.0, 20000.0),
    ])
    .unwrap()
}

fn l_room() -> SPolygon {
    SPolygon::new(vec![
        Point(0.0, 0.0),
        Point(4000.0, 0.0),
        Point(4000.0, 2000.0),
        Point(2000.0, 2000.0),
        Point(2000.0, 4000.0),
        Point(0.0, 4000.0),
    ])
    .unwrap()
}

fn notch_room() -> SPolygon {
    SPolygon::new(vec![
        Point(0.0, 0.0),
        Point(3000.0, 0.0),
        Point(3000.0, 3000.0),
        Point(600.0, 3000.0),
        Point(0.0, 2400.0),
    ])
    .unwrap()
}

fn dims() -> Dimensions {
    Dimensions::new(1200.0, 240.0, 5.0, 300.0).unwrap()
}

#[test]
fn linear_trim_at_wall() {
    //plank sticks 100 past the right wall, in-room stretch is 1100
    let room = rect_room();
    let rect = ORect::new(Point(34500.0, 15000.0), 0.0, 1200.0, 240.0);

    let CutOutcome::Fitted(placement) = cut_to_fit(0, &rect, &room, &dims()) else {
        panic!("expected a fit");
    };
    assert_eq!(placement.strategy, CutStrategy::Linear);

    let fitted = &placement.fitted;
    assert_eq!(fitted.kind(), PlankKind::LinearCut);
    //in-room stretch minus the gap
    assert!((fitted.length - 1095.0).abs() < 1e-9);
    assert!(fitted.footprint().fully_inside(&room));

    let spare = placement.spare.expect("linear cuts always leave a spare");
    assert!(spare.is_spare);
    assert!((spare.length - 105.0).abs() < 1e-9);
    assert_eq!(spare.width, 240.0);
    //no material is created or destroyed by the cut
    assert!((fitted.length + spare.length - 1200.0).abs() < 1e-9);
}

#[test]
fn multi_line_cut_at_concave_corner() {
    //plank spans the inner corner of the L: two boundary edges of differing
    //orientation cross its bounding box
    let room = l_room();
    let rect = ORect::new(Point(2000.0, 2080.0), 0.0, 1200.0, 240.0);

    let CutOutcome::Fitted(placement) = cut_to_fit(0, &rect, &room, &dims()) else {
        panic!("expected a fit");
    };
    assert_eq!(placement.strategy, CutStrategy::MultiLine);

    let fitted = &placement.fitted;
    assert_eq!(fitted.kind(), PlankKind::MultiLineCut);
    assert_eq!(fitted.cut_lines.len(), 2);
    //full rect minus the 600 x 200 notch bite
    assert!((fitted.area() - 168_000.0).abs() < 1e-6);

    let shape = fitted.world_shape().unwrap();
    assert_eq!(shape.len(), 6);
    for p in &shape {
        assert!(room.collides_with(p) || room.on_boundary(p, 1e-6));
    }
}

#[test]
fn shape_cut_against_diagonal_wall() {
    //both overlapping edges are near-horizontal, so neither the linear nor
    //the multi-line strategy applies
    let room = notch_room();
    let rect = ORect::new(Point(600.0, 2880.0), 0.0, 1200.0, 240.0);

    let CutOutcome::Fitted(placement) = cut_to_fit(0, &rect, &room, &dims()) else {
        panic!("expected a fit");
    };
    assert_eq!(placement.strategy, CutStrategy::Shape);

    let fitted = &placement.fitted;
    assert_eq!(fitted.kind(), PlankKind::ShapeCut);
    assert!(fitted.cut_lines.is_empty());
    //trapezoid between the top wall and the diagonal
    assert!((fitted.area() - 172_800.0).abs() < 1e-6);

    for p in &fitted.world_shape().unwrap() {
        assert!(room.collides_with(p) || room.on_boundary(p, 1e-6));
    }
}

#[test]
fn near_full_overlap_falls_through_to_shape() {
    //keeping more than 95% of the length is no longer a linear trim
    let room = SPolygon::new(vec![
        Point(0.0, 0.0),
        Point(10000.0, 0.0),
        Point(10000.0, 2000.0),
        Point(0.0, 2000.0),
    ])
    .unwrap();
    let rect = ORect::new(Point(9450.0, 1000.0), 0.0, 1200.0, 240.0);
    let dims = Dimensions::new(1200.0, 240.0, 0.0, 0.0).unwrap();

    let CutOutcome::Fitted(placement) = cut_to_fit(0, &rect, &room, &dims) else {
        panic!("expected a fit");
    };
    assert_eq!(placement.strategy, CutStrategy::Shape);
    assert!((placement.fitted.area() - 1150.0 * 240.0).abs() < 1e-6);
}

#[test_case(40_000.0, 15_000.0; "fully outside")]
#[test_case(10_590.0, 10_000.0; "sliver overlap")]
fn no_fit(x: f64, y: f64) {
    //a plank with no room overlap, or a remnant too small to keep
    let room = SPolygon::new(vec![
        Point(0.0, 0.0),
        Point(10000.0, 0.0),
        Point(10000.0, 20000.0),
        Point(0.0, 20000.0),
    ])
    .unwrap();
    let rect = ORect::new(Point(x, y), 0.0, 1200.0, 240.0);
    let dims = Dimensions::new(1200.0, 240.0, 0.0, 0.0).unwrap();

    assert!(matches!(
        cut_to_fit(0, &rect, &room, &dims),
        CutOutcome::NoFit
    ));
}
