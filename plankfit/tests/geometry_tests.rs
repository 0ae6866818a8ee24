use std::f64::consts::FRAC_PI_2;

use plankfit::geometry::clip_polygon;
use plankfit::geometry::geo_enums::GeoRelation;
use plankfit::geometry::geo_traits::{CollidesWith, Shape};
use plankfit::geometry::primitives::{Edge, ORect, Point, Rect, SPolygon};
use plankfit::util::FPA;

fn square_room() -> SPolygon {
    SPolygon::new(vec![
        Point(0.0, 0.0),
        Point(4.0, 0.0),
        Point(4.0, 4.0),
        Point(0.0, 4.0),
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

#[test]
fn touching_rects_do_not_collide() {
    let a = ORect::new(Point(0.0, 0.0), 0.0, 2.0, 2.0);
    let b = ORect::new(Point(2.0, 0.0), 0.0, 2.0, 2.0);
    assert!(!a.collides_with(&b));
    assert!(!b.collides_with(&a));

    let c = ORect::new(Point(1.9, 0.0), 0.0, 2.0, 2.0);
    assert!(a.collides_with(&c));
    assert!(c.collides_with(&a));
}

#[test]
fn rotated_rect_collision() {
    let strip = ORect::new(Point(0.0, 0.0), 45.0, 4.0, 0.2);
    let near = ORect::new(Point(1.6, 1.6), 0.0, 1.0, 1.0);
    let far = ORect::new(Point(3.0, 3.0), 0.0, 1.0, 1.0);
    assert!(strip.collides_with(&near));
    assert!(!strip.collides_with(&far));
}

#[test]
fn relation_to_square_room() {
    let room = square_room();

    let flush = ORect::new(Point(2.0, 2.0), 0.0, 4.0, 4.0);
    assert_eq!(flush.relation_to(&room), GeoRelation::Enclosed);

    let inner = ORect::new(Point(2.0, 2.0), 0.0, 2.0, 2.0);
    assert_eq!(inner.relation_to(&room), GeoRelation::Enclosed);

    let straddling = ORect::new(Point(4.0, 2.0), 0.0, 2.0, 2.0);
    assert_eq!(straddling.relation_to(&room), GeoRelation::Intersecting);

    let outside = ORect::new(Point(7.0, 2.0), 0.0, 2.0, 2.0);
    assert_eq!(outside.relation_to(&room), GeoRelation::Disjoint);
}

#[test]
fn rect_straddling_concave_corner_is_not_inside() {
    let room = l_room();
    //all 4 corners are inside the L, but the rect crosses the notch
    let rect = ORect::new(Point(2000.0, 2080.0), 0.0, 1200.0, 240.0);
    assert!(!rect.fully_inside(&room));
    assert_eq!(rect.relation_to(&room), GeoRelation::Intersecting);
}

#[test]
fn point_in_polygon_through_vertex() {
    //ray from (1, 2) passes exactly through the vertices (4, 2) and (0, 2)
    let diamond = SPolygon::new(vec![
        Point(2.0, 0.0),
        Point(4.0, 2.0),
        Point(2.0, 4.0),
        Point(0.0, 2.0),
    ])
    .unwrap();

    assert!(diamond.collides_with(&Point(1.0, 2.0)));
    assert!(diamond.collides_with(&Point(2.0, 2.0)));
    assert!(!diamond.collides_with(&Point(5.0, 2.0)));
    assert!(!diamond.collides_with(&Point(3.5, 3.5)));
}

#[test]
fn point_in_polygon_invariant_to_vertex_rotation() {
    let vertices = [
        Point(0.0, 0.0),
        Point(4000.0, 0.0),
        Point(4000.0, 2000.0),
        Point(2000.0, 2000.0),
        Point(2000.0, 4000.0),
        Point(0.0, 4000.0),
    ];
    let probes = [
        Point(1000.0, 1000.0),
        Point(3000.0, 1000.0),
        Point(1000.0, 3000.0),
        Point(3000.0, 3000.0),
        Point(2500.0, 2500.0),
    ];

    for start in 0..vertices.len() {
        let mut rotated = vertices.to_vec();
        rotated.rotate_left(start);
        let poly = SPolygon::new(rotated).unwrap();
        for p in &probes {
            assert_eq!(
                poly.collides_with(p),
                l_room().collides_with(p),
                "probe {p:?} differs for start vertex {start}"
            );
        }
    }
}

#[test]
fn polygon_winding_is_normalized() {
    //clockwise input is reversed to counterclockwise, area stays positive
    let cw = SPolygon::new(vec![
        Point(0.0, 0.0),
        Point(0.0, 4.0),
        Point(4.0, 4.0),
        Point(4.0, 0.0),
    ])
    .unwrap();
    assert_eq!(cw.area, 16.0);
    assert_eq!(SPolygon::calculate_area(&cw.vertices), 16.0);
    assert_eq!(cw.centroid(), Point(2.0, 2.0));
}

#[test]
fn on_boundary_tolerance() {
    let room = square_room();
    assert!(room.on_boundary(&Point(2.0, 0.0), 1e-6));
    assert!(room.on_boundary(&Point(2.0, 1e-7), 1e-6));
    assert!(!room.on_boundary(&Point(2.0, 0.1), 1e-6));
}

#[test]
fn clip_fully_inside_is_identity() {
    let room = square_room();
    let subject = [
        Point(1.0, 1.0),
        Point(3.0, 1.0),
        Point(3.0, 3.0),
        Point(1.0, 3.0),
    ];
    let clipped = clip_polygon(&subject, &room);
    assert_eq!(clipped.len(), 4);
    assert_eq!(SPolygon::calculate_area(&clipped).abs(), 4.0);
}

#[test]
fn clip_overlapping_corner() {
    let room = square_room();
    let subject = [
        Point(3.0, 3.0),
        Point(5.0, 3.0),
        Point(5.0, 5.0),
        Point(3.0, 5.0),
    ];
    let clipped = clip_polygon(&subject, &room);
    assert_eq!(SPolygon::calculate_area(&clipped).abs(), 1.0);
    for p in &clipped {
        assert!(room.collides_with(p) || room.on_boundary(p, 1e-6));
    }
}

#[test]
fn clip_disjoint_is_empty() {
    let room = square_room();
    let subject = [
        Point(5.0, 5.0),
        Point(6.0, 5.0),
        Point(6.0, 6.0),
        Point(5.0, 6.0),
    ];
    assert!(clip_polygon(&subject, &room).len() < 3);
}

#[test]
fn edge_intersection() {
    let a = Edge::new(Point(0.0, 0.0), Point(2.0, 2.0)).unwrap();
    let b = Edge::new(Point(0.0, 2.0), Point(2.0, 0.0)).unwrap();
    assert_eq!(a.collides_at(&b), Some(Point(1.0, 1.0)));

    //parallel edges never intersect
    let c = Edge::new(Point(0.0, 0.0), Point(1.0, 0.0)).unwrap();
    let d = Edge::new(Point(0.0, 1.0), Point(1.0, 1.0)).unwrap();
    assert_eq!(c.collides_at(&d), None);
}

#[test]
fn rect_clips_edge() {
    let rect = Rect::try_new(0.0, 0.0, 2.0, 2.0).unwrap();
    let edge = Edge::new(Point(-1.0, 1.0), Point(3.0, 1.0)).unwrap();
    let clipped = rect.clip_edge(&edge).unwrap();
    assert_eq!(clipped.start, Point(0.0, 1.0));
    assert_eq!(clipped.end, Point(2.0, 1.0));

    let missing = Edge::new(Point(-1.0, 3.0), Point(3.0, 3.0)).unwrap();
    assert!(rect.clip_edge(&missing).is_none());
}

#[test]
fn orect_bbox_and_local_frame() {
    let rect = ORect::new(Point(10.0, 10.0), 90.0, 4.0, 2.0);
    let bbox = rect.bbox();
    assert!((bbox.x_min - 9.0).abs() < 1e-9);
    assert!((bbox.x_max - 11.0).abs() < 1e-9);
    assert!((bbox.y_min - 8.0).abs() < 1e-9);
    assert!((bbox.y_max - 12.0).abs() < 1e-9);

    let p = Point(10.0, 11.0);
    let local = rect.to_local(p);
    assert!((local.0 - 1.0).abs() < 1e-9);
    assert!(local.1.abs() < 1e-9);
    let back = rect.to_world(local);
    assert!((back.0 - p.0).abs() < 1e-9);
    assert!((back.1 - p.1).abs() < 1e-9);
}

#[test]
fn point_rotation() {
    let p = Point(1.0, 0.0).rotate_around(Point(0.0, 0.0), FRAC_PI_2);
    assert!(p.0.abs() < 1e-12);
    assert!((p.1 - 1.0).abs() < 1e-12);
}

#[test]
fn fpa_tolerant_comparison() {
    assert_eq!(FPA(0.1 + 0.2), FPA(0.3));
    assert!(FPA(1.0) < FPA(1.1));
    assert!(FPA(1.1) > FPA(1.0));
}
