use plankfit::entities::{Dimensions, Instance, PlankKind, SeedPlacement};
use plankfit::geometry::primitives::{Point, SPolygon};
use plankfit::placement::{DEFAULT_CANDIDATE_BUDGET, RowPlacer, SpareLedger};
use plankfit::util::assertions;

fn rect_instance() -> Instance {
    //room dimensions are exact multiples of the plank dimensions
    let room = SPolygon::new(vec![
        Point(0.0, 0.0),
        Point(4800.0, 0.0),
        Point(4800.0, 2400.0),
        Point(0.0, 2400.0),
    ])
    .unwrap();
    let dims = Dimensions::new(1200.0, 240.0, 0.0, 0.0).unwrap();
    let seed = SeedPlacement {
        center: Point(600.0, 120.0),
        rotation: 0.0,
    };
    Instance::new(room, dims, seed).unwrap()
}

fn l_instance() -> Instance {
    let room = SPolygon::new(vec![
        Point(0.0, 0.0),
        Point(4000.0, 0.0),
        Point(4000.0, 2000.0),
        Point(2000.0, 2000.0),
        Point(2000.0, 4000.0),
        Point(0.0, 4000.0),
    ])
    .unwrap();
    let dims = Dimensions::new(1200.0, 240.0, 5.0, 300.0).unwrap();
    let seed = SeedPlacement {
        center: Point(700.0, 700.0),
        rotation: 0.0,
    };
    Instance::new(room, dims, seed).unwrap()
}

#[test]
fn exactly_divisible_room_is_fully_covered_by_full_planks() {
    let instance = rect_instance();
    let mut placer = RowPlacer::new(instance.clone(), DEFAULT_CANDIDATE_BUDGET);
    let solution = placer.solve();

    assert!((solution.coverage - 1.0).abs() < 1e-9);
    //4 planks per row, 10 rows, nothing was ever cut
    assert_eq!(solution.planks.len(), 40);
    assert!(solution.planks.iter().all(|p| p.kind() == PlankKind::Full));
    assert!(solution.spares.is_empty());
    //the seed plank itself is among the placed planks
    assert!(
        solution
            .planks
            .iter()
            .any(|p| p.center == instance.seed.center)
    );
    assert!(assertions::no_overlapping_planks(
        &placer.layout,
        instance.dims.gap
    ));
    assert!(assertions::all_planks_inside_room(&solution, &instance.room));
    assert!(assertions::area_is_conserved(&solution, &instance));
}

#[test]
fn leftovers_are_reused_in_later_rows() {
    //two-row room, 4000 long: each row ends in a cut whose leftover lands in
    //the ledger, and row 1 starts 600 offset, leaving a 1000 stretch before
    //the right wall that only the ledgered leftovers can fill
    let room = SPolygon::new(vec![
        Point(0.0, 0.0),
        Point(4000.0, 0.0),
        Point(4000.0, 480.0),
        Point(0.0, 480.0),
    ])
    .unwrap();
    let dims = Dimensions::new(1200.0, 240.0, 0.0, 600.0).unwrap();
    let seed = SeedPlacement {
        center: Point(600.0, 120.0),
        rotation: 0.0,
    };
    let instance = Instance::new(room, dims, seed).unwrap();

    let mut placer = RowPlacer::new(instance.clone(), DEFAULT_CANDIDATE_BUDGET);
    let solution = placer.solve();

    let reused = solution.planks.iter().filter(|p| p.is_spare).count();
    assert_eq!(reused, 2);
    //reused planks consume no stock
    assert_eq!(solution.stock_consumed, solution.planks.len() - reused);
    assert!(solution.coverage > 0.999);
    assert!(assertions::no_overlapping_planks(
        &placer.layout,
        instance.dims.gap
    ));
    assert!(assertions::all_planks_inside_room(&solution, &instance.room));
    assert!(assertions::area_is_conserved(&solution, &instance));
}

#[test]
fn l_room_respects_gaps() {
    let instance = l_instance();
    let mut placer = RowPlacer::new(instance.clone(), DEFAULT_CANDIDATE_BUDGET);
    let solution = placer.solve();

    assert!(solution.coverage > 0.5);
    assert!(solution.coverage <= 1.0 + 1e-9);
    assert!(assertions::no_overlapping_planks(
        &placer.layout,
        instance.dims.gap
    ));
    assert!(assertions::all_planks_inside_room(&solution, &instance.room));
    assert!(assertions::area_is_conserved(&solution, &instance));
}

#[test]
fn solving_twice_is_deterministic() {
    let instance = l_instance();
    let a = RowPlacer::new(instance.clone(), DEFAULT_CANDIDATE_BUDGET).solve();
    let b = RowPlacer::new(instance, DEFAULT_CANDIDATE_BUDGET).solve();

    assert_eq!(a.planks.len(), b.planks.len());
    assert_eq!(a.coverage.to_bits(), b.coverage.to_bits());
    assert_eq!(a.stock_consumed, b.stock_consumed);
    for (pa, pb) in a.planks.iter().zip(b.planks.iter()) {
        assert_eq!(pa.id, pb.id);
        assert_eq!(pa.center, pb.center);
        assert_eq!(pa.length, pb.length);
        assert_eq!(pa.kind(), pb.kind());
    }
}

#[test]
fn candidate_budget_caps_the_run() {
    let instance = l_instance();
    let solution = RowPlacer::new(instance, 10).solve();
    //the run stops early instead of looping
    assert!(solution.coverage < 1.0);
}

fn spare(length: f64) -> plankfit::entities::Plank {
    plankfit::entities::Plank {
        id: 0,
        center: Point(0.0, 0.0),
        rotation: 0.0,
        length,
        width: 240.0,
        shape: None,
        cut_lines: vec![],
        is_spare: true,
        original_length: 1200.0,
    }
}

#[test]
fn ledger_is_sorted_longest_first() {
    let mut ledger = SpareLedger::new();
    ledger.add(spare(300.0));
    ledger.add(spare(800.0));
    ledger.add(spare(500.0));

    let lengths: Vec<f64> = ledger.iter().map(|s| s.length).collect();
    assert_eq!(lengths, vec![800.0, 500.0, 300.0]);
    assert_eq!(ledger.remove(0).length, 800.0);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn most_common_length_needs_a_repeat() {
    let mut ledger = SpareLedger::new();
    ledger.add(spare(800.0));
    ledger.add(spare(300.0));
    assert_eq!(ledger.most_common_length(), None);

    ledger.add(spare(800.0));
    assert_eq!(ledger.most_common_length(), Some(800.0));
}

#[test]
fn row_offset_prefers_common_spare_length() {
    let mut ledger = SpareLedger::new();

    //no spares: modular stagger
    assert_eq!(ledger.optimal_row_offset(0, 300.0, 1205.0), 0.0);
    assert_eq!(ledger.optimal_row_offset(1, 300.0, 1205.0), 300.0);
    assert_eq!(ledger.optimal_row_offset(2, 300.0, 1205.0), 600.0);

    //a repeated spare length overrides the stagger for rows further out
    ledger.add(spare(800.0));
    ledger.add(spare(800.0));
    assert_eq!(ledger.optimal_row_offset(1, 300.0, 1205.0), 300.0);
    assert_eq!(ledger.optimal_row_offset(2, 300.0, 1205.0), 800.0);
}
