#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use plankfit::io::export::export_solution;
    use plankfit::io::import::import_instance;
    use plankfit::io::svg::solution_to_svg;
    use plankfit::placement::RowPlacer;
    use plankfit::util::assertions;
    use rbp::config::RBPConfig;
    use rbp::io;

    #[test_case("../assets/rect_room.json"; "rect_room")]
    #[test_case("../assets/l_room.json"; "l_room")]
    #[test_case("../assets/notch_room.json"; "notch_room")]
    #[test_case("../assets/scaled_room.json"; "scaled_room")]
    fn test_instance(instance_path: &str) {
        let config = RBPConfig::default();
        let ext_instance = io::read_json_instance(Path::new(instance_path)).unwrap();
        let instance = import_instance(&ext_instance).unwrap();

        let mut placer = RowPlacer::new(instance.clone(), config.candidate_budget);
        let solution = placer.solve();

        assert!(solution.coverage > 0.5);
        assert!(assertions::no_overlapping_planks(
            &placer.layout,
            instance.dims.gap
        ));
        assert!(assertions::all_planks_inside_room(&solution, &instance.room));
        assert!(assertions::area_is_conserved(&solution, &instance));

        let ext_solution = export_solution(&solution);
        assert_eq!(ext_solution.planks.len(), solution.planks.len());
        assert_eq!(ext_solution.spares.len(), solution.spares.len());

        let svg = solution_to_svg(&solution, &instance, config.svg_draw_options);
        assert!(svg.to_string().contains("svg"));
    }
}
