#[cfg(test)]
mod tests {
    use std::path::Path;

    use circle_tray::io::ext_repr::ExtSolution;
    use circle_tray::io::svg::layout_to_svg;
    use circle_tray::layout::BoundsPolicy;
    use circle_tray::util::assertions;
    use clap::Parser;
    use float_cmp::approx_eq;
    use test_case::test_case;
    use tray_check::checker::{CheckSolution, TrayChecker};
    use tray_check::config::TrayCheckConfig;
    use tray_check::io;
    use tray_check::io::cli::Cli;
    use tray_check::io::output::CheckOutput;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn run(instance_path: &str, config: TrayCheckConfig) -> (CheckSolution, usize) {
        init_logger();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = io::import_instance(&ext_instance, &config).unwrap();
        let n_circles = instance.n_discs();
        (TrayChecker::new(instance, config).check(), n_circles)
    }

    #[test_case("assets/two_large.json", false, 2; "two_large")]
    #[test_case("assets/four_square.json", true, 4; "four_square")]
    #[test_case("assets/empty.json", true, 0; "empty")]
    #[test_case("assets/two_sides.json", true, 5; "two_sides")]
    #[test_case("assets/mixed_records.json", true, 7; "mixed_records")]
    #[test_case("assets/structured.json", true, 5; "structured")]
    fn test_instance(instance_path: &str, feasible: bool, n_circles: usize) {
        let (solution, n) = run(instance_path, TrayCheckConfig::default());

        assert_eq!(solution.is_feasible(), feasible);
        assert_eq!(n, n_circles);
        assert_eq!(solution.layout.drawables.len(), n_circles);
        assert!(assertions::layout_labels_are_unique(&solution.layout));

        //every label from 1 to n is drawn exactly once
        let mut labels = solution
            .layout
            .drawables
            .iter()
            .map(|d| d.label)
            .collect::<Vec<_>>();
        labels.sort();
        assert_eq!(labels, (1..=n_circles).collect::<Vec<_>>());
    }

    #[test]
    fn test_scale_factor_is_applied_uniformly() {
        let (solution, _) = run("assets/four_square.json", TrayCheckConfig::default());
        let outline = solution.layout.outline;
        assert!(approx_eq!(f32, outline.width(), 200.0));
        assert!(approx_eq!(f32, outline.height(), 200.0));
        assert!(approx_eq!(f32, solution.layout.spacing, 2.0));
        assert!(
            solution
                .layout
                .drawables
                .iter()
                .all(|d| approx_eq!(f32, d.radius, 25.0))
        );

        // without scaling the same instance is checked in its own units
        let config = TrayCheckConfig {
            scale_factor: 1.0,
            ..TrayCheckConfig::default()
        };
        let (unscaled, _) = run("assets/four_square.json", config);
        assert!(approx_eq!(f32, unscaled.layout.outline.width(), 50.0));
        assert_eq!(unscaled.is_feasible(), solution.is_feasible());
    }

    #[test]
    fn test_infeasible_report_names_the_circle() {
        let (solution, _) = run("assets/two_large.json", TrayCheckConfig::default());
        let failure = solution.report.failure.as_ref().unwrap();
        assert_eq!(failure.original_index, 2);
        assert_eq!(failure.group_key, "");
        assert!(approx_eq!(f32, failure.diameter, 50.0));
    }

    #[test]
    fn test_clip_policy_drops_out_of_bounds_circles() {
        // the grid of two 50-wide circles next to each other leaves the 100x100 tray
        let trust = run("assets/two_large.json", TrayCheckConfig::default()).0;
        let config = TrayCheckConfig {
            layout: circle_tray::layout::LayoutConfig {
                bounds_policy: BoundsPolicy::Clip,
                ..Default::default()
            },
            ..TrayCheckConfig::default()
        };
        let clip = run("assets/two_large.json", config).0;

        assert_eq!(trust.layout.out_of_bounds(), clip.layout.out_of_bounds());
        assert_eq!(
            clip.layout.drawables.len() + clip.layout.out_of_bounds().len(),
            trust.layout.drawables.len()
        );
        assert!(
            clip.layout
                .drawables
                .iter()
                .all(|d| !clip.layout.out_of_bounds().contains(&d.label))
        );
    }

    #[test]
    fn test_output_roundtrip_through_json() {
        let config = TrayCheckConfig::default();
        let ext_instance = io::read_instance(Path::new("assets/two_sides.json")).unwrap();
        let (solution, n_circles) = run("assets/two_sides.json", config);

        let output = CheckOutput {
            instance: ext_instance,
            solution: solution.export(n_circles),
            config,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["name"], "two_sides");
        assert_eq!(json["solution"]["feasible"], true);
        assert_eq!(json["solution"]["drawables"].as_array().unwrap().len(), 5);
        assert!(json["solution"].get("failure").is_none());

        let parsed: CheckOutput = serde_json::from_value(json).unwrap();
        let ExtSolution { drawables, .. } = parsed.solution;
        assert_eq!(drawables, output.solution.drawables);
        assert_eq!(parsed.config, config);
    }

    #[test]
    fn test_svg_contains_every_drawable() {
        let config = TrayCheckConfig::default();
        let (solution, n_circles) = run("assets/mixed_records.json", config);
        let svg = layout_to_svg(&solution.layout, config.svg_draw_options, "test").to_string();

        assert_eq!(svg.matches("<circle").count(), n_circles);
        for label in 1..=n_circles {
            assert!(svg.contains(&format!("id=\"disc_{label}\"")));
        }
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TrayCheckConfig =
            serde_json::from_str(r#"{ "scale_factor": 2.0, "layout": { "left_max_rows": 5 } }"#)
                .unwrap();
        assert!(approx_eq!(f32, config.scale_factor, 2.0));
        assert_eq!(config.layout.left_max_rows, 5);
        assert_eq!(config.layout.right_max_rows, 7);
        assert_eq!(config.layout.right_max_cols, 20);
        assert_eq!(config.svg_draw_options, Default::default());
    }

    #[test]
    fn test_config_without_scale_factor() {
        let config: TrayCheckConfig =
            serde_json::from_str(r#"{ "layout": { "bounds_policy": "clip" } }"#).unwrap();
        assert!(approx_eq!(f32, config.scale_factor, 4.0));
        assert_eq!(config.layout.bounds_policy, BoundsPolicy::Clip);

        let empty: TrayCheckConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TrayCheckConfig::default());
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from(["tray-check", "-i", "assets/empty.json", "-s", "solutions"])
            .unwrap();
        assert_eq!(cli.input_file, Path::new("assets/empty.json"));
        assert_eq!(cli.solution_folder, Path::new("solutions"));
        assert!(cli.config_file.is_none());
        assert_eq!(cli.log_level, log::LevelFilter::Info);

        let cli = Cli::try_parse_from([
            "tray-check",
            "--input-file",
            "in.json",
            "--solution-folder",
            "out",
            "--config-file",
            "config.json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.config_file.as_deref(), Some(Path::new("config.json")));
        assert_eq!(cli.log_level, log::LevelFilter::Debug);

        assert!(Cli::try_parse_from(["tray-check", "-s", "out"]).is_err());
    }

    #[test]
    fn test_invalid_scale_factor_is_rejected() {
        let ext_instance = io::read_instance(Path::new("assets/four_square.json")).unwrap();
        let config = TrayCheckConfig {
            scale_factor: 0.0,
            ..TrayCheckConfig::default()
        };
        assert!(io::import_instance(&ext_instance, &config).is_err());
    }
}
