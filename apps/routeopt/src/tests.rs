//! Runner tests: flag merging and end-to-end runs on temp files.

#[cfg(test)]
mod config_tests {
    use std::path::PathBuf;

    use ro_core::{LogLevel, OutputFormat, RunConfig};

    use crate::config::Args;

    #[test]
    fn defaults_without_flags() {
        assert_eq!(Args::default().resolve().unwrap(), RunConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("run.json");
        std::fs::write(&path, r#"{ "input": "a.txt", "format": "csv", "log_level": "warn" }"#).unwrap();

        let args = Args {
            config: Some(path),
            output: Some(PathBuf::from("out")),
            verbose: 1,
            ..Args::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.input, PathBuf::from("a.txt"));
        assert_eq!(config.output, PathBuf::from("out"));
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.parallel);
    }

    #[test]
    fn same_input_and_output_rejected() {
        let args = Args {
            input: Some(PathBuf::from("x.txt")),
            output: Some(PathBuf::from("x.txt")),
            ..Args::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn unreadable_config_is_an_error() {
        let args = Args { config: Some(PathBuf::from("/nonexistent/run.json")), ..Args::default() };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("cannot read config"), "{err}");
    }

    #[test]
    fn cli_parses_format_and_verbosity() {
        use clap::Parser;

        let args = Args::try_parse_from(["routeopt", "--format", "csv", "-vv", "--parallel"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Csv));
        assert_eq!(args.verbose, 2);
        assert!(args.parallel);
        assert!(Args::try_parse_from(["routeopt", "--format", "xml"]).is_err());
    }
}

#[cfg(test)]
mod run_tests {
    use ro_core::{OutputFormat, RequestId, RunConfig};
    use ro_input::parse_scenario;
    use ro_routing::RoutePlanner;

    use crate::run::{Summary, collect_answers, run};

    const SCENARIO: &str = "\
[CITIES]
1: A
2: B
3: C
4: D
[ROADS]
1 - 2: 10, 5, 3
2 - 3: 10, 5, 3
1 - 3: 30, 3, 1
[REQUESTS]
A -> C | (В, Д, С)
A -> C | (Д)
A -> D | (Д, В, С)
A -> Atlantis | (Д, В, С)
";

    fn config(dir: &tempfile::TempDir, format: OutputFormat, output: &str) -> RunConfig {
        let input = dir.path().join("input.txt");
        std::fs::write(&input, SCENARIO).unwrap();
        RunConfig { input, output: dir.path().join(output), format, ..RunConfig::default() }
    }

    #[test]
    fn answers_keep_file_order() {
        let scenario = parse_scenario(SCENARIO).unwrap();
        let results = RoutePlanner::new().plan_all(&scenario.graph, &scenario.requests);
        let ids: Vec<_> = collect_answers(&scenario, results).iter().map(|a| a.id()).collect();
        assert_eq!(ids, [RequestId(0), RequestId(1), RequestId(2), RequestId(3)]);
    }

    #[test]
    fn text_run_writes_every_request() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = config(&dir, OutputFormat::Text, "output.txt");

        let summary = run(&config).unwrap();
        assert_eq!(summary, Summary { answered: 2, not_found: 1, rejected: 2, internal: 0 });

        let text = std::fs::read_to_string(&config.output).unwrap();
        let blocks: Vec<_> = text.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 4);
        assert!(blocks[0].contains("КОМПРОМИСС: A -> C | Д=30, В=3, С=1"));
        assert!(blocks[1].starts_with("ОШИБКА: A -> C | (Д) | line 12"));
        assert!(blocks[2].starts_with("ДЛИНА: Маршрут не найден"));
        assert_eq!(blocks[3], "ОШИБКА: A -> Atlantis | (Д,В,С) | unknown city \"Atlantis\"");
    }

    #[test]
    fn csv_run_writes_both_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = config(&dir, OutputFormat::Csv, "out");

        run(&config).unwrap();
        let routes = std::fs::read_to_string(config.output.join("routes.csv")).unwrap();
        let errors = std::fs::read_to_string(config.output.join("errors.csv")).unwrap();
        assert_eq!(routes.lines().count(), 1 + 2 * 4);
        assert_eq!(errors.lines().count(), 1 + 2);
    }

    #[test]
    fn missing_scenario_fails_the_run() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = RunConfig {
            input: dir.path().join("absent.txt"),
            output: dir.path().join("output.txt"),
            ..RunConfig::default()
        };
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("cannot load scenario"), "{err}");
    }
}
