//! Integration tests for ro-output.

#[cfg(test)]
mod fixtures {
    use ro_core::{Criterion, Priorities, Request, RequestId};
    use ro_network::{City, Road, RoadGraph};
    use ro_routing::{RoutePlanner, RouteSet};

    pub fn triangle() -> RoadGraph {
        let mut g = RoadGraph::new();
        for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
            g.add_city(City::new(id, name)).unwrap();
        }
        g.add_road(Road::new("A", "B", 10, 5, 3)).unwrap();
        g.add_road(Road::new("B", "C", 10, 5, 3)).unwrap();
        g.add_road(Road::new("A", "C", 30, 3, 1)).unwrap();
        g
    }

    pub fn request(id: u32, from: &str, to: &str, order: [Criterion; 3]) -> Request {
        Request::new(RequestId(id), from, to, Priorities::new(order).unwrap())
    }

    pub fn plan(request: &Request) -> RouteSet {
        RoutePlanner::new().plan(&triangle(), request).unwrap()
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use ro_core::{Criterion::*, ErrorCategory, RequestId};
    use ro_routing::{Route, RouteSet};

    use super::fixtures::{plan, request};
    use crate::text::render_route;
    use crate::writer::OutputWriter;
    use crate::{FailureRow, TextWriter};

    fn render(f: impl FnOnce(&mut TextWriter<Vec<u8>>)) -> String {
        let mut w = TextWriter::new(Vec::new());
        f(&mut w);
        w.finish().unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn four_labelled_lines_and_a_blank() {
        let req = request(0, "A", "C", [Time, Length, Cost]);
        let routes = plan(&req);
        let out = render(|w| w.write_routes(&req, &routes).unwrap());
        assert_eq!(
            out,
            "ДЛИНА: A -> B -> C | Д=20, В=10, С=6\n\
             ВРЕМЯ: A -> C | Д=30, В=3, С=1\n\
             СТОИМОСТЬ: A -> C | Д=30, В=3, С=1\n\
             КОМПРОМИСС: A -> C | Д=30, В=3, С=1\n\
             \n"
        );
    }

    #[test]
    fn not_found_marker() {
        assert_eq!(render_route(&Route::not_found()), "Маршрут не найден");
        let req = request(0, "A", "B", [Length, Time, Cost]);
        let out = render(|w| w.write_routes(&req, &RouteSet::default()).unwrap());
        assert!(out.starts_with("ДЛИНА: Маршрут не найден\n"));
        assert_eq!(out.matches("Маршрут не найден").count(), 4);
    }

    #[test]
    fn same_city_request_renders_not_found() {
        let req = request(0, "A", "A", [Length, Time, Cost]);
        let out = render(|w| w.write_routes(&req, &plan(&req)).unwrap());
        assert_eq!(
            out,
            "ДЛИНА: Маршрут не найден\n\
             ВРЕМЯ: Маршрут не найден\n\
             СТОИМОСТЬ: Маршрут не найден\n\
             КОМПРОМИСС: Маршрут не найден\n\
             \n"
        );
    }

    #[test]
    fn failure_line() {
        let row = FailureRow::new(RequestId(2), "A -> Atlantis | (Д,В,С)", ErrorCategory::Input, "unknown city \"Atlantis\"");
        let out = render(|w| w.write_failure(&row).unwrap());
        assert_eq!(out, "ОШИБКА: A -> Atlantis | (Д,В,С) | unknown city \"Atlantis\"\n\n");
    }

    #[test]
    fn finish_is_idempotent() {
        let mut w = TextWriter::new(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
        assert!(w.into_inner().is_empty());
    }

    #[test]
    fn create_writes_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("output.txt");
        let req = request(0, "A", "C", [Length, Time, Cost]);
        let mut w = TextWriter::create(&path).unwrap();
        w.write_routes(&req, &plan(&req)).unwrap();
        w.finish().unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("КОМПРОМИСС: A -> B -> C | Д=20, В=10, С=6"));
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use ro_core::{Criterion::*, ErrorCategory, RequestId};

    use super::fixtures::{plan, request};
    use crate::csv::{ERRORS_FILE, ROUTES_FILE};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, FailureRow, RouteRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn rows(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(ROUTES_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, RouteRow::HEADER);

        let mut rdr = csv::Reader::from_path(dir.path().join(ERRORS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, FailureRow::HEADER);
    }

    #[test]
    fn four_rows_per_request() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let req = request(5, "A", "C", [Time, Length, Cost]);
        w.write_routes(&req, &plan(&req)).unwrap();
        w.finish().unwrap();

        let rows = rows(&dir, ROUTES_FILE);
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "5");          // request_id
        assert_eq!(&rows[0][3], "length");     // kind
        assert_eq!(&rows[0][4], "true");       // found
        assert_eq!(&rows[0][5], "A->B->C");    // cities
        assert_eq!(&rows[0][6], "20");         // length
        assert_eq!(&rows[3][3], "compromise");
        assert_eq!(&rows[3][5], "A->C");
        assert_eq!(&rows[3][7], "3");          // time
    }

    #[test]
    fn failures_go_to_errors_file() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = FailureRow::new(RequestId(1), "A -> B | (Д,Д,С)", ErrorCategory::Input, "duplicate");
        w.write_failure(&row).unwrap();
        w.finish().unwrap();

        assert!(rows(&dir, ROUTES_FILE).is_empty());
        let errs = rows(&dir, ERRORS_FILE);
        assert_eq!(errs.len(), 1);
        assert_eq!(&errs[0][1], "A -> B | (Д,Д,С)");
        assert_eq!(&errs[0][2], "input");
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = tmp();
        let nested = dir.path().join("out").join("run1");
        let mut w = CsvWriter::new(&nested).unwrap();
        w.finish().unwrap();
        assert!(nested.join(ROUTES_FILE).exists());
    }
}

// ── End to end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline {
    use ro_routing::RoutePlanner;

    use crate::writer::OutputWriter;
    use crate::{FailureRow, TextWriter};

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
A -> D | (Д, В, С)
A -> C | (Д, Д)
";

    #[test]
    fn scenario_to_text() {
        let scenario = ro_input::parse_scenario(SCENARIO).unwrap();
        let planner = RoutePlanner::new();
        let mut w = TextWriter::new(Vec::new());

        for (request, result) in scenario
            .requests
            .iter()
            .zip(planner.plan_all(&scenario.graph, &scenario.requests))
        {
            w.write_routes(request, &result.unwrap()).unwrap();
        }
        for rejected in &scenario.rejected {
            let row = FailureRow::new(rejected.id, &rejected.text, rejected.reason.category(), &rejected.reason);
            w.write_failure(&row).unwrap();
        }
        w.finish().unwrap();

        let out = String::from_utf8(w.into_inner()).unwrap();
        let blocks: Vec<_> = out.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].ends_with("КОМПРОМИСС: A -> C | Д=30, В=3, С=1"));
        assert_eq!(blocks[1].matches("Маршрут не найден").count(), 4);
        assert!(blocks[2].starts_with("ОШИБКА: A -> C | (Д, Д) | line 13: invalid priorities"));
    }
}
