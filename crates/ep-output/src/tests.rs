//! Tests for ep-output.

#[cfg(test)]
mod csv_tests {
    use ep_disease::StatusCounts;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{HourlyRow, RoadRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("hourly_counts.csv").exists());
        assert!(dir.path().join("roads.csv").exists());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tmp();
        let nested = dir.path().join("run").join("one");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("roads.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("hourly_counts.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["day", "hour", "S", "E", "I", "R", "D"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("roads.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["x1", "y1", "x2", "y2", "weight"]);
    }

    #[test]
    fn hourly_row_written_in_state_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let counts: StatusCounts = "SSSSEEIRRD"
            .chars()
            .filter_map(ep_disease::EpiState::from_symbol)
            .collect();
        w.write_hour(&HourlyRow::new(2, 5, &counts)).unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("hourly_counts.csv"));
        assert_eq!(rows.len(), 1);
        let fields: Vec<&str> = rows[0].iter().collect();
        assert_eq!(fields, ["2", "5", "4", "2", "1", "2", "1"]);
    }

    #[test]
    fn roads_written_one_per_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let roads = [
            RoadRow { x1: 0, y1: 0, x2: 3, y2: 0, weight: 3.0 },
            RoadRow { x1: 0, y1: 0, x2: 0, y2: 4, weight: 4.0 },
        ];
        w.write_roads(&roads).unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("roads.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "3");
        assert_eq!(&rows[1][3], "4");
        assert_eq!(rows[1][4].parse::<f64>().unwrap(), 4.0);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_roads_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_roads(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use ep_disease::StatusCounts;
    use ep_sim::{RunSummary, SimObserver};
    use ep_spatial::{RoadNetwork, build_road_network};
    use ep_core::TileCoord;

    use crate::{HourlyRow, OutputError, OutputResult, OutputWriter, RoadRow, SimOutputObserver};

    /// Keeps rows in memory; optionally fails every hourly write.
    #[derive(Default)]
    struct MemWriter {
        roads:    Vec<RoadRow>,
        hours:    Vec<HourlyRow>,
        fail:     bool,
        finished: u32,
    }

    impl OutputWriter for MemWriter {
        fn write_roads(&mut self, rows: &[RoadRow]) -> OutputResult<()> {
            self.roads.extend_from_slice(rows);
            Ok(())
        }

        fn write_hour(&mut self, row: &HourlyRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(io::Error::other(format!("hour {}", row.hour))));
            }
            self.hours.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    fn summary() -> RunSummary {
        RunSummary { day: 1, hour: 2, hours: 2, epidemic_over: true, final_counts: StatusCounts::new() }
    }

    #[test]
    fn roads_come_from_the_network() {
        let tiles = [TileCoord::new(0, 0), TileCoord::new(3, 0), TileCoord::new(0, 4)];
        let network = build_road_network(tiles, 3.0, false);
        let mut obs = SimOutputObserver::new(MemWriter::default());
        obs.on_start(&network, &StatusCounts::new());

        let writer = obs.into_writer();
        assert_eq!(writer.roads.len(), network.edge_count());
        assert_eq!(writer.roads.len(), 2);
    }

    #[test]
    fn hours_and_finish_are_forwarded() {
        let mut obs = SimOutputObserver::new(MemWriter::default());
        obs.on_start(&RoadNetwork::empty(), &StatusCounts::new());
        obs.on_hour(1, 1, &StatusCounts::new());
        obs.on_hour(1, 2, &StatusCounts::new());
        obs.on_sim_end(&summary());

        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 2);
        let writer = obs.into_writer();
        assert_eq!(writer.hours.iter().map(|r| r.hour).collect::<Vec<_>>(), [1, 2]);
        assert_eq!(writer.finished, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = SimOutputObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        obs.on_hour(1, 1, &StatusCounts::new());
        obs.on_hour(1, 2, &StatusCounts::new());

        let err = obs.take_error().expect("stored error");
        assert_eq!(err.to_string(), "I/O error: hour 1");
        assert!(obs.take_error().is_none());
    }
}

#[cfg(test)]
mod integration {
    use ep_agent::Town;
    use ep_core::{BuildingKind, SimParams, TileCoord};
    use ep_sim::SimBuilder;

    use crate::{CsvWriter, SimOutputObserver};

    #[test]
    fn integration_csv() {
        let params = SimParams {
            display_size:     400,
            num_houses:       3,
            num_offices:      2,
            people_per_house: 2,
            infection_rate:   0.0,
            recovery_rate:    0.0,
            mortality_rate:   0.0,
            ..SimParams::default()
        };
        let mut town = Town::new(params.building_size);
        for (x, y) in [(0, 0), (3, 0), (6, 0)] {
            town.add_building(BuildingKind::House, TileCoord::new(x, y)).unwrap();
        }
        for (x, y) in [(0, 4), (6, 4)] {
            town.add_building(BuildingKind::Office, TileCoord::new(x, y)).unwrap();
        }
        let mut sim = SimBuilder::new(params, town).build().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let summary = sim.run(5, &mut obs);
        assert!(obs.take_error().is_none());
        assert_eq!(summary.hours, 5);

        let mut hours = csv::Reader::from_path(dir.path().join("hourly_counts.csv")).unwrap();
        let rows: Vec<_> = hours.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[4][1], "5");
        let total: usize = (2..7).map(|i| rows[4][i].parse::<usize>().unwrap()).sum();
        assert_eq!(total, 6);

        let mut roads = csv::Reader::from_path(dir.path().join("roads.csv")).unwrap();
        assert_eq!(roads.records().count(), sim.network.edge_count());
    }
}
