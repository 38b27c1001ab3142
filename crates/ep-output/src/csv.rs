//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `hourly_counts.csv`
//! - `roads.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{HourlyRow, OutputResult, RoadRow};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    hours:    Writer<File>,
    roads:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut hours = Writer::from_path(dir.join("hourly_counts.csv"))?;
        hours.write_record(["day", "hour", "S", "E", "I", "R", "D"])?;

        let mut roads = Writer::from_path(dir.join("roads.csv"))?;
        roads.write_record(["x1", "y1", "x2", "y2", "weight"])?;

        Ok(Self { hours, roads, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_roads(&mut self, rows: &[RoadRow]) -> OutputResult<()> {
        for row in rows {
            self.roads.write_record(&[
                row.x1.to_string(),
                row.y1.to_string(),
                row.x2.to_string(),
                row.y2.to_string(),
                row.weight.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_hour(&mut self, row: &HourlyRow) -> OutputResult<()> {
        self.hours.write_record(&[
            row.day.to_string(),
            row.hour.to_string(),
            row.s.to_string(),
            row.e.to_string(),
            row.i.to_string(),
            row.r.to_string(),
            row.d.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.hours.flush()?;
        self.roads.flush()?;
        Ok(())
    }
}
