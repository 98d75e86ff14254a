// Tracking statistics table
// Loads the per-frame CSV written by the optical-flow tracker

use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::summary::StatsSummary;

/// Column names the tracker writes in the CSV header
pub const REQUIRED_COLUMNS: [&str; 5] = ["Frame", "MeanError", "Tracked", "Lost", "Added"];

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Tracking statistics file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse tracking statistics from {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type StatsResult<T> = Result<T, StatsError>;

/// One CSV row: the tracker's statistics for a single frame
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackingStatsRow {
    #[serde(rename = "Frame")]
    pub frame: i64,

    /// Mean optical-flow error in pixels
    #[serde(rename = "MeanError")]
    pub mean_error: f64,

    #[serde(rename = "Tracked")]
    pub tracked: u64,

    #[serde(rename = "Lost")]
    pub lost: u64,

    #[serde(rename = "Added")]
    pub added: u64,
}

/// In-memory statistics table, one row per frame in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingStatsTable {
    rows: Vec<TrackingStatsRow>,
}

impl TrackingStatsTable {
    pub fn new(rows: Vec<TrackingStatsRow>) -> Self {
        TrackingStatsTable { rows }
    }

    /// Parse a table from any reader (header row required)
    pub fn from_reader<R: Read>(reader: R) -> StatsResult<Self> {
        parse_table(reader, "<reader>")
    }

    pub fn rows(&self) -> &[TrackingStatsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn frames(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.frame).collect()
    }

    pub fn mean_errors(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.mean_error).collect()
    }

    pub fn tracked(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.tracked).collect()
    }

    pub fn lost(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.lost).collect()
    }

    pub fn added(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.added).collect()
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary::from_rows(&self.rows)
    }
}

/// Load the tracking statistics table from a CSV file
pub fn load_table(path: &Path) -> StatsResult<TrackingStatsTable> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StatsError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => StatsError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let table = parse_table(BufReader::new(file), &path.display().to_string())?;
    log::info!("Loaded {} frames from {}", table.len(), path.display());

    Ok(table)
}

fn parse_table<R: Read>(reader: R, source_name: &str) -> StatsResult<TrackingStatsTable> {
    let parse_error = |message: String| StatsError::Parse {
        source_name: source_name.to_string(),
        message,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| parse_error(e.to_string()))?;
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();

    if !missing.is_empty() {
        return Err(parse_error(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let rows = rdr
        .deserialize::<TrackingStatsRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| parse_error(e.to_string()))?;

    Ok(TrackingStatsTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TWO_FRAMES: &str = "Frame,MeanError,Tracked,Lost,Added\n0,1.2,100,0,5\n1,1.5,103,2,0\n";

    #[test]
    fn test_parse_two_frames() {
        let table = TrackingStatsTable::from_reader(TWO_FRAMES.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.frames(), vec![0, 1]);
        assert_eq!(table.mean_errors(), vec![1.2, 1.5]);
        assert_eq!(table.tracked(), vec![100, 103]);
        assert_eq!(table.lost(), vec![0, 2]);
        assert_eq!(table.added(), vec![5, 0]);
    }

    #[test]
    fn test_column_order_not_significant() {
        let csv = "Added,Lost,Tracked,MeanError,Frame\n5,0,100,1.2,0\n";
        let table = TrackingStatsTable::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(
            table.rows()[0],
            TrackingStatsRow {
                frame: 0,
                mean_error: 1.2,
                tracked: 100,
                lost: 0,
                added: 5,
            }
        );
    }

    #[test]
    fn test_spaced_header_and_extra_columns() {
        let csv = "Frame, MeanError, Tracked, Lost, Added, Note\n3, 0.75, 42, 1, 0, ok\n";
        let table = TrackingStatsTable::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.frames(), vec![3]);
        assert_eq!(table.mean_errors(), vec![0.75]);
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let csv = "Frame,MeanError,Tracked,Lost,Added\n";
        let table = TrackingStatsTable::from_reader(csv.as_bytes()).unwrap();

        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_column_is_parse_error() {
        let csv = "Frame,MeanError,Tracked,Lost\n0,1.2,100,0\n";
        let err = TrackingStatsTable::from_reader(csv.as_bytes()).unwrap_err();

        match err {
            StatsError::Parse { message, .. } => assert!(message.contains("Added")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let err = TrackingStatsTable::from_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, StatsError::Parse { .. }));
    }

    #[test]
    fn test_malformed_value_is_parse_error() {
        let csv = "Frame,MeanError,Tracked,Lost,Added\n0,abc,100,0,5\n";
        let err = TrackingStatsTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, StatsError::Parse { .. }));
    }

    #[test]
    fn test_negative_count_is_parse_error() {
        let csv = "Frame,MeanError,Tracked,Lost,Added\n0,1.0,-4,0,5\n";
        let err = TrackingStatsTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, StatsError::Parse { .. }));
    }

    #[test]
    fn test_load_table_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tracking_stats.csv");
        fs::write(&path, TWO_FRAMES).unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does_not_exist.csv");

        let err = load_table(&path).unwrap_err();
        match err {
            StatsError::FileNotFound { path: missing } => assert_eq!(missing, path),
            other => panic!("expected file-not-found, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.csv");
        fs::write(&path, "Frame,Tracked\n0,1\n").unwrap();

        let err = load_table(&path).unwrap_err();
        assert!(err.to_string().contains("broken.csv"));
    }
}
