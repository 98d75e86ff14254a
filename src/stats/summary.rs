// Per-run summary of the tracking statistics

use super::table::TrackingStatsRow;

/// Aggregate figures logged after the table is loaded
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub frame_count: usize,

    /// Average of MeanError across all frames with a finite value
    pub average_error: Option<f64>,

    /// Largest finite MeanError and the frame it occurred on
    pub peak_error: Option<(i64, f64)>,

    pub total_lost: u64,
    pub total_added: u64,

    /// Tracked count on the last row
    pub final_tracked: Option<u64>,
}

impl StatsSummary {
    pub fn from_rows(rows: &[TrackingStatsRow]) -> Self {
        let finite: Vec<&TrackingStatsRow> =
            rows.iter().filter(|row| row.mean_error.is_finite()).collect();

        let average_error = if finite.is_empty() {
            None
        } else {
            let sum: f64 = finite.iter().map(|row| row.mean_error).sum();
            Some(sum / finite.len() as f64)
        };

        let peak_error = finite
            .iter()
            .max_by(|a, b| a.mean_error.total_cmp(&b.mean_error))
            .map(|row| (row.frame, row.mean_error));

        StatsSummary {
            frame_count: rows.len(),
            average_error,
            peak_error,
            total_lost: rows.iter().map(|row| row.lost).fold(0, u64::saturating_add),
            total_added: rows.iter().map(|row| row.added).fold(0, u64::saturating_add),
            final_tracked: rows.last().map(|row| row.tracked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(frame: i64, mean_error: f64, tracked: u64, lost: u64, added: u64) -> TrackingStatsRow {
        TrackingStatsRow {
            frame,
            mean_error,
            tracked,
            lost,
            added,
        }
    }

    #[test]
    fn test_summary_of_two_frames() {
        let rows = vec![row(0, 1.2, 100, 0, 5), row(1, 1.5, 103, 2, 0)];
        let summary = StatsSummary::from_rows(&rows);

        assert_eq!(summary.frame_count, 2);
        assert!((summary.average_error.unwrap() - 1.35).abs() < 1e-9);
        assert_eq!(summary.peak_error, Some((1, 1.5)));
        assert_eq!(summary.total_lost, 2);
        assert_eq!(summary.total_added, 5);
        assert_eq!(summary.final_tracked, Some(103));
    }

    #[test]
    fn test_summary_of_empty_table() {
        let summary = StatsSummary::from_rows(&[]);

        assert_eq!(summary.frame_count, 0);
        assert!(summary.average_error.is_none());
        assert!(summary.peak_error.is_none());
        assert!(summary.final_tracked.is_none());
    }

    #[test]
    fn test_summary_totals_saturate() {
        let rows = vec![row(0, 1.0, 1, u64::MAX, 7), row(1, 1.0, 1, 5, u64::MAX)];
        let summary = StatsSummary::from_rows(&rows);

        assert_eq!(summary.total_lost, u64::MAX);
        assert_eq!(summary.total_added, u64::MAX);
    }

    #[test]
    fn test_summary_skips_nan_errors() {
        let rows = vec![row(0, f64::NAN, 10, 0, 0), row(1, 2.0, 9, 1, 0)];
        let summary = StatsSummary::from_rows(&rows);

        assert_eq!(summary.average_error, Some(2.0));
        assert_eq!(summary.peak_error, Some((1, 2.0)));
        assert_eq!(summary.frame_count, 2);
    }
}
