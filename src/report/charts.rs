// Chart definitions
// The two fixed report charts: titles, axis labels, series and colors

use plotters::style::RGBColor;
use std::ops::Range;

use crate::stats::{TrackingStatsRow, TrackingStatsTable};

pub const MEAN_ERROR_CHART_FILE: &str = "mean_tracking_error_graph.png";
pub const POINT_DYNAMICS_CHART_FILE: &str = "tracking_point_dynamics_graph.png";

pub const ROYAL_BLUE: RGBColor = RGBColor(65, 105, 225);
pub const SEA_GREEN: RGBColor = RGBColor(46, 139, 87);
pub const CRIMSON: RGBColor = RGBColor(220, 20, 60);
pub const DARK_ORANGE: RGBColor = RGBColor(255, 140, 0);

/// Fraction of the data span added on each side of an axis
const AXIS_MARGIN: f64 = 0.05;

/// Spans narrower than this fraction of the values' magnitude are drawn as a constant
const MIN_RELATIVE_SPAN: f64 = 1e-9;

/// A single plotted line
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    /// Legend entry
    pub label: &'static str,
    pub color: RGBColor,
    pub stroke_width: u32,
    /// Draw a filled circle at every data point
    pub markers: bool,
    /// (frame, value) pairs, in table order
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw one chart image
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub file_name: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Decimal places for y tick labels
    pub y_precision: usize,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    pub fn x_range(&self) -> Range<f64> {
        padded_range(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)))
    }

    pub fn y_range(&self) -> Range<f64> {
        padded_range(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)))
    }
}

/// Mean tracking error against frame index, with point markers
pub fn mean_error_chart(table: &TrackingStatsTable) -> ChartSpec {
    let points = table
        .rows()
        .iter()
        .map(|row| (row.frame as f64, row.mean_error))
        .collect();

    ChartSpec {
        file_name: MEAN_ERROR_CHART_FILE,
        title: "Mean Optical Flow Tracking Error per Frame",
        x_label: "Frame Index",
        y_label: "Mean Error (pixels)",
        y_precision: 2,
        series: vec![SeriesSpec {
            label: "Mean Error",
            color: ROYAL_BLUE,
            stroke_width: 1,
            markers: true,
            points,
        }],
    }
}

/// Tracked, lost and added point counts against frame index
pub fn point_dynamics_chart(table: &TrackingStatsTable) -> ChartSpec {
    ChartSpec {
        file_name: POINT_DYNAMICS_CHART_FILE,
        title: "Feature Point Tracking Dynamics per Frame",
        x_label: "Frame Index",
        y_label: "Number of Points",
        y_precision: 0,
        series: vec![
            count_series(table, "Tracked", SEA_GREEN, |row| row.tracked),
            count_series(table, "Lost", CRIMSON, |row| row.lost),
            count_series(table, "Added", DARK_ORANGE, |row| row.added),
        ],
    }
}

fn count_series(
    table: &TrackingStatsTable,
    label: &'static str,
    color: RGBColor,
    column: fn(&TrackingStatsRow) -> u64,
) -> SeriesSpec {
    SeriesSpec {
        label,
        color,
        stroke_width: 2,
        markers: false,
        points: table
            .rows()
            .iter()
            .map(|row| (row.frame as f64, column(row) as f64))
            .collect(),
    }
}

/// Autoscaled axis range with a margin on both sides.
/// Non-finite values are ignored; no values gives 0..1.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let bounds = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    match bounds {
        None => 0.0..1.0,
        Some((lo, hi)) if hi - lo <= lo.abs().max(hi.abs()) * MIN_RELATIVE_SPAN => {
            let center = lo + (hi - lo) / 2.0;
            let half = if center == 0.0 { 0.5 } else { center.abs() * AXIS_MARGIN };
            (center - half)..(center + half)
        }
        Some((lo, hi)) => {
            let margin = (hi - lo) * AXIS_MARGIN;
            (lo - margin)..(hi + margin)
        }
    }
}
