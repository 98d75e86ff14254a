// Report generator
// Load the statistics table, then render and save both charts

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ReportConfig;
use crate::report::{self, ChartSpec, OutputError, RenderError};
use crate::stats::{self, StatsError, StatsSummary, TrackingStatsTable};

/// Errors that abort or fail a report run
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Loading tracking statistics failed: {0}")]
    Stats(#[from] StatsError),

    #[error("Rendering chart failed: {0}")]
    Render(#[from] RenderError),

    #[error("Saving chart failed: {0}")]
    Output(#[from] OutputError),
}

/// A chart image written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOutput {
    pub path: PathBuf,
    pub sha256: String,
    pub bytes: usize,
    /// A viewer was launched for this chart
    pub displayed: bool,
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub summary: StatsSummary,
    pub mean_error_chart: ChartOutput,
    pub point_dynamics_chart: ChartOutput,
}

/// Render the mean tracking error chart
pub fn render_mean_error_chart(
    table: &TrackingStatsTable,
    config: &ReportConfig,
) -> Result<ChartOutput, ReportError> {
    produce_chart(&report::mean_error_chart(table), config)
}

/// Render the tracked/lost/added point dynamics chart
pub fn render_point_dynamics_chart(
    table: &TrackingStatsTable,
    config: &ReportConfig,
) -> Result<ChartOutput, ReportError> {
    produce_chart(&report::point_dynamics_chart(table), config)
}

fn produce_chart(spec: &ChartSpec, config: &ReportConfig) -> Result<ChartOutput, ReportError> {
    let png = report::render_png(spec, config.image_size())?;
    let (path, sha256) = report::write_chart(&config.output_dir, spec.file_name, &png)?;

    log::info!(
        "Saved {} ({} bytes, sha256 {})",
        path.display(),
        png.len(),
        sha256
    );

    let displayed = report::display::show(&path, config.display);

    Ok(ChartOutput {
        path,
        sha256,
        bytes: png.len(),
        displayed,
    })
}

/// Load the table and produce both charts.
///
/// A load failure aborts before any image is written. The two charts are
/// independent: if one fails the other is still attempted, and the first
/// failure is returned afterwards.
pub fn generate_report(config: &ReportConfig) -> Result<ReportOutcome, ReportError> {
    let table = stats::load_table(&config.input_path)?;
    let summary = table.summary();
    log_summary(&summary);

    let mean_error = render_mean_error_chart(&table, config);
    if let Err(e) = &mean_error {
        log::warn!("Mean error chart failed: {}", e);
    }

    let point_dynamics = render_point_dynamics_chart(&table, config);
    if let Err(e) = &point_dynamics {
        log::warn!("Point dynamics chart failed: {}", e);
    }

    Ok(ReportOutcome {
        summary,
        mean_error_chart: mean_error?,
        point_dynamics_chart: point_dynamics?,
    })
}

fn log_summary(summary: &StatsSummary) {
    match (summary.average_error, summary.peak_error) {
        (Some(average), Some((frame, peak))) => log::info!(
            "{} frames, mean error avg {:.4} px, peak {:.4} px at frame {}",
            summary.frame_count,
            average,
            peak,
            frame
        ),
        _ => log::info!("{} frames, no mean error values", summary.frame_count),
    }

    log::info!(
        "Points: {} lost, {} added, {} tracked at last frame",
        summary.total_lost,
        summary.total_added,
        summary.final_tracked.unwrap_or(0)
    );
}
