// Tracking Report - Optical-flow tracking statistics to charts
// Module declarations

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use config::ReportConfig;
pub use pipeline::{generate_report, ReportError, ReportOutcome};
pub use stats::{load_table, TrackingStatsTable};

/// Generate the report from `tracking_stats.csv` into the working directory
pub fn run() -> Result<ReportOutcome, ReportError> {
    let outcome = generate_report(&ReportConfig::default())?;

    log::info!(
        "Report complete: {}, {}",
        outcome.mean_error_chart.path.display(),
        outcome.point_dynamics_chart.path.display()
    );

    Ok(outcome)
}
