// Pipeline module
// Orchestrates the statistics-to-charts report run

pub mod generator;

pub use generator::{
    generate_report, render_mean_error_chart, render_point_dynamics_chart, ChartOutput,
    ReportError, ReportOutcome,
};
