// Report module
// Chart definitions, PNG rendering, file output and optional on-screen display

pub mod charts;
pub mod display;
pub mod output;
pub mod render;

pub use charts::{
    mean_error_chart, point_dynamics_chart, ChartSpec, SeriesSpec, MEAN_ERROR_CHART_FILE,
    POINT_DYNAMICS_CHART_FILE,
};
pub use display::DisplayMode;
pub use output::{calculate_sha256, write_chart, OutputError, OutputResult};
pub use render::{render_png, RenderError};
