// Report configuration
// Fixed input/output locations and image geometry

use std::path::PathBuf;

use crate::report::DisplayMode;

pub const INPUT_FILE_NAME: &str = "tracking_stats.csv";

/// 12x5 inch figure at 100 dpi
pub const DEFAULT_IMAGE_SIZE: (u32, u32) = (1200, 500);

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// CSV produced by the tracker
    pub input_path: PathBuf,

    /// Directory the chart images are written to
    pub output_dir: PathBuf,

    pub width: u32,
    pub height: u32,
    pub display: DisplayMode,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            input_path: PathBuf::from(INPUT_FILE_NAME),
            output_dir: PathBuf::from("."),
            width: DEFAULT_IMAGE_SIZE.0,
            height: DEFAULT_IMAGE_SIZE.1,
            display: DisplayMode::Auto,
        }
    }
}

impl ReportConfig {
    /// Read `input_path` and write both charts into `output_dir`
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        ReportConfig {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    pub fn image_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
