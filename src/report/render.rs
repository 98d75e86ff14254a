// Chart rendering
// Draws a ChartSpec into an in-memory RGB surface and encodes it as PNG

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::ranged1d::{BoldPoints, Ranged};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::ops::Range;
use thiserror::Error;

use super::charts::ChartSpec;

const FONT: &str = "sans-serif";
const TITLE_FONT_SIZE: u32 = 24;
const AXIS_DESC_FONT_SIZE: u32 = 18;
const TICK_FONT_SIZE: u32 = 14;

/// Upper bound on labelled ticks (and grid lines) per axis
const TICK_COUNT: usize = 10;
const MARKER_RADIUS: u32 = 4;

const GRID_COLOR: RGBColor = RGBColor(176, 176, 176);
const GRID_OPACITY: f64 = 0.6;
const GRID_DASH_PX: f64 = 6.0;
const GRID_GAP_PX: f64 = 4.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to draw chart {chart}: {message}")]
    Draw {
        chart: &'static str,
        message: String,
    },

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

impl RenderError {
    fn draw(spec: &ChartSpec, error: impl std::fmt::Display) -> Self {
        RenderError::Draw {
            chart: spec.file_name,
            message: error.to_string(),
        }
    }
}

/// Render a chart to PNG bytes.
/// The drawing surface and pixel buffer only live for the duration of the call.
pub fn render_png(spec: &ChartSpec, size: (u32, u32)) -> Result<Vec<u8>, RenderError> {
    let (width, height) = size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        draw_chart(&root, spec).map_err(|e| RenderError::draw(spec, e))?;
        root.present().map_err(|e| RenderError::draw(spec, e))?;
    }

    encode_png(buffer, width, height)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let x_range = spec.x_range();
    let y_range = spec.y_range();

    let mut chart = ChartBuilder::on(root)
        .caption(spec.title, (FONT, TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    let y_precision = spec.y_precision;
    let y_formatter = |y: &f64| format!("{:.*}", y_precision, y + 0.0);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(TICK_COUNT)
        .y_labels(TICK_COUNT)
        .x_label_formatter(&frame_label)
        .y_label_formatter(&y_formatter)
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .axis_desc_style((FONT, AXIS_DESC_FONT_SIZE))
        .label_style((FONT, TICK_FONT_SIZE))
        .draw()?;

    // Dashed grid at the labelled ticks
    let (plot_width, plot_height) = chart.plotting_area().dim_in_pixel();
    let grid_style = GRID_COLOR.mix(GRID_OPACITY).stroke_width(1);
    let x_dashes = dash_segments(&y_range, plot_height);
    let y_dashes = dash_segments(&x_range, plot_width);

    let mut grid = Vec::new();
    for x in RangedCoordf64::from(x_range.clone()).key_points(BoldPoints(TICK_COUNT)) {
        grid.extend(
            x_dashes
                .iter()
                .map(|&(from, to)| PathElement::new(vec![(x, from), (x, to)], grid_style)),
        );
    }
    for y in RangedCoordf64::from(y_range.clone()).key_points(BoldPoints(TICK_COUNT)) {
        grid.extend(
            y_dashes
                .iter()
                .map(|&(from, to)| PathElement::new(vec![(from, y), (to, y)], grid_style)),
        );
    }
    chart.draw_series(grid)?;

    for series in &spec.series {
        let color = series.color;
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(series.stroke_width),
            ))?
            .label(series.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        if series.markers {
            chart.draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, MARKER_RADIUS, color.filled())),
            )?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(0.3))
        .label_font((FONT, TICK_FONT_SIZE))
        .draw()?;

    Ok(())
}

/// Frame indices are whole numbers; only show a decimal when the tick falls between frames
fn frame_label(x: &f64) -> String {
    let x = x + 0.0;
    if x.fract() == 0.0 {
        format!("{:.0}", x)
    } else {
        format!("{:.1}", x)
    }
}

/// Split an axis span into dash intervals sized in pixels of the plotting area
fn dash_segments(range: &Range<f64>, pixels: u32) -> Vec<(f64, f64)> {
    let span = range.end - range.start;
    if pixels == 0 || span <= 0.0 {
        return Vec::new();
    }

    let per_pixel = span / pixels as f64;
    let dash = GRID_DASH_PX * per_pixel;
    let step = (GRID_DASH_PX + GRID_GAP_PX) * per_pixel;

    // At most one dash per pixel, even when `step` is below the f64 resolution of `start`
    let count = ((span / step).ceil() as usize).min(pixels as usize);

    (0..count)
        .map(|i| {
            let start = range.start + i as f64 * step;
            (start, (start + dash).min(range.end))
        })
        .filter(|&(from, to)| from < to)
        .collect()
}

fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new(&mut bytes);
    encoder.write_image(&buffer, width, height, ExtendedColorType::Rgb8)?;

    Ok(bytes)
}
