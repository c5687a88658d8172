// crates/cli/src/chart.rs
//! Chart rendering. The engine only produces [`Series`]; drawing happens here.

use crate::error::{AppError, Result};
use namefreq_engine::Series;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Something that can draw the two chart kinds.
pub trait Plotter {
    /// Frequency of one name over the years.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be drawn or written.
    fn line_chart(&mut self, series: &Series<i32>) -> Result<()>;

    /// Frequencies of several names side by side.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be drawn or written.
    fn bar_chart(&mut self, series: &Series<String>) -> Result<()>;
}

fn render_error(e: impl Display) -> AppError {
    AppError::Chart(e.to_string())
}

/// Room above the tallest point so it does not touch the frame.
fn headroom(max: u64) -> u64 {
    max.saturating_add(max / 10).saturating_add(1)
}

pub struct SvgPlotter {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgPlotter {
    pub const DEFAULT_SIZE: (u32, u32) = (1024, 768);

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: Self::DEFAULT_SIZE,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Plotter for SvgPlotter {
    fn line_chart(&mut self, series: &Series<i32>) -> Result<()> {
        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let first = series.labels.first().copied().unwrap_or_default();
        let last = series.labels.last().copied().unwrap_or(first).max(first.saturating_add(1));
        let y_top = headroom(series.max_value().unwrap_or(0));

        let mut chart = ChartBuilder::on(&root)
            .caption(&series.title, ("sans-serif", 28).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(first..last, 0u64..y_top)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc("Frequency")
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(LineSeries::new(series.points().map(|(&year, v)| (year, v)), &BLUE))
            .map_err(render_error)?;
        chart
            .draw_series(
                series
                    .points()
                    .map(|(&year, v)| Circle::new((year, v), 3, BLUE.filled())),
            )
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
        Ok(())
    }

    fn bar_chart(&mut self, series: &Series<String>) -> Result<()> {
        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let n = series.len();
        let labels = &series.labels;
        let y_top = headroom(series.max_value().unwrap_or(0));

        let mut chart = ChartBuilder::on(&root)
            .caption(&series.title, ("sans-serif", 28).into_font())
            .margin(20)
            .x_label_area_size(140)
            .y_label_area_size(80)
            .build_cartesian_2d((0..n).into_segmented(), 0u64..y_top)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&|v| match v {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                    labels.get(*i).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            // Long names only fit rotated
            .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
            .y_desc("Frequency")
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BLUE.filled())
                    .margin(6)
                    .data(series.values.iter().enumerate().map(|(i, &v)| (i, v))),
            )
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
        Ok(())
    }
}

/// Draws scaled bars of block characters to a writer.
pub struct TextPlotter<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TextPlotter<W> {
    pub const DEFAULT_WIDTH: usize = 50;

    pub const fn new(out: W) -> Self {
        Self {
            out,
            width: Self::DEFAULT_WIDTH,
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn bars<L: Display>(&mut self, series: &Series<L>) -> Result<()> {
        let max = series.max_value().unwrap_or(0);
        let labels: Vec<String> = series.labels.iter().map(ToString::to_string).collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        writeln!(self.out, "{}", series.title)?;
        for (label, value) in labels.iter().zip(&series.values) {
            let bar = "█".repeat(scale(*value, max, self.width));
            writeln!(self.out, "{label:>label_width$} │{bar} {value}")?;
        }
        Ok(())
    }
}

/// Bar length of `value` when `max` fills `width` cells.
fn scale(value: u64, max: u64, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let cells = u128::from(value) * width as u128 / u128::from(max);
    usize::try_from(cells).unwrap_or(width)
}

impl<W: Write> Plotter for TextPlotter<W> {
    fn line_chart(&mut self, series: &Series<i32>) -> Result<()> {
        self.bars(series)
    }

    fn bar_chart(&mut self, series: &Series<String>) -> Result<()> {
        self.bars(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn popular() -> Series<String> {
        Series {
            title: "Frequency of the 2 most common names".to_string(),
            labels: vec!["LUCIA".to_string(), "EVA".to_string()],
            values: vec![100, 50],
        }
    }

    #[test]
    fn scale_is_proportional() {
        assert_eq!(scale(100, 100, 40), 40);
        assert_eq!(scale(50, 100, 40), 20);
        assert_eq!(scale(0, 100, 40), 0);
        assert_eq!(scale(5, 0, 40), 0);
    }

    #[test]
    fn headroom_stays_in_range() {
        assert_eq!(headroom(100), 111);
        assert_eq!(headroom(0), 1);
        assert_eq!(headroom(u64::MAX), u64::MAX);
    }

    #[test]
    fn text_bar_chart_aligns_labels() {
        let mut buf = Vec::new();
        TextPlotter::new(&mut buf)
            .with_width(10)
            .bar_chart(&popular())
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Frequency of the 2 most common names");
        assert_eq!(lines[1], "LUCIA │██████████ 100");
        assert_eq!(lines[2], "  EVA │█████ 50");
    }

    #[test]
    fn text_line_chart_lists_every_year() {
        let series = Series {
            title: "Evolution of name 'IKER'".to_string(),
            labels: vec![2002, 2003, 2004],
            values: vec![0, 10, 20],
        };
        let mut buf = Vec::new();
        TextPlotter::new(&mut buf).with_width(4).line_chart(&series).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("2002 │ 0"));
        assert!(text.contains("2004 │████ 20"));
    }

    #[test]
    fn svg_files_are_written() {
        let dir = tempdir().unwrap();

        let bar_path = dir.path().join("popular.svg");
        SvgPlotter::new(&bar_path).bar_chart(&popular()).unwrap();
        let svg = std::fs::read_to_string(&bar_path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Frequency of the 2 most common names"));

        let line_path = dir.path().join("evolution.svg");
        let series = Series {
            title: "Evolution of name 'ANA'".to_string(),
            labels: vec![2002, 2003],
            values: vec![105, 50],
        };
        SvgPlotter::new(&line_path)
            .with_size(640, 480)
            .line_chart(&series)
            .unwrap();
        assert!(std::fs::read_to_string(&line_path).unwrap().contains("<svg"));
    }
}
