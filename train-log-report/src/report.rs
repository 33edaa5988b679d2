//! Report generator
//!
//! Renders a training log as a 2x2 grid of line charts under a figure title
//! and writes the result to an image file. Panel layout and series styling are
//! fixed; size, resolution, title and output path come from [`ReportConfig`].

use crate::axis::{finite_segments, AxisRange};
use crate::config::ReportConfig;
use crate::types::{Metric, ReportError, Result, TrainingLog};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, RGBAColor, TRANSPARENT};
use std::fmt;
use std::path::PathBuf;

const FONT: &str = "sans-serif";

/// Major grid lines are drawn at 30% opacity
const GRID_OPACITY: f64 = 0.3;

/// Minor grid lines are not drawn
const MINOR_GRID: RGBAColor = TRANSPARENT;

/// Styling of one plotted series
#[derive(Debug, Clone, Copy)]
pub struct SeriesStyle {
    pub metric: Metric,
    pub color: RGBColor,
    pub opacity: f64,
    /// Line width in points
    pub width_pt: f64,
}

/// One chart in the grid
#[derive(Debug, Clone, Copy)]
pub struct PanelSpec {
    pub title: &'static str,
    pub y_label: &'static str,
    pub series: &'static [SeriesStyle],
    pub legend: bool,
}

const REWARD_SERIES: [SeriesStyle; 2] = [
    SeriesStyle {
        metric: Metric::Reward,
        color: RGBColor(31, 119, 180),
        opacity: 0.6,
        width_pt: 1.5,
    },
    SeriesStyle {
        metric: Metric::Avg100,
        color: RGBColor(255, 165, 0),
        opacity: 1.0,
        width_pt: 2.0,
    },
];

const LOSS_SERIES: [SeriesStyle; 1] = [SeriesStyle {
    metric: Metric::Loss,
    color: RGBColor(255, 0, 0),
    opacity: 0.7,
    width_pt: 1.5,
}];

const EPSILON_SERIES: [SeriesStyle; 1] = [SeriesStyle {
    metric: Metric::Epsilon,
    color: RGBColor(0, 128, 0),
    opacity: 1.0,
    width_pt: 1.5,
}];

const THROUGHPUT_SERIES: [SeriesStyle; 1] = [SeriesStyle {
    metric: Metric::StepsPerSec,
    color: RGBColor(128, 0, 128),
    opacity: 0.7,
    width_pt: 1.5,
}];

/// Panels in row-major order: top-left, top-right, bottom-left, bottom-right
pub const PANELS: [PanelSpec; 4] = [
    PanelSpec {
        title: "Rewards",
        y_label: "Reward",
        series: &REWARD_SERIES,
        legend: true,
    },
    PanelSpec {
        title: "Training Loss",
        y_label: "Loss (EMA)",
        series: &LOSS_SERIES,
        legend: false,
    },
    PanelSpec {
        title: "Exploration Rate Decay",
        y_label: "Epsilon",
        series: &EPSILON_SERIES,
        legend: false,
    },
    PanelSpec {
        title: "Training Throughput",
        y_label: "Steps/Second",
        series: &THROUGHPUT_SERIES,
        legend: false,
    },
];

/// Renders training logs into a metrics image
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Render the log and write the image to the configured output path
    ///
    /// Any existing file at the output path is overwritten. Returns the path
    /// that was written.
    ///
    /// # Example
    /// ```no_run
    /// use train_log_report::{read_training_log, ReportConfig, ReportGenerator};
    /// use std::path::Path;
    ///
    /// let log = read_training_log(Path::new("train-log.csv")).unwrap();
    /// let generator = ReportGenerator::new(ReportConfig::new());
    /// let written = generator.render(&log).unwrap();
    /// println!("Saved {:?}", written);
    /// ```
    pub fn render(&self, log: &TrainingLog) -> Result<PathBuf> {
        self.config.validate()?;
        if log.is_empty() {
            return Err(ReportError::InputEmpty(self.config.output.clone()));
        }

        let (width, height) = self.config.pixel_size();
        log::info!(
            "Rendering {} episodes to {:?} ({}x{} px, {} dpi)",
            log.len(),
            self.config.output,
            width,
            height,
            self.config.dpi
        );

        let root = BitMapBackend::new(&self.config.output, (width, height)).into_drawing_area();
        self.draw_figure(&root, log)?;
        root.present().map_err(render_err)?;

        Ok(self.config.output.clone())
    }

    /// Draw the title and all panels onto a drawing area
    pub fn draw_figure<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        log: &TrainingLog,
    ) -> Result<()> {
        root.fill(&WHITE).map_err(render_err)?;

        let title_style = (FONT, self.config.points(16.0) as f64)
            .into_font()
            .style(FontStyle::Bold);
        let body = root
            .titled(&self.config.title, title_style)
            .map_err(render_err)?;

        let areas = body.split_evenly((2, 2));
        for (area, panel) in areas.iter().zip(PANELS.iter()) {
            log::debug!("Drawing panel: {}", panel.title);
            self.draw_panel(area, panel, log)?;
        }

        Ok(())
    }

    fn draw_panel<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        panel: &PanelSpec,
        log: &TrainingLog,
    ) -> Result<()> {
        let cfg = &self.config;
        let pt = |size: f64| cfg.points(size);

        let series: Vec<(SeriesStyle, Vec<(f64, f64)>)> = panel
            .series
            .iter()
            .map(|style| (*style, log.series(style.metric)))
            .collect();

        let x_range = AxisRange::from_values(log.episodes());
        let y_range = AxisRange::from_values(
            series
                .iter()
                .flat_map(|(_, points)| points.iter().map(|(_, y)| *y)),
        );

        let mut chart = ChartBuilder::on(area)
            .caption(panel.title, (FONT, pt(12.0) as f64))
            .margin(pt(6.0))
            .x_label_area_size(pt(28.0))
            .y_label_area_size(pt(44.0))
            .build_cartesian_2d(x_range.as_range(), y_range.as_range())
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Episode")
            .y_desc(panel.y_label)
            .axis_desc_style((FONT, pt(10.0) as f64))
            .label_style((FONT, pt(8.0) as f64))
            .bold_line_style(BLACK.mix(GRID_OPACITY).stroke_width(pt(0.8)))
            .light_line_style(MINOR_GRID)
            .draw()
            .map_err(render_err)?;

        let legend_len = pt(20.0) as i32;
        for (style, points) in &series {
            let shape = style
                .color
                .mix(style.opacity)
                .stroke_width(pt(style.width_pt));

            let mut segments = finite_segments(points).into_iter();
            let first = segments.next().unwrap_or_default();
            let anno = chart
                .draw_series(LineSeries::new(first, shape))
                .map_err(render_err)?;
            if panel.legend {
                anno.label(style.metric.label()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + legend_len, y)], shape)
                });
            }
            for segment in segments {
                chart
                    .draw_series(LineSeries::new(segment, shape))
                    .map_err(render_err)?;
            }
        }

        if panel.legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK.mix(0.3))
                .label_font((FONT, pt(9.0) as f64))
                .draw()
                .map_err(render_err)?;
        }

        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

fn render_err<E: fmt::Display>(e: E) -> ReportError {
    ReportError::Render(e.to_string())
}
