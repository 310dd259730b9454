// File: crates/chart-core/src/chart.rs
// Summary: Multi-series chart: groups records, builds shared scales and lays out one panel per series.

use crate::axis::Axis;
use crate::error::PlanError;
use crate::geometry::{path_data, Point, Rect};
use crate::record::Record;
use crate::scale::{LinearScale, ScaleTransform, TimeScale};
use crate::series::{group_by_name, max_amount, time_extent};
use crate::theme::{Color, OrdinalScale, Theme};
use crate::types::{Insets, AMOUNT_TICKS, COLUMNS, PANEL_HEIGHT, TIME_TICKS};

/// Layout and styling knobs. Defaults reproduce the stock three-column grid.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanOptions {
    pub insets: Insets,
    /// Outer panel height in pixels.
    pub panel_height: f64,
    pub columns: usize,
    pub time_ticks: usize,
    pub amount_ticks: usize,
    pub stroke_width: f64,
    /// Vertical offset of the series label from the plot's top edge.
    pub label_offset: f64,
    pub theme: Theme,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            panel_height: PANEL_HEIGHT,
            columns: COLUMNS,
            time_ticks: TIME_TICKS,
            amount_ticks: AMOUNT_TICKS,
            stroke_width: 1.5,
            label_offset: -5.0,
            theme: Theme::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinePath {
    /// Plot-area coordinates, one per record, in record order.
    pub points: Vec<Point>,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl LinePath {
    /// SVG path data for the polyline.
    pub fn data(&self) -> String { path_data(&self.points) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

/// One sub-chart. Coordinates of axes, line and label are relative to the
/// plot area, i.e. the panel origin shifted by the left/top insets.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub key: String,
    pub color: Color,
    /// Outer bounds inside the whole grid.
    pub frame: Rect,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub line: LinePath,
    pub label: Label,
}

/// Drawing instructions for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    /// Width the host measured.
    pub width: f64,
    /// Outer size of each panel.
    pub panel_size: (f64, f64),
    /// Drawable size inside the insets.
    pub plot_size: (f64, f64),
    pub insets: Insets,
    pub columns: usize,
    /// Shared time domain in unix seconds.
    pub time_domain: Option<(i64, i64)>,
    /// Shared amount domain, always anchored at zero.
    pub amount_domain: Option<(f64, f64)>,
    pub panels: Vec<Panel>,
    pub theme: Theme,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool { self.panels.is_empty() }

    /// Grid rows in use.
    pub fn rows(&self) -> usize { self.panels.len().div_ceil(self.columns.max(1)) }

    /// Pixel size of the whole grid; an empty plan still reports one row.
    pub fn total_size(&self) -> (f64, f64) {
        (self.width, self.rows().max(1) as f64 * self.panel_size.1)
    }

    pub fn panel(&self, key: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.key == key)
    }
}

/// Builds render plans from records; one chart can plan any number of passes.
#[derive(Clone, Debug, Default)]
pub struct Chart {
    pub options: PlanOptions,
}

impl Chart {
    pub fn new() -> Self { Self::default() }

    pub fn with_options(options: PlanOptions) -> Self { Self { options } }

    /// Plan a grid of panels, one per series name, for a host `width` pixels wide.
    ///
    /// Scales are shared by every panel: time spans the extent of all records,
    /// amount spans `[0, max]` of all records. No records gives an empty plan.
    pub fn plan(&self, records: &[Record], width: f64) -> Result<RenderPlan, PlanError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(PlanError::InvalidWidth(width));
        }
        let opts = &self.options;
        let columns = opts.columns.max(1);
        let insets = opts.insets;
        let panel_w = width / columns as f64;
        let panel_h = opts.panel_height;
        let plot_w = panel_w - f64::from(insets.hsum());
        let plot_h = panel_h - f64::from(insets.vsum());

        let mut plan = RenderPlan {
            width,
            panel_size: (panel_w, panel_h),
            plot_size: (plot_w, plot_h),
            insets,
            columns,
            time_domain: None,
            amount_domain: None,
            panels: Vec::new(),
            theme: opts.theme.clone(),
        };

        let (Some((t0, t1)), Some(a_max)) = (time_extent(records), max_amount(records)) else {
            log::debug!("no records to plan; width={width}");
            return Ok(plan);
        };
        let x = TimeScale::from_seconds(t0, t1, (0.0, plot_w));
        let y = LinearScale::new((0.0, a_max), (plot_h, 0.0));
        plan.time_domain = Some((t0, t1));
        plan.amount_domain = Some((0.0, a_max));

        let mut colors = OrdinalScale::new(&opts.theme.palette);
        for (i, series) in group_by_name(records).into_iter().enumerate() {
            let color = colors.color(series.name);
            let (col, row) = (i % columns, i / columns);
            let points = series
                .points()
                .map(|(t, a)| Point::new(x.seconds_to_px(t), y.to_px(a)))
                .collect();
            plan.panels.push(Panel {
                key: series.name.to_string(),
                color,
                frame: Rect::from_ltwh(col as f64 * panel_w, row as f64 * panel_h, panel_w, panel_h),
                x_axis: Axis::bottom(&x, opts.time_ticks, plot_h),
                y_axis: Axis::left(&y, opts.amount_ticks),
                line: LinePath { points, stroke: color, stroke_width: opts.stroke_width },
                label: Label { text: series.name.to_string(), x: 0.0, y: opts.label_offset, color },
            });
        }
        log::debug!(
            "planned {} panels over {} records; plot {plot_w}x{plot_h}",
            plan.panels.len(),
            records.len()
        );
        Ok(plan)
    }
}

/// Plan with default options.
pub fn render(records: &[Record], width: f64) -> Result<RenderPlan, PlanError> {
    Chart::new().plan(records, width)
}
