// File: crates/chart-core/src/axis.rs
// Summary: Axis model: orientation, placement, tick positions and labels.

use crate::scale::{LinearScale, ScaleTransform, TimeScale};

/// Length of tick marks and of the domain line's end caps, in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal, ticks and labels below the line.
    Bottom,
    /// Vertical, ticks and labels left of the line.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel position along the axis.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    /// Translation of the axis inside the plot area.
    pub origin: (f64, f64),
    /// Pixel extent of the axis line, in scale range order.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Time axis along the bottom edge of a plot of height `plot_height`.
    pub fn bottom(scale: &TimeScale, count: usize, plot_height: f64) -> Self {
        let ticks = scale
            .labelled_ticks(count)
            .into_iter()
            .map(|(ms, label)| Tick { offset: scale.to_px(ms as f64), label })
            .collect();
        Self { orient: AxisOrient::Bottom, origin: (0.0, plot_height), range: scale.range(), ticks }
    }

    /// Amount axis along the left edge.
    pub fn left(scale: &LinearScale, count: usize) -> Self {
        let ticks = scale
            .labelled_ticks(count)
            .into_iter()
            .map(|(v, label)| Tick { offset: scale.to_px(v), label })
            .collect();
        Self { orient: AxisOrient::Left, origin: (0.0, 0.0), range: scale.range, ticks }
    }

    /// +1 when ticks point down/right of the line, -1 when up/left.
    pub fn direction(&self) -> f64 {
        match self.orient {
            AxisOrient::Bottom => 1.0,
            AxisOrient::Left => -1.0,
        }
    }

    pub fn is_horizontal(&self) -> bool { self.orient == AxisOrient::Bottom }

    /// Distance from the axis line to the tick label anchor.
    pub fn label_distance(&self) -> f64 { self.direction() * (TICK_SIZE + TICK_PADDING) }
}
