// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and amount (Y) scales mapping data domains to pixel ranges.

use crate::grid::{tick_step, ticks};
use crate::time::{format_tick, time_ticks};

/// Forward and inverse pixel mapping shared by the chart's scales.
pub trait ScaleTransform {
    type Value;
    fn to_px(&self, v: Self::Value) -> f64;
    fn from_px(&self, px: f64) -> Self::Value;
}

fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Continuous linear scale. A zero-width domain maps everything to the middle
/// of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    fn normalize(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span == 0.0 { 0.5 } else { (v - d0) / span }
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Ticks with labels using a fixed precision derived from the tick step.
    pub fn labelled_ticks(&self, count: usize) -> Vec<(f64, String)> {
        let step = tick_step(self.domain.0, self.domain.1, count);
        let precision = precision_fixed(step);
        self.ticks(count).into_iter().map(|v| (v, format_grouped(v, precision))).collect()
    }
}

impl ScaleTransform for LinearScale {
    type Value = f64;

    fn to_px(&self, v: f64) -> f64 {
        interpolate(self.range.0, self.range.1, self.normalize(v))
    }

    fn from_px(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        let t = if r1 == r0 { 0.5 } else { (px - r0) / (r1 - r0) };
        interpolate(self.domain.0, self.domain.1, t)
    }
}

/// Linear scale over unix time. The domain is kept in epoch milliseconds so
/// ticks can land on sub-second boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    /// Scale over `[start, stop]` unix seconds.
    pub fn from_seconds(start: i64, stop: i64, range: (f64, f64)) -> Self {
        Self { inner: LinearScale::new((start as f64 * 1000.0, stop as f64 * 1000.0), range) }
    }

    /// Domain in unix seconds.
    pub fn domain_seconds(&self) -> (f64, f64) {
        (self.inner.domain.0 / 1000.0, self.inner.domain.1 / 1000.0)
    }

    pub fn range(&self) -> (f64, f64) { self.inner.range }

    /// Map unix seconds to pixels.
    pub fn seconds_to_px(&self, t: i64) -> f64 {
        self.inner.to_px(t as f64 * 1000.0)
    }

    /// Tick instants in epoch milliseconds.
    pub fn ticks(&self, count: usize) -> Vec<i64> {
        time_ticks(self.inner.domain.0, self.inner.domain.1, count)
    }

    pub fn labelled_ticks(&self, count: usize) -> Vec<(i64, String)> {
        self.ticks(count).into_iter().map(|ms| (ms, format_tick(ms))).collect()
    }
}

impl ScaleTransform for TimeScale {
    /// Epoch milliseconds.
    type Value = f64;

    fn to_px(&self, ms: f64) -> f64 { self.inner.to_px(ms) }
    fn from_px(&self, px: f64) -> f64 { self.inner.from_px(px) }
}

/// Decimal places needed to tell apart values `step` apart.
pub fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() { return 0; }
    (-step.log10().floor()).max(0.0) as usize
}

/// Fixed-point number with `,` thousands separators and a typographic minus.
/// A negative value that rounds to zero prints unsigned.
pub fn format_grouped(v: f64, precision: usize) -> String {
    let body = format!("{:.*}", precision, v.abs());
    let (int, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac {
        grouped.push('.');
        grouped.push_str(f);
    }
    let is_zero = body.bytes().all(|b| b == b'0' || b == b'.');
    if v < 0.0 && !is_zero { format!("\u{2212}{grouped}") } else { grouped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_scale_is_inverted() {
        let y = LinearScale::new((0.0, 30.0), (250.0, 0.0));
        assert_eq!(y.to_px(0.0), 250.0);
        assert_eq!(y.to_px(30.0), 0.0);
        assert!((y.to_px(10.0) - 166.6666).abs() < 1e-3);
        assert!((y.from_px(125.0) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_middle() {
        let x = TimeScale::from_seconds(500, 500, (0.0, 230.0));
        assert_eq!(x.seconds_to_px(500), 115.0);
        assert_eq!(x.seconds_to_px(900), 115.0);
    }

    #[test]
    fn time_scale_spans_range() {
        let x = TimeScale::from_seconds(1000, 2000, (0.0, 230.0));
        assert_eq!(x.seconds_to_px(1000), 0.0);
        assert_eq!(x.seconds_to_px(2000), 230.0);
        assert_eq!(x.domain_seconds(), (1000.0, 2000.0));
    }

    #[test]
    fn grouped_formatting() {
        assert_eq!(format_grouped(20.0, 0), "20");
        assert_eq!(format_grouped(1234567.0, 0), "1,234,567");
        assert_eq!(format_grouped(0.5, 1), "0.5");
        assert_eq!(format_grouped(-2000.0, 0), "\u{2212}2,000");
        assert_eq!(format_grouped(-0.01, 1), "0.0");
    }

    #[test]
    fn amount_tick_labels() {
        let y = LinearScale::new((0.0, 30.0), (250.0, 0.0));
        assert_eq!(y.labelled_ticks(1), vec![(0.0, "0".to_string()), (20.0, "20".to_string())]);
        let small = LinearScale::new((0.0, 0.6), (250.0, 0.0));
        assert_eq!(precision_fixed(tick_step(0.0, 0.6, 1)), 1);
        assert_eq!(small.labelled_ticks(1), vec![(0.0, "0.0".to_string()), (0.5, "0.5".to_string())]);
    }
}
