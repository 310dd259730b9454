// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and SVG path data.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Coordinate rounded to three decimals, printed without trailing zeros.
#[derive(Clone, Copy, Debug)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` folds -0 into 0
        let v = (self.0 * 1000.0).round() / 1000.0 + 0.0;
        write!(f, "{v}")
    }
}

/// SVG path data for a polyline through `points`: `M x,y L x,y ...`.
/// A lone point closes on itself so it still strokes as a dot.
pub fn path_data(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        out.push(if i == 0 { 'M' } else { 'L' });
        out.push_str(&format!("{},{}", Num(p.x), Num(p.y)));
    }
    if points.len() == 1 {
        out.push('Z');
    }
    out
}
