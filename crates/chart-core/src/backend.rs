// File: crates/chart-core/src/backend.rs
// Summary: Renderer trait implemented by drawing backends (SVG here, Skia in chart-render-skia).

use crate::chart::RenderPlan;

/// Turns a render plan into pixels or markup. Backends draw exactly what the
/// plan says and make no layout decisions of their own.
pub trait Renderer {
    type Output;
    type Error;

    fn render(&mut self, plan: &RenderPlan) -> Result<Self::Output, Self::Error>;
}
