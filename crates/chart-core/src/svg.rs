// File: crates/chart-core/src/svg.rs
// Summary: SVG backend: serialises a render plan as one <svg> per panel.

use std::fmt::Write;

use crate::axis::{Axis, AxisOrient, TICK_SIZE};
use crate::backend::Renderer;
use crate::chart::{Panel, RenderPlan};
use crate::error::PlanError;
use crate::geometry::Num;

/// Crisp 1px lines sit on half pixels.
const HALF_PX: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SvgLayout {
    /// A single standalone SVG document with nested panels.
    #[default]
    Document,
    /// An HTML grid container holding one inline SVG per panel.
    Grid,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SvgRenderer {
    pub layout: SvgLayout,
}

impl SvgRenderer {
    pub fn new(layout: SvgLayout) -> Self { Self { layout } }

    pub fn render_string(&self, plan: &RenderPlan) -> Result<String, PlanError> {
        let mut out = String::new();
        match self.layout {
            SvgLayout::Document => write_document(&mut out, plan)?,
            SvgLayout::Grid => write_grid(&mut out, plan)?,
        }
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    type Output = String;
    type Error = PlanError;

    fn render(&mut self, plan: &RenderPlan) -> Result<String, PlanError> {
        self.render_string(plan)
    }
}

fn write_document(out: &mut String, plan: &RenderPlan) -> std::fmt::Result {
    let (w, h) = plan.total_size();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" style="color: {axis};">"#,
        w = Num(w),
        h = Num(h),
        axis = plan.theme.axis,
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, plan.theme.background)?;
    for p in &plan.panels {
        write_panel(out, plan, p, Some((p.frame.left, p.frame.top)))?;
    }
    writeln!(out, "</svg>")
}

fn write_grid(out: &mut String, plan: &RenderPlan) -> std::fmt::Result {
    writeln!(
        out,
        r#"<div class="dataviz" style="display: grid; grid-template-columns: repeat({}, 1fr); grid-gap: 0px; color: {}; background: {};">"#,
        plan.columns, plan.theme.axis, plan.theme.background,
    )?;
    for p in &plan.panels {
        write_panel(out, plan, p, None)?;
    }
    writeln!(out, "</div>")
}

fn write_panel(out: &mut String, plan: &RenderPlan, panel: &Panel, at: Option<(f64, f64)>) -> std::fmt::Result {
    let (pw, ph) = plan.panel_size;
    match at {
        Some((x, y)) => writeln!(out, r#"<svg x="{}" y="{}" width="{}" height="{}">"#, Num(x), Num(y), Num(pw), Num(ph))?,
        None => writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#, Num(pw), Num(ph))?,
    }
    writeln!(out, r#"<g transform="translate({},{})">"#, plan.insets.left, plan.insets.top)?;
    write_axis(out, plan, &panel.x_axis)?;
    write_axis(out, plan, &panel.y_axis)?;
    writeln!(
        out,
        r#"<path fill="none" stroke="{}" stroke-linejoin="round" stroke-linecap="round" stroke-width="{}" d="{}"></path>"#,
        panel.line.stroke,
        Num(panel.line.stroke_width),
        panel.line.data(),
    )?;
    writeln!(
        out,
        r#"<text text-anchor="start" y="{}" x="{}" style="fill: {};">{}</text>"#,
        Num(panel.label.y),
        Num(panel.label.x),
        panel.label.color,
        escape(&panel.label.text),
    )?;
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

fn write_axis(out: &mut String, plan: &RenderPlan, axis: &Axis) -> std::fmt::Result {
    let k = axis.direction();
    let outer = k * TICK_SIZE;
    let (r0, r1) = (axis.range.0 + HALF_PX, axis.range.1 + HALF_PX);
    let (anchor, domain) = match axis.orient {
        AxisOrient::Bottom => ("middle", format!("M{},{}V{}H{}V{}", Num(r0), Num(outer), HALF_PX, Num(r1), Num(outer))),
        AxisOrient::Left => ("end", format!("M{},{}H{}V{}H{}", Num(outer), Num(r0), HALF_PX, Num(r1), Num(outer))),
    };
    let (ox, oy) = axis.origin;
    let transform = if ox != 0.0 || oy != 0.0 { format!(r#" transform="translate({},{})""#, Num(ox), Num(oy)) } else { String::new() };
    writeln!(
        out,
        r#"<g{transform} fill="none" font-size="{}" font-family="{}" text-anchor="{anchor}">"#,
        plan.theme.font_size, plan.theme.font_family,
    )?;
    writeln!(out, r#"<path class="domain" stroke="currentColor" d="{domain}"></path>"#)?;
    for tick in &axis.ticks {
        let pos = Num(tick.offset + HALF_PX);
        let label = escape(&tick.label);
        let dist = Num(axis.label_distance());
        if axis.is_horizontal() {
            writeln!(
                out,
                r#"<g class="tick" opacity="1" transform="translate({pos},0)"><line stroke="currentColor" y2="{}"></line><text fill="currentColor" y="{dist}" dy="0.71em">{label}</text></g>"#,
                Num(k * TICK_SIZE),
            )?;
        } else {
            writeln!(
                out,
                r#"<g class="tick" opacity="1" transform="translate(0,{pos})"><line stroke="currentColor" x2="{}"></line><text fill="currentColor" x="{dist}" dy="0.32em">{label}</text></g>"#,
                Num(k * TICK_SIZE),
            )?;
        }
    }
    writeln!(out, "</g>")
}

/// Escape text for XML character data and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
