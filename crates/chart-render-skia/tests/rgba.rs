// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{render, Chart, PlanOptions, Record, PALETTE};
use chart_render_skia::{RasterOptions, SkiaRenderer};

#[test]
fn render_rgba8_buffer() {
    let records = vec![Record::new("a", 100, 1.0), Record::new("a", 200, 4.0)];
    let plan = render(&records, 600.0).expect("plan");

    let opts = RasterOptions { draw_labels: false, ..RasterOptions::default() }; // avoid font variance
    let (px, w, h, stride) = SkiaRenderer::new(opts).render_to_rgba8(&plan).expect("rgba render");
    assert_eq!((w, h), (600, 300));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is plain background (white, opaque).
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // Second panel slot is empty, so its center stays background too.
    let at = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    assert_eq!(at(450, 150), &[255, 255, 255, 255]);
}

#[test]
fn dpr_scales_canvas() {
    let plan = render(&[Record::new("a", 1, 1.0)], 300.0).expect("plan");
    let opts = RasterOptions { dpr: 2.0, draw_labels: false, ..RasterOptions::default() };
    let (_, w, h, _) = SkiaRenderer::new(opts).render_to_rgba8(&plan).expect("rgba render");
    assert_eq!((w, h), (600, 600));
}

#[test]
fn polyline_pixels_use_series_color() {
    // Flat series at the top of the amount scale: a horizontal line on the plot's top edge.
    let records = vec![Record::new("a", 100, 4.0), Record::new("a", 200, 4.0)];
    let chart = Chart::with_options(PlanOptions { stroke_width: 4.0, ..PlanOptions::default() });
    let plan = chart.plan(&records, 600.0).expect("plan");

    let opts = RasterOptions { draw_labels: false, ..RasterOptions::default() };
    let (px, _, _, stride) = SkiaRenderer::new(opts).render_to_rgba8(&plan).expect("rgba render");
    let at = |x: usize, y: usize| px[y * stride + x * 4..y * stride + x * 4 + 4].to_vec();

    // Plot spans x 50..180 at y = 20 (top inset); the stroke covers rows 18..22.
    let c = PALETTE[0];
    assert_eq!(at(115, 20), vec![c.r, c.g, c.b, 255]);
    assert_eq!(at(115, 19), vec![c.r, c.g, c.b, 255]);
    // Inside the plot but away from the line stays background.
    assert_eq!(at(115, 120), vec![255, 255, 255, 255]);
}
