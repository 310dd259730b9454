// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; draws render plans to PNG bytes or RGBA8 buffers.

pub mod text;

use anyhow::Result;
use skia_safe as skia;

use chart_core::axis::{Axis, AxisOrient, TICK_SIZE};
use chart_core::{Color, Panel, RenderPlan, Renderer};

pub use text::{Anchor, TextShaper};

/// Raster-only settings; layout comes from the plan.
#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Device pixel ratio applied to the whole canvas.
    pub dpr: f32,
    /// Skip text to keep pixel output independent of installed fonts.
    pub draw_labels: bool,
    /// Series label size in CSS pixels.
    pub label_font_size: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { dpr: 1.0, draw_labels: true, label_font_size: 16.0 }
    }
}

/// RGBA8 pixels with their dimensions and row stride in bytes.
pub type RgbaFrame = (Vec<u8>, u32, u32, usize);

pub struct SkiaRenderer {
    pub options: RasterOptions,
    shaper: Option<TextShaper>,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RasterOptions::default()) }
}

impl SkiaRenderer {
    pub fn new(options: RasterOptions) -> Self {
        let shaper = options.draw_labels.then(TextShaper::new);
        Self { options, shaper }
    }

    fn canvas_size(&self, plan: &RenderPlan) -> (i32, i32) {
        let (w, h) = plan.total_size();
        let dpr = f64::from(self.options.dpr.max(0.1));
        (((w * dpr).ceil() as i32).max(1), ((h * dpr).ceil() as i32).max(1))
    }

    fn draw_surface(&self, plan: &RenderPlan) -> Result<skia::Surface> {
        let size = self.canvas_size(plan);
        let mut surface = skia::surfaces::raster_n32_premul(size)
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", size.0, size.1))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(plan.theme.background));
        canvas.save();
        canvas.scale((self.options.dpr, self.options.dpr));
        for panel in &plan.panels {
            self.draw_panel(canvas, plan, panel);
        }
        canvas.restore();
        Ok(surface)
    }

    /// Render the plan and encode it as PNG.
    pub fn render_to_png_bytes(&self, plan: &RenderPlan) -> Result<Vec<u8>> {
        let mut surface = self.draw_surface(plan)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the plan to a PNG file, creating parent directories as needed.
    pub fn render_to_png(&self, plan: &RenderPlan, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(plan)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the plan into an unpremultiplied RGBA8 buffer.
    pub fn render_to_rgba8(&self, plan: &RenderPlan) -> Result<RgbaFrame> {
        let mut surface = self.draw_surface(plan)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn draw_panel(&self, canvas: &skia::Canvas, plan: &RenderPlan, panel: &Panel) {
        canvas.save();
        canvas.translate((
            (panel.frame.left + f64::from(plan.insets.left)) as f32,
            (panel.frame.top + f64::from(plan.insets.top)) as f32,
        ));

        self.draw_axis(canvas, plan, &panel.x_axis);
        self.draw_axis(canvas, plan, &panel.y_axis);

        if let Some((first, rest)) = panel.line.points.split_first() {
            let mut path = skia::Path::new();
            path.move_to((first.x as f32, first.y as f32));
            for p in rest {
                path.line_to((p.x as f32, p.y as f32));
            }
            if rest.is_empty() {
                path.close();
            }
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(panel.line.stroke_width as f32);
            stroke.set_stroke_join(skia::paint::Join::Round);
            stroke.set_stroke_cap(skia::paint::Cap::Round);
            stroke.set_color(to_skia(panel.line.stroke));
            canvas.draw_path(&path, &stroke);
        }

        if let Some(shaper) = &self.shaper {
            shaper.draw_anchored(
                canvas,
                &panel.label.text,
                (panel.label.x as f32, panel.label.y as f32),
                Anchor::Start,
                self.options.label_font_size,
                to_skia(panel.label.color),
                plan.theme.font_family,
            );
        }
        canvas.restore();
    }

    fn draw_axis(&self, canvas: &skia::Canvas, plan: &RenderPlan, axis: &Axis) {
        let color = to_skia(plan.theme.axis);
        let mut paint = skia::Paint::default();
        paint.set_color(color);
        paint.set_anti_alias(false);
        paint.set_stroke_width(1.0);
        paint.set_style(skia::paint::Style::Stroke);

        canvas.save();
        canvas.translate((axis.origin.0 as f32, axis.origin.1 as f32));

        let k = axis.direction() as f32;
        let outer = k * TICK_SIZE as f32;
        let (r0, r1) = (axis.range.0 as f32 + 0.5, axis.range.1 as f32 + 0.5);
        let mut domain = skia::Path::new();
        match axis.orient {
            AxisOrient::Bottom => {
                domain.move_to((r0, outer));
                domain.line_to((r0, 0.5));
                domain.line_to((r1, 0.5));
                domain.line_to((r1, outer));
            }
            AxisOrient::Left => {
                domain.move_to((outer, r0));
                domain.line_to((0.5, r0));
                domain.line_to((0.5, r1));
                domain.line_to((outer, r1));
            }
        }
        canvas.draw_path(&domain, &paint);

        let size = plan.theme.font_size;
        let dist = axis.label_distance() as f32;
        for tick in &axis.ticks {
            let pos = tick.offset as f32 + 0.5;
            match axis.orient {
                AxisOrient::Bottom => {
                    canvas.draw_line((pos, 0.0), (pos, outer), &paint);
                    if let Some(shaper) = &self.shaper {
                        shaper.draw_anchored(canvas, &tick.label, (pos, dist + size * 0.71), Anchor::Middle, size, color, plan.theme.font_family);
                    }
                }
                AxisOrient::Left => {
                    canvas.draw_line((0.0, pos), (outer, pos), &paint);
                    if let Some(shaper) = &self.shaper {
                        shaper.draw_anchored(canvas, &tick.label, (dist, pos + size * 0.32), Anchor::End, size, color, plan.theme.font_family);
                    }
                }
            }
        }
        canvas.restore();
    }
}

impl Renderer for SkiaRenderer {
    type Output = Vec<u8>;
    type Error = anyhow::Error;

    fn render(&mut self, plan: &RenderPlan) -> Result<Vec<u8>> {
        self.render_to_png_bytes(plan)
    }
}

pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}
