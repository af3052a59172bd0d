// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia adapter for shape geometry: curve output as skia paths, bars as rects, headless PNG.

use anyhow::Result;
use skia_safe as skia;

use chart_shape::curve::{draw_line, CurveType, PathSink};
use chart_shape::Rect;

/// Skia path filled by a curve generator.
#[derive(Default)]
pub struct SkiaPath(pub skia::Path);

impl SkiaPath {
    pub fn new() -> Self {
        Self(skia::Path::new())
    }

    pub fn into_inner(self) -> skia::Path {
        self.0
    }
}

impl PathSink for SkiaPath {
    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to((x as f32, y as f32));
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.0.cubic_to((x1 as f32, y1 as f32), (x2 as f32, y2 as f32), (x as f32, y as f32));
    }

    fn close_path(&mut self) {
        self.0.close();
    }
}

/// Run `curve` over pixel-space points and collect the result as a skia path.
pub fn curve_path<I>(curve: CurveType, points: I) -> skia::Path
where
    I: IntoIterator<Item = Option<(f64, f64)>>,
{
    let mut sink = SkiaPath::new();
    draw_line(curve, points, &mut sink);
    sink.into_inner()
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    pub stroke_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
            stroke_width: 2.0,
        }
    }
}

/// Stroked curves and filled bars, already in pixel space.
#[derive(Default)]
pub struct Scene {
    pub lines: Vec<(skia::Path, skia::Color)>,
    pub bars: Vec<(Rect, skia::Color)>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, path: skia::Path, color: skia::Color) {
        self.lines.push((path, color));
    }

    pub fn add_bar(&mut self, rect: Rect, color: skia::Color) {
        self.bars.push((rect, color));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.bars.is_empty()
    }

    /// Render on a CPU raster surface and encode as PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.background);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        for (r, color) in &self.bars {
            fill.set_color(*color);
            let rect = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
            canvas.draw_rect(rect, &fill);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(opts.stroke_width);
        for (path, color) in &self.lines {
            stroke.set_color(*color);
            canvas.draw_path(path, &stroke);
        }

        tracing::debug!(lines = self.lines.len(), bars = self.bars.len(), "scene rendered");

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

/// Stroke colour for the `i`-th series, cycling a fixed palette.
pub fn palette(i: usize) -> skia::Color {
    const RGB: [(u8, u8, u8); 6] = [
        (64, 160, 255),
        (40, 200, 120),
        (220, 80, 80),
        (240, 180, 40),
        (170, 110, 230),
        (90, 200, 210),
    ];
    let (r, g, b) = RGB[i % RGB.len()];
    skia::Color::from_argb(255, r, g, b)
}
