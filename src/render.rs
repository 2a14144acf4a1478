//! Rendering capability and a reference rasterizer.
//!
//! The search engine never rasterizes on its own; a driver hands each
//! produced candidate to a [`Renderer`] and attaches the result with
//! [`Candidate::attach_render`](crate::model::Candidate::attach_render).

use crate::image::PixelBuffer;
use crate::model::Triangle;
use tiny_skia as sk;

/// Turns a triangle list into pixels.
///
/// Output must be `width x height` RGB in the raster order the fitness
/// oracle expects. Bit-exact determinism is not required.
pub trait Renderer: Send + Sync {
    fn render(&self, triangles: &[Triangle], width: u32, height: u32) -> PixelBuffer;
}

/// CPU rasterizer on `tiny-skia`: triangles are filled in list order over
/// an opaque background with source-over alpha blending.
///
/// Vertex coordinates map the unit square onto the canvas, `(0, 0)` at the
/// top-left corner of row 0. Without anti-aliasing a pixel is either fully
/// covered or untouched; zero-area triangles cover nothing.
#[derive(Debug, Clone, Copy)]
pub struct SoftwareRenderer {
    background: [u8; 3],
    anti_alias: bool,
}

impl Default for SoftwareRenderer {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            anti_alias: false,
        }
    }
}

impl SoftwareRenderer {
    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.background = rgb;
        self
    }

    /// Blend partially covered edge pixels instead of snapping coverage.
    pub fn with_anti_alias(mut self, enabled: bool) -> Self {
        self.anti_alias = enabled;
        self
    }
}

impl Renderer for SoftwareRenderer {
    fn render(&self, triangles: &[Triangle], width: u32, height: u32) -> PixelBuffer {
        // Zero-sized (or oversized) canvases have nothing to rasterize.
        let Some(mut pix) = sk::Pixmap::new(width, height) else {
            return PixelBuffer::solid(width, height, self.background);
        };
        let [r, g, b] = self.background;
        pix.fill(sk::Color::from_rgba8(r, g, b, 255));

        for t in triangles {
            self.draw_triangle(&mut pix, t);
        }

        let mut out = PixelBuffer::new(width, height);
        for (dst, px) in out.data_mut().chunks_exact_mut(3).zip(pix.pixels()) {
            let c = px.demultiply();
            dst.copy_from_slice(&[c.red(), c.green(), c.blue()]);
        }
        out
    }
}

impl SoftwareRenderer {
    fn draw_triangle(&self, pix: &mut sk::Pixmap, t: &Triangle) {
        let (w, h) = (pix.width() as f32, pix.height() as f32);
        let p = t.vertices.map(|[x, y]| [x * w, y * h]);
        let area = edge(p[0], p[1], p[2]);
        if area == 0.0 || !area.is_finite() {
            return;
        }

        let mut pb = sk::PathBuilder::new();
        pb.move_to(p[0][0], p[0][1]);
        pb.line_to(p[1][0], p[1][1]);
        pb.line_to(p[2][0], p[2][1]);
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };

        let [cr, cg, cb, ca] = t.color.map(|c| c.clamp(0.0, 1.0));
        let Some(color) = sk::Color::from_rgba(cr, cg, cb, ca) else {
            return;
        };
        let mut paint = sk::Paint::default();
        paint.set_color(color);
        paint.anti_alias = self.anti_alias;

        pix.fill_path(
            &path,
            &paint,
            sk::FillRule::Winding,
            sk::Transform::identity(),
            None,
        );
    }
}

/// Twice the signed area of `(a, b, c)`.
fn edge(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}
