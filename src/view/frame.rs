//! Frame abstraction for drawing primitives
//!
//! All coordinates are window pixels. Drawing is clipped to the frame and,
//! when set, to the clip rectangle.

use std::collections::HashMap;

use tsvgrid::font::{FontFace, Glyph};
use tsvgrid::geometry::Rect;
use tsvgrid::theme::Color;

/// Rasterized glyphs keyed by character; one face per renderer
pub type GlyphCache = HashMap<char, Glyph>;

/// Blend a foreground color onto a background color.
///
/// Both colors are ARGB (0xAARRGGBB); `alpha` is the blend ratio.
/// Returns the blended color with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let mix = |shift: u32| {
        let b = ((bg >> shift) & 0xFF) as f32;
        let f = ((fg >> shift) & 0xFF) as f32;
        (b * (1.0 - alpha) + f * alpha) as u32
    };
    0xFF000000 | (mix(16) << 16) | (mix(8) << 8) | mix(0)
}

/// Pixel bounds (inclusive start, exclusive end)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PixelBounds {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<PixelBounds>,
}

impl<'a> Frame<'a> {
    /// Wrap a pixel buffer; a short buffer shrinks the usable height
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    /// Constrain later drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        self.clip = None;
        self.clip = Some(self.bounds(rect));
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    /// Intersection of `rect` with the frame and the clip
    fn bounds(&self, rect: Rect) -> PixelBounds {
        let limit = self.clip.unwrap_or(PixelBounds {
            x0: 0,
            y0: 0,
            x1: self.width,
            y1: self.height,
        });
        // Negative floats saturate to zero
        let x0 = (rect.x.round() as usize).max(limit.x0);
        let y0 = (rect.y.round() as usize).max(limit.y0);
        let x1 = (rect.right().round() as usize).min(limit.x1);
        let y1 = (rect.bottom().round() as usize).min(limit.y1);
        PixelBounds {
            x0,
            y0,
            x1: x1.max(x0),
            y1: y1.max(y0),
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.buffer.fill(color.with_alpha(255).to_argb_u32());
    }

    /// Fill a rectangle, blending when the color is translucent
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.a == 0 {
            return;
        }
        let b = self.bounds(rect);
        let argb = color.to_argb_u32();
        let alpha = color.a as f32 / 255.0;

        for y in b.y0..b.y1 {
            let row = &mut self.buffer[y * self.width + b.x0..y * self.width + b.x1];
            if color.a == 255 {
                row.fill(argb);
            } else {
                for px in row {
                    *px = blend_colors(*px, argb, alpha);
                }
            }
        }
    }

    /// 1px outline just inside `rect`
    pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        self.fill_rect(Rect::new(x, y, width, 1.0), color);
        self.fill_rect(Rect::new(x, y + height - 1.0, width, 1.0), color);
        self.fill_rect(Rect::new(x, y + 1.0, 1.0, height - 2.0), color);
        self.fill_rect(Rect::new(x + width - 1.0, y + 1.0, 1.0, height - 2.0), color);
    }

    /// Filled rectangle with an outline of `thickness` pixels
    pub fn draw_bordered_rect(&mut self, rect: Rect, fill: Color, border: Color, thickness: f32) {
        self.fill_rect(rect, fill);
        let t = thickness.max(1.0);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, t), border);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.width, t), border);
        self.fill_rect(Rect::new(rect.x, rect.y + t, t, rect.height - 2.0 * t), border);
        self.fill_rect(
            Rect::new(rect.right() - t, rect.y + t, t, rect.height - 2.0 * t),
            border,
        );
    }

    /// Blend one coverage value onto a pixel (respects frame and clip)
    #[inline]
    fn blend_coverage(&mut self, x: isize, y: isize, color: u32, coverage: u8) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let inside = self.clip.map_or(x < self.width && y < self.height, |c| {
            x >= c.x0 && x < c.x1 && y >= c.y0 && y < c.y1
        });
        if inside {
            let idx = y * self.width + x;
            self.buffer[idx] = blend_colors(self.buffer[idx], color, coverage as f32 / 255.0);
        }
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> u32 {
        self.buffer[y * self.width + x]
    }
}

/// Draws text with a font face and its glyph cache
pub struct TextPainter<'a> {
    face: &'a FontFace,
    glyph_cache: &'a mut GlyphCache,
}

impl<'a> TextPainter<'a> {
    pub fn new(face: &'a FontFace, glyph_cache: &'a mut GlyphCache) -> Self {
        Self { face, glyph_cache }
    }

    /// Draw `text` with its line top at `(x, y)`
    pub fn draw(&mut self, frame: &mut Frame, x: f32, y: f32, text: &str, color: Color) {
        let argb = color.to_argb_u32();
        let baseline = y + self.face.ascent();
        let spacing = self.face.spacing();
        let mut pen_x = x;

        for ch in text.chars() {
            let glyph = self
                .glyph_cache
                .entry(ch)
                .or_insert_with(|| self.face.rasterize(ch));

            let top = (baseline - glyph.height as f32 - glyph.ymin as f32).round() as isize;
            let left = pen_x.round() as isize + glyph.xmin as isize;

            for gy in 0..glyph.height {
                for gx in 0..glyph.width {
                    let coverage = glyph.coverage[gy * glyph.width + gx];
                    if coverage > 0 {
                        frame.blend_coverage(left + gx as isize, top + gy as isize, argb, coverage);
                    }
                }
            }

            pen_x += glyph.advance + spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsvgrid::font::BuiltinFont;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn test_fill_rect_opaque() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);

        frame.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), RED);

        assert_eq!(frame.pixel(15, 15), 0xFFFF0000);
        assert_eq!(frame.pixel(29, 29), 0xFFFF0000);
        assert_eq!(frame.pixel(30, 30), 0);
        assert_eq!(frame.pixel(5, 5), 0);
    }

    #[test]
    fn test_fill_rect_translucent_blends() {
        let mut buffer = vec![0xFFFFFFFF_u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);

        frame.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::rgba(0, 0, 0, 128));

        let r = (frame.pixel(5, 5) >> 16) & 0xFF;
        assert!(r > 100 && r < 160, "R channel: {}", r);
    }

    #[test]
    fn test_negative_and_oversized_rects_are_clipped() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);

        frame.fill_rect(Rect::new(-5.0, -5.0, 8.0, 8.0), RED);
        frame.fill_rect(Rect::new(8.0, 8.0, 50.0, 50.0), RED);

        assert_eq!(frame.pixel(2, 2), 0xFFFF0000);
        assert_eq!(frame.pixel(3, 3), 0);
        assert_eq!(frame.pixel(9, 9), 0xFFFF0000);
    }

    #[test]
    fn test_clip_restricts_fill() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);
        frame.set_clip(Rect::new(10.0, 10.0, 30.0, 30.0));

        frame.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0), RED);

        assert_eq!(frame.pixel(10, 10), 0xFFFF0000);
        assert_eq!(frame.pixel(39, 39), 0xFFFF0000);
        assert_eq!(frame.pixel(40, 40), 0);
        assert_eq!(frame.pixel(5, 5), 0);

        frame.clear_clip();
        frame.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0), RED);
        assert_eq!(frame.pixel(50, 50), 0xFFFF0000);
    }

    #[test]
    fn test_short_buffer_limits_height() {
        let mut buffer = vec![0u32; 10 * 5];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        // Would index past the buffer without the height adjustment
        frame.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), RED);
        assert_eq!(frame.pixel(9, 4), 0xFFFF0000);
    }

    #[test]
    fn test_bordered_rect() {
        let mut buffer = vec![0u32; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);
        let blue = Color::rgb(0, 0, 255);

        frame.draw_bordered_rect(Rect::new(2.0, 2.0, 10.0, 10.0), blue, RED, 2.0);

        assert_eq!(frame.pixel(2, 2), 0xFFFF0000);
        assert_eq!(frame.pixel(3, 6), 0xFFFF0000);
        assert_eq!(frame.pixel(6, 6), 0xFF0000FF);
        assert_eq!(frame.pixel(11, 11), 0xFFFF0000);
    }

    #[test]
    fn test_text_respects_clip_and_caches_glyphs() {
        let face = FontFace::Builtin(BuiltinFont::new(8.0, 1.0));
        let mut cache = GlyphCache::new();
        let mut buffer = vec![0u32; 40 * 10];
        let mut frame = Frame::new(&mut buffer, 40, 10);
        frame.set_clip(Rect::new(0.0, 0.0, 6.0, 10.0));

        TextPainter::new(&face, &mut cache).draw(&mut frame, 0.0, 0.0, "||", RED);

        // First bar at x=2 inside the clip, second at x=9 outside
        assert_ne!(frame.pixel(2, 4), 0);
        assert_eq!(frame.pixel(9, 4), 0);
        assert_eq!(cache.len(), 1);
    }
}
