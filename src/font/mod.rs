//! Font faces for measuring and rasterizing grid text
//!
//! A face is either a TrueType file loaded with fontdue or the built-in
//! bitmap font. Both are sized once at load time.

mod builtin;
mod resolve;

pub use builtin::BuiltinFont;
pub use resolve::{candidate_paths, load_font_file, resolve_font, FontError, FONT_ENV_VAR};

use crate::table::TextMeasure;

/// Coverage bitmap for one character, positioned relative to the pen
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub width: usize,
    pub height: usize,
    /// Horizontal offset from the pen position
    pub xmin: i32,
    /// Offset of the bitmap bottom above the baseline
    pub ymin: i32,
    pub advance: f32,
    /// Row-major alpha values, `width * height` long
    pub coverage: Vec<u8>,
}

/// A TrueType font at a fixed pixel size
pub struct TrueTypeFace {
    font: fontdue::Font,
    size: f32,
    spacing: f32,
    ascent: f32,
    line_height: f32,
}

impl TrueTypeFace {
    pub fn new(font: fontdue::Font, size: f32, spacing: f32) -> Self {
        let (ascent, line_height) = font
            .horizontal_line_metrics(size)
            .map(|m| (m.ascent, m.new_line_size))
            .unwrap_or((size * 0.8, size));
        Self {
            font,
            size,
            spacing,
            ascent,
            line_height,
        }
    }
}

/// The font used for all text in the grid
pub enum FontFace {
    TrueType(TrueTypeFace),
    Builtin(BuiltinFont),
}

impl FontFace {
    /// Extra gap inserted between adjacent characters
    pub fn spacing(&self) -> f32 {
        match self {
            FontFace::TrueType(face) => face.spacing,
            FontFace::Builtin(font) => font.spacing(),
        }
    }

    /// Distance from the top of a line to the baseline
    pub fn ascent(&self) -> f32 {
        match self {
            FontFace::TrueType(face) => face.ascent,
            FontFace::Builtin(font) => font.ascent(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontFace::Builtin(_))
    }

    /// Rasterize one character at the face's size
    pub fn rasterize(&self, ch: char) -> Glyph {
        match self {
            FontFace::TrueType(face) => {
                let (metrics, coverage) = face.font.rasterize(ch, face.size);
                Glyph {
                    width: metrics.width,
                    height: metrics.height,
                    xmin: metrics.xmin,
                    ymin: metrics.ymin,
                    advance: metrics.advance_width,
                    coverage,
                }
            }
            FontFace::Builtin(font) => font.rasterize(ch),
        }
    }

    fn advance(&self, ch: char) -> f32 {
        match self {
            FontFace::TrueType(face) => face.font.metrics(ch, face.size).advance_width,
            FontFace::Builtin(font) => font.advance(),
        }
    }
}

impl TextMeasure for FontFace {
    fn text_width(&self, text: &str) -> f32 {
        let (count, advance) = text
            .chars()
            .fold((0usize, 0.0f32), |(n, w), ch| (n + 1, w + self.advance(ch)));
        if count == 0 {
            return 0.0;
        }
        advance + self.spacing() * (count - 1) as f32
    }

    fn line_height(&self) -> f32 {
        match self {
            FontFace::TrueType(face) => face.line_height,
            FontFace::Builtin(font) => font.line_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_width_includes_spacing() {
        let face = FontFace::Builtin(BuiltinFont::new(16.0, 1.0));
        // scale 2: 12px advance per char, 1px between chars
        assert_eq!(face.text_width(""), 0.0);
        assert_eq!(face.text_width("a"), 12.0);
        assert_eq!(face.text_width("abc"), 38.0);
    }

    #[test]
    fn test_unicode_counts_chars_not_bytes() {
        let face = FontFace::Builtin(BuiltinFont::new(8.0, 0.0));
        assert_eq!(face.text_width("é"), face.text_width("e"));
    }
}
