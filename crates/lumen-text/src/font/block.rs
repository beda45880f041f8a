use lumen_core::{Canvas, Rgb};

use super::GlyphFont;

/// Fixed-cell font that draws every visible character as a solid block.
///
/// Useful for layout previews and anywhere exact glyph shapes don't matter:
/// each glyph occupies `glyph_width` columns and `height` rows ending at the
/// baseline, and advances by `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFont {
    pub advance: i32,
    pub glyph_width: i32,
    pub height: i32,
}

impl Default for BlockFont {
    /// Matches the common 5x7 LED font cell with one column of tracking.
    fn default() -> Self {
        Self {
            advance: 5,
            glyph_width: 4,
            height: 7,
        }
    }
}

impl BlockFont {
    pub fn new(advance: i32, glyph_width: i32, height: i32) -> Self {
        Self {
            advance: advance.max(0),
            glyph_width: glyph_width.clamp(0, advance.max(0)),
            height: height.max(0),
        }
    }
}

impl GlyphFont for BlockFont {
    fn char_advance(&self, _ch: char) -> i32 {
        self.advance
    }

    fn draw_text(&self, canvas: &mut dyn Canvas, x: i32, y: i32, color: Rgb, text: &str) -> i32 {
        let mut pen = x;
        for ch in text.chars() {
            if !ch.is_whitespace() {
                for gy in (y - self.height + 1)..=y {
                    for gx in pen..pen + self.glyph_width {
                        canvas.set_pixel(gx, gy, color);
                    }
                }
            }
            pen += self.advance;
        }
        pen - x
    }

    fn line_height(&self) -> i32 {
        self.height + 1
    }
}
