use std::path::Path;

use lumen_core::{Canvas, Rgb};

use super::{FontError, GlyphFont, Result};

/// Coverage at or above this value lights a pixel; LED grids have no
/// anti-aliasing.
const COVERAGE_THRESHOLD: u8 = 128;

/// Outline font rasterized with `fontdue` at a fixed pixel size.
pub struct PixelFont {
    font: fontdue::Font,
    px: f32,
}

impl std::fmt::Debug for PixelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelFont")
            .field("px", &self.px)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl PixelFont {
    /// Parse TTF/OTF bytes and fix the rendering size in pixels per em.
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self> {
        if !(px > 0.0) {
            return Err(FontError::InvalidSize(px));
        }
        let settings = fontdue::FontSettings {
            scale: px,
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(bytes, settings)
            .map_err(|e| FontError::InvalidFont(e.to_string()))?;
        tracing::debug!(px, glyphs = font.glyph_count(), "loaded pixel font");
        Ok(Self { font, px })
    }

    pub fn from_path(path: impl AsRef<Path>, px: f32) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(&data, px)
    }

    pub fn px(&self) -> f32 {
        self.px
    }
}

impl GlyphFont for PixelFont {
    fn char_advance(&self, ch: char) -> i32 {
        self.font.metrics(ch, self.px).advance_width.round() as i32
    }

    fn draw_text(&self, canvas: &mut dyn Canvas, x: i32, y: i32, color: Rgb, text: &str) -> i32 {
        let mut pen = x;
        for ch in text.chars() {
            if self.font.lookup_glyph_index(ch) == 0 && !ch.is_whitespace() {
                tracing::warn!(?ch, "glyph missing from font; drawing notdef");
            }
            let (metrics, coverage) = self.font.rasterize(ch, self.px);
            // ymin is the bitmap bottom relative to the baseline, positive up.
            let left = pen + metrics.xmin;
            let top = y - (metrics.height as i32 + metrics.ymin) + 1;
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    if coverage[row * metrics.width + col] >= COVERAGE_THRESHOLD {
                        canvas.set_pixel(left + col as i32, top + row as i32, color);
                    }
                }
            }
            pen += metrics.advance_width.round() as i32;
        }
        pen - x
    }

    fn line_height(&self) -> i32 {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|lm| lm.new_line_size.round() as i32)
            .unwrap_or(self.px.ceil() as i32)
    }
}
