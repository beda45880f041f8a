pub mod block;
pub mod loader;
pub mod pixel;

pub use block::BlockFont;
pub use loader::{FontCache, FontKey};
pub use pixel::PixelFont;

use std::sync::Arc;

use lumen_core::{Canvas, Rgb};
use thiserror::Error;

/// Errors that can occur while loading fonts.
#[derive(Error, Debug)]
pub enum FontError {
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid font data: {0}")]
    InvalidFont(String),

    #[error("font size must be positive: {0}")]
    InvalidSize(f32),
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;

/// Text service consumed by text runs and animators.
///
/// `y` in [`GlyphFont::draw_text`] is the baseline; `x` is the left edge of
/// the first glyph's advance box.
pub trait GlyphFont: Send + Sync {
    /// Horizontal advance of one character, in pixels.
    fn char_advance(&self, ch: char) -> i32;

    /// Draw `text` and return its rendered width (sum of advances).
    fn draw_text(&self, canvas: &mut dyn Canvas, x: i32, y: i32, color: Rgb, text: &str) -> i32;

    /// Distance from one baseline to the next.
    fn line_height(&self) -> i32;

    fn measure(&self, text: &str) -> i32 {
        text.chars().map(|ch| self.char_advance(ch)).sum()
    }
}

/// Shared, opaque font reference held by drawables.
pub type FontHandle = Arc<dyn GlyphFont>;
