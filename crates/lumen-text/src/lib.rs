//! lumen-text: glyph measurement and drawing for pixel grids.
//!
//! Drawables never touch font files directly; they hold an opaque
//! [`FontHandle`] and ask it for per-character advances and for a text run
//! to be drawn at a baseline-left origin.
//! - [`PixelFont`]: TTF/OTF outlines rasterized with `fontdue` and thresholded to on/off pixels
//! - [`BlockFont`]: fixed-cell font, one solid block per glyph
//! - [`FontCache`]: loaded fonts keyed by path and pixel size

pub mod font;

pub use font::{
    BlockFont, FontCache, FontError, FontHandle, FontKey, GlyphFont, PixelFont, Result,
};
