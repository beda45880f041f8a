use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{DrawError, Result};

/// 8-bit sRGB color triple as written to the LED grid. No alpha: compositing
/// happens before pixels reach the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Infallible constructor for values already known to be in range.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from integer channels, rejecting anything outside [0, 255].
    pub fn new(r: i32, g: i32, b: i32) -> Result<Self> {
        Ok(Self {
            r: channel('r', r)?,
            g: channel('g', g)?,
            b: channel('b', b)?,
        })
    }

    /// Parse `#rrggbb` (or `#rgb`) hex, or a CSS color name such as `"teal"`.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let srgb: Srgb<u8> = if trimmed.starts_with('#') {
            trimmed
                .parse()
                .map_err(|_| DrawError::InvalidColor(s.to_string()))?
        } else {
            palette::named::from_str(&trimmed.to_ascii_lowercase())
                .ok_or_else(|| DrawError::InvalidColor(s.to_string()))?
        };
        Ok(Self::from(srgb))
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_black(self) -> bool {
        self == Self::BLACK
    }
}

fn channel(name: char, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| DrawError::ColorChannel {
        channel: name,
        value,
    })
}

impl From<Srgb<u8>> for Rgb {
    fn from(c: Srgb<u8>) -> Self {
        Self::rgb(c.red, c.green, c.blue)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(c: Rgb) -> Self {
        image::Rgb(c.to_array())
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(c: image::Rgb<u8>) -> Self {
        let [r, g, b] = c.0;
        Self::rgb(r, g, b)
    }
}
