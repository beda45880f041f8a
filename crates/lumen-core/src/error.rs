//! Error types for construction of drawables.

use thiserror::Error;

/// Result type for drawing operations.
pub type Result<T> = std::result::Result<T, DrawError>;

/// Invalid-parameter errors raised while constructing shapes, text and animators.
///
/// Drawing itself never fails; every check happens up front.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    /// Width or height is not strictly positive.
    #[error("dimensions must be greater than 0 (got {width}x{height})")]
    InvalidDimensions { width: i32, height: i32 },

    /// A color channel fell outside [0, 255].
    #[error("color channel {channel} out of range [0,255]: {value}")]
    ColorChannel { channel: char, value: i32 },

    /// A color string was neither `#rrggbb` nor a known color name.
    #[error("unrecognized color: {0}")]
    InvalidColor(String),

    /// Stroke weight exceeds half the shape height.
    #[error("stroke weight {weight} cannot be greater than half the height ({max})")]
    StrokeTooWide { weight: i32, max: i32 },

    /// Stroke weight is negative.
    #[error("stroke weight cannot be negative: {0}")]
    NegativeStroke(i32),

    /// Lines need at least one pixel of stroke.
    #[error("line stroke weight must be at least 1: {0}")]
    InvalidLineWeight(i32),

    /// Scroll mode string not one of once / loop / bounce.
    #[error("unknown scroll mode: {0}")]
    UnknownScrollMode(String),

    /// A ticker needs at least one message.
    #[error("ticker requires at least one message")]
    EmptyTicker,

    /// Editor property rejected its value or mode.
    #[error("invalid property: {0}")]
    InvalidProperty(String),

    /// Bitmap could not be loaded.
    #[error("image error: {0}")]
    Image(String),
}
