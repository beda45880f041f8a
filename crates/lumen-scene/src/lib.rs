//! lumen-scene: animation and frame composition on top of `lumen-surface`.
//!
//! - [`ScrollingText`]: a text run moved by a fixed rate per tick, in
//!   [`ScrollMode::Once`], [`ScrollMode::Loop`] or [`ScrollMode::Bounce`]
//! - [`Ticker`]: several messages scrolled in sequence with fixed spacing
//! - [`Component`] / [`Composition`]: the per-frame draw/tick contract and an
//!   ordered stack of components rendered into a [`FrameBuffer`](lumen_core::FrameBuffer)
//! - [`Property`]: typed, editable component parameters
//!
//! Everything here is driven synchronously by the caller, one `tick` per
//! frame. Nothing blocks, sleeps or spawns.

mod component;
mod composition;
pub mod property;
pub mod scroll;
mod ticker;

pub use component::Component;
pub use composition::{Composition, FrameSink};
pub use property::{Property, PropertyMode, PropertyValue};
pub use scroll::{Phase, ScrollMode, ScrollingText};
pub use ticker::Ticker;
