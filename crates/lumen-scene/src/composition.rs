use std::time::Duration;

use lumen_core::{FrameBuffer, Result};

use crate::Component;

/// Display seam: receives each completed frame. Swapping or flushing the
/// frame to hardware is the sink's job.
pub trait FrameSink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;
}

/// An ordered stack of components rendered into one frame buffer.
///
/// Components paint in insertion order, so later ones overwrite earlier ones.
pub struct Composition {
    components: Vec<Box<dyn Component>>,
    frame_delay: Duration,
    looping: bool,
}

impl Composition {
    pub fn new(frame_delay: Duration) -> Self {
        Self {
            components: Vec::new(),
            frame_delay,
            looping: false,
        }
    }

    /// Animate every frame instead of drawing a single still.
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn push(&mut self, component: impl Component + 'static) {
        self.components.push(Box::new(component));
    }

    pub fn with(mut self, component: impl Component + 'static) -> Self {
        self.push(component);
        self
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Clear and draw every component once.
    pub fn draw(&mut self, frame: &mut FrameBuffer) {
        frame.clear();
        for component in &mut self.components {
            component.draw(frame);
        }
    }

    /// Clear and advance every component one frame.
    pub fn tick(&mut self, frame: &mut FrameBuffer) {
        frame.clear();
        for component in &mut self.components {
            component.tick(frame);
        }
    }

    /// `tick` when looping, `draw` otherwise.
    pub fn render_frame(&mut self, frame: &mut FrameBuffer) {
        if self.looping {
            self.tick(frame)
        } else {
            self.draw(frame)
        }
    }

    pub fn present(&self, frame: &FrameBuffer, sink: &mut dyn FrameSink) -> Result<()> {
        sink.present(frame)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use lumen_core::{Canvas, GridBounds, Point, Rgb};
    use lumen_surface::{Primitive, ShapeStyle, TextRun};
    use lumen_text::BlockFont;

    const GRID: GridBounds = GridBounds::new(32, 16);

    #[derive(Default)]
    struct CountingSink {
        frames: usize,
        lit: usize,
    }

    impl FrameSink for CountingSink {
        fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
            self.frames += 1;
            self.lit = frame.lit_points().len();
            Ok(())
        }
    }

    fn square(x: i32, color: Rgb) -> Primitive {
        let style = ShapeStyle::new(Point::new(x, 0), 4, 4).with_fill(Some(color));
        Primitive::rect(style, GRID).unwrap()
    }

    #[test]
    fn later_components_paint_over_earlier_ones() {
        let red = Rgb::rgb(255, 0, 0);
        let green = Rgb::rgb(0, 255, 0);
        let mut comp = Composition::new(Duration::from_millis(40))
            .with(square(0, red))
            .with(square(2, green));
        let mut frame = FrameBuffer::new(GRID);
        comp.draw(&mut frame);
        assert_eq!(frame.pixel(1, 1), Some(red));
        assert_eq!(frame.pixel(2, 1), Some(green));
        assert_eq!(frame.lit_points().len(), 24);
    }

    #[test]
    fn each_frame_starts_from_black() {
        let text = TextRun::new(Point::new(40, 8), "A", Arc::new(BlockFont::default()), Rgb::WHITE);
        let mut comp = Composition::new(Duration::ZERO).with_looping(true).with(text);
        let mut frame = FrameBuffer::new(GRID);
        frame.set_pixel(0, 0, Rgb::WHITE);
        comp.render_frame(&mut frame);
        // The text sits off-canvas, so nothing should survive the clear.
        assert!(frame.lit_points().is_empty());
    }

    #[test]
    fn present_hands_frame_to_sink() {
        let mut comp = Composition::new(Duration::ZERO).with(square(0, Rgb::WHITE));
        let mut frame = FrameBuffer::new(GRID);
        let mut sink = CountingSink::default();
        for _ in 0..3 {
            comp.render_frame(&mut frame);
            comp.present(&frame, &mut sink).unwrap();
        }
        assert_eq!(sink.frames, 3);
        assert_eq!(sink.lit, 16);
    }
}
