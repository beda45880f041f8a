use lumen_core::Canvas;
use lumen_surface::{Icon, Line, Primitive, Shape, TextRun};

use crate::{ScrollingText, Ticker};

/// A drawable placed in a [`Composition`](crate::Composition).
///
/// `draw` renders the current state; `tick` advances one frame and renders.
/// Static drawables only implement `draw`.
pub trait Component {
    fn draw(&mut self, canvas: &mut dyn Canvas);

    fn tick(&mut self, canvas: &mut dyn Canvas) {
        self.draw(canvas);
    }
}

impl Component for Primitive {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        Shape::draw(self, canvas);
    }
}

impl Component for Line {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        Shape::draw(self, canvas);
    }
}

impl Component for TextRun {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        TextRun::draw(self, canvas);
    }
}

impl Component for Icon {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        Icon::draw(self, canvas);
    }
}

impl Component for ScrollingText {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        ScrollingText::draw(self, canvas);
    }

    fn tick(&mut self, canvas: &mut dyn Canvas) {
        ScrollingText::tick(self, canvas);
    }
}

impl Component for Ticker {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        Ticker::draw(self, canvas);
    }

    fn tick(&mut self, canvas: &mut dyn Canvas) {
        Ticker::tick(self, canvas);
    }
}
