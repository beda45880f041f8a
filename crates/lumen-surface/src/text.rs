use lumen_core::{Canvas, Point, Rgb};
use lumen_text::FontHandle;

/// A single line of static text.
///
/// `origin` is where the caller placed the text: the left edge of the first
/// glyph, or the right edge of the last one when right-aligned. `y` is always
/// the baseline. The effective draw position is kept in `anchor` and is
/// refreshed from the current content on every draw.
#[derive(Clone)]
pub struct TextRun {
    origin: Point,
    anchor: Point,
    content: String,
    font: FontHandle,
    color: Rgb,
    right_aligned: bool,
}

impl std::fmt::Debug for TextRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRun")
            .field("origin", &self.origin)
            .field("anchor", &self.anchor)
            .field("content", &self.content)
            .field("color", &self.color)
            .field("right_aligned", &self.right_aligned)
            .finish_non_exhaustive()
    }
}

impl TextRun {
    pub fn new(origin: Point, content: impl Into<String>, font: FontHandle, color: Rgb) -> Self {
        Self {
            origin,
            anchor: origin,
            content: content.into(),
            font,
            color,
            right_aligned: false,
        }
    }

    pub fn right_aligned(mut self, right_aligned: bool) -> Self {
        self.right_aligned = right_aligned;
        self
    }

    /// Rendered width of the current content.
    pub fn measure(&self) -> i32 {
        self.font.measure(&self.content)
    }

    fn realign(&mut self) {
        self.anchor = if self.right_aligned {
            Point::new(self.origin.x - self.measure(), self.origin.y)
        } else {
            self.origin
        };
    }

    /// Draw at the aligned anchor and return the rendered width.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) -> i32 {
        self.realign();
        self.font
            .draw_text(canvas, self.anchor.x, self.anchor.y, self.color, &self.content)
    }

    /// Draw with the left edge at `x`, ignoring alignment. Used by animators
    /// that own the horizontal position.
    pub fn draw_at(&self, canvas: &mut dyn Canvas, x: i32) -> i32 {
        self.font
            .draw_text(canvas, x, self.anchor.y, self.color, &self.content)
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.realign();
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
        self.realign();
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn font(&self) -> &FontHandle {
        &self.font
    }

    pub fn is_right_aligned(&self) -> bool {
        self.right_aligned
    }
}
