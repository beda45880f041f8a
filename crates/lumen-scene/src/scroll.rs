//! Horizontally scrolling text.
//!
//! A [`ScrollingText`] wraps a [`TextRun`] and moves it by `rate` pixels per
//! tick. The run's origin is the rest position: the start of every scroll,
//! the loop reset point and one of the two bounce limits.

use std::fmt;
use std::str::FromStr;

use lumen_core::{Canvas, DrawError};
use lumen_surface::TextRun;
use serde::{Deserialize, Serialize};

/// What happens when the text reaches the edge of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollMode {
    /// Scroll off the canvas once, then stop.
    #[default]
    Once,
    /// Repeat continuously, trailing a second copy `spacing` pixels behind.
    Loop,
    /// Reverse direction at each limit.
    Bounce,
}

impl FromStr for ScrollMode {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" => Ok(Self::Once),
            "loop" => Ok(Self::Loop),
            "bounce" => Ok(Self::Bounce),
            _ => Err(DrawError::UnknownScrollMode(s.to_string())),
        }
    }
}

impl fmt::Display for ScrollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Once => "once",
            Self::Loop => "loop",
            Self::Bounce => "bounce",
        })
    }
}

/// Animator state between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Paused at the rest position before moving.
    HoldStart,
    Scrolling,
    /// Paused at a bounce limit after reversing.
    HoldBounce,
    /// `Once` mode has left the canvas; position is frozen.
    Done,
}

pub struct ScrollingText {
    text: TextRun,
    rate: f64,
    mode: ScrollMode,
    delay_frames: u32,
    spacing: i32,
    scroll_index: i64,
    delay_count: u32,
    direction: i64,
    measured_length: i32,
    phase: Phase,
    last_drawn_x: Option<i32>,
}

impl fmt::Debug for ScrollingText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollingText")
            .field("content", &self.text.content())
            .field("rate", &self.rate)
            .field("mode", &self.mode)
            .field("scroll_index", &self.scroll_index)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl ScrollingText {
    pub fn new(text: TextRun, rate: f64, mode: ScrollMode) -> Self {
        let measured_length = text.measure();
        tracing::debug!(content = text.content(), rate, %mode, measured_length, "scrolling text");
        Self {
            text,
            rate,
            mode,
            delay_frames: 0,
            spacing: 0,
            scroll_index: 0,
            delay_count: 0,
            direction: 1,
            measured_length,
            phase: Phase::Scrolling,
            last_drawn_x: None,
        }
    }

    /// Frames to hold at the rest position (and at each bounce limit).
    pub fn with_delay(mut self, frames: u32) -> Self {
        self.delay_frames = frames;
        self.phase = if frames > 0 {
            Phase::HoldStart
        } else {
            Phase::Scrolling
        };
        self
    }

    /// Gap between the two copies in `Loop` mode.
    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn text(&self) -> &TextRun {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut TextRun {
        &mut self.text
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scroll_index(&self) -> i64 {
        self.scroll_index
    }

    pub fn measured_length(&self) -> i32 {
        self.measured_length
    }

    /// Left edge used by the most recent draw, if any.
    pub fn last_drawn_x(&self) -> Option<i32> {
        self.last_drawn_x
    }

    fn rest_x(&self) -> f64 {
        self.text.origin().x as f64
    }

    fn position(&self) -> f64 {
        self.rest_x() + self.rate * self.scroll_index as f64
    }

    /// Distance from one loop copy to the next, signed against the motion.
    fn copy_offset(&self) -> f64 {
        self.rate.signum() * (self.measured_length + self.spacing) as f64
    }

    fn draw_text_at(&mut self, canvas: &mut dyn Canvas, pos: f64) {
        let x = pos.round() as i32;
        self.measured_length = self.text.draw_at(canvas, x);
        self.last_drawn_x = Some(x);
    }

    /// Draw at the current position without advancing.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        self.measured_length = self.text.measure();
        let pos = self.position();
        self.draw_text_at(canvas, pos);
        if self.mode == ScrollMode::Loop && self.rate != 0.0 {
            self.text.draw_at(canvas, (pos - self.copy_offset()).round() as i32);
        }
    }

    /// Advance one frame and draw.
    pub fn tick(&mut self, canvas: &mut dyn Canvas) {
        if self.rate == 0.0 {
            self.measured_length = self.text.draw(canvas);
            self.last_drawn_x = Some(self.text.anchor().x);
            return;
        }

        self.measured_length = self.text.measure();
        let width = canvas.width() as f64;
        let len = self.measured_length as f64;
        let pos = self.position();

        match self.phase {
            Phase::Done => {
                self.draw_text_at(canvas, pos);
                return;
            }
            Phase::HoldStart | Phase::HoldBounce => {
                if self.delay_count < self.delay_frames {
                    self.delay_count += 1;
                    self.draw_text_at(canvas, pos);
                    return;
                }
                self.delay_count = 0;
                self.phase = Phase::Scrolling;
            }
            Phase::Scrolling => {}
        }

        match self.mode {
            ScrollMode::Once => {
                let exited = if self.rate < 0.0 {
                    pos + len < 0.0
                } else {
                    pos > width
                };
                if exited {
                    tracing::trace!(index = self.scroll_index, pos, "scroll finished");
                    self.phase = Phase::Done;
                    self.draw_text_at(canvas, pos);
                    return;
                }
            }
            ScrollMode::Loop => {
                let rest = self.rest_x();
                let second = pos - self.copy_offset();
                let wrapped = if self.rate < 0.0 {
                    second <= rest
                } else {
                    second >= rest
                };
                if wrapped {
                    tracing::trace!(index = self.scroll_index, "scroll loop reset");
                    self.scroll_index = 0;
                    self.draw_text_at(canvas, rest);
                    if self.delay_frames > 0 {
                        self.phase = Phase::HoldStart;
                    }
                    return;
                }
            }
            ScrollMode::Bounce => {
                let rest = self.rest_x();
                let left = rest.min(width - len);
                let right = rest.max(width - len);
                let moving_left = self.rate * (self.direction as f64) < 0.0;
                let reverse = if moving_left { pos < left } else { pos > right };
                if reverse {
                    self.direction = -self.direction;
                    tracing::trace!(
                        index = self.scroll_index,
                        pos,
                        direction = self.direction,
                        "scroll bounce"
                    );
                    // The step below moves back inside; the hold starts next tick.
                    if self.delay_frames > 0 {
                        self.phase = Phase::HoldBounce;
                    }
                }
            }
        }

        self.draw_text_at(canvas, pos);
        if self.mode == ScrollMode::Loop {
            self.text.draw_at(canvas, (pos - self.copy_offset()).round() as i32);
        }
        self.scroll_index += self.direction;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use lumen_core::{FrameBuffer, GridBounds, Point, Rgb};
    use lumen_text::BlockFont;

    fn run(content: &str) -> TextRun {
        TextRun::new(Point::new(0, 10), content, Arc::new(BlockFont::default()), Rgb::WHITE)
    }

    fn grid() -> FrameBuffer {
        FrameBuffer::new(GridBounds::new(64, 32))
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("LOOP".parse::<ScrollMode>().unwrap(), ScrollMode::Loop);
        assert_eq!(" bounce ".parse::<ScrollMode>().unwrap(), ScrollMode::Bounce);
        assert_eq!("once".parse::<ScrollMode>().unwrap(), ScrollMode::Once);
        assert_eq!(
            "wiggle".parse::<ScrollMode>().unwrap_err(),
            DrawError::UnknownScrollMode("wiggle".into())
        );
    }

    #[test]
    fn zero_rate_draws_in_place() {
        let mut scroll = ScrollingText::new(run("HI"), 0.0, ScrollMode::Loop);
        let mut fb = grid();
        for _ in 0..5 {
            scroll.tick(&mut fb);
        }
        assert_eq!(scroll.scroll_index(), 0);
        assert_eq!(scroll.last_drawn_x(), Some(0));
    }

    #[test]
    fn start_hold_delays_motion() {
        let mut scroll = ScrollingText::new(run("HI"), -1.0, ScrollMode::Once).with_delay(3);
        let mut fb = grid();
        for _ in 0..3 {
            scroll.tick(&mut fb);
            assert_eq!(scroll.scroll_index(), 0);
            assert_eq!(scroll.phase(), Phase::HoldStart);
        }
        scroll.tick(&mut fb);
        assert_eq!(scroll.phase(), Phase::Scrolling);
        assert_eq!(scroll.scroll_index(), 1);
    }

    #[test]
    fn once_freezes_after_leaving_the_left_edge() {
        let mut scroll = ScrollingText::new(run("ABCD"), -2.0, ScrollMode::Once);
        let mut fb = grid();
        for _ in 0..40 {
            scroll.tick(&mut fb);
        }
        assert_eq!(scroll.phase(), Phase::Done);
        assert_eq!(scroll.last_drawn_x(), Some(-22));
        let frozen = scroll.scroll_index();
        scroll.tick(&mut fb);
        assert_eq!(scroll.scroll_index(), frozen);
    }

    #[test]
    fn once_to_the_right_stops_past_the_width() {
        let mut scroll = ScrollingText::new(run("A"), 3.0, ScrollMode::Once);
        let mut fb = grid();
        for _ in 0..50 {
            scroll.tick(&mut fb);
        }
        assert_eq!(scroll.phase(), Phase::Done);
        assert_eq!(scroll.last_drawn_x(), Some(66));
    }

    #[test]
    fn bounce_reverses_and_holds() {
        let mut scroll = ScrollingText::new(run("ABCD"), -1.0, ScrollMode::Bounce).with_delay(2);
        let mut fb = grid();
        // Short text bounces between x = 0 and x = 44; the first leftward step
        // already crosses 0.
        for _ in 0..2 {
            scroll.tick(&mut fb);
        }
        assert_eq!(scroll.phase(), Phase::HoldStart);
        scroll.tick(&mut fb);
        assert_eq!(scroll.phase(), Phase::Scrolling);
        assert_eq!(scroll.scroll_index(), 1);
        // Overshoot to -1 once, then hold back at the limit.
        scroll.tick(&mut fb);
        assert_eq!(scroll.phase(), Phase::HoldBounce);
        assert_eq!(scroll.last_drawn_x(), Some(-1));
        assert_eq!(scroll.scroll_index(), 0);
        for _ in 0..2 {
            scroll.tick(&mut fb);
            assert_eq!(scroll.phase(), Phase::HoldBounce);
            assert_eq!(scroll.last_drawn_x(), Some(0));
            assert_eq!(scroll.scroll_index(), 0);
        }
        scroll.tick(&mut fb);
        assert_eq!(scroll.phase(), Phase::Scrolling);
        assert_eq!(scroll.scroll_index(), -1);
    }

    #[test]
    fn loop_draws_a_trailing_copy() {
        let mut scroll = ScrollingText::new(run("AAAAAAAAAAAAAAAA"), -2.0, ScrollMode::Loop)
            .with_spacing(10);
        let mut fb = grid();
        for _ in 0..40 {
            fb.clear();
            scroll.tick(&mut fb);
        }
        // Index 39 puts the first copy at -78 and the second at 12.
        assert_eq!(scroll.last_drawn_x(), Some(-78));
        assert_eq!(fb.pixel(12, 10), Some(Rgb::WHITE));
        assert_eq!(fb.pixel(11, 10), Some(Rgb::BLACK));
    }
}
