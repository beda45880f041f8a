//! News-ticker style scrolling of several messages in sequence.
//!
//! Messages enter from the edge opposite to the direction of motion, one at a
//! time, each trailing the previous by `spacing` pixels, and retire once they
//! have fully left the canvas. The active window is tracked with two
//! monotonically increasing counters (`admitted`, `retired`); message indices
//! are those counters taken modulo the message count, so the window only ever
//! advances and an empty window is distinguishable from a full one.

use std::fmt;
use std::ops::Range;

use lumen_core::{Canvas, DrawError, Result, Rgb};
use lumen_text::FontHandle;

pub struct Ticker {
    messages: Vec<String>,
    font: FontHandle,
    color: Rgb,
    start_x: i32,
    baseline: i32,
    rate: f64,
    spacing: i32,
    wrap: bool,
    delay_frames: u32,
    delay_count: u32,
    message_x: Vec<f64>,
    message_len: Vec<i32>,
    admitted: usize,
    retired: usize,
    moved: bool,
}

impl fmt::Debug for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticker")
            .field("messages", &self.messages)
            .field("rate", &self.rate)
            .field("wrap", &self.wrap)
            .field("active", &self.active_indices())
            .finish_non_exhaustive()
    }
}

impl Ticker {
    /// The first message starts at `start_x`; `baseline` is the text baseline
    /// shared by every message.
    pub fn new(
        messages: Vec<String>,
        font: FontHandle,
        color: Rgb,
        start_x: i32,
        baseline: i32,
        rate: f64,
    ) -> Result<Self> {
        if messages.is_empty() {
            return Err(DrawError::EmptyTicker);
        }
        let count = messages.len();
        let message_len: Vec<i32> = messages.iter().map(|m| font.measure(m)).collect();
        let mut message_x = vec![0.0; count];
        message_x[0] = start_x as f64;
        tracing::debug!(count, rate, start_x, "ticker");
        Ok(Self {
            messages,
            font,
            color,
            start_x,
            baseline,
            rate,
            spacing: 0,
            wrap: false,
            delay_frames: 0,
            delay_count: 0,
            message_x,
            message_len,
            admitted: 1,
            retired: 0,
            moved: false,
        })
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Cycle back to the first message after the last one instead of
    /// running through the list once.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Frames to hold the first message at `start_x` before moving.
    pub fn with_delay(mut self, frames: u32) -> Self {
        self.delay_frames = frames;
        self
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn message_x(&self, index: usize) -> f64 {
        self.message_x[index]
    }

    pub fn message_length(&self, index: usize) -> i32 {
        self.message_len[index]
    }

    fn window(&self) -> Range<usize> {
        self.retired..self.admitted
    }

    /// Message indices currently on (or entering) the canvas, oldest first.
    pub fn active_indices(&self) -> Vec<usize> {
        let count = self.messages.len();
        self.window().map(|k| k % count).collect()
    }

    /// Without wrap, every message has been shown and has left the canvas.
    pub fn is_finished(&self) -> bool {
        !self.wrap && self.retired >= self.messages.len()
    }

    pub fn start_x(&self) -> i32 {
        self.start_x
    }

    fn render(&mut self, canvas: &mut dyn Canvas, advance: bool) {
        let count = self.messages.len();
        for k in self.window() {
            let i = k % count;
            let x = self.message_x[i].round() as i32;
            let len = self.font.draw_text(canvas, x, self.baseline, self.color, &self.messages[i]);
            self.message_len[i] = len;
            if advance {
                self.message_x[i] += self.rate;
            }
        }
    }

    /// Seed the next message behind the newest active one once the spacing
    /// margin behind it is on the canvas.
    fn admit(&mut self, width: f64) {
        let count = self.messages.len();
        if !self.wrap && self.admitted >= count {
            return;
        }
        // The next index is still on screen.
        if self.admitted - self.retired >= count {
            return;
        }
        let next = self.admitted % count;
        let spacing = self.spacing as f64;
        let next_len = self.font.measure(&self.messages[next]);

        let seed = if self.admitted == self.retired {
            if self.rate < 0.0 {
                Some(width)
            } else {
                Some(-(next_len as f64))
            }
        } else {
            let last = (self.admitted - 1) % count;
            let (x, len) = (self.message_x[last], self.message_len[last] as f64);
            if self.rate < 0.0 {
                let edge = x + len + spacing;
                (edge <= width).then_some(edge)
            } else {
                (x - spacing >= 0.0).then(|| x - spacing - next_len as f64)
            }
        };

        if let Some(x) = seed {
            self.message_x[next] = x;
            self.message_len[next] = next_len;
            self.admitted += 1;
            tracing::trace!(index = next, x, "ticker admit");
        }
    }

    /// Drop the oldest message once it has completely left the canvas.
    fn retire(&mut self, width: f64) {
        if self.retired == self.admitted {
            return;
        }
        let first = self.retired % self.messages.len();
        let x = self.message_x[first];
        let exited = if self.rate < 0.0 {
            x + (self.message_len[first] as f64) < 0.0
        } else {
            x > width
        };
        if exited {
            self.retired += 1;
            tracing::trace!(index = first, "ticker retire");
        }
    }

    /// Opening frame: draw the first message, step it by `rate` and place the
    /// second message `spacing` pixels behind it. Once the ticker has moved,
    /// or while a start hold is pending, this draws in place.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        if self.moved || self.delay_frames > 0 {
            self.render(canvas, false);
            return;
        }
        self.render(canvas, true);
        self.moved = true;

        if self.messages.len() > 1 {
            let spacing = self.spacing as f64;
            let (x0, len0) = (self.message_x[0], self.message_len[0] as f64);
            let len1 = self.font.measure(&self.messages[1]);
            self.message_x[1] = if self.rate < 0.0 {
                x0 + len0 + spacing
            } else {
                x0 - spacing - len1 as f64
            };
            self.message_len[1] = len1;
        }
    }

    pub fn tick(&mut self, canvas: &mut dyn Canvas) {
        if self.rate == 0.0 || self.is_finished() {
            self.render(canvas, false);
            return;
        }
        if !self.moved && self.delay_count < self.delay_frames {
            self.delay_count += 1;
            self.render(canvas, false);
            return;
        }
        self.moved = true;

        let width = canvas.width() as f64;
        self.admit(width);
        self.retire(width);
        self.render(canvas, true);
    }
}
