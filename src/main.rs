use std::sync::Arc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use image::RgbImage;
use lumen_config::LumenConfig;
use lumen_core::{FrameBuffer, GridBounds, Point, Rgb};
use lumen_scene::{Composition, FrameSink, ScrollMode, ScrollingText, Ticker};
use lumen_surface::{Line, Primitive, ShapeStyle, TextRun};
use lumen_text::{BlockFont, FontCache, FontHandle};

/// Keeps the most recent frame so it can be written out after the run.
#[derive(Default)]
struct SnapshotSink {
    frames: u64,
    last: Option<RgbImage>,
}

impl FrameSink for SnapshotSink {
    fn present(&mut self, frame: &FrameBuffer) -> lumen_core::Result<()> {
        self.frames += 1;
        self.last = Some(frame.to_image());
        Ok(())
    }
}

fn load_font(config: &LumenConfig, cache: &mut FontCache) -> FontHandle {
    let Some(path) = config.default_font_path() else {
        return Arc::new(BlockFont::default());
    };
    let px = config.text.font_px.unwrap_or(8.0);
    match cache.get_or_load(&path, px) {
        Ok(font) => {
            log::info!("using font {} at {px}px", path.display());
            font
        }
        Err(err) => {
            log::warn!("failed to load font {}: {err}; using block font", path.display());
            Arc::new(BlockFont::default())
        }
    }
}

fn build_demo(config: &LumenConfig, bounds: GridBounds, font: FontHandle) -> Result<Composition> {
    let w = bounds.width as i32;
    let h = bounds.height as i32;
    let accent = Rgb::parse("orange")?;
    let sky = Rgb::parse("#1e90ff")?;

    let border = Primitive::rect(
        ShapeStyle::new(Point::new(0, 0), w, h).with_fill(None).with_stroke(sky, 1),
        bounds,
    )?;
    let sun = Primitive::ellipse(
        ShapeStyle::new(Point::new(w - 12, 2), 9, 9)
            .with_fill(Some(accent))
            .with_stroke(Rgb::rgb(255, 255, 0), 1),
        bounds,
    )?;
    let flag = Primitive::right_triangle(
        ShapeStyle::new(Point::new(3, 3), 8, 8)
            .with_fill(Some(Rgb::rgb(200, 0, 40)))
            .with_rotation(15),
        bounds,
    )?;
    let ground = Line::new(Point::new(1, h - 3), Point::new(w - 2, h - 3), Rgb::rgb(0, 160, 0), 1)?;

    let mode: ScrollMode = config.scroll.mode.parse()?;
    let headline = ScrollingText::new(
        TextRun::new(Point::new(0, h / 2 + 2), "LUMEN PIXEL DEMO", font.clone(), Rgb::WHITE),
        config.scroll.rate,
        mode,
    )
    .with_delay(config.scroll.delay_frames)
    .with_spacing(config.scroll.spacing);

    let ticker = Ticker::new(
        vec!["NEWS".into(), "WEATHER 21C".into(), "SPORTS".into()],
        font,
        accent,
        w,
        h - 5,
        config.scroll.rate,
    )?
    .with_spacing(config.scroll.spacing)
    .with_wrap(true);

    Ok(Composition::new(config.frame_delay())
        .with_looping(true)
        .with(border)
        .with(sun)
        .with(flag)
        .with(ground)
        .with(headline)
        .with(ticker))
}

fn main() -> Result<()> {
    env_logger::init();

    let config = LumenConfig::load();
    let bounds = config.canvas_bounds();
    log::info!(
        "canvas {}x{} at {} fps for {} frames",
        bounds.width,
        bounds.height,
        config.timing.frame_rate,
        config.demo.frames
    );

    let mut fonts = FontCache::new();
    let font = load_font(&config, &mut fonts);
    let mut composition = build_demo(&config, bounds, font).context("building demo composition")?;

    let mut frame = FrameBuffer::new(bounds);
    let mut sink = SnapshotSink::default();
    let delay = composition.frame_delay();
    for _ in 0..config.demo.frames {
        let started = Instant::now();
        composition.render_frame(&mut frame);
        composition.present(&frame, &mut sink)?;
        thread::sleep(delay.saturating_sub(started.elapsed()));
    }
    log::info!("presented {} frames", sink.frames);

    if let (Some(path), Some(image)) = (&config.demo.snapshot, &sink.last) {
        image
            .save(path)
            .with_context(|| format!("writing snapshot to {}", path.display()))?;
        log::info!("saved last frame to {}", path.display());
    }
    Ok(())
}
