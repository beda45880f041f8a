//! Lumen configuration system
//!
//! Settings are read from `lumen.toml` and then overridden by the environment
//! variables the LED matrix tooling conventionally uses (`MATRIX_COLS`,
//! `FRAME_RATE`, `FONTS_PATH`, ...).

use std::path::{Path, PathBuf};
use std::time::Duration;

use lumen_core::GridBounds;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "lumen.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LumenConfig {
    pub canvas: CanvasConfig,
    pub timing: TimingConfig,
    pub text: TextConfig,
    pub scroll: ScrollConfig,
    pub demo: DemoConfig,
}

/// Panel geometry. Chained panels extend the canvas horizontally, parallel
/// chains extend it vertically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub cols: u32,
    pub rows: u32,
    pub chain_length: u32,
    pub parallel: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Frames per second driven by the scheduler.
    pub frame_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TextConfig {
    /// Directory that relative font names are resolved against.
    pub fonts_path: Option<PathBuf>,
    /// Font file used when a component doesn't name one.
    pub default_font: Option<String>,
    /// Pixel size for outline fonts.
    pub font_px: Option<f32>,
}

/// Defaults for newly created scrolling components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Pixels per frame; negative scrolls left.
    pub rate: f64,
    /// `once`, `loop` or `bounce`.
    pub mode: String,
    pub delay_frames: u32,
    pub spacing: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of frames the demo runs before exiting.
    pub frames: u32,
    /// Write the last frame here as an image.
    pub snapshot: Option<PathBuf>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            cols: 64,
            rows: 32,
            chain_length: 1,
            parallel: 1,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { frame_rate: 24.0 }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            rate: -1.0,
            mode: "loop".to_string(),
            delay_frames: 24,
            spacing: 8,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 240,
            snapshot: None,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

impl LumenConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `lumen.toml` from the current directory, or defaults if it is
    /// missing or invalid.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Read { .. }) => Self::default(),
            Err(err) => {
                tracing::warn!(%err, "falling back to default configuration");
                Self::default()
            }
        }
    }

    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored.
    pub fn merge_with_env(&mut self) {
        // Canvas
        if let Some(v) = env_parse("MATRIX_COLS") {
            self.canvas.cols = v;
        }
        if let Some(v) = env_parse("MATRIX_ROWS") {
            self.canvas.rows = v;
        }
        if let Some(v) = env_parse("CHAIN_LENGTH") {
            self.canvas.chain_length = v;
        }
        if let Some(v) = env_parse("PARALLEL") {
            self.canvas.parallel = v;
        }

        // Timing
        if let Some(v) = env_parse::<f64>("FRAME_RATE") {
            if v > 0.0 {
                self.timing.frame_rate = v;
            }
        }

        // Text
        if let Ok(path) = std::env::var("FONTS_PATH") {
            self.text.fonts_path = Some(PathBuf::from(path));
        }
        if let Ok(font) = std::env::var("LUMEN_FONT") {
            self.text.default_font = Some(font);
        }

        // Scroll defaults
        if let Some(v) = env_parse("SCROLL_RATE") {
            self.scroll.rate = v;
        }
        if let Ok(mode) = std::env::var("SCROLL_MODE") {
            self.scroll.mode = mode;
        }
        if let Some(v) = env_parse("SCROLL_DELAY") {
            self.scroll.delay_frames = v;
        }
        if let Some(v) = env_parse("SCROLL_SPACING") {
            self.scroll.spacing = v;
        }

        // Demo
        if let Some(v) = env_parse("DEMO_FRAMES") {
            self.demo.frames = v;
        }
        if let Ok(path) = std::env::var("DEMO_SNAPSHOT") {
            self.demo.snapshot = Some(PathBuf::from(path));
        }
    }

    /// 1. Load from lumen.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    /// Full canvas size across chained and parallel panels.
    pub fn canvas_bounds(&self) -> GridBounds {
        let c = &self.canvas;
        GridBounds::new(
            c.cols.saturating_mul(c.chain_length.max(1)),
            c.rows.saturating_mul(c.parallel.max(1)),
        )
    }

    pub fn frame_delay(&self) -> Duration {
        let rate = if self.timing.frame_rate > 0.0 {
            self.timing.frame_rate
        } else {
            24.0
        };
        Duration::from_secs_f64(1.0 / rate)
    }

    /// Resolve a font name against `text.fonts_path`. Absolute paths and
    /// names without a configured font directory are returned as-is.
    pub fn resolve_font(&self, name: impl AsRef<Path>) -> PathBuf {
        let name = name.as_ref();
        match &self.text.fonts_path {
            Some(dir) if name.is_relative() => dir.join(name),
            _ => name.to_path_buf(),
        }
    }

    pub fn default_font_path(&self) -> Option<PathBuf> {
        self.text.default_font.as_ref().map(|name| self.resolve_font(name))
    }
}
