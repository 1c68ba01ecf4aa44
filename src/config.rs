//! Application defaults and their validation.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const FPS: u64 = 60;

/// Tallest possible bar; array values are drawn from `[1, MAX_BAR_HEIGHT]`.
pub const MAX_BAR_HEIGHT: u32 = 500;

pub const MIN_SIZE: usize = 10;
pub const MAX_SIZE: usize = 150;
pub const DEFAULT_SIZE: usize = 80;
pub const SIZE_STEP: usize = 10;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;
pub const DEFAULT_SPEED: u32 = 50;
pub const SPEED_STEP: u32 = 5;

/// Per-step delay at the slowest speed (speed 1 waits 100% of this).
pub const BASE_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("window size must be non-zero, got {0}x{1}")]
    WindowSize(u32, u32),
    #[error("fps must be non-zero")]
    Fps,
    #[error("max bar height must be non-zero")]
    MaxBarHeight,
    #[error("invalid size range: {min}..={max} (default {default})")]
    SizeRange { min: usize, max: usize, default: usize },
    #[error("invalid speed range: {min}..={max} (default {default})")]
    SpeedRange { min: u32, max: u32, default: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub fps: u64,
    pub max_bar_height: u32,
    pub min_size: usize,
    pub max_size: usize,
    pub default_size: usize,
    pub size_step: usize,
    pub min_speed: u32,
    pub max_speed: u32,
    pub default_speed: u32,
    pub speed_step: u32,
    pub base_delay: Duration,
    /// Directory screenshots are written to.
    pub screenshot_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            fps: FPS,
            max_bar_height: MAX_BAR_HEIGHT,
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
            default_size: DEFAULT_SIZE,
            size_step: SIZE_STEP,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            default_speed: DEFAULT_SPEED,
            speed_step: SPEED_STEP,
            base_delay: BASE_DELAY,
            screenshot_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::WindowSize(self.window_width, self.window_height));
        }
        if self.fps == 0 {
            return Err(ConfigError::Fps);
        }
        if self.max_bar_height == 0 {
            return Err(ConfigError::MaxBarHeight);
        }
        if self.min_size > self.max_size
            || !(self.min_size..=self.max_size).contains(&self.default_size)
        {
            return Err(ConfigError::SizeRange {
                min: self.min_size,
                max: self.max_size,
                default: self.default_size,
            });
        }
        // Speeds above 100 would make the delay formula underflow.
        if self.min_speed == 0
            || self.min_speed > self.max_speed
            || self.max_speed > MAX_SPEED
            || !(self.min_speed..=self.max_speed).contains(&self.default_speed)
        {
            return Err(ConfigError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
                default: self.default_speed,
            });
        }
        Ok(())
    }

    pub fn clamp_size(&self, size: usize) -> usize {
        size.clamp(self.min_size, self.max_size)
    }

    pub fn clamp_speed(&self, speed: u32) -> u32 {
        speed.clamp(self.min_speed, self.max_speed)
    }

    /// Delay after each step: `base_delay * (101 - speed) / 100`.
    pub fn step_delay(&self, speed: u32) -> Duration {
        let speed = speed.min(MAX_SPEED);
        self.base_delay * (MAX_SPEED + 1 - speed) / 100
    }
}
