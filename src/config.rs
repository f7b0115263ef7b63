//! Run configuration
//!
//! Immutable for the lifetime of a `GameState`. Loaded from JSON when the
//! driver is given a path, otherwise built from `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a `RunConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Simulation constants for one process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub board_width: f32,
    pub board_height: f32,

    // === Bird ===
    pub bird_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    /// Velocity added every tick (positive = downward)
    pub gravity: f32,
    /// Velocity override on jump (negative = upward)
    pub jump_impulse: f32,

    // === Pipes ===
    /// Horizontal pipe velocity per tick (negative = leftward)
    pub scroll_speed: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    /// Smallest allowed top segment height
    pub min_top: f32,
    /// Smallest allowed bottom segment height
    pub min_bottom: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,

    // === Flow ===
    /// Seconds during which intents are ignored after a crash
    pub input_lockout: f32,
    /// `start` from GameOver goes straight to Playing instead of requiring a reset
    pub quick_restart: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,

            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            scroll_speed: SCROLL_SPEED,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            min_top: PIPE_MIN_TOP,
            min_bottom: PIPE_MIN_BOTTOM,
            spawn_interval: SPAWN_INTERVAL,

            input_lockout: INPUT_LOCKOUT,
            quick_restart: false,
        }
    }
}

impl RunConfig {
    /// Starting height of the bird (top edge)
    pub fn bird_start_y(&self) -> f32 {
        self.board_height / 2.0
    }

    /// Largest top segment height a spawn may draw
    pub fn max_top(&self) -> f32 {
        self.board_height - self.pipe_gap - self.min_bottom
    }

    /// Check every constraint the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid =
            |msg: String| -> Result<(), ConfigError> { Err(ConfigError::Invalid(msg)) };

        if !(self.board_width > 0.0 && self.board_height > 0.0) {
            return invalid(format!(
                "board must be non-empty, got {}x{}",
                self.board_width, self.board_height
            ));
        }
        if !(self.bird_width > 0.0 && self.bird_height > 0.0) {
            return invalid("bird size must be positive".into());
        }
        if self.bird_x < 0.0 || self.bird_x + self.bird_width > self.board_width {
            return invalid(format!("bird x {} is off the board", self.bird_x));
        }
        if self.bird_start_y() + self.bird_height >= self.board_height {
            return invalid("bird does not fit above the floor".into());
        }
        if !(self.gravity > 0.0) {
            return invalid(format!("gravity must be positive, got {}", self.gravity));
        }
        if !(self.jump_impulse < 0.0) {
            return invalid(format!(
                "jump impulse must be negative, got {}",
                self.jump_impulse
            ));
        }
        if !(self.scroll_speed < 0.0) {
            return invalid(format!(
                "scroll speed must be negative, got {}",
                self.scroll_speed
            ));
        }
        if !(self.pipe_width > 0.0) {
            return invalid("pipe width must be positive".into());
        }
        if !(self.pipe_gap > 0.0 && self.pipe_gap < self.board_height) {
            return invalid(format!(
                "pipe gap {} must be within (0, {})",
                self.pipe_gap, self.board_height
            ));
        }
        if self.min_top < 0.0 || self.min_bottom < 0.0 {
            return invalid("pipe margins must be non-negative".into());
        }
        // Heights are drawn in whole pixels
        if self.min_top.ceil() > self.max_top().floor() {
            return invalid(format!(
                "empty spawn range [{}, {}]",
                self.min_top,
                self.max_top()
            ));
        }
        if !(self.spawn_interval > 0.0) {
            return invalid("spawn interval must be positive".into());
        }
        if !(self.input_lockout >= 0.0) {
            return invalid("input lockout must be non-negative".into());
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded run config from {}", path.display());
        Ok(config)
    }
}
