//! Flappy Core - simulation engine for a side-scrolling flappy arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `config`: Run configuration and validation
//! - `render`: Snapshot to vertex conversion for any 2D backend
//! - `audio`: Sound cue routing
//! - `highscores`: Final score leaderboard

pub mod audio;
pub mod config;
pub mod highscores;
pub mod render;
pub mod sim;

pub use config::{ConfigError, RunConfig};
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Nominal frame time of the driving display (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Longest frame a single tick will account for (stalls, background tabs)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 360.0;
    pub const BOARD_HEIGHT: f32 = 640.0;

    /// Bird defaults - x is fixed for the whole run
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;

    /// Per-tick physics (not scaled by frame time)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_IMPULSE: f32 = -8.0;
    pub const SCROLL_SPEED: f32 = -2.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 40.0;
    pub const PIPE_GAP: f32 = 180.0;
    pub const PIPE_MIN_TOP: f32 = 0.0;
    pub const PIPE_MIN_BOTTOM: f32 = 100.0;
    /// Seconds between pipe spawns
    pub const SPAWN_INTERVAL: f32 = 1.5;
    /// Spawn timer tolerance against f32 drift when summing frame times
    pub const SPAWN_EPSILON: f32 = 1e-4;

    /// Seconds of ignored input after a crash
    pub const INPUT_LOCKOUT: f32 = 0.5;
}
