//! Pipe spawning, scrolling and recycling
//!
//! The spawn timer is a plain counter advanced by `tick`, never a callback,
//! so spawns always land between two whole simulation steps.

use rand::Rng;

use super::state::{GamePhase, GameState, Obstacle, PipePair};
use crate::config::RunConfig;
use crate::consts::SPAWN_EPSILON;

/// Fixed-interval spawn clock. Only fires while armed.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: f32,
    elapsed: f32,
    armed: bool,
}

impl SpawnTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            armed: false,
        }
    }

    /// Arm the timer; the first spawn is one full interval away
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.armed = true;
    }

    /// Disarm and drop any partial interval
    pub fn cancel(&mut self) {
        self.elapsed = 0.0;
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed frame time, returning whether a spawn came due.
    ///
    /// Fires at most once per call. Whole intervals beyond the first are
    /// dropped, so pairs never stack at the spawn edge.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.armed {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed + SPAWN_EPSILON < self.interval {
            return false;
        }
        self.elapsed = (self.elapsed - self.interval).max(0.0) % self.interval;
        // Rounding residue from summed frame times
        if self.elapsed < SPAWN_EPSILON {
            self.elapsed = 0.0;
        }
        true
    }
}

/// Draw a top segment height, uniform over whole pixels in
/// `[min_top, board_height - gap - min_bottom]`.
///
/// Whole-pixel heights keep `top + gap + bottom == board_height` exact in
/// `f32`; a continuous draw would only hold it up to rounding.
pub fn draw_top_height<R: Rng>(rng: &mut R, config: &RunConfig) -> f32 {
    let lo = config.min_top.ceil() as i32;
    let hi = config.max_top().floor() as i32;
    rng.random_range(lo..=hi) as f32
}

/// Build a pair entering at the right edge of the board
pub fn make_pair(id: u32, config: &RunConfig, top_height: f32) -> PipePair {
    let x = config.board_width;
    let bottom_y = top_height + config.pipe_gap;
    let bottom_height = config.board_height - top_height - config.pipe_gap;
    PipePair {
        id,
        top: Obstacle::top(x, config.pipe_width, top_height),
        bottom: Obstacle::bottom(x, config.pipe_width, bottom_y, bottom_height),
    }
}

/// Scroll every live pair by `velocity_x`
pub fn advance(pairs: &mut [PipePair], velocity_x: f32) {
    for pair in pairs {
        pair.shift(velocity_x);
    }
}

/// Drop pairs whose right edge has fully left the board. Order is preserved.
pub fn reap(pairs: &mut Vec<PipePair>) -> usize {
    let before = pairs.len();
    pairs.retain(|pair| pair.right() >= 0.0);
    before - pairs.len()
}

impl GameState {
    /// Spawn one pair if a run is active. Returns whether a pair was added.
    pub fn on_spawn_tick(&mut self) -> bool {
        if self.phase != GamePhase::Playing || !self.spawn_timer.is_armed() {
            return false;
        }
        let top_height = draw_top_height(&mut self.rng, &self.config);
        let id = self.next_pair_id();
        let pair = make_pair(id, &self.config, top_height);
        log::debug!("Spawned pair {} (top height {})", id, top_height);
        self.pipes.push(pair);
        true
    }
}
