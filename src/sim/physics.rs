//! Bird physics
//!
//! Gravity and jump impulse are per-tick constants; frame time is never
//! applied here, so a tick at any refresh rate moves the bird the same amount.

use super::collision::below_floor;
use super::state::Bird;

/// Outcome of one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    InBounds,
    /// Bottom edge reached the floor; the run must end
    Floor,
}

/// Advance the bird by one tick.
///
/// The ceiling is a hard clamp: the bird stops at y = 0 but keeps its velocity,
/// so gravity pulls it back down naturally.
pub fn integrate(bird: &mut Bird, gravity: f32, board_height: f32) -> Boundary {
    bird.vel_y += gravity;
    bird.rect.pos.y = (bird.rect.pos.y + bird.vel_y).max(0.0);

    if below_floor(&bird.rect, board_height) {
        Boundary::Floor
    } else {
        Boundary::InBounds
    }
}

/// Override vertical velocity with the jump impulse
#[inline]
pub fn apply_jump_impulse(bird: &mut Bird, impulse: f32) {
    bird.vel_y = impulse;
}
