//! Collision detection between the bird and pipe segments
//!
//! Everything here is a pure function of geometry; the state machine decides
//! what a hit means.

use super::rect::Rect;
use super::state::PipePair;

/// Which segment of a pair was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionResult {
    pub pair_id: u32,
    pub is_top: bool,
}

/// Standard AABB overlap test. Touching edges do not count.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x() < b.right() && a.right() > b.x() && a.y() < b.bottom() && a.bottom() > b.y()
}

/// First pipe segment the bird overlaps, in spawn order (top before bottom)
pub fn first_hit(bird: &Rect, pairs: &[PipePair]) -> Option<CollisionResult> {
    pairs.iter().find_map(|pair| {
        [&pair.top, &pair.bottom]
            .into_iter()
            .find(|segment| intersects(bird, &segment.rect))
            .map(|segment| CollisionResult {
                pair_id: pair.id,
                is_top: segment.is_top,
            })
    })
}

/// Bird bottom edge at or below the floor
#[inline]
pub fn below_floor(bird: &Rect, board_height: f32) -> bool {
    bird.bottom() >= board_height
}
