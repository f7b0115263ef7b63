//! Score tracking
//!
//! The top segment is the pair's reference: its `passed` flag records that the
//! point was counted, so a pair can never score twice.

use super::rect::Rect;
use super::state::PipePair;

/// Mark every pair the bird has fully cleared and return the points earned
pub fn award_points(bird: &Rect, pairs: &mut [PipePair]) -> u32 {
    let mut points = 0;
    for pair in pairs.iter_mut().filter(|pair| !pair.top.passed) {
        if bird.x() > pair.right() {
            pair.mark_passed();
            points += 1;
        }
    }
    points
}
