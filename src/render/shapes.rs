//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, Rect, Snapshot};

/// Map a board-space point (origin top-left, y down) to NDC (origin center, y up)
#[inline]
pub fn to_ndc(point: Vec2, board: Vec2) -> Vec2 {
    Vec2::new(point.x / board.x * 2.0 - 1.0, 1.0 - point.y / board.y * 2.0)
}

/// Two triangles covering a board-space rectangle
pub fn quad(rect: &Rect, board: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let tl = to_ndc(rect.pos, board);
    let br = to_ndc(rect.pos + rect.size, board);

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Triangle list for one frame: background, pipes in spawn order, then the bird.
///
/// The menu shows only the background; the bird stays visible on the
/// game-over screen so the crash site reads.
pub fn build_scene(snapshot: &Snapshot) -> Vec<Vertex> {
    let board = Vec2::new(snapshot.board_width, snapshot.board_height);
    let mut vertices = Vec::with_capacity((snapshot.pipes.len() * 2 + 2) * 6);

    let background = Rect::new(0.0, 0.0, board.x, board.y);
    vertices.extend(quad(&background, board, colors::BACKGROUND));

    if snapshot.phase == GamePhase::Menu {
        return vertices;
    }

    for pair in &snapshot.pipes {
        let (top, bottom) = if pair.passed() {
            (colors::PIPE_PASSED, colors::PIPE_PASSED)
        } else {
            (colors::PIPE_TOP, colors::PIPE_BOTTOM)
        };
        vertices.extend(quad(&pair.top.rect, board, top));
        vertices.extend(quad(&pair.bottom.rect, board, bottom));
    }

    let bird_color = match snapshot.phase {
        GamePhase::GameOver => colors::BIRD_CRASHED,
        _ => colors::BIRD,
    };
    vertices.extend(quad(&snapshot.bird, board, bird_color));

    vertices
}
