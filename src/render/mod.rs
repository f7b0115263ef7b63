//! Drawable output
//!
//! Converts simulation snapshots into plain triangle lists. No graphics API
//! lives here; any backend can upload the `bytemuck`-castable vertices as-is.

pub mod shapes;
pub mod vertex;

pub use shapes::build_scene;
pub use vertex::Vertex;
