//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick physics only
//! - Seeded RNG only
//! - Stable iteration order (pipes in spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod machine;
pub mod physics;
pub mod rect;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, first_hit, intersects};
pub use physics::Boundary;
pub use rect::Rect;
pub use spawner::SpawnTimer;
pub use state::{
    Bird, GameEvent, GamePhase, GameState, Obstacle, PipePair, Snapshot, SoundCue,
};
pub use tick::{TickInput, tick};
