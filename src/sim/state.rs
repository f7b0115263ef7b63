//! Game state and core simulation types
//!
//! `GameState` is the explicit simulation context. The caller owns it and
//! drives it with `tick`; nothing here is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spawner::SpawnTimer;
use crate::config::{ConfigError, RunConfig};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a start intent
    Menu,
    /// Active run
    Playing,
    /// Run ended, waiting for a reset (or quick restart)
    GameOver,
}

/// Sound triggers for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Jump,
    Point,
    Hit,
}

/// Signals emitted by the simulation, drained by the caller each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Sound(SoundCue),
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// Emitted once on entering GameOver
    GameOver { final_score: u32 },
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub rect: Rect,
    /// Vertical velocity per tick (positive = downward)
    pub vel_y: f32,
}

impl Bird {
    /// Bird at its starting position, at rest
    pub fn new(config: &RunConfig) -> Self {
        Self {
            rect: Rect::new(
                config.bird_x,
                config.bird_start_y(),
                config.bird_width,
                config.bird_height,
            ),
            vel_y: 0.0,
        }
    }
}

/// One pipe segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub is_top: bool,
    /// Score already counted for this segment's pair
    pub passed: bool,
}

impl Obstacle {
    /// Top segment hanging from the ceiling
    pub fn top(x: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, 0.0, width, height),
            is_top: true,
            passed: false,
        }
    }

    /// Bottom segment standing on the floor
    pub fn bottom(x: f32, width: f32, y: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            is_top: false,
            passed: false,
        }
    }
}

/// A top/bottom pipe pair sharing one gap; the unit of scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    pub id: u32,
    pub top: Obstacle,
    pub bottom: Obstacle,
}

impl PipePair {
    #[inline]
    pub fn x(&self) -> f32 {
        self.top.rect.x()
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.top.rect.right()
    }

    /// Height of the opening between the segments
    pub fn gap(&self) -> f32 {
        self.bottom.rect.y() - self.top.rect.bottom()
    }

    pub fn passed(&self) -> bool {
        self.top.passed
    }

    /// Move both segments horizontally
    pub fn shift(&mut self, dx: f32) {
        self.top.rect.pos.x += dx;
        self.bottom.rect.pos.x += dx;
    }

    pub fn mark_passed(&mut self) {
        self.top.passed = true;
        self.bottom.passed = true;
    }
}

/// Read-only view of everything a renderer needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub board_width: f32,
    pub board_height: f32,
    pub bird: Rect,
    pub bird_vel_y: f32,
    pub pipes: Vec<PipePair>,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: RunConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Current phase (written only by the phase transitions)
    pub phase: GamePhase,
    pub score: u32,
    pub bird: Bird,
    /// Live pipe pairs in spawn order
    pub pipes: Vec<PipePair>,
    pub spawn_timer: SpawnTimer,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds of frame time fed to `tick`
    pub clock: f64,
    /// Intents are ignored until the clock reaches this deadline
    pub input_locked_until: f64,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game in the Menu phase. Fails if the config is malformed.
    pub fn new(config: RunConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            bird: Bird::new(&config),
            spawn_timer: SpawnTimer::new(config.spawn_interval),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            pipes: Vec::new(),
            time_ticks: 0,
            clock: 0.0,
            input_locked_until: 0.0,
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a new pair ID
    pub fn next_pair_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Whether intents are currently being ignored
    pub fn input_locked(&self) -> bool {
        self.clock < self.input_locked_until
    }

    /// Copy of the drawable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            board_width: self.config.board_width,
            board_height: self.config.board_height,
            bird: self.bird.rect,
            bird_vel_y: self.bird.vel_y,
            pipes: self.pipes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_in_menu() {
        let state = GameState::new(RunConfig::default(), 1).unwrap();
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        assert!(!state.spawn_timer.is_armed());
        assert_eq!(state.bird.rect.y(), 320.0);
        assert_eq!(state.bird.rect.x(), 50.0);
        assert_eq!(state.bird.vel_y, 0.0);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = RunConfig {
            pipe_gap: 700.0,
            ..Default::default()
        };
        assert!(GameState::new(config, 1).is_err());
    }

    #[test]
    fn test_pair_shift_and_pass() {
        let mut pair = PipePair {
            id: 1,
            top: Obstacle::top(360.0, 40.0, 100.0),
            bottom: Obstacle::bottom(360.0, 40.0, 280.0, 360.0),
        };
        assert_eq!(pair.gap(), 180.0);

        pair.shift(-2.0);
        assert_eq!(pair.x(), 358.0);
        assert_eq!(pair.bottom.rect.x(), 358.0);
        assert_eq!(pair.right(), 398.0);

        pair.mark_passed();
        assert!(pair.passed());
        assert!(pair.bottom.passed);
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(RunConfig::default(), 1).unwrap();
        state.emit(GameEvent::Sound(SoundCue::Jump));
        assert_eq!(state.drain_events(), vec![GameEvent::Sound(SoundCue::Jump)]);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(RunConfig::default(), 1).unwrap();
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Menu\""));
    }
}
