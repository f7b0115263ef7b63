//! Phase transitions
//!
//! The only code that writes `GameState::phase`. Invalid requests are ignored
//! and reported as `false`; side effects are queued as `GameEvent`s.

use super::physics::apply_jump_impulse;
use super::state::{Bird, GameEvent, GamePhase, GameState, SoundCue};

impl GameState {
    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        self.phase = to;
        log::info!("Phase {:?} -> {:?}", from, to);
        self.emit(GameEvent::PhaseChanged { from, to });
    }

    /// Begin a run. Valid in Menu, or in GameOver when quick restart is on.
    pub fn request_start(&mut self) -> bool {
        let allowed = match self.phase {
            GamePhase::Menu => true,
            GamePhase::GameOver => self.config.quick_restart,
            GamePhase::Playing => false,
        };
        if !allowed || self.input_locked() {
            log::debug!("Ignored start in {:?}", self.phase);
            return false;
        }

        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.score = 0;
        self.spawn_timer.start();
        self.set_phase(GamePhase::Playing);
        true
    }

    /// Flap. Valid only while Playing.
    pub fn request_jump(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            log::debug!("Ignored jump in {:?}", self.phase);
            return false;
        }
        apply_jump_impulse(&mut self.bird, self.config.jump_impulse);
        self.emit(GameEvent::Sound(SoundCue::Jump));
        true
    }

    /// Return to the menu. Valid only in GameOver once the lockout has passed.
    pub fn request_reset(&mut self) -> bool {
        if self.phase != GamePhase::GameOver || self.input_locked() {
            log::debug!("Ignored reset in {:?}", self.phase);
            return false;
        }
        self.spawn_timer.cancel();
        self.pipes.clear();
        self.set_phase(GamePhase::Menu);
        true
    }

    /// End the current run after a crash or floor exit
    pub fn on_collision_or_boundary(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.spawn_timer.cancel();
        self.emit(GameEvent::Sound(SoundCue::Hit));
        self.set_phase(GamePhase::GameOver);
        self.emit(GameEvent::GameOver {
            final_score: self.score,
        });
        self.input_locked_until = self.clock + self.config.input_lockout as f64;
        log::info!("Run over with score {}", self.score);
    }
}
