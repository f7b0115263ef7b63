//! Simulation tick
//!
//! Core game loop step. Intents are applied at the tick boundary, then the
//! phase-specific update runs to completion.

use super::collision::first_hit;
use super::physics::{self, Boundary};
use super::score::award_points;
use super::spawner;
use super::state::{GameEvent, GamePhase, GameState, SoundCue};
use crate::consts::MAX_FRAME_DT;

/// Intents captured since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a run (play button / first tap)
    pub start: bool,
    /// Flap
    pub jump: bool,
    /// Leave the game-over screen
    pub reset: bool,
    /// Idle/demo mode - the autopilot flaps
    pub idle_mode: bool,
}

/// Advance the game by one frame. `dt` is the frame time in seconds; it only
/// drives the spawn timer and the input lockout clock, and is clamped to
/// `[0, MAX_FRAME_DT]`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // NaN maps to 0
    let dt = dt.max(0.0).min(MAX_FRAME_DT);
    state.time_ticks += 1;
    state.clock += dt as f64;

    if input.reset {
        state.request_reset();
    }
    if input.start {
        state.request_start();
    }
    if input.jump || (input.idle_mode && autopilot_wants_jump(state)) {
        state.request_jump();
    }

    match state.phase {
        GamePhase::Playing => step_playing(state, dt),
        GamePhase::Menu | GamePhase::GameOver => {}
    }
}

fn step_playing(state: &mut GameState, dt: f32) {
    let boundary = physics::integrate(
        &mut state.bird,
        state.config.gravity,
        state.config.board_height,
    );

    spawner::advance(&mut state.pipes, state.config.scroll_speed);
    let reaped = spawner::reap(&mut state.pipes);
    if reaped > 0 {
        log::debug!("Reaped {} pair(s), {} live", reaped, state.pipes.len());
    }

    if state.spawn_timer.advance(dt) {
        state.on_spawn_tick();
    }

    // Collisions are judged on this tick's moved bird and moved pipes
    if boundary == Boundary::Floor {
        log::debug!("Bird left through the floor at y={}", state.bird.rect.y());
        state.on_collision_or_boundary();
        return;
    }
    if let Some(hit) = first_hit(&state.bird.rect, &state.pipes) {
        log::debug!(
            "Bird hit {} segment of pair {}",
            if hit.is_top { "top" } else { "bottom" },
            hit.pair_id
        );
        state.on_collision_or_boundary();
        return;
    }

    let points = award_points(&state.bird.rect, &mut state.pipes);
    for _ in 0..points {
        state.score += 1;
        state.emit(GameEvent::Sound(SoundCue::Point));
    }
}

/// Flap when falling past the bottom of the next gap (or mid-board with no
/// pipe ahead)
fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.phase != GamePhase::Playing || state.bird.vel_y < 0.0 {
        return false;
    }
    let bird = &state.bird.rect;
    let floor = state
        .pipes
        .iter()
        .find(|pair| pair.right() >= bird.x())
        .map(|pair| pair.bottom.rect.y() - 12.0)
        .unwrap_or(state.config.board_height * 0.6);
    bird.bottom() + state.bird.vel_y + state.config.gravity >= floor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::consts::FRAME_DT;
    use crate::sim::spawner::make_pair;
    use std::collections::HashSet;

    fn playing(config: RunConfig) -> GameState {
        let mut state = GameState::new(config, 12345).unwrap();
        state.request_start();
        state.drain_events();
        state
    }

    #[test]
    fn test_menu_to_playing() {
        let mut state = GameState::new(RunConfig::default(), 12345).unwrap();

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.bird.rect.y(), 320.0);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_fall_and_jump_scenario() {
        let mut state = playing(RunConfig::default());

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.bird.vel_y, 0.5);
        assert_eq!(state.bird.rect.y(), 320.5);

        let mut state = playing(RunConfig::default());
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, FRAME_DT);
        assert_eq!(state.bird.vel_y, -7.5);
        assert_eq!(state.bird.rect.y(), 312.5);
        assert_eq!(state.drain_events(), vec![GameEvent::Sound(SoundCue::Jump)]);
    }

    #[test]
    fn test_jump_in_menu_does_nothing() {
        let mut state = GameState::new(RunConfig::default(), 1).unwrap();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.bird.vel_y, 0.0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_cleared_pipe_scores_once() {
        let mut state = playing(RunConfig::default());
        let pair = make_pair(100, &state.config, 100.0);
        state.pipes.push(pair);
        state.pipes[0].shift(-360.0);

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.score, 1);
        assert!(state.pipes[0].top.passed);
        assert_eq!(state.drain_events(), vec![GameEvent::Sound(SoundCue::Point)]);

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_floor_ends_run_and_stops_spawns() {
        let mut state = playing(RunConfig::default());
        state.bird.rect.pos.y = 609.5;

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.bird.rect.bottom(), 640.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.spawn_timer.is_armed());
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::GameOver { final_score: 0 })
        );

        assert!(!state.on_spawn_tick());
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 1.0);
        }
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_ceiling_only_clamps() {
        let mut state = playing(RunConfig::default());
        state.bird.rect.pos.y = 2.0;
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, FRAME_DT);
        assert_eq!(state.bird.rect.y(), 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pipe_collision_ends_run() {
        let mut state = playing(RunConfig::default());
        // Top segment covers the bird's height, moving into its column
        let pair = make_pair(100, &state.config, 360.0);
        state.pipes.push(pair);
        state.pipes[0].shift(-270.0);

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        let events = state.drain_events();
        assert_eq!(events[0], GameEvent::Sound(SoundCue::Hit));
    }

    fn flapping() -> TickInput {
        TickInput {
            jump: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawns_on_interval_and_enter_at_right_edge() {
        let mut state = playing(RunConfig::default());
        // Flapping every tick pins the bird to the ceiling
        state.bird.rect.pos.y = 0.0;

        for _ in 0..89 {
            tick(&mut state, &flapping(), FRAME_DT);
        }
        assert!(state.pipes.is_empty());
        tick(&mut state, &flapping(), FRAME_DT);
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes[0].x(), state.config.board_width);

        tick(&mut state, &flapping(), FRAME_DT);
        assert_eq!(state.pipes[0].x(), state.config.board_width - 2.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_long_frames_add_at_most_one_pair() {
        let mut state = GameState::new(RunConfig::default(), 7).unwrap();
        state.request_start();
        state.bird.rect.pos.y = 0.0;

        tick(&mut state, &flapping(), 3.0);
        assert!(state.pipes.len() <= 1);

        for _ in 0..300 {
            let before = state.pipes.len();
            tick(&mut state, &flapping(), 3.0);
            assert!(state.pipes.len() <= before + 1);
            // No two live pairs share an x
            for w in state.pipes.windows(2) {
                assert!(w[1].x() > w[0].x());
            }
            if state.phase != GamePhase::Playing {
                break;
            }
        }
        assert!(!state.pipes.is_empty());
    }

    #[test]
    fn test_bad_dt_is_clamped() {
        let mut state = playing(RunConfig::default());
        tick(&mut state, &TickInput::default(), f32::NAN);
        tick(&mut state, &TickInput::default(), -5.0);
        assert_eq!(state.clock, 0.0);

        tick(&mut state, &TickInput::default(), 1.0e9);
        assert!(state.clock <= MAX_FRAME_DT as f64);
    }

    #[test]
    fn test_lockout_then_reset_then_start() {
        let mut state = playing(RunConfig::default());
        state.bird.rect.pos.y = 620.0;
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        let reset = TickInput {
            reset: true,
            ..Default::default()
        };
        // Long frames are clamped, so the lockout still takes 0.5 s of clock
        tick(&mut state, &reset, 0.5);
        for _ in 0..3 {
            tick(&mut state, &reset, 0.1);
            assert_eq!(state.phase, GamePhase::GameOver);
        }

        tick(&mut state, &reset, 0.1);
        assert_eq!(state.phase, GamePhase::Menu);

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_score_matches_cleared_pairs() {
        let mut state = playing(RunConfig::default());
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        let mut cleared: HashSet<u32> = HashSet::new();
        let mut last_score = 0;
        for _ in 0..5_000 {
            tick(&mut state, &idle, FRAME_DT);
            cleared.extend(state.pipes.iter().filter(|p| p.passed()).map(|p| p.id));
            assert!(state.score >= last_score);
            assert_eq!(state.score as usize, cleared.len());
            last_score = state.score;
            if state.phase != GamePhase::Playing {
                break;
            }
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing(RunConfig::default());
        let mut state2 = playing(RunConfig::default());
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        for _ in 0..600 {
            tick(&mut state1, &idle, FRAME_DT);
            tick(&mut state2, &idle, FRAME_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.pipes, state2.pipes);
        assert_eq!(state1.bird.rect, state2.bird.rect);
    }
}
