//! Flappy Core headless driver
//!
//! Plays one seeded demo run at 60 Hz with the autopilot, routing the
//! simulation's signals to the logging audio sink and the leaderboard.
//!
//! Usage: flappy-core [--config <path>] [--seed <n>] [--scores <path>]
//!                    [--volume <0-1>] [--mute]

use std::time::{SystemTime, UNIX_EPOCH};

use flappy_core::audio::{AudioManager, LogSink};
use flappy_core::consts::FRAME_DT;
use flappy_core::render::build_scene;
use flappy_core::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use flappy_core::{HighScores, RunConfig};

/// Give up after two minutes of simulated play
const MAX_TICKS: u64 = 120 * 60;

struct Args {
    config: Option<String>,
    seed: u64,
    scores: Option<String>,
    volume: Option<f32>,
    mute: bool,
}

const USAGE: &str = "usage: flappy-core [--config <path>] [--seed <n>] [--scores <path>] \
                     [--volume <0-1>] [--mute]";

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config: None,
        seed: 1,
        scores: None,
        volume: None,
        mute: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || iter.next().ok_or(format!("{} needs a value", flag));
        match flag.as_str() {
            "--config" => args.config = Some(value()?),
            "--seed" => {
                let raw = value()?;
                args.seed = raw.parse().map_err(|_| format!("bad seed: {}", raw))?;
            }
            "--scores" => args.scores = Some(value()?),
            "--volume" => {
                let raw = value()?;
                args.volume = Some(raw.parse().map_err(|_| format!("bad volume: {}", raw))?);
            }
            "--mute" => args.mute = true,
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(args)
}

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

fn main() {
    env_logger::init();
    log::info!("Flappy Core (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let config = match &args.config {
        Some(path) => RunConfig::load(path),
        None => Ok(RunConfig::default()),
    };
    let mut state = match config.and_then(|config| GameState::new(config, args.seed)) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut audio = AudioManager::new(LogSink);
    if let Some(volume) = args.volume {
        audio.set_master_volume(volume);
    }
    audio.set_muted(args.mute);
    let mut scores = args
        .scores
        .as_deref()
        .map(|path| HighScores::load(path))
        .unwrap_or_default();

    let mut input = TickInput {
        start: true,
        idle_mode: true,
        ..Default::default()
    };
    let mut final_score = None;
    let mut rank = None;
    let mut vertex_count = 0;

    while state.time_ticks < MAX_TICKS {
        tick(&mut state, &input, FRAME_DT);
        input.start = false;

        let events = state.drain_events();
        audio.handle_events(&events);
        if let Some(placed) = scores.record_events(&events, state.seed, now_ms()) {
            rank = Some(placed);
        }
        if let Some(GameEvent::GameOver { final_score: score }) = events
            .iter()
            .find(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            final_score = Some(*score);
        }

        vertex_count = build_scene(&state.snapshot()).len();
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    match final_score {
        Some(score) => println!(
            "Run over after {} ticks: score {} (best {})",
            state.time_ticks,
            score,
            scores.top_score().unwrap_or(0)
        ),
        None => println!(
            "Autopilot survived {} ticks with score {}",
            state.time_ticks, state.score
        ),
    }
    if let Some(rank) = rank {
        println!("New high score, ranked #{}", rank);
    }
    log::debug!("Last frame drew {} vertices", vertex_count);

    if let Some(path) = &args.scores {
        if let Err(e) = scores.save(path) {
            log::warn!("Failed to save high scores: {}", e);
        }
    }
}
