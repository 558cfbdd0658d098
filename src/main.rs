//! Drift Miner headless demo
//!
//! Drives a session in real time with a scripted thrust pattern, the same
//! way a frontend would: feed one input sample per frame, drain the clock,
//! read state back between ticks. Logs progress once per simulated second
//! and prints a JSON run summary at the end.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;
use serde::Serialize;

use drift_miner::consts::SIM_DT;
use drift_miner::sim::{Session, SessionClock, SessionConfig, TickInput};

/// Wall-clock limit for one demo run
const DEMO_LIMIT_SECS: u64 = 120;

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    resources: u32,
    score: i64,
    drones: usize,
    game_over: bool,
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut session = Session::new(SessionConfig {
        seed,
        ..Default::default()
    });
    let mut clock = SessionClock::new();

    let started = Instant::now();
    let mut last_frame = started;
    let mut last_report = 0u64;

    while session.is_running() {
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        // Scripted input: a slowly turning thrust vector so the ship wanders
        let t = session.tick_count() as f32 * SIM_DT * 0.2;
        let input = TickInput {
            thrust: Vec2::new(t.cos(), t.sin()),
            pause: false,
        };

        clock.advance(&mut session, &input, elapsed);

        let sim_secs = session.tick_count() / 60;
        if sim_secs > last_report {
            last_report = sim_secs;
            log::info!(
                "t={sim_secs}s resources={} score={} drones={}",
                session.resources(),
                session.score(),
                session.drones().len()
            );
        }

        if session.is_game_over() || started.elapsed().as_secs() > DEMO_LIMIT_SECS {
            session.request_quit();
        }

        std::thread::sleep(Duration::from_millis(4));
    }

    let summary = RunSummary {
        seed,
        ticks: session.tick_count(),
        resources: session.resources(),
        score: session.score(),
        drones: session.drones().len(),
        game_over: session.is_game_over(),
    };
    println!("{}", serde_json::to_string(&summary).unwrap_or_default());
}
