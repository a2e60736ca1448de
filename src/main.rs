//! Sky Stack headless demo
//!
//! Drives the simulation with a scripted auto-player: it commits whenever
//! the mover sweeps close to alignment, and after enough layers it lets one
//! sweep run long to end the run. Prints the telemetry message a real host
//! would receive.
//!
//! Usage: `skystack [seed] [target-commits]`

use std::time::{SystemTime, UNIX_EPOCH};

use skystack::Config;
use skystack::bridge::{DebrisPhysics, NullRender};
use skystack::consts::SIM_DT;
use skystack::sim::{GameEvent, GamePhase, Session, TickInput, tick};

/// Commit when the active layer is within this distance of alignment
const AIM_TOLERANCE: f32 = 0.25;
/// Hard cap on demo length
const MAX_TICKS: u32 = 120_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(clock_seed);
    let target_commits: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    log::info!("Sky Stack demo (seed {seed}, target {target_commits} commits)");

    let mut session = Session::new(Config::default(), seed);
    let mut physics = DebrisPhysics::new();
    let mut render = NullRender::new();

    let mut input = TickInput {
        start: true,
        ..Default::default()
    };

    for _ in 0..MAX_TICKS {
        let events = tick(&mut session, &input, &mut physics, &mut render, SIM_DT);
        input = TickInput::default();

        for event in &events {
            match event {
                GameEvent::LayerCommitted {
                    offset,
                    score,
                    perfect,
                } => {
                    let flair = if *perfect { " (perfect)" } else { "" };
                    log::info!("commit {score}: offset {offset:+.3}{flair}");
                }
                GameEvent::RunEnded { score, message } => {
                    log::info!("run over at score {score}");
                    match message {
                        Some(message) => println!(
                            "{}",
                            serde_json::to_string_pretty(message)
                                .expect("telemetry message serializes")
                        ),
                        None => println!("(no telemetry: score 0)"),
                    }
                }
                _ => {}
            }
        }

        if session.phase == GamePhase::Ended {
            return;
        }
        input.commit = decide_commit(&session, target_commits);
    }

    log::warn!("tick cap reached without a terminal miss");
}

/// Scripted player: aim for alignment until enough layers are placed, then
/// commit mid-overshoot to end the run.
fn decide_commit(session: &Session, target_commits: u32) -> bool {
    if session.stack.len() < 2 {
        return false;
    }
    let active = &session.stack[session.stack.len() - 1];
    let base = &session.stack[session.stack.len() - 2];
    let delta = active.axis.component(active.position) - active.axis.component(base.position);

    if session.score() < target_commits {
        delta.abs() < AIM_TOLERANCE
    } else {
        // Deliberate miss once the target is reached
        delta.abs() > active.extent() + 1.0
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
