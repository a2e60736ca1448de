//! The run controller
//!
//! Sequences Idle -> Running -> Ended and performs one frame of work per
//! `tick` call, in a fixed order: input handling, mover update, physics
//! step, debris transform copy-back, camera interpolation. Commit handling
//! is synchronous within the tick; it is never interleaved with frame work.

use glam::Quat;

use super::mover::{oscillate, speed_for_level};
use super::slice::{SliceCut, SliceResult, slice};
use super::state::{Axis, GameEvent, GamePhase, Session};
use crate::bridge::{Hsl, PhysicsBridge, RenderBridge};
use crate::consts;
use crate::telemetry::GameOverMessage;

/// Scene background (premium mauve)
const BACKGROUND: Hsl = Hsl {
    h: 316.0,
    s: 0.31,
    l: 0.78,
};

/// Host commands for a single tick
///
/// All one-shot; the host clears them after each tick. Commands invalid for
/// the current phase are silently ignored.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start (or restart) the run; resets the session atomically
    pub start: bool,
    /// Attempt to slice the active layer (pointer-down / space)
    pub commit: bool,
    /// Forced exit; ends the run with score 0 and no telemetry
    pub abort: bool,
    /// Viewport change, forwarded to the render bridge only
    pub resize: Option<(u32, u32)>,
}

/// Advance the session by one frame.
///
/// Returns the outward events produced this tick, in order.
pub fn tick<P: PhysicsBridge, R: RenderBridge>(
    session: &mut Session,
    input: &TickInput,
    physics: &mut P,
    render: &mut R,
    dt: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Viewport changes never touch simulation state
    if let Some((width, height)) = input.resize {
        render.resize(width, height);
    }

    if input.start && session.phase != GamePhase::Running {
        reset(session, physics, render);
        events.push(GameEvent::Started);
    }

    if session.phase == GamePhase::Running {
        if input.abort {
            session.aborted = true;
            session.phase = GamePhase::Ended;
            log::info!("run aborted");
            events.push(GameEvent::RunEnded {
                score: 0,
                message: None,
            });
        } else if input.commit {
            handle_commit(session, physics, render, &mut events);
        }
    }

    // Mover: one authoritative position per tick, pushed to both bridges
    if session.phase == GamePhase::Running {
        session.elapsed_ms += dt as f64 * 1000.0;

        if session.stack.len() > 1 {
            let speed = speed_for_level(session.level(), &session.config);
            let pos = oscillate(
                session.elapsed_ms,
                speed,
                session.config.travel_amplitude,
            );

            if let Some(layer) = session.active_mut() {
                let axis = layer.axis;
                axis.set_component(&mut layer.position, pos);
                let position = layer.position;
                let body = layer.body;
                let visual = layer.visual;

                if let Some(body) = body {
                    physics.set_kinematic_position(body, position);
                }
                if let Some(visual) = visual {
                    render.set_visual_transform(visual, position, Quat::IDENTITY);
                }
            }
        }
    }

    // Physics runs in every phase so debris keeps falling after the run
    physics.step(dt);

    // Copy debris transforms back from physics to render
    for debris in session.debris.iter_mut() {
        let Some(body) = debris.body else { continue };
        if let Some((position, orientation)) = physics.body_transform(body) {
            debris.position = position;
            debris.orientation = orientation;
            if let Some(visual) = debris.visual {
                render.set_visual_transform(visual, position, orientation);
            }
        }
    }

    // Camera eases toward the stack top while the run is live
    if session.phase == GamePhase::Running {
        let target = session.stack_top_y() + session.config.camera_lift;
        session.camera_y = crate::lerp(session.camera_y, target, session.config.camera_follow);
        render.set_camera_target(session.camera_y);
    }

    events
}

/// Atomic reset: everything from the previous run is removed from the
/// bridges before the two seed layers are created.
fn reset<P: PhysicsBridge, R: RenderBridge>(
    session: &mut Session,
    physics: &mut P,
    render: &mut R,
) {
    session.clear_world(physics, render);

    session.phase = GamePhase::Running;
    session.elapsed_ms = 0.0;
    session.click_offsets.clear();
    session.aborted = false;
    session.hue = session.config.hue_start;
    session.rng_state = super::state::RngState::new(session.seed);

    render.set_background(BACKGROUND);

    // Two seed layers: one at the origin, one entering from off-screen
    let size = session.config.seed_size;
    let spawn = session.config.spawn_distance();
    session.push_layer(physics, render, 0.0, 0.0, size, size, Axis::Z);
    session.push_layer(physics, render, -spawn, 0.0, size, size, Axis::X);

    session.camera_y = session.config.camera_lift;

    log::info!("run started (seed {})", session.seed);
}

/// Slice the active layer against the base layer and apply the outcome.
fn handle_commit<P: PhysicsBridge, R: RenderBridge>(
    session: &mut Session,
    physics: &mut P,
    render: &mut R,
    events: &mut Vec<GameEvent>,
) {
    if session.stack.len() < 2 {
        return;
    }

    let result = {
        let active = &session.stack[session.stack.len() - 1];
        let base = &session.stack[session.stack.len() - 2];
        slice(active, base)
    };

    match result {
        SliceResult::Cut(cut) => apply_cut(session, physics, render, events, cut),
        SliceResult::Miss { delta } => {
            log::debug!("miss (delta {delta:.3})");
            game_over(session, physics, render, events);
        }
    }
}

/// Shrink and recenter the active layer, spawn the overhang debris, record
/// telemetry, and push the next incoming layer.
fn apply_cut<P: PhysicsBridge, R: RenderBridge>(
    session: &mut Session,
    physics: &mut P,
    render: &mut R,
    events: &mut Vec<GameEvent>,
    cut: SliceCut,
) {
    let layer_height = session.config.layer_height;
    let idx = session.stack.len() - 1;

    // Mutate the active layer to the kept footprint
    let (axis, old_body, old_visual) = {
        let layer = &mut session.stack[idx];
        let axis = layer.axis;
        axis.set_component(&mut layer.position, cut.kept_center);
        match axis {
            Axis::X => layer.width = cut.overlap,
            Axis::Z => layer.depth = cut.overlap,
        }
        (axis, layer.body.take(), layer.visual.take())
    };

    // Bridge resources are re-created with the cut footprint so physics and
    // render can never disagree with the simulation about its shape
    if let Some(body) = old_body {
        physics.remove_body(body);
    }
    if let Some(visual) = old_visual {
        render.remove_visual(visual);
    }
    let (footprint, position, hue) = {
        let layer = &session.stack[idx];
        (layer.footprint(layer_height), layer.position, layer.hue)
    };
    {
        let body = physics.create_static_body(footprint, position);
        let visual = render.create_visual(footprint, position, Hsl::layer(hue));
        let layer = &mut session.stack[idx];
        layer.body = Some(body);
        layer.visual = Some(visual);
    }

    // Overhang debris at the same height; tiny slivers are cosmetic noise
    // and are not spawned at all
    let (debris_pos, debris_w, debris_d) = {
        let layer = &session.stack[idx];
        let mut pos = layer.position;
        axis.set_component(&mut pos, cut.overhang_center);
        let (w, d) = match axis {
            Axis::X => (cut.overhang, layer.depth),
            Axis::Z => (layer.width, cut.overhang),
        };
        (pos, w, d)
    };
    let epsilon = session.config.debris_epsilon;
    if debris_w > epsilon && debris_d > epsilon {
        session.spawn_debris(physics, render, debris_pos, debris_w, debris_d, hue);
        events.push(GameEvent::DebrisSpawned {
            width: debris_w,
            depth: debris_d,
        });
    }

    // Telemetry: one signed offset per successful commit
    session.click_offsets.push(cut.delta);
    events.push(GameEvent::LayerCommitted {
        offset: cut.delta,
        score: session.score(),
        perfect: cut.overhang < consts::PERFECT_THRESHOLD,
    });

    // Next layer enters off-screen along the perpendicular axis
    session.hue += session.config.hue_step;
    let next_axis = axis.perpendicular();
    let spawn = session.config.spawn_distance();
    let (next_x, next_z, width, depth) = {
        let layer = &session.stack[idx];
        let x = if next_axis == Axis::X {
            -spawn
        } else {
            layer.position.x
        };
        let z = if next_axis == Axis::Z {
            -spawn
        } else {
            layer.position.z
        };
        (x, z, layer.width, layer.depth)
    };
    session.push_layer(physics, render, next_x, next_z, width, depth, next_axis);
}

/// Terminal miss: the whole active layer becomes debris and leaves the
/// stack, so the score counts only successful commits.
fn game_over<P: PhysicsBridge, R: RenderBridge>(
    session: &mut Session,
    physics: &mut P,
    render: &mut R,
    events: &mut Vec<GameEvent>,
) {
    if let Some(mut layer) = session.stack.pop() {
        if let Some(body) = layer.body.take() {
            physics.remove_body(body);
        }
        if let Some(visual) = layer.visual.take() {
            render.remove_visual(visual);
        }
        session.spawn_debris(
            physics,
            render,
            layer.position,
            layer.width,
            layer.depth,
            layer.hue,
        );
        events.push(GameEvent::DebrisSpawned {
            width: layer.width,
            depth: layer.depth,
        });
    }

    session.phase = GamePhase::Ended;
    let score = session.score();
    let message = GameOverMessage::from_session(session);
    log::info!("run ended: score {score}");
    events.push(GameEvent::RunEnded { score, message });
}
