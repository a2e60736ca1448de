//! Session state and core simulation types
//!
//! The `Session` owns all mutable run state: the layer stack, the debris
//! bookkeeping, the click-offset telemetry, and the seeded RNG. Bridge-owned
//! resources appear only as opaque `BodyId`/`VisualId` handles; the
//! simulation owns geometry, the bridges own everything behind the handles.

use glam::{Quat, Vec3};
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::bridge::{BodyId, Footprint, Hsl, PhysicsBridge, RenderBridge, VisualId};
use crate::config::Config;
use crate::telemetry::GameOverMessage;

/// Horizontal axis the active layer travels (and is cut) along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// The other horizontal axis; each new layer travels perpendicular to
    /// the one before it
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Component of `v` along this axis
    #[inline]
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Z => v.z,
        }
    }

    /// Overwrite the component of `v` along this axis
    #[inline]
    pub fn set_component(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Z => v.z = value,
        }
    }
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Not yet started (menu); input other than `start` is ignored
    #[default]
    Idle,
    /// Mover active, commits accepted
    Running,
    /// Terminal; only reset/start is valid
    Ended,
}

/// A stack block, placed (immutable) or active (currently moving)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Travel/cut axis of this layer
    pub axis: Axis,
    /// Center position; y is fixed at stack_index * layer_height
    pub position: Vec3,
    pub width: f32,
    pub depth: f32,
    /// Hue this layer was created with (debris reuses it)
    pub hue: f32,
    /// Physics-owned handle
    pub body: Option<BodyId>,
    /// Render-owned handle
    pub visual: Option<VisualId>,
}

impl Layer {
    /// Extent along this layer's own travel axis
    pub fn extent(&self) -> f32 {
        match self.axis {
            Axis::X => self.width,
            Axis::Z => self.depth,
        }
    }

    pub fn footprint(&self, layer_height: f32) -> Footprint {
        Footprint::new(self.width, layer_height, self.depth)
    }
}

/// A falling overhang remnant
///
/// Physics owns its motion; the session only keeps it for transform
/// copy-back and removal bookkeeping. Nothing ties it back to the stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debris {
    pub position: Vec3,
    pub orientation: Quat,
    pub width: f32,
    pub depth: f32,
    pub mass: f32,
    pub body: Option<BodyId>,
    pub visual: Option<VisualId>,
}

/// RNG state wrapper for serialization
///
/// Pcg32 itself is not serializable; storing (seed, stream) and drawing each
/// debris spin from a fresh stream keeps spins deterministic per run while
/// the whole session stays a plain serde struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// RNG for the next draw; bumps the stream counter
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Outward event produced by a tick, for the host to react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Run (re)started; two seed layers are in place
    Started,
    /// A commit succeeded; `perfect` flags a near-centered drop
    LayerCommitted {
        offset: f32,
        score: u32,
        perfect: bool,
    },
    /// An overhang (or the final missed layer) became a physics body
    DebrisSpawned { width: f32, depth: f32 },
    /// Terminal. `message` is present only when score > 0
    RunEnded {
        score: u32,
        message: Option<GameOverMessage>,
    },
}

/// One run, from start to termination
///
/// Exclusively owned by the run controller; reset destroys and reinitializes
/// it atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub config: Config,
    pub seed: u64,
    pub rng_state: RngState,
    pub phase: GamePhase,
    /// Real time elapsed since the run started, accumulated from tick dt
    pub elapsed_ms: f64,
    /// Insertion order = height order; last element is the active layer
    /// while `Running`
    pub stack: Vec<Layer>,
    pub debris: Vec<Debris>,
    /// One signed positional delta per successful commit
    pub click_offsets: Vec<f32>,
    /// Hue for the next created layer
    pub hue: f32,
    /// Interpolated camera height pushed to the render bridge
    pub camera_y: f32,
    /// Set by a forced abort; forces score to 0 and suppresses telemetry
    pub aborted: bool,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let hue = config.hue_start;
        Self {
            config,
            seed,
            rng_state: RngState::new(seed),
            phase: GamePhase::Idle,
            elapsed_ms: 0.0,
            stack: Vec::new(),
            debris: Vec::new(),
            click_offsets: Vec::new(),
            hue,
            camera_y: 0.0,
            aborted: false,
        }
    }

    /// Successful commits so far; equals len(stack) - 1 at termination with
    /// the seed layers excluded. Forced aborts score 0.
    pub fn score(&self) -> u32 {
        if self.aborted {
            0
        } else {
            self.click_offsets.len() as u32
        }
    }

    /// Current stack height, the difficulty input (includes the active layer)
    pub fn level(&self) -> u32 {
        self.stack.len() as u32
    }

    /// The moving, uncommitted top layer
    pub fn active(&self) -> Option<&Layer> {
        self.stack.last()
    }

    pub fn active_mut(&mut self) -> Option<&mut Layer> {
        self.stack.last_mut()
    }

    /// The committed layer beneath the active one
    pub fn base(&self) -> Option<&Layer> {
        if self.stack.len() < 2 {
            return None;
        }
        self.stack.get(self.stack.len() - 2)
    }

    /// Top surface height of the stack
    pub fn stack_top_y(&self) -> f32 {
        self.stack.len() as f32 * self.config.layer_height
    }

    /// Random low-magnitude angular velocity for a debris body
    pub fn debris_spin(&mut self) -> Vec3 {
        let spin = self.config.debris_spin;
        let mut rng = self.rng_state.next_rng();
        let mut component = move || rng.random_range(-0.5..0.5) * spin;
        Vec3::new(component(), component(), component())
    }

    /// Append a new layer at the top of the stack; it becomes the active
    /// layer. Creates its static body and visual through the bridges.
    pub fn push_layer<P: PhysicsBridge, R: RenderBridge>(
        &mut self,
        physics: &mut P,
        render: &mut R,
        x: f32,
        z: f32,
        width: f32,
        depth: f32,
        axis: Axis,
    ) {
        let y = self.stack_top_y();
        let position = Vec3::new(x, y, z);
        let footprint = Footprint::new(width, self.config.layer_height, depth);
        let hue = self.hue;

        let body = physics.create_static_body(footprint, position);
        let visual = render.create_visual(footprint, position, Hsl::layer(hue));

        self.stack.push(Layer {
            axis,
            position,
            width,
            depth,
            hue,
            body: Some(body),
            visual: Some(visual),
        });
    }

    /// Spawn a falling debris body at the given footprint and position.
    /// Mass scales with footprint area relative to the seed footprint.
    pub fn spawn_debris<P: PhysicsBridge, R: RenderBridge>(
        &mut self,
        physics: &mut P,
        render: &mut R,
        position: Vec3,
        width: f32,
        depth: f32,
        hue: f32,
    ) {
        let footprint = Footprint::new(width, self.config.layer_height, depth);
        let mass = self.config.debris_mass(width, depth);
        let spin = self.debris_spin();

        let body = physics.create_dynamic_body(footprint, position, mass, spin);
        let visual = render.create_visual(footprint, position, Hsl::layer(hue));

        self.debris.push(Debris {
            position,
            orientation: Quat::IDENTITY,
            width,
            depth,
            mass,
            body: Some(body),
            visual: Some(visual),
        });
    }

    /// Remove every stack and debris resource from the bridges and clear the
    /// collections. No partial state is ever visible: all removals happen
    /// before the caller re-seeds.
    pub fn clear_world<P: PhysicsBridge, R: RenderBridge>(
        &mut self,
        physics: &mut P,
        render: &mut R,
    ) {
        for layer in self.stack.drain(..) {
            if let Some(body) = layer.body {
                physics.remove_body(body);
            }
            if let Some(visual) = layer.visual {
                render.remove_visual(visual);
            }
        }
        for debris in self.debris.drain(..) {
            if let Some(body) = debris.body {
                physics.remove_body(body);
            }
            if let Some(visual) = debris.visual {
                render.remove_visual(visual);
            }
        }
    }
}
