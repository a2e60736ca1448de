//! Physics and render boundary
//!
//! The simulation never draws and never resolves collisions itself. It emits
//! declarative commands through these traits; concrete implementations are
//! injected by the host. That keeps every piece of game logic testable
//! headless, with `RecordingRender` standing in for a real renderer and
//! `DebrisPhysics` (or an external engine) behind `PhysicsBridge`.
//!
//! Ownership rule: the simulation owns geometry and stack membership; the
//! bridges own the resources behind `BodyId`/`VisualId` and only ever read
//! positions from, or report transforms back into, the simulation's records.

pub mod headless;
pub mod physics;

pub use headless::{NullRender, RecordingRender, RenderCall};
pub use physics::DebrisPhysics;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Opaque handle to a physics-owned body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Opaque handle to a render-owned visual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualId(pub u32);

/// Box footprint of a layer or debris chunk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Footprint {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// HSL color for layer visuals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (not normalized; the renderer wraps)
    pub h: f32,
    /// Saturation, 0..=1
    pub s: f32,
    /// Lightness, 0..=1
    pub l: f32,
}

impl Hsl {
    /// Standard layer color at the given hue
    pub fn layer(hue: f32) -> Self {
        Self {
            h: hue,
            s: 0.6,
            l: 0.65,
        }
    }
}

/// Rigid-body physics consumed by the run controller
///
/// Static bodies are kinematic: the controller moves the active layer's body
/// with `set_kinematic_position` every tick so the physics world and the
/// simulation never disagree about where it is. Dynamic bodies (debris) are
/// integrated by the implementation during `step` and read back through
/// `body_transform`.
pub trait PhysicsBridge {
    fn create_static_body(&mut self, footprint: Footprint, position: Vec3) -> BodyId;
    fn create_dynamic_body(
        &mut self,
        footprint: Footprint,
        position: Vec3,
        mass: f32,
        spin: Vec3,
    ) -> BodyId;
    fn remove_body(&mut self, id: BodyId);
    /// Move a static body without imparting velocity
    fn set_kinematic_position(&mut self, id: BodyId, position: Vec3);
    /// Advance the physics world by `dt` seconds
    fn step(&mut self, dt: f32);
    /// Current transform of a dynamic body, if it still exists
    fn body_transform(&self, id: BodyId) -> Option<(Vec3, Quat)>;
}

/// Scene output consumed by the run controller
pub trait RenderBridge {
    fn create_visual(&mut self, footprint: Footprint, position: Vec3, color: Hsl) -> VisualId;
    fn remove_visual(&mut self, id: VisualId);
    fn set_visual_transform(&mut self, id: VisualId, position: Vec3, orientation: Quat);
    /// Vertical camera target; the renderer frames the stack top
    fn set_camera_target(&mut self, y: f32);
    fn set_background(&mut self, color: Hsl);
    /// Viewport change, forwarded from the host; never touches simulation state
    fn resize(&mut self, width: u32, height: u32);
}
