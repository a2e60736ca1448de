//! Sky Stack - an endless block-stacking arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (stack geometry, slicing, run state machine)
//! - `bridge`: Physics/render boundary traits plus headless implementations
//! - `config`: Per-session tunables
//! - `telemetry`: End-of-run message emitted across the host boundary
//!
//! The crate owns no rendering and no collision response. Everything the
//! simulation wants from the outside world goes through the `bridge` traits,
//! so the whole game logic runs (and is tested) headless.

pub mod bridge;
pub mod config;
pub mod sim;
pub mod telemetry;

pub use config::Config;
pub use telemetry::GameOverMessage;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Height of every stack layer (chunky slabs)
    pub const LAYER_HEIGHT: f32 = 1.5;
    /// Seed footprint side length (both seed layers are square)
    pub const SEED_SIZE: f32 = 6.5;
    /// Oscillation amplitude of the active layer (full-screen sweep)
    pub const TRAVEL_AMPLITUDE: f32 = 25.0;
    /// New layers spawn this factor beyond the travel amplitude, off-screen
    pub const SPAWN_MARGIN: f32 = 1.1;

    /// Oscillation speed ramp: base speed in radians per elapsed millisecond
    pub const SPEED_BASE: f32 = 0.0005;
    /// Speed added at every difficulty step
    pub const SPEED_INCREMENT: f32 = 0.0002;
    /// Stack-height interval between difficulty steps
    pub const SPEED_INTERVAL: u32 = 4;

    /// Debris smaller than this in both footprint dimensions is not spawned
    pub const DEBRIS_EPSILON: f32 = 0.05;
    /// Mass of a seed-footprint-sized debris body (heavy dead weight)
    pub const DEBRIS_BASE_MASS: f32 = 5.0;
    /// Magnitude of the random angular velocity given to debris (low spin)
    pub const DEBRIS_SPIN: f32 = 0.1;
    /// Gravity applied to dynamic bodies by the built-in physics
    pub const GRAVITY: f32 = -30.0;
    /// Linear damping factor per second for falling debris
    pub const DEBRIS_DAMPING: f32 = 0.1;

    /// A commit with |offset| below this counts as a perfect drop
    pub const PERFECT_THRESHOLD: f32 = 0.5;

    /// Camera interpolation factor toward the stack top, per tick
    pub const CAMERA_FOLLOW: f32 = 0.05;
    /// Camera height above the stack top
    pub const CAMERA_LIFT: f32 = 4.0;

    /// Layer color hue at run start (deep purple) and step per commit
    pub const HUE_START: f32 = 230.0;
    pub const HUE_STEP: f32 = 5.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
