//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit tick(dt) only, no scheduling primitives
//! - Seeded RNG only
//! - No rendering or physics dependencies beyond the bridge traits

pub mod mover;
pub mod slice;
pub mod state;
pub mod tick;

pub use mover::{oscillate, speed_for_level};
pub use slice::{SliceCut, SliceResult, slice};
pub use state::{Axis, Debris, GameEvent, GamePhase, Layer, RngState, Session};
pub use tick::{TickInput, tick};
