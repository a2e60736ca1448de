//! The slice engine
//!
//! The one-dimensional cut of the active layer against the layer beneath it.
//! Everything happens along the active layer's travel axis; the
//! perpendicular extent is untouched. Pure functions only: a `Miss` never
//! mutates anything, and applying a `Cut` is the stack manager's job.

use serde::{Deserialize, Serialize};

use super::state::Layer;

/// Geometry of a successful cut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceCut {
    /// Signed positional delta between active and base at commit time
    /// (this is the per-commit telemetry value)
    pub delta: f32,
    /// Surviving extent along the travel axis; always > 0
    pub overlap: f32,
    /// Center of the surviving piece along the travel axis
    pub kept_center: f32,
    /// Extent of the cut-off overhang along the travel axis
    pub overhang: f32,
    /// Center of the overhang along the travel axis
    pub overhang_center: f32,
}

/// Outcome of a commit attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliceResult {
    /// Some overlap survives; the run continues
    Cut(SliceCut),
    /// No overlap at all; the run must terminate
    Miss { delta: f32 },
}

/// Cut the active layer against the base layer beneath it.
///
/// `delta` is the misalignment along the active layer's travel axis. The
/// overlap is what remains of the active extent after removing `|delta|`;
/// anything `<= 0` (exact zero included) is a `Miss`. On a `Cut` the
/// surviving piece recenters onto the overlapping region (shift by
/// `-delta/2`) and the overhang sits flush against it on the overshoot
/// side, `sign(delta) * (overlap + overhang) / 2` from the recentered
/// piece. Kept and overhang together tile the pre-cut footprint exactly.
pub fn slice(active: &Layer, base: &Layer) -> SliceResult {
    let axis = active.axis;
    let delta = axis.component(active.position) - axis.component(base.position);
    let size = active.extent();
    let overhang = delta.abs();
    let overlap = size - overhang;

    if overlap <= 0.0 {
        return SliceResult::Miss { delta };
    }

    let kept_center = axis.component(active.position) - delta / 2.0;
    let overhang_center = kept_center + delta.signum() * (overlap / 2.0 + overhang / 2.0);

    SliceResult::Cut(SliceCut {
        delta,
        overlap,
        kept_center,
        overhang,
        overhang_center,
    })
}
