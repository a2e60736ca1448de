//! Headless render bridges
//!
//! `RecordingRender` captures every declarative render call so tests (and the
//! demo binary) can assert on what a real renderer would have been told to
//! do. `NullRender` discards everything.

use glam::{Quat, Vec3};

use super::{Footprint, Hsl, RenderBridge, VisualId};

/// One recorded render command
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    CreateVisual {
        id: VisualId,
        footprint: Footprint,
        position: Vec3,
        color: Hsl,
    },
    RemoveVisual {
        id: VisualId,
    },
    SetTransform {
        id: VisualId,
        position: Vec3,
        orientation: Quat,
    },
    SetCameraTarget {
        y: f32,
    },
    SetBackground {
        color: Hsl,
    },
    Resize {
        width: u32,
        height: u32,
    },
}

/// Render bridge that records all traffic
#[derive(Debug, Default)]
pub struct RecordingRender {
    pub calls: Vec<RenderCall>,
    next_id: u32,
    live: u32,
}

impl RecordingRender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visuals created and not yet removed
    pub fn live_visuals(&self) -> u32 {
        self.live
    }

    /// Drop the recorded history (live-visual accounting is kept)
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl RenderBridge for RecordingRender {
    fn create_visual(&mut self, footprint: Footprint, position: Vec3, color: Hsl) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id += 1;
        self.live += 1;
        self.calls.push(RenderCall::CreateVisual {
            id,
            footprint,
            position,
            color,
        });
        id
    }

    fn remove_visual(&mut self, id: VisualId) {
        self.live = self.live.saturating_sub(1);
        self.calls.push(RenderCall::RemoveVisual { id });
    }

    fn set_visual_transform(&mut self, id: VisualId, position: Vec3, orientation: Quat) {
        self.calls.push(RenderCall::SetTransform {
            id,
            position,
            orientation,
        });
    }

    fn set_camera_target(&mut self, y: f32) {
        self.calls.push(RenderCall::SetCameraTarget { y });
    }

    fn set_background(&mut self, color: Hsl) {
        self.calls.push(RenderCall::SetBackground { color });
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.calls.push(RenderCall::Resize { width, height });
    }
}

/// Render bridge that ignores everything
#[derive(Debug, Default)]
pub struct NullRender {
    next_id: u32,
}

impl NullRender {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBridge for NullRender {
    fn create_visual(&mut self, _footprint: Footprint, _position: Vec3, _color: Hsl) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id += 1;
        id
    }

    fn remove_visual(&mut self, _id: VisualId) {}
    fn set_visual_transform(&mut self, _id: VisualId, _position: Vec3, _orientation: Quat) {}
    fn set_camera_target(&mut self, _y: f32) {}
    fn set_background(&mut self, _color: Hsl) {}
    fn resize(&mut self, _width: u32, _height: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_tracks_live_visuals() {
        let mut render = RecordingRender::new();
        let a = render.create_visual(Footprint::new(1.0, 1.0, 1.0), Vec3::ZERO, Hsl::layer(230.0));
        let b = render.create_visual(Footprint::new(1.0, 1.0, 1.0), Vec3::ZERO, Hsl::layer(235.0));
        assert_ne!(a, b);
        assert_eq!(render.live_visuals(), 2);

        render.remove_visual(a);
        assert_eq!(render.live_visuals(), 1);
        assert_eq!(render.calls.len(), 3);
    }
}
