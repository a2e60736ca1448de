//! Per-session game tunables
//!
//! Fixed for the lifetime of a session; the run controller never mutates
//! these. Defaults reproduce the classic balance.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Height of every layer slab
    pub layer_height: f32,
    /// Side length of the square seed footprint
    pub seed_size: f32,
    /// Oscillation amplitude of the active layer
    pub travel_amplitude: f32,
    /// Spawn distance factor beyond the amplitude for incoming layers
    pub spawn_margin: f32,

    // === Difficulty ramp ===
    /// Base oscillation speed (radians per elapsed millisecond)
    pub speed_base: f32,
    /// Speed added per difficulty step
    pub speed_increment: f32,
    /// Stack-height interval between difficulty steps
    pub speed_interval: u32,

    // === Debris ===
    /// Minimum footprint extent for debris to be spawned at all
    pub debris_epsilon: f32,
    /// Mass of debris with the full seed footprint; scales with area
    pub debris_base_mass: f32,
    /// Magnitude of random debris angular velocity
    pub debris_spin: f32,

    // === Camera ===
    /// Interpolation factor toward the stack top, per tick
    pub camera_follow: f32,
    /// Camera height above the stack top
    pub camera_lift: f32,

    // === Color ===
    /// Hue of the first layer
    pub hue_start: f32,
    /// Hue advance per committed layer
    pub hue_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layer_height: consts::LAYER_HEIGHT,
            seed_size: consts::SEED_SIZE,
            travel_amplitude: consts::TRAVEL_AMPLITUDE,
            spawn_margin: consts::SPAWN_MARGIN,

            speed_base: consts::SPEED_BASE,
            speed_increment: consts::SPEED_INCREMENT,
            speed_interval: consts::SPEED_INTERVAL,

            debris_epsilon: consts::DEBRIS_EPSILON,
            debris_base_mass: consts::DEBRIS_BASE_MASS,
            debris_spin: consts::DEBRIS_SPIN,

            camera_follow: consts::CAMERA_FOLLOW,
            camera_lift: consts::CAMERA_LIFT,

            hue_start: consts::HUE_START,
            hue_step: consts::HUE_STEP,
        }
    }
}

impl Config {
    /// Distance from center at which incoming layers spawn (off-screen)
    pub fn spawn_distance(&self) -> f32 {
        self.travel_amplitude * self.spawn_margin
    }

    /// Footprint area of a seed layer (mass reference for debris)
    pub fn seed_area(&self) -> f32 {
        self.seed_size * self.seed_size
    }

    /// Mass for a debris body with the given footprint
    pub fn debris_mass(&self, width: f32, depth: f32) -> f32 {
        self.debris_base_mass * (width * depth) / self.seed_area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_distance_beyond_amplitude() {
        let config = Config::default();
        assert!(config.spawn_distance() > config.travel_amplitude);
    }

    #[test]
    fn test_debris_mass_scales_with_area() {
        let config = Config::default();
        // Full seed footprint gets the full base mass
        let full = config.debris_mass(config.seed_size, config.seed_size);
        assert!((full - config.debris_base_mass).abs() < 1e-6);
        // Half the footprint along one axis halves the mass
        let half = config.debris_mass(config.seed_size / 2.0, config.seed_size);
        assert!((half - config.debris_base_mass / 2.0).abs() < 1e-6);
    }
}
