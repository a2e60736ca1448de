//! Oscillator and difficulty controller
//!
//! The active layer sweeps back and forth on a sine wave driven by elapsed
//! real time; speed is a step function of the current stack height. Both are
//! pure so the run controller can compute one authoritative position per
//! tick and hand the identical value to the physics and render bridges.

use crate::config::Config;

/// Authoritative mover position along the travel axis.
///
/// `speed` is in radians per millisecond, matching the difficulty ramp's
/// units.
#[inline]
pub fn oscillate(elapsed_ms: f64, speed: f32, amplitude: f32) -> f32 {
    (elapsed_ms as f32 * speed).sin() * amplitude
}

/// Oscillation speed for a given stack height.
///
/// Monotonically non-decreasing step function: one increment every
/// `speed_interval` layers. Recomputed every tick from current height, never
/// cached, so difficulty is always consistent with the stack.
#[inline]
pub fn speed_for_level(level: u32, config: &Config) -> f32 {
    config.speed_base + (level / config.speed_interval) as f32 * config.speed_increment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillate_starts_at_center() {
        assert_eq!(oscillate(0.0, 0.0005, 25.0), 0.0);
    }

    #[test]
    fn test_oscillate_bounded_by_amplitude() {
        let config = Config::default();
        for i in 0..10_000 {
            let pos = oscillate(i as f64, config.speed_base, config.travel_amplitude);
            assert!(pos.abs() <= config.travel_amplitude + 1e-4);
        }
    }

    #[test]
    fn test_oscillate_reaches_peak() {
        // sin peaks at pi/2: elapsed = (pi/2) / speed
        let speed = 0.0005;
        let peak_ms = (std::f32::consts::FRAC_PI_2 / speed) as f64;
        let pos = oscillate(peak_ms, speed, 25.0);
        assert!((pos - 25.0).abs() < 1e-3);
    }

    #[test]
    fn test_speed_steps_every_interval() {
        let config = Config::default();
        // Levels 0..=3 share the base speed, level 4 takes the first step
        assert_eq!(speed_for_level(0, &config), config.speed_base);
        assert_eq!(speed_for_level(3, &config), config.speed_base);
        assert_eq!(
            speed_for_level(4, &config),
            config.speed_base + config.speed_increment
        );
        assert_eq!(
            speed_for_level(9, &config),
            config.speed_base + 2.0 * config.speed_increment
        );
    }

    #[test]
    fn test_speed_is_non_decreasing() {
        let config = Config::default();
        let mut prev = 0.0;
        for level in 0..256 {
            let speed = speed_for_level(level, &config);
            assert!(speed >= prev, "speed regressed at level {level}");
            prev = speed;
        }
    }
}
