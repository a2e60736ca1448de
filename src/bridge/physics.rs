//! Built-in minimal rigid-body physics
//!
//! Just enough to make debris fall convincingly without an external engine:
//! gravity, linear damping, and free angular velocity. No contact resolution;
//! debris tumbles through everything on its way down, which is all the game
//! ever asks of it.

use std::collections::HashMap;

use glam::{Quat, Vec3};

use super::{BodyId, Footprint, PhysicsBridge};
use crate::consts;

#[derive(Debug, Clone)]
struct Body {
    position: Vec3,
    orientation: Quat,
    velocity: Vec3,
    angular_velocity: Vec3,
    #[allow(dead_code)]
    footprint: Footprint,
    #[allow(dead_code)]
    mass: f32,
    dynamic: bool,
}

/// Gravity-and-damping integrator implementing `PhysicsBridge`
#[derive(Debug, Default)]
pub struct DebrisPhysics {
    bodies: HashMap<u32, Body>,
    next_id: u32,
}

impl DebrisPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live bodies (static + dynamic)
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn insert(&mut self, body: Body) -> BodyId {
        let id = self.next_id;
        self.next_id += 1;
        self.bodies.insert(id, body);
        BodyId(id)
    }
}

impl PhysicsBridge for DebrisPhysics {
    fn create_static_body(&mut self, footprint: Footprint, position: Vec3) -> BodyId {
        self.insert(Body {
            position,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            footprint,
            mass: 0.0,
            dynamic: false,
        })
    }

    fn create_dynamic_body(
        &mut self,
        footprint: Footprint,
        position: Vec3,
        mass: f32,
        spin: Vec3,
    ) -> BodyId {
        self.insert(Body {
            position,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: spin,
            footprint,
            mass,
            dynamic: true,
        })
    }

    fn remove_body(&mut self, id: BodyId) {
        self.bodies.remove(&id.0);
    }

    fn set_kinematic_position(&mut self, id: BodyId, position: Vec3) {
        if let Some(body) = self.bodies.get_mut(&id.0) {
            body.position = position;
        }
    }

    fn step(&mut self, dt: f32) {
        let damping = 1.0 - consts::DEBRIS_DAMPING * dt;
        for body in self.bodies.values_mut() {
            if !body.dynamic {
                continue;
            }
            body.velocity.y += consts::GRAVITY * dt;
            body.velocity *= damping;
            body.position += body.velocity * dt;

            // Integrate orientation from angular velocity
            let omega = body.angular_velocity;
            if omega != Vec3::ZERO {
                let angle = omega.length() * dt;
                body.orientation =
                    (Quat::from_axis_angle(omega.normalize(), angle) * body.orientation)
                        .normalize();
            }
        }
    }

    fn body_transform(&self, id: BodyId) -> Option<(Vec3, Quat)> {
        self.bodies
            .get(&id.0)
            .map(|b| (b.position, b.orientation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footprint() -> Footprint {
        Footprint::new(1.0, 1.5, 1.0)
    }

    #[test]
    fn test_dynamic_body_falls() {
        let mut world = DebrisPhysics::new();
        let id = world.create_dynamic_body(footprint(), Vec3::new(0.0, 10.0, 0.0), 5.0, Vec3::ZERO);

        for _ in 0..60 {
            world.step(1.0 / 60.0);
        }

        let (pos, _) = world.body_transform(id).unwrap();
        assert!(pos.y < 10.0, "debris should fall, got y={}", pos.y);
    }

    #[test]
    fn test_static_body_stays_put() {
        let mut world = DebrisPhysics::new();
        let id = world.create_static_body(footprint(), Vec3::new(1.0, 2.0, 3.0));

        for _ in 0..60 {
            world.step(1.0 / 60.0);
        }

        let (pos, _) = world.body_transform(id).unwrap();
        assert_eq!(pos, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_spin_rotates_body() {
        let mut world = DebrisPhysics::new();
        let id = world.create_dynamic_body(
            footprint(),
            Vec3::ZERO,
            1.0,
            Vec3::new(0.0, 0.0, 1.0),
        );

        world.step(1.0 / 60.0);

        let (_, orientation) = world.body_transform(id).unwrap();
        assert!(orientation != Quat::IDENTITY);
    }

    #[test]
    fn test_kinematic_move_keeps_zero_velocity() {
        let mut world = DebrisPhysics::new();
        let id = world.create_static_body(footprint(), Vec3::ZERO);
        world.set_kinematic_position(id, Vec3::new(5.0, 0.0, 0.0));
        world.step(1.0 / 60.0);

        let (pos, _) = world.body_transform(id).unwrap();
        assert_eq!(pos, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_remove_body() {
        let mut world = DebrisPhysics::new();
        let id = world.create_dynamic_body(footprint(), Vec3::ZERO, 1.0, Vec3::ZERO);
        assert_eq!(world.body_count(), 1);
        world.remove_body(id);
        assert_eq!(world.body_count(), 0);
        assert!(world.body_transform(id).is_none());
    }
}
