//! Projectile ballistics
//!
//! Bullets fly in a straight line at constant speed: no gravity, no drag.
//! Aim error is added per axis before launch so bots (and the player) do not
//! hit with perfect accuracy.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::player::BodyId;

/// Tuning shared by every bullet in an arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    /// Travel speed in world units per second
    pub speed: f32,
    /// Collision radius
    pub radius: f32,
    /// Health removed from a body on hit
    pub damage: i32,
    /// Bullets above this many vertical units are discarded
    pub altitude_cutoff_units: f32,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: 500.0,
            radius: 2.0,
            damage: 10,
            altitude_cutoff_units: 5.0,
        }
    }
}

/// A bullet in flight.
///
/// Instances are recycled through the projectile pool, so every field is
/// rewritten by [`Bullet::launch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub position: Vec3,
    /// Orientation copied from the shooter (pitch, yaw, roll), for rendering
    pub rotation: Vec3,
    /// Unit travel direction
    pub direction: Vec3,
    pub speed: f32,
    pub radius: f32,
    pub damage: i32,
    /// Body that fired this bullet; it never collides with its owner
    pub owner: BodyId,
}

impl Bullet {
    /// Fresh bullet from tuning values, parked at the origin.
    pub fn new(tuning: &BulletTuning) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            speed: tuning.speed,
            radius: tuning.radius,
            damage: tuning.damage,
            owner: BodyId::Player,
        }
    }

    /// Reset this bullet for a new shot.
    pub fn launch(
        &mut self,
        tuning: &BulletTuning,
        position: Vec3,
        rotation: Vec3,
        direction: Vec3,
        owner: BodyId,
    ) {
        self.position = position;
        self.rotation = rotation;
        self.direction = direction.normalize_or(Vec3::NEG_Z);
        self.speed = tuning.speed;
        self.radius = tuning.radius;
        self.damage = tuning.damage;
        self.owner = owner;
    }

    /// Advance along the travel direction.
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.direction * (self.speed * dt);
    }

    /// Lowest point of the bullet sphere.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y - self.radius
    }
}

/// Random aim error for one axis, uniform in `[-deg/180, deg/180)`.
///
/// The value is added directly to a unit direction component, so 10 degrees
/// of error moves each component by at most ~0.056.
pub fn axial_error<R: Rng + ?Sized>(rng: &mut R, max_error_deg: f32) -> f32 {
    let roll: f32 = rng.gen_range(0.0..1.0);
    roll * (max_error_deg / 90.0) - max_error_deg / 180.0
}

/// Perturb a unit aim direction by independent per-axis error and renormalize.
pub fn scatter<R: Rng + ?Sized>(rng: &mut R, direction: Vec3, max_error_deg: f32) -> Vec3 {
    if max_error_deg <= 0.0 {
        return direction.normalize_or(Vec3::NEG_Z);
    }
    let error = Vec3::new(
        axial_error(rng, max_error_deg),
        axial_error(rng, max_error_deg),
        axial_error(rng, max_error_deg),
    );
    (direction + error).normalize_or(direction)
}
