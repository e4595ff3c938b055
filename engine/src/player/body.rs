//! Kinematic Body
//!
//! Shared movement model for the player and the bots. A body is a point at
//! eye level (`position.y` is the camera height above the surface it stands
//! on) with a horizontal collision radius.
//!
//! # Integration
//!
//! Each fixed tick:
//!
//! 1. Queued look deltas are scaled by sensitivity and Δt and added to the
//!    current rotation; pitch is clamped to ±90° when constrained
//! 2. Movement intents add the full speed constant to local velocity
//! 3. Half the constant acceleration is applied, horizontal velocity is capped,
//!    the body translates along its local X then Z axes (world Y for height),
//!    then the second half of the acceleration is applied
//! 4. Ambient friction scales this tick's displacement and adds it back into
//!    velocity (ground or air coefficients)
//!
//! Velocity is held in the body's local frame, so turning re-aims existing
//! momentum.
//!
//! # Usage
//!
//! ```rust,ignore
//! use voxel_arena_engine::player::{BodyTuning, KinematicBody};
//!
//! let mut body = KinematicBody::new(BodyTuning::default());
//! body.intents.forward = true;
//! body.rotate(0.0, 12.0, 0.0);
//! body.update(0.01);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::MoveIntents;
use crate::physics::orientation_yxz;

/// Identifies a body in the arena. Bots are addressed by roster index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyId {
    Player,
    Bot(usize),
}

/// Ground contact state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Grounded,
    Airborne,
}

/// Movement and health tuning shared by every body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyTuning {
    /// Speed cap and per-tick thrust, world units per second
    pub speed: f32,
    /// Horizontal collision radius
    pub radius: f32,
    /// Eye height above the supporting surface
    pub camera_height: f32,
    /// Default jump apex height
    pub jump_height: f32,
    pub max_health: i32,
    /// Constant vertical acceleration (negative is down)
    pub gravity: f32,
    /// Horizontal friction coefficient while grounded
    pub ground_friction: f32,
    /// Horizontal friction coefficient while airborne
    pub air_friction: f32,
    /// Look sensitivity applied to raw pointer deltas
    pub mouse_sensitivity: f32,
    /// Look sign per axis; -1 makes pointer-right turn right
    pub inverse_look: f32,
    pub constrain_vertical_look: bool,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            speed: 200.0,
            radius: 20.0,
            camera_height: 40.0,
            jump_height: 125.0,
            max_health: 100,
            gravity: -150.0,
            ground_friction: -10.0,
            air_friction: -0.5,
            mouse_sensitivity: 0.25,
            inverse_look: -1.0,
            constrain_vertical_look: true,
        }
    }
}

/// Position, orientation and velocity of one player or bot.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    pub position: Vec3,
    /// Euler angles (pitch, yaw, roll), applied in YXZ order
    pub rotation: Vec3,
    /// Clamped look pitch used for the camera and aiming
    pub look_pitch: f32,
    /// Velocity in the body's local frame
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub ground_friction: Vec3,
    pub air_friction: Vec3,
    pub inverse_look: Vec3,
    pub mouse_sensitivity: Vec3,
    pub speed: f32,
    pub radius: f32,
    pub camera_height: f32,
    pub jump_height: f32,
    pub health: i32,
    pub max_health: i32,
    /// True only while resting on the floor or a wall top
    pub can_jump: bool,
    /// Free-flight bodies keep pitch and roll in their rotation
    pub fly: bool,
    pub constrain_vertical_look: bool,
    pub intents: MoveIntents,
    aggregate_rotation: Vec3,
}

impl KinematicBody {
    /// Create a body at the origin, grounded, at full health.
    pub fn new(tuning: BodyTuning) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            look_pitch: 0.0,
            velocity: Vec3::ZERO,
            acceleration: Vec3::new(0.0, tuning.gravity, 0.0),
            ground_friction: Vec3::new(tuning.ground_friction, 0.0, tuning.ground_friction),
            air_friction: Vec3::new(tuning.air_friction, 0.0, tuning.air_friction),
            inverse_look: Vec3::splat(tuning.inverse_look),
            mouse_sensitivity: Vec3::splat(tuning.mouse_sensitivity),
            speed: tuning.speed,
            radius: tuning.radius,
            camera_height: tuning.camera_height,
            jump_height: tuning.jump_height,
            health: tuning.max_health,
            max_health: tuning.max_health,
            can_jump: true,
            fly: false,
            constrain_vertical_look: tuning.constrain_vertical_look,
            intents: MoveIntents::default(),
            aggregate_rotation: Vec3::ZERO,
        }
    }

    /// Queue a look impulse in raw pointer pixels.
    ///
    /// `x` turns about the pitch axis, `y` about yaw, `z` about roll. Impulses
    /// accumulate until the next [`update`](Self::update).
    pub fn rotate(&mut self, x: f32, y: f32, z: f32) {
        self.aggregate_rotation += Vec3::new(x, y, z);
    }

    /// Look impulses queued since the last update.
    pub fn pending_rotation(&self) -> Vec3 {
        self.aggregate_rotation
    }

    /// Advance the body by one fixed step.
    pub fn update(&mut self, dt: f32) {
        // Look
        let current = Vec3::new(self.look_pitch, self.rotation.y, self.rotation.z);
        let mut look =
            self.aggregate_rotation * self.inverse_look * self.mouse_sensitivity * dt + current;
        if self.constrain_vertical_look {
            look.x = look.x.clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
        }
        if !self.fly {
            self.rotation.x = 0.0;
            self.rotation.z = 0.0;
            look.z = 0.0;
        }

        // Thrust
        if self.intents.forward {
            self.velocity.z -= self.speed;
        }
        if self.intents.left {
            self.velocity.x -= self.speed;
        }
        if self.intents.backward {
            self.velocity.z += self.speed;
        }
        if self.intents.right {
            self.velocity.x += self.speed;
        }

        // Move
        let half_accel = self.acceleration * (dt * 0.5);
        self.velocity += half_accel;
        let horizontal_sq = self.velocity.x * self.velocity.x + self.velocity.z * self.velocity.z;
        if horizontal_sq > self.speed * self.speed {
            let scalar = self.speed / horizontal_sq.sqrt();
            self.velocity.x *= scalar;
            self.velocity.z *= scalar;
        }
        let scaled = self.velocity * dt;
        let orientation = self.orientation();
        self.position += orientation * Vec3::new(scaled.x, 0.0, 0.0);
        self.position += orientation * Vec3::new(0.0, 0.0, scaled.z);
        self.position.y += scaled.y;
        self.velocity += half_accel;

        // Ambient forces
        let friction = if self.can_jump {
            self.ground_friction
        } else {
            self.air_friction
        };
        self.velocity += scaled * friction;

        // Commit look
        self.look_pitch = look.x;
        self.rotation = if self.fly {
            look
        } else {
            Vec3::new(0.0, look.y, 0.0)
        };
        self.aggregate_rotation = Vec3::ZERO;
    }

    /// Jump if grounded. `None` uses the body's default jump height.
    ///
    /// Returns `true` when the jump happened.
    pub fn jump(&mut self, height: Option<f32>) -> bool {
        if !self.can_jump {
            return false;
        }
        let height = height.unwrap_or(self.jump_height);
        let thrust = (2.0 * height * self.acceleration.y).abs().sqrt();
        self.velocity.y += thrust;
        self.can_jump = false;
        true
    }

    /// Body orientation (yaw only unless flying).
    #[inline]
    pub fn orientation(&self) -> glam::Quat {
        orientation_yxz(self.rotation)
    }

    /// Unit vector the body is looking along, including look pitch.
    pub fn aim_direction(&self) -> Vec3 {
        let look = Vec3::new(self.look_pitch, self.rotation.y, self.rotation.z);
        orientation_yxz(look) * Vec3::NEG_Z
    }

    /// Place the body at a spawn point: eye level above the floor, facing
    /// into the arena (yaw 0 when the point's z is positive, otherwise -π).
    pub fn place_at_spawn(&mut self, point: Vec3) {
        self.position = Vec3::new(point.x, self.camera_height, point.z);
        let yaw = if point.z > 0.0 { 0.0 } else { -std::f32::consts::PI };
        self.rotation = Vec3::new(0.0, yaw, 0.0);
        self.look_pitch = 0.0;
        self.velocity = Vec3::ZERO;
        self.aggregate_rotation = Vec3::ZERO;
        self.can_jump = true;
    }

    /// Remove health, never going below zero. Returns the new health.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount).max(0);
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn reset_health(&mut self) {
        self.health = self.max_health;
    }

    /// Height of the body's feet.
    #[inline]
    pub fn feet(&self) -> f32 {
        self.position.y - self.camera_height
    }

    pub fn motion_state(&self) -> MotionState {
        if self.can_jump {
            MotionState::Grounded
        } else {
            MotionState::Airborne
        }
    }
}
