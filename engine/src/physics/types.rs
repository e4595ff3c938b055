//! Physics type re-exports from glam
//!
//! Core mathematical types used by the body integrator and collision code.
//! Rotations are Euler angles in YXZ order (yaw, then pitch, then roll).

pub use glam::{EulerRot, Quat, Vec3};

/// Orientation quaternion for a (pitch, yaw, roll) rotation vector in YXZ order.
#[inline]
pub fn orientation_yxz(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::YXZ, rotation.y, rotation.x, rotation.z)
}
