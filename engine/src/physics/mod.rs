//! Physics module
//!
//! Arcade physics for the arena. No rigid-body solver: bodies are points with
//! a camera height, walls are grid-cell boxes, bullets are spheres on straight
//! lines.
//!
//! # Unit System
//!
//! Positions are in world units. One grid cell is `horizontal_unit` wide
//! (100 by default) and walls are multiples of `vertical_unit` tall.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec3, Quat) re-exported from glam
//! - [`ballistics`] - Bullets and aim error
//! - [`collision`] - Floor snapping, wall push-out and sphere overlap

pub mod ballistics;
pub mod collision;
pub mod types;

pub use ballistics::{Bullet, BulletTuning, axial_error, scatter};
pub use collision::{collide_floor, move_outside, resolve_body_cell, spheres_overlap};
pub use types::{Quat, Vec3, orientation_yxz};
