//! Player Module
//!
//! Kinematic bodies shared by the player and bots, and the player's respawn
//! countdown.
//!
//! # Components
//!
//! - [`KinematicBody`] - Leapfrog integrator with local-frame velocity, speed
//!   cap, jump and ambient friction
//! - [`BodyTuning`] - Serializable movement and health constants
//! - [`RespawnTimer`] - Tick-driven death/respawn state machine

pub mod body;
pub mod respawn;

pub use body::{BodyId, BodyTuning, KinematicBody, MotionState};
pub use respawn::{RespawnEvent, RespawnState, RespawnTimer};
