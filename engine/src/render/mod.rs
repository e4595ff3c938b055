//! Render Module
//!
//! The core does no drawing. This module shapes simulation state into flat
//! records a renderer can consume: static wall blocks once at setup and an
//! [`ArenaSnapshot`] of moving entities after every frame.

pub mod snapshot;

pub use snapshot::{ArenaSnapshot, EntityInstance, EntityKind, WallInstance, wall_instances};
