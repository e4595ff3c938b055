//! Scene Module
//!
//! High-level scene compositions that wire together all game systems.

pub mod arena_scene;

pub use arena_scene::{ArenaScene, ArenaStats, choose_spawn_point};
