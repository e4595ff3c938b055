//! Voxel Arena Engine Library
//!
//! Simulation core for a grid-map first-person arena shooter: a voxel wall
//! grid, kinematic bodies with mouselook and jump, wall and floor collision,
//! pooled bullets, wandering bots, and a fixed-timestep loop that ties them
//! together. Rendering, audio and the DOM live with the host.
//!
//! # Modules
//!
//! - [`world`] - Grid map parsing, cell lookup, wall solids and spawn points
//! - [`physics`] - Collision primitives and bullet ballistics
//! - [`player`] - Kinematic body integrator and respawn countdown
//! - [`input`] - Key bindings, movement intents and pointer deltas
//! - [`render`] - Flat snapshot records for the host renderer
//! - [`game`] - Config, bot/collision/projectile systems and the arena scene
//!
//! # Example
//!
//! ```ignore
//! use voxel_arena_engine::game::{ArenaConfig, ArenaScene};
//! use voxel_arena_engine::input::KeyCode;
//!
//! let mut scene = ArenaScene::new(ArenaConfig::default(), 0.0)?;
//! scene.start();
//!
//! // Each rendered frame:
//! scene.key(KeyCode::W, true);
//! scene.look(4.0, 0.0);
//! let ticks = scene.update(1.0 / 60.0, now_ms)?;
//! let snapshot = scene.snapshot();
//! for event in scene.drain_hud() {
//!     // Update the HUD
//! }
//! ```

pub mod error;
pub mod input;
pub mod physics;
pub mod player;
pub mod render;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use error::{ArenaError, Result};
// Re-export world types for convenience
pub use world::{CellKind, GridMap, MapCell};
// Re-export commonly used input types
pub use input::{InputState, KeyCode, MoveIntents};
// Re-export player types
pub use player::{BodyId, BodyTuning, KinematicBody};
pub use game::{ArenaConfig, ArenaScene, HudEvent};
