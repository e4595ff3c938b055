//! Game Module
//!
//! Arena gameplay built on top of the engine: configuration, the bot,
//! collision and projectile systems, HUD events and the simulation scene.

pub mod config;
pub mod scenes;
pub mod state;
pub mod systems;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::ArenaConfig;
pub use scenes::{ArenaScene, ArenaStats};
pub use state::{HudEvent, HudState};
pub use systems::{Bot, BotBrain, BotSystem, BulletHit, CollisionSystem, ProjectileSystem};
