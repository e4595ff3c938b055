//! Game systems: self-contained modules that own state and logic.

pub mod bot_system;
pub mod collision_system;
pub mod projectile_system;

pub use bot_system::{Bot, BotBrain, BotSystem, choose_move};
pub use collision_system::{BulletHit, CollisionSystem};
pub use projectile_system::ProjectileSystem;
