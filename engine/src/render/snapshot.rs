//! Renderer-facing frame snapshot
//!
//! The simulation never touches a scene graph. After each frame the host
//! pulls a snapshot of flat instance records and moves its meshes to match.
//! Records are Pod so they can be uploaded to an instance buffer as-is.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;

use crate::error::Result;
use crate::physics::Bullet;
use crate::player::KinematicBody;
use crate::world::{CellKind, GridMap};

/// What an [`EntityInstance`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum EntityKind {
    Player = 0,
    Bot = 1,
    Bullet = 2,
}

/// One moving object.
///
/// Layout (32 bytes):
/// - position: vec3<f32> (12 bytes)
/// - kind:     u32 (4 bytes) - [`EntityKind`] discriminant
/// - rotation: vec3<f32> (12 bytes) - Euler (pitch, yaw, roll), YXZ order
/// - radius:   f32 (4 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable, Serialize)]
pub struct EntityInstance {
    pub position: [f32; 3],
    pub kind: u32,
    pub rotation: [f32; 3],
    pub radius: f32,
}

static_assertions::assert_eq_size!(EntityInstance, [u8; 32]);

impl EntityInstance {
    pub fn from_body(body: &KinematicBody, kind: EntityKind) -> Self {
        Self {
            position: body.position.to_array(),
            kind: kind as u32,
            rotation: body.rotation.to_array(),
            radius: body.radius,
        }
    }

    pub fn from_bullet(bullet: &Bullet) -> Self {
        Self {
            position: bullet.position.to_array(),
            kind: EntityKind::Bullet as u32,
            rotation: bullet.rotation.to_array(),
            radius: bullet.radius,
        }
    }
}

/// One static wall block, built once at scene setup.
///
/// `height_scale` is 1 for short walls and 3 for tall walls, applied to a
/// unit cube of `horizontal_unit` x `vertical_unit` x `horizontal_unit`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable, Serialize)]
pub struct WallInstance {
    pub center: [f32; 3],
    pub height_scale: f32,
}

static_assertions::assert_eq_size!(WallInstance, [u8; 16]);

/// Wall blocks for every solid in the map, in row-major order.
pub fn wall_instances(map: &GridMap) -> Vec<WallInstance> {
    map.solids()
        .iter()
        .map(|solid| WallInstance {
            center: solid.center.to_array(),
            height_scale: match solid.kind {
                CellKind::TallWall => 3.0,
                _ => 1.0,
            },
        })
        .collect()
}

/// Everything that moved this frame.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArenaSnapshot {
    /// Simulation ticks run since the scene was created
    pub tick: u64,
    pub player_health: i32,
    /// Camera pitch for the player (kept out of the body rotation)
    pub player_look_pitch: f32,
    pub respawning: bool,
    /// Player first, then bots in roster order, then bullets
    pub entities: Vec<EntityInstance>,
}

impl ArenaSnapshot {
    /// Raw instance bytes for a GPU instance buffer.
    pub fn entity_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.entities)
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities
            .iter()
            .filter(|e| e.kind == kind as u32)
            .count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
