//! Collision system: body and bullet checks against the arena.
//!
//! Wraps the low-level primitives from [`crate::physics::collision`] into
//! the two per-tick operations the scene needs. Stateless; damage and pool
//! bookkeeping stay with the caller.

use crate::error::Result;
use crate::physics::{Bullet, resolve_body_cell, spheres_overlap};
use crate::player::{BodyId, KinematicBody};
use crate::world::{CellKind, FLOOR_HEIGHT, GridMap};

/// Why a bullet left play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletHit {
    /// Overlapped the player
    Player,
    /// Overlapped the bot at this roster index
    Bot(usize),
    TallWall,
    /// Bottom of the bullet dipped below a short wall's top
    ShortWall,
    Floor,
    /// Flew above the altitude cutoff
    Altitude,
    /// Left the grid
    OutOfBounds,
}

/// Stateless collision system.
pub struct CollisionSystem;

impl CollisionSystem {
    /// Reconcile a body against the floor and the cell it now stands in.
    ///
    /// One cell is resolved per tick. Fails with `OutOfBounds` if the body
    /// escaped the grid; that is an invariant violation and aborts the tick.
    pub fn check_body(body: &mut KinematicBody, map: &GridMap) -> Result<()> {
        let cell = map.cell_for(body.position)?;
        resolve_body_cell(body, &cell);
        Ok(())
    }

    /// Test one bullet against the player, then each bot, then the level.
    ///
    /// Stops at the first hit. Bodies never collide with their own bullets.
    pub fn check_bullet<'a>(
        bullet: &Bullet,
        player: &KinematicBody,
        bots: impl IntoIterator<Item = &'a KinematicBody>,
        map: &GridMap,
        altitude_cutoff: f32,
    ) -> Option<BulletHit> {
        if bullet.owner != BodyId::Player
            && spheres_overlap(bullet.position, bullet.radius, player.position, player.radius)
        {
            return Some(BulletHit::Player);
        }

        for (index, bot) in bots.into_iter().enumerate() {
            if bullet.owner != BodyId::Bot(index)
                && spheres_overlap(bullet.position, bullet.radius, bot.position, bot.radius)
            {
                return Some(BulletHit::Bot(index));
            }
        }

        Self::check_bullet_geometry(bullet, map, altitude_cutoff)
    }

    /// Level-only part of [`check_bullet`](Self::check_bullet).
    pub fn check_bullet_geometry(
        bullet: &Bullet,
        map: &GridMap,
        altitude_cutoff: f32,
    ) -> Option<BulletHit> {
        let Ok(cell) = map.cell_for(bullet.position) else {
            return Some(BulletHit::OutOfBounds);
        };

        match (cell.kind, cell.solid) {
            (CellKind::TallWall, _) => return Some(BulletHit::TallWall),
            (CellKind::ShortWall, Some(solid)) if bullet.bottom() < solid.top() => {
                return Some(BulletHit::ShortWall);
            }
            _ => {}
        }

        if bullet.bottom() < FLOOR_HEIGHT {
            Some(BulletHit::Floor)
        } else if bullet.position.y > altitude_cutoff {
            Some(BulletHit::Altitude)
        } else {
            None
        }
    }
}
