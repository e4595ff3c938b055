//! Projectile lifecycle management system.
//!
//! Owns the active bullets and a dead pool of spent ones. Firing reuses a
//! pooled bullet when one is available; removal moves the bullet back into
//! the pool instead of dropping it.

use glam::Vec3;

use crate::physics::{Bullet, BulletTuning};
use crate::player::BodyId;

/// Manages the full lifecycle of bullets.
///
/// Callers iterate indices from the back and call [`recycle`](Self::recycle)
/// on hits; `swap_remove` only disturbs indices that were already visited.
pub struct ProjectileSystem {
    active: Vec<Bullet>,
    dead_pool: Vec<Bullet>,
    tuning: BulletTuning,
}

impl ProjectileSystem {
    pub fn new(tuning: BulletTuning) -> Self {
        Self {
            active: Vec::new(),
            dead_pool: Vec::new(),
            tuning,
        }
    }

    /// Launch a bullet, drawing from the dead pool first.
    ///
    /// Returns the index of the new bullet.
    pub fn fire(&mut self, position: Vec3, rotation: Vec3, direction: Vec3, owner: BodyId) -> usize {
        let mut bullet = self
            .dead_pool
            .pop()
            .unwrap_or_else(|| Bullet::new(&self.tuning));
        bullet.launch(&self.tuning, position, rotation, direction, owner);
        self.active.push(bullet);
        self.active.len() - 1
    }

    /// Advance one bullet along its direction.
    pub fn integrate(&mut self, index: usize, delta: f32) {
        if let Some(bullet) = self.active.get_mut(index) {
            bullet.integrate(delta);
        }
    }

    /// Move a bullet from the active list to the dead pool.
    ///
    /// Returns `false` if the index was not active.
    pub fn recycle(&mut self, index: usize) -> bool {
        if index >= self.active.len() {
            return false;
        }
        let bullet = self.active.swap_remove(index);
        self.dead_pool.push(bullet);
        true
    }

    pub fn get(&self, index: usize) -> Option<&Bullet> {
        self.active.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Bullet> {
        self.active.get_mut(index)
    }

    /// Number of bullets in flight.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of spent bullets waiting for reuse.
    pub fn pool_size(&self) -> usize {
        self.dead_pool.len()
    }

    /// Iterate over bullets in flight.
    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.active.iter()
    }

    pub fn tuning(&self) -> &BulletTuning {
        &self.tuning
    }
}
