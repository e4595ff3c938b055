//! Bot decision system.
//!
//! Bots are ordinary kinematic bodies driven by two wall-clock timers: one
//! for shooting at the player, one for picking a new heading and set of
//! movement intents. Bots never leave the roster; a dead bot is healed and
//! respawned by the scene.

use glam::Vec3;
use rand::Rng;

use crate::physics::scatter;
use crate::player::{BodyTuning, KinematicBody};

/// Chance that a movement decision also jumps.
const JUMP_CHANCE: f64 = 0.4;

/// Per-bot decision timers, in host milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotBrain {
    pub last_shot_ms: f64,
    pub last_move_ms: f64,
}

impl BotBrain {
    /// Timers pushed a random fraction of a delay into the future, so bots
    /// created together do not act in lockstep.
    pub fn staggered<R: Rng + ?Sized>(
        rng: &mut R,
        now_ms: f64,
        firing_delay_ms: f64,
        move_delay_ms: f64,
    ) -> Self {
        Self {
            last_shot_ms: now_ms + rng.gen_range(0.0..1.0) * firing_delay_ms,
            last_move_ms: now_ms + rng.gen_range(0.0..1.0) * move_delay_ms,
        }
    }
}

/// One bot: a body plus its timers.
#[derive(Debug, Clone)]
pub struct Bot {
    pub body: KinematicBody,
    pub brain: BotBrain,
}

/// Roster of bots and their shared timing constants.
pub struct BotSystem {
    bots: Vec<Bot>,
    firing_delay_ms: f64,
    move_delay_ms: f64,
    max_axial_error_deg: f32,
}

impl BotSystem {
    pub fn new(firing_delay_ms: f64, move_delay_ms: f64, max_axial_error_deg: f32) -> Self {
        Self {
            bots: Vec::new(),
            firing_delay_ms,
            move_delay_ms,
            max_axial_error_deg,
        }
    }

    /// Add a bot at `spawn_point` with staggered timers. Returns its roster index.
    pub fn add<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        tuning: BodyTuning,
        spawn_point: Vec3,
        now_ms: f64,
    ) -> usize {
        let mut body = KinematicBody::new(tuning);
        body.place_at_spawn(spawn_point);
        let brain = BotBrain::staggered(rng, now_ms, self.firing_delay_ms, self.move_delay_ms);
        self.bots.push(Bot { body, brain });
        self.bots.len() - 1
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Bot> {
        self.bots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Bot> {
        self.bots.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bot> {
        self.bots.iter()
    }

    /// Bot bodies in roster order.
    pub fn bodies(&self) -> impl Iterator<Item = &KinematicBody> {
        self.bots.iter().map(|bot| &bot.body)
    }

    /// Whether the firing timer has elapsed at `now_ms`.
    pub fn wants_to_fire(&self, brain: &BotBrain, now_ms: f64) -> bool {
        brain.last_shot_ms + self.firing_delay_ms <= now_ms
    }

    /// Whether the movement timer has elapsed at `now_ms`.
    pub fn wants_to_move(&self, brain: &BotBrain, now_ms: f64) -> bool {
        brain.last_move_ms + self.move_delay_ms <= now_ms
    }

    /// Direction from a bot to its target with per-axis aim error applied.
    pub fn aim<R: Rng + ?Sized>(&self, rng: &mut R, from: Vec3, target: Vec3) -> Vec3 {
        let perfect = (target - from).normalize_or(Vec3::NEG_Z);
        scatter(rng, perfect, self.max_axial_error_deg)
    }
}

/// Pick a new heading and re-roll the movement intents.
///
/// LEFT and FORWARD are sticky: an active intent gets a -0.1 bias on its
/// roll, making it more likely to stay on. RIGHT and BACKWARD can only turn
/// on when their opposite is off. Every roll is independent.
pub fn choose_move<R: Rng + ?Sized>(rng: &mut R, body: &mut KinematicBody) {
    body.rotation.y = rng.gen_range(0.0..1.0) * std::f32::consts::TAU;

    let left_bias = if body.intents.left { -0.1 } else { 0.1 };
    let forward_bias = if body.intents.forward { -0.1 } else { 0.1 };

    let intents = &mut body.intents;
    intents.left = rng.gen_range(0.0..1.0) + left_bias < 0.1;
    intents.right = !intents.left && rng.gen_range(0.0..1.0) + left_bias < 0.1;
    intents.forward = rng.gen_range(0.0..1.0) + forward_bias < 0.8;
    intents.backward = !intents.forward && rng.gen_range(0.0..1.0) < 0.05;

    if rng.gen_bool(JUMP_CHANCE) {
        body.jump(None);
    }
}
