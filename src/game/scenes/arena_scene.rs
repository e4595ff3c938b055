//! ArenaScene: the simulation loop and everything it owns.
//!
//! Owns the grid, the player, the bot roster, the projectile pool, the
//! player's input and respawn state, the HUD queue and the RNG. Its
//! [`update`](ArenaScene::update) method is the single per-frame entry point;
//! it turns variable frame time into whole fixed ticks. No rendering here.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::game::config::ArenaConfig;
use crate::game::state::{HudEvent, HudState};
use crate::game::systems::{BotSystem, BulletHit, CollisionSystem, ProjectileSystem, choose_move};
use crate::input::{InputAction, InputState, KeyCode};
use crate::physics::scatter;
use crate::player::{BodyId, KinematicBody, RespawnEvent, RespawnState, RespawnTimer};
use crate::render::{ArenaSnapshot, EntityInstance, EntityKind, WallInstance, wall_instances};
use crate::world::GridMap;

/// Running counters for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaStats {
    pub ticks: u64,
    pub shots_fired: u64,
    pub bullets_recycled: u64,
    pub player_hits: u64,
    pub bot_hits: u64,
    pub bot_respawns: u64,
    pub player_deaths: u64,
}

/// One arena session.
pub struct ArenaScene {
    config: ArenaConfig,
    map: GridMap,
    player: KinematicBody,
    bots: BotSystem,
    projectiles: ProjectileSystem,
    input: InputState,
    respawn: RespawnTimer,
    hud: HudState,
    rng: ChaCha8Rng,
    simulation_accumulator_s: f32,
    paused: bool,
    stats: ArenaStats,
}

impl ArenaScene {
    /// Build the arena, spawn the player and then each bot.
    ///
    /// The scene starts paused; call [`start`](Self::start) to run ticks.
    /// `now_ms` seeds the bots' staggered timers.
    pub fn new(config: ArenaConfig, now_ms: f64) -> Result<Self> {
        config.validate()?;
        let map = config.build_map()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let mut player = KinematicBody::new(config.body);
        player.place_at_spawn(choose_spawn_point(&map, &[], &mut rng));

        let mut bots = BotSystem::new(
            config.firing_delay_ms,
            config.bot_move_delay_ms,
            config.bot_max_axial_error_deg,
        );
        for _ in 0..config.bot_count {
            let occupied: Vec<(i64, i64)> = std::iter::once(&player)
                .chain(bots.bodies())
                .map(|body| map.row_col_of(body.position))
                .collect();
            let point = choose_spawn_point(&map, &occupied, &mut rng);
            bots.add(&mut rng, config.body, point, now_ms);
        }

        tracing::info!(
            rows = map.rows(),
            cols = map.cols(),
            bots = bots.len(),
            seed = config.seed,
            "arena scene ready"
        );

        Ok(Self {
            projectiles: ProjectileSystem::new(config.bullet),
            respawn: RespawnTimer::new(config.respawn_countdown_s, config.fixed_step_s),
            config,
            map,
            player,
            bots,
            input: InputState::new(),
            hud: HudState::new(),
            rng,
            simulation_accumulator_s: 0.0,
            paused: true,
            stats: ArenaStats::default(),
        })
    }

    // ========================================================================
    // Loop control
    // ========================================================================

    /// Resume ticking. Pointer motion is accepted while running.
    pub fn start(&mut self) {
        if self.paused {
            self.paused = false;
            self.input.mouse.set_captured(true);
            tracing::debug!("arena started");
        }
    }

    /// Pause. All state is kept, including frame time not yet spent on a tick.
    pub fn stop(&mut self) {
        if !self.paused {
            self.paused = true;
            self.input.mouse.set_captured(false);
            tracing::debug!(carry_s = self.simulation_accumulator_s, "arena stopped");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Feed one rendered frame's elapsed time and run as many fixed ticks as
    /// it covers. Returns the number of ticks run.
    ///
    /// Frame deltas are clamped to `max_frame_delta_s`; leftover time carries
    /// into the next call. `now_ms` is the host clock used by bot timers.
    pub fn update(&mut self, frame_delta_s: f32, now_ms: f64) -> Result<u32> {
        if self.paused {
            return Ok(0);
        }

        // Only the clamped part of a long frame is accumulated; the rest is
        // dropped rather than replayed as a burst of ticks.
        let max_delta = self.config.max_frame_delta_s;
        let delta = if frame_delta_s.is_finite() {
            frame_delta_s.clamp(0.0, max_delta)
        } else {
            0.0
        };
        if frame_delta_s > max_delta {
            tracing::debug!(frame_delta_s, max_delta, "frame delta clamped");
        }

        let step = self.config.fixed_step_s;
        self.simulation_accumulator_s += delta;
        let mut ticks = 0;
        while self.simulation_accumulator_s >= step {
            self.tick(step, now_ms)?;
            self.simulation_accumulator_s -= step;
            ticks += 1;
        }
        Ok(ticks)
    }

    /// Run exactly one simulation tick.
    ///
    /// Order: player input, player move and collision, player shot, bullets
    /// (newest first), each bot (move, collide, respawn, fire, decide), then
    /// the player's death/respawn countdown.
    pub fn tick(&mut self, dt: f32, now_ms: f64) -> Result<()> {
        let commands = self.input.take_commands();
        self.player.intents = commands.intents;
        let (dx, dy) = commands.look;
        self.player.rotate(dy, dx, 0.0);
        if commands.jump {
            self.player.jump(None);
        }

        self.player.update(dt);
        CollisionSystem::check_body(&mut self.player, &self.map)?;

        if commands.fire {
            self.fire_player();
        }

        self.update_bullets(dt);
        self.update_bots(dt, now_ms)?;
        self.update_player_respawn();

        self.stats.ticks += 1;
        Ok(())
    }

    // ========================================================================
    // Tick stages
    // ========================================================================

    fn fire_player(&mut self) {
        let direction = scatter(
            &mut self.rng,
            self.player.aim_direction(),
            self.config.player_max_axial_error_deg,
        );
        let rotation = Vec3::new(
            self.player.look_pitch,
            self.player.rotation.y,
            self.player.rotation.z,
        );
        self.projectiles
            .fire(self.player.position, rotation, direction, BodyId::Player);
        self.stats.shots_fired += 1;
    }

    fn update_bullets(&mut self, dt: f32) {
        let cutoff = self.config.bullet_altitude_cutoff();

        for i in (0..self.projectiles.active_count()).rev() {
            self.projectiles.integrate(i, dt);
            let Some(bullet) = self.projectiles.get(i) else {
                continue;
            };
            let Some(hit) = CollisionSystem::check_bullet(
                bullet,
                &self.player,
                self.bots.bodies(),
                &self.map,
                cutoff,
            ) else {
                continue;
            };
            let damage = bullet.damage;

            match hit {
                BulletHit::Player => self.hurt_player(damage),
                BulletHit::Bot(index) => {
                    if let Some(bot) = self.bots.get_mut(index) {
                        bot.body.take_damage(damage);
                    }
                    self.stats.bot_hits += 1;
                }
                _ => {}
            }

            self.projectiles.recycle(i);
            self.stats.bullets_recycled += 1;
        }
    }

    fn hurt_player(&mut self, damage: i32) {
        if self.respawn.is_respawning() {
            return;
        }
        let health = self.player.take_damage(damage);
        self.stats.player_hits += 1;
        self.hud.player_hurt(health, self.player.max_health);
    }

    fn update_bots(&mut self, dt: f32, now_ms: f64) -> Result<()> {
        for index in 0..self.bots.len() {
            let dead = {
                let Some(bot) = self.bots.get_mut(index) else {
                    continue;
                };
                bot.body.update(dt);
                CollisionSystem::check_body(&mut bot.body, &self.map)?;
                bot.body.is_dead()
            };

            if dead {
                if let Some(bot) = self.bots.get_mut(index) {
                    bot.body.reset_health();
                }
                self.stats.bot_respawns += 1;
                tracing::debug!(bot = index, "bot down, respawning");
                self.spawn_body(BodyId::Bot(index));
            }

            let Some(bot) = self.bots.get(index) else {
                continue;
            };
            let brain = bot.brain;
            let origin = bot.body.position;
            let rotation = bot.body.rotation;

            if self.bots.wants_to_fire(&brain, now_ms) {
                let direction = self.bots.aim(&mut self.rng, origin, self.player.position);
                self.projectiles
                    .fire(origin, rotation, direction, BodyId::Bot(index));
                self.stats.shots_fired += 1;
                if let Some(bot) = self.bots.get_mut(index) {
                    bot.brain.last_shot_ms = now_ms;
                }
            }

            if self.bots.wants_to_move(&brain, now_ms)
                && let Some(bot) = self.bots.get_mut(index)
            {
                choose_move(&mut self.rng, &mut bot.body);
                bot.brain.last_move_ms = now_ms;
            }
        }
        Ok(())
    }

    fn update_player_respawn(&mut self) {
        match self.respawn.advance() {
            Some(RespawnEvent::Countdown(n)) => self.hud.push(HudEvent::RespawnCountdown(n)),
            Some(RespawnEvent::Respawn) => {
                self.spawn_body(BodyId::Player);
                self.hud.player_respawned(self.player.health);
                tracing::info!("player respawned");
            }
            None => {}
        }

        if self.player.is_dead() && !self.respawn.is_respawning() {
            self.player.reset_health();
            self.stats.player_deaths += 1;
            if let Some(RespawnEvent::Countdown(n)) = self.respawn.begin() {
                self.hud.push(HudEvent::RespawnCountdown(n));
            }
            tracing::info!(deaths = self.stats.player_deaths, "player down");
        }
    }

    /// Move a body to a spawn point no body currently occupies.
    fn spawn_body(&mut self, id: BodyId) {
        let occupied = self.occupied_cells();
        let point = choose_spawn_point(&self.map, &occupied, &mut self.rng);
        match id {
            BodyId::Player => self.player.place_at_spawn(point),
            BodyId::Bot(index) => {
                if let Some(bot) = self.bots.get_mut(index) {
                    bot.body.place_at_spawn(point);
                }
            }
        }
        tracing::debug!(?id, x = point.x, z = point.z, "spawned");
    }

    /// Grid cells holding the player or any bot.
    pub fn occupied_cells(&self) -> Vec<(i64, i64)> {
        std::iter::once(&self.player)
            .chain(self.bots.bodies())
            .map(|body| self.map.row_col_of(body.position))
            .collect()
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Forward a key event. Returns `true` if the key is bound.
    pub fn key(&mut self, code: KeyCode, pressed: bool) -> bool {
        self.input.handle_key(code, pressed)
    }

    /// Point `code` at `action`. A held key is released first so its old
    /// intent does not stick.
    pub fn bind_key(&mut self, code: KeyCode, action: InputAction) {
        self.input.handle_key(code, false);
        self.input.bindings.bind(code, action);
    }

    /// Stop `code` doing anything, releasing it if held.
    pub fn unbind_key(&mut self, code: KeyCode) {
        self.input.handle_key(code, false);
        self.input.bindings.unbind_key(code);
    }

    /// Forward pointer motion in pixels. Ignored while paused.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.input.accumulate_look(dx, dy);
    }

    /// Fire on the next tick. Ignored while paused.
    pub fn fire(&mut self) {
        if !self.paused {
            self.input.request_fire();
        }
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn player(&self) -> &KinematicBody {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut KinematicBody {
        &mut self.player
    }

    pub fn bots(&self) -> &BotSystem {
        &self.bots
    }

    pub fn bots_mut(&mut self) -> &mut BotSystem {
        &mut self.bots
    }

    pub fn projectiles(&self) -> &ProjectileSystem {
        &self.projectiles
    }

    pub fn projectiles_mut(&mut self) -> &mut ProjectileSystem {
        &mut self.projectiles
    }

    pub fn respawn_state(&self) -> RespawnState {
        self.respawn.state()
    }

    pub fn stats(&self) -> ArenaStats {
        self.stats
    }

    /// Take every HUD event queued since the last drain.
    pub fn drain_hud(&mut self) -> Vec<HudEvent> {
        self.hud.drain()
    }

    /// Static wall blocks for scene setup.
    pub fn walls(&self) -> Vec<WallInstance> {
        wall_instances(&self.map)
    }

    /// Positions and rotations of everything that moves.
    pub fn snapshot(&self) -> ArenaSnapshot {
        let mut entities = Vec::with_capacity(
            1 + self.bots.len() + self.projectiles.active_count(),
        );
        entities.push(EntityInstance::from_body(&self.player, EntityKind::Player));
        entities.extend(
            self.bots
                .bodies()
                .map(|body| EntityInstance::from_body(body, EntityKind::Bot)),
        );
        entities.extend(self.projectiles.iter().map(EntityInstance::from_bullet));

        ArenaSnapshot {
            tick: self.stats.ticks,
            player_health: self.player.health,
            player_look_pitch: self.player.look_pitch,
            respawning: self.respawn.is_respawning(),
            entities,
        }
    }
}

/// Pick a spawn point uniformly among those whose cell is not in `occupied`.
///
/// Falls back to any spawn point when all are taken.
pub fn choose_spawn_point<R: Rng + ?Sized>(
    map: &GridMap,
    occupied: &[(i64, i64)],
    rng: &mut R,
) -> Vec3 {
    let free: Vec<Vec3> = map
        .spawn_points()
        .iter()
        .copied()
        .filter(|point| !occupied.contains(&map.row_col_of(*point)))
        .collect();
    if let Some(point) = free.choose(rng) {
        return *point;
    }

    tracing::warn!(
        spawn_points = map.spawn_points().len(),
        "every spawn point is occupied, reusing one"
    );
    map.spawn_points()
        .choose(rng)
        .copied()
        .unwrap_or_else(|| map.world_center_of(0, 0))
}
