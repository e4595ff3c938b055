//! Arena Tests - Fixed-Step Loop, Combat, Respawn and Input Flow
//!
//! End-to-end checks through `ArenaScene`: how frame time turns into ticks,
//! bullets damaging bots, bots and the player respawning, and key/pointer
//! input reaching the player body.

use glam::Vec3;
use voxel_arena_engine::game::{ArenaConfig, ArenaScene, HudEvent};
use voxel_arena_engine::input::{InputAction, KeyCode};
use voxel_arena_engine::player::{BodyId, RespawnState};
use voxel_arena_engine::world::CellKind;

/// One row of floor between tall walls, spawn points at x = -250, 50, 350.
const CORRIDOR: &str = "XXXXXXXXX\nXS  S  SX\nXXXXXXXXX";

const STEP: f32 = 0.01;

fn corridor(bots: usize) -> ArenaConfig {
    ArenaConfig {
        layout: CORRIDOR.to_string(),
        bot_count: bots,
        ..ArenaConfig::default()
    }
}

/// Running scene. Bots were created at t = 0, so at `now_ms = 0` none of
/// them shoots or changes course.
fn running(config: ArenaConfig) -> ArenaScene {
    let mut scene = ArenaScene::new(config, 0.0).unwrap();
    scene.start();
    scene
}

fn spawn_cells(scene: &ArenaScene) -> Vec<(i64, i64)> {
    let map = scene.map();
    map.spawn_points().iter().map(|p| map.row_col_of(*p)).collect()
}

// ============================================================================
// Grid Round Trip
// ============================================================================

#[test]
fn test_small_box_spawn_resolves_to_its_cell() {
    let config = ArenaConfig {
        layout: "XXX\nX S\nXXX".to_string(),
        bot_count: 0,
        ..ArenaConfig::default()
    };
    let mut scene = running(config);

    let player = scene.player();
    assert!(player.can_jump);
    assert_eq!(player.position, Vec3::new(150.0, 40.0, 50.0));
    assert_eq!(scene.map().row_col_of(player.position), (1, 2));
    let cell = scene.map().cell_for(player.position).unwrap();
    assert_eq!(cell.kind, CellKind::Spawn);

    // Standing still keeps the body grounded on the same cell
    scene.update(STEP, 0.0).unwrap();
    let player = scene.player();
    assert!(player.can_jump);
    assert!((player.position.y - 40.0).abs() < 1e-4);
    assert_eq!(scene.map().row_col_of(player.position), (1, 2));
}

// ============================================================================
// Fixed-Step Loop
// ============================================================================

#[test]
fn test_frame_time_becomes_whole_ticks() {
    let mut scene = running(corridor(0));

    assert_eq!(scene.update(0.025, 0.0).unwrap(), 2);
    assert_eq!(scene.update(0.004, 0.0).unwrap(), 0);
    assert_eq!(scene.update(0.002, 0.0).unwrap(), 1);
    assert_eq!(scene.stats().ticks, 3);
}

#[test]
fn test_long_frame_is_clamped() {
    let mut scene = running(corridor(0));

    // 10 s would be 1000 ticks; the clamp keeps it to about a quarter second
    let ticks = scene.update(10.0, 0.0).unwrap();
    assert!((24..=25).contains(&ticks), "ticks = {ticks}");
}

#[test]
fn test_non_finite_frame_runs_nothing() {
    let mut scene = running(corridor(0));
    assert_eq!(scene.update(f32::NAN, 0.0).unwrap(), 0);
    assert_eq!(scene.update(f32::INFINITY, 0.0).unwrap(), 0);
    assert_eq!(scene.update(-1.0, 0.0).unwrap(), 0);
    assert_eq!(scene.stats().ticks, 0);
}

#[test]
fn test_stop_preserves_state_and_leftover_time() {
    let mut scene = running(corridor(0));
    scene.key(KeyCode::W, true);
    // Five ticks, half a step left over
    assert_eq!(scene.update(0.055, 0.0).unwrap(), 5);

    let position = scene.player().position;
    let ticks = scene.stats().ticks;

    scene.stop();
    assert!(scene.is_paused());
    assert_eq!(scene.update(0.1, 0.0).unwrap(), 0);
    assert_eq!(scene.player().position, position);
    assert_eq!(scene.stats().ticks, ticks);

    // The leftover half step survives both pauses
    scene.start();
    assert_eq!(scene.update(0.003, 0.0).unwrap(), 0);
    scene.stop();
    scene.start();
    assert_eq!(scene.update(0.003, 0.0).unwrap(), 1);
    assert_ne!(scene.player().position, position);
}

// ============================================================================
// Bullets
// ============================================================================

#[test]
fn test_bullet_damages_bot_and_returns_to_pool() {
    let mut scene = running(corridor(1));
    scene.bots_mut().get_mut(0).unwrap().body.health = 15;
    let target = scene.bots().get(0).unwrap().body.position;

    scene.projectiles_mut().fire(
        target + Vec3::new(10.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::NEG_X,
        BodyId::Player,
    );
    assert_eq!(scene.projectiles().active_count(), 1);
    assert_eq!(scene.projectiles().pool_size(), 0);

    assert_eq!(scene.update(STEP, 0.0).unwrap(), 1);

    assert_eq!(scene.bots().get(0).unwrap().body.health, 5);
    assert_eq!(scene.projectiles().active_count(), 0);
    assert_eq!(scene.projectiles().pool_size(), 1);
    assert_eq!(scene.stats().bot_hits, 1);
}

#[test]
fn test_bullet_ignores_its_owner() {
    let mut scene = running(corridor(1));
    let target = scene.bots().get(0).unwrap().body.position;

    // Fired from inside the bot, moving straight up
    scene
        .projectiles_mut()
        .fire(target, Vec3::ZERO, Vec3::Y, BodyId::Bot(0));
    scene.update(STEP, 0.0).unwrap();

    assert_eq!(scene.bots().get(0).unwrap().body.health, 100);
    assert_eq!(scene.projectiles().active_count(), 1);
}

#[test]
fn test_bullet_above_cutoff_recycled_once() {
    let mut scene = running(corridor(0));

    // Column 2 of the corridor is open floor
    let open = scene.map().world_center_of(1, 2);
    assert_eq!(scene.map().kind_at(1, 2), Some(CellKind::Empty));

    scene.projectiles_mut().fire(
        Vec3::new(open.x, 499.0, open.z),
        Vec3::ZERO,
        Vec3::Y,
        BodyId::Player,
    );

    for _ in 0..10 {
        scene.update(STEP, 0.0).unwrap();
    }

    assert_eq!(scene.stats().bullets_recycled, 1);
    assert_eq!(scene.projectiles().active_count(), 0);
    assert_eq!(scene.projectiles().pool_size(), 1);
}

#[test]
fn test_bullet_hits_tall_wall() {
    let mut scene = running(corridor(0));
    let wall = scene.map().world_center_of(0, 2);

    // Starts just outside the wall footprint and flies into it
    scene.projectiles_mut().fire(
        Vec3::new(wall.x, 40.0, wall.z + 52.0),
        Vec3::ZERO,
        Vec3::NEG_Z,
        BodyId::Player,
    );
    scene.update(STEP, 0.0).unwrap();

    assert_eq!(scene.projectiles().active_count(), 0);
    assert_eq!(scene.stats().bullets_recycled, 1);
}

#[test]
fn test_player_shot_reuses_pooled_bullet() {
    let mut scene = running(corridor(0));
    let open = scene.map().world_center_of(1, 2);
    scene
        .projectiles_mut()
        .fire(Vec3::new(open.x, 499.0, open.z), Vec3::ZERO, Vec3::Y, BodyId::Player);
    scene.update(STEP, 0.0).unwrap();
    assert_eq!(scene.projectiles().pool_size(), 1);

    scene.fire();
    scene.update(STEP, 0.0).unwrap();

    assert_eq!(scene.stats().shots_fired, 1);
    assert_eq!(scene.projectiles().active_count(), 1);
    assert_eq!(scene.projectiles().pool_size(), 0);
}

// ============================================================================
// Bots
// ============================================================================

#[test]
fn test_dead_bot_respawns_elsewhere() {
    let mut scene = running(corridor(1));
    let before = scene.bots().get(0).unwrap().body.position;
    scene.bots_mut().get_mut(0).unwrap().body.health = 0;

    scene.update(STEP, 0.0).unwrap();

    let bot = &scene.bots().get(0).unwrap().body;
    assert_eq!(bot.health, bot.max_health);
    assert_ne!((bot.position.x, bot.position.z), (before.x, before.z));
    let cell = scene.map().row_col_of(bot.position);
    assert!(spawn_cells(&scene).contains(&cell));
    assert_ne!(cell, scene.map().row_col_of(scene.player().position));
    assert_eq!(scene.bots().len(), 1);
    assert_eq!(scene.stats().bot_respawns, 1);
}

#[test]
fn test_respawns_never_share_a_cell() {
    let mut scene = running(ArenaConfig::default());
    let bots = scene.bots().len();
    assert_eq!(bots, 5);

    for round in 0..40 {
        let index = round % bots;
        scene.bots_mut().get_mut(index).unwrap().body.health = 0;
        scene.update(STEP, 0.0).unwrap();

        let cells = scene.occupied_cells();
        let respawned = scene.map().row_col_of(scene.bots().get(index).unwrap().body.position);
        let sharing = cells.iter().filter(|cell| **cell == respawned).count();
        assert_eq!(sharing, 1, "round {round}: bot {index} landed on an occupied cell");
    }
    assert_eq!(scene.stats().bot_respawns, 40);
}

#[test]
fn test_bots_fire_once_their_timer_elapses() {
    let mut scene = running(corridor(2));

    // Staggered timers are at most one firing delay past creation
    scene.update(STEP, 0.0).unwrap();
    assert_eq!(scene.stats().shots_fired, 0);

    scene.update(STEP, 2000.0).unwrap();
    assert_eq!(scene.stats().shots_fired, 2);

    // Both just fired, so nothing until another delay passes
    scene.update(STEP, 2500.0).unwrap();
    assert_eq!(scene.stats().shots_fired, 2);
}

// ============================================================================
// Player Death and Respawn
// ============================================================================

#[test]
fn test_player_death_counts_down_then_respawns() {
    let mut scene = running(corridor(0));
    let before = scene.player().position;
    scene.player_mut().health = 0;

    let mut events = Vec::new();
    let mut respawned_at = None;
    for tick in 0..400 {
        scene.update(STEP, 0.0).unwrap();
        let drained = scene.drain_hud();
        if respawned_at.is_none() && drained.contains(&HudEvent::Respawned) {
            respawned_at = Some(tick);
        }
        events.extend(drained);
    }

    assert_eq!(
        events,
        vec![
            HudEvent::RespawnCountdown(3),
            HudEvent::RespawnCountdown(2),
            HudEvent::RespawnCountdown(1),
            HudEvent::HealthChanged(100),
            HudEvent::Respawned,
        ]
    );
    assert_eq!(respawned_at, Some(300));
    assert_eq!(scene.respawn_state(), RespawnState::Alive);
    assert_eq!(scene.player().health, 100);
    assert_ne!(scene.player().position.x, before.x);
    assert_eq!(scene.stats().player_deaths, 1);
}

#[test]
fn test_player_cannot_be_hurt_while_respawning() {
    let mut scene = running(corridor(0));
    scene.player_mut().health = 0;
    scene.update(STEP, 0.0).unwrap();
    assert!(matches!(scene.respawn_state(), RespawnState::Countdown { .. }));
    scene.drain_hud();

    let position = scene.player().position;
    scene
        .projectiles_mut()
        .fire(position + Vec3::new(0.0, 0.0, 8.0), Vec3::ZERO, Vec3::NEG_Z, BodyId::Bot(0));
    scene.update(STEP, 0.0).unwrap();

    assert_eq!(scene.player().health, 100);
    assert_eq!(scene.stats().player_hits, 0);
    assert_eq!(scene.projectiles().active_count(), 0);
    assert!(scene.drain_hud().is_empty());
}

#[test]
fn test_player_hit_reports_to_hud() {
    let mut scene = running(corridor(0));
    let position = scene.player().position;
    scene
        .projectiles_mut()
        .fire(position + Vec3::new(0.0, 0.0, 8.0), Vec3::ZERO, Vec3::NEG_Z, BodyId::Bot(0));
    scene.update(STEP, 0.0).unwrap();

    assert_eq!(scene.player().health, 90);
    assert_eq!(
        scene.drain_hud(),
        vec![HudEvent::HealthChanged(90), HudEvent::Hurt]
    );
}

// ============================================================================
// Input
// ============================================================================

#[test]
fn test_forward_key_moves_player_along_facing() {
    let mut scene = running(corridor(0));
    let start = scene.player().position;
    // Spawn z is positive, so the body faces -Z
    assert_eq!(scene.player().rotation.y, 0.0);

    assert!(scene.key(KeyCode::W, true));
    for _ in 0..10 {
        scene.update(STEP, 0.0).unwrap();
    }
    let moved = scene.player().position;
    assert!(moved.z < start.z - 10.0, "z = {}", moved.z);
    assert!((moved.x - start.x).abs() < 1e-3);

    assert!(scene.key(KeyCode::W, false));
    scene.update(STEP, 0.0).unwrap();
    assert!(!scene.player().intents.forward);
    assert!(!scene.key(KeyCode::Unknown, true));
}

#[test]
fn test_pointer_motion_turns_player() {
    let mut scene = ArenaScene::new(corridor(0), 0.0).unwrap();

    // Not captured yet, so this motion is dropped
    scene.look(500.0, 0.0);
    scene.start();
    scene.look(100.0, 0.0);
    scene.update(STEP, 0.0).unwrap();

    // 100 px * -1 (inverse) * 0.25 (sensitivity) * 0.01 s
    assert!((scene.player().rotation.y + 0.25).abs() < 1e-5);
    assert_eq!(scene.player().look_pitch, 0.0);
}

#[test]
fn test_jump_key_lifts_player() {
    let mut scene = running(corridor(0));
    assert!(scene.key(KeyCode::Space, true));
    scene.update(STEP, 0.0).unwrap();

    assert!(!scene.player().can_jump);
    assert!(scene.player().position.y > 40.0);

    // Holding the key does not queue another jump
    for _ in 0..400 {
        scene.update(STEP, 0.0).unwrap();
    }
    assert!(scene.player().can_jump);
    assert!((scene.player().position.y - 40.0).abs() < 1e-3);
}

#[test]
fn test_rebound_key_drives_new_action() {
    let mut scene = running(corridor(0));
    assert!(scene.key(KeyCode::W, true));
    scene.bind_key(KeyCode::W, InputAction::Jump);
    scene.update(STEP, 0.0).unwrap();

    // The held W was released when it changed meaning
    assert!(!scene.player().intents.forward);
    assert!(scene.player().can_jump);

    assert!(scene.key(KeyCode::W, true));
    scene.update(STEP, 0.0).unwrap();
    assert!(!scene.player().can_jump);
    assert!(scene.player().position.y > 40.0);

    scene.unbind_key(KeyCode::W);
    assert!(!scene.key(KeyCode::W, true));
    assert!(scene.key(KeyCode::ArrowUp, true));
}

// ============================================================================
// Snapshot
// ============================================================================

#[test]
fn test_snapshot_lists_bodies_then_bullets() {
    let mut scene = running(corridor(2));
    scene.fire();
    scene.update(STEP, 0.0).unwrap();

    let snapshot = scene.snapshot();
    assert_eq!(snapshot.tick, 1);
    assert_eq!(snapshot.entities.len(), 4);
    assert_eq!(snapshot.entity_bytes().len(), 4 * 32);

    let json = snapshot.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["player_health"], 100);
}

#[test]
fn test_walls_cover_every_solid() {
    let scene = running(corridor(0));
    assert_eq!(scene.walls().len(), scene.map().solids().len());
    assert_eq!(scene.walls().len(), 20);
}
