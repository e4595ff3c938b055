//! Collision Tests - Floor Contact, Wall Push-Out and Arena Soak
//!
//! Drives kinematic bodies tick by tick against small grids, checks the
//! single-axis push-out rules, and runs the arena with stationary bodies to
//! check health and bullet bookkeeping over time.

use glam::Vec3;
use proptest::prelude::*;
use voxel_arena_engine::game::{ArenaConfig, ArenaScene, CollisionSystem};
use voxel_arena_engine::physics::{move_outside, spheres_overlap};
use voxel_arena_engine::player::{BodyTuning, KinematicBody};
use voxel_arena_engine::world::{CellKind, GridMap};

/// Small room. Row 1 is open from x = -150 to 250 and centred on z = 0.
const ROOM: &str = "XXXXXX\nX    X\nX S  X\nXXXXXX";

/// Short wall at (1, 2), centred on x = 50, z = 0.
const LEDGE: &str = "XXXXX\nX T X\nX S X\nXXXXX";

const DT: f32 = 0.01;

fn body_at(position: Vec3) -> KinematicBody {
    let mut body = KinematicBody::new(BodyTuning::default());
    body.position = position;
    body
}

// ============================================================================
// Scripted Bodies
// ============================================================================

#[test]
fn test_strafing_along_open_row_stays_grounded() {
    let map = GridMap::parse(ROOM, 100.0, 100.0).unwrap();
    let mut body = body_at(Vec3::new(-100.0, 40.0, 0.0));
    body.intents.right = true;

    for tick in 0..100 {
        body.update(DT);
        CollisionSystem::check_body(&mut body, &map).unwrap();
        assert!(body.can_jump, "tick {tick}");
        let cell = map.cell_for(body.position).unwrap();
        assert!(!cell.kind.is_solid(), "tick {tick}: inside {:?}", cell.kind);
    }

    // About 2 units a tick at the speed cap
    assert!(body.position.x > 50.0 && body.position.x < 150.0, "x = {}", body.position.x);
    assert!(body.position.z.abs() < 1e-3);
    assert!((body.feet()).abs() < 1e-3);
}

#[test]
fn test_falling_body_lands_on_short_wall() {
    let map = GridMap::parse(LEDGE, 100.0, 100.0).unwrap();
    let top = map.world_center_of(1, 2);
    let mut body = body_at(Vec3::new(top.x, 300.0, top.z));
    body.can_jump = false;

    let mut landed = false;
    for _ in 0..300 {
        body.update(DT);
        CollisionSystem::check_body(&mut body, &map).unwrap();
        if body.can_jump {
            landed = true;
            break;
        }
    }

    assert!(landed);
    assert!((body.feet() - 100.0).abs() < 1e-3);
    assert_eq!(map.cell_for(body.position).unwrap().kind, CellKind::ShortWall);

    // Resting on top: gravity keeps pulling, the wall keeps catching
    for _ in 0..100 {
        body.update(DT);
        CollisionSystem::check_body(&mut body, &map).unwrap();
    }
    assert!(body.can_jump);
    assert!((body.feet() - 100.0).abs() < 1e-3);
    assert!((body.position.x - top.x).abs() < 1e-3);
}

#[test]
fn test_body_inside_short_wall_is_pushed_to_nearer_face() {
    let map = GridMap::parse(LEDGE, 100.0, 100.0).unwrap();
    // 4 in from the +Z face, 3 in from the +X edge
    let mut body = body_at(Vec3::new(97.0, 40.0, 46.0));

    CollisionSystem::check_body(&mut body, &map).unwrap();

    // X overlap is 3, Z overlap 4: Z moves
    assert_eq!(body.position, Vec3::new(97.0, 40.0, 50.0));
    let cell = map.cell_for(body.position).unwrap();
    assert_eq!((cell.row, cell.col), (2, 2));
}

#[test]
fn test_body_above_short_wall_top_passes_over() {
    let map = GridMap::parse(LEDGE, 100.0, 100.0).unwrap();
    let mut body = body_at(Vec3::new(60.0, 160.0, 10.0));
    body.can_jump = false;

    CollisionSystem::check_body(&mut body, &map).unwrap();

    assert_eq!(body.position, Vec3::new(60.0, 160.0, 10.0));
    assert!(!body.can_jump);
}

// ============================================================================
// Arena Soak
// ============================================================================

#[test]
fn test_stationary_arena_keeps_health_and_bullets_consistent() {
    // Bots never pick a new course, and the player only turns and fires
    let config = ArenaConfig {
        bot_move_delay_ms: 1.0e12,
        ..ArenaConfig::default()
    };
    let mut scene = ArenaScene::new(config, 0.0).unwrap();
    scene.start();

    let mut now_ms = 0.0;
    for frame in 0..1200u32 {
        scene.look(if (frame / 120) % 2 == 0 { 6.0 } else { -4.0 }, 0.0);
        if frame % 20 == 0 {
            scene.fire();
        }
        now_ms += 1000.0 / 60.0;
        scene
            .update(1.0 / 60.0, now_ms)
            .unwrap_or_else(|err| panic!("frame {frame}: {err}"));

        let map = scene.map();
        for body in std::iter::once(scene.player()).chain(scene.bots().bodies()) {
            let cell = map.cell_for(body.position).unwrap();
            assert!(!cell.kind.is_solid(), "frame {frame}: body inside {:?}", cell.kind);
            assert!((0..=body.max_health).contains(&body.health));
        }
    }

    let stats = scene.stats();
    assert!(stats.shots_fired > 0);
    assert_eq!(
        stats.shots_fired,
        stats.bullets_recycled + scene.projectiles().active_count() as u64
    );
}

// ============================================================================
// Properties
// ============================================================================

/// Signed distance to the nearer edge of a 100-wide footprint centred on 0.
fn overlap(v: f32) -> f32 {
    if v + 50.0 < 50.0 { v + 50.0 } else { v + 50.0 - 100.0 }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_push_out_ignores_outside_points(
        x in -300.0f32..300.0,
        z in -300.0f32..300.0,
    ) {
        prop_assume!(x.abs() >= 50.0 || z.abs() >= 50.0);
        let mut p = Vec3::new(x, 7.0, z);
        prop_assert!(!move_outside(Vec3::ZERO, 100.0, 100.0, &mut p));
        prop_assert_eq!(p, Vec3::new(x, 7.0, z));
    }

    #[test]
    fn prop_push_out_moves_deeper_axis_onto_edge(
        x in -49.9f32..49.9,
        z in -49.9f32..49.9,
    ) {
        let mut p = Vec3::new(x, 7.0, z);
        prop_assert!(move_outside(Vec3::ZERO, 100.0, 100.0, &mut p));

        let (x_overlap, z_overlap) = (overlap(x), overlap(z));
        let expected = if x_overlap.abs() > z_overlap.abs() {
            Vec3::new(if x_overlap > 0.0 { -50.0 } else { 50.0 }, 7.0, z)
        } else {
            Vec3::new(x, 7.0, if z_overlap > 0.0 { -50.0 } else { 50.0 })
        };
        prop_assert_eq!(p, expected);

        // On the edge now, so pushing again is a no-op
        prop_assert!(!move_outside(Vec3::ZERO, 100.0, 100.0, &mut p));
        prop_assert_eq!(p, expected);
    }

    #[test]
    fn prop_sphere_overlap_is_symmetric(
        ax in -100.0f32..100.0,
        az in -100.0f32..100.0,
        bx in -100.0f32..100.0,
        bz in -100.0f32..100.0,
        ra in 0.5f32..30.0,
        rb in 0.5f32..30.0,
    ) {
        let a = Vec3::new(ax, 40.0, az);
        let b = Vec3::new(bx, 40.0, bz);
        prop_assert_eq!(spheres_overlap(a, ra, b, rb), spheres_overlap(b, rb, a, ra));
    }
}
