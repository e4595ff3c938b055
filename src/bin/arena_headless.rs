//! Headless Arena Runner
//!
//! Run with: `cargo run --bin arena_headless -- [config.json] [seconds]`
//!
//! Drives the arena simulation without a window at a simulated 60 Hz frame
//! rate. A scripted player walks forward, sweeps the view, jumps now and
//! then and fires twice a second. Useful for soak-testing the loop and
//! eyeballing bot behaviour in the logs.
//!
//! Log level follows `RUST_LOG` (default `info`).

use tracing_subscriber::EnvFilter;

use voxel_arena_engine::game::{ArenaConfig, ArenaScene, HudEvent};
use voxel_arena_engine::input::KeyCode;

// ============================================================================
// CONSTANTS
// ============================================================================

const FRAME_DELTA_S: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: u32 = 30;
const FIRE_EVERY_FRAMES: u64 = 30;
const JUMP_EVERY_FRAMES: u64 = 150;
const STATS_EVERY_FRAMES: u64 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => ArenaConfig::load(&path)?,
        None => ArenaConfig::default(),
    };
    let seconds = match args.next() {
        Some(raw) => raw.parse::<u32>()?,
        None => DEFAULT_SECONDS,
    };

    let mut scene = ArenaScene::new(config, 0.0)?;
    scene.start();
    scene.key(KeyCode::W, true);

    let frames = u64::from(seconds) * 60;
    let mut now_ms = 0.0_f64;
    let mut low_health_warnings = 0u32;

    for frame in 0..frames {
        // Slow sweep left and right
        let sweep = if (frame / 240) % 2 == 0 { 3.0 } else { -3.0 };
        scene.look(sweep, 0.0);

        if frame % FIRE_EVERY_FRAMES == 0 {
            scene.fire();
        }
        if frame % JUMP_EVERY_FRAMES == 0 {
            scene.key(KeyCode::Space, true);
            scene.key(KeyCode::Space, false);
        }

        now_ms += f64::from(FRAME_DELTA_S) * 1000.0;
        if let Err(err) = scene.update(FRAME_DELTA_S, now_ms) {
            tracing::error!(frame, %err, "tick aborted");
            return Err(err.into());
        }

        for event in scene.drain_hud() {
            match event {
                HudEvent::LowHealth(true) => {
                    low_health_warnings += 1;
                    tracing::warn!("player health low");
                }
                HudEvent::RespawnCountdown(n) => tracing::info!(n, "respawning in"),
                HudEvent::Respawned => tracing::info!("player back in play"),
                _ => {}
            }
        }

        if frame > 0 && frame % STATS_EVERY_FRAMES == 0 {
            let stats = scene.stats();
            tracing::info!(
                ticks = stats.ticks,
                bullets = scene.projectiles().active_count(),
                pool = scene.projectiles().pool_size(),
                health = scene.player().health,
                "progress"
            );
        }
    }

    let stats = scene.stats();
    tracing::info!(
        seconds,
        ticks = stats.ticks,
        shots = stats.shots_fired,
        recycled = stats.bullets_recycled,
        player_hits = stats.player_hits,
        bot_hits = stats.bot_hits,
        bot_respawns = stats.bot_respawns,
        player_deaths = stats.player_deaths,
        low_health_warnings,
        "run complete"
    );

    Ok(())
}
