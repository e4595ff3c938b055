//! HUD State
//!
//! The simulation never touches the DOM. Anything the HUD should show is
//! queued here as a [`HudEvent`] and drained by the host once per frame.

use serde::Serialize;

/// Health below this fraction of max shows the low-health warning.
pub const LOW_HEALTH_FRACTION: f32 = 0.25;

/// A change the HUD should reflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum HudEvent {
    /// Displayed player health, never negative
    HealthChanged(i32),
    /// Low-health warning turned on or off
    LowHealth(bool),
    /// Player took a hit; flash the hurt overlay
    Hurt,
    /// Respawn countdown number to show
    RespawnCountdown(u32),
    /// Countdown finished and the player is back in play
    Respawned,
}

/// Pending HUD events plus the little state needed to emit transitions.
#[derive(Debug, Clone, Default)]
pub struct HudState {
    events: Vec<HudEvent>,
    low_health: bool,
}

impl HudState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: HudEvent) {
        self.events.push(event);
    }

    /// Report the player's health after damage.
    pub fn player_hurt(&mut self, health: i32, max_health: i32) {
        self.push(HudEvent::HealthChanged(health.max(0)));
        self.set_low_health((health as f32) < max_health as f32 * LOW_HEALTH_FRACTION);
        self.push(HudEvent::Hurt);
    }

    /// Report a completed respawn at full health.
    pub fn player_respawned(&mut self, health: i32) {
        self.push(HudEvent::HealthChanged(health));
        self.set_low_health(false);
        self.push(HudEvent::Respawned);
    }

    fn set_low_health(&mut self, low: bool) {
        if low != self.low_health {
            self.low_health = low;
            self.push(HudEvent::LowHealth(low));
        }
    }

    pub fn is_low_health(&self) -> bool {
        self.low_health
    }

    /// Events not yet drained.
    pub fn pending(&self) -> &[HudEvent] {
        &self.events
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<HudEvent> {
        std::mem::take(&mut self.events)
    }
}
