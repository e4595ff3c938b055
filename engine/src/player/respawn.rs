//! Respawn countdown
//!
//! A dead player waits out a short countdown before being placed at a spawn
//! point again. The countdown runs on simulation ticks, so pausing the loop
//! pauses it too.

/// Where the player is in the death/respawn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnState {
    Alive,
    Countdown { ticks_remaining: u32 },
}

/// Something the HUD should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnEvent {
    /// Whole seconds left before respawning
    Countdown(u32),
    /// Countdown finished; the body should be spawned now
    Respawn,
}

/// Tick-driven respawn state machine.
#[derive(Debug, Clone)]
pub struct RespawnTimer {
    state: RespawnState,
    total_ticks: u32,
    ticks_per_second: u32,
}

impl RespawnTimer {
    /// # Arguments
    /// * `countdown_s` - Seconds between death and respawn
    /// * `fixed_step_s` - Length of one simulation tick
    pub fn new(countdown_s: f32, fixed_step_s: f32) -> Self {
        let ticks_per_second = (1.0 / fixed_step_s).round().max(1.0) as u32;
        let total_ticks = (countdown_s / fixed_step_s).round().max(1.0) as u32;
        Self {
            state: RespawnState::Alive,
            total_ticks,
            ticks_per_second,
        }
    }

    pub fn state(&self) -> RespawnState {
        self.state
    }

    pub fn is_respawning(&self) -> bool {
        matches!(self.state, RespawnState::Countdown { .. })
    }

    /// Start the countdown. Returns the first number to display, or `None` if
    /// a countdown is already running.
    pub fn begin(&mut self) -> Option<RespawnEvent> {
        if self.is_respawning() {
            return None;
        }
        self.state = RespawnState::Countdown {
            ticks_remaining: self.total_ticks,
        };
        tracing::debug!(ticks = self.total_ticks, "respawn countdown started");
        Some(RespawnEvent::Countdown(self.seconds_for(self.total_ticks)))
    }

    /// Advance one tick.
    pub fn advance(&mut self) -> Option<RespawnEvent> {
        let RespawnState::Countdown { ticks_remaining } = self.state else {
            return None;
        };
        let remaining = ticks_remaining.saturating_sub(1);
        if remaining == 0 {
            self.state = RespawnState::Alive;
            return Some(RespawnEvent::Respawn);
        }
        self.state = RespawnState::Countdown {
            ticks_remaining: remaining,
        };
        if remaining % self.ticks_per_second == 0 {
            Some(RespawnEvent::Countdown(self.seconds_for(remaining)))
        } else {
            None
        }
    }

    fn seconds_for(&self, ticks: u32) -> u32 {
        ticks.div_ceil(self.ticks_per_second)
    }
}
