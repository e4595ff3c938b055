//! Keyboard Input Module
//!
//! Key codes for the handful of keys the arena listens to, and the four
//! movement intents a body consumes every tick.
//! Decoupled from the browser so the core can be driven headless.

use serde::{Deserialize, Serialize};

/// Generic key codes, independent of the host's event system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.code` string ("KeyW", "ArrowUp", ...) to a key code.
    pub fn from_web_code(code: &str) -> Self {
        match code {
            "KeyW" => Self::W,
            "KeyA" => Self::A,
            "KeyS" => Self::S,
            "KeyD" => Self::D,
            "Space" => Self::Space,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Escape" => Self::Escape,
            _ => Self::Unknown,
        }
    }

    /// Map a legacy DOM `keyCode` number to a key code.
    pub fn from_legacy_key_code(code: u32) -> Self {
        match code {
            87 => Self::W,
            65 => Self::A,
            83 => Self::S,
            68 => Self::D,
            32 => Self::Space,
            38 => Self::ArrowUp,
            40 => Self::ArrowDown,
            37 => Self::ArrowLeft,
            39 => Self::ArrowRight,
            27 => Self::Escape,
            _ => Self::Unknown,
        }
    }
}

/// Four independent movement intents.
///
/// Set by keyboard input for the player and by the bot brain for bots. The
/// integrator reads them every tick; they stay set until changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntents {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntents {
    /// Create a new intent set with nothing active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any intent is active.
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Clear all intents.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}
