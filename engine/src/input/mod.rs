//! Input Module
//!
//! Platform-agnostic input handling for the arena player. The host forwards
//! key, pointer and click events; the scene drains them once per tick as
//! [`PlayerCommands`].
//!
//! # Example
//!
//! ```rust,ignore
//! use voxel_arena_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//! input.mouse.set_captured(true);
//!
//! input.handle_key(KeyCode::W, true); // W pressed
//! input.accumulate_look(4.0, -2.0);
//! input.request_fire();
//!
//! let commands = input.take_commands();
//! assert!(commands.intents.forward);
//! assert!(commands.fire);
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse_state;

// Re-export commonly used types at module level
pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyCode, MoveIntents};
pub use mouse_state::FpsMouseState;

/// Everything the player body needs from input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerCommands {
    pub intents: MoveIntents,
    /// Accumulated pointer motion in pixels (dx, dy)
    pub look: (f32, f32),
    pub jump: bool,
    pub fire: bool,
}

/// Combined input state for the local player.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub bindings: KeyBindings,
    pub intents: MoveIntents,
    pub mouse: FpsMouseState,
    jump_requested: bool,
    fire_requested: bool,
}

impl InputState {
    /// Create a new input state with default bindings and nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Movement keys set or clear their intent. Jump only reacts to the press.
    /// Returns `true` if the key is bound.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(action) = self.bindings.get_action(key) else {
            return false;
        };
        match action {
            InputAction::MoveForward => self.intents.forward = pressed,
            InputAction::MoveBack => self.intents.backward = pressed,
            InputAction::MoveLeft => self.intents.left = pressed,
            InputAction::MoveRight => self.intents.right = pressed,
            InputAction::Jump => {
                if pressed {
                    self.jump_requested = true;
                }
            }
        }
        true
    }

    /// Accumulate pointer motion.
    #[inline]
    pub fn accumulate_look(&mut self, dx: f32, dy: f32) {
        self.mouse.accumulate_delta(dx, dy);
    }

    /// Queue a one-shot fire trigger for the next tick.
    pub fn request_fire(&mut self) {
        self.fire_requested = true;
    }

    /// Drain one tick's worth of commands. One-shot requests and look deltas reset.
    pub fn take_commands(&mut self) -> PlayerCommands {
        PlayerCommands {
            intents: self.intents,
            look: self.mouse.consume_delta(),
            jump: std::mem::take(&mut self.jump_requested),
            fire: std::mem::take(&mut self.fire_requested),
        }
    }

    /// Release every key and drop pending requests; bindings are kept.
    pub fn reset(&mut self) {
        self.intents.clear();
        self.mouse.consume_delta();
        self.jump_requested = false;
        self.fire_requested = false;
    }
}
