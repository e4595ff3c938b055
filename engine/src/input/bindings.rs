//! Input Bindings Module
//!
//! Maps physical keys to logical actions. Several keys may drive the same
//! action (W and ArrowUp both move forward).

use std::collections::HashMap;

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W, ArrowUp)
    MoveForward,
    /// Move backward (default: S, ArrowDown)
    MoveBack,
    /// Strafe left (default: A, ArrowLeft)
    MoveLeft,
    /// Strafe right (default: D, ArrowRight)
    MoveRight,
    /// Jump (default: Space)
    Jump,
}

impl InputAction {
    /// Parse the short action name used by the browser bridge
    /// (`forward`, `back`, `left`, `right`, `jump`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "forward" => Some(Self::MoveForward),
            "back" => Some(Self::MoveBack),
            "left" => Some(Self::MoveLeft),
            "right" => Some(Self::MoveRight),
            "jump" => Some(Self::Jump),
            _ => None,
        }
    }
}

/// Maps physical keys to logical actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - W / ArrowUp = MoveForward
    /// - S / ArrowDown = MoveBack
    /// - A / ArrowLeft = MoveLeft
    /// - D / ArrowRight = MoveRight
    /// - Space = Jump
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
        };

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::Space, InputAction::Jump);

        bindings
    }

    /// Bind a physical key to a logical action, replacing the key's previous action.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.key_to_action.insert(key, action);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_to_action.remove(&key);
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }
}
