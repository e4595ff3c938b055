//! FPS-style Mouse State Tracker
//!
//! Raw pointer-lock deltas accumulate between ticks and are consumed at once
//! by the scene, which hands them to the player's look integrator.

/// FPS-style mouse state tracker with delta accumulation.
///
/// - **Delta accumulation**: Raw mouse deltas accumulate until consumed
/// - **Capture tracking**: Motion is ignored unless the pointer is captured
/// - **Atomic consumption**: `consume_delta()` returns accumulated delta and resets it
///
/// # Example
///
/// ```rust,ignore
/// use voxel_arena_engine::input::FpsMouseState;
///
/// let mut mouse = FpsMouseState::new();
/// mouse.set_captured(true);
///
/// mouse.accumulate_delta(10.0, -5.0);
/// mouse.accumulate_delta(3.0, 2.0);
///
/// let (dx, dy) = mouse.consume_delta();
/// // dx = 13.0, dy = -3.0
/// player.rotate(dy, dx, 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume.
    delta_y: f32,
    /// Whether the pointer is currently captured.
    cursor_captured: bool,
}

impl FpsMouseState {
    /// Create a new FPS mouse state with zero deltas and cursor not captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion delta.
    ///
    /// Motion arriving while the pointer is not captured is dropped.
    ///
    /// # Arguments
    ///
    /// * `dx` - Horizontal delta in pixels
    /// * `dy` - Vertical delta in pixels
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if !self.cursor_captured {
            return;
        }
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Set whether the pointer is captured.
    #[inline]
    pub fn set_captured(&mut self, captured: bool) {
        self.cursor_captured = captured;
        // Clear accumulated deltas when capture is lost to prevent jumps
        if !captured {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
    }

    /// Check if the pointer is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Get the current accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }
}
