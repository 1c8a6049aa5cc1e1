//! Logical button contract fed by raw host polling.
//!
//! The sim never touches input devices; the host polls whatever it likes and
//! runs the raw held flags through a [`ButtonTracker`] per button, once per
//! frame, to derive the edge and key-repeat semantics the rig consumes.

use serde::{Deserialize, Serialize};

/// Delay before a held button starts repeating, seconds
const REPEAT_DELAY: f32 = 0.35;
/// Interval between repeat pulses once repeating, seconds
const REPEAT_INTERVAL: f32 = 0.12;

/// One logical button for a single frame
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ButtonState {
    /// Went down this frame
    pub pressed: bool,
    /// Currently down
    pub held: bool,
    /// Press edge or key-repeat pulse this frame
    pub repeat: bool,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Swing, cast and reel control
    pub primary: ButtonState,
    /// Lure cycling while idle
    pub secondary: ButtonState,
}

/// Derives `pressed`/`repeat` pulses from the raw held flag across frames
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonTracker {
    was_held: bool,
    repeat_timer: f32,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame with the host's raw held flag.
    pub fn update(&mut self, held: bool, dt: f32) -> ButtonState {
        let pressed = held && !self.was_held;
        let mut repeat = pressed;

        if pressed {
            self.repeat_timer = REPEAT_DELAY;
        } else if held {
            self.repeat_timer -= dt;
            if self.repeat_timer <= 0.0 {
                repeat = true;
                self.repeat_timer = REPEAT_INTERVAL;
            }
        }

        self.was_held = held;
        ButtonState {
            pressed,
            held,
            repeat,
        }
    }
}
