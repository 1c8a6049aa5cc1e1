//! Reelcast - a 2D fishing minigame simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rig state machine, fish AI, ocean population)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio, menus, camera and persistence are host concerns. The host
//! drives the sim with one `tick` per frame and consumes the closed event set
//! it produces.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the demo driver and tests (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World water surface height (y grows downward; water is below this line)
    pub const WATER_SURFACE_Y: f32 = 300.0;

    /// Rod geometry: local tip offset before the swing rotation is applied
    pub const ROD_TIP_OFFSET_X: f32 = 36.0;
    pub const ROD_TIP_OFFSET_Y: f32 = -84.0;

    /// Rod resting angle (radians above the horizon)
    pub const ROD_REST_ANGLE: f32 = 0.25;

    /// Cast scoring
    pub const MAX_CAST_DISTANCE: f32 = 2000.0;
    pub const MIN_CAST_DISTANCE: f32 = 200.0;
    /// Line length while the rig idles (lure dangling at the tip)
    pub const IDLE_LINE_LENGTH: f32 = 60.0;

    /// Airborne lure keeps its full velocity between gravity steps
    pub const AIR_FRICTION: f32 = 1.0;

    /// How close a chasing fish must get before it strikes
    pub const BITE_DISTANCE: f32 = 14.0;

    /// Flip-scale floor for the slow-glide visual
    pub const MIN_RENDER_SCALE: f32 = 0.6;
}

/// Rotate a vector by `angle` radians
#[inline]
pub fn rotate_vec(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}
