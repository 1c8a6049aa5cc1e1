//! Deterministic fishing simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The pieces and how they talk:
//! - `rig`: the rod/line/lure state machine, the only writer of the hooked
//!   fish reference
//! - `fish`: per-fish steering, perception and the strike
//! - `ocean`: the live population, weighted spawns and the respawn queue
//! - `economy`: money and timer accumulators folding over the event buffer
//! - `tick`: the per-frame orchestration that wires them together

pub mod economy;
pub mod events;
pub mod fish;
pub mod input;
pub mod lure;
pub mod ocean;
pub mod rig;
pub mod scene;
pub mod state;
pub mod tick;

pub use economy::{Economy, FishingTimer, Money};
pub use events::{GameEvent, RigAction};
pub use fish::{
    Fish, FishBehavior, FishDescription, FishId, FishMode, FishModifier, FishMovement, FishRarity,
    FishSize,
};
pub use input::{ButtonState, ButtonTracker, TickInput};
pub use lure::LureKind;
pub use ocean::{Ocean, OceanError, SpawnSpot, default_catalogue};
pub use rig::{FishingRig, RigState, RodKind};
pub use scene::SceneGeometry;
pub use state::SimState;
pub use tick::tick;
