//! The closed event contract between the rig, the ocean and their consumers.
//!
//! Events fire synchronously inside the `tick` that produced them, in emission
//! order, and stay readable on `SimState::events` until the next tick.

use super::fish::FishId;

/// The rig's externally visible activity. `GameEvent::ActionChanged` fires on
/// every change; the island landing is reported via `LureIsland` instead of a
/// dedicated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigAction {
    Idle,
    Swinging,
    Casting,
    Reeling,
}

/// Everything the simulation reports to presentation and economy collaborators.
/// Each variant carries at most one fish reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The rig changed activity
    ActionChanged(RigAction),
    /// A bite succeeded and this fish is now on the hook
    FishHooked(FishId),
    /// The previously hooked fish was eaten off the hook
    FishEaten(FishId),
    /// A hooked fish was reeled all the way in
    FishCaught(FishId),
    /// A failed bite snapped the lure
    LureBroke,
    /// The active lure index moved to the carried value
    LureChanged(usize),
    /// The cast overshot the water and landed on the island
    LureIsland,
    /// A fish entered the live set (initial population or respawn)
    FishAdded(FishId),
    /// A fish left the live set (caught or eaten)
    FishRemoved(FishId),
}
