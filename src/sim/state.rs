//! Aggregate simulation state.
//!
//! Everything the host needs to run and observe one fishing session: the rig,
//! the ocean, the economy accumulators, the scene geometry it may mutate, and
//! the frame's event buffer.

use glam::Vec2;

use crate::tuning::Tuning;

use super::economy::Economy;
use super::events::GameEvent;
use super::lure::LureKind;
use super::ocean::Ocean;
use super::rig::{FishingRig, RodKind};
use super::scene::SceneGeometry;

/// Complete simulation state for one session
#[derive(Debug)]
pub struct SimState {
    pub rig: FishingRig,
    pub ocean: Ocean,
    pub economy: Economy,
    /// Host-owned geometry; move `far_shore` between ticks to drift the island
    pub scene: SceneGeometry,
    /// Events produced by the most recent tick, in emission order
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    /// Fresh session over the stock catalogue and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Fresh session with custom balance values
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let scene = SceneGeometry::default();
        let rig = FishingRig::new(
            RodKind::Bronze,
            scene.near_shore,
            vec![LureKind::Basic],
            tuning.rig,
        );
        let mut ocean = Ocean::new(seed, tuning.fish, tuning.ocean);

        let mut events = Vec::new();
        ocean.populate(&mut events);

        Self {
            rig,
            ocean,
            economy: Economy::default(),
            scene,
            events,
            time_ticks: 0,
        }
    }

    /// World position of the rod anchor (convenience for presentation)
    pub fn rod_anchor(&self) -> Vec2 {
        self.rig.anchor
    }
}
