//! Ocean population: spawning, weighted content rolls and respawn scheduling.
//!
//! The ocean owns every live fish and a queue of replacements counting down
//! to reinsertion. All randomness flows through one injected `Pcg32`, so a
//! seed pins the full population roll for tests.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::{FishTuning, OceanTuning};

use super::events::GameEvent;
use super::fish::{
    Fish, FishBehavior, FishDescription, FishId, FishModifier, FishMovement, FishRarity, FishSize,
};
use super::rig::FishingRig;

/// Rarity roll weights, in catalogue order
const RARITY_WEIGHTS: [(FishRarity, u32); 4] = [
    (FishRarity::Common, 50),
    (FishRarity::Uncommon, 35),
    (FishRarity::Rare, 10),
    (FishRarity::VeryRare, 5),
];

/// Modifier roll weights, in catalogue order
const MODIFIER_WEIGHTS: [(FishModifier, u32); 7] = [
    (FishModifier::Typical, 55),
    (FishModifier::Ancient, 10),
    (FishModifier::Young, 5),
    (FishModifier::Beautiful, 10),
    (FishModifier::Ugly, 5),
    (FishModifier::Fat, 10),
    (FishModifier::Thin, 5),
];

/// Spawn descriptor: one fish of `size` patrolling the given band
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnSpot {
    pub size: FishSize,
    pub x_min: f32,
    pub x_max: f32,
    pub depth_min: f32,
    pub depth_max: f32,
}

impl SpawnSpot {
    pub fn new(size: FishSize, x_min: f32, x_max: f32, depth_min: f32, depth_max: f32) -> Self {
        Self {
            size,
            x_min,
            x_max,
            depth_min,
            depth_max,
        }
    }

    fn range_min(&self) -> Vec2 {
        Vec2::new(self.x_min, self.depth_min)
    }

    fn range_max(&self) -> Vec2 {
        Vec2::new(self.x_max, self.depth_max)
    }
}

/// A catalogue that cannot seed a population
#[derive(thiserror::Error, Debug)]
pub enum OceanError {
    #[error("spawn catalogue is empty")]
    EmptyCatalogue,
    #[error("spawn spot has an inverted range")]
    InvertedRange,
}

/// A replacement fish counting down to reinsertion
#[derive(Debug, Clone)]
struct PendingRespawn {
    fish: Fish,
    countdown: f32,
}

/// The live fish set plus respawn bookkeeping
#[derive(Debug)]
pub struct Ocean {
    pub fish: Vec<Fish>,
    pending: Vec<PendingRespawn>,
    catalogue: Vec<SpawnSpot>,
    rng: Pcg32,
    next_id: FishId,
    fish_tuning: FishTuning,
    tuning: OceanTuning,
}

impl Ocean {
    /// Ocean over the stock catalogue, rolled from `seed`
    pub fn new(seed: u64, fish_tuning: FishTuning, tuning: OceanTuning) -> Self {
        Self::with_catalogue(seed, default_catalogue(), fish_tuning, tuning)
            .expect("stock catalogue is valid")
    }

    /// Ocean over a custom catalogue; rejects one that cannot spawn fish
    pub fn with_catalogue(
        seed: u64,
        catalogue: Vec<SpawnSpot>,
        fish_tuning: FishTuning,
        tuning: OceanTuning,
    ) -> Result<Self, OceanError> {
        if catalogue.is_empty() {
            return Err(OceanError::EmptyCatalogue);
        }
        for spot in &catalogue {
            if spot.x_min > spot.x_max || spot.depth_min > spot.depth_max {
                return Err(OceanError::InvertedRange);
            }
        }
        Ok(Self {
            fish: Vec::new(),
            pending: Vec::new(),
            catalogue,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            fish_tuning,
            tuning,
        })
    }

    /// Roll the initial population, one fish per catalogue entry.
    pub fn populate(&mut self, events: &mut Vec<GameEvent>) {
        let spots = self.catalogue.clone();
        for spot in &spots {
            let fish = self.roll_fish(spot);
            events.push(GameEvent::FishAdded(fish.id));
            self.fish.push(fish);
        }
        log::info!("ocean populated with {} fish", self.fish.len());
    }

    /// Fish still waiting in the respawn queue
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Per-frame update: fish AI first, then the respawn countdowns.
    pub fn update(&mut self, rig: &mut FishingRig, dt: f32, events: &mut Vec<GameEvent>) {
        for i in 0..self.fish.len() {
            // the hooked description can change mid-loop when a bite chains
            let hooked_desc = rig
                .hooked_fish()
                .and_then(|id| self.fish.iter().find(|f| f.id == id))
                .map(|f| f.description);
            self.fish[i].update(rig, hooked_desc, dt, events);
        }

        let mut i = 0;
        while i < self.pending.len() {
            self.pending[i].countdown -= dt;
            if self.pending[i].countdown <= 0.0 {
                let entry = self.pending.swap_remove(i);
                log::debug!("fish {} joins the live set", entry.fish.id);
                events.push(GameEvent::FishAdded(entry.fish.id));
                self.fish.push(entry.fish);
            } else {
                i += 1;
            }
        }
    }

    /// Consume the frame's FishCaught/FishEaten events: drop each fish from
    /// the live set and queue a same-envelope replacement. Returns the sale
    /// values of the caught fish for the economy.
    pub fn resolve_lifecycle(&mut self, events: &mut Vec<GameEvent>) -> Vec<u32> {
        let mut caught_values = Vec::new();
        let mut idx = 0;
        while idx < events.len() {
            let (id, caught) = match events[idx] {
                GameEvent::FishCaught(id) => (id, true),
                GameEvent::FishEaten(id) => (id, false),
                _ => {
                    idx += 1;
                    continue;
                }
            };
            idx += 1;

            if let Some(pos) = self.fish.iter().position(|f| f.id == id) {
                let gone = self.fish.remove(pos);
                if caught {
                    caught_values.push(gone.description.value());
                }
                events.push(GameEvent::FishRemoved(id));
                self.schedule_replacement(&gone);
            }
        }
        caught_values
    }

    /// Roll a replacement over the departed fish's envelope and queue it.
    fn schedule_replacement(&mut self, gone: &Fish) {
        let spot = SpawnSpot {
            size: gone.description.size,
            x_min: gone.movement.range_min.x,
            x_max: gone.movement.range_max.x,
            depth_min: gone.movement.range_min.y,
            depth_max: gone.movement.range_max.y,
        };
        let fish = self.roll_fish(&spot);
        let base = self
            .rng
            .random_range(self.tuning.respawn_delay_min..=self.tuning.respawn_delay_max);
        let countdown = base * respawn_scale(spot.size);
        log::info!(
            "fish {} gone, replacement {} due in {countdown:.0}s",
            gone.id,
            fish.id
        );
        self.pending.push(PendingRespawn { fish, countdown });
    }

    /// Fully initialize a new fish for a spot: weighted rarity and modifier,
    /// size-scaled patrol speed, random position inside the home range.
    fn roll_fish(&mut self, spot: &SpawnSpot) -> Fish {
        let rarity = weighted_pick(&mut self.rng, &RARITY_WEIGHTS);
        let modifier = weighted_pick(&mut self.rng, &MODIFIER_WEIGHTS);
        let description = FishDescription::new(spot.size, rarity, modifier);

        let base_speed = self
            .rng
            .random_range(self.tuning.patrol_speed_min..=self.tuning.patrol_speed_max);
        let movement = FishMovement {
            max_speed: base_speed * spot.size.speed_scale(),
            acceleration: self.fish_tuning.acceleration,
            range_min: spot.range_min(),
            range_max: spot.range_max(),
        };
        let behavior = FishBehavior {
            sight_distance: self.fish_tuning.sight_distance,
            sight_half_angle: self.fish_tuning.sight_half_angle,
            lunge_multiplier: self.fish_tuning.lunge_multiplier,
        };
        let pos = Vec2::new(
            self.rng.random_range(spot.x_min..=spot.x_max),
            self.rng.random_range(spot.depth_min..=spot.depth_max),
        );

        let id = self.next_id;
        self.next_id += 1;
        Fish::new(id, description, movement, behavior, pos)
    }
}

/// Cumulative-weight selection: a uniform integer draw in [0, total) walked
/// down the table in order.
fn weighted_pick<T: Copy>(rng: &mut Pcg32, table: &[(T, u32)]) -> T {
    let total: u32 = table.iter().map(|(_, w)| w).sum();
    let mut draw = rng.random_range(0..total);
    for &(item, weight) in table {
        if draw < weight {
            return item;
        }
        draw -= weight;
    }
    unreachable!("draw below total always lands inside the table")
}

/// Respawn delay scaling: small fish come back sooner
fn respawn_scale(size: FishSize) -> f32 {
    match size {
        FishSize::Small => 0.5,
        FishSize::Medium => 0.75,
        FishSize::Large | FishSize::VeryLarge => 1.0,
    }
}

/// The stock spawn catalogue: shallow smalls, mid-water mediums, deep larges
pub fn default_catalogue() -> Vec<SpawnSpot> {
    vec![
        SpawnSpot::new(FishSize::Small, 200.0, 700.0, 320.0, 420.0),
        SpawnSpot::new(FishSize::Small, 500.0, 1000.0, 340.0, 460.0),
        SpawnSpot::new(FishSize::Small, 900.0, 1400.0, 320.0, 440.0),
        SpawnSpot::new(FishSize::Medium, 400.0, 1100.0, 420.0, 560.0),
        SpawnSpot::new(FishSize::Medium, 800.0, 1500.0, 440.0, 580.0),
        SpawnSpot::new(FishSize::Medium, 1100.0, 1800.0, 420.0, 560.0),
        SpawnSpot::new(FishSize::Large, 700.0, 1600.0, 560.0, 720.0),
        SpawnSpot::new(FishSize::Large, 1000.0, 1900.0, 580.0, 740.0),
        SpawnSpot::new(FishSize::VeryLarge, 1200.0, 1950.0, 720.0, 880.0),
    ]
}
