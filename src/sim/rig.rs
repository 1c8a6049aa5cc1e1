//! The fishing rig: rod, line and lure as one state machine.
//!
//! The tricky part of the whole sim lives here: a five-state machine driven by
//! elapsed time and two logical buttons, with continuous lure physics under a
//! hard line-length constraint. The constraint is a position clamp whose
//! displacement is fed back into velocity, which is what makes a taut line
//! feel taut instead of snapping like a rubber band.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{
    AIR_FRICTION, IDLE_LINE_LENGTH, MAX_CAST_DISTANCE, MIN_CAST_DISTANCE, ROD_REST_ANGLE,
    ROD_TIP_OFFSET_X, ROD_TIP_OFFSET_Y, WATER_SURFACE_Y,
};
use crate::rotate_vec;
use crate::tuning::RigTuning;

use super::events::{GameEvent, RigAction};
use super::fish::{FishDescription, FishId};
use super::input::TickInput;
use super::lure::LureKind;
use super::scene::SceneGeometry;

/// Rod tiers. The sweep caps how far back the rod can swing, and launch power
/// is normalized against the Legendary sweep, so lesser rods top out at
/// proportionally shorter casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RodKind {
    Bronze,
    Silver,
    Gold,
    Legendary,
}

impl RodKind {
    /// Maximum swing sweep above the rest angle, radians
    pub fn max_sweep(&self) -> f32 {
        match self {
            RodKind::Bronze => 1.1,
            RodKind::Silver => 1.5,
            RodKind::Gold => 1.9,
            RodKind::Legendary => 2.2,
        }
    }
}

/// Machine state with per-state payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RigState {
    /// Rod relaxing at rest, lure dangling on the idle line
    Idle,
    /// Primary held, rod sweeping up to the rod's cap and back down
    Swinging { ascending: bool },
    /// Lure in free flight
    Casting,
    /// Lure in the water, line being cranked in
    Reeling { reel_speed: f32 },
    /// Lure landed on the island; terminal until the host resets
    Docked { island_offset: Vec2 },
}

/// The rod + line + lure subsystem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishingRig {
    pub rod: RodKind,
    /// World position of the rod butt
    pub anchor: Vec2,
    tuning: RigTuning,
    rotation: f32,
    line_length: f32,
    lure_pos: Vec2,
    lure_vel: Vec2,
    lure_broken: bool,
    state: RigState,
    hooked: Option<FishId>,
    lures: Vec<LureKind>,
    lure_index: usize,
    /// Water line sampled from the scene each tick
    water_surface_y: f32,
}

impl FishingRig {
    pub fn new(rod: RodKind, anchor: Vec2, lures: Vec<LureKind>, tuning: RigTuning) -> Self {
        assert!(!lures.is_empty(), "rig needs at least one owned lure");
        let mut rig = Self {
            rod,
            anchor,
            tuning,
            rotation: ROD_REST_ANGLE,
            line_length: IDLE_LINE_LENGTH,
            lure_pos: Vec2::ZERO,
            lure_vel: Vec2::ZERO,
            lure_broken: false,
            state: RigState::Idle,
            hooked: None,
            lures,
            lure_index: 0,
            water_surface_y: WATER_SURFACE_Y,
        };
        rig.lure_pos = rig.rod_tip() + Vec2::new(0.0, IDLE_LINE_LENGTH);
        rig
    }

    /// Rod tip in world space: the local tip offset swung by the rotation
    pub fn rod_tip(&self) -> Vec2 {
        self.anchor + rotate_vec(Vec2::new(ROD_TIP_OFFSET_X, ROD_TIP_OFFSET_Y), -self.rotation)
    }

    pub fn state(&self) -> RigState {
        self.state
    }

    /// The externally visible activity. Docked reports Casting; the island
    /// landing is signalled by `LureIsland` instead of an action.
    pub fn action(&self) -> RigAction {
        match self.state {
            RigState::Idle => RigAction::Idle,
            RigState::Swinging { .. } => RigAction::Swinging,
            RigState::Casting | RigState::Docked { .. } => RigAction::Casting,
            RigState::Reeling { .. } => RigAction::Reeling,
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn line_length(&self) -> f32 {
        self.line_length
    }

    pub fn lure_pos(&self) -> Vec2 {
        self.lure_pos
    }

    pub fn lure_vel(&self) -> Vec2 {
        self.lure_vel
    }

    pub fn is_lure_broken(&self) -> bool {
        self.lure_broken
    }

    pub fn hooked_fish(&self) -> Option<FishId> {
        self.hooked
    }

    pub fn active_lure(&self) -> LureKind {
        self.lures[self.lure_index]
    }

    pub fn lure_index(&self) -> usize {
        self.lure_index
    }

    pub fn owned_lures(&self) -> &[LureKind] {
        &self.lures
    }

    /// Add a lure to the owned list (shop purchases, achievements)
    pub fn add_lure(&mut self, lure: LureKind) {
        self.lures.push(lure);
    }

    /// Advance the state machine and the lure physics by one frame.
    pub fn tick(
        &mut self,
        input: &TickInput,
        scene: &SceneGeometry,
        dt: f32,
        events: &mut Vec<GameEvent>,
    ) {
        self.water_surface_y = scene.water_surface_y;

        match self.state {
            RigState::Idle => {
                self.relax_rod(dt);
                if input.secondary.repeat {
                    self.lure_index = (self.lure_index + 1) % self.lures.len();
                    events.push(GameEvent::LureChanged(self.lure_index));
                    log::debug!("lure changed to {}", self.active_lure().name());
                }
                if input.primary.pressed && self.rotation <= ROD_REST_ANGLE {
                    self.set_state(RigState::Swinging { ascending: true }, events);
                }
            }

            RigState::Swinging { ascending } => {
                if input.primary.held {
                    let step = self.tuning.swing_speed * dt;
                    if ascending {
                        let cap = ROD_REST_ANGLE + self.rod.max_sweep();
                        self.rotation += step;
                        if self.rotation >= cap {
                            self.rotation = cap;
                            self.state = RigState::Swinging { ascending: false };
                        }
                    } else {
                        self.rotation -= step;
                        if self.rotation <= ROD_REST_ANGLE {
                            self.rotation = ROD_REST_ANGLE;
                            self.set_state(RigState::Idle, events);
                        }
                    }
                } else {
                    self.begin_cast(events);
                }
            }

            RigState::Casting => {
                self.relax_rod(dt);
            }

            RigState::Reeling { mut reel_speed } => {
                self.relax_rod(dt);
                if input.primary.held {
                    let accel = if self.hooked.is_some() {
                        0.0
                    } else if self.lure_broken {
                        self.tuning.reel_accel_broken
                    } else {
                        self.tuning.reel_accel
                    };
                    reel_speed += accel * dt;
                    self.line_length = (self.line_length - reel_speed * dt).max(IDLE_LINE_LENGTH);
                } else {
                    reel_speed = self.tuning.base_reel_speed;
                }
                self.state = RigState::Reeling { reel_speed };

                if self.line_length <= IDLE_LINE_LENGTH {
                    if let Some(id) = self.hooked.take() {
                        log::info!("fish {id} reeled all the way in");
                        events.push(GameEvent::FishCaught(id));
                    }
                    self.lure_broken = false;
                    self.set_state(RigState::Idle, events);
                }
            }

            RigState::Docked { island_offset } => {
                // pinned to the drifting island; no physics while docked
                self.lure_vel = Vec2::ZERO;
                self.lure_pos = scene.far_shore + island_offset;
                return;
            }
        }

        self.step_lure_physics(dt);

        // flight transitions are tested against the post-physics position
        if self.state == RigState::Casting {
            if scene.in_island_region(self.lure_pos) {
                let island_offset = self.lure_pos - scene.far_shore;
                self.lure_vel = Vec2::ZERO;
                self.set_state(RigState::Docked { island_offset }, events);
                events.push(GameEvent::LureIsland);
                log::info!("lure landed on the island");
            } else if self.lure_pos.y >= scene.water_surface_y {
                self.line_length = (self.lure_pos - self.rod_tip()).length();
                self.set_state(
                    RigState::Reeling {
                        reel_speed: self.tuning.base_reel_speed,
                    },
                    events,
                );
            }
        }
    }

    /// Return to Idle after a docked cast (host-driven)
    pub fn reset(&mut self, events: &mut Vec<GameEvent>) {
        debug_assert!(self.hooked.is_none(), "a docked cast cannot hold a fish");
        self.lure_broken = false;
        self.line_length = IDLE_LINE_LENGTH;
        self.lure_pos = self.rod_tip() + Vec2::new(0.0, IDLE_LINE_LENGTH);
        self.lure_vel = Vec2::ZERO;
        self.set_state(RigState::Idle, events);
    }

    /// A chasing fish strikes the lure. Resolves the hook/eat/break protocol
    /// and returns whether `candidate` is now the hooked fish.
    pub fn bite_lure(
        &mut self,
        candidate_id: FishId,
        candidate: &FishDescription,
        hooked_desc: Option<&FishDescription>,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        debug_assert_eq!(
            self.hooked.is_some(),
            hooked_desc.is_some(),
            "hooked description out of sync with the hooked reference"
        );
        debug_assert!(
            self.hooked != Some(candidate_id),
            "the hooked fish cannot bite its own lure"
        );

        if self.active_lure().bites(candidate, hooked_desc) {
            if let Some(previous) = self.hooked.replace(candidate_id) {
                events.push(GameEvent::FishEaten(previous));
                log::debug!("fish {previous} eaten off the hook by {candidate_id}");
            }
            events.push(GameEvent::FishHooked(candidate_id));
            true
        } else {
            if let Some(previous) = self.hooked.take() {
                events.push(GameEvent::FishEaten(previous));
            }
            self.lure_broken = true;
            events.push(GameEvent::LureBroke);
            log::debug!("fish {candidate_id} snapped the lure");
            false
        }
    }

    /// Attraction gate used by fish perception. A broken or airborne lure
    /// attracts nothing; otherwise the active lure's predicate decides.
    pub fn is_attracted_to_lure(
        &self,
        fish: &FishDescription,
        hooked_desc: Option<&FishDescription>,
    ) -> bool {
        if self.lure_broken || self.lure_pos.y < self.water_surface_y {
            return false;
        }
        self.active_lure().attracts(fish, hooked_desc)
    }

    fn set_state(&mut self, next: RigState, events: &mut Vec<GameEvent>) {
        let previous = self.action();
        self.state = next;
        let action = self.action();
        if action != previous {
            log::debug!("rig action: {previous:?} -> {action:?}");
            events.push(GameEvent::ActionChanged(action));
        }
    }

    fn begin_cast(&mut self, events: &mut Vec<GameEvent>) {
        let power = ((self.rotation - ROD_REST_ANGLE) / RodKind::Legendary.max_sweep())
            .clamp(0.0, 1.0);
        self.line_length = (power * MAX_CAST_DISTANCE).max(MIN_CAST_DISTANCE);
        self.lure_vel = self.tuning.cast_velocity * power;
        log::info!(
            "cast released at power {power:.2}, line {:.0}",
            self.line_length
        );
        self.set_state(RigState::Casting, events);
    }

    fn relax_rod(&mut self, dt: f32) {
        let step = self.tuning.relax_rate * dt;
        if self.rotation > ROD_REST_ANGLE {
            self.rotation = (self.rotation - step).max(ROD_REST_ANGLE);
        } else if self.rotation < ROD_REST_ANGLE {
            self.rotation = (self.rotation + step).min(ROD_REST_ANGLE);
        }
    }

    /// Free-flight/constraint integration. Velocity is recomputed from the
    /// clamped displacement, so the line constraint also constrains speed.
    fn step_lure_physics(&mut self, dt: f32) {
        let friction = match self.state {
            RigState::Reeling { .. } => self.tuning.water_friction,
            _ => AIR_FRICTION,
        };
        let previous = self.lure_pos;

        self.lure_vel = self.lure_vel * friction + Vec2::new(0.0, self.tuning.gravity) * dt;
        self.lure_pos += self.lure_vel * dt;

        let tip = self.rod_tip();
        let to_lure = self.lure_pos - tip;
        let dist = to_lure.length();
        if dist > self.line_length {
            self.lure_pos = tip + to_lure * (self.line_length / dist);
        }
        if dt > 0.0 {
            self.lure_vel = (self.lure_pos - previous) / dt;
        }
    }

    #[cfg(test)]
    pub(crate) fn place_lure_for_test(&mut self, pos: Vec2, line_length: f32) {
        self.lure_pos = pos;
        self.line_length = line_length;
    }

    #[cfg(test)]
    pub(crate) fn break_lure_for_test(&mut self) {
        self.lure_broken = true;
    }
}
