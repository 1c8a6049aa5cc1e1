//! Fish: immutable description data plus the runtime steering AI.
//!
//! A fish is three shared value objects (what it is, how it moves, how it
//! perceives) and a small amount of runtime state. The AI is a three-mode
//! machine driven purely by perception: patrol the home range, chase a lure
//! that enters the sight cone, ride the hook once a bite lands.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BITE_DISTANCE, MIN_RENDER_SCALE};

use super::events::GameEvent;
use super::rig::FishingRig;

pub type FishId = u32;

/// Size class, ordered smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FishSize {
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl FishSize {
    /// Value multiplier
    pub fn factor(&self) -> f32 {
        match self {
            FishSize::Small => 1.0,
            FishSize::Medium => 3.0,
            FishSize::Large => 5.0,
            FishSize::VeryLarge => 7.0,
        }
    }

    /// Next size class up; the chaining lures accept exactly this
    pub fn next_larger(&self) -> Option<FishSize> {
        match self {
            FishSize::Small => Some(FishSize::Medium),
            FishSize::Medium => Some(FishSize::Large),
            FishSize::Large => Some(FishSize::VeryLarge),
            FishSize::VeryLarge => None,
        }
    }

    /// Distance from body center to mouth
    pub fn half_body_length(&self) -> f32 {
        match self {
            FishSize::Small => 10.0,
            FishSize::Medium => 18.0,
            FishSize::Large => 28.0,
            FishSize::VeryLarge => 40.0,
        }
    }

    /// Patrol speed multiplier: small fish dart, very large fish cruise
    pub fn speed_scale(&self) -> f32 {
        match self {
            FishSize::Small => 1.25,
            FishSize::Medium => 1.0,
            FishSize::Large => 0.8,
            FishSize::VeryLarge => 0.6,
        }
    }
}

/// Rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FishRarity {
    Common,
    Uncommon,
    Rare,
    VeryRare,
}

impl FishRarity {
    /// Value multiplier
    pub fn factor(&self) -> f32 {
        match self {
            FishRarity::Common => 1.0,
            FishRarity::Uncommon => 2.0,
            FishRarity::Rare => 3.0,
            FishRarity::VeryRare => 4.0,
        }
    }
}

/// Physical condition of an individual fish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FishModifier {
    Typical,
    Fat,
    Thin,
    Ancient,
    Young,
    Beautiful,
    Ugly,
}

impl FishModifier {
    /// Value multiplier
    pub fn factor(&self) -> f32 {
        match self {
            FishModifier::Typical => 1.0,
            FishModifier::Fat | FishModifier::Ancient | FishModifier::Beautiful => 1.5,
            FishModifier::Thin | FishModifier::Young | FishModifier::Ugly => 0.75,
        }
    }
}

/// What a fish is. Copy value object; `modifier` is the one field mutated
/// after construction, and only by lure hook effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishDescription {
    pub size: FishSize,
    pub rarity: FishRarity,
    pub modifier: FishModifier,
}

impl FishDescription {
    pub fn new(size: FishSize, rarity: FishRarity, modifier: FishModifier) -> Self {
        Self {
            size,
            rarity,
            modifier,
        }
    }

    /// Sale value: round(size × rarity × modifier × 10)
    pub fn value(&self) -> u32 {
        (self.size.factor() * self.rarity.factor() * self.modifier.factor() * 10.0).round() as u32
    }

    /// Sprite-atlas group key; one sheet per size/rarity pair
    pub fn sprite_group(&self) -> u32 {
        self.size as u32 * 4 + self.rarity as u32
    }
}

/// Movement envelope (immutable, shared by a fish and its respawn)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FishMovement {
    /// Patrol cruise speed
    pub max_speed: f32,
    /// Fixed steering acceleration magnitude per axis
    pub acceleration: f32,
    /// Home range, min corner
    pub range_min: Vec2,
    /// Home range, max corner
    pub range_max: Vec2,
}

/// Perception parameters (immutable)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FishBehavior {
    /// How far the fish can notice a lure
    pub sight_distance: f32,
    /// Half-angle of the sight cone around the facing direction, radians
    pub sight_half_angle: f32,
    /// Chase speed as a multiple of cruise speed
    pub lunge_multiplier: f32,
}

/// Runtime mode, driven purely by perception
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FishMode {
    Swimming,
    Chasing,
    Hooked,
}

/// A live fish owned by the ocean
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub id: FishId,
    pub description: FishDescription,
    pub movement: FishMovement,
    pub behavior: FishBehavior,
    pub pos: Vec2,
    pub vel: Vec2,
    pub target_vel: Vec2,
    pub mode: FishMode,
    /// Last nonzero travel direction; stable while the fish rests
    facing: Vec2,
}

impl Fish {
    pub fn new(
        id: FishId,
        description: FishDescription,
        movement: FishMovement,
        behavior: FishBehavior,
        pos: Vec2,
    ) -> Self {
        Self {
            id,
            description,
            movement,
            behavior,
            pos,
            vel: Vec2::ZERO,
            target_vel: Vec2::ZERO,
            mode: FishMode::Swimming,
            facing: Vec2::NEG_X,
        }
    }

    /// Unit facing direction
    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    /// Mouth position: half a body length ahead of center
    pub fn mouth_pos(&self) -> Vec2 {
        self.pos + self.facing * self.description.size.half_body_length()
    }

    /// Signed body rotation for the renderer
    pub fn rotation(&self) -> f32 {
        let r = self.facing.x.abs().clamp(0.0, 1.0).acos();
        if self.facing.y < 0.0 { -r } else { r }
    }

    /// Horizontal flip scale: negative when swimming rightward, shrinking
    /// toward a floor as the fish drops below cruise speed
    pub fn render_scale(&self) -> f32 {
        let magnitude = if self.movement.max_speed > 0.0 {
            (self.vel.length() / self.movement.max_speed).clamp(MIN_RENDER_SCALE, 1.0)
        } else {
            1.0
        };
        if self.facing.x > 0.0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Advance one frame. Perception and the bite resolve before the steering
    /// integration, so a strike that closes this tick hooks this tick.
    pub fn update(
        &mut self,
        rig: &mut FishingRig,
        hooked_desc: Option<FishDescription>,
        dt: f32,
        events: &mut Vec<GameEvent>,
    ) {
        if self.mode == FishMode::Hooked {
            self.pos = rig.lure_pos();
            return;
        }

        let sees = self.sees_lure(rig, hooked_desc.as_ref());
        match self.mode {
            FishMode::Swimming if sees => self.mode = FishMode::Chasing,
            FishMode::Chasing if !sees => self.mode = FishMode::Swimming,
            _ => {}
        }

        if self.mode == FishMode::Chasing {
            let to_lure = rig.lure_pos() - self.pos;
            if to_lure.length_squared() <= BITE_DISTANCE * BITE_DISTANCE {
                let hooked =
                    rig.bite_lure(self.id, &self.description, hooked_desc.as_ref(), events);
                if hooked {
                    if let Some(modifier) = rig.active_lure().hook_modifier() {
                        self.description.modifier = modifier;
                    }
                    self.mode = FishMode::Hooked;
                    self.pos = rig.lure_pos();
                    return;
                }
            }
            let lunge = self.movement.max_speed * self.behavior.lunge_multiplier;
            self.target_vel = to_lure.normalize_or_zero() * lunge;
        } else {
            self.update_swim_target();
        }

        self.accelerate_toward_target(dt);
        self.pos += self.vel * dt;
        if self.vel.length_squared() > 0.0 {
            self.facing = self.vel.normalize_or_zero();
        }
    }

    /// Lure visibility: in range, inside the sight cone, and worth chasing.
    fn sees_lure(&self, rig: &FishingRig, hooked_desc: Option<&FishDescription>) -> bool {
        let mouth = self.mouth_pos();
        let to_lure = rig.lure_pos() - mouth;
        let sight = self.behavior.sight_distance;
        if to_lure.length_squared() > sight * sight {
            return false;
        }

        let dir = to_lure.normalize_or_zero();
        if dir != Vec2::ZERO {
            // clamp before acos: f32 dot products drift past 1.0
            let dot = self.facing.dot(dir).clamp(-1.0, 1.0);
            if dot.acos() > self.behavior.sight_half_angle {
                return false;
            }
        }

        rig.is_attracted_to_lure(&self.description, hooked_desc)
    }

    /// Patrol steering: push back toward the home range on any exited axis,
    /// otherwise keep the current horizontal heading.
    fn update_swim_target(&mut self) {
        let cruise = self.movement.max_speed;

        if self.pos.x < self.movement.range_min.x {
            self.target_vel.x = cruise;
        } else if self.pos.x > self.movement.range_max.x {
            self.target_vel.x = -cruise;
        } else if self.target_vel.x == 0.0 {
            self.target_vel.x = if self.facing.x >= 0.0 { cruise } else { -cruise };
        }

        if self.pos.y < self.movement.range_min.y {
            self.target_vel.y = cruise;
        } else if self.pos.y > self.movement.range_max.y {
            self.target_vel.y = -cruise;
        } else {
            self.target_vel.y = 0.0;
        }
    }

    /// Fixed-magnitude acceleration toward the target velocity per axis,
    /// landing exactly on the target instead of overshooting.
    fn accelerate_toward_target(&mut self, dt: f32) {
        let step = self.movement.acceleration * dt;
        self.vel.x = approach(self.vel.x, self.target_vel.x, step);
        self.vel.y = approach(self.vel.y, self.target_vel.y, step);
    }
}

fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}
