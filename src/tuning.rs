//! Data-driven game balance.
//!
//! Every knob a designer iterates on lives here, with compiled-in defaults
//! that the tests' formulas assume. The demo binary accepts a JSON override
//! file; `#[serde(default)]` lets an override specify only the fields it
//! changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rod, line and lure physics knobs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RigTuning {
    /// Swing rotation rate while the primary button is held, radians/s
    pub swing_speed: f32,
    /// How fast the rod relaxes toward its rest angle, radians/s
    pub relax_rate: f32,
    /// Launch velocity at full power
    pub cast_velocity: Vec2,
    /// Downward lure acceleration, identical in air and water
    pub gravity: f32,
    /// Per-tick velocity retention while the lure is submerged
    pub water_friction: f32,
    /// Reel speed immediately after the splash (and after releasing the button)
    pub base_reel_speed: f32,
    /// Reel acceleration while the button is held
    pub reel_accel: f32,
    /// Reel acceleration with a snapped lure (nothing to lose, crank it in)
    pub reel_accel_broken: f32,
}

impl Default for RigTuning {
    fn default() -> Self {
        Self {
            swing_speed: 3.0,
            relax_rate: 2.4,
            cast_velocity: Vec2::new(900.0, -540.0),
            gravity: 420.0,
            water_friction: 0.9,
            base_reel_speed: 80.0,
            reel_accel: 140.0,
            reel_accel_broken: 320.0,
        }
    }
}

/// Perception defaults stamped onto every spawned fish
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FishTuning {
    pub sight_distance: f32,
    pub sight_half_angle: f32,
    pub lunge_multiplier: f32,
    /// Steering acceleration magnitude
    pub acceleration: f32,
}

impl Default for FishTuning {
    fn default() -> Self {
        Self {
            sight_distance: 160.0,
            sight_half_angle: 0.9,
            lunge_multiplier: 1.8,
            acceleration: 220.0,
        }
    }
}

/// Population and respawn knobs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanTuning {
    /// Patrol speed draw range before the size multiplier
    pub patrol_speed_min: f32,
    pub patrol_speed_max: f32,
    /// Respawn delay draw range before the size scaling, seconds
    pub respawn_delay_min: f32,
    pub respawn_delay_max: f32,
}

impl Default for OceanTuning {
    fn default() -> Self {
        Self {
            patrol_speed_min: 40.0,
            patrol_speed_max: 60.0,
            respawn_delay_min: 45.0,
            respawn_delay_max: 120.0,
        }
    }
}

/// All balance values for one sim instance
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub rig: RigTuning,
    pub fish: FishTuning,
    pub ocean: OceanTuning,
}

/// Tuning that cannot produce a working game
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    #[error("failed to parse tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("{0} range is inverted")]
    InvertedRange(&'static str),
    #[error("water friction must be in (0, 1]")]
    BadFriction,
}

impl Tuning {
    /// Parse a JSON override and validate the result.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Fail fast on values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.rig.swing_speed <= 0.0 {
            return Err(TuningError::NonPositive("swing_speed"));
        }
        if self.rig.base_reel_speed <= 0.0 {
            return Err(TuningError::NonPositive("base_reel_speed"));
        }
        if !(self.rig.water_friction > 0.0 && self.rig.water_friction <= 1.0) {
            return Err(TuningError::BadFriction);
        }
        if self.ocean.patrol_speed_min <= 0.0 {
            return Err(TuningError::NonPositive("patrol_speed_min"));
        }
        if self.ocean.patrol_speed_min > self.ocean.patrol_speed_max {
            return Err(TuningError::InvertedRange("patrol_speed"));
        }
        if self.ocean.respawn_delay_min <= 0.0 {
            return Err(TuningError::NonPositive("respawn_delay_min"));
        }
        if self.ocean.respawn_delay_min > self.ocean.respawn_delay_max {
            return Err(TuningError::InvertedRange("respawn_delay"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        Tuning::default().validate().expect("defaults must be sane");
    }

    #[test]
    fn test_partial_json_override() {
        let tuning = Tuning::from_json(r#"{ "rig": { "swing_speed": 4.5 } }"#).unwrap();
        assert_eq!(tuning.rig.swing_speed, 4.5);
        // untouched fields keep their defaults
        assert_eq!(tuning.rig.base_reel_speed, 80.0);
        assert_eq!(tuning.ocean.respawn_delay_max, 120.0);
    }

    #[test]
    fn test_inverted_respawn_range_rejected() {
        let result = Tuning::from_json(
            r#"{ "ocean": { "respawn_delay_min": 200.0, "respawn_delay_max": 100.0 } }"#,
        );
        assert!(matches!(result, Err(TuningError::InvertedRange(_))));
    }

    #[test]
    fn test_garbage_json_rejected() {
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_friction_rejected() {
        let result = Tuning::from_json(r#"{ "rig": { "water_friction": 0.0 } }"#);
        assert!(matches!(result, Err(TuningError::BadFriction)));
    }
}
