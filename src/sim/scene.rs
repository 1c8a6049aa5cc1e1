//! Read-only scene geometry the rig consults every tick.
//!
//! The host owns this data (it knows where the shoreline is drawn and how the
//! island drifts); the sim only reads it. `far_shore` is sampled every tick
//! while the lure is docked, so a moving island carries the lure with it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::WATER_SURFACE_Y;

/// Water surface and shore anchors in world space
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SceneGeometry {
    /// Height of the water line; everything with a larger y is submerged
    pub water_surface_y: f32,
    /// Where the angler stands; the rod is anchored here
    pub near_shore: Vec2,
    /// The island anchor the lure can dock against; moves under host control
    pub far_shore: Vec2,
}

impl SceneGeometry {
    /// True when `pos` is above the water line
    pub fn above_water(&self, pos: Vec2) -> bool {
        pos.y < self.water_surface_y
    }

    /// Far-shore bounding test: has the cast overshot onto the island?
    pub fn in_island_region(&self, pos: Vec2) -> bool {
        pos.x >= self.far_shore.x && self.above_water(pos)
    }
}

impl Default for SceneGeometry {
    fn default() -> Self {
        Self {
            water_surface_y: WATER_SURFACE_Y,
            near_shore: Vec2::new(120.0, 300.0),
            far_shore: Vec2::new(2000.0, 290.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_water() {
        let scene = SceneGeometry::default();
        assert!(scene.above_water(Vec2::new(500.0, 100.0)));
        assert!(!scene.above_water(Vec2::new(500.0, 400.0)));
    }

    #[test]
    fn test_island_region_needs_both_axes() {
        let scene = SceneGeometry::default();
        // past the island anchor and airborne
        assert!(scene.in_island_region(Vec2::new(2050.0, 250.0)));
        // past the anchor but underwater
        assert!(!scene.in_island_region(Vec2::new(2050.0, 350.0)));
        // airborne but short of the anchor
        assert!(!scene.in_island_region(Vec2::new(1500.0, 250.0)));
    }
}
