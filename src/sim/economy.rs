//! Reactive accumulators fed by the frame's fishing events.
//!
//! Money and the fishing timer never reach back into the rig or the ocean;
//! they only fold over what the frame already produced. Presentation reads
//! them after each tick.

use serde::{Deserialize, Serialize};

use super::events::RigAction;

/// Player money
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Money {
    total: u64,
}

impl Money {
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn deposit(&mut self, amount: u32) {
        self.total += u64::from(amount);
    }
}

/// Seconds spent with a cast in progress
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FishingTimer {
    elapsed: f32,
}

impl FishingTimer {
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Accumulate while the rig is doing anything but idling.
    pub fn update(&mut self, action: RigAction, dt: f32) {
        if action != RigAction::Idle {
            self.elapsed += dt;
        }
    }
}

/// The economy bundle the host reads after each frame
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Economy {
    pub money: Money,
    pub timer: FishingTimer,
}

impl Economy {
    /// Fold the frame's outcome in: catch proceeds and active-fishing time.
    pub fn apply(&mut self, action: RigAction, catch_values: &[u32], dt: f32) {
        self.timer.update(action, dt);
        for &value in catch_values {
            self.money.deposit(value);
            log::info!("catch sold for {value}, total {}", self.money.total());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposits_accumulate() {
        let mut economy = Economy::default();
        economy.apply(RigAction::Idle, &[10, 60], 1.0 / 60.0);
        assert_eq!(economy.money.total(), 70);
    }

    #[test]
    fn test_timer_only_runs_while_fishing() {
        let mut economy = Economy::default();
        economy.apply(RigAction::Idle, &[], 0.5);
        assert_eq!(economy.timer.elapsed(), 0.0);

        economy.apply(RigAction::Casting, &[], 0.5);
        economy.apply(RigAction::Reeling, &[], 0.25);
        assert!((economy.timer.elapsed() - 0.75).abs() < 1e-6);

        economy.timer.reset();
        assert_eq!(economy.timer.elapsed(), 0.0);
    }
}
