//! Per-frame orchestration.
//!
//! The order inside a tick is part of the contract: the rig advances first,
//! fish perceive and bite against the post-transition rig, ocean bookkeeping
//! consumes the same frame's events, and the economy folds in last. A handler
//! reading the buffer therefore always observes the rig after its transition
//! (a `FishCaught` consumer sees the rig already back in Idle).

use super::input::TickInput;
use super::state::SimState;

/// Advance the whole simulation by one frame.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    state.rig.tick(input, &state.scene, dt, &mut state.events);
    state.ocean.update(&mut state.rig, dt, &mut state.events);
    let catches = state.ocean.resolve_lifecycle(&mut state.events);
    state.economy.apply(state.rig.action(), &catches, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::consts::SIM_DT;
    use crate::sim::events::GameEvent;
    use crate::sim::fish::{
        Fish, FishBehavior, FishDescription, FishMode, FishModifier, FishMovement, FishRarity,
        FishSize,
    };
    use crate::sim::input::ButtonState;
    use crate::sim::rig::RigState;

    fn press() -> TickInput {
        TickInput {
            primary: ButtonState {
                pressed: true,
                held: true,
                repeat: true,
            },
            ..Default::default()
        }
    }

    fn hold() -> TickInput {
        TickInput {
            primary: ButtonState {
                pressed: false,
                held: true,
                repeat: false,
            },
            ..Default::default()
        }
    }

    fn released() -> TickInput {
        TickInput::default()
    }

    /// A fish parked in the deep water the default cast reels through.
    fn planted_fish(id: u32, size: FishSize) -> Fish {
        Fish::new(
            id,
            FishDescription::new(size, FishRarity::Common, FishModifier::Typical),
            FishMovement {
                max_speed: 50.0,
                acceleration: 220.0,
                range_min: Vec2::new(150.0, 400.0),
                range_max: Vec2::new(600.0, 470.0),
            },
            FishBehavior {
                sight_distance: 160.0,
                sight_half_angle: 0.9,
                lunge_multiplier: 1.8,
            },
            Vec2::new(260.0, 440.0),
        )
    }

    /// Swing for 12 ticks and release, then run the flight until the splash.
    fn cast_until_reeling(state: &mut SimState, log: &mut Vec<GameEvent>) {
        run(state, &press(), 1, log);
        run(state, &hold(), 12, log);
        run(state, &released(), 1, log);
        for _ in 0..600 {
            run(state, &released(), 1, log);
            if matches!(state.rig.state(), RigState::Reeling { .. }) {
                return;
            }
        }
        panic!("cast never splashed down");
    }

    /// Tick `count` frames and collect every event produced.
    fn run(state: &mut SimState, input: &TickInput, count: usize, log: &mut Vec<GameEvent>) {
        for _ in 0..count {
            tick(state, input, SIM_DT);
            log.extend(state.events.iter().copied());
        }
    }

    fn hook_count(log: &[GameEvent]) -> usize {
        log.iter()
            .filter(|e| matches!(e, GameEvent::FishHooked(_)))
            .count()
    }

    #[test]
    fn test_small_fish_chases_and_hooks() {
        let mut state = SimState::new(21);
        state.ocean.fish.clear();
        state.ocean.fish.push(planted_fish(1000, FishSize::Small));

        let mut log = Vec::new();
        cast_until_reeling(&mut state, &mut log);

        // leave the line slack; the lure swings to the bottom of its arc and
        // the fish finds it
        run(&mut state, &released(), 600, &mut log);

        assert_eq!(hook_count(&log), 1);
        assert!(log.contains(&GameEvent::FishHooked(1000)));
        assert_eq!(state.rig.hooked_fish(), Some(1000));
        assert_eq!(state.ocean.fish[0].mode, FishMode::Hooked);
        // a hooked fish rides the lure
        assert_eq!(state.ocean.fish[0].pos, state.rig.lure_pos());
    }

    #[test]
    fn test_medium_fish_snaps_basic_lure() {
        let mut state = SimState::new(21);
        state.ocean.fish.clear();
        state.ocean.fish.push(planted_fish(1000, FishSize::Medium));

        let mut log = Vec::new();
        cast_until_reeling(&mut state, &mut log);
        run(&mut state, &released(), 600, &mut log);

        assert_eq!(hook_count(&log), 0);
        assert_eq!(
            log.iter()
                .filter(|e| matches!(e, GameEvent::LureBroke))
                .count(),
            1
        );
        // nothing was hooked, so nothing was eaten
        assert!(!log.iter().any(|e| matches!(e, GameEvent::FishEaten(_))));
        assert!(state.rig.is_lure_broken());
        assert_eq!(state.ocean.fish[0].mode, FishMode::Swimming);
    }

    #[test]
    fn test_caught_fish_pays_out_and_respawns() {
        let mut state = SimState::new(21);
        state.ocean.fish.clear();
        state.ocean.fish.push(planted_fish(1000, FishSize::Small));

        let mut log = Vec::new();
        cast_until_reeling(&mut state, &mut log);
        run(&mut state, &released(), 600, &mut log);
        assert_eq!(state.rig.hooked_fish(), Some(1000));

        // crank the hooked fish all the way in
        run(&mut state, &hold(), 600, &mut log);

        assert!(matches!(state.rig.state(), RigState::Idle));
        assert_eq!(state.rig.hooked_fish(), None);
        assert_eq!(
            log.iter()
                .filter(|e| matches!(e, GameEvent::FishCaught(_)))
                .count(),
            1
        );
        assert!(log.contains(&GameEvent::FishRemoved(1000)));
        assert!(state.ocean.fish.iter().all(|f| f.id != 1000));
        assert_eq!(state.ocean.pending_count(), 1);

        // Small Common Typical sells for 10
        assert_eq!(state.economy.money.total(), 10);
        assert!(state.economy.timer.elapsed() > 0.0);
    }

    #[test]
    fn test_events_cleared_every_tick() {
        let mut state = SimState::new(4);
        // construction leaves the population announcements in the buffer
        assert!(!state.events.is_empty());
        // a quiet idle tick clears them and produces nothing new
        tick(&mut state, &released(), SIM_DT);
        assert!(state.events.is_empty());
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = SimState::new(77);
        let mut b = SimState::new(77);
        let mut log_a = Vec::new();
        let mut log_b = Vec::new();

        cast_until_reeling(&mut a, &mut log_a);
        cast_until_reeling(&mut b, &mut log_b);
        run(&mut a, &hold(), 300, &mut log_a);
        run(&mut b, &hold(), 300, &mut log_b);

        assert_eq!(log_a, log_b);
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.rig.lure_pos(), b.rig.lure_pos());
        for (fa, fb) in a.ocean.fish.iter().zip(&b.ocean.fish) {
            assert_eq!(fa.pos, fb.pos);
            assert_eq!(fa.description, fb.description);
        }
    }
}
