//! Reelcast entry point
//!
//! Headless demo driver: runs a scripted minute of fishing against the sim
//! and prints the event log. Useful for smoke-testing balance changes
//! (`reelcast [tuning.json]`) without a renderer attached.

use std::fmt::Write as _;

use reelcast::Tuning;
use reelcast::consts::SIM_DT;
use reelcast::sim::{ButtonTracker, GameEvent, LureKind, RigState, SimState, TickInput, tick};

fn main() {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).unwrap_or_else(|err| {
                eprintln!("cannot read {path}: {err}");
                std::process::exit(1);
            });
            Tuning::from_json(&json).unwrap_or_else(|err| {
                eprintln!("bad tuning file {path}: {err}");
                std::process::exit(1);
            })
        }
        None => Tuning::default(),
    };

    let mut state = SimState::with_tuning(0xF15C, tuning);
    state.rig.add_lure(LureKind::Small);
    state.rig.add_lure(LureKind::Medium);
    let mut primary = ButtonTracker::new();
    let mut secondary = ButtonTracker::new();

    println!(
        "ocean stocked with {} fish; tackle box: {}",
        state.ocean.fish.len(),
        state
            .rig
            .owned_lures()
            .iter()
            .map(|l| l.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    // one scripted minute: a couple of casts with the line left to drift,
    // reeling in whenever something is on the hook or the lure sits idle
    for frame in 0u32..3600 {
        let t = frame as f32 * SIM_DT;

        let want_primary = match state.rig.state() {
            // swing up for half a second at the top of each 20 s window
            RigState::Idle => t % 20.0 < 0.5,
            RigState::Swinging { .. } => t % 20.0 < 0.5,
            // let the cast fly, then give the lure ten seconds in the water
            RigState::Casting => false,
            RigState::Reeling { .. } => t % 20.0 > 10.0,
            RigState::Docked { .. } => false,
        };

        // tap the secondary button between casts to try the next lure
        let want_secondary =
            matches!(state.rig.state(), RigState::Idle) && (19.0..19.05).contains(&(t % 20.0));

        let input = TickInput {
            primary: primary.update(want_primary, SIM_DT),
            secondary: secondary.update(want_secondary, SIM_DT),
        };
        tick(&mut state, &input, SIM_DT);

        for event in &state.events {
            println!("[{t:6.2}s] {}", describe(event, &state));
        }

        if matches!(state.rig.state(), RigState::Docked { .. }) {
            state.rig.reset(&mut state.events);
        }
    }

    println!(
        "session over: {} coins earned, {:.1}s spent fishing, {} respawns pending",
        state.economy.money.total(),
        state.economy.timer.elapsed(),
        state.ocean.pending_count()
    );
}

fn describe(event: &GameEvent, state: &SimState) -> String {
    let mut line = String::new();
    match event {
        GameEvent::ActionChanged(action) => {
            let _ = write!(line, "rig -> {action:?}");
        }
        GameEvent::FishHooked(id) => {
            let _ = write!(line, "fish {id} hooked{}", describe_fish(*id, state));
        }
        GameEvent::FishEaten(id) => {
            let _ = write!(line, "fish {id} eaten off the hook");
        }
        GameEvent::FishCaught(id) => {
            let _ = write!(line, "fish {id} caught!");
        }
        GameEvent::LureBroke => {
            let _ = write!(line, "the lure snapped");
        }
        GameEvent::LureChanged(index) => {
            let _ = write!(
                line,
                "lure changed to {}",
                state.rig.owned_lures()[*index].name()
            );
        }
        GameEvent::LureIsland => {
            let _ = write!(line, "the cast landed on the island");
        }
        GameEvent::FishAdded(id) => {
            let _ = write!(line, "fish {id} swims in{}", describe_fish(*id, state));
        }
        GameEvent::FishRemoved(id) => {
            let _ = write!(line, "fish {id} is gone");
        }
    }
    line
}

fn describe_fish(id: u32, state: &SimState) -> String {
    state
        .ocean
        .fish
        .iter()
        .find(|f| f.id == id)
        .map(|f| {
            format!(
                " ({:?} {:?} {:?}, worth {})",
                f.description.size,
                f.description.rarity,
                f.description.modifier,
                f.description.value()
            )
        })
        .unwrap_or_default()
}
