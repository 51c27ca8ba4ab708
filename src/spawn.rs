//! Probabilistic per-tick spawn scheduler.
//!
//! Each tick rolls two independent chances: 1-in-80 for a hazard in one of
//! the six traffic lanes, 1-in-200 for a fuel station in one of the three
//! pickup lanes. Both enter at a fixed row above the visible area.

use rand::Rng;

use crate::entities::{Behavior, Enemy, HAZARD_LANES, PICKUP_LANES, SPAWN_Y};

pub const HAZARD_SPAWN_ODDS: u32 = 80;
pub const PICKUP_SPAWN_ODDS: u32 = 200;

/// Build a hazard with a fresh random descent speed and zigzag phase.
pub fn new_hazard(lane: f32, behavior: Behavior, rng: &mut impl Rng) -> Enemy {
    Enemy {
        x: lane,
        y: SPAWN_Y,
        behavior,
        speed: rng.gen_range(1..=3) as f32,
        zigzag_dir: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
        zigzag_timer: 0,
    }
}

/// Build a stationary fuel station; it only rides the road scroll.
pub fn new_fuel_station(lane: f32) -> Enemy {
    Enemy {
        x: lane,
        y: SPAWN_Y,
        behavior: Behavior::FuelStation,
        speed: 0.0,
        zigzag_dir: 1.0,
        zigzag_timer: 0,
    }
}

/// Roll this tick's spawns and append them to the working set. Removal
/// elsewhere is order-independent, so plain appends are fine.
pub fn roll_spawns(enemies: &mut Vec<Enemy>, rng: &mut impl Rng) {
    if rng.gen_ratio(1, HAZARD_SPAWN_ODDS) {
        let lane = HAZARD_LANES[rng.gen_range(0..HAZARD_LANES.len())];
        let behavior = match rng.gen_range(0..3) {
            0 => Behavior::Static,
            1 => Behavior::Reactive,
            _ => Behavior::Zigzag,
        };
        enemies.push(new_hazard(lane, behavior, rng));
    }

    if rng.gen_ratio(1, PICKUP_SPAWN_ODDS) {
        let lane = PICKUP_LANES[rng.gen_range(0..PICKUP_LANES.len())];
        enemies.push(new_fuel_station(lane));
    }
}
