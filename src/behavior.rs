//! Enemy behavior variants.
//!
//! One update function per variant, selected by a single match at
//! entity-update time. Every variant accumulates the global road speed into
//! its vertical position; lateral motion is variant-specific and clamped to
//! the shared drive boundaries.

use crate::entities::{Behavior, Enemy, PlayerCar, DRIVE_MAX_X, DRIVE_MIN_X};

/// Reactive cars steer away once the player is within this distance on both
/// axes.
pub const REACT_DISTANCE: f32 = 100.0;
/// Lateral speed of a dodging reactive car.
pub const REACT_SIDE_SPEED: f32 = 3.0;

/// Lateral speed of a zigzag car.
pub const ZIGZAG_SPEED: f32 = 2.0;
/// Zigzag flips direction every this many ticks, unless a boundary flips it
/// first.
pub const ZIGZAG_FLIP_TICKS: u32 = 30;

/// Advance one enemy by one tick.
pub fn update_enemy(enemy: &mut Enemy, road_speed: f32, player: &PlayerCar) {
    // Vertical scroll: stations ride the road, hazards add their own speed.
    match enemy.behavior {
        Behavior::FuelStation => enemy.y += road_speed,
        _ => enemy.y += road_speed + enemy.speed,
    }

    match enemy.behavior {
        Behavior::Static | Behavior::FuelStation => {}
        Behavior::Reactive => update_reactive(enemy, player),
        Behavior::Zigzag => update_zigzag(enemy),
    }
}

fn update_reactive(enemy: &mut Enemy, player: &PlayerCar) {
    let dx = (enemy.x - player.x).abs();
    let dy = (enemy.y - player.y).abs();
    if dx < REACT_DISTANCE && dy < REACT_DISTANCE {
        if enemy.x < player.x {
            enemy.x -= REACT_SIDE_SPEED;
        } else {
            enemy.x += REACT_SIDE_SPEED;
        }
        enemy.x = enemy.x.clamp(DRIVE_MIN_X, DRIVE_MAX_X);
    }
}

fn update_zigzag(enemy: &mut Enemy) {
    enemy.zigzag_timer += 1;
    if enemy.zigzag_timer >= ZIGZAG_FLIP_TICKS {
        enemy.zigzag_dir = -enemy.zigzag_dir;
        enemy.zigzag_timer = 0;
    }

    enemy.x += enemy.zigzag_dir * ZIGZAG_SPEED;

    // Boundary contact beats the timer: hard clamp, flip inward, restart the
    // timer so a stale phase cannot flip the car straight back out.
    if enemy.x <= DRIVE_MIN_X {
        enemy.x = DRIVE_MIN_X;
        enemy.zigzag_dir = 1.0;
        enemy.zigzag_timer = 0;
    } else if enemy.x >= DRIVE_MAX_X {
        enemy.x = DRIVE_MAX_X;
        enemy.zigzag_dir = -1.0;
        enemy.zigzag_timer = 0;
    }
}
