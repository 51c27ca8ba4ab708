//! Collision & effect engine and the per-tick session pipeline.
//!
//! All randomness (spawn rolls, severity rolls, spin-out jerk) comes through
//! an injected `rng`, so callers control determinism and tests can drive the
//! pipeline with a seeded RNG.

use rand::Rng;

use crate::behavior;
use crate::entities::{
    Category, EffectState, Enemy, PlayerCar, SessionStats, SteeringInput, CAR_SIZE, DRIVE_MAX_X,
    DRIVE_MIN_X, LANE_DASH_PERIOD, PLAYER_MAX_Y, PLAYER_MIN_Y, PLAYER_SPEED, WORLD_H, WORLD_W,
};
use crate::feedback::FeedbackEvent;
use crate::spawn;

// ── Tuning constants ─────────────────────────────────────────────────────────

pub const FUEL_MAX: f32 = 100.0;
/// Ambient fuel drain, applied every tick regardless of collisions.
pub const FUEL_DRAIN_PER_TICK: f32 = 0.1;
pub const FUEL_PICKUP_GAIN: f32 = 20.0;
pub const HAZARD_FUEL_COST: f32 = 15.0;
pub const DAMAGE_FLASH_TICKS: u32 = 30;
/// Score for an enemy that scrolls off the bottom edge uncollided.
pub const EXIT_SCORE: u32 = 10;
pub const BASE_SPEED: f32 = 2.0;
pub const MAX_SPEED: f32 = 5.0;
pub const SPIN_STEP_DEGREES: f32 = 15.0;

// ── Session ──────────────────────────────────────────────────────────────────

/// One run of the game, created fresh on every (re)start. Owned by the app
/// context and handed by reference to every subsystem; nothing global.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub player: PlayerCar,
    pub enemies: Vec<Enemy>,
    pub stats: SessionStats,
    pub effects: EffectState,
    /// Road scroll phase in world units, wraps at the lane-dash period.
    pub road_offset: f32,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            player: PlayerCar { x: WORLD_W / 2.0, y: WORLD_H - 100.0 },
            enemies: Vec::new(),
            stats: SessionStats {
                fuel: FUEL_MAX,
                score: 0,
                distance: 0.0,
                speed: BASE_SPEED,
            },
            effects: EffectState::default(),
            road_offset: 0.0,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// What one tick produced: feedback events to acknowledge, and whether the
/// tank ran dry (which ends the run on this very tick).
#[derive(Debug, Default)]
pub struct TickReport {
    pub events: Vec<FeedbackEvent>,
    pub out_of_fuel: bool,
}

// ── Effect state logic ───────────────────────────────────────────────────────

/// Multiplier on player steering derived from the active effects: 0.1 while
/// spun out, 0.4 while skidding, 1.0 otherwise.
pub fn control_factor(effects: &EffectState) -> f32 {
    if effects.control_loss > 0 {
        0.1
    } else if effects.skid > 0 {
        0.4
    } else {
        1.0
    }
}

/// Count every active timer down one tick; the spin angle climbs while
/// control is lost.
pub fn decay_effects(effects: &mut EffectState) {
    if effects.damage_flash > 0 {
        effects.damage_flash -= 1;
    }
    if effects.skid > 0 {
        effects.skid -= 1;
    }
    if effects.control_loss > 0 {
        effects.control_loss -= 1;
        effects.spin_angle = (effects.spin_angle + SPIN_STEP_DEGREES) % 360.0;
    }
}

/// Apply the consequences of a hazard collision of the given severity
/// (1 light, 2 medium, 3 heavy). The skid direction is a fresh random sign.
pub fn apply_severity(effects: &mut EffectState, severity: u32, rng: &mut impl Rng) {
    effects.skid_dir = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
    match severity {
        1 => {
            effects.skid = 30;
        }
        2 => {
            effects.skid = 60;
            effects.control_loss = 45;
        }
        _ => {
            effects.skid = 90;
            effects.control_loss = 60;
            effects.spin_angle = 0.0;
        }
    }
}

// ── Collision handling ───────────────────────────────────────────────────────

/// Everything a hazard collision does to the player: fuel damage, the damage
/// flash, and the severity consequences. Entity removal and the feedback
/// event stay with the caller.
pub fn resolve_hazard(session: &mut GameSession, severity: u32, rng: &mut impl Rng) {
    session.stats.fuel -= HAZARD_FUEL_COST;
    session.effects.damage_flash = DAMAGE_FLASH_TICKS;
    apply_severity(&mut session.effects, severity, rng);
}

/// Axis-aligned overlap of two centered square boxes.
pub fn overlaps(ax: f32, ay: f32, a_size: f32, bx: f32, by: f32, b_size: f32) -> bool {
    (ax - bx).abs() * 2.0 < a_size + b_size && (ay - by).abs() * 2.0 < a_size + b_size
}

fn collides(player: &PlayerCar, enemy: &Enemy) -> bool {
    overlaps(player.x, player.y, CAR_SIZE, enemy.x, enemy.y, enemy.size())
}

// ── Player steering ──────────────────────────────────────────────────────────

fn update_player(
    player: &mut PlayerCar,
    effects: &EffectState,
    input: &SteeringInput,
    rng: &mut impl Rng,
) {
    // Skid: lateral force proportional to the remaining duration.
    if effects.skid > 0 {
        player.x += effects.skid_dir * 2.0 * (effects.skid as f32 / 60.0);
    }

    // Spin-out: jerky random displacement swamps whatever steering is left.
    if effects.control_loss > 0 {
        player.x += rng.gen_range(-2..=2) as f32;
        player.y += rng.gen_range(-1..=1) as f32;
    }

    let move_speed = PLAYER_SPEED * control_factor(effects);
    if input.left {
        player.x -= move_speed;
    }
    if input.right {
        player.x += move_speed;
    }
    if input.up {
        player.y -= move_speed;
    }
    if input.down {
        player.y += move_speed;
    }

    player.x = player.x.clamp(DRIVE_MIN_X, DRIVE_MAX_X);
    player.y = player.y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y);
}

// ── Per-tick pipeline ────────────────────────────────────────────────────────

/// Advance the simulation by one tick: scroll, steer, decay effects, spawn,
/// move enemies, resolve collisions, then fuel/score/speed bookkeeping, in
/// that fixed order.
pub fn tick(session: &mut GameSession, input: &SteeringInput, rng: &mut impl Rng) -> TickReport {
    let mut report = TickReport::default();

    // ── 1. Road scroll ───────────────────────────────────────────────────────
    session.road_offset = (session.road_offset + session.stats.speed) % LANE_DASH_PERIOD;

    // ── 2. Steer the player under the effects active this tick ──────────────
    update_player(&mut session.player, &session.effects, input, rng);

    // ── 3. Count effect timers down ──────────────────────────────────────────
    decay_effects(&mut session.effects);

    // ── 4. Spawn rolls ───────────────────────────────────────────────────────
    spawn::roll_spawns(&mut session.enemies, rng);

    // ── 5. Advance enemies; bottom exits award score ─────────────────────────
    let road_speed = session.stats.speed;
    let player_snapshot = session.player.clone();
    let mut exited: u32 = 0;
    session.enemies.retain_mut(|enemy| {
        behavior::update_enemy(enemy, road_speed, &player_snapshot);
        if enemy.y > WORLD_H {
            exited += 1;
            false
        } else {
            true
        }
    });
    session.stats.score += exited * EXIT_SCORE;

    // ── 6. Collisions: every pickup counts, at most one hazard per tick ──────
    let mut i = 0;
    while i < session.enemies.len() {
        if !collides(&session.player, &session.enemies[i]) {
            i += 1;
            continue;
        }
        match session.enemies[i].category() {
            Category::Pickup => {
                session.stats.fuel = (session.stats.fuel + FUEL_PICKUP_GAIN).min(FUEL_MAX);
                session.enemies.remove(i);
                report.events.push(FeedbackEvent::Pickup);
                // keep scanning from the same index
            }
            Category::Hazard => {
                let severity: u32 = rng.gen_range(1..=3);
                resolve_hazard(session, severity, rng);
                session.enemies.remove(i);
                report.events.push(FeedbackEvent::Collision);
                break;
            }
        }
    }

    // ── 7. Ambient drain and distance ────────────────────────────────────────
    // Fuel lives on a 0.1 grid; snapping after the drain keeps the arithmetic
    // exact, so the tick on which the tank runs dry is deterministic.
    session.stats.fuel -= FUEL_DRAIN_PER_TICK;
    session.stats.fuel = (session.stats.fuel * 10.0).round() / 10.0;
    session.stats.distance += session.stats.speed * 0.1;

    // ── 8. Dry tank ends the run on this tick; nothing further updates ───────
    if session.stats.fuel <= 0.0 {
        session.stats.fuel = 0.0;
        report.out_of_fuel = true;
        return report;
    }

    // ── 9. Speed ramps with score, saturating at the cap ─────────────────────
    session.stats.speed =
        (BASE_SPEED + session.stats.score as f32 / 1000.0).clamp(BASE_SPEED, MAX_SPEED);

    report
}
