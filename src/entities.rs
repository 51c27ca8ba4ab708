//! All game entity types and world-geometry constants. Pure data, no logic.

// ── World geometry ───────────────────────────────────────────────────────────
//
// The simulation runs in a fixed 1400x900 continuous coordinate space; the
// renderer projects it onto whatever terminal it gets.

pub const WORLD_W: f32 = 1400.0;
pub const WORLD_H: f32 = 900.0;

/// Road surface span (guardrail to guardrail).
pub const ROAD_LEFT: f32 = 350.0;
pub const ROAD_RIGHT: f32 = 1050.0;

/// Lateral clamp for every vehicle, player and enemy alike: road edge plus
/// half a car of margin. One boundary set for everything.
pub const DRIVE_MIN_X: f32 = 400.0;
pub const DRIVE_MAX_X: f32 = 1000.0;

pub const PLAYER_MIN_Y: f32 = 75.0;
pub const PLAYER_MAX_Y: f32 = WORLD_H - 75.0;

/// Lanes hazards may spawn in.
pub const HAZARD_LANES: [f32; 6] = [450.0, 550.0, 650.0, 750.0, 850.0, 950.0];
/// Lanes fuel stations may spawn in.
pub const PICKUP_LANES: [f32; 3] = [500.0, 650.0, 800.0];

/// Spawn row, one station-height above the visible area.
pub const SPAWN_Y: f32 = -50.0;

/// Vehicles are square sprites; fuel stations are a size up.
pub const CAR_SIZE: f32 = 75.0;
pub const STATION_SIZE: f32 = 100.0;

/// Lane dashes repeat every 80 world units; the scroll offset wraps there.
pub const LANE_DASH_PERIOD: f32 = 80.0;

// ── Enemies ──────────────────────────────────────────────────────────────────

/// What a collision with the entity does to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Hazard,
    Pickup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Plain vertical descent.
    Static,
    /// Steers away when the player gets close on both axes.
    Reactive,
    /// Oscillates laterally, flipping on a timer or at the road boundary.
    Zigzag,
    /// Fuel station: no motion of its own, only the road scroll.
    FuelStation,
}

impl Behavior {
    pub fn category(self) -> Category {
        match self {
            Behavior::FuelStation => Category::Pickup,
            _ => Category::Hazard,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub behavior: Behavior,
    /// Own descent speed on top of the road scroll (hazards only).
    pub speed: f32,
    /// Zigzag lateral direction, -1.0 or 1.0.
    pub zigzag_dir: f32,
    /// Ticks since the zigzag last flipped.
    pub zigzag_timer: u32,
}

impl Enemy {
    pub fn category(&self) -> Category {
        self.behavior.category()
    }

    /// Bounding-box side length, by category.
    pub fn size(&self) -> f32 {
        match self.category() {
            Category::Hazard => CAR_SIZE,
            Category::Pickup => STATION_SIZE,
        }
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Base steering speed in world units per tick, before the control factor.
pub const PLAYER_SPEED: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct PlayerCar {
    pub x: f32,
    pub y: f32,
}

// ── Effect state ─────────────────────────────────────────────────────────────

/// Tick-counted damage effects. Everything here is driven by the simulation
/// clock, never wall time, so outcomes survive frame-rate hiccups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectState {
    /// Player sprite blinks while positive.
    pub damage_flash: u32,
    /// Lateral skid force active while positive.
    pub skid: u32,
    /// Skid direction sign, -1.0 or 1.0.
    pub skid_dir: f32,
    /// Movement mostly randomized and rotation applied while positive.
    pub control_loss: u32,
    /// Degrees; climbs 15 per tick while control is lost.
    pub spin_angle: f32,
}

// ── Session statistics ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct SessionStats {
    /// Clamped to [0, 100]; the run ends when it hits 0.
    pub fuel: f32,
    pub score: u32,
    /// Kilometers, monotonically non-decreasing within a run.
    pub distance: f32,
    /// Road scroll speed, clamped to [2, 5].
    pub speed: f32,
}

// ── Per-tick steering input ──────────────────────────────────────────────────

/// Directional signals sampled once per tick by the input provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct SteeringInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}
