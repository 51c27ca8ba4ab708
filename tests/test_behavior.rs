use road_fighter::behavior::*;
use road_fighter::entities::*;

fn enemy(behavior: Behavior, x: f32, y: f32) -> Enemy {
    Enemy {
        x,
        y,
        behavior,
        speed: 1.0,
        zigzag_dir: 1.0,
        zigzag_timer: 0,
    }
}

fn player_at(x: f32, y: f32) -> PlayerCar {
    PlayerCar { x, y }
}

// ── Static ───────────────────────────────────────────────────────────────────

#[test]
fn static_descends_with_road_plus_own_speed() {
    let mut e = enemy(Behavior::Static, 650.0, 100.0);
    e.speed = 2.5;
    update_enemy(&mut e, 3.0, &player_at(700.0, 800.0));
    assert_eq!(e.y, 105.5);
    assert_eq!(e.x, 650.0); // never moves laterally
}

// ── Fuel station ─────────────────────────────────────────────────────────────

#[test]
fn station_only_rides_the_road_scroll() {
    let mut e = enemy(Behavior::FuelStation, 650.0, 100.0);
    e.speed = 3.0; // ignored for stations
    update_enemy(&mut e, 2.0, &player_at(700.0, 800.0));
    assert_eq!(e.y, 102.0);
    assert_eq!(e.x, 650.0);
}

// ── Reactive ─────────────────────────────────────────────────────────────────

#[test]
fn reactive_dodges_away_when_player_is_close() {
    // Player 50 right and 50 below: both axes inside the trigger distance.
    let mut e = enemy(Behavior::Reactive, 700.0, 400.0);
    update_enemy(&mut e, 2.0, &player_at(750.0, 453.0));
    // Descended 3, then steered 3 away from the player (leftward).
    assert_eq!(e.y, 403.0);
    assert_eq!(e.x, 700.0 - REACT_SIDE_SPEED);
}

#[test]
fn reactive_dodges_rightward_when_player_is_left() {
    let mut e = enemy(Behavior::Reactive, 700.0, 400.0);
    update_enemy(&mut e, 2.0, &player_at(650.0, 453.0));
    assert_eq!(e.x, 700.0 + REACT_SIDE_SPEED);
}

#[test]
fn reactive_ignores_player_far_below() {
    // Horizontally close but 300 world units below: no reaction.
    let mut e = enemy(Behavior::Reactive, 700.0, 400.0);
    update_enemy(&mut e, 2.0, &player_at(710.0, 703.0));
    assert_eq!(e.x, 700.0);
}

#[test]
fn reactive_clamps_at_drive_boundary() {
    let mut e = enemy(Behavior::Reactive, DRIVE_MIN_X + 1.0, 400.0);
    update_enemy(&mut e, 2.0, &player_at(DRIVE_MIN_X + 40.0, 403.0));
    assert_eq!(e.x, DRIVE_MIN_X);
}

// ── Zigzag ───────────────────────────────────────────────────────────────────

#[test]
fn zigzag_flips_on_timer() {
    let mut e = enemy(Behavior::Zigzag, 650.0, 100.0);
    e.zigzag_dir = 1.0;
    e.zigzag_timer = ZIGZAG_FLIP_TICKS - 1;
    update_enemy(&mut e, 2.0, &player_at(700.0, 800.0));
    assert_eq!(e.zigzag_dir, -1.0);
    assert_eq!(e.zigzag_timer, 0);
    assert_eq!(e.x, 650.0 - ZIGZAG_SPEED); // moved in the new direction
}

#[test]
fn zigzag_holds_direction_before_timer() {
    let mut e = enemy(Behavior::Zigzag, 650.0, 100.0);
    e.zigzag_dir = 1.0;
    e.zigzag_timer = 10;
    update_enemy(&mut e, 2.0, &player_at(700.0, 800.0));
    assert_eq!(e.zigzag_dir, 1.0);
    assert_eq!(e.zigzag_timer, 11);
    assert_eq!(e.x, 650.0 + ZIGZAG_SPEED);
}

#[test]
fn zigzag_flips_on_boundary_contact_same_tick() {
    // Mid-phase timer: boundary contact must still flip immediately.
    let mut e = enemy(Behavior::Zigzag, DRIVE_MIN_X + 1.0, 100.0);
    e.zigzag_dir = -1.0;
    e.zigzag_timer = 17;
    update_enemy(&mut e, 2.0, &player_at(700.0, 800.0));
    assert_eq!(e.x, DRIVE_MIN_X);
    assert_eq!(e.zigzag_dir, 1.0);
    assert_eq!(e.zigzag_timer, 0); // boundary flip restarts the phase
}

#[test]
fn zigzag_flips_at_right_boundary_too() {
    let mut e = enemy(Behavior::Zigzag, DRIVE_MAX_X - 1.0, 100.0);
    e.zigzag_dir = 1.0;
    e.zigzag_timer = 3;
    update_enemy(&mut e, 2.0, &player_at(700.0, 800.0));
    assert_eq!(e.x, DRIVE_MAX_X);
    assert_eq!(e.zigzag_dir, -1.0);
}

#[test]
fn zigzag_never_escapes_the_road() {
    let mut e = enemy(Behavior::Zigzag, 650.0, 0.0);
    let player = player_at(700.0, 800.0);
    for _ in 0..200 {
        update_enemy(&mut e, 2.0, &player);
        assert!(e.x >= DRIVE_MIN_X && e.x <= DRIVE_MAX_X);
    }
}

// ── Category mapping ─────────────────────────────────────────────────────────

#[test]
fn categories_and_sizes_follow_behavior() {
    assert_eq!(Behavior::Static.category(), Category::Hazard);
    assert_eq!(Behavior::Reactive.category(), Category::Hazard);
    assert_eq!(Behavior::Zigzag.category(), Category::Hazard);
    assert_eq!(Behavior::FuelStation.category(), Category::Pickup);

    assert_eq!(enemy(Behavior::Static, 0.0, 0.0).size(), CAR_SIZE);
    assert_eq!(enemy(Behavior::FuelStation, 0.0, 0.0).size(), STATION_SIZE);
}
