/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the app
/// state. No game logic is performed; this module only projects the 1400x900
/// world onto the terminal and translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use road_fighter::compute::GameSession;
use road_fighter::entities::{
    Behavior, Enemy, LANE_DASH_PERIOD, HAZARD_LANES, ROAD_LEFT, ROAD_RIGHT, WORLD_H, WORLD_W,
};
use road_fighter::feedback::CueClass;
use road_fighter::state::{App, Screen, MENU_ITEMS};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_GUARDRAIL: Color = Color::White;
const C_LANE_DASH: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY_STATIC: Color = Color::Red;
const C_ENEMY_REACTIVE: Color = Color::White;
const C_ENEMY_ZIGZAG: Color = Color::Magenta;
const C_STATION: Color = Color::Green;
const C_HUD_LABEL: Color = Color::White;
const C_HUD_VALUE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_WARNING: Color = Color::Red;

// ── Sprite bank ───────────────────────────────────────────────────────────────

/// Named two-row cell sprites. `get` returning `None` is not an error: the
/// caller falls back to primitive block rendering for that entity.
pub struct SpriteBank;

impl SpriteBank {
    pub fn get(&self, name: &str) -> Option<[&'static str; 2]> {
        match name {
            "player_car" => Some(["▄█▄", "▀█▀"]),
            "enemy_static" => Some(["╓█╖", "╙─╜"]),
            "enemy_police" => Some(["▪█▪", "╘═╛"]),
            "enemy_sports" => Some(["◢█◣", "◥▀◤"]),
            "fuel_station" => Some(["╔══╗", "╚F═╝"]),
            _ => None,
        }
    }
}

/// Spin-out replaces the player sprite with a four-frame tumble, advanced by
/// the accumulated spin angle (one frame per 90 degrees).
const SPIN_FRAMES: [[&str; 2]; 4] = [
    ["▄█▄", "▀█▀"],
    ["◀█▶", "▀▀▀"],
    ["▀█▀", "▄█▄"],
    ["▶█◀", "▄▄▄"],
];

// ── World-to-terminal projection ─────────────────────────────────────────────

#[derive(Clone, Copy)]
struct View {
    w: u16,
    h: u16,
}

impl View {
    fn x(&self, wx: f32) -> u16 {
        let col = wx / WORLD_W * self.w as f32;
        (col.max(0.0) as u16).min(self.w.saturating_sub(1))
    }

    fn y(&self, wy: f32) -> u16 {
        let row = wy / WORLD_H * self.h as f32;
        (row.max(0.0) as u16).min(self.h.saturating_sub(1))
    }

    /// World y of a terminal row's top edge.
    fn world_y(&self, row: u16) -> f32 {
        row as f32 / self.h as f32 * WORLD_H
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for whatever screen is active.
pub fn render<W: Write>(out: &mut W, app: &App) -> std::io::Result<()> {
    let (w, h) = terminal::size()?;
    let view = View { w, h };
    let sprites = SpriteBank;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match app.screen {
        Screen::Splash => draw_splash(out, view, &sprites)?,
        Screen::Menu => draw_menu(out, view, app)?,
        Screen::HowToPlay => draw_how_to_play(out, view, &sprites)?,
        Screen::Game => draw_game(out, view, app, &sprites)?,
        Screen::Paused => {
            // The one screen that reuses another's render: the frozen game
            // frame, plus an overlay. Update stays a no-op elsewhere.
            draw_game(out, view, app, &sprites)?;
            draw_pause_overlay(out, view)?;
        }
        Screen::Credits => draw_credits(out, view)?,
        Screen::GameOver => draw_game_over(out, view, app)?,
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, h.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn print_centered<W: Write>(
    out: &mut W,
    view: View,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.w / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Splash ────────────────────────────────────────────────────────────────────

fn draw_splash<W: Write>(out: &mut W, view: View, sprites: &SpriteBank) -> std::io::Result<()> {
    let cy = view.h / 2;

    // Logo sprite when the bank carries one; boxed title otherwise.
    if let Some(logo) = sprites.get("splash_logo") {
        for (i, row) in logo.iter().enumerate() {
            print_centered(out, view, cy.saturating_sub(1) + i as u16, row, Color::White)?;
        }
    } else {
        let title: &[&str] = &[
            "╔═══════════════════════╗",
            "║     ROAD  FIGHTER     ║",
            "╚═══════════════════════╝",
        ];
        for (i, line) in title.iter().enumerate() {
            print_centered(out, view, cy.saturating_sub(2) + i as u16, line, Color::Yellow)?;
        }
        print_centered(out, view, cy + 2, "terminal edition", C_HINT)?;
    }

    print_centered(out, view, view.h.saturating_sub(2), "press any key", C_HINT)?;
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, view: View, app: &App) -> std::io::Result<()> {
    let cy = view.h / 2;

    print_centered(out, view, cy.saturating_sub(6), "ROAD FIGHTER", Color::Yellow)?;

    if app.high_score > 0 {
        let best = format!("Best Score: {}", app.high_score);
        print_centered(out, view, cy.saturating_sub(4), &best, C_HUD_VALUE)?;
    }

    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16 * 2;
        if i == app.menu_selection {
            let line = format!("▶ {} ◀", item);
            print_centered(out, view, row, &line, Color::Yellow)?;
        } else {
            print_centered(out, view, row, item, Color::White)?;
        }
    }

    print_centered(
        out,
        view,
        cy + 7,
        "↑ ↓ to choose   ENTER to select",
        C_HINT,
    )?;
    Ok(())
}

// ── How to play ───────────────────────────────────────────────────────────────

fn draw_how_to_play<W: Write>(
    out: &mut W,
    view: View,
    sprites: &SpriteBank,
) -> std::io::Result<()> {
    print_centered(out, view, 1, "HOW TO PLAY", Color::Yellow)?;

    // Vehicle legend
    let legend: &[(&str, &str, Color)] = &[
        ("player_car", "YOUR CAR", C_PLAYER),
        ("enemy_static", "BASIC FOE", C_ENEMY_STATIC),
        ("enemy_police", "DODGES YOU", C_ENEMY_REACTIVE),
        ("enemy_sports", "ZIGZAG MOVE", C_ENEMY_ZIGZAG),
    ];
    let slot = view.w / (legend.len() as u16 + 1);
    for (i, (name, label, color)) in legend.iter().enumerate() {
        let cx = slot * (i as u16 + 1);
        out.queue(style::SetForegroundColor(*color))?;
        if let Some(sprite) = sprites.get(name) {
            for (r, row) in sprite.iter().enumerate() {
                out.queue(cursor::MoveTo(cx.saturating_sub(1), 3 + r as u16))?;
                out.queue(Print(row))?;
            }
        } else {
            out.queue(cursor::MoveTo(cx.saturating_sub(1), 3))?;
            out.queue(Print("███"))?;
        }
        let col = cx.saturating_sub(label.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, 6))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(label))?;
    }

    print_centered(out, view, 8, "FUEL STATION", C_STATION)?;
    if let Some(sprite) = sprites.get("fuel_station") {
        for (r, row) in sprite.iter().enumerate() {
            print_centered(out, view, 9 + r as u16, row, C_STATION)?;
        }
    }
    print_centered(out, view, 11, "COLLECT TO REFUEL YOUR CAR", C_STATION)?;

    let controls_row = 13;
    print_centered(out, view, controls_row, "CONTROLS", Color::Yellow)?;
    print_centered(
        out,
        view,
        controls_row + 1,
        "ARROWS / WASD - steer   ESC - pause   Q - quit",
        Color::White,
    )?;

    print_centered(out, view, controls_row + 3, "OBJECTIVES", C_WARNING)?;
    print_centered(
        out,
        view,
        controls_row + 4,
        "avoid traffic, collect fuel, drive as far as possible",
        Color::White,
    )?;

    print_centered(
        out,
        view,
        view.h.saturating_sub(3),
        "PRESS ENTER TO START",
        Color::Yellow,
    )?;
    print_centered(
        out,
        view,
        view.h.saturating_sub(2),
        "ESC returns to the menu · starts by itself after 10 s",
        C_HINT,
    )?;
    Ok(())
}

// ── Game ──────────────────────────────────────────────────────────────────────

fn draw_game<W: Write>(
    out: &mut W,
    view: View,
    app: &App,
    sprites: &SpriteBank,
) -> std::io::Result<()> {
    let Some(session) = &app.session else {
        return Ok(());
    };

    draw_road(out, view, session)?;

    for enemy in &session.enemies {
        draw_enemy(out, view, enemy, sprites)?;
    }

    // Damage flash: blink the player, hidden 3 of every 6 ticks.
    let flash = session.effects.damage_flash;
    if !(flash > 0 && flash % 6 < 3) {
        draw_player(out, view, session, sprites)?;
    }

    draw_hud(out, view, app, session)?;
    Ok(())
}

fn draw_road<W: Write>(out: &mut W, view: View, session: &GameSession) -> std::io::Result<()> {
    let left = view.x(ROAD_LEFT);
    let right = view.x(ROAD_RIGHT);

    out.queue(style::SetForegroundColor(C_GUARDRAIL))?;
    for row in 0..view.h {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print("║"))?;
        out.queue(cursor::MoveTo(right, row))?;
        out.queue(Print("║"))?;
    }

    // Animated lane dashes: 40 world units on, 40 off, phased by the scroll
    // offset.
    out.queue(style::SetForegroundColor(C_LANE_DASH))?;
    for lane in HAZARD_LANES {
        let col = view.x(lane);
        for row in 0..view.h {
            let wy = view.world_y(row);
            let phase = (wy - session.road_offset).rem_euclid(LANE_DASH_PERIOD);
            if phase < LANE_DASH_PERIOD / 2.0 {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print("╎"))?;
            }
        }
    }
    Ok(())
}

fn draw_sprite_at<W: Write>(
    out: &mut W,
    view: View,
    x: f32,
    y: f32,
    sprite: Option<[&'static str; 2]>,
    color: Color,
) -> std::io::Result<()> {
    if y < 0.0 {
        return Ok(()); // still above the visible area
    }
    let col = view.x(x).saturating_sub(1);
    let row = view.y(y);
    out.queue(style::SetForegroundColor(color))?;
    match sprite {
        Some(rows) => {
            for (i, line) in rows.iter().enumerate() {
                let r = row.saturating_add(i as u16);
                if r < view.h {
                    out.queue(cursor::MoveTo(col, r))?;
                    out.queue(Print(line))?;
                }
            }
        }
        // Missing sprite: primitive block rendering.
        None => {
            for i in 0..2u16 {
                let r = row.saturating_add(i);
                if r < view.h {
                    out.queue(cursor::MoveTo(col, r))?;
                    out.queue(Print("███"))?;
                }
            }
        }
    }
    Ok(())
}

fn draw_player<W: Write>(
    out: &mut W,
    view: View,
    session: &GameSession,
    sprites: &SpriteBank,
) -> std::io::Result<()> {
    let sprite = if session.effects.control_loss > 0 {
        let frame = (session.effects.spin_angle as u32 / 90) as usize % SPIN_FRAMES.len();
        Some(SPIN_FRAMES[frame])
    } else {
        sprites.get("player_car")
    };
    draw_sprite_at(out, view, session.player.x, session.player.y, sprite, C_PLAYER)
}

fn draw_enemy<W: Write>(
    out: &mut W,
    view: View,
    enemy: &Enemy,
    sprites: &SpriteBank,
) -> std::io::Result<()> {
    let (name, color) = match enemy.behavior {
        Behavior::Static => ("enemy_static", C_ENEMY_STATIC),
        Behavior::Reactive => ("enemy_police", C_ENEMY_REACTIVE),
        Behavior::Zigzag => ("enemy_sports", C_ENEMY_ZIGZAG),
        Behavior::FuelStation => ("fuel_station", C_STATION),
    };
    draw_sprite_at(out, view, enemy.x, enemy.y, sprites.get(name), color)
}

fn draw_hud<W: Write>(
    out: &mut W,
    view: View,
    app: &App,
    session: &GameSession,
) -> std::io::Result<()> {
    let stats = &session.stats;

    // Left panel, outside the left guardrail.
    out.queue(cursor::MoveTo(1, 1))?;
    out.queue(style::SetForegroundColor(C_HUD_LABEL))?;
    out.queue(Print(format!("FUEL {:>3}%", stats.fuel as u32)))?;

    let filled = (stats.fuel / 10.0).round() as usize;
    let bar: String = "█".repeat(filled.min(10)) + &"░".repeat(10usize.saturating_sub(filled));
    out.queue(cursor::MoveTo(1, 2))?;
    out.queue(style::SetForegroundColor(if stats.fuel < 25.0 {
        Color::Red
    } else {
        Color::Green
    }))?;
    out.queue(Print(bar))?;

    out.queue(cursor::MoveTo(1, 4))?;
    out.queue(style::SetForegroundColor(C_HUD_LABEL))?;
    out.queue(Print("SPEED"))?;
    out.queue(cursor::MoveTo(1, 5))?;
    out.queue(style::SetForegroundColor(C_HUD_VALUE))?;
    out.queue(Print(format!("{} KM/H", (stats.speed * 10.0) as u32)))?;

    // Right panel, outside the right guardrail.
    let rx = view.x(ROAD_RIGHT).saturating_add(2);
    let rows: [(&str, String); 3] = [
        ("SCORE", format!("{}", stats.score)),
        ("DISTANCE", format!("{} KM", stats.distance as u32)),
        ("HIGH SCORE", format!("{}", app.high_score)),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        let base = 1 + i as u16 * 3;
        out.queue(cursor::MoveTo(rx, base))?;
        out.queue(style::SetForegroundColor(C_HUD_LABEL))?;
        out.queue(Print(label))?;
        out.queue(cursor::MoveTo(rx, base + 1))?;
        out.queue(style::SetForegroundColor(C_HUD_VALUE))?;
        out.queue(Print(value))?;
    }

    // Center warnings and the feedback cue.
    if session.effects.damage_flash > 0 {
        print_centered(out, view, 2, "COLLISION!", C_WARNING)?;
    }
    if session.effects.control_loss > 0 {
        print_centered(out, view, 3, "SPINNING OUT!", C_WARNING)?;
    }
    if app.feedback.is_active() {
        let color = match app.feedback.class {
            CueClass::Danger => Color::Red,
            CueClass::Reward => Color::Green,
            CueClass::Ui => Color::Yellow,
        };
        print_centered(out, view, 4, app.feedback.text, color)?;
    }

    out.queue(cursor::MoveTo(1, view.h.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("ARROWS/WASD steer  ESC pause  Q quit"))?;
    Ok(())
}

// ── Pause overlay ─────────────────────────────────────────────────────────────

fn draw_pause_overlay<W: Write>(out: &mut W, view: View) -> std::io::Result<()> {
    let cy = view.h / 2;
    let lines: &[&str] = &[
        "╔══════════════════════════╗",
        "║         PAUSED           ║",
        "║                          ║",
        "║  P / ESC  resume         ║",
        "║  R        restart        ║",
        "║  ENTER    back to menu   ║",
        "╚══════════════════════════╝",
    ];
    for (i, line) in lines.iter().enumerate() {
        print_centered(
            out,
            view,
            cy.saturating_sub(3) + i as u16,
            line,
            Color::White,
        )?;
    }
    Ok(())
}

// ── Credits ───────────────────────────────────────────────────────────────────

fn draw_credits<W: Write>(out: &mut W, view: View) -> std::io::Result<()> {
    let cy = view.h / 2;
    let lines: &[(&str, Color)] = &[
        ("ROAD FIGHTER - terminal edition", Color::Yellow),
        ("", Color::White),
        ("an arcade-style driving game in the spirit", Color::White),
        ("of the lane-dodging classics", Color::White),
        ("", Color::White),
        ("ESC or ENTER to return", C_HINT),
    ];
    for (i, (line, color)) in lines.iter().enumerate() {
        print_centered(out, view, cy.saturating_sub(3) + i as u16, line, *color)?;
    }
    Ok(())
}

// ── Game over ─────────────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: View, app: &App) -> std::io::Result<()> {
    let cy = view.h / 2;
    let banner: &[&str] = &[
        "╔══════════════════════╗",
        "║      GAME  OVER      ║",
        "╚══════════════════════╝",
    ];
    for (i, line) in banner.iter().enumerate() {
        print_centered(out, view, cy.saturating_sub(6) + i as u16, line, C_WARNING)?;
    }

    let (score, distance) = app
        .session
        .as_ref()
        .map(|s| (s.stats.score, s.stats.distance as u32))
        .unwrap_or((0, 0));

    print_centered(
        out,
        view,
        cy.saturating_sub(2),
        &format!("Final Score: {}", score),
        Color::White,
    )?;
    print_centered(
        out,
        view,
        cy.saturating_sub(1),
        &format!("Distance: {} km", distance),
        Color::White,
    )?;
    print_centered(
        out,
        view,
        cy,
        &format!("High Score: {}", app.high_score),
        C_HUD_VALUE,
    )?;

    let (rating, color) = if distance > 100 {
        ("EXCELLENT!", Color::Green)
    } else if distance > 50 {
        ("GOOD!", Color::Yellow)
    } else if distance > 20 {
        ("FAIR", Color::DarkYellow)
    } else {
        ("TRY AGAIN", Color::Red)
    };
    print_centered(out, view, cy + 2, rating, color)?;

    print_centered(out, view, cy + 4, "R - Play Again   ENTER - Menu", C_HINT)?;
    Ok(())
}
