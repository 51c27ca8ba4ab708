mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use road_fighter::entities::SteeringInput;
use road_fighter::feedback::SilentAudio;
use road_fighter::scores::ScoreStore;
use road_fighter::state::{Action, App, Screen};

const FRAME: Duration = Duration::from_micros(16_667); // ≈60 Hz tick

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

// ── Input provider ────────────────────────────────────────────────────────────

/// Map one key press to a discrete action. On the splash screen every key is
/// a skip, mapped or not.
fn map_action(code: KeyCode, screen: Screen) -> Option<Action> {
    let action = match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Action::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Action::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Char('p' | 'P') => Some(Action::Pause),
        KeyCode::Char('r' | 'R') => Some(Action::Restart),
        KeyCode::F(11) => Some(Action::ToggleFullscreen),
        _ => None,
    };
    match (action, screen) {
        (None, Screen::Splash) => Some(Action::Confirm),
        (a, _) => a,
    }
}

/// Sample the held directional keys into this tick's steering signals.
fn sample_steering(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> SteeringInput {
    SteeringInput {
        up: any_held(
            key_frame,
            &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
            frame,
        ),
        down: any_held(
            key_frame,
            &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')],
            frame,
        ),
        left: any_held(
            key_frame,
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        ),
        right: any_held(
            key_frame,
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        ),
    }
}

// ── Main loop ─────────────────────────────────────────────────────────────────

/// One update-then-draw pass per frame, paced to the fixed tick rate. Input
/// arrives through the reader thread's channel; the loop itself never blocks
/// on I/O.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut audio = SilentAudio;
    let mut app = App::new(ScoreStore::open_default());

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        _ => {
                            if let Some(action) = map_action(code, app.screen) {
                                app.handle_action(action, &mut audio);
                            }
                        }
                    }
                }
                // Repeat: refresh timestamp so the key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let steering = sample_steering(&key_frame, frame);
        app.update(&steering, &mut rng, &mut audio);

        if app.quit {
            return Ok(());
        }

        display::render(out, &app)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
