//! Screen state machine and the app context.
//!
//! The [`App`] owns everything with a lifetime longer than one tick: the
//! current screen, the running session (if any), the score store and the
//! feedback cue. The front-end feeds it discrete [`Action`]s as they arrive
//! and one [`SteeringInput`] + `update` call per tick. All timeouts are tick
//! counters, never wall clocks.

use rand::Rng;

use crate::compute::{self, GameSession};
use crate::entities::SteeringInput;
use crate::feedback::{AudioSink, FeedbackCue, FeedbackEvent};
use crate::scores::ScoreStore;

/// Splash auto-advances after 3 seconds at the nominal 60 Hz tick.
pub const SPLASH_TICKS: u32 = 180;
/// How-to-play auto-advances into the game after 10 seconds.
pub const HOW_TO_PLAY_TICKS: u32 = 600;

pub const MENU_ITEMS: [&str; 3] = ["1 PLAYER", "CREDITS", "EXIT"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Menu,
    HowToPlay,
    Game,
    Paused,
    Credits,
    GameOver,
}

/// Discrete input signals from the input provider. Signals with no defined
/// transition on the current screen are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Pause,
    Restart,
    /// Accepted from the provider; no screen reacts to it in the terminal
    /// build.
    ToggleFullscreen,
}

pub struct App {
    pub screen: Screen,
    pub menu_selection: usize,
    pub splash_timer: u32,
    pub how_to_play_timer: u32,
    /// Present only between game start and the next return to the menu;
    /// PAUSED and GAME_OVER keep it around frozen for rendering.
    pub session: Option<GameSession>,
    pub scores: ScoreStore,
    /// Cached best stored score for the HUD.
    pub high_score: u32,
    pub feedback: FeedbackCue,
    pub quit: bool,
}

impl App {
    pub fn new(scores: ScoreStore) -> Self {
        let high_score = scores.best();
        App {
            screen: Screen::Splash,
            menu_selection: 0,
            splash_timer: 0,
            how_to_play_timer: 0,
            session: None,
            scores,
            high_score,
            feedback: FeedbackCue::none(),
            quit: false,
        }
    }

    fn emit(&mut self, event: FeedbackEvent, audio: &mut dyn AudioSink) {
        self.feedback = FeedbackCue::for_event(event);
        audio.play(event);
    }

    fn start_game(&mut self) {
        self.session = Some(GameSession::new());
        self.screen = Screen::Game;
    }

    /// The tank ran dry: persist the run, refresh the cached best and show
    /// the game-over screen. A store failure is reported and otherwise
    /// ignored; the run still ends.
    fn finish_run(&mut self) {
        if let Some(session) = &self.session {
            let score = session.stats.score;
            let distance = session.stats.distance as u32;
            if let Err(err) = self.scores.record(score, distance) {
                eprintln!("could not save high scores: {err:#}");
            }
            self.high_score = self.scores.best();
        }
        self.screen = Screen::GameOver;
    }

    /// Route one discrete input signal to the current screen.
    pub fn handle_action(&mut self, action: Action, audio: &mut dyn AudioSink) {
        match self.screen {
            Screen::Splash => {
                // Any key skips the splash.
                self.screen = Screen::Menu;
                self.emit(FeedbackEvent::Selection, audio);
            }
            Screen::Menu => match action {
                Action::Up => {
                    self.menu_selection =
                        (self.menu_selection + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
                    self.emit(FeedbackEvent::Selection, audio);
                }
                Action::Down => {
                    self.menu_selection = (self.menu_selection + 1) % MENU_ITEMS.len();
                    self.emit(FeedbackEvent::Selection, audio);
                }
                Action::Confirm => {
                    self.emit(FeedbackEvent::Selection, audio);
                    match self.menu_selection {
                        0 => {
                            self.how_to_play_timer = 0;
                            self.screen = Screen::HowToPlay;
                        }
                        1 => self.screen = Screen::Credits,
                        _ => self.quit = true,
                    }
                }
                _ => {}
            },
            Screen::HowToPlay => match action {
                Action::Confirm => {
                    self.emit(FeedbackEvent::Selection, audio);
                    self.start_game();
                }
                Action::Cancel => {
                    self.emit(FeedbackEvent::Selection, audio);
                    self.screen = Screen::Menu;
                }
                _ => {}
            },
            Screen::Game => match action {
                Action::Pause | Action::Cancel => self.screen = Screen::Paused,
                _ => {}
            },
            Screen::Paused => match action {
                Action::Pause | Action::Cancel => self.screen = Screen::Game,
                Action::Restart => self.start_game(),
                Action::Confirm => self.screen = Screen::Menu,
                _ => {}
            },
            Screen::Credits => match action {
                Action::Confirm | Action::Cancel => {
                    self.emit(FeedbackEvent::Selection, audio);
                    self.screen = Screen::Menu;
                }
                _ => {}
            },
            Screen::GameOver => match action {
                Action::Confirm => {
                    self.emit(FeedbackEvent::Selection, audio);
                    self.screen = Screen::Menu;
                }
                Action::Restart => {
                    self.emit(FeedbackEvent::Selection, audio);
                    self.start_game();
                }
                _ => {}
            },
        }
    }

    /// Advance the app by one tick. Only SPLASH, HOW_TO_PLAY and GAME have
    /// per-tick work; PAUSED deliberately freezes the simulation.
    pub fn update(
        &mut self,
        steering: &SteeringInput,
        rng: &mut impl Rng,
        audio: &mut dyn AudioSink,
    ) {
        if self.feedback.ticks > 0 {
            self.feedback.ticks -= 1;
        }

        match self.screen {
            Screen::Splash => {
                self.splash_timer += 1;
                if self.splash_timer >= SPLASH_TICKS {
                    self.screen = Screen::Menu;
                }
            }
            Screen::HowToPlay => {
                self.how_to_play_timer += 1;
                if self.how_to_play_timer >= HOW_TO_PLAY_TICKS {
                    self.start_game();
                }
            }
            Screen::Game => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                let report = compute::tick(session, steering, rng);
                for event in report.events {
                    self.emit(event, audio);
                }
                if report.out_of_fuel {
                    self.finish_run();
                }
            }
            _ => {}
        }
    }
}
