//! Feedback events and the audio seam.
//!
//! The simulation emits a [`FeedbackEvent`] for every collision, pickup and
//! menu selection. Events are acknowledged twice: the app records an
//! on-screen [`FeedbackCue`] of bounded duration, and an [`AudioSink`] gets a
//! chance to play something. The terminal build ships [`SilentAudio`], so the
//! visual cue is the only acknowledgment, exactly as required when no audio
//! device is available.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackEvent {
    Collision,
    Pickup,
    Selection,
}

/// Rendering class of a cue; the display maps it to color and prominence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueClass {
    Danger,
    Reward,
    Ui,
}

/// A short-lived on-screen acknowledgment. Inactive when `ticks` is 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackCue {
    pub text: &'static str,
    pub class: CueClass,
    pub ticks: u32,
}

impl FeedbackCue {
    pub fn none() -> Self {
        FeedbackCue { text: "", class: CueClass::Ui, ticks: 0 }
    }

    /// Cue shown for an event: louder events linger longer (90/60/30 ticks).
    pub fn for_event(event: FeedbackEvent) -> Self {
        match event {
            FeedbackEvent::Collision => {
                FeedbackCue { text: "CRASH!", class: CueClass::Danger, ticks: 90 }
            }
            FeedbackEvent::Pickup => {
                FeedbackCue { text: "+FUEL", class: CueClass::Reward, ticks: 60 }
            }
            FeedbackEvent::Selection => {
                FeedbackCue { text: "SELECT", class: CueClass::Ui, ticks: 30 }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.ticks > 0
    }
}

/// Where event sounds go. Playback failure is never the core's problem.
pub trait AudioSink {
    fn play(&mut self, event: FeedbackEvent);
}

/// The audio-unavailable fallback: swallow every event.
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _event: FeedbackEvent) {}
}
