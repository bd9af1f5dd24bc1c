//! Mutable per-page state shared by the volume controller and the overlay.
//!
//! Both components are stateless apart from their configuration and operate
//! on a `&mut AudioSessionState`, so every flag and timer has one owner.

use super::fade::Fader;
use super::playback::PlaybackLatch;
use super::timer::DebounceTimer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayVisibility {
    #[default]
    Hidden,
    Visible,
}

/// The looping tracks that start on the first activation click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Track {
    Ambient,
    Birdsong,
}

#[derive(Clone, Debug, Default)]
pub struct AudioSessionState {
    pub ambient: PlaybackLatch,
    pub birdsong: PlaybackLatch,
    /// Current ambient volume in [0, 1].
    pub volume: f64,
    /// Set once a stillness fade-out has been triggered, cleared on motion.
    pub silent: bool,
    pub silence_timer: DebounceTimer,
    pub fader: Fader,
    pub overlay: OverlayVisibility,
    pub inactivity_timer: DebounceTimer,
}

impl AudioSessionState {
    pub fn new(initial_volume: f64) -> Self {
        Self {
            volume: initial_volume,
            ..Self::default()
        }
    }

    pub fn latch_mut(&mut self, track: Track) -> &mut PlaybackLatch {
        match track {
            Track::Ambient => &mut self.ambient,
            Track::Birdsong => &mut self.birdsong,
        }
    }
}
