//! Per-frame dispatcher tying the sampler, volume controller and overlay
//! together around one [`AudioSessionState`].
//!
//! Within a tick the order is fixed: motion sample, silence timer, active
//! fade, volume policy, inactivity timer. On ticks with a moving ratio the
//! direct motion volume is written after the fade and wins; the fade only
//! shows on ticks without a fresh ratio.

use super::config::SessionConfig;
use super::inactivity::InactivityOverlay;
use super::motion::{CaptureAccess, FrameBuffer, MotionSampler};
use super::state::AudioSessionState;
use super::volume::VolumeController;

/// Changes produced by one call into the session. `None` means "leave as is".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickOutput {
    pub motion_ratio: Option<f64>,
    pub volume: Option<f64>,
    pub overlay_opacity: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    state: AudioSessionState,
    volume: VolumeController,
    overlay: InactivityOverlay,
    sampler: Option<MotionSampler>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: AudioSessionState::new(config.initial_volume.ambient),
            volume: VolumeController::new(config.volume),
            overlay: InactivityOverlay::new(config.overlay),
            sampler: None,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &AudioSessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AudioSessionState {
        &mut self.state
    }

    /// Arm the inactivity timer and report the starting outputs.
    pub fn start(&mut self, now_ms: f64) -> TickOutput {
        self.overlay.start(&mut self.state, now_ms);
        TickOutput {
            motion_ratio: None,
            volume: Some(self.state.volume),
            overlay_opacity: Some(self.overlay.opacity(self.state.overlay)),
        }
    }

    /// Enable sampling if the camera was granted. Returns whether it was.
    pub fn on_capture_access<S>(&mut self, access: &CaptureAccess<S>) -> bool {
        match access {
            CaptureAccess::Granted(_) => {
                self.sampler = Some(MotionSampler::new(self.config.motion));
                log::info!("[motion] camera granted, sampling started");
                true
            }
            CaptureAccess::Denied(reason) => {
                log::warn!("[motion] camera access denied: {}", reason);
                false
            }
            CaptureAccess::Unsupported => {
                log::warn!("[motion] camera capture not supported");
                false
            }
        }
    }

    pub fn motion_enabled(&self) -> bool {
        self.sampler.is_some()
    }

    pub fn on_user_input(&mut self, now_ms: f64) -> Option<f64> {
        self.overlay.on_input(&mut self.state, now_ms)
    }

    /// One animation frame. `frame` is `None` when the capture source had no
    /// data ready this tick.
    pub fn tick(&mut self, now_ms: f64, frame: Option<FrameBuffer>) -> TickOutput {
        let ratio = match (&mut self.sampler, frame) {
            (Some(sampler), Some(frame)) => sampler.sample(frame),
            _ => None,
        };
        self.tick_with_ratio(now_ms, ratio)
    }

    /// Same as [`Session::tick`] with the ratio already measured.
    pub fn tick_with_ratio(&mut self, now_ms: f64, ratio: Option<f64>) -> TickOutput {
        let before = self.state.volume;
        self.volume.advance(&mut self.state, now_ms);
        if let Some(r) = ratio {
            self.volume.apply_motion(&mut self.state, now_ms, r);
        }
        let overlay_opacity = self.overlay.poll(&mut self.state, now_ms);

        TickOutput {
            motion_ratio: ratio,
            volume: (self.state.volume != before).then_some(self.state.volume),
            overlay_opacity,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
