use super::config::VolumeConfig;
use super::constants::{FADE_VOLUME_DECIMALS, MOTION_VOLUME_DECIMALS};
use super::fade::{round_to, Fade, FadeToken};
use super::state::AudioSessionState;

/// Maps motion ratios to ambient volume, with a stillness fade-out and a
/// fade-in when motion returns.
#[derive(Clone, Copy, Debug, Default)]
pub struct VolumeController {
    config: VolumeConfig,
}

impl VolumeController {
    pub fn new(config: VolumeConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn is_still(&self, ratio: f64) -> bool {
        ratio < self.config.stillness_ratio
    }

    /// Volume written directly while the scene is moving.
    pub fn motion_volume(&self, ratio: f64) -> f64 {
        let v = (ratio * self.config.motion_gain)
            .max(self.config.motion_min)
            .min(self.config.motion_max);
        round_to(v, MOTION_VOLUME_DECIMALS)
    }

    /// Evaluate the stillness/motion policy for one measured ratio.
    pub fn apply_motion(&self, state: &mut AudioSessionState, now_ms: f64, ratio: f64) {
        if self.is_still(ratio) {
            if !state.silent && !state.silence_timer.is_armed() {
                state
                    .silence_timer
                    .arm(now_ms, self.config.silence_delay_ms);
                log::debug!("[motion] still (ratio {:.4}), silence timer armed", ratio);
            }
            return;
        }

        if state.silent {
            self.fade_in(state, now_ms, self.config.fade_in_target, self.config.fade_in_ms);
            state.silent = false;
            log::info!("[audio] motion resumed, fading in");
        }
        if state.silence_timer.is_armed() {
            state.silence_timer.cancel();
        }
        if state.ambient.is_started() {
            state.volume = self.motion_volume(ratio);
        }
    }

    /// Fire the silence timer if due. Returns true when a fade-out started.
    pub fn poll_silence(&self, state: &mut AudioSessionState, now_ms: f64) -> bool {
        if !state.silence_timer.poll(now_ms) {
            return false;
        }
        self.fade_out(state, now_ms, self.config.fade_out_ms);
        state.silent = true;
        log::info!("[audio] stillness held, fading out");
        true
    }

    pub fn fade_out(&self, state: &mut AudioSessionState, now_ms: f64, duration_ms: f64) -> FadeToken {
        let fade = Fade::out(state.volume, now_ms, duration_ms, FADE_VOLUME_DECIMALS);
        state.fader.start(fade)
    }

    pub fn fade_in(
        &self,
        state: &mut AudioSessionState,
        now_ms: f64,
        target: f64,
        duration_ms: f64,
    ) -> FadeToken {
        let fade = Fade::into_target(state.volume, target, now_ms, duration_ms, FADE_VOLUME_DECIMALS);
        state.fader.start(fade)
    }

    /// Write the active fade's sample for this frame, if one is running.
    pub fn step_fade(&self, state: &mut AudioSessionState, now_ms: f64) {
        if let Some(v) = state.fader.step(now_ms) {
            state.volume = v;
        }
    }

    /// Per-frame work that does not depend on a fresh ratio. Runs before
    /// `apply_motion` so a direct motion write lands after the fade sample.
    pub fn advance(&self, state: &mut AudioSessionState, now_ms: f64) {
        self.poll_silence(state, now_ms);
        self.step_fade(state, now_ms);
    }
}
