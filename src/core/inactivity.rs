use super::config::OverlayConfig;
use super::state::{AudioSessionState, OverlayVisibility};

/// Reveals the decorative overlay after a stretch without pointer, key or
/// touch input and hides it again on the next input.
#[derive(Clone, Copy, Debug, Default)]
pub struct InactivityOverlay {
    config: OverlayConfig,
}

impl InactivityOverlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    pub fn opacity(&self, visibility: OverlayVisibility) -> f64 {
        match visibility {
            OverlayVisibility::Hidden => self.config.hidden_opacity,
            OverlayVisibility::Visible => self.config.visible_opacity,
        }
    }

    /// Arm the timer at page start. Same as an input event.
    pub fn start(&self, state: &mut AudioSessionState, now_ms: f64) -> Option<f64> {
        self.on_input(state, now_ms)
    }

    /// Rearm the timer. Returns the new opacity when the overlay was hidden.
    pub fn on_input(&self, state: &mut AudioSessionState, now_ms: f64) -> Option<f64> {
        state.inactivity_timer.arm(now_ms, self.config.inactivity_ms);
        if state.overlay == OverlayVisibility::Visible {
            state.overlay = OverlayVisibility::Hidden;
            log::debug!("[overlay] hidden on input");
            return Some(self.opacity(OverlayVisibility::Hidden));
        }
        None
    }

    /// Returns the new opacity when the inactivity timer fires.
    pub fn poll(&self, state: &mut AudioSessionState, now_ms: f64) -> Option<f64> {
        if !state.inactivity_timer.poll(now_ms) {
            return None;
        }
        state.overlay = OverlayVisibility::Visible;
        log::info!("[overlay] no input for {:.0}s, showing", self.config.inactivity_ms / 1000.0);
        Some(self.opacity(OverlayVisibility::Visible))
    }
}
