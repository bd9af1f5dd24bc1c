use super::constants::*;

/// Frame sampling parameters for the motion detector.
///
/// - `width`/`height`: size of the downscaled sampling grid in pixels
/// - `pixel_threshold`: summed RGB difference above which a pixel counts as moved
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub width: u32,
    pub height: u32,
    pub pixel_threshold: u16,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            width: SAMPLE_WIDTH,
            height: SAMPLE_HEIGHT,
            pixel_threshold: PIXEL_DIFF_THRESHOLD,
        }
    }
}

/// How motion ratios map onto the ambient track's volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeConfig {
    pub stillness_ratio: f64,
    pub silence_delay_ms: f64,
    pub fade_out_ms: f64,
    pub fade_in_target: f64,
    pub fade_in_ms: f64,
    pub motion_gain: f64,
    pub motion_min: f64,
    pub motion_max: f64,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            stillness_ratio: STILLNESS_RATIO,
            silence_delay_ms: SILENCE_DELAY_MS,
            fade_out_ms: FADE_OUT_MS,
            fade_in_target: FADE_IN_TARGET,
            fade_in_ms: FADE_IN_MS,
            motion_gain: MOTION_VOLUME_GAIN,
            motion_min: MOTION_VOLUME_MIN,
            motion_max: MOTION_VOLUME_MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayConfig {
    pub inactivity_ms: f64,
    pub visible_opacity: f64,
    pub hidden_opacity: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            inactivity_ms: INACTIVITY_DELAY_MS,
            visible_opacity: OVERLAY_VISIBLE_OPACITY,
            hidden_opacity: OVERLAY_HIDDEN_OPACITY,
        }
    }
}

/// Everything the session needs, grouped by component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionConfig {
    pub motion: MotionConfig,
    pub volume: VolumeConfig,
    pub overlay: OverlayConfig,
    pub initial_volume: InitialVolumes,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialVolumes {
    pub ambient: f64,
    pub birdsong: f64,
}

impl Default for InitialVolumes {
    fn default() -> Self {
        Self {
            ambient: AMBIENT_INITIAL_VOLUME,
            birdsong: BIRDSONG_INITIAL_VOLUME,
        }
    }
}
