// Tuning constants for motion sampling, volume mapping and the overlay.
// Times are in milliseconds, volumes and opacities in [0, 1].

// Motion sampling grid
pub const SAMPLE_WIDTH: u32 = 160;
pub const SAMPLE_HEIGHT: u32 = 120;
pub const RGBA_CHANNELS: usize = 4;

// A pixel counts as moved when |dR| + |dG| + |dB| exceeds this
pub const PIXEL_DIFF_THRESHOLD: u16 = 30;

// Below this ratio the scene is considered still
pub const STILLNESS_RATIO: f64 = 0.01;

// Stillness -> fade-out
pub const SILENCE_DELAY_MS: f64 = 10_000.0;
pub const FADE_OUT_MS: f64 = 3_000.0;

// Motion resumed after silence -> fade-in
pub const FADE_IN_TARGET: f64 = 0.6;
pub const FADE_IN_MS: f64 = 3_000.0;

// Direct motion -> volume mapping
pub const MOTION_VOLUME_GAIN: f64 = 3.0;
pub const MOTION_VOLUME_MIN: f64 = 0.2;
pub const MOTION_VOLUME_MAX: f64 = 1.0;

// Decimal places kept when writing volume
pub const FADE_VOLUME_DECIMALS: i32 = 3;
pub const MOTION_VOLUME_DECIMALS: i32 = 2;

// Starting levels of the two looping tracks
pub const AMBIENT_INITIAL_VOLUME: f64 = 0.6;
pub const BIRDSONG_INITIAL_VOLUME: f64 = 0.7;

// Inactivity overlay
pub const INACTIVITY_DELAY_MS: f64 = 30_000.0;
pub const OVERLAY_VISIBLE_OPACITY: f64 = 0.4;
pub const OVERLAY_HIDDEN_OPACITY: f64 = 0.0;

// Click snapshot
pub const SNAPSHOT_WIDTH: u32 = 300;
pub const SNAPSHOT_HEIGHT: u32 = 200;
pub const SNAPSHOT_DISPLAY_MS: f64 = 3_000.0;
