// Host-side tests for tuning constants and their relationships.
// The constants file has no dependencies, so it is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn volumes_and_opacities_are_normalized() {
    for v in [
        FADE_IN_TARGET,
        MOTION_VOLUME_MIN,
        MOTION_VOLUME_MAX,
        AMBIENT_INITIAL_VOLUME,
        BIRDSONG_INITIAL_VOLUME,
        OVERLAY_VISIBLE_OPACITY,
        OVERLAY_HIDDEN_OPACITY,
    ] {
        assert!((0.0..=1.0).contains(&v), "{v} outside [0, 1]");
    }
    assert!(MOTION_VOLUME_MIN < MOTION_VOLUME_MAX);
    assert!(OVERLAY_HIDDEN_OPACITY < OVERLAY_VISIBLE_OPACITY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn durations_are_positive() {
    assert!(SILENCE_DELAY_MS > 0.0);
    assert!(FADE_OUT_MS > 0.0);
    assert!(FADE_IN_MS > 0.0);
    assert!(INACTIVITY_DELAY_MS > 0.0);
    assert!(SNAPSHOT_DISPLAY_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_gain_reaches_full_volume_before_full_motion() {
    // Ratios at or above 1/gain map to the ceiling.
    assert!(MOTION_VOLUME_GAIN >= MOTION_VOLUME_MAX);
    // Barely-moving scenes land on the floor rather than near silence.
    assert!(STILLNESS_RATIO * MOTION_VOLUME_GAIN <= MOTION_VOLUME_MIN);
}

#[test]
fn sampling_grid_is_small() {
    let bytes = SAMPLE_WIDTH as usize * SAMPLE_HEIGHT as usize * RGBA_CHANNELS;
    assert_eq!(bytes, 76_800);
    assert!(PIXEL_DIFF_THRESHOLD < 3 * 255);
}
