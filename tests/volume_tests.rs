// Host-side tests for fades and the motion -> volume policy.

use komorebi_web::core::*;

const FRAME_MS: f64 = 16.0;

fn started_state(volume: f64) -> AudioSessionState {
    let mut state = AudioSessionState::new(volume);
    state.ambient.succeed();
    state
}

/// One frame in dispatcher order: timers and fade first, then the policy.
fn tick(ctl: &VolumeController, state: &mut AudioSessionState, t: f64, ratio: f64) {
    ctl.advance(state, t);
    ctl.apply_motion(state, t, ratio);
}

/// Feed `ratio` every frame over [from, to) and return the next timestamp.
fn run(ctl: &VolumeController, state: &mut AudioSessionState, from: f64, to: f64, ratio: f64) -> f64 {
    let mut t = from;
    while t < to {
        tick(ctl, state, t, ratio);
        t += FRAME_MS;
    }
    t
}

#[test]
fn round_to_matches_fixed_decimals() {
    assert_eq!(round_to(0.123456, 3), 0.123);
    assert_eq!(round_to(0.15000000000000002, 2), 0.15);
    assert_eq!(round_to(0.9996, 3), 1.0);
}

#[test]
fn direct_volume_is_clamped_and_rounded() {
    let ctl = VolumeController::default();
    assert_eq!(ctl.motion_volume(0.5), 1.0);
    assert_eq!(ctl.motion_volume(0.05), 0.2);
    assert_eq!(ctl.motion_volume(0.01), 0.2);
    assert!((ctl.motion_volume(0.1) - 0.3).abs() < 1e-12);
    assert_eq!(ctl.motion_volume(0.2345), 0.7);
}

#[test]
fn fade_in_is_linear() {
    let fade = Fade::into_target(0.0, 0.6, 1_000.0, 3_000.0, 3);
    assert_eq!(fade.sample(1_000.0).volume, 0.0);
    let mid = fade.sample(2_500.0);
    assert!((mid.volume - 0.3).abs() <= 0.01);
    assert!(!mid.finished);
    let end = fade.sample(4_000.0);
    assert!(end.finished);
    assert!((end.volume - 0.6).abs() < 1e-12);
}

#[test]
fn fade_out_rounds_then_snaps_to_zero() {
    let fade = Fade::out(0.6, 0.0, 3_000.0, 3);
    assert_eq!(fade.sample(1_000.0).volume, 0.4);
    assert_eq!(fade.sample(2_990.0).volume, 0.002);
    let end = fade.sample(3_500.0);
    assert!(end.finished);
    assert_eq!(end.volume, 0.0);
}

#[test]
fn zero_duration_fade_finishes_at_once() {
    let fade = Fade::out(0.8, 10.0, 0.0, 3);
    assert_eq!(fade.progress(10.0), 1.0);
    assert_eq!(fade.sample(10.0).volume, 0.0);
}

#[test]
fn starting_a_fade_supersedes_the_previous_one() {
    let mut fader = Fader::new();
    let out = fader.start(Fade::out(0.6, 0.0, 3_000.0, 3));
    let fade_in = fader.start(Fade::into_target(0.3, 0.6, 1_500.0, 3_000.0, 3));
    assert!(!fader.is_active(out));
    assert!(fader.is_active(fade_in));
    // stale token does nothing
    assert!(!fader.cancel(out));
    assert_eq!(fader.active().map(|f| f.direction), Some(FadeDirection::In));
    assert!(fader.cancel(fade_in));
    assert_eq!(fader.step(2_000.0), None);
}

#[test]
fn fader_drops_finished_fade() {
    let mut fader = Fader::new();
    fader.start(Fade::out(0.5, 0.0, 100.0, 3));
    assert_eq!(fader.step(50.0), Some(0.25));
    assert_eq!(fader.step(100.0), Some(0.0));
    assert!(fader.active().is_none());
    assert_eq!(fader.step(200.0), None);
}

#[test]
fn stillness_arms_silence_timer_once() {
    let ctl = VolumeController::default();
    let mut state = started_state(0.6);
    ctl.apply_motion(&mut state, 0.0, 0.0);
    assert_eq!(state.silence_timer.deadline_ms(), Some(10_000.0));
    ctl.apply_motion(&mut state, 500.0, 0.005);
    assert_eq!(state.silence_timer.deadline_ms(), Some(10_000.0));
}

#[test]
fn sustained_stillness_fades_to_zero_and_stays() {
    let ctl = VolumeController::default();
    let mut state = started_state(0.6);

    let t = run(&ctl, &mut state, 0.0, 9_990.0, 0.009);
    assert!(!state.silent);
    assert_eq!(state.volume, 0.6);

    let t = run(&ctl, &mut state, t, 14_000.0, 0.009);
    assert!(state.silent);
    assert_eq!(state.volume, 0.0);
    assert!(state.fader.active().is_none());

    run(&ctl, &mut state, t, 40_000.0, 0.009);
    assert_eq!(state.volume, 0.0);
    assert!(!state.silence_timer.is_armed());
}

#[test]
fn motion_before_deadline_cancels_silence() {
    let ctl = VolumeController::default();
    let mut state = started_state(0.6);

    let t = run(&ctl, &mut state, 0.0, 6_000.0, 0.0);
    assert!(state.silence_timer.is_armed());

    run(&ctl, &mut state, t, 16_000.0, 0.5);
    assert!(!state.silence_timer.is_armed());
    assert!(!state.silent);
    assert!(state.fader.active().is_none());
    assert_eq!(state.volume, 1.0);
}

#[test]
fn motion_after_silence_fades_back_in() {
    let ctl = VolumeController::default();
    let mut state = started_state(0.0);
    state.silent = true;

    tick(&ctl, &mut state, 20_000.0, 0.5);
    assert!(!state.silent);
    assert_eq!(state.fader.active().map(|f| f.direction), Some(FadeDirection::In));
    // direct assignment lands on the same tick the fade-in starts
    assert_eq!(state.volume, 1.0);

    // and keeps winning on every moving tick while the fade runs
    run(&ctl, &mut state, 20_016.0, 21_000.0, 0.5);
    assert!(state.fader.active().is_some());
    assert_eq!(state.volume, 1.0);

    // a frame without a fresh ratio shows the fade's own sample
    ctl.advance(&mut state, 21_500.0);
    assert!((state.volume - 0.3).abs() <= 0.01);

    tick(&ctl, &mut state, 21_516.0, 0.5);
    assert_eq!(state.volume, 1.0);
    run(&ctl, &mut state, 21_532.0, 23_100.0, 0.5);
    assert!(state.fader.active().is_none());
    assert_eq!(state.volume, 1.0);
}

#[test]
fn fade_in_interrupts_running_fade_out() {
    let ctl = VolumeController::default();
    let mut state = started_state(0.6);
    state.silence_timer.arm(0.0, 0.0);
    assert!(ctl.poll_silence(&mut state, 0.0));
    ctl.step_fade(&mut state, 1_500.0);
    assert_eq!(state.volume, 0.3);

    ctl.apply_motion(&mut state, 1_500.0, 0.02);
    assert_eq!(state.fader.active().map(|f| f.direction), Some(FadeDirection::In));
    assert_eq!(state.volume, 0.2);
    // the fade-in started from 0.3, not from the direct write
    ctl.step_fade(&mut state, 3_000.0);
    assert!((state.volume - 0.45).abs() < 1e-9);
}

#[test]
fn no_direct_assignment_before_playback_starts() {
    let ctl = VolumeController::default();
    let mut state = AudioSessionState::new(0.6);
    ctl.apply_motion(&mut state, 0.0, 0.9);
    assert_eq!(state.volume, 0.6);
}
