/// Direction of a volume fade. Fade-outs always land on 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Round half away from zero to `decimals` places.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// A timed linear interpolation of the volume toward `target`.
///
/// The start volume is captured when the fade is created. Samples are rounded
/// to `decimals` places. Fade-outs snap to exactly 0 once progress reaches 1;
/// fade-ins leave the last interpolated sample in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub direction: FadeDirection,
    pub from: f64,
    pub target: f64,
    pub started_at_ms: f64,
    pub duration_ms: f64,
    pub decimals: i32,
}

/// One sampled point of a fade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeSample {
    pub volume: f64,
    pub finished: bool,
}

impl Fade {
    pub fn out(from: f64, now_ms: f64, duration_ms: f64, decimals: i32) -> Self {
        Self {
            direction: FadeDirection::Out,
            from,
            target: 0.0,
            started_at_ms: now_ms,
            duration_ms,
            decimals,
        }
    }

    pub fn into_target(from: f64, target: f64, now_ms: f64, duration_ms: f64, decimals: i32) -> Self {
        Self {
            direction: FadeDirection::In,
            from,
            target,
            started_at_ms: now_ms,
            duration_ms,
            decimals,
        }
    }

    /// Progress in [0, 1]. A non-positive duration completes immediately.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: f64) -> FadeSample {
        let p = self.progress(now_ms);
        let finished = p >= 1.0;
        let volume = match self.direction {
            FadeDirection::Out if finished => 0.0,
            FadeDirection::Out => round_to(self.from * (1.0 - p), self.decimals),
            FadeDirection::In => round_to(self.from + (self.target - self.from) * p, self.decimals),
        };
        FadeSample { volume, finished }
    }
}

/// Handle identifying one started fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FadeToken(u64);

/// Owns the single in-flight fade.
///
/// Starting a fade invalidates the previous token, so two interpolation chains
/// never write the volume on the same tick.
#[derive(Clone, Debug, Default)]
pub struct Fader {
    next_id: u64,
    active: Option<(FadeToken, Fade)>,
}

impl Fader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, fade: Fade) -> FadeToken {
        if let Some((old, prev)) = self.active.take() {
            log::debug!(
                "[fade] {:?} fade #{} superseded by {:?}",
                prev.direction,
                old.0,
                fade.direction
            );
        }
        self.next_id += 1;
        let token = FadeToken(self.next_id);
        self.active = Some((token, fade));
        token
    }

    /// Cancel the fade behind `token`. Stale tokens are ignored.
    pub fn cancel(&mut self, token: FadeToken) -> bool {
        match self.active {
            Some((t, _)) if t == token => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, token: FadeToken) -> bool {
        matches!(self.active, Some((t, _)) if t == token)
    }

    pub fn active(&self) -> Option<&Fade> {
        self.active.as_ref().map(|(_, f)| f)
    }

    /// Sample the active fade. Returns the volume to write, if any; a finished
    /// fade is dropped after its final sample.
    pub fn step(&mut self, now_ms: f64) -> Option<f64> {
        let (_, fade) = self.active?;
        let s = fade.sample(now_ms);
        if s.finished {
            self.active = None;
        }
        Some(s.volume)
    }
}
