/// A cancellable one-shot deadline, polled by the frame dispatcher.
///
/// Rearming replaces any pending deadline, which gives debounce behavior when
/// `arm` is called on every qualifying event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DebounceTimer {
    deadline_ms: Option<f64>,
}

impl DebounceTimer {
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    pub fn arm(&mut self, now_ms: f64, delay_ms: f64) {
        self.deadline_ms = Some(now_ms + delay_ms);
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(at) if now_ms >= at => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
