/// Start state of a track that should begin playing once per page.
///
/// `Pending` covers the window between calling `play()` and the promise
/// settling; clicks during that window do not issue a second `play()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackLatch {
    #[default]
    Idle,
    Pending,
    Started,
}

impl PlaybackLatch {
    /// Move Idle -> Pending. Returns false if a start is already in flight or done.
    pub fn try_begin(&mut self) -> bool {
        if *self == PlaybackLatch::Idle {
            *self = PlaybackLatch::Pending;
            true
        } else {
            false
        }
    }

    pub fn succeed(&mut self) {
        *self = PlaybackLatch::Started;
    }

    /// A rejected start returns to Idle so the next trigger retries.
    pub fn fail(&mut self) {
        if *self == PlaybackLatch::Pending {
            *self = PlaybackLatch::Idle;
        }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        *self == PlaybackLatch::Started
    }
}
