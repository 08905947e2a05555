//! Single-slot debounce scheduler over an explicit caller-supplied clock.
//!
//! No ambient timers: callers pass the current time (any monotonic u64
//! unit) to `schedule` and `poll`, which keeps the behavior deterministic
//! under test.

/// Holds at most one pending payload. Scheduling replaces the pending
/// payload and restarts the quiet window; a superseded payload is
/// discarded silently.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    /// `quiet` is the stretch of inactivity required before a scheduled
    /// payload fires.
    pub fn new(quiet: u64) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn schedule(&mut self, now: u64, payload: T) {
        self.pending = Some((now + self.quiet, payload));
    }

    /// Take the pending payload once its deadline has passed. Fires at
    /// most once per schedule.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, p)| p),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
