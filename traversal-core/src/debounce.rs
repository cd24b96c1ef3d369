use std::time::{Duration, Instant};

/// Quiet period between the last edit and an automatic re-submission.
pub const TRAVERSE_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Cancellable quiet-period timer, polled from the frame loop.
///
/// Each [`Debouncer::arm`] resets the deadline; timers are replaced, never
/// queued, so a burst of edits collapses to a single firing once the quiet
/// period elapses. [`Debouncer::ready`] reports the firing at most once.
///
/// The `*_at` variants take an explicit instant so tests can drive the timer
/// without sleeping.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn arm(&mut self) {
        self.arm_at(Instant::now());
    }

    pub fn arm_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    pub fn ready_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
