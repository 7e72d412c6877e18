//! Trailing-edge debounce driven by caller-supplied timestamps

/// Fires once `wait_ms` after the most recent trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    wait_ms: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    /// Record an event at `now_ms`, pushing the deadline back
    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    /// True exactly once when the deadline has passed
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
