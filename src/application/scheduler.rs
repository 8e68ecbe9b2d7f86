/// Identifies one requested frame callback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Host frame primitive the animation driver is paced against.
///
/// Timestamps are milliseconds on a monotonic clock. A requested tick is
/// delivered by the host calling back into the driver on a later frame.
pub trait FrameScheduler {
    fn now_ms(&self) -> f64;

    fn request_tick(&mut self) -> TickHandle;

    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Hand-driven clock for tests and headless runs
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: f64,
    next_id: u64,
    outstanding: Option<TickHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn starting_at(now_ms: f64) -> Self {
        Self { now_ms, ..Self::default() }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    pub fn outstanding(&self) -> Option<TickHandle> {
        self.outstanding
    }

    /// Total ticks requested so far
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total outstanding ticks cancelled so far
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn request_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.outstanding = Some(handle);
        self.requested += 1;
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.outstanding == Some(handle) {
            self.outstanding = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let mut clock = ManualScheduler::default();
        let a = clock.request_tick();
        let b = clock.request_tick();
        assert_ne!(a, b);
        assert_eq!(clock.outstanding(), Some(b));
    }

    #[test]
    fn test_cancel_only_matches_outstanding() {
        let mut clock = ManualScheduler::starting_at(100.0);
        let stale = clock.request_tick();
        let live = clock.request_tick();
        clock.cancel_tick(stale);
        assert_eq!(clock.outstanding(), Some(live));
        clock.cancel_tick(live);
        assert_eq!(clock.outstanding(), None);
        assert_eq!(clock.cancelled(), 1);
    }

    #[test]
    fn test_advance() {
        let mut clock = ManualScheduler::starting_at(5.0);
        clock.advance(16.5);
        assert_eq!(clock.now_ms(), 21.5);
    }
}
