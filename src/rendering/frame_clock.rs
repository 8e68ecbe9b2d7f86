use macroquad::time::get_time;

use crate::application::{FrameScheduler, TickHandle};

/// Frame scheduler backed by macroquad's render loop.
///
/// macroquad presents a frame on every `next_frame().await`, so a requested
/// tick is simply due on the next loop iteration. Which tick is still owed is
/// tracked by the driver, so cancelling needs no bookkeeping here.
#[derive(Debug, Default)]
pub struct MacroquadFrames {
    next_id: u64,
}

impl FrameScheduler for MacroquadFrames {
    fn now_ms(&self) -> f64 {
        get_time() * 1000.0
    }

    fn request_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        TickHandle(self.next_id)
    }

    fn cancel_tick(&mut self, _handle: TickHandle) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_request_gets_a_fresh_handle() {
        let mut frames = MacroquadFrames::default();
        let first = frames.request_tick();
        frames.cancel_tick(first);
        let second = frames.request_tick();
        assert_ne!(first, second);
        assert_eq!(second, TickHandle(2));
    }
}
