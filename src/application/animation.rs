//! Frame-paced driver that steps a [`Simulation`] at a target rate,
//! independent of how often the host produces frames.

use tracing::info;

use super::scheduler::{FrameScheduler, TickHandle};
use crate::domain::Simulation;
use crate::error::LifeError;

pub const DEFAULT_RATE: u32 = 10;
pub const MIN_RATE: u32 = 1;
pub const MAX_RATE: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Stopped,
    Running,
}

pub struct AnimationDriver<S: FrameScheduler> {
    scheduler: S,
    playback: Playback,
    rate: u32,
    last_step_ms: f64,
    pending: Option<TickHandle>,
}

impl<S: FrameScheduler> AnimationDriver<S> {
    pub fn new(scheduler: S, rate: u32) -> Result<Self, LifeError> {
        validate_rate(rate)?;
        Ok(Self {
            scheduler,
            playback: Playback::Stopped,
            rate,
            last_step_ms: 0.0,
            pending: None,
        })
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_running(&self) -> bool {
        self.playback == Playback::Running
    }

    /// Target steps per second
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Minimum time between two steps
    pub fn step_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.rate)
    }

    pub fn last_step_ms(&self) -> f64 {
        self.last_step_ms
    }

    /// The tick the host still owes us, if any
    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.playback = Playback::Running;
        self.last_step_ms = self.scheduler.now_ms();
        self.pending = Some(self.scheduler.request_tick());
        info!(rate = self.rate, "animation started");
    }

    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.playback = Playback::Stopped;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_tick(handle);
        }
        info!("animation stopped");
    }

    /// Change the target rate. Applies from the next tick; never steps.
    pub fn set_rate(&mut self, steps_per_second: u32) -> Result<(), LifeError> {
        validate_rate(steps_per_second)?;
        self.rate = steps_per_second;
        info!(rate = self.rate, "rate changed");
        Ok(())
    }

    /// Nudge the rate by `delta`, clamped to `MIN_RATE..=MAX_RATE`
    pub fn adjust_rate(&mut self, delta: i32) {
        let rate = (i64::from(self.rate) + i64::from(delta))
            .clamp(i64::from(MIN_RATE), i64::from(MAX_RATE));
        self.rate = rate as u32;
        info!(rate = self.rate, "rate changed");
    }

    /// Handle a fired frame callback at `now_ms`.
    ///
    /// Steps `sim` once if a full interval has elapsed since the last step,
    /// then moves the baseline to `now_ms` (lateness is absorbed, not carried
    /// over). Re-requests the next tick while running. Returns whether a step
    /// happened.
    pub fn on_tick(&mut self, sim: &mut Simulation, now_ms: f64) -> bool {
        if self.pending.take().is_none() || !self.is_running() {
            return false;
        }

        let stepped = now_ms - self.last_step_ms >= self.step_interval_ms();
        if stepped {
            sim.step();
            self.last_step_ms = now_ms;
        }

        self.pending = Some(self.scheduler.request_tick());
        stepped
    }
}

pub(crate) fn validate_rate(rate: u32) -> Result<(), LifeError> {
    if rate < MIN_RATE {
        return Err(LifeError::InvalidRate(rate));
    }
    Ok(())
}
