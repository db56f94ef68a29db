use tracing::debug;

use crate::clock::{Clock, FrameTimer};
use crate::game::Simulation;
use crate::input::FrameInput;

/// Whether the outer loop keeps running after a frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Break,
}

/// Sequences one loop iteration: sample input, pace, advance.
///
/// Owns the clock so the simulation stays a pure function of the deltas it
/// is handed.
#[derive(Debug)]
pub struct LoopDriver<C: Clock> {
    clock: C,
    timer: FrameTimer,
    frames: u64,
}

impl<C: Clock> LoopDriver<C> {
    #[must_use]
    pub fn new(clock: C) -> Self {
        let timer = FrameTimer::with_default_interval(&clock);
        Self {
            clock,
            timer,
            frames: 0,
        }
    }

    /// Runs one frame against `sim`. Rendering is left to the caller.
    pub fn frame(&mut self, sim: &mut Simulation, input: FrameInput) -> LoopControl {
        if input.quit {
            debug!(frames = self.frames, "quit requested");
            return LoopControl::Break;
        }

        if let Some(direction) = input.direction {
            sim.set_pending_direction(direction);
        }

        let delta = self.timer.wait_next(&mut self.clock);
        sim.advance(delta);
        self.frames += 1;

        LoopControl::Continue
    }

    /// Frames advanced so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
