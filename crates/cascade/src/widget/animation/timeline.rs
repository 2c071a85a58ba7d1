//! Frame-driven animation primitives.
//!
//! A [`Timeline`] is a single eased span; a [`Sequence`] chains named stages
//! so that "A, then B, then C" ordering is explicit data instead of nested
//! completion callbacks. The host drives both with `advance(dt)` once per
//! frame — there is no hidden wall clock, which keeps animation behavior
//! deterministic under test.

use std::time::Duration;

use super::easing::{Easing, ease};

/// A single eased animation span.
#[derive(Debug, Clone)]
pub struct Timeline {
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
    running: bool,
}

impl Timeline {
    /// Create a new timeline. It does not run until [`start`](Self::start).
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Restart the timeline from the beginning.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Stop the timeline where it is.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Check if the timeline is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `dt`. Returns `true` if the timeline finished during this
    /// call.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.elapsed >= self.duration {
            self.running = false;
            return true;
        }
        false
    }

    /// Current eased progress in 0.0–1.0.
    ///
    /// A zero-duration timeline reports full progress.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        ease(
            self.easing,
            self.elapsed.as_secs_f32() / self.duration.as_secs_f32(),
        )
    }
}

/// One stage of a [`Sequence`].
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    /// Stage name, for logs and inspection.
    pub name: &'static str,
    /// Stage duration. Zero-duration stages complete the moment they are
    /// reached.
    pub duration: Duration,
    /// Easing applied to this stage's progress.
    pub easing: Easing,
}

impl Stage {
    /// Create a new stage.
    pub fn new(name: &'static str, duration: Duration, easing: Easing) -> Self {
        Self {
            name,
            duration,
            easing,
        }
    }
}

/// An ordered chain of animation stages.
///
/// Stages run strictly one after another; a single `advance` call can carry
/// leftover time across stage boundaries.
#[derive(Debug, Clone)]
pub struct Sequence {
    stages: Vec<Stage>,
    /// Index of the active stage; equals `stages.len()` once finished.
    cursor: usize,
    /// Time spent inside the active stage.
    in_stage: Duration,
    running: bool,
}

impl Sequence {
    /// Create a sequence from its stages. It does not run until
    /// [`start`](Self::start).
    pub fn new(stages: Vec<Stage>) -> Self {
        Self {
            stages,
            cursor: 0,
            in_stage: Duration::ZERO,
            running: false,
        }
    }

    /// Restart the sequence from its first stage.
    pub fn start(&mut self) {
        self.cursor = 0;
        self.in_stage = Duration::ZERO;
        self.running = !self.stages.is_empty();
    }

    /// Check if the sequence is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Check if the sequence has run to completion.
    #[inline]
    pub fn is_finished(&self) -> bool {
        !self.running && self.cursor >= self.stages.len() && !self.stages.is_empty()
    }

    /// The active stage, if the sequence is running.
    pub fn current_stage(&self) -> Option<&Stage> {
        if self.running {
            self.stages.get(self.cursor)
        } else {
            None
        }
    }

    /// Advance by `dt`, carrying leftover time across stage boundaries.
    /// Returns `true` if the sequence finished during this call.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }

        let mut remaining = dt;
        loop {
            if self.cursor >= self.stages.len() {
                self.running = false;
                return true;
            }
            let left = self.stages[self.cursor].duration.saturating_sub(self.in_stage);
            if remaining >= left {
                remaining -= left;
                self.cursor += 1;
                self.in_stage = Duration::ZERO;
                if self.cursor >= self.stages.len() {
                    self.running = false;
                    return true;
                }
            } else {
                self.in_stage += remaining;
                return false;
            }
        }
    }

    /// Eased progress of the stage at `index` in 0.0–1.0.
    ///
    /// Stages already passed report 1.0; stages not yet reached report 0.0.
    pub fn stage_progress(&self, index: usize) -> f32 {
        if index < self.cursor {
            return 1.0;
        }
        if index > self.cursor || !self.running {
            // Either not reached yet, or the sequence never started.
            return if self.is_finished() { 1.0 } else { 0.0 };
        }
        let stage = &self.stages[index];
        if stage.duration.is_zero() {
            return 1.0;
        }
        ease(
            stage.easing,
            self.in_stage.as_secs_f32() / stage.duration.as_secs_f32(),
        )
    }
}
