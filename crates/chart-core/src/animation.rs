// File: crates/chart-core/src/animation.rs
// Summary: Time-based animation progress, easing, and a cancellable per-widget frame task.

use crate::types::Millis;

/// Mapping from elapsed-time fraction to visual progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// `1 - 2^(-10t)`, with `t = 1` mapping exactly to 1.
    ExpoOut,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::ExpoOut => ease_out_expo(t),
        }
    }
}

#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    if t == 1.0 { 1.0 } else { 1.0 - 2f64.powf(-10.0 * t) }
}

/// Duration and easing of a widget animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub duration_ms: Millis,
    pub easing: Easing,
}

/// One sampled frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
    /// True once elapsed time reached the duration; `progress` is then exactly 1.
    pub finished: bool,
}

impl Animation {
    pub const fn new(duration_ms: Millis, easing: Easing) -> Self {
        Self { duration_ms, easing }
    }

    /// Sample at `now` for an animation started at `start`.
    pub fn sample(&self, start: Millis, now: Millis) -> Frame {
        let t = if self.duration_ms > 0.0 { (now - start) / self.duration_ms } else { 1.0 };
        if t < 1.0 {
            // A clock that runs backwards never yields negative progress.
            Frame { progress: self.easing.apply(t.max(0.0)), finished: false }
        } else {
            Frame { progress: 1.0, finished: true }
        }
    }
}

/// Lifecycle of a frame task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskState {
    /// Mounted, first frame not yet delivered.
    Pending,
    Running,
    Finished,
    Cancelled,
}

/// What the host should do after delivering a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// Call back on the next display refresh.
    Continue,
    /// Stop scheduling frames for this widget.
    Idle,
}

/// A scheduled animation bound to one mounted widget.
#[derive(Clone, Debug)]
pub struct AnimationTask {
    animation: Animation,
    start: Millis,
    state: TaskState,
}

impl AnimationTask {
    /// Start time is captured at mount.
    pub fn start(animation: Animation, now: Millis) -> Self {
        Self { animation, start: now, state: TaskState::Pending }
    }

    pub fn state(&self) -> TaskState { self.state }

    pub fn started_at(&self) -> Millis { self.start }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TaskState::Pending | TaskState::Running)
    }

    /// Advance to `now`. Returns `None` once the task is finished or cancelled.
    pub fn tick(&mut self, now: Millis) -> Option<Frame> {
        if !self.is_active() {
            return None;
        }
        let frame = self.animation.sample(self.start, now);
        self.state = if frame.finished { TaskState::Finished } else { TaskState::Running };
        Some(frame)
    }

    pub fn cancel(&mut self) {
        if self.is_active() {
            self.state = TaskState::Cancelled;
        }
    }
}
