//! One-shot countdown timers owned by the engine.
//!
//! The engine's only deferred effects — clearing a desk alert, unlocking the
//! results screen — are deadlines held in plain state and advanced by
//! [`SessionEngine::update`](crate::engine::SessionEngine::update). Starting
//! a timer that is already pending replaces the old deadline, so a superseded
//! effect can never fire late against a newer state.

/// A cancellable one-shot countdown. Inert until started.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayTimer {
    remaining: Option<f32>,
}

impl DelayTimer {
    /// Arm (or re-arm) the timer. Any pending deadline is replaced.
    pub fn start(&mut self, seconds: f32) {
        self.remaining = Some(seconds);
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `delta` seconds. Returns true exactly once, on the call
    /// that crosses the deadline.
    pub fn advance(&mut self, delta: f32) -> bool {
        match self.remaining {
            Some(left) if left <= delta => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - delta);
                false
            }
            None => false,
        }
    }
}
