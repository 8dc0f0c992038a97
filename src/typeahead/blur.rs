//! Deferred blur handling
//!
//! Losing focus does not close the option panel immediately. A pointer click
//! on an option first blurs the field, so the close is deferred by a short
//! grace period and re-checked on the next tick.

use std::time::{Duration, Instant};

/// Where focus went when the field was blurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurTarget {
    /// Focus moved into the field's own option panel
    Panel,
    /// Focus moved anywhere else, or nowhere
    Elsewhere,
}

/// A close check scheduled by a blur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingBlur {
    deadline: Instant,
    target: BlurTarget,
}

impl PendingBlur {
    pub fn new(now: Instant, grace: Duration, target: BlurTarget) -> Self {
        Self {
            deadline: now + grace,
            target,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn target(&self) -> BlurTarget {
        self.target
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Focus moved into the panel after the blur was scheduled
    pub fn retarget(&mut self, target: BlurTarget) {
        self.target = target;
    }

    /// Whether the panel should close once the check is due
    pub fn closes_panel(&self) -> bool {
        self.target == BlurTarget::Elsewhere
    }
}
