//! Search limits: a ply cap plus an optional wall-clock budget.
//!
//! The rules core has no cancellation of its own. Engines poll a
//! `SearchClock` between recursive calls and unwind when it reports stop,
//! returning the best move completed so far. Because every search works on
//! private board clones, abandoning one mid-way leaves nothing to undo.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// How often, in nodes, engines consult the wall clock.
pub const CLOCK_CHECK_INTERVAL: u64 = 256;

#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies; a whole capture chain is one ply.
    pub depth: u8,
    /// Deadline and cancel flag; carries the per-move budget, if any.
    pub clock: SearchClock,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            clock: SearchClock::new(None),
        }
    }

    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            clock: SearchClock::new(Some(move_time)),
        }
    }
}

/// Deadline plus a cancel flag shared by every clone.
///
/// The clock starts when it is created, so limits should be built right
/// before the search they govern. A driver thread holding a clone can call
/// `cancel` to abandon a running search.
#[derive(Debug, Clone)]
pub struct SearchClock {
    cancelled: Arc<AtomicBool>,
    started: Instant,
    budget: Option<Duration>,
}

impl SearchClock {
    pub fn new(budget: Option<Duration>) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            started: Instant::now(),
            budget,
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Reads the clock, latching the cancel flag once the budget is spent.
    pub fn expired(&self) -> bool {
        if self.is_cancelled() {
            return true;
        }
        match self.budget {
            Some(budget) if self.started.elapsed() >= budget => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    /// Polls `expired` only every `CLOCK_CHECK_INTERVAL` nodes; the flag
    /// itself is checked every time.
    #[inline]
    pub fn poll(&self, nodes: u64) -> bool {
        if nodes % CLOCK_CHECK_INTERVAL == 0 {
            self.expired()
        } else {
            self.is_cancelled()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
