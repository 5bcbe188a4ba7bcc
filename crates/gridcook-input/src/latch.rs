//! One-shot action latch shared between the input thread and the tick loop.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use gridcook_core::Action;

/// Empty-cell sentinel; no `Action` encodes to this value.
const EMPTY: u8 = u8::MAX;

/// Lock-free one-shot cell carrying at most one pending human action.
///
/// Arming opens a window for exactly one capture: the first action offered
/// while armed is stored and the latch disarms itself, so any number of
/// further presses before the next tick are dropped.  `take` empties the
/// cell without reopening the window.
#[derive(Debug)]
pub struct ActionLatch {
    armed: AtomicBool,
    cell: AtomicU8,
}

impl Default for ActionLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLatch {
    pub fn new() -> Self {
        ActionLatch {
            armed: AtomicBool::new(false),
            cell: AtomicU8::new(EMPTY),
        }
    }

    /// Open the capture window, discarding any stale value.  Idempotent.
    pub fn arm(&self) {
        self.cell.store(EMPTY, Ordering::SeqCst);
        self.armed.store(true, Ordering::SeqCst);
    }

    /// Close the capture window.  Idempotent; a value already latched
    /// survives until the next `take` or `arm`.
    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    /// Offer an action.  Latches it and closes the window if the window is
    /// open; returns whether the offer was accepted.
    ///
    /// The `swap` makes arm-consumption atomic: of any number of racing
    /// offers, exactly one wins.
    pub fn offer(&self, action: Action) -> bool {
        if self.armed.swap(false, Ordering::SeqCst) {
            self.cell.store(action.code(), Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Remove and return the latched action, if any.
    pub fn take(&self) -> Option<Action> {
        Action::from_code(self.cell.swap(EMPTY, Ordering::SeqCst))
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}
