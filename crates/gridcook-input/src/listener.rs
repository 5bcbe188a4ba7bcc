//! Session-scoped input listener and its cloneable event feeder.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gridcook_core::{Action, Key, Keymap};

use crate::ActionLatch;

struct ListenerShared {
    latch: ActionLatch,
    attached: AtomicBool,
}

/// Owns the key table and the one-shot latch for exactly one episode.
///
/// The session attaches the listener at `start()` and detaches it at
/// `stop()`.  A detached listener drops every event, so no key press can
/// leak into a later session through a stale [`InputHandle`].
pub struct InputListener {
    shared: Arc<ListenerShared>,
    keymap: Keymap,
}

impl InputListener {
    pub fn new(keymap: Keymap) -> Self {
        InputListener {
            shared: Arc::new(ListenerShared {
                latch: ActionLatch::new(),
                attached: AtomicBool::new(false),
            }),
            keymap,
        }
    }

    /// Begin accepting events.
    pub fn attach(&self) {
        self.shared.attached.store(true, Ordering::SeqCst);
    }

    /// Stop accepting events and close the capture window.  Idempotent.
    pub fn detach(&self) {
        self.shared.attached.store(false, Ordering::SeqCst);
        self.shared.latch.disarm();
    }

    pub fn is_attached(&self) -> bool {
        self.shared.attached.load(Ordering::SeqCst)
    }

    /// Open the one-shot capture window for the next tick.
    /// No-op while detached.
    pub fn arm(&self) {
        if self.is_attached() {
            self.shared.latch.arm();
        }
    }

    /// Close the capture window without detaching.
    pub fn disarm(&self) {
        self.shared.latch.disarm();
    }

    /// Remove the action latched since the last `arm`, if any.
    pub fn take(&self) -> Option<Action> {
        self.shared.latch.take()
    }

    /// A cloneable feeder for whatever thread produces key events.
    pub fn handle(&self) -> InputHandle {
        InputHandle {
            shared: Arc::clone(&self.shared),
            keymap: self.keymap.clone(),
        }
    }
}

/// Cloneable event feeder handed to the key-event producer.
#[derive(Clone)]
pub struct InputHandle {
    shared: Arc<ListenerShared>,
    keymap: Keymap,
}

impl InputHandle {
    /// Feed one key press.
    ///
    /// Unrecognized keys are ignored with no state change; recognized keys
    /// latch at most once per armed window.  Returns whether this press was
    /// captured.
    pub fn press(&self, key: Key) -> bool {
        if !self.shared.attached.load(Ordering::SeqCst) {
            return false;
        }
        match self.keymap.resolve(key) {
            Some(action) => self.offer(action),
            None => false,
        }
    }

    /// Feed an already-resolved action (scripted drivers, tests).
    pub fn offer(&self, action: Action) -> bool {
        if !self.shared.attached.load(Ordering::SeqCst) {
            return false;
        }
        self.shared.latch.offer(action)
    }
}
