//! Unit tests for gridcook-input.

use std::sync::Arc;

use gridcook_core::{Action, Key, Keymap};

use crate::{ActionLatch, InputListener};

fn attached_listener() -> InputListener {
    let listener = InputListener::new(Keymap::default());
    listener.attach();
    listener
}

// ── ActionLatch ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod latch_tests {
    use super::*;

    #[test]
    fn first_offer_wins_the_window() {
        let latch = ActionLatch::new();
        latch.arm();
        assert!(latch.offer(Action::Interact));
        assert!(!latch.offer(Action::North), "window must close after one capture");
        assert_eq!(latch.take(), Some(Action::Interact));
    }

    #[test]
    fn offers_while_disarmed_are_dropped() {
        let latch = ActionLatch::new();
        assert!(!latch.offer(Action::North));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn take_empties_the_cell() {
        let latch = ActionLatch::new();
        latch.arm();
        latch.offer(Action::South);
        assert_eq!(latch.take(), Some(Action::South));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn rearm_discards_stale_value() {
        let latch = ActionLatch::new();
        latch.arm();
        latch.offer(Action::South);
        latch.arm(); // new window; the untaken South is stale
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn disarm_is_idempotent_and_preserves_latched_value() {
        let latch = ActionLatch::new();
        latch.arm();
        latch.offer(Action::East);
        latch.disarm();
        latch.disarm();
        assert_eq!(latch.take(), Some(Action::East));
    }

    #[test]
    fn racing_offers_capture_exactly_one() {
        let latch = Arc::new(ActionLatch::new());
        latch.arm();
        let accepted: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let latch = Arc::clone(&latch);
                    scope.spawn(move || latch.offer(Action::North) as usize)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });
        assert_eq!(accepted, 1);
        assert_eq!(latch.take(), Some(Action::North));
    }
}

// ── InputListener ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod listener_tests {
    use super::*;

    #[test]
    fn recognized_key_latches_once_per_window() {
        let listener = attached_listener();
        let handle = listener.handle();
        listener.arm();
        assert!(handle.press(Key::Space));
        assert!(!handle.press(Key::Up), "second press must be dropped");
        assert_eq!(listener.take(), Some(Action::Interact));
    }

    #[test]
    fn unrecognized_key_is_ignored_without_closing_the_window() {
        let listener = attached_listener();
        let handle = listener.handle();
        listener.arm();
        assert!(!handle.press(Key::Char('q')));
        // The window is still open for a recognized key.
        assert!(handle.press(Key::Down));
        assert_eq!(listener.take(), Some(Action::South));
    }

    #[test]
    fn detached_listener_drops_everything() {
        let listener = InputListener::new(Keymap::default());
        let handle = listener.handle();
        listener.arm(); // no-op while detached
        assert!(!handle.press(Key::Up));
        assert_eq!(listener.take(), None);
    }

    #[test]
    fn detach_is_idempotent_and_closes_the_window() {
        let listener = attached_listener();
        let handle = listener.handle();
        listener.arm();
        listener.detach();
        listener.detach();
        assert!(!handle.press(Key::Up));
        assert!(!listener.is_attached());
    }

    #[test]
    fn stale_handle_cannot_reach_a_detached_session() {
        let listener = attached_listener();
        let handle = listener.handle();
        listener.arm();
        listener.detach();
        // Handle survives but the session is gone — events must vanish.
        assert!(!handle.offer(Action::Interact));
        assert_eq!(listener.take(), None);
    }
}
