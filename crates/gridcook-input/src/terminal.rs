//! Crossterm-backed key source (`terminal` feature).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use gridcook_core::Key;

use crate::InputHandle;

/// How long each poll blocks before re-checking the shutdown flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Background thread feeding terminal key events into an [`InputHandle`].
///
/// `Esc` raises the supplied quit flag instead of being forwarded, giving
/// terminal front-ends a way out that doesn't depend on the episode timer.
/// Raw-mode setup is the front-end's concern; this thread only reads
/// events.
pub struct TerminalKeys {
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TerminalKeys {
    /// Spawn the polling thread.
    pub fn spawn(handle: InputHandle, quit: Arc<AtomicBool>) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let thread_shutdown = Arc::clone(&shutdown);
        let thread = std::thread::spawn(move || {
            while !thread_shutdown.load(Ordering::SeqCst) {
                match event::poll(POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    // The terminal went away; nothing left to listen to.
                    Err(_) => break,
                }
                let Ok(Event::Key(key)) = event::read() else {
                    continue;
                };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => quit.store(true, Ordering::SeqCst),
                    code => {
                        if let Some(sym) = translate(code) {
                            handle.press(sym);
                        }
                    }
                }
            }
        });
        TerminalKeys {
            shutdown,
            thread: Some(thread),
        }
    }

    /// Signal the thread and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Translate a crossterm key code into the symbolic alphabet.
/// Keys with no symbolic equivalent return `None` and are dropped.
fn translate(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}
