//! terminal — play a gridcook episode live from the keyboard.
//!
//! Arrows prep and discard, space serves, Esc quits early.  The trajectory
//! lands under `output/terminal/` either way.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::terminal;

use gridcook_core::{EpisodeConfig, SlotId};
use gridcook_episode::{EpisodeBuilder, Renderer};
use gridcook_input::TerminalKeys;
use gridcook_mdp::{ToyKitchen, ToyState};
use gridcook_policy::{CyclePolicy, PolicySet};
use gridcook_trace::JsonFileSink;

const OUTPUT_DIR: &str = "output/terminal";

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Single-line status renderer.
///
/// Board and score arrive before the countdown each tick, so the line is
/// assembled across the three draw calls and printed in the last one.
#[derive(Default)]
struct LineRenderer {
    board: String,
    score: f64,
}

impl Renderer<ToyState> for LineRenderer {
    fn draw_state(&mut self, state: &ToyState) {
        self.board = format!(
            "prep {:?} | orders {} | served {}",
            state.prep,
            state.pending_orders.len(),
            state.served,
        );
    }

    fn draw_score(&mut self, score: f64) {
        self.score = score;
    }

    fn draw_time_left(&mut self, secs: u64) {
        print!("\r{} | score {:>5} | {:>3}s left   ", self.board, self.score, secs);
        let _ = io::stdout().flush();
    }

    fn close(&mut self) {
        println!();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // 1. Configuration: human on slot 0, cycle NPC on slot 1.
    let config = EpisodeConfig {
        tick_interval_ms: 150,
        episode_duration_secs: 60,
        ..Default::default()
    };
    let stepper = ToyKitchen::new(config.num_slots, &config.params);
    let policies = PolicySet::new().with(SlotId(1), Box::new(CyclePolicy::default()));

    let mut session = EpisodeBuilder::new(config, stepper)
        .policies(policies)
        .renderer(Box::new(LineRenderer::default()))
        .sink(Box::new(JsonFileSink::new(OUTPUT_DIR)))
        .build()?;

    // 2. Keyboard: raw mode for unbuffered keys; Esc raises the quit flag.
    terminal::enable_raw_mode()?;
    let quit = Arc::new(AtomicBool::new(false));
    let keys = TerminalKeys::spawn(session.input_handle(), Arc::clone(&quit));

    // 3. Bridge the quit flag to the session's stop handle.
    let stop = session.stop_handle();
    let bridge_quit = Arc::clone(&quit);
    let bridge = thread::spawn(move || {
        while !bridge_quit.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(50));
        }
        stop.raise();
    });

    // 4. Play.
    let outcome = session.run();

    // 5. Teardown, even on a faulted run.
    quit.store(true, Ordering::SeqCst);
    keys.stop();
    let _ = bridge.join();
    terminal::disable_raw_mode()?;
    outcome?;

    println!(
        "final score {} over {} ticks; trajectory under {OUTPUT_DIR}/",
        session.score(),
        session.tick_count(),
    );
    Ok(())
}
