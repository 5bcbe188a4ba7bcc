//! headless — scripted episode demo for the gridcook episode runner.
//!
//! Runs a short real-time episode with a scripted "human" thread replaying
//! a fixed key sequence against a cycle-policy NPC, then writes the
//! trajectory JSON under `output/headless/`.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use gridcook_core::{EpisodeConfig, Key, SlotId};
use gridcook_episode::{EpisodeBuilder, EpisodeObserver, TickRecord};
use gridcook_mdp::{ToyKitchen, ToyState};
use gridcook_policy::{CyclePolicy, PolicySet};
use gridcook_trace::JsonFileSink;

// ── Constants ─────────────────────────────────────────────────────────────────

const TICK_INTERVAL_MS: u64 = 100;
const EPISODE_SECS:     u64 = 10;
const OUTPUT_DIR:       &str = "output/headless";

/// Key sequence the fake human replays, one press per tick interval:
/// three units of prep, serve, one discard, serve again.
const SCRIPT: [Key; 6] = [Key::Up, Key::Up, Key::Up, Key::Space, Key::Down, Key::Space];

// ── Observer ──────────────────────────────────────────────────────────────────

struct DeliveryLogger;

impl EpisodeObserver<ToyState> for DeliveryLogger {
    fn on_tick(&mut self, record: &TickRecord<'_, ToyState>) {
        if record.reward != 0.0 {
            info!(
                tick = %record.tick,
                reward = record.reward,
                score = record.score,
                "delivery"
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Configuration: two slots, scripted keyboard on slot 0.
    let config = EpisodeConfig {
        tick_interval_ms: TICK_INTERVAL_MS,
        episode_duration_secs: EPISODE_SECS,
        ..Default::default()
    };

    // 2. Stepper and NPC mapping.
    let stepper = ToyKitchen::new(config.num_slots, &config.params);
    let policies = PolicySet::new().with(SlotId(1), Box::new(CyclePolicy::default()));

    // 3. Session with a JSON-file sink.
    let mut session = EpisodeBuilder::new(config, stepper)
        .policies(policies)
        .observer(Box::new(DeliveryLogger))
        .sink(Box::new(JsonFileSink::new(OUTPUT_DIR)))
        .build()?;

    // 4. Scripted human: one press per tick interval for the whole episode.
    //    Presses after termination land on a detached listener and vanish.
    let handle = session.input_handle();
    let presses = (EPISODE_SECS * 1_000 / TICK_INTERVAL_MS) as usize;
    let typist = thread::spawn(move || {
        for &key in SCRIPT.iter().cycle().take(presses) {
            handle.press(key);
            thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
        }
    });

    // 5. Run to the timeout.
    session.run()?;
    let _ = typist.join();

    // 6. Summary.
    println!(
        "episode complete: {} ticks, score {}, trajectory under {OUTPUT_DIR}/",
        session.tick_count(),
        session.score(),
    );
    Ok(())
}
