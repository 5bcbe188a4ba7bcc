//! Fluent builder for constructing an [`EpisodeSession`].

use tracing::debug;

use gridcook_core::{CoreError, EpisodeConfig, Keymap};
use gridcook_input::InputListener;
use gridcook_mdp::Stepper;
use gridcook_policy::PolicySet;
use gridcook_trace::{MemorySink, TrajectorySink};

use crate::{
    EpisodeError, EpisodeObserver, EpisodeResult, EpisodeSession, NoopObserver, NoopRenderer,
    Renderer,
};

/// Fluent builder for [`EpisodeSession<M>`].
///
/// # Required inputs
///
/// - [`EpisodeConfig`] — slots, human slot, tick interval, duration, params
/// - `M: Stepper` — the external transition function
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                    |
/// |----------------|--------------------------------------------|
/// | `.policies(p)` | Cycle-policy fallback for every NPC slot   |
/// | `.keymap(k)`   | Arrows + space                             |
/// | `.renderer(r)` | [`NoopRenderer`]                           |
/// | `.observer(o)` | [`NoopObserver`]                           |
/// | `.sink(s)`     | [`MemorySink`]                             |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = EpisodeBuilder::new(config, stepper)
///     .policies(PolicySet::new().with(SlotId(1), Box::new(CyclePolicy::default())))
///     .sink(Box::new(JsonFileSink::new("trajectories")))
///     .build()?;
/// session.run()?;
/// ```
pub struct EpisodeBuilder<M: Stepper> {
    config: EpisodeConfig,
    stepper: M,
    policies: Option<PolicySet<M::State>>,
    keymap: Option<Keymap>,
    renderer: Option<Box<dyn Renderer<M::State>>>,
    observer: Option<Box<dyn EpisodeObserver<M::State>>>,
    sink: Option<Box<dyn TrajectorySink>>,
}

impl<M: Stepper> EpisodeBuilder<M> {
    /// Create a builder with the required inputs.
    pub fn new(config: EpisodeConfig, stepper: M) -> Self {
        EpisodeBuilder {
            config,
            stepper,
            policies: None,
            keymap: None,
            renderer: None,
            observer: None,
            sink: None,
        }
    }

    /// Supply the NPC policy mapping.
    ///
    /// If not called, every non-human slot gets the default cycle policy —
    /// a missing mapping is a fallback, never a failure.
    pub fn policies(mut self, policies: PolicySet<M::State>) -> Self {
        self.policies = Some(policies);
        self
    }

    /// Supply a custom key table (validated at construction by
    /// [`Keymap::new`]).
    pub fn keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = Some(keymap);
        self
    }

    pub fn renderer(mut self, renderer: Box<dyn Renderer<M::State>>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn observer(mut self, observer: Box<dyn EpisodeObserver<M::State>>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn sink(mut self, sink: Box<dyn TrajectorySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate the configuration and assemble a ready-to-start session.
    pub fn build(self) -> EpisodeResult<EpisodeSession<M>> {
        self.config.validate()?;

        let policies = match self.policies {
            Some(policies) => {
                if let Some(max) = policies.max_slot() {
                    if max.index() >= self.config.num_slots {
                        return Err(EpisodeError::Config(CoreError::SlotOutOfRange {
                            slot: max,
                            num_slots: self.config.num_slots,
                        }));
                    }
                }
                policies
            }
            None => {
                debug!("no policy mapping supplied; installing the cycle fallback for NPC slots");
                PolicySet::fallback(self.config.num_slots, self.config.human_slot)
            }
        };

        let listener = InputListener::new(self.keymap.unwrap_or_default());

        Ok(EpisodeSession::from_parts(
            self.config,
            self.stepper,
            policies,
            listener,
            self.renderer.unwrap_or_else(|| Box::new(NoopRenderer)),
            self.observer.unwrap_or_else(|| Box::new(NoopObserver)),
            self.sink.unwrap_or_else(|| Box::new(MemorySink::new())),
        ))
    }
}
