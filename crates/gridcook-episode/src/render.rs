//! Renderer seam — fire-and-forget drawing callbacks.

/// A drawing surface for board state, score, and the countdown.
///
/// Every method is fire-and-forget: no return value is consumed and the
/// tick proceeds regardless of what the renderer does.  The session calls
/// `draw_*` synchronously once at `start()` (before the first tick) and
/// once per tick; `close` fires once at termination.
pub trait Renderer<S>: Send {
    fn draw_state(&mut self, _state: &S) {}
    fn draw_score(&mut self, _score: f64) {}
    fn draw_time_left(&mut self, _secs: u64) {}

    /// The episode is over; tear down the surface.
    fn close(&mut self) {}
}

/// A [`Renderer`] that draws nothing — the builder default.
pub struct NoopRenderer;

impl<S> Renderer<S> for NoopRenderer {}
