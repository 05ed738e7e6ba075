/// Monotonic elapsed-time accumulator driven by the host's frame callback.
///
/// Deltas are taken as given: there is no clamping and no fixed-timestep
/// catch-up, so a long gap (hidden tab) shows up as one large step.
/// Pausing is the owner's business: a paused owner simply stops calling
/// [`SimulationClock::advance`].
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    /// Total seconds accumulated.
    elapsed: f64,
    /// The most recent delta in seconds.
    last_delta: f32,
    /// Number of deltas applied.
    ticks: u64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds and return it. Negative or non-finite deltas
    /// are treated as zero so elapsed time never runs backwards.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += dt as f64;
        self.last_delta = dt;
        self.ticks += 1;
        dt
    }

    /// Total elapsed seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Total elapsed milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed * 1000.0
    }

    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Timing for the frame currently being processed, filled in by the runner
/// before `Game::update`. Wall time keeps running while a game is paused.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Host delta for this frame in seconds.
    pub dt: f32,
    /// Wall-clock seconds since the runner started ticking.
    pub wall_elapsed: f64,
    /// Same instant in milliseconds.
    pub now_ms: f64,
    /// Frame number, starting at 1 for the first tick.
    pub frame: u64,
}

impl FrameTime {
    pub fn from_clock(clock: &SimulationClock) -> Self {
        Self {
            dt: clock.last_delta(),
            wall_elapsed: clock.elapsed(),
            now_ms: clock.elapsed_ms(),
            frame: clock.ticks(),
        }
    }
}
