//! Readiness gate: hotspots stay hidden until a load has settled.

/// Seconds between the first completed load and hotspot projection.
pub const DEFAULT_READY_DELAY: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReadinessState {
    /// No model has finished loading yet.
    Waiting,
    /// A model is in; counting up to the delay.
    Settling { elapsed: f32 },
    Ready,
}

/// One-way gate that opens a fixed delay after the first load completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadinessGate {
    state: ReadinessState,
    delay: f32,
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self::new(DEFAULT_READY_DELAY)
    }
}

impl ReadinessGate {
    #[must_use]
    pub fn new(delay: f32) -> Self {
        Self {
            state: ReadinessState::Waiting,
            delay: delay.max(0.0),
        }
    }

    #[must_use]
    pub fn state(&self) -> ReadinessState {
        self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == ReadinessState::Ready
    }

    /// Starts the countdown. Later loads leave the gate as it is.
    pub fn on_loaded(&mut self) {
        if self.state == ReadinessState::Waiting {
            self.state = ReadinessState::Settling { elapsed: 0.0 };
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if let ReadinessState::Settling { elapsed } = self.state {
            let elapsed = elapsed + dt;
            self.state = if elapsed >= self.delay {
                log::debug!("Scene ready after {elapsed:.2}s");
                ReadinessState::Ready
            } else {
                ReadinessState::Settling { elapsed }
            };
        }
    }

    pub fn mark_ready(&mut self) {
        self.state = ReadinessState::Ready;
    }
}
