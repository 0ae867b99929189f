//! The reveal-phase countdown ticker.
//!
//! The engine owns the ticker; the host scheduler owns real time. While
//! [`CountdownTicker::is_running`] is true, the host calls
//! [`crate::GameEngine::tick`] once per second. The ticker is a start/stop
//! toggle, so there is at most one logical ticker per engine and a second
//! `start` while running cannot produce a double-speed countdown.

/// Start/stop toggle for the once-per-second reveal countdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownTicker {
    running: bool,
}

impl CountdownTicker {
    /// Create a stopped ticker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the ticker. Idempotent: starting a running ticker is a no-op.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop the ticker. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// True while the host should deliver one tick per second.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
