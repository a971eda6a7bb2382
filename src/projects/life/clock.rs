use std::thread;
use std::time::Duration;

use log::info;

use super::history::GenerationHistory;
use super::transition::advance;

/// Run/pause state plus a coarse throttle on how often a step may happen.
#[derive(Debug)]
pub struct SimulationClock {
    running: bool,
    delay: Duration,
}

impl SimulationClock {
    pub fn new(delay: Duration) -> Self {
        Self {
            running: false,
            delay,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        match self.running {
            true => info!("running"),
            false => info!("paused"),
        }
        self.running
    }

    /// Step once if running, then block the caller for the configured delay.
    /// Returns whether a step happened.
    pub fn tick(&self, history: &mut GenerationHistory) -> bool {
        if !self.running {
            return false;
        }
        advance(history);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        true
    }
}
