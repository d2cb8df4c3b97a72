//! Cosmetic loading progress.
//!
//! The real fetch reports no progress, so the bar is simulated: every tick adds
//! a random step, capped below completion until the fetch settles. The value
//! never decreases.

use super::messages::Messages;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Loaded from the `[progress]` config table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgressOptions {
    /// Show the simulated progress bar while loading.
    pub enabled: bool,
    /// Interval between progress ticks.
    pub tick_ms: u64,
    /// Upper bound (exclusive) of the random step added per tick, in percent.
    pub max_step: f64,
    /// The simulated value never goes past this until the fetch settles.
    pub ceiling: f64,
    /// Pause on "complete" before the board replaces the loading view.
    pub completion_delay_ms: u64,
    /// Fixed RNG seed, for reproducible progress sequences.
    pub seed: Option<u64>,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_ms: 200,
            max_step: 15.0,
            ceiling: 90.0,
            completion_delay_ms: 500,
            seed: None,
        }
    }
}

/// Loading phase shown under the bar, derived from the simulated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Fetching,
    Analyzing,
    Collecting,
}

impl Phase {
    pub fn for_percent(percent: f64) -> Self {
        if percent < 30.0 {
            Self::Fetching
        } else if percent < 60.0 {
            Self::Analyzing
        } else {
            Self::Collecting
        }
    }

    pub fn message(self, messages: &Messages) -> &str {
        match self {
            Self::Fetching => &messages.phase_fetching,
            Self::Analyzing => &messages.phase_analyzing,
            Self::Collecting => &messages.phase_collecting,
        }
    }
}

/// Monotonic, capped random walk from 0 towards the ceiling.
#[derive(Debug)]
pub struct SimulatedProgress {
    percent: f64,
    max_step: f64,
    ceiling: f64,
    rng: StdRng,
}

impl SimulatedProgress {
    pub fn new(options: &ProgressOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            percent: 0.0,
            max_step: finite_or_zero(options.max_step).max(0.0),
            ceiling: finite_or_zero(options.ceiling).clamp(0.0, 100.0),
            rng,
        }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Rounded value for display.
    pub fn display_percent(&self) -> u8 {
        self.percent.round().clamp(0.0, 100.0) as u8
    }

    pub fn phase(&self) -> Phase {
        Phase::for_percent(self.percent)
    }

    /// Add one random step, staying at or below the ceiling.
    pub fn advance(&mut self) -> f64 {
        if self.percent < self.ceiling && self.max_step > 0.0 {
            let step = self.rng.random_range(0.0..self.max_step);
            self.percent = (self.percent + step).min(self.ceiling);
        }
        self.percent
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// The repeating timer driving [`SimulatedProgress`].
///
/// Owned by the presenter for the duration of one fetch. Dropping it cancels
/// all further ticks.
#[derive(Debug)]
pub struct ProgressTimer {
    interval: Interval,
    progress: SimulatedProgress,
}

impl ProgressTimer {
    /// Start ticking. Must be called from within a Tokio runtime.
    ///
    /// The first tick fires one period after start, not immediately.
    pub fn start(options: &ProgressOptions) -> Self {
        let period = Duration::from_millis(options.tick_ms.max(1));
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval,
            progress: SimulatedProgress::new(options),
        }
    }

    /// Wait for the next tick and advance the simulated value.
    pub async fn tick(&mut self) -> &SimulatedProgress {
        self.interval.tick().await;
        self.progress.advance();
        &self.progress
    }

    pub fn progress(&self) -> &SimulatedProgress {
        &self.progress
    }
}
