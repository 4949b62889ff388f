//! Jittered exponential pacing between paid actions

use std::time::Duration;

use rand::Rng;

const GROWTH: f64 = 1.5;

/// Computes how long to wait before the n-th paid action of a creature.
///
/// The wait is `min * 1.5^n` plus up to `min` of jitter, capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    min_delay: Duration,
    max_delay: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(3),
        }
    }
}

impl Backoff {
    /// Create a backoff; `max_delay` is raised to `min_delay` if below it
    pub fn new(min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            min_delay,
            max_delay: max_delay.max(min_delay),
        }
    }

    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    /// Delay before attempt `attempt`, drawing jitter from `rng`.
    ///
    /// A negative attempt means there is no history yet and yields the
    /// minimum delay.
    pub fn next<R: Rng + ?Sized>(&self, attempt: i64, rng: &mut R) -> Duration {
        if attempt < 0 {
            return self.min_delay;
        }
        self.with_jitter(attempt, rng.r#gen::<f64>())
    }

    /// Delay before attempt `attempt` with jitter fixed at `jitter` (a
    /// fraction of the minimum delay, clamped to `[0, 1)`)
    pub fn with_jitter(&self, attempt: i64, jitter: f64) -> Duration {
        if attempt < 0 {
            return self.min_delay;
        }

        let min = self.min_delay.as_secs_f64();
        let max = self.max_delay.as_secs_f64();
        let base = min * GROWTH.powf(attempt as f64);
        if !base.is_finite() || base >= max {
            return self.max_delay;
        }

        let fraction = if jitter.is_finite() {
            jitter.clamp(0.0, 1.0)
        } else {
            0.0
        };
        // strictly less than a whole min, even after rounding to nanoseconds
        let jitter = self
            .min_delay
            .mul_f64(fraction)
            .min(self.min_delay.saturating_sub(Duration::from_nanos(1)));

        (Duration::from_secs_f64(base) + jitter).min(self.max_delay)
    }
}
