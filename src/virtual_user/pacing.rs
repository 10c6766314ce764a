use std::time::Duration;
use rand::Rng;

/// Uniform think time drawn before every purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    min: Duration,
    max: Duration,
}

impl Pacing {
    pub const DEFAULT_MIN: Duration = Duration::from_millis(500);
    pub const DEFAULT_MAX: Duration = Duration::from_secs(2);

    /// `None` when `min > max`.
    pub fn new(min: Duration, max: Duration) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn next_pause<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let secs = rng.gen_range(self.min.as_secs_f64()..=self.max.as_secs_f64());
        Duration::from_secs_f64(secs).clamp(self.min, self.max)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}
