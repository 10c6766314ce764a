use std::collections::BTreeMap;
use std::time::Duration;

/// What happened to one dispatched purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub categoria: i32,
    /// HTTP status, or `None` when the request never got a response.
    pub status: Option<u16>,
    pub latency: Duration,
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(200..=299))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats {
    pub dispatched: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub total_latency: Duration,
}

impl CategoryStats {
    pub fn record(&mut self, outcome: &DispatchOutcome) {
        self.dispatched += 1;
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.total_latency += outcome.latency;
    }

    pub fn mean_latency(&self) -> Option<Duration> {
        u32::try_from(self.dispatched)
            .ok()
            .filter(|&n| n > 0)
            .map(|n| self.total_latency / n)
    }
}

/// Point-in-time copy of every category's tallies, keyed by category code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSnapshot {
    pub per_category: BTreeMap<i32, CategoryStats>,
}

impl StatsSnapshot {
    pub fn dispatched(&self) -> u64 {
        self.per_category.values().map(|s| s.dispatched).sum()
    }

    pub fn succeeded(&self) -> u64 {
        self.per_category.values().map(|s| s.succeeded).sum()
    }

    pub fn failed(&self) -> u64 {
        self.per_category.values().map(|s| s.failed).sum()
    }

    /// Fraction of dispatches that got a non-2xx answer or none at all.
    pub fn failure_rate(&self) -> f64 {
        match self.dispatched() {
            0 => 0.0,
            n => self.failed() as f64 / n as f64,
        }
    }
}
