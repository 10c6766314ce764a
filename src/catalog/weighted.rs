use std::path::Path;
use rand::Rng;
use tracing::{debug, instrument};
use crate::domain::{Category, Scenario};
use super::black_friday;
use super::error::CatalogError;

/// Immutable, non-empty set of weighted scenarios.
///
/// Selection is a binary search over cumulative weights, so the probability of
/// picking a scenario is `weight / total_weight`. The catalog holds no mutable
/// state; every caller brings its own random source.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
    cumulative: Vec<u64>,
    total_weight: u64,
}

impl ScenarioCatalog {
    /// Builds a catalog after validating every scenario.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, CatalogError> {
        if scenarios.is_empty() {
            return Err(CatalogError::Empty);
        }
        for scenario in &scenarios {
            scenario.validate()?;
        }
        Ok(Self::build(scenarios))
    }

    /// The Black Friday traffic mix: half beauty, the rest split evenly
    /// between electronics, clothing and home.
    pub fn black_friday() -> Self {
        Self::build(black_friday::scenarios())
    }

    /// Loads a JSON array of scenarios and validates it.
    #[instrument(skip(path), fields(catalog = %path.as_ref().display()))]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let scenarios: Vec<Scenario> = serde_json::from_str(&raw).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(scenario_count = scenarios.len(), "Parsed catalog file");
        Self::new(scenarios)
    }

    // u32 weights summed into a u64 cannot overflow.
    fn build(scenarios: Vec<Scenario>) -> Self {
        let cumulative = running_totals(&scenarios);
        let total_weight = cumulative.last().copied().unwrap_or_default();
        Self { scenarios, cumulative, total_weight }
    }

    /// Picks a scenario with probability proportional to its weight.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> &Scenario {
        let ticket = rng.gen_range(0..self.total_weight);
        let index = self.cumulative.partition_point(|&bound| bound <= ticket);
        &self.scenarios[index]
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Share of selections expected to land on `category`.
    pub fn probability(&self, category: Category) -> f64 {
        let weight: u64 = self
            .scenarios
            .iter()
            .filter(|s| s.category == category)
            .map(|s| u64::from(s.weight))
            .sum();
        weight as f64 / self.total_weight as f64
    }
}

fn running_totals(scenarios: &[Scenario]) -> Vec<u64> {
    scenarios
        .iter()
        .scan(0u64, |acc, s| {
            *acc += u64::from(s.weight);
            Some(*acc)
        })
        .collect()
}
