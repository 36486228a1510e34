//! Random workload generation.
//!
//! Produces synthetic process sets for demos, benchmarks and property
//! tests. Generation is deterministic for a seeded RNG.
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::workload::{generate, WorkloadConfig};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let processes = generate(&WorkloadConfig::default().with_count(4), &mut rng).unwrap();
//! assert_eq!(processes.len(), 4);
//! assert_eq!(processes[0].id, "P1");
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Process, Tick};

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival tick (inclusive).
    pub max_arrival: Tick,
    /// Shortest possible burst (inclusive, at least 1).
    pub min_burst: Tick,
    /// Longest possible burst (inclusive).
    pub max_burst: Tick,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
        }
    }
}

impl WorkloadConfig {
    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: Tick) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: Tick, max_burst: Tick) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Checks that the configuration can produce a valid process set.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(SimulationError::invalid_parameter(
                "workload must contain at least one process",
            ));
        }
        if self.min_burst == 0 {
            return Err(SimulationError::invalid_parameter(
                "minimum burst time must be positive",
            ));
        }
        if self.min_burst > self.max_burst {
            return Err(SimulationError::invalid_parameter(format!(
                "burst range is empty: {}..={}",
                self.min_burst, self.max_burst
            )));
        }
        Ok(())
    }
}

/// Generates processes `P1..Pn` with uniformly random arrivals and bursts.
pub fn generate<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Result<Vec<Process>> {
    config.validate()?;

    Ok((1..=config.count)
        .map(|n| {
            let arrival = rng.random_range(0..=config.max_arrival);
            let burst = rng.random_range(config.min_burst..=config.max_burst);
            Process::new(format!("P{n}"), arrival, burst)
        })
        .collect())
}
