//! Simulation performance metrics.
//!
//! Computes the standard CPU scheduling indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Waiting Time | mean(turnaround - burst) |
//! | Average Turnaround Time | mean(completion - arrival) |
//! | Throughput | processes / makespan |
//! | CPU Utilization (%) | 100 × Σ burst / makespan |
//! | Average Response Time | mean(first dispatch - arrival) |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Process, Tick};

pub const AVERAGE_WAITING_TIME: &str = "Average Waiting Time";
pub const AVERAGE_TURNAROUND_TIME: &str = "Average Turnaround Time";
pub const THROUGHPUT: &str = "Throughput";
pub const CPU_UTILIZATION: &str = "CPU Utilization (%)";

/// Aggregate performance of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean time spent ready but not running.
    pub average_waiting_time: f64,
    /// Mean time from arrival to completion.
    pub average_turnaround_time: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Busy share of the makespan, in percent (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Mean time from arrival to first dispatch.
    pub average_response_time: f64,
    /// Makespan of the run.
    pub total_time: Tick,
}

impl Metrics {
    /// Computes metrics from completed processes and the run's makespan.
    ///
    /// # Errors
    /// - [`SimulationError::EmptyInput`] when `processes` is empty.
    /// - [`SimulationError::InvalidParameter`] when `total_time` is zero.
    /// - [`SimulationError::IncompleteRun`] when a process never completed.
    pub fn calculate(processes: &[Process], total_time: Tick) -> Result<Self> {
        if processes.is_empty() {
            return Err(SimulationError::EmptyInput);
        }
        if total_time == 0 {
            return Err(SimulationError::invalid_parameter(
                "total time must be positive",
            ));
        }

        let mut total_waiting: Tick = 0;
        let mut total_turnaround: Tick = 0;
        let mut total_response: Tick = 0;
        let mut total_burst: Tick = 0;

        for process in processes {
            let (Some(turnaround), Some(waiting), Some(response)) = (
                process.turnaround_time(),
                process.waiting_time(),
                process.response_time(),
            ) else {
                return Err(SimulationError::IncompleteRun(process.id.clone()));
            };
            total_turnaround += turnaround;
            total_waiting += waiting;
            total_response += response;
            total_burst += process.burst_time;
        }

        let count = processes.len() as f64;
        let total = total_time as f64;

        Ok(Self {
            average_waiting_time: total_waiting as f64 / count,
            average_turnaround_time: total_turnaround as f64 / count,
            throughput: count / total,
            cpu_utilization: total_burst as f64 * 100.0 / total,
            average_response_time: total_response as f64 / count,
            total_time,
        })
    }

    /// The four headline metrics as `(name, value)` pairs.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            (AVERAGE_WAITING_TIME, self.average_waiting_time),
            (AVERAGE_TURNAROUND_TIME, self.average_turnaround_time),
            (THROUGHPUT, self.throughput),
            (CPU_UTILIZATION, self.cpu_utilization),
        ]
    }

    /// Named mapping view of [`Metrics::entries`].
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.entries()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    /// Looks up a headline metric by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}

impl std::fmt::Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.entries() {
            writeln!(f, "{name}: {value:.2}")?;
        }
        Ok(())
    }
}
