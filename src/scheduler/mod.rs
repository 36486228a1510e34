//! Simulator facade and performance metrics.
//!
//! Provides a stateful simulator that owns a process set and caches the
//! results of its latest run, snapshot-based helpers for running one or
//! several algorithms without shared state, and the metrics calculator.
//!
//! # Metrics
//!
//! `Metrics` computes average waiting time, average turnaround time,
//! throughput and CPU utilization from the populated process records and
//! the run's makespan.

mod metrics;
mod simulator;

pub use metrics::{
    Metrics, AVERAGE_TURNAROUND_TIME, AVERAGE_WAITING_TIME, CPU_UTILIZATION, THROUGHPUT,
};
pub use simulator::{compare, simulate, SimulationReport, Simulator};
