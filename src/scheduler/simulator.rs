//! Stateful simulator facade.
//!
//! `Simulator` owns a process set and the results of its most recent
//! run. Each run:
//!
//! 1. Clears cached results.
//! 2. Validates the process set.
//! 3. Resets every process and runs the selected algorithm.
//! 4. Computes metrics from the populated process records.
//!
//! For service contexts, [`simulate`] and [`compare`] run on an
//! independent snapshot so callers never share mutable process state.

use serde::{Deserialize, Serialize};

use super::Metrics;
use crate::algorithms::{self, Algorithm};
use crate::error::Result;
use crate::models::{Process, Tick, Timeline};

/// Complete result of one run on a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Algorithm that produced this report.
    pub algorithm: Algorithm,
    /// Execution steps in order.
    pub steps: Timeline,
    /// Aggregate metrics.
    pub metrics: Metrics,
    /// Processes with their final derived state.
    pub processes: Vec<Process>,
    /// Makespan.
    pub total_time: Tick,
}

/// CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::scheduler::Simulator;
///
/// let mut sim = Simulator::new();
/// sim.add("A", 0, 5);
/// sim.add("B", 1, 3);
/// sim.add("C", 2, 8);
///
/// let steps = sim.run_fcfs().unwrap();
/// assert_eq!(steps.len(), 3);
/// assert_eq!(sim.metrics().unwrap().total_time, 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    processes: Vec<Process>,
    last_steps: Option<Timeline>,
    last_metrics: Option<Metrics>,
}

impl Simulator {
    /// Creates an empty simulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator over an existing process set.
    pub fn with_processes(processes: Vec<Process>) -> Self {
        Self {
            processes,
            ..Self::default()
        }
    }

    /// Appends a process.
    pub fn add_process(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Appends a process built from its inputs.
    pub fn add(&mut self, id: impl Into<String>, arrival_time: Tick, burst_time: Tick) {
        self.add_process(Process::new(id, arrival_time, burst_time));
    }

    /// Empties the process set and any cached results.
    pub fn clear_processes(&mut self) {
        self.processes.clear();
        self.clear_results();
    }

    /// Runs `algorithm` over the process set.
    ///
    /// # Errors
    /// - [`SimulationError::EmptyInput`](crate::SimulationError::EmptyInput) if no processes were added.
    /// - [`SimulationError::InvalidInput`](crate::SimulationError::InvalidInput) if the process set fails validation.
    /// - [`SimulationError::InvalidParameter`](crate::SimulationError::InvalidParameter) for a zero Round-Robin quantum.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<&Timeline> {
        self.clear_results();

        let (steps, metrics) = execute(algorithm, &mut self.processes)?;
        self.last_metrics = Some(metrics);
        Ok(&*self.last_steps.insert(steps))
    }

    /// Runs First-Come-First-Served. See [`Simulator::run`].
    pub fn run_fcfs(&mut self) -> Result<&Timeline> {
        self.run(Algorithm::Fcfs)
    }

    /// Runs non-preemptive Shortest-Job-First. See [`Simulator::run`].
    pub fn run_sjf(&mut self) -> Result<&Timeline> {
        self.run(Algorithm::Sjf)
    }

    /// Runs Shortest-Remaining-Time-First. See [`Simulator::run`].
    pub fn run_srtf(&mut self) -> Result<&Timeline> {
        self.run(Algorithm::Srtf)
    }

    /// Runs Round-Robin with a fixed `quantum`.
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`](crate::SimulationError::InvalidParameter)
    /// if `quantum` is zero, plus the input errors of [`Simulator::run`].
    pub fn run_round_robin(&mut self, quantum: Tick) -> Result<&Timeline> {
        self.run(Algorithm::round_robin(quantum))
    }

    /// Metrics of the most recent successful run.
    pub fn metrics(&self) -> Option<&Metrics> {
        self.last_metrics.as_ref()
    }

    /// Steps of the most recent successful run.
    pub fn last_steps(&self) -> Option<&Timeline> {
        self.last_steps.as_ref()
    }

    /// The process set, including derived state from the last run.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether no process was added.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    fn clear_results(&mut self) {
        self.last_steps = None;
        self.last_metrics = None;
    }
}

/// Runs `algorithm` on a copy of `processes`.
pub fn simulate(processes: &[Process], algorithm: Algorithm) -> Result<SimulationReport> {
    let mut snapshot = processes.to_vec();
    let (steps, metrics) = execute(algorithm, &mut snapshot)?;
    Ok(SimulationReport {
        algorithm,
        total_time: metrics.total_time,
        steps,
        metrics,
        processes: snapshot,
    })
}

/// Runs every algorithm in `algorithms` on its own copy of `processes`.
///
/// Stops at the first failing algorithm.
pub fn compare(processes: &[Process], algorithms: &[Algorithm]) -> Result<Vec<SimulationReport>> {
    algorithms
        .iter()
        .map(|&algorithm| simulate(processes, algorithm))
        .collect()
}

fn execute(algorithm: Algorithm, processes: &mut [Process]) -> Result<(Timeline, Metrics)> {
    let outcome = algorithms::run(&algorithm, processes)?;
    let metrics = Metrics::calculate(processes, outcome.total_time)?;
    Ok((outcome.steps, metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::models::ExecutionStep;

    fn fcfs_example() -> Simulator {
        let mut sim = Simulator::new();
        sim.add("A", 0, 5);
        sim.add("B", 1, 3);
        sim.add("C", 2, 8);
        sim
    }

    #[test]
    fn test_run_fcfs() {
        let mut sim = fcfs_example();
        let steps = sim.run_fcfs().unwrap().clone();

        assert_eq!(
            steps.steps(),
            &[
                ExecutionStep::new("A", 0, 5),
                ExecutionStep::new("B", 5, 8),
                ExecutionStep::new("C", 8, 16),
            ]
        );
        let m = sim.metrics().unwrap();
        assert!((m.average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
        assert_eq!(sim.last_steps(), Some(&steps));
    }

    #[test]
    fn test_processes_expose_derived_state() {
        let mut sim = fcfs_example();
        sim.run_fcfs().unwrap();
        let waits: Vec<_> = sim.processes().iter().map(|p| p.waiting_time()).collect();
        assert_eq!(waits, vec![Some(0), Some(4), Some(6)]);
    }

    #[test]
    fn test_run_each_algorithm() {
        let mut sim = fcfs_example();
        assert_eq!(sim.run_sjf().unwrap().len(), 3);
        assert!(sim.run_srtf().unwrap().len() >= 3);
        assert!(sim.run_round_robin(2).unwrap().len() >= 3);
        assert_eq!(sim.metrics().unwrap().total_time, 16);
    }

    #[test]
    fn test_empty_simulator() {
        let mut sim = Simulator::new();
        assert_eq!(sim.run_fcfs().unwrap_err(), SimulationError::EmptyInput);
        assert!(sim.metrics().is_none());
        assert!(sim.is_empty());
    }

    #[test]
    fn test_zero_quantum_clears_previous_results() {
        let mut sim = fcfs_example();
        sim.run_fcfs().unwrap();
        assert!(sim.metrics().is_some());

        let err = sim.run_round_robin(0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameter(_)));
        assert!(sim.metrics().is_none());
        assert!(sim.last_steps().is_none());
    }

    #[test]
    fn test_invalid_input() {
        let mut sim = Simulator::new();
        sim.add("A", 0, 3);
        sim.add("A", 1, 0);
        match sim.run_fcfs() {
            Err(SimulationError::InvalidInput(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_clear_processes() {
        let mut sim = fcfs_example();
        sim.run_fcfs().unwrap();
        sim.clear_processes();

        assert_eq!(sim.len(), 0);
        assert!(sim.metrics().is_none());
        assert!(sim.last_steps().is_none());
    }

    #[test]
    fn test_simulate_leaves_input_untouched() {
        let processes = vec![Process::new("A", 0, 4), Process::new("B", 1, 2)];
        let report = simulate(&processes, Algorithm::Srtf).unwrap();

        assert_eq!(report.total_time, 6);
        assert_eq!(report.algorithm, Algorithm::Srtf);
        assert!(report.processes.iter().all(Process::is_complete));
        assert!(processes.iter().all(|p| !p.is_complete()));
    }

    #[test]
    fn test_compare() {
        let processes = fcfs_example().processes().to_vec();
        let reports = compare(
            &processes,
            &[Algorithm::Fcfs, Algorithm::Sjf, Algorithm::round_robin(2)],
        )
        .unwrap();

        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| r.total_time == 16));
        // SJF never waits longer on average than FCFS here.
        assert!(
            reports[1].metrics.average_waiting_time <= reports[0].metrics.average_waiting_time
        );
    }

    #[test]
    fn test_compare_stops_on_error() {
        let processes = vec![Process::new("A", 0, 1)];
        let result = compare(&processes, &[Algorithm::Fcfs, Algorithm::round_robin(0)]);
        assert!(matches!(result, Err(SimulationError::InvalidParameter(_))));
    }

    #[test]
    fn test_report_serializes() {
        let processes = vec![Process::new("A", 0, 2)];
        let report = simulate(&processes, Algorithm::Fcfs).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["algorithm"]["type"], "fcfs");
        assert_eq!(json["steps"][0]["process_id"], "A");
        assert_eq!(json["total_time"], 2);
        assert_eq!(json["processes"][0]["state"]["completion_time"], 2);
    }
}
