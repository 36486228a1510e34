//! CPU scheduling algorithms.
//!
//! Four independent simulation procedures, each consuming a process list
//! and producing an ordered execution timeline while filling in every
//! process's derived state:
//!
//! | Algorithm | Preemptive | Ready order |
//! |-----------|-----------|-------------|
//! | FCFS | no | arrival |
//! | SJF | no | burst time, then arrival |
//! | SRTF | yes, per tick | remaining time, then arrival |
//! | Round-Robin | yes, per quantum | FIFO |
//!
//! Every procedure resets the derived state of its input before
//! simulating, so the same process list can be replayed under any
//! algorithm.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::algorithms::{self, Algorithm};
//! use cpu_sched_sim::models::Process;
//!
//! let mut processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
//! let outcome = algorithms::run(&Algorithm::round_robin(2), &mut processes).unwrap();
//! assert_eq!(outcome.total_time, 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod queue;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::fcfs;
pub use round_robin::round_robin;
pub use sjf::sjf;
pub use srtf::srtf;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::{Result, SimulationError};
use crate::models::{ExecutionStep, Process, Tick, Timeline};
use crate::validation::{validate_processes, ValidationErrorKind};

/// Scheduling algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First, preemptive.
    Srtf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin { quantum: Tick },
}

impl Algorithm {
    /// Round-Robin with the given quantum.
    pub fn round_robin(quantum: Tick) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come-First-Served",
            Self::Sjf => "Shortest-Job-First",
            Self::Srtf => "Shortest-Remaining-Time-First",
            Self::RoundRobin { .. } => "Round-Robin",
        }
    }

    /// Abbreviation (e.g. "SRTF").
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin { .. } => "RR",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin { .. })
    }

    /// Checks the algorithm parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::RoundRobin { quantum: 0 } => Err(SimulationError::invalid_parameter(
                "time quantum must be positive",
            )),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (q={})", self.name(), quantum),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    /// Parses `fcfs`, `sjf`, `srtf`, or `rr:<quantum>` (also
    /// `round_robin:<quantum>`). Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        let (name, arg) = match lowered.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (lowered.as_str(), None),
        };

        let algorithm = match (name, arg) {
            ("fcfs" | "fifo", None) => Self::Fcfs,
            ("sjf", None) => Self::Sjf,
            ("srtf" | "srt", None) => Self::Srtf,
            ("rr" | "round_robin" | "roundrobin", Some(arg)) => {
                let quantum = arg.parse::<Tick>().map_err(|_| {
                    SimulationError::invalid_parameter(format!(
                        "time quantum must be a positive integer, got '{arg}'"
                    ))
                })?;
                Self::round_robin(quantum)
            }
            ("rr" | "round_robin" | "roundrobin", None) => {
                return Err(SimulationError::invalid_parameter(
                    "Round-Robin requires a time quantum (e.g. 'rr:2')",
                ))
            }
            _ => return Err(SimulationError::UnknownAlgorithm(s.to_string())),
        };

        algorithm.validate()?;
        Ok(algorithm)
    }
}

/// Result of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Execution steps in order.
    pub steps: Timeline,
    /// Clock value when the run ended (the makespan).
    pub total_time: Tick,
}

/// Runs `algorithm` over `processes`.
///
/// Rejects invalid input and invalid parameters before touching any
/// process, then resets derived state and simulates to completion.
///
/// # Errors
/// - [`SimulationError::EmptyInput`] if `processes` is empty.
/// - [`SimulationError::InvalidInput`] if a process has a blank or
///   duplicate ID or a zero burst.
/// - [`SimulationError::InvalidParameter`] for a zero Round-Robin quantum.
#[instrument(level = "debug", skip_all, fields(algorithm = algorithm.short_name()))]
pub fn run(algorithm: &Algorithm, processes: &mut [Process]) -> Result<RunOutcome> {
    if let Err(errors) = validate_processes(processes) {
        warn!(problems = errors.len(), "rejected run: invalid process set");
        if errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyInput)
        {
            return Err(SimulationError::EmptyInput);
        }
        return Err(SimulationError::InvalidInput(errors));
    }
    if let Err(err) = algorithm.validate() {
        warn!(error = %err, "rejected run");
        return Err(err);
    }

    let outcome = match *algorithm {
        Algorithm::Fcfs => fcfs(processes),
        Algorithm::Sjf => sjf(processes),
        Algorithm::Srtf => srtf(processes),
        Algorithm::RoundRobin { quantum } => round_robin(processes, quantum)?,
    };

    info!(
        algorithm = algorithm.short_name(),
        processes = processes.len(),
        steps = outcome.steps.len(),
        total_time = outcome.total_time,
        "simulation complete"
    );
    Ok(outcome)
}

/// Non-preemptive dispatch: runs `process` from `start` to completion.
fn dispatch_to_completion(process: &mut Process, start: Tick, steps: &mut Timeline) {
    let end = start + process.burst_time;
    debug!(process = %process.id, start, end, "dispatch");

    process.mark_started(start);
    steps.push(ExecutionStep::new(process.id.as_str(), start, end));
    process.consume(process.burst_time);
    process.complete(end);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("A", 0, 5),
            Process::new("B", 1, 3),
            Process::new("C", 2, 8),
        ]
    }

    #[test]
    fn test_parse_algorithms() {
        assert_eq!("fcfs".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("SJF".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!(" srtf ".parse::<Algorithm>().unwrap(), Algorithm::Srtf);
        assert_eq!(
            "rr:3".parse::<Algorithm>().unwrap(),
            Algorithm::round_robin(3)
        );
        assert_eq!(
            "Round_Robin: 4".parse::<Algorithm>().unwrap(),
            Algorithm::round_robin(4)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "lottery".parse::<Algorithm>(),
            Err(SimulationError::UnknownAlgorithm(_))
        ));
        assert!(matches!(
            "rr".parse::<Algorithm>(),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(matches!(
            "rr:0".parse::<Algorithm>(),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(matches!(
            "rr:-2".parse::<Algorithm>(),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(matches!(
            "fcfs:2".parse::<Algorithm>(),
            Err(SimulationError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_names() {
        assert_eq!(Algorithm::Srtf.name(), "Shortest-Remaining-Time-First");
        assert_eq!(Algorithm::round_robin(2).short_name(), "RR");
        assert_eq!(Algorithm::round_robin(2).to_string(), "Round-Robin (q=2)");
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Algorithm::round_robin(2)).unwrap();
        assert_eq!(json, r#"{"type":"round_robin","quantum":2}"#);

        let parsed: Algorithm = serde_json::from_str(r#"{"type":"srtf"}"#).unwrap();
        assert_eq!(parsed, Algorithm::Srtf);
    }

    #[test]
    fn test_run_dispatches() {
        let mut processes = sample();
        let outcome = run(&Algorithm::Fcfs, &mut processes).unwrap();
        assert_eq!(outcome.total_time, 16);
        assert_eq!(outcome.steps.len(), 3);
    }

    #[test]
    fn test_run_empty_input() {
        assert_eq!(
            run(&Algorithm::Sjf, &mut []).unwrap_err(),
            SimulationError::EmptyInput
        );
    }

    #[test]
    fn test_run_zero_burst_rejected() {
        let mut lone = vec![Process::new("Z", 0, 0)];
        for algorithm in [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Srtf,
            Algorithm::round_robin(2),
        ] {
            match run(&algorithm, &mut lone) {
                Err(SimulationError::InvalidInput(errors)) => {
                    assert_eq!(errors.len(), 1);
                    assert_eq!(errors[0].kind, ValidationErrorKind::ZeroBurst);
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }

        let mut mixed = vec![Process::new("A", 0, 3), Process::new("Z", 0, 0)];
        assert!(matches!(
            run(&Algorithm::Srtf, &mut mixed),
            Err(SimulationError::InvalidInput(_))
        ));
        assert!(mixed.iter().all(|p| p.start_time().is_none()));
        assert_eq!(mixed[0].remaining_time(), 3);
    }

    #[test]
    fn test_run_zero_quantum() {
        let mut processes = sample();
        let err = run(&Algorithm::round_robin(0), &mut processes).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameter(_)));
    }

    #[test]
    fn test_run_is_idempotent() {
        for algorithm in [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Srtf,
            Algorithm::round_robin(2),
        ] {
            let mut processes = sample();
            let first = run(&algorithm, &mut processes).unwrap();
            let snapshot = processes.clone();
            let second = run(&algorithm, &mut processes).unwrap();
            assert_eq!(first, second, "{algorithm}");
            assert_eq!(snapshot, processes, "{algorithm}");
        }
    }

    #[test]
    fn test_replay_across_algorithms() {
        let mut processes = sample();
        run(&Algorithm::round_robin(1), &mut processes).unwrap();
        let outcome = run(&Algorithm::Fcfs, &mut processes).unwrap();
        // Start times reflect the FCFS run, not the earlier Round-Robin run.
        assert_eq!(processes[1].start_time(), Some(5));
        assert_eq!(processes[2].start_time(), Some(8));
        assert_eq!(outcome.steps.len(), 3);
    }
}
