//! Process model.
//!
//! A process is a unit of CPU work: it becomes eligible at its arrival
//! tick and needs `burst_time` ticks of CPU in total. The inputs never
//! change; everything the simulation learns about a process lives in
//! its [`ProcessState`], which is reset at the start of every run so the
//! same records can be replayed under different algorithms.

use serde::{Deserialize, Serialize};

use super::Tick;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks of a simulated clock starting at t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes ready.
    pub arrival_time: Tick,
    /// Total CPU time the process requires.
    pub burst_time: Tick,
    /// Simulation-owned derived state.
    #[serde(default)]
    pub state: ProcessState,
}

/// Derived per-run state of a process.
///
/// Owned and mutated by the algorithm engine only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessState {
    /// CPU time still required.
    pub(crate) remaining_time: Tick,
    /// First tick the process was dispatched. Latched once per run.
    pub(crate) start_time: Option<Tick>,
    /// Tick at which the remaining time reached zero.
    pub(crate) completion_time: Option<Tick>,
}

impl Process {
    /// Creates a new process with fresh derived state.
    pub fn new(id: impl Into<String>, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            state: ProcessState {
                remaining_time: burst_time,
                start_time: None,
                completion_time: None,
            },
        }
    }

    /// Re-arms the derived state for a new run.
    pub fn reset(&mut self) {
        self.state = ProcessState {
            remaining_time: self.burst_time,
            start_time: None,
            completion_time: None,
        };
    }

    /// Records a dispatch at `tick`. Only the first dispatch sticks.
    #[inline]
    pub(crate) fn mark_started(&mut self, tick: Tick) {
        if self.state.start_time.is_none() {
            self.state.start_time = Some(tick);
        }
    }

    /// Consumes `ticks` of CPU time.
    #[inline]
    pub(crate) fn consume(&mut self, ticks: Tick) {
        debug_assert!(ticks <= self.state.remaining_time);
        self.state.remaining_time -= ticks;
    }

    /// Records completion at `tick`.
    #[inline]
    pub(crate) fn complete(&mut self, tick: Tick) {
        debug_assert_eq!(self.state.remaining_time, 0);
        self.state.completion_time = Some(tick);
    }

    /// Remaining CPU time.
    #[inline]
    pub fn remaining_time(&self) -> Tick {
        self.state.remaining_time
    }

    /// First dispatch tick, if the process has run.
    #[inline]
    pub fn start_time(&self) -> Option<Tick> {
        self.state.start_time
    }

    /// Completion tick, if the process has finished.
    #[inline]
    pub fn completion_time(&self) -> Option<Tick> {
        self.state.completion_time
    }

    /// Whether the process has finished in the current run.
    pub fn is_complete(&self) -> bool {
        self.state.completion_time.is_some()
    }

    /// Turnaround time: completion - arrival.
    pub fn turnaround_time(&self) -> Option<Tick> {
        self.state
            .completion_time
            .map(|completion| completion - self.arrival_time)
    }

    /// Waiting time: turnaround - burst.
    pub fn waiting_time(&self) -> Option<Tick> {
        self.turnaround_time()
            .map(|turnaround| turnaround - self.burst_time)
    }

    /// Response time: first dispatch - arrival.
    pub fn response_time(&self) -> Option<Tick> {
        self.state.start_time.map(|start| start - self.arrival_time)
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Process[ID={}, Arrival={}, Burst={}]",
            self.id, self.arrival_time, self.burst_time
        )
    }
}
