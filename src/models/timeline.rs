//! Execution timeline model.
//!
//! A timeline is the ordered list of execution steps a run produced.
//! Steps never overlap; gaps between them are idle CPU time.

use serde::{Deserialize, Serialize};

use super::Tick;

/// One contiguous interval `[start_time, end_time)` during which a
/// single process occupied the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    /// Process that held the CPU.
    pub process_id: String,
    /// First tick of the interval.
    pub start_time: Tick,
    /// Tick after the last one of the interval.
    pub end_time: Tick,
}

impl ExecutionStep {
    /// Creates a new step.
    pub fn new(process_id: impl Into<String>, start_time: Tick, end_time: Tick) -> Self {
        debug_assert!(end_time > start_time);
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end_time - self.start_time
    }
}

impl std::fmt::Display for ExecutionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.process_id, self.start_time, self.end_time)
    }
}

/// An idle interval `[start, end)` with no process on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    /// First idle tick.
    pub start: Tick,
    /// Tick at which the next process starts.
    pub end: Tick,
}

impl IdleGap {
    /// Length of the gap in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// Ordered sequence of execution steps for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    steps: Vec<ExecutionStep>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn push(&mut self, step: ExecutionStep) {
        self.steps.push(step);
    }

    /// Steps in execution order.
    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total CPU-busy ticks.
    pub fn busy_time(&self) -> Tick {
        self.steps.iter().map(ExecutionStep::duration).sum()
    }

    /// End of the last step (0 for an empty timeline).
    pub fn makespan(&self) -> Tick {
        self.steps.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// All steps of one process.
    pub fn steps_for(&self, process_id: &str) -> Vec<&ExecutionStep> {
        self.steps
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Process ids in dispatch order.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.process_id.as_str()).collect()
    }

    /// Idle intervals, including a leading gap when the CPU starts late.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        let mut gaps = Vec::new();
        let mut cursor: Tick = 0;
        for step in &self.steps {
            if step.start_time > cursor {
                gaps.push(IdleGap {
                    start: cursor,
                    end: step.start_time,
                });
            }
            cursor = cursor.max(step.end_time);
        }
        gaps
    }

    /// Total idle ticks up to the makespan.
    pub fn idle_time(&self) -> Tick {
        self.idle_gaps().iter().map(IdleGap::duration).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionStep> {
        self.steps.iter()
    }

    /// Consumes the timeline, returning its steps.
    pub fn into_steps(self) -> Vec<ExecutionStep> {
        self.steps
    }
}

impl From<Vec<ExecutionStep>> for Timeline {
    fn from(steps: Vec<ExecutionStep>) -> Self {
        Self { steps }
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionStep;
    type IntoIter = std::slice::Iter<'a, ExecutionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl std::fmt::Display for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.steps.iter().map(|s| s.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
