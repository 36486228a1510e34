//! Shortest-Job-First (non-preemptive).
//!
//! Arrived processes wait in a min-heap keyed by burst time; ties go to
//! the earlier arrival. The selected process runs to completion.
//!
//! # Reference
//! Silberschatz et al., "Operating System Concepts", Ch. 5.3.2

use tracing::debug;

use super::queue::{Backlog, ReadyHeap};
use super::RunOutcome;
use crate::models::{Process, Tick, Timeline};

/// Runs SJF over `processes`, resetting their derived state first.
///
/// Every burst must be positive; [`super::run`] checks this before dispatch.
pub fn sjf(processes: &mut [Process]) -> RunOutcome {
    processes.iter_mut().for_each(Process::reset);

    let mut backlog = Backlog::new(processes);
    let mut ready = ReadyHeap::new();
    let mut steps = Timeline::new();
    let mut current_time: Tick = 0;

    while !backlog.is_empty() || !ready.is_empty() {
        for (idx, rank) in backlog.admit(current_time) {
            ready.push(processes[idx].burst_time, rank, idx);
        }

        let Some((idx, _)) = ready.pop() else {
            if let Some(next) = backlog.next_arrival() {
                debug!(from = current_time, to = next, "CPU idle");
                current_time = next;
            }
            continue;
        };

        let process = &mut processes[idx];
        super::dispatch_to_completion(process, current_time, &mut steps);
        current_time += process.burst_time;
    }

    RunOutcome {
        steps,
        total_time: current_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionStep;

    fn make(specs: &[(&str, Tick, Tick)]) -> Vec<Process> {
        specs
            .iter()
            .map(|&(id, arrival, burst)| Process::new(id, arrival, burst))
            .collect()
    }

    #[test]
    fn test_sjf_picks_shortest_ready() {
        // A runs first (only one ready), then C (1) before B (3) before D (8).
        let mut processes = make(&[("A", 0, 6), ("B", 1, 3), ("C", 2, 1), ("D", 3, 8)]);
        let outcome = sjf(&mut processes);

        assert_eq!(
            outcome.steps.steps(),
            &[
                ExecutionStep::new("A", 0, 6),
                ExecutionStep::new("C", 6, 7),
                ExecutionStep::new("B", 7, 10),
                ExecutionStep::new("D", 10, 18),
            ]
        );
        assert_eq!(outcome.total_time, 18);
    }

    #[test]
    fn test_sjf_non_preemptive() {
        // B arrives shorter while A is running; A still finishes first.
        let mut processes = make(&[("A", 0, 10), ("B", 1, 1)]);
        let outcome = sjf(&mut processes);
        assert_eq!(outcome.steps.dispatch_order(), vec!["A", "B"]);
        assert_eq!(processes[1].waiting_time(), Some(9));
    }

    #[test]
    fn test_sjf_tie_goes_to_earlier_arrival() {
        let mut processes = make(&[("late", 1, 2), ("early", 0, 2), ("first", 0, 5)]);
        // At t=0: early(2) and first(5) ready → early. At t=2: late(2), first(5) → late.
        let outcome = sjf(&mut processes);
        assert_eq!(outcome.steps.dispatch_order(), vec!["early", "late", "first"]);
    }

    #[test]
    fn test_sjf_equal_bursts_keep_input_order() {
        let mut processes = make(&[("X", 0, 2), ("Y", 0, 2), ("Z", 0, 2)]);
        let outcome = sjf(&mut processes);
        assert_eq!(outcome.steps.dispatch_order(), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_sjf_idle_gap() {
        let mut processes = make(&[("B", 10, 2), ("A", 3, 4)]);
        let outcome = sjf(&mut processes);

        assert_eq!(
            outcome.steps.steps(),
            &[ExecutionStep::new("A", 3, 7), ExecutionStep::new("B", 10, 12)]
        );
        assert_eq!(outcome.total_time, 12);
    }

    #[test]
    fn test_sjf_one_step_per_process() {
        let mut processes = make(&[("A", 0, 3), ("B", 0, 1), ("C", 5, 2), ("D", 1, 7)]);
        let outcome = sjf(&mut processes);
        assert_eq!(outcome.steps.len(), processes.len());
        assert!(processes.iter().all(Process::is_complete));
    }
}
