//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit arrived processes to the tail of a FIFO queue.
//! 2. Dequeue the head and run it for `min(quantum, remaining)` ticks.
//! 3. Admit processes that arrived during that slice.
//! 4. Re-enqueue the process at the tail if it still has work.
//!
//! Step 3 happens before step 4: a process arriving during another's
//! slice is queued ahead of that process's re-insertion.

use std::collections::VecDeque;

use tracing::debug;

use super::queue::Backlog;
use super::RunOutcome;
use crate::error::{Result, SimulationError};
use crate::models::{ExecutionStep, Process, Tick, Timeline};

/// Runs Round-Robin over `processes`, resetting their derived state first.
///
/// Every burst must be positive; [`super::run`] checks this before dispatch.
///
/// # Errors
/// [`SimulationError::InvalidParameter`] if `quantum` is zero.
pub fn round_robin(processes: &mut [Process], quantum: Tick) -> Result<RunOutcome> {
    if quantum == 0 {
        return Err(SimulationError::invalid_parameter(
            "time quantum must be positive",
        ));
    }

    processes.iter_mut().for_each(Process::reset);

    let mut backlog = Backlog::new(processes);
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut steps = Timeline::new();
    let mut current_time: Tick = 0;

    while !backlog.is_empty() || !queue.is_empty() {
        queue.extend(backlog.admit(current_time).into_iter().map(|(idx, _)| idx));

        let Some(idx) = queue.pop_front() else {
            if let Some(next) = backlog.next_arrival() {
                debug!(from = current_time, to = next, "CPU idle");
                current_time = next;
            }
            continue;
        };

        let process = &mut processes[idx];
        process.mark_started(current_time);

        let execute_time = quantum.min(process.remaining_time());
        let end = current_time + execute_time;
        debug!(process = %process.id, start = current_time, end, "time slice");
        steps.push(ExecutionStep::new(process.id.as_str(), current_time, end));

        current_time = end;
        process.consume(execute_time);

        // Arrivals during the slice go ahead of the preempted process.
        queue.extend(backlog.admit(current_time).into_iter().map(|(idx, _)| idx));

        if process.remaining_time() > 0 {
            queue.push_back(idx);
        } else {
            process.complete(current_time);
            debug!(process = %process.id, tick = current_time, "completed");
        }
    }

    Ok(RunOutcome {
        steps,
        total_time: current_time,
    })
}
