//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable on input order).
//! 2. If the CPU is ahead of the next arrival, jump the clock forward
//!    (idle gap, no step).
//! 3. Run the process to completion in a single step.
//!
//! Non-preemptive: every process produces exactly one step.

use tracing::debug;

use super::queue::Backlog;
use super::RunOutcome;
use crate::models::{Process, Tick, Timeline};

/// Runs FCFS over `processes`, resetting their derived state first.
///
/// Every burst must be positive; [`super::run`] checks this before dispatch.
pub fn fcfs(processes: &mut [Process]) -> RunOutcome {
    processes.iter_mut().for_each(Process::reset);

    let mut steps = Timeline::new();
    let mut current_time: Tick = 0;

    for (idx, _) in Backlog::new(processes).drain_all() {
        let process = &mut processes[idx];
        if current_time < process.arrival_time {
            debug!(from = current_time, to = process.arrival_time, "CPU idle");
            current_time = process.arrival_time;
        }

        super::dispatch_to_completion(process, current_time, &mut steps);
        current_time += process.burst_time;
    }

    RunOutcome {
        steps,
        total_time: current_time,
    }
}
