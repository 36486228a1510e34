//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! # Algorithm
//!
//! The clock advances one tick at a time. At every tick boundary:
//!
//! 1. Admit newly arrived processes into a min-heap keyed by remaining time.
//! 2. If the heap minimum is strictly shorter than the running process,
//!    preempt: requeue the running process and dispatch the minimum.
//!    A process admitted at this very tick can preempt immediately.
//! 3. Run the selected process for one tick.
//!
//! A context switch closes the previous step (only if it has non-zero
//! length) and opens a new one, so consecutive ticks of the same process
//! coalesce into a single step.
//!
//! # Complexity
//! O(T log n) where T = makespan, n = processes.

use tracing::{debug, trace};

use super::queue::{Backlog, ReadyHeap};
use super::RunOutcome;
use crate::models::{ExecutionStep, Process, Tick, Timeline};

/// Runs SRTF over `processes`, resetting their derived state first.
///
/// Every burst must be positive; [`super::run`] checks this before dispatch.
pub fn srtf(processes: &mut [Process]) -> RunOutcome {
    processes.iter_mut().for_each(Process::reset);

    let mut backlog = Backlog::new(processes);
    let mut ready = ReadyHeap::new();
    let mut steps = Timeline::new();
    let mut current_time: Tick = 0;
    let mut last_switch: Tick = 0;
    // (process index, rank)
    let mut running: Option<(usize, usize)> = None;

    while !backlog.is_empty() || !ready.is_empty() || running.is_some() {
        for (idx, rank) in backlog.admit(current_time) {
            ready.push(processes[idx].remaining_time(), rank, idx);
        }

        let switch_required = match running {
            None => true,
            Some((idx, rank)) => {
                let remaining = processes[idx].remaining_time();
                match ready.peek_key() {
                    Some(shortest) if shortest < remaining => {
                        debug!(
                            tick = current_time,
                            preempted = %processes[idx].id,
                            remaining,
                            "preempting"
                        );
                        ready.push(remaining, rank, idx);
                        true
                    }
                    _ => false,
                }
            }
        };

        if switch_required {
            if let Some((idx, _)) = running {
                if last_switch != current_time {
                    steps.push(ExecutionStep::new(
                        processes[idx].id.as_str(),
                        last_switch,
                        current_time,
                    ));
                }
            }

            running = ready.pop();
            if let Some((idx, _)) = running {
                processes[idx].mark_started(current_time);
                last_switch = current_time;
                trace!(tick = current_time, process = %processes[idx].id, "dispatch");
            }
        }

        let Some((idx, _)) = running else {
            if let Some(next) = backlog.next_arrival() {
                debug!(from = current_time, to = next, "CPU idle");
                current_time = next;
            }
            continue;
        };

        current_time += 1;
        let process = &mut processes[idx];
        process.consume(1);

        if process.remaining_time() == 0 {
            steps.push(ExecutionStep::new(
                process.id.as_str(),
                last_switch,
                current_time,
            ));
            process.complete(current_time);
            debug!(process = %process.id, tick = current_time, "completed");
            running = None;
        }
    }

    RunOutcome {
        steps,
        total_time: current_time,
    }
}
