//! Arrival backlog and ready structures shared by the algorithms.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::{Process, Tick};

/// Processes that have not arrived yet, in arrival order.
///
/// Ties on arrival keep input order. The position of a process in this
/// order is its *rank*, used as the final tie-breaker by the ready heaps.
#[derive(Debug)]
pub(crate) struct Backlog {
    /// (arrival, process index), sorted by arrival.
    pending: Vec<(Tick, usize)>,
    next: usize,
}

impl Backlog {
    pub(crate) fn new(processes: &[Process]) -> Self {
        let mut pending: Vec<(Tick, usize)> = processes
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.arrival_time, idx))
            .collect();
        // Stable: equal arrivals stay in input order.
        pending.sort_by_key(|&(arrival, _)| arrival);
        Self { pending, next: 0 }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.next >= self.pending.len()
    }

    /// Arrival tick of the earliest pending process.
    pub(crate) fn next_arrival(&self) -> Option<Tick> {
        self.pending.get(self.next).map(|&(arrival, _)| arrival)
    }

    /// Removes and returns every process with `arrival <= now` as
    /// `(process index, rank)` pairs, in arrival order.
    pub(crate) fn admit(&mut self, now: Tick) -> Vec<(usize, usize)> {
        let mut admitted = Vec::new();
        while let Some(&(arrival, idx)) = self.pending.get(self.next) {
            if arrival > now {
                break;
            }
            admitted.push((idx, self.next));
            self.next += 1;
        }
        admitted
    }

    /// Drains the whole backlog in arrival order.
    pub(crate) fn drain_all(&mut self) -> Vec<(usize, usize)> {
        let rest = self.pending[self.next..]
            .iter()
            .enumerate()
            .map(|(offset, &(_, idx))| (idx, self.next + offset))
            .collect();
        self.next = self.pending.len();
        rest
    }
}

/// Min-priority ready structure keyed by a tick value.
///
/// Pops the entry with the smallest key; equal keys pop in rank
/// (arrival) order.
#[derive(Debug, Default)]
pub(crate) struct ReadyHeap {
    heap: BinaryHeap<Reverse<(Tick, usize, usize)>>,
}

impl ReadyHeap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: Tick, rank: usize, idx: usize) {
        self.heap.push(Reverse((key, rank, idx)));
    }

    /// Returns `(index, rank)` of the minimum entry.
    pub(crate) fn pop(&mut self) -> Option<(usize, usize)> {
        self.heap.pop().map(|Reverse((_, rank, idx))| (idx, rank))
    }

    /// Smallest key currently queued.
    pub(crate) fn peek_key(&self) -> Option<Tick> {
        self.heap.peek().map(|Reverse((key, _, _))| *key)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
