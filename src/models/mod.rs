//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling algorithm: the
//! process records being scheduled and the execution timeline a run
//! produces.
//!
//! # Time
//!
//! All times are [`Tick`]s of a simulated integer clock that starts at 0
//! and only moves forward. There is no notion of wall-clock time.

mod process;
mod timeline;

pub use process::{Process, ProcessState};
pub use timeline::{ExecutionStep, IdleGap, Timeline};

/// A point (or length) on the simulated clock.
pub type Tick = u64;
