//! CPU scheduling simulator.
//!
//! Simulates classic single-CPU scheduling algorithms over a static list
//! of processes and reports the resulting execution timeline together
//! with aggregate performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessState`, `ExecutionStep`, `Timeline`
//! - **`algorithms`**: FCFS, SJF, SRTF and Round-Robin, selected via `Algorithm`
//! - **`scheduler`**: `Simulator` facade, snapshot `simulate`/`compare`, `Metrics`
//! - **`validation`**: Input integrity checks (empty set, duplicate IDs, zero bursts)
//! - **`workload`**: Seeded random process-set generation
//!
//! # Time
//!
//! All time is a simulated integer tick counter starting at 0. Runs are
//! synchronous and deterministic.
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::algorithms::Algorithm;
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::scheduler::simulate;
//!
//! let processes = vec![
//!     Process::new("A", 0, 7),
//!     Process::new("B", 2, 4),
//!     Process::new("C", 4, 1),
//!     Process::new("D", 5, 4),
//! ];
//! let report = simulate(&processes, Algorithm::Srtf).unwrap();
//! assert_eq!(report.steps.dispatch_order(), vec!["A", "B", "C", "B", "D", "A"]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

pub mod algorithms;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
