//! Input validation for simulation runs.
//!
//! Checks structural integrity of a process set before scheduling.
//! Detects:
//! - Empty input
//! - Empty process IDs
//! - Duplicate process IDs
//! - Zero burst times
//!
//! All problems are collected, not just the first.

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// A process has an empty (or blank) ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs no CPU time.
    ZeroBurst,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is non-blank
/// 3. No duplicate IDs
/// 4. Every burst time is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        ));
    }

    let mut ids = HashSet::new();
    for (index, process) in processes.iter().enumerate() {
        if process.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at index {index} has an empty ID"),
            ));
        } else if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }

        if process.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has zero burst time", process.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
