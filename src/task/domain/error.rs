//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned when a task record violates its invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("Title is mandatory")]
    EmptyTitle,
}
