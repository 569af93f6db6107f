//! Task status labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Open-ended status label attached to a task.
///
/// Only [`TaskStatus::NEW`] and [`TaskStatus::UPDATE`] are assigned by the
/// service; any other label supplied by a client is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStatus(String);

impl TaskStatus {
    /// Label assigned to freshly created tasks.
    pub const NEW: &'static str = "NEW";

    /// Label assigned by every update.
    pub const UPDATE: &'static str = "UPDATE";

    /// Wraps a status label as given.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the status assigned on creation.
    #[must_use]
    pub fn created() -> Self {
        Self::new(Self::NEW)
    }

    /// Returns the status assigned on update.
    #[must_use]
    pub fn updated() -> Self {
        Self::new(Self::UPDATE)
    }

    /// Returns the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the label is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::created()
    }
}

impl AsRef<str> for TaskStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
