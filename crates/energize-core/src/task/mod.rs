//! Task types.
//!
//! A task records what needs doing and how much energy it takes. Once
//! created, only its completion flag changes.

mod store;

pub use store::TaskStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::energy::EnergyLevel;

/// Task priority.
///
/// Always `Medium` at creation and not consulted by the matcher; kept so the
/// stored shape stays stable if priority-aware matching is added.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A captured task.
///
/// Serialized with camelCase keys (`energyRequired`, `createdAt`) so stored
/// task lists keep one shape across frontends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title, trimmed and non-empty
    pub title: String,
    /// Whether the task is completed
    #[serde(default)]
    pub completed: bool,
    /// Energy needed to take the task on
    pub energy_required: EnergyLevel,
    /// Creation time
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    /// Create an open task with a fresh id and the current timestamp.
    pub fn new(title: impl Into<String>, energy_required: EnergyLevel) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
            energy_required,
            created_at: Utc::now(),
            priority: Priority::Medium,
        }
    }
}
