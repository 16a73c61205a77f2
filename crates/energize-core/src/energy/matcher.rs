//! Energy-match engine.
//!
//! Partitions a task list into four buckets by comparing each task's required
//! energy against the user's current energy. The partition is recomputed from
//! scratch on every call; it never mutates its input.

use serde::Serialize;

use super::EnergyLevel;
use crate::task::Task;

/// Which bucket a task falls into for a given current energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    /// Required energy equals the current energy.
    Perfect,
    /// Required energy is below the current energy.
    Doable,
    /// Required energy exceeds the current energy.
    TooHard,
    /// Already done, energy is irrelevant.
    Completed,
}

impl MatchLevel {
    /// Rendering order of the sections.
    pub const ORDER: [MatchLevel; 4] = [
        MatchLevel::Perfect,
        MatchLevel::Doable,
        MatchLevel::TooHard,
        MatchLevel::Completed,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            MatchLevel::Perfect => "Perfect match for your energy",
            MatchLevel::Doable => "You can do these",
            MatchLevel::TooHard => "Save these for later",
            MatchLevel::Completed => "Completed",
        }
    }

    /// Classify a single task.
    pub fn classify(task: &Task, current: EnergyLevel) -> Self {
        if task.completed {
            MatchLevel::Completed
        } else if !current.can_handle(task.energy_required) {
            MatchLevel::TooHard
        } else if task.energy_required == current {
            MatchLevel::Perfect
        } else {
            MatchLevel::Doable
        }
    }
}

/// The four disjoint task partitions, each in original insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Buckets {
    pub perfect: Vec<Task>,
    pub doable: Vec<Task>,
    pub too_hard: Vec<Task>,
    pub completed: Vec<Task>,
}

impl Buckets {
    pub fn get(&self, level: MatchLevel) -> &[Task] {
        match level {
            MatchLevel::Perfect => &self.perfect,
            MatchLevel::Doable => &self.doable,
            MatchLevel::TooHard => &self.too_hard,
            MatchLevel::Completed => &self.completed,
        }
    }

    /// Total number of tasks across all buckets.
    pub fn len(&self) -> usize {
        self.perfect.len() + self.doable.len() + self.too_hard.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-empty sections in rendering order.
    pub fn sections(&self) -> impl Iterator<Item = (MatchLevel, &[Task])> {
        MatchLevel::ORDER
            .into_iter()
            .map(move |level| (level, self.get(level)))
            .filter(|(_, tasks)| !tasks.is_empty())
    }
}

/// Partition `tasks` for the user's `current` energy.
pub fn match_tasks(tasks: &[Task], current: EnergyLevel) -> Buckets {
    let mut buckets = Buckets::default();
    for task in tasks {
        let slot = match MatchLevel::classify(task, current) {
            MatchLevel::Perfect => &mut buckets.perfect,
            MatchLevel::Doable => &mut buckets.doable,
            MatchLevel::TooHard => &mut buckets.too_hard,
            MatchLevel::Completed => &mut buckets.completed,
        };
        slot.push(task.clone());
    }
    buckets
}
