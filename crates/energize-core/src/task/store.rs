//! In-memory ordered task collection.

use tracing::debug;

use super::Task;
use crate::energy::EnergyLevel;
use crate::error::ValidationError;

/// Tasks in insertion order. Ids are unique within the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from previously persisted tasks.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant
    /// holds even for hand-edited data.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut store = Self::new();
        for task in tasks {
            if store.get(&task.id).is_some() {
                debug!(id = %task.id, "dropping duplicate task id");
                continue;
            }
            store.tasks.push(task);
        }
        store
    }

    /// Append a new task. Returns `None` when the title is blank.
    pub fn add(&mut self, title: &str, energy_required: EnergyLevel) -> Option<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = Task::new(title, energy_required);
        debug!(id = %task.id, energy = %energy_required, "task added");
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Flip the completion flag. Returns `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "task toggled");
        Some(task)
    }

    /// Remove the task with `id`, returning it.
    pub fn delete(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        debug!(id, "task deleted");
        Some(self.tasks.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Resolve a full id or a unique id prefix.
    pub fn resolve_id(&self, prefix: &str) -> Result<String, ValidationError> {
        if let Some(task) = self.get(prefix) {
            return Ok(task.id.clone());
        }
        let matches: Vec<&Task> = if prefix.is_empty() {
            Vec::new()
        } else {
            self.tasks.iter().filter(|t| t.id.starts_with(prefix)).collect()
        };
        match matches.as_slice() {
            [only] => Ok(only.id.clone()),
            [] => Err(ValidationError::TaskNotFound(prefix.to_string())),
            many => Err(ValidationError::AmbiguousTaskId {
                prefix: prefix.to_string(),
                matches: many.len(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
