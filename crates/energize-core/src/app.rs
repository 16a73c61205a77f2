//! Application state.
//!
//! `App` holds the user's current energy, the task list and the sensory-mode
//! preference. It is built once from a [`StateStore`] and passed by reference
//! to whatever needs it. Every mutation persists the record it changed.
//! Storage failures are logged and never undo or block the in-memory change.

use tracing::{debug, warn};

use crate::energy::{match_tasks, Buckets, EnergyLevel};
use crate::error::Result;
use crate::storage::{KvStore, StateStore};
use crate::task::{Task, TaskStore};

pub struct App<S: KvStore> {
    store: StateStore<S>,
    current_energy: EnergyLevel,
    tasks: TaskStore,
    sensory_mode: bool,
}

impl<S: KvStore> App<S> {
    /// Restore state from `store`, falling back to defaults per record.
    pub fn load(store: StateStore<S>) -> Self {
        let persisted = store.load();
        let app = Self {
            current_energy: persisted.current_energy.unwrap_or_default(),
            tasks: TaskStore::from_tasks(persisted.tasks.unwrap_or_default()),
            sensory_mode: persisted.sensory_mode.unwrap_or(false),
            store,
        };
        debug!(
            energy = %app.current_energy,
            tasks = app.tasks.len(),
            sensory_mode = app.sensory_mode,
            "state loaded"
        );
        app
    }

    pub fn current_energy(&self) -> EnergyLevel {
        self.current_energy
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn sensory_mode(&self) -> bool {
        self.sensory_mode
    }

    /// Partition the tasks for the current energy.
    pub fn buckets(&self) -> Buckets {
        self.buckets_for(self.current_energy)
    }

    /// Partition the tasks for an arbitrary energy without changing state.
    pub fn buckets_for(&self, energy: EnergyLevel) -> Buckets {
        match_tasks(self.tasks.as_slice(), energy)
    }

    pub fn set_energy(&mut self, energy: EnergyLevel) {
        debug!(from = %self.current_energy, to = %energy, "energy changed");
        self.current_energy = energy;
        log_failure("currentEnergy", self.store.save_energy(energy));
    }

    /// Capture a task. Blank titles are ignored and return `None`.
    pub fn add_task(&mut self, title: &str, energy_required: EnergyLevel) -> Option<Task> {
        let task = self.tasks.add(title, energy_required)?.clone();
        self.persist_tasks();
        Some(task)
    }

    /// Flip a task's completion flag. Returns the updated task.
    pub fn toggle_task(&mut self, id: &str) -> Option<Task> {
        let task = self.tasks.toggle(id)?.clone();
        self.persist_tasks();
        Some(task)
    }

    pub fn delete_task(&mut self, id: &str) -> Option<Task> {
        let task = self.tasks.delete(id)?;
        self.persist_tasks();
        Some(task)
    }

    pub fn set_sensory_mode(&mut self, enabled: bool) {
        self.sensory_mode = enabled;
        log_failure("sensoryMode", self.store.save_sensory_mode(enabled));
    }

    /// Flip sensory mode and return the new value.
    pub fn toggle_sensory_mode(&mut self) -> bool {
        self.set_sensory_mode(!self.sensory_mode);
        self.sensory_mode
    }

    fn persist_tasks(&self) {
        log_failure("tasks", self.store.save_tasks(self.tasks.as_slice()));
    }
}

fn log_failure(key: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!(key, error = %e, "failed to persist state");
    }
}
